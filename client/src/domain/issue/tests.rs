//! Unit tests for issue value types.

use chrono::{TimeZone, Utc};
use rstest::rstest;

use super::*;

fn sample_photo() -> Photo {
    Photo::from_bytes(vec![0xFF, 0xD8, 0xFF]).expect("non-empty bytes")
}

#[rstest]
#[case(Category::Potholes, "🚧", 50)]
#[case(Category::Waste, "🗑️", 75)]
#[case(Category::Lights, "💡", 40)]
#[case(Category::Safety, "⚠️", 60)]
fn category_table_matches_fixed_values(
    #[case] category: Category,
    #[case] icon: &str,
    #[case] reward: u32,
) {
    assert_eq!(category.icon(), icon);
    assert_eq!(category.reward(), reward);
    assert!(!category.details().title.is_empty());
    assert!(!category.details().description.is_empty());
}

#[rstest]
#[case("Potholes", Category::Potholes)]
#[case("Waste", Category::Waste)]
#[case("Lights", Category::Lights)]
#[case("Safety", Category::Safety)]
fn parses_canonical_names(#[case] raw: &str, #[case] expected: Category) {
    assert_eq!(raw.parse::<Category>(), Ok(expected));
    assert_eq!(expected.to_string(), raw);
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_category_is_not_selected(#[case] raw: &str) {
    assert_eq!(raw.parse::<Category>(), Err(CategoryParseError::NotSelected));
}

#[rstest]
#[case("Graffiti")]
#[case("potholes")]
fn unknown_category_is_rejected(#[case] raw: &str) {
    assert_eq!(
        raw.parse::<Category>(),
        Err(CategoryParseError::Unknown {
            value: raw.to_owned()
        })
    );
}

#[rstest]
#[case(f64::NAN, 0.0, CoordinatesValidationError::NotFinite)]
#[case(90.5, 0.0, CoordinatesValidationError::LatitudeOutOfRange { latitude: 90.5 })]
#[case(0.0, -181.0, CoordinatesValidationError::LongitudeOutOfRange { longitude: -181.0 })]
fn rejects_invalid_coordinates(
    #[case] latitude: f64,
    #[case] longitude: f64,
    #[case] expected: CoordinatesValidationError,
) {
    assert_eq!(Coordinates::new(latitude, longitude), Err(expected));
}

#[test]
fn fallback_location_is_san_francisco() {
    assert_eq!(Coordinates::FALLBACK.latitude(), 37.7749);
    assert_eq!(Coordinates::FALLBACK.longitude(), -122.4194);
}

#[test]
fn coordinates_deserialise_through_validation() {
    let ok: Coordinates =
        serde_json::from_str(r#"{"latitude":40.0,"longitude":-73.0}"#).expect("valid");
    assert_eq!(ok, Coordinates::new(40.0, -73.0).expect("valid"));

    let err = serde_json::from_str::<Coordinates>(r#"{"latitude":140.0,"longitude":0.0}"#);
    assert!(err.is_err());
}

#[rstest]
#[case(PhotoPayload::Bytes(Vec::new()), PhotoError::Empty)]
#[case(PhotoPayload::DataUrl(String::new()), PhotoError::Empty)]
#[case(PhotoPayload::DataUrl("data:image/png;base64,".into()), PhotoError::Empty)]
#[case(PhotoPayload::DataUrl("data:image/png;base64,   ".into()), PhotoError::Empty)]
#[case(PhotoPayload::DataUrl("image/png;base64,AAAA".into()), PhotoError::MalformedDataUrl)]
#[case(PhotoPayload::DataUrl("data:image/png;base64".into()), PhotoError::MalformedDataUrl)]
fn rejects_unusable_photos(#[case] payload: PhotoPayload, #[case] expected: PhotoError) {
    assert_eq!(Photo::try_from(payload), Err(expected));
}

#[test]
fn accepts_binary_and_data_url_photos() {
    let binary = Photo::try_from(PhotoPayload::Bytes(vec![1, 2, 3])).expect("bytes");
    assert_eq!(binary.bytes(), Some([1_u8, 2, 3].as_slice()));
    assert!(!binary.is_data_url());

    let url = "data:image/jpeg;base64,/9j/4AAQ";
    let encoded = Photo::try_from(PhotoPayload::DataUrl(url.to_owned())).expect("data url");
    assert!(encoded.is_data_url());
    assert_eq!(encoded.url(), Some(url));
}

#[test]
fn photo_debug_hides_payload() {
    let photo = Photo::from_bytes(vec![7; 1024]).expect("bytes");
    assert_eq!(format!("{photo:?}"), "Photo(bytes, 1024 B)");
}

#[test]
fn report_draft_uses_category_text_and_local_reporter() {
    let location = Coordinates::new(40.0, -73.0).expect("valid");
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().expect("valid time");

    let draft = IssueDraft::for_report(Category::Lights, location, sample_photo(), at);

    assert_eq!(draft.title, "Broken street light");
    assert_eq!(draft.reported_by, LOCAL_REPORTER);
    assert_eq!(draft.created_at, at);
}

#[test]
fn recorded_issue_is_pending_with_category_reward() {
    let location = Coordinates::new(51.5, -0.12).expect("valid");
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().expect("valid time");
    let draft = IssueDraft::for_report(Category::Waste, location, sample_photo(), at);

    let issue = Issue::from_draft(IssueId::new(9), draft);

    assert_eq!(issue.id().get(), 9);
    assert_eq!(issue.id().to_string(), "#9");
    assert_eq!(issue.status(), IssueStatus::Pending);
    assert_eq!(issue.reward_amount(), 75);
    assert_eq!(issue.location(), location);
}
