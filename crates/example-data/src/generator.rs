//! Deterministic issue generation from seed definitions.
//!
//! Issues are scattered uniformly over a disc around a caller-supplied
//! centre. The same seed value always produces identical output.

use std::f64::consts::TAU;

use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::registry::{SeedDefinition, SeedRegistry};
use crate::seed::{CategorySeed, ExampleIssueSeed};
use crate::validation::{
    REPORTER_LABEL_MAX, is_valid_centre, is_valid_reporter_label, sanitize_reporter_label,
};

/// Maximum number of attempts to generate a valid reporter label.
const MAX_LABEL_ATTEMPTS: usize = 100;

/// Oldest generated report, in minutes (one week).
const MAX_AGE_MINUTES: u32 = 7 * 24 * 60;

/// Metres spanned by one degree of latitude.
const METRES_PER_DEGREE: f64 = 111_320.0;

/// Lower bound on the longitude scale factor so scatter near the poles stays
/// finite.
const MIN_LONGITUDE_SCALE: f64 = 0.01;

const POTHOLE_TITLES: [&str; 3] = ["Deep pothole", "Cracked road surface", "Sunken drain cover"];
const POTHOLE_DESCRIPTIONS: [&str; 2] = [
    "Cars are swerving to avoid a hole in the lane.",
    "The surface has broken up and is getting worse after rain.",
];
const WASTE_TITLES: [&str; 3] = ["Overflowing bin", "Fly-tipped furniture", "Litter on pavement"];
const WASTE_DESCRIPTIONS: [&str; 2] = [
    "Rubbish has been piling up here for several days.",
    "Bags have split and waste is spreading along the street.",
];
const LIGHT_TITLES: [&str; 3] = ["Street light out", "Flickering lamp", "Dark underpass"];
const LIGHT_DESCRIPTIONS: [&str; 2] = [
    "The lamp on this corner has been dark all week.",
    "The light keeps cutting out, leaving the path unlit.",
];
const SAFETY_TITLES: [&str; 3] = ["Broken railing", "Exposed wiring", "Missing crossing sign"];
const SAFETY_DESCRIPTIONS: [&str; 2] = [
    "This is a hazard for anyone walking past at night.",
    "Children use this route to school and it needs attention.",
];

/// Generates example issues from a seed definition around `centre`.
///
/// `centre` is a `(latitude, longitude)` pair. The RNG is seeded from the
/// seed definition, so the same inputs produce identical issues.
///
/// # Errors
///
/// Returns [`GenerationError`] if the centre is not a valid coordinate or a
/// reporter label cannot be produced.
///
/// # Example
///
/// ```
/// use example_data::{SeedRegistry, generate_example_issues};
///
/// let json = r#"{
///     "version": 1,
///     "categories": ["Potholes", "Lights"],
///     "seeds": [{"name": "test", "seed": 42, "issueCount": 3, "radiusMetres": 500}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid");
/// let seed_def = registry.find_seed("test").expect("found");
/// let issues = generate_example_issues(&registry, seed_def, (37.7749, -122.4194))
///     .expect("generated");
///
/// assert_eq!(issues.len(), 3);
/// let again = generate_example_issues(&registry, seed_def, (37.7749, -122.4194))
///     .expect("generated");
/// assert_eq!(issues, again);
/// ```
pub fn generate_example_issues(
    registry: &SeedRegistry,
    seed_def: &SeedDefinition,
    centre: (f64, f64),
) -> Result<Vec<ExampleIssueSeed>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    generate_example_issues_with_rng(
        &mut rng,
        registry.categories(),
        seed_def.issue_count(),
        seed_def.radius_metres(),
        centre,
    )
}

/// Generates `count` issues using a caller-supplied random source.
///
/// Tests can pass any seeded [`Rng`] to obtain a fixed sequence.
///
/// # Errors
///
/// Returns [`GenerationError`] if `categories` is empty, the centre is not a
/// valid coordinate, or a reporter label cannot be produced.
pub fn generate_example_issues_with_rng<R: Rng>(
    rng: &mut R,
    categories: &[CategorySeed],
    count: usize,
    radius_metres: u32,
    centre: (f64, f64),
) -> Result<Vec<ExampleIssueSeed>, GenerationError> {
    let (latitude, longitude) = centre;
    if !is_valid_centre(latitude, longitude) {
        return Err(GenerationError::InvalidCentre {
            latitude,
            longitude,
        });
    }
    if categories.is_empty() {
        return Err(GenerationError::NoCategories);
    }

    (0..count)
        .map(|_| generate_single_issue(rng, categories, radius_metres, centre))
        .collect()
}

fn generate_single_issue<R: Rng>(
    rng: &mut R,
    categories: &[CategorySeed],
    radius_metres: u32,
    centre: (f64, f64),
) -> Result<ExampleIssueSeed, GenerationError> {
    let category = *categories.choose(rng).ok_or(GenerationError::NoCategories)?;
    let (latitude, longitude) = scatter_point(rng, centre, radius_metres);
    let (titles, descriptions) = text_tables(category);
    let title = pick(rng, titles);
    let description = pick(rng, descriptions);
    let reported_by = generate_reporter_label(rng)?;
    let age_minutes = rng.random_range(0..=MAX_AGE_MINUTES);

    Ok(ExampleIssueSeed {
        category,
        latitude,
        longitude,
        title,
        description,
        reported_by,
        age_minutes,
        image: format!("/images/{}.jpg", category.as_str().to_ascii_lowercase()),
    })
}

fn text_tables(category: CategorySeed) -> (&'static [&'static str], &'static [&'static str]) {
    match category {
        CategorySeed::Potholes => (&POTHOLE_TITLES, &POTHOLE_DESCRIPTIONS),
        CategorySeed::Waste => (&WASTE_TITLES, &WASTE_DESCRIPTIONS),
        CategorySeed::Lights => (&LIGHT_TITLES, &LIGHT_DESCRIPTIONS),
        CategorySeed::Safety => (&SAFETY_TITLES, &SAFETY_DESCRIPTIONS),
    }
}

fn pick<R: Rng>(rng: &mut R, options: &[&str]) -> String {
    options.choose(rng).copied().unwrap_or_default().to_owned()
}

/// Picks a point uniformly over the disc of `radius_metres` around `centre`.
///
/// Taking the square root of the radial draw keeps the density uniform over
/// area instead of clustering at the centre.
#[expect(
    clippy::float_arithmetic,
    reason = "coordinate offsets are inherently floating point"
)]
fn scatter_point<R: Rng>(rng: &mut R, centre: (f64, f64), radius_metres: u32) -> (f64, f64) {
    let (latitude, longitude) = centre;
    let distance = f64::from(radius_metres) * rng.random::<f64>().sqrt();
    let bearing = rng.random_range(0.0..TAU);

    let north = distance * bearing.cos();
    let east = distance * bearing.sin();
    let scale = latitude.to_radians().cos().max(MIN_LONGITUDE_SCALE);

    let scattered_latitude = (latitude + north / METRES_PER_DEGREE).clamp(-90.0, 90.0);
    let scattered_longitude = wrap_longitude(longitude + east / (METRES_PER_DEGREE * scale));
    (scattered_latitude, scattered_longitude)
}

#[expect(
    clippy::float_arithmetic,
    reason = "longitude wrapping adds or removes a full turn"
)]
fn wrap_longitude(longitude: f64) -> f64 {
    if longitude > 180.0 {
        longitude - 360.0
    } else if longitude < -180.0 {
        longitude + 360.0
    } else {
        longitude
    }
}

/// Builds a reporter label such as `"Ada L."` from fake name data.
fn generate_reporter_label<R: Rng>(rng: &mut R) -> Result<String, GenerationError> {
    for _ in 0..MAX_LABEL_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);
        let initial = last.chars().next().unwrap_or('X');

        let sanitized = sanitize_reporter_label(&format!("{first} {initial}."));
        let truncated: String = sanitized.chars().take(REPORTER_LABEL_MAX).collect();

        if is_valid_reporter_label(&truncated) {
            return Ok(truncated);
        }
    }

    Err(GenerationError::ReporterLabelGenerationFailed {
        max_attempts: MAX_LABEL_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    const CENTRE: (f64, f64) = (37.7749, -122.4194);

    const TEST_REGISTRY_JSON: &str = r#"{
        "version": 1,
        "categories": ["Potholes", "Waste", "Lights", "Safety"],
        "seeds": [
            {"name": "test-seed", "seed": 42, "issueCount": 20, "radiusMetres": 1000},
            {"name": "small-seed", "seed": 123, "issueCount": 2, "radiusMetres": 50}
        ]
    }"#;

    #[fixture]
    fn test_registry() -> SeedRegistry {
        SeedRegistry::from_json(TEST_REGISTRY_JSON).expect("valid test registry")
    }

    fn generate(registry: &SeedRegistry, name: &str) -> Vec<ExampleIssueSeed> {
        let seed_def = registry.find_seed(name).expect("seed should be found");
        generate_example_issues(registry, seed_def, CENTRE).expect("generation should succeed")
    }

    /// Rough great-circle distance in metres, adequate for small offsets.
    #[expect(clippy::float_arithmetic, reason = "test geometry")]
    fn approx_distance_metres(a: (f64, f64), b: (f64, f64)) -> f64 {
        let north = (a.0 - b.0) * METRES_PER_DEGREE;
        let east = (a.1 - b.1) * METRES_PER_DEGREE * b.0.to_radians().cos();
        north.hypot(east)
    }

    #[rstest]
    fn generates_requested_issue_count(test_registry: SeedRegistry) {
        assert_eq!(generate(&test_registry, "test-seed").len(), 20);
        assert_eq!(generate(&test_registry, "small-seed").len(), 2);
    }

    #[rstest]
    fn generation_is_deterministic(test_registry: SeedRegistry) {
        assert_eq!(
            generate(&test_registry, "test-seed"),
            generate(&test_registry, "test-seed")
        );
    }

    #[rstest]
    fn different_seeds_produce_different_issues(test_registry: SeedRegistry) {
        let first = generate(&test_registry, "test-seed");
        let second = generate(&test_registry, "small-seed");

        assert_ne!(first.first(), second.first());
    }

    #[rstest]
    fn issues_stay_within_radius(test_registry: SeedRegistry) {
        for issue in generate(&test_registry, "test-seed") {
            let distance = approx_distance_metres((issue.latitude, issue.longitude), CENTRE);
            // A little slack for the flat-earth approximation.
            assert!(distance <= 1001.0, "issue {distance} m from centre");
        }
    }

    #[rstest]
    fn reporter_labels_are_valid(test_registry: SeedRegistry) {
        for issue in generate(&test_registry, "test-seed") {
            assert!(
                is_valid_reporter_label(&issue.reported_by),
                "invalid label {}",
                issue.reported_by
            );
        }
    }

    #[rstest]
    fn titles_come_from_the_category_table(test_registry: SeedRegistry) {
        for issue in generate(&test_registry, "test-seed") {
            let (titles, descriptions) = text_tables(issue.category);
            assert!(titles.contains(&issue.title.as_str()));
            assert!(descriptions.contains(&issue.description.as_str()));
            assert!(issue.age_minutes <= MAX_AGE_MINUTES);
        }
    }

    #[test]
    fn only_registry_categories_are_used() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let issues =
            generate_example_issues_with_rng(&mut rng, &[CategorySeed::Waste], 10, 100, CENTRE)
                .expect("generated");

        assert!(issues.iter().all(|i| i.category == CategorySeed::Waste));
    }

    #[test]
    fn injected_rng_gives_a_fixed_sequence() {
        let mut first_rng = ChaCha8Rng::seed_from_u64(99);
        let mut second_rng = ChaCha8Rng::seed_from_u64(99);

        let first =
            generate_example_issues_with_rng(&mut first_rng, &CategorySeed::ALL, 4, 300, CENTRE)
                .expect("generated");
        let second =
            generate_example_issues_with_rng(&mut second_rng, &CategorySeed::ALL, 4, 300, CENTRE)
                .expect("generated");

        assert_eq!(first, second);
    }

    #[rstest]
    #[case((91.0, 0.0))]
    #[case((0.0, 181.0))]
    #[case((f64::NAN, 0.0))]
    fn rejects_invalid_centre(#[case] centre: (f64, f64)) {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = generate_example_issues_with_rng(&mut rng, &CategorySeed::ALL, 1, 10, centre);

        assert!(matches!(result, Err(GenerationError::InvalidCentre { .. })));
    }

    #[test]
    fn rejects_empty_category_list() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = generate_example_issues_with_rng(&mut rng, &[], 1, 10, CENTRE);

        assert_eq!(result, Err(GenerationError::NoCategories));
    }

    #[rstest]
    #[case(181.0, -179.0)]
    #[case(-181.0, 179.0)]
    #[case(12.5, 12.5)]
    fn wraps_longitude_into_range(#[case] raw: f64, #[case] expected: f64) {
        assert!((wrap_longitude(raw) - expected).abs() < 1e-9);
    }
}
