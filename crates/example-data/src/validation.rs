//! Validation rules for generated demo data.
//!
//! # Validation Rules
//!
//! - Reporter labels are 3 to 32 characters of letters, digits, spaces,
//!   underscores, or full stops, and must not be whitespace-only
//! - Seed radii are between 1 and [`MAX_RADIUS_METRES`] metres
//! - Centres are finite WGS84 coordinates

/// Minimum allowed length for a reporter label.
pub const REPORTER_LABEL_MIN: usize = 3;

/// Maximum allowed length for a reporter label.
pub const REPORTER_LABEL_MAX: usize = 32;

/// Largest scatter radius a seed may request.
pub const MAX_RADIUS_METRES: u32 = 50_000;

/// Validates a reporter label.
///
/// # Examples
///
/// ```
/// use example_data::is_valid_reporter_label;
///
/// assert!(is_valid_reporter_label("Ada L."));
/// assert!(!is_valid_reporter_label("ab"));
/// assert!(!is_valid_reporter_label("O'Brien"));
/// assert!(!is_valid_reporter_label("   "));
/// ```
#[must_use]
pub fn is_valid_reporter_label(label: &str) -> bool {
    let length = label.chars().count();
    if !(REPORTER_LABEL_MIN..=REPORTER_LABEL_MAX).contains(&length) {
        return false;
    }
    if label.trim().is_empty() {
        return false;
    }
    label.chars().all(is_valid_reporter_label_char)
}

const fn is_valid_reporter_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '_' || c == '.'
}

/// Replaces characters a reporter label may not contain with underscores.
///
/// Length is not enforced here.
#[must_use]
pub(crate) fn sanitize_reporter_label(label: &str) -> String {
    label
        .chars()
        .map(|c| {
            if is_valid_reporter_label_char(c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Returns `true` when a seed radius is usable for scattering issues.
#[must_use]
pub const fn is_valid_radius(radius_metres: u32) -> bool {
    radius_metres > 0 && radius_metres <= MAX_RADIUS_METRES
}

/// Returns `true` when the pair is a finite WGS84 coordinate.
#[must_use]
pub fn is_valid_centre(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}

#[cfg(test)]
mod tests {
    //! Covers reporter label, radius, and centre validation.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Ada", true)]
    #[case("Ada L.", true)]
    #[case("user_123", true)]
    #[case("ab", false)]
    #[case("", false)]
    #[case("O'Brien", false)]
    #[case("Marie-Claire", false)]
    #[case("   ", false)]
    fn validates_reporter_labels(#[case] label: &str, #[case] expected: bool) {
        assert_eq!(is_valid_reporter_label(label), expected);
    }

    #[test]
    fn rejects_labels_exceeding_max_length() {
        let long_label = "A".repeat(REPORTER_LABEL_MAX + 1);
        assert!(!is_valid_reporter_label(&long_label));
    }

    #[test]
    fn sanitize_replaces_invalid_characters() {
        assert_eq!(sanitize_reporter_label("O'Brien-Smith"), "O_Brien_Smith");
        assert_eq!(sanitize_reporter_label("Ada L."), "Ada L.");
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(500, true)]
    #[case(MAX_RADIUS_METRES, true)]
    #[case(MAX_RADIUS_METRES + 1, false)]
    fn validates_radius(#[case] radius: u32, #[case] expected: bool) {
        assert_eq!(is_valid_radius(radius), expected);
    }

    #[rstest]
    #[case(37.7749, -122.4194, true)]
    #[case(90.0, 180.0, true)]
    #[case(90.5, 0.0, false)]
    #[case(0.0, -180.5, false)]
    #[case(f64::NAN, 0.0, false)]
    #[case(0.0, f64::INFINITY, false)]
    fn validates_centre(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: bool) {
        assert_eq!(is_valid_centre(latitude, longitude), expected);
    }
}
