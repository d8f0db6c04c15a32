//! Validated WGS84 coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors raised by [`Coordinates::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinatesValidationError {
    /// A component is NaN or infinite.
    NotFinite,
    /// Latitude lies outside `[-90, 90]`.
    LatitudeOutOfRange {
        /// The rejected latitude.
        latitude: f64,
    },
    /// Longitude lies outside `[-180, 180]`.
    LongitudeOutOfRange {
        /// The rejected longitude.
        longitude: f64,
    },
}

impl fmt::Display for CoordinatesValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite => write!(f, "coordinates must be finite"),
            Self::LatitudeOutOfRange { latitude } => {
                write!(f, "latitude must be within [-90, 90] (got {latitude})")
            }
            Self::LongitudeOutOfRange { longitude } => {
                write!(f, "longitude must be within [-180, 180] (got {longitude})")
            }
        }
    }
}

impl std::error::Error for CoordinatesValidationError {}

/// A latitude/longitude pair.
///
/// ## Invariants
/// - Both components are finite.
/// - Latitude lies in `[-90, 90]` and longitude in `[-180, 180]`.
///
/// # Examples
/// ```
/// use impact_client::domain::Coordinates;
///
/// let position = Coordinates::new(40.0, -73.0).expect("valid coordinates");
/// assert_eq!(position.latitude(), 40.0);
/// assert!(Coordinates::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CoordinatesDto", into = "CoordinatesDto")]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Substituted whenever live geolocation is unavailable (San Francisco).
    pub const FALLBACK: Self = Self {
        latitude: 37.7749,
        longitude: -122.4194,
    };

    /// Validate and construct a coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinatesValidationError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinatesValidationError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinatesValidationError::LatitudeOutOfRange { latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinatesValidationError::LongitudeOutOfRange { longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct CoordinatesDto {
    latitude: f64,
    longitude: f64,
}

impl From<Coordinates> for CoordinatesDto {
    fn from(value: Coordinates) -> Self {
        Self {
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

impl TryFrom<CoordinatesDto> for Coordinates {
    type Error = CoordinatesValidationError;

    fn try_from(value: CoordinatesDto) -> Result<Self, Self::Error> {
        Self::new(value.latitude, value.longitude)
    }
}
