//! Generated issue seed types.
//!
//! This module defines the output types from issue generation. These types are
//! independent of the client's domain types to avoid circular dependencies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Issue category for a generated issue.
///
/// Mirrors the client's `Category` enum without creating a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategorySeed {
    /// Road surface damage.
    Potholes,
    /// Dumped or uncollected rubbish.
    Waste,
    /// Broken street lighting.
    Lights,
    /// General safety hazards.
    Safety,
}

impl CategorySeed {
    /// Every category in display order.
    pub const ALL: [Self; 4] = [Self::Potholes, Self::Waste, Self::Lights, Self::Safety];

    /// Returns the canonical category name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Potholes => "Potholes",
            Self::Waste => "Waste",
            Self::Lights => "Lights",
            Self::Safety => "Safety",
        }
    }

    /// Parses a canonical category name.
    ///
    /// Matching is exact; `"potholes"` is not accepted.
    ///
    /// ```
    /// use example_data::CategorySeed;
    ///
    /// assert_eq!(CategorySeed::parse("Waste"), Some(CategorySeed::Waste));
    /// assert_eq!(CategorySeed::parse("Warning"), None);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == value)
    }
}

impl fmt::Display for CategorySeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated example issue record.
///
/// Carries everything the client needs to build an issue except the
/// identifier, which the client's store assigns.
///
/// # Example
///
/// ```
/// use example_data::{CategorySeed, ExampleIssueSeed};
///
/// let issue = ExampleIssueSeed {
///     category: CategorySeed::Lights,
///     latitude: 37.7749,
///     longitude: -122.4194,
///     title: "Street light out".to_owned(),
///     description: "The lamp on the corner has been dark for a week.".to_owned(),
///     reported_by: "Ada L.".to_owned(),
///     age_minutes: 42,
///     image: "/images/lights.jpg".to_owned(),
/// };
///
/// assert_eq!(issue.category.as_str(), "Lights");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleIssueSeed {
    /// Issue category.
    pub category: CategorySeed,
    /// Latitude in WGS84 degrees.
    pub latitude: f64,
    /// Longitude in WGS84 degrees.
    pub longitude: f64,
    /// Short headline.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Reporter label shown next to the issue.
    pub reported_by: String,
    /// How long ago the issue was reported, in minutes.
    pub age_minutes: u32,
    /// Placeholder image reference for the issue photo.
    pub image: String,
}
