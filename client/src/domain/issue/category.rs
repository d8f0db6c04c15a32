//! Issue categories and the fixed per-category lookup table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the fixed issue categories a reporter can pick.
///
/// Serialises as the canonical name (`"Potholes"`, `"Waste"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Road surface damage.
    Potholes,
    /// Dumped or uncollected rubbish.
    Waste,
    /// Broken street lighting.
    Lights,
    /// General safety hazards.
    Safety,
}

/// Presentation and reward data derived from a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDetails {
    /// Marker and list icon.
    pub icon: &'static str,
    /// IMPACT tokens awarded for a report.
    pub reward: u32,
    /// Title given to reports in this category.
    pub title: &'static str,
    /// Description given to reports in this category.
    pub description: &'static str,
}

const POTHOLES: CategoryDetails = CategoryDetails {
    icon: "🚧",
    reward: 50,
    title: "Pothole reported",
    description: "A pothole on this road needs repair before it damages vehicles.",
};

const WASTE: CategoryDetails = CategoryDetails {
    icon: "🗑️",
    reward: 75,
    title: "Illegal dumping",
    description: "Waste has been left here and needs to be collected.",
};

const LIGHTS: CategoryDetails = CategoryDetails {
    icon: "💡",
    reward: 40,
    title: "Broken street light",
    description: "A street light here is out and the area is poorly lit at night.",
};

const SAFETY: CategoryDetails = CategoryDetails {
    icon: "⚠️",
    reward: 60,
    title: "Safety hazard",
    description: "A hazard here puts pedestrians or drivers at risk.",
};

impl Category {
    /// Every category in picker order.
    pub const ALL: [Self; 4] = [Self::Potholes, Self::Waste, Self::Lights, Self::Safety];

    /// Canonical category name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Potholes => "Potholes",
            Self::Waste => "Waste",
            Self::Lights => "Lights",
            Self::Safety => "Safety",
        }
    }

    /// Lookup-table entry for this category.
    pub const fn details(self) -> CategoryDetails {
        match self {
            Self::Potholes => POTHOLES,
            Self::Waste => WASTE,
            Self::Lights => LIGHTS,
            Self::Safety => SAFETY,
        }
    }

    /// Reward paid for a report in this category.
    ///
    /// ```
    /// use impact_client::domain::Category;
    ///
    /// assert_eq!(Category::Potholes.reward(), 50);
    /// assert_eq!(Category::Waste.reward(), 75);
    /// ```
    pub const fn reward(self) -> u32 {
        self.details().reward
    }

    /// Icon shown on the map marker.
    pub const fn icon(self) -> &'static str {
        self.details().icon
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a raw category value cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryParseError {
    /// Nothing has been picked yet.
    #[error("no category selected")]
    NotSelected,
    /// The value is not one of the fixed categories.
    #[error("unknown category '{value}'")]
    Unknown {
        /// The rejected value.
        value: String,
    },
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().is_empty() {
            return Err(CategoryParseError::NotSelected);
        }
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| CategoryParseError::Unknown {
                value: value.to_owned(),
            })
    }
}
