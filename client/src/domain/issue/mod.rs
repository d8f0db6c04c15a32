//! Reported civic issues and their value types.

mod category;
mod coordinates;
mod photo;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use category::{Category, CategoryDetails, CategoryParseError};
pub use coordinates::{Coordinates, CoordinatesValidationError};
pub use photo::{Photo, PhotoError, PhotoPayload};

/// Label recorded as the reporter of locally submitted issues.
pub const LOCAL_REPORTER: &str = "You";

/// Store-assigned issue identifier.
///
/// Identifiers are handed out in increasing order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(u64);

impl IssueId {
    pub(crate) const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle status of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IssueStatus {
    /// Reported but not yet picked up.
    #[default]
    Pending,
    /// Being worked on.
    InProgress,
    /// Fixed.
    Resolved,
}

impl IssueStatus {
    /// Display label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to record an issue except its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueDraft {
    /// Chosen category.
    pub category: Category,
    /// Where the issue was observed.
    pub location: Coordinates,
    /// Short headline.
    pub title: String,
    /// Longer explanation.
    pub description: String,
    /// Reporter label.
    pub reported_by: String,
    /// Submission time.
    pub created_at: DateTime<Utc>,
    /// Evidence photo.
    pub photo: Photo,
}

impl IssueDraft {
    /// Draft a locally submitted report using the category's canned text.
    pub fn for_report(
        category: Category,
        location: Coordinates,
        photo: Photo,
        created_at: DateTime<Utc>,
    ) -> Self {
        let details = category.details();
        Self {
            category,
            location,
            title: details.title.to_owned(),
            description: details.description.to_owned(),
            reported_by: LOCAL_REPORTER.to_owned(),
            created_at,
            photo,
        }
    }
}

/// A recorded issue.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    id: IssueId,
    category: Category,
    location: Coordinates,
    title: String,
    description: String,
    status: IssueStatus,
    reward_amount: u32,
    reported_by: String,
    created_at: DateTime<Utc>,
    photo: Photo,
}

impl Issue {
    /// Record a draft under `id`. New issues always start as pending and earn
    /// the category's reward.
    pub(crate) fn from_draft(id: IssueId, draft: IssueDraft) -> Self {
        let IssueDraft {
            category,
            location,
            title,
            description,
            reported_by,
            created_at,
            photo,
        } = draft;
        Self {
            id,
            category,
            location,
            title,
            description,
            status: IssueStatus::Pending,
            reward_amount: category.reward(),
            reported_by,
            created_at,
            photo,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> IssueId {
        self.id
    }

    /// Reported category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Where the issue was observed.
    pub fn location(&self) -> Coordinates {
        self.location
    }

    /// Short headline.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Longer explanation.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Current lifecycle status.
    pub fn status(&self) -> IssueStatus {
        self.status
    }

    /// Tokens earned by the reporter.
    pub fn reward_amount(&self) -> u32 {
        self.reward_amount
    }

    /// Reporter label, `"You"` for local reports.
    pub fn reported_by(&self) -> &str {
        &self.reported_by
    }

    /// Submission time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Evidence photo.
    pub fn photo(&self) -> &Photo {
        &self.photo
    }
}

#[cfg(test)]
mod tests;
