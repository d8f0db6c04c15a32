//! In-memory, newest-first issue collection.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use super::issue::{Category, CategoryParseError, Issue, IssueDraft, IssueId};

/// Category filter applied when listing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueFilter {
    /// Every issue.
    #[default]
    All,
    /// Only issues in one category.
    Category(Category),
}

impl IssueFilter {
    /// Label shown on the filter control.
    pub const ALL_LABEL: &'static str = "All";

    /// Whether `issue` passes this filter.
    pub fn matches(self, issue: &Issue) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => issue.category() == category,
        }
    }
}

impl fmt::Display for IssueFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL_LABEL),
            Self::Category(category) => category.fmt(f),
        }
    }
}

impl From<Category> for IssueFilter {
    fn from(value: Category) -> Self {
        Self::Category(value)
    }
}

impl FromStr for IssueFilter {
    type Err = CategoryParseError;

    /// `"All"` and blank input select everything; anything else must name a
    /// category.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == Self::ALL_LABEL || value.trim().is_empty() {
            return Ok(Self::All);
        }
        value.parse().map(Self::Category)
    }
}

/// Ordered collection of every issue known to the client.
///
/// The most recently inserted issue is always first, identifiers are unique
/// and the store never shrinks.
#[derive(Debug, Clone)]
pub struct IssueStore {
    issues: VecDeque<Issue>,
    next_id: u64,
}

impl Default for IssueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            issues: VecDeque::new(),
            next_id: 1,
        }
    }

    /// A store pre-populated with `drafts`, ordered so the latest
    /// `created_at` comes first.
    ///
    /// # Examples
    /// ```
    /// use chrono::{Duration, Utc};
    /// use impact_client::domain::{Category, Coordinates, IssueDraft, IssueStore, Photo};
    ///
    /// let now = Utc::now();
    /// let photo = Photo::from_reference("/images/potholes.jpg").expect("reference");
    /// let old = IssueDraft::for_report(
    ///     Category::Potholes,
    ///     Coordinates::FALLBACK,
    ///     photo.clone(),
    ///     now - Duration::hours(2),
    /// );
    /// let new = IssueDraft::for_report(Category::Waste, Coordinates::FALLBACK, photo, now);
    ///
    /// let store = IssueStore::seeded([new, old]);
    /// let first = store.list(Default::default()).next().expect("one issue");
    /// assert_eq!(first.category(), Category::Waste);
    /// ```
    pub fn seeded(drafts: impl IntoIterator<Item = IssueDraft>) -> Self {
        let mut ordered: Vec<IssueDraft> = drafts.into_iter().collect();
        ordered.sort_by_key(|draft| draft.created_at);
        let mut store = Self::new();
        for draft in ordered {
            store.insert(draft);
        }
        store
    }

    /// Record `draft` at the front and return a copy of the stored issue.
    pub(crate) fn insert(&mut self, draft: IssueDraft) -> Issue {
        let id = IssueId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        let issue = Issue::from_draft(id, draft);
        self.issues.push_front(issue.clone());
        issue
    }

    /// Issues passing `filter`, newest first.
    ///
    /// The iterator is lazy and cloneable, so callers can count and render
    /// from the same view.
    pub fn list(&self, filter: IssueFilter) -> impl Iterator<Item = &Issue> + Clone + '_ {
        self.issues
            .iter()
            .filter(move |issue| filter.matches(issue))
    }

    /// Look an issue up by identifier.
    pub fn get(&self, id: IssueId) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.id() == id)
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}
