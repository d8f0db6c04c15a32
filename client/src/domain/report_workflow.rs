//! Issue reporting workflow.
//!
//! A report moves through photo capture, category selection and location
//! resolution before it is recorded:
//! - only one report runs at a time;
//! - invalid input leaves the current step unchanged;
//! - geolocation failures never fail a report, the fallback location is used;
//! - cancelling at any point records nothing.

use std::fmt;
use std::mem;
use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info, warn};

use super::issue::{
    Category, CategoryParseError, Coordinates, IssueDraft, IssueId, Photo, PhotoError, PhotoPayload,
};
use super::issue_store::IssueStore;
use super::ports::{GeolocationOptions, GeolocationProvider, ReportObserver};

/// Notice shown when a report falls back to the default location.
pub const FALLBACK_LOCATION_NOTICE: &str =
    "Using default location. Enable location access for better experience.";

/// Observable step of the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowStage {
    /// No report in progress.
    Idle,
    /// Waiting for a photo.
    PhotoCapture,
    /// Photo accepted, waiting for a category.
    CategorySelection,
    /// Category accepted, waiting for a position.
    LocationResolution,
    /// Issue being recorded and observers notified. Transient; the workflow
    /// returns to [`WorkflowStage::Idle`] before `resolve_location` returns.
    Completed,
}

impl WorkflowStage {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::PhotoCapture => "photo capture",
            Self::CategorySelection => "category selection",
            Self::LocationResolution => "location resolution",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation attempted against the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowAction {
    /// Start a report.
    Open,
    /// Hand over a captured photo.
    SupplyPhoto,
    /// Discard the photo and capture again.
    RetakePhoto,
    /// Pick the issue category.
    SelectCategory,
    /// Look up the current position and record the issue.
    ResolveLocation,
}

impl fmt::Display for WorkflowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Open => "open a report",
            Self::SupplyPhoto => "supply a photo",
            Self::RetakePhoto => "retake the photo",
            Self::SelectCategory => "select a category",
            Self::ResolveLocation => "resolve the location",
        };
        f.write_str(label)
    }
}

/// Errors returned by workflow operations. The workflow state is unchanged
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    /// A report is already in progress.
    #[error("a report is already in progress ({stage})")]
    AlreadyOpen {
        /// Stage of the report in progress.
        stage: WorkflowStage,
    },
    /// The operation is not valid in the current stage.
    #[error("cannot {action} during {stage}")]
    InvalidTransition {
        /// Current stage.
        stage: WorkflowStage,
        /// Rejected operation.
        action: WorkflowAction,
    },
    /// No photo, or an empty one, was supplied.
    #[error("photo is empty")]
    EmptyPhoto,
    /// The photo data URL could not be understood.
    #[error("photo data URL is malformed")]
    MalformedPhoto,
    /// No category was chosen.
    #[error("no category selected")]
    CategoryNotSelected,
    /// The chosen category does not exist.
    #[error("unknown category '{value}'")]
    UnknownCategory {
        /// Rejected raw value.
        value: String,
    },
}

impl From<PhotoError> for WorkflowError {
    fn from(value: PhotoError) -> Self {
        match value {
            PhotoError::Empty => Self::EmptyPhoto,
            PhotoError::MalformedDataUrl => Self::MalformedPhoto,
        }
    }
}

impl From<CategoryParseError> for WorkflowError {
    fn from(value: CategoryParseError) -> Self {
        match value {
            CategoryParseError::NotSelected => Self::CategoryNotSelected,
            CategoryParseError::Unknown { value } => Self::UnknownCategory { value },
        }
    }
}

/// Outcome of a completed report, handed to observers and the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportReceipt {
    /// Identifier of the recorded issue.
    pub issue_id: IssueId,
    /// Reported category.
    pub category: Category,
    /// Tokens earned.
    pub reward_amount: u32,
    /// Location recorded on the issue.
    pub location: Coordinates,
    /// Whether geolocation failed and the fallback was used.
    pub used_fallback_location: bool,
}

impl ReportReceipt {
    /// Confirmation headline.
    pub const fn headline(&self) -> &'static str {
        "Issue Reported!"
    }

    /// Reward line, e.g. `+50 IMPACT earned!`.
    pub fn reward_message(&self) -> String {
        format!("+{} IMPACT earned!", self.reward_amount)
    }

    /// Notice to show when the fallback location was used.
    pub const fn location_notice(&self) -> Option<&'static str> {
        if self.used_fallback_location {
            Some(FALLBACK_LOCATION_NOTICE)
        } else {
            None
        }
    }
}

#[derive(Debug, Default)]
enum WorkflowState {
    #[default]
    Idle,
    PhotoCapture,
    CategorySelection {
        photo: Photo,
    },
    LocationResolution {
        photo: Photo,
        category: Category,
    },
}

impl WorkflowState {
    const fn stage(&self) -> WorkflowStage {
        match self {
            Self::Idle => WorkflowStage::Idle,
            Self::PhotoCapture => WorkflowStage::PhotoCapture,
            Self::CategorySelection { .. } => WorkflowStage::CategorySelection,
            Self::LocationResolution { .. } => WorkflowStage::LocationResolution,
        }
    }
}

/// Drives one report at a time from photo to recorded issue.
///
/// The workflow owns the [`IssueStore`]; recording a report is the only way
/// issues are added once the workflow exists.
pub struct ReportWorkflow {
    state: WorkflowState,
    store: IssueStore,
    clock: Arc<dyn Clock>,
    options: GeolocationOptions,
    fallback: Coordinates,
    observers: Vec<Arc<dyn ReportObserver>>,
}

impl ReportWorkflow {
    /// Create an idle workflow over `store`.
    pub fn new(store: IssueStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: WorkflowState::Idle,
            store,
            clock,
            options: GeolocationOptions::default(),
            fallback: Coordinates::FALLBACK,
            observers: Vec::new(),
        }
    }

    /// Use `fallback` when geolocation fails.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Coordinates) -> Self {
        self.fallback = fallback;
        self
    }

    /// Pass `options` with every position request.
    #[must_use]
    pub fn with_options(mut self, options: GeolocationOptions) -> Self {
        self.options = options;
        self
    }

    /// Register an observer for completed reports.
    pub fn subscribe(&mut self, observer: Arc<dyn ReportObserver>) {
        self.observers.push(observer);
    }

    /// Stage the workflow is currently in.
    pub fn stage(&self) -> WorkflowStage {
        self.state.stage()
    }

    /// Photo held by the report in progress, if any.
    pub fn photo(&self) -> Option<&Photo> {
        match &self.state {
            WorkflowState::CategorySelection { photo }
            | WorkflowState::LocationResolution { photo, .. } => Some(photo),
            WorkflowState::Idle | WorkflowState::PhotoCapture => None,
        }
    }

    /// Category chosen for the report in progress, if any.
    pub fn category(&self) -> Option<Category> {
        match &self.state {
            WorkflowState::LocationResolution { category, .. } => Some(*category),
            _ => None,
        }
    }

    /// Issues recorded so far, newest first.
    pub fn store(&self) -> &IssueStore {
        &self.store
    }

    /// Give the store back, dropping any report in progress.
    pub fn into_store(self) -> IssueStore {
        self.store
    }

    /// Start a new report.
    pub fn open(&mut self) -> Result<(), WorkflowError> {
        let stage = self.stage();
        if stage != WorkflowStage::Idle {
            debug!(%stage, "report already open");
            return Err(WorkflowError::AlreadyOpen { stage });
        }
        self.state = WorkflowState::PhotoCapture;
        info!("report opened");
        Ok(())
    }

    /// Accept the captured photo.
    pub fn supply_photo(&mut self, payload: PhotoPayload) -> Result<(), WorkflowError> {
        self.expect_stage(WorkflowStage::PhotoCapture, WorkflowAction::SupplyPhoto)?;
        let photo = Photo::try_from(payload).map_err(|err| {
            debug!(error = %err, "photo rejected");
            WorkflowError::from(err)
        })?;
        self.state = WorkflowState::CategorySelection { photo };
        Ok(())
    }

    /// Discard the captured photo and go back to capture.
    pub fn retake_photo(&mut self) -> Result<(), WorkflowError> {
        self.expect_stage(WorkflowStage::CategorySelection, WorkflowAction::RetakePhoto)?;
        self.state = WorkflowState::PhotoCapture;
        Ok(())
    }

    /// Choose the category by its canonical name.
    pub fn select_category(&mut self, raw: &str) -> Result<(), WorkflowError> {
        self.expect_stage(
            WorkflowStage::CategorySelection,
            WorkflowAction::SelectCategory,
        )?;
        let category: Category = raw.parse().map_err(|err: CategoryParseError| {
            debug!(error = %err, "category rejected");
            WorkflowError::from(err)
        })?;
        match mem::take(&mut self.state) {
            WorkflowState::CategorySelection { photo } => {
                self.state = WorkflowState::LocationResolution { photo, category };
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.reject(WorkflowAction::SelectCategory))
            }
        }
    }

    /// Resolve the position, record the issue and notify observers.
    ///
    /// Geolocation errors are not surfaced; the fallback location is used and
    /// the receipt says so. Dropping the returned future before it completes
    /// leaves the workflow idle with nothing recorded.
    pub async fn resolve_location<P>(
        &mut self,
        provider: &P,
    ) -> Result<ReportReceipt, WorkflowError>
    where
        P: GeolocationProvider + ?Sized,
    {
        let (photo, category) = match mem::take(&mut self.state) {
            WorkflowState::LocationResolution { photo, category } => (photo, category),
            other => {
                self.state = other;
                return Err(self.reject(WorkflowAction::ResolveLocation));
            }
        };

        let (location, used_fallback_location) =
            match provider.current_position(&self.options).await {
                Ok(position) => (position, false),
                Err(err) => {
                    warn!(
                        error = %err,
                        kind = err.kind(),
                        fallback = %self.fallback,
                        "geolocation failed; using fallback location"
                    );
                    (self.fallback, true)
                }
            };

        let draft = IssueDraft::for_report(category, location, photo, self.clock.utc());
        let issue = self.store.insert(draft);
        let receipt = ReportReceipt {
            issue_id: issue.id(),
            category,
            reward_amount: issue.reward_amount(),
            location,
            used_fallback_location,
        };
        info!(
            issue_id = %receipt.issue_id,
            %category,
            reward = receipt.reward_amount,
            used_fallback_location,
            stage = %WorkflowStage::Completed,
            "report recorded"
        );
        for observer in &self.observers {
            observer.report_completed(&receipt);
        }
        Ok(receipt)
    }

    /// Abandon the report in progress. Safe to call at any time.
    pub fn cancel(&mut self) {
        let stage = self.stage();
        self.state = WorkflowState::Idle;
        if stage != WorkflowStage::Idle {
            info!(%stage, "report cancelled");
        }
    }

    fn expect_stage(
        &self,
        expected: WorkflowStage,
        action: WorkflowAction,
    ) -> Result<(), WorkflowError> {
        if self.stage() == expected {
            Ok(())
        } else {
            Err(self.reject(action))
        }
    }

    fn reject(&self, action: WorkflowAction) -> WorkflowError {
        let err = WorkflowError::InvalidTransition {
            stage: self.stage(),
            action,
        };
        debug!(error = %err, "transition rejected");
        err
    }
}

impl fmt::Debug for ReportWorkflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportWorkflow")
            .field("state", &self.state)
            .field("issues", &self.store.len())
            .field("fallback", &self.fallback)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "report_workflow_tests.rs"]
mod tests;
