//! Driven port notified when a report completes.

use crate::domain::ReportReceipt;

/// Port for reacting to completed reports (confirmation UI, analytics).
#[cfg_attr(test, mockall::automock)]
pub trait ReportObserver: Send + Sync {
    /// Called once per recorded report, after the issue is stored.
    fn report_completed(&self, receipt: &ReportReceipt);
}
