//! Report observers that need no UI.

use tracing::info;

use crate::domain::ReportReceipt;
use crate::domain::ports::ReportObserver;

/// Logs each completed report as a structured event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReportObserver;

impl ReportObserver for TracingReportObserver {
    fn report_completed(&self, receipt: &ReportReceipt) {
        info!(
            issue_id = %receipt.issue_id,
            category = %receipt.category,
            reward = receipt.reward_amount,
            latitude = receipt.location.latitude(),
            longitude = receipt.location.longitude(),
            used_fallback_location = receipt.used_fallback_location,
            "{} {}",
            receipt.headline(),
            receipt.reward_message()
        );
    }
}
