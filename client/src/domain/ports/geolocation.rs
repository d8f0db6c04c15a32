//! Driven port for reading the device position.

use std::time::Duration;

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::Coordinates;

/// Options passed with every position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeolocationOptions {
    /// Ask for a GPS-grade fix rather than a network estimate.
    pub high_accuracy: bool,
    /// Give up after this long.
    pub timeout: Duration,
    /// Accept a cached fix no older than this.
    pub max_cache_age: Duration,
}

impl GeolocationOptions {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    /// Default cached-fix tolerance.
    pub const DEFAULT_MAX_CACHE_AGE: Duration = Duration::from_secs(5 * 60);
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Self::DEFAULT_TIMEOUT,
            max_cache_age: Self::DEFAULT_MAX_CACHE_AGE,
        }
    }
}

define_port_error! {
    /// Reasons a position could not be obtained.
    pub enum GeolocationError {
        /// The user or platform refused access.
        PermissionDenied { message: String } =>
            "location permission denied: {message}",
        /// The device could not determine a position.
        PositionUnavailable { message: String } =>
            "position unavailable: {message}",
        /// No fix arrived in time.
        Timeout { timeout_ms: u64 } =>
            "location request timed out after {timeout_ms} ms",
        /// The platform has no location capability at all.
        Unsupported => "geolocation is not supported on this platform",
    }
}

/// Port for one-shot position reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    /// Resolve the current device position.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use impact_client::domain::ports::{GeolocationOptions, GeolocationProvider};
    /// use impact_client::outbound::geolocation::FixedGeolocation;
    ///
    /// let provider = FixedGeolocation::new(position);
    /// let fix = provider.current_position(&GeolocationOptions::default()).await?;
    /// assert_eq!(fix, position);
    /// ```
    async fn current_position(
        &self,
        options: &GeolocationOptions,
    ) -> Result<Coordinates, GeolocationError>;
}

pub(crate) fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
