//! Enforce the request timeout around any provider.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::Coordinates;
use crate::domain::ports::{
    GeolocationError, GeolocationOptions, GeolocationProvider, duration_millis,
};

/// Fails with [`GeolocationError::Timeout`] when the inner provider takes
/// longer than `options.timeout`.
#[derive(Debug, Clone)]
pub struct TimeoutGeolocation<P> {
    inner: P,
}

impl<P> TimeoutGeolocation<P> {
    /// Bound every request to `inner` by the caller's timeout.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Unwrap the decorated provider.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

#[async_trait]
impl<P> GeolocationProvider for TimeoutGeolocation<P>
where
    P: GeolocationProvider,
{
    async fn current_position(
        &self,
        options: &GeolocationOptions,
    ) -> Result<Coordinates, GeolocationError> {
        match tokio::time::timeout(options.timeout, self.inner.current_position(options)).await {
            Ok(result) => result,
            Err(_) => {
                let timeout_ms = duration_millis(options.timeout);
                debug!(timeout_ms, "geolocation request timed out");
                Err(GeolocationError::timeout(timeout_ms))
            }
        }
    }
}
