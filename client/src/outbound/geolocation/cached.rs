//! Reuse a recent fix instead of querying the device again.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use tracing::debug;

use crate::domain::Coordinates;
use crate::domain::ports::{GeolocationError, GeolocationOptions, GeolocationProvider};

#[derive(Debug, Clone, Copy)]
struct CachedFix {
    position: Coordinates,
    taken_at: DateTime<Utc>,
}

/// Serves the last successful fix while it is younger than
/// `options.max_cache_age`. Failures are never cached.
pub struct CachedGeolocation<P> {
    inner: P,
    clock: Arc<dyn Clock>,
    last: Mutex<Option<CachedFix>>,
}

impl<P> CachedGeolocation<P> {
    /// Cache fixes from `inner`, aging them with `clock`.
    pub fn new(inner: P, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner,
            clock,
            last: Mutex::new(None),
        }
    }

    fn fresh_fix(&self, options: &GeolocationOptions) -> Option<Coordinates> {
        let cached = (*self.last.lock().unwrap_or_else(PoisonError::into_inner))?;
        let age = self.clock.utc().signed_duration_since(cached.taken_at);
        let age = age.to_std().ok()?;
        (age <= options.max_cache_age).then_some(cached.position)
    }

    fn remember(&self, position: Coordinates) {
        let fix = CachedFix {
            position,
            taken_at: self.clock.utc(),
        };
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = Some(fix);
    }
}

#[async_trait]
impl<P> GeolocationProvider for CachedGeolocation<P>
where
    P: GeolocationProvider,
{
    async fn current_position(
        &self,
        options: &GeolocationOptions,
    ) -> Result<Coordinates, GeolocationError> {
        if let Some(position) = self.fresh_fix(options) {
            debug!("serving cached geolocation fix");
            return Ok(position);
        }
        let position = self.inner.current_position(options).await?;
        self.remember(position);
        Ok(position)
    }
}

impl<P: std::fmt::Debug> std::fmt::Debug for CachedGeolocation<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedGeolocation")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
