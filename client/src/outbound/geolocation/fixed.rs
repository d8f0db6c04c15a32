//! Static providers for demos and platforms without location hardware.

use async_trait::async_trait;

use crate::domain::Coordinates;
use crate::domain::ports::{GeolocationError, GeolocationOptions, GeolocationProvider};

/// Always reports the same position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedGeolocation {
    position: Coordinates,
}

impl FixedGeolocation {
    /// Always report `position`.
    pub fn new(position: Coordinates) -> Self {
        Self { position }
    }
}

#[async_trait]
impl GeolocationProvider for FixedGeolocation {
    async fn current_position(
        &self,
        _options: &GeolocationOptions,
    ) -> Result<Coordinates, GeolocationError> {
        Ok(self.position)
    }
}

/// A platform with no geolocation capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedGeolocation;

#[async_trait]
impl GeolocationProvider for UnsupportedGeolocation {
    async fn current_position(
        &self,
        _options: &GeolocationOptions,
    ) -> Result<Coordinates, GeolocationError> {
        Err(GeolocationError::unsupported())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_provider_reports_its_position() {
        let position = Coordinates::new(48.8566, 2.3522).expect("valid");
        let provider = FixedGeolocation::new(position);

        let fix = provider
            .current_position(&GeolocationOptions::default())
            .await;

        assert_eq!(fix, Ok(position));
    }

    #[tokio::test]
    async fn unsupported_provider_always_fails() {
        let fix = UnsupportedGeolocation
            .current_position(&GeolocationOptions::default())
            .await;

        assert_eq!(fix, Err(GeolocationError::Unsupported));
    }
}
