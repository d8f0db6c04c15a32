//! Client settings loaded via OrthoConfig.
//!
//! Every value can come from the command line, `IMPACT_*` environment
//! variables or a config file. Unset values fall back to the defaults below.

use std::path::PathBuf;
use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::ports::GeolocationOptions;
use crate::domain::{Coordinates, CoordinatesValidationError};

const DEFAULT_DATA_DIR: &str = ".impact";
const DEFAULT_SEED_NAME: &str = "mossy-owl";

fn default_registry_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("crates")
        .join("example-data")
        .join("fixtures")
        .join("seeds.json")
}

/// Settings for the reporting client and the demo binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "IMPACT")]
pub struct ReporterSettings {
    /// Request a high-accuracy fix.
    #[ortho_config(default = true)]
    pub high_accuracy: bool,
    /// Geolocation timeout in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Maximum age of a reusable cached fix in milliseconds.
    pub max_cache_age_ms: Option<u64>,
    /// Fallback latitude used when geolocation fails.
    pub fallback_latitude: Option<f64>,
    /// Fallback longitude used when geolocation fails.
    pub fallback_longitude: Option<f64>,
    /// Simulated device latitude for the demo provider.
    pub device_latitude: Option<f64>,
    /// Simulated device longitude for the demo provider.
    pub device_longitude: Option<f64>,
    /// Directory holding persisted client state.
    pub data_dir: Option<String>,
    /// Seed name to load from the demo registry.
    pub seed_name: Option<String>,
    /// Optional registry path override.
    pub registry_path: Option<PathBuf>,
}

impl ReporterSettings {
    /// Options passed with every geolocation request.
    pub fn geolocation_options(&self) -> GeolocationOptions {
        let defaults = GeolocationOptions::default();
        GeolocationOptions {
            high_accuracy: self.high_accuracy,
            timeout: self
                .timeout_ms
                .map_or(defaults.timeout, Duration::from_millis),
            max_cache_age: self
                .max_cache_age_ms
                .map_or(defaults.max_cache_age, Duration::from_millis),
        }
    }

    /// Fallback location, defaulting each unset component independently.
    pub fn fallback_location(&self) -> Result<Coordinates, CoordinatesValidationError> {
        Coordinates::new(
            self.fallback_latitude
                .unwrap_or(Coordinates::FALLBACK.latitude()),
            self.fallback_longitude
                .unwrap_or(Coordinates::FALLBACK.longitude()),
        )
    }

    /// Simulated device position, when both components are configured.
    pub fn device_location(&self) -> Option<Result<Coordinates, CoordinatesValidationError>> {
        match (self.device_latitude, self.device_longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            _ => None,
        }
    }

    /// Return the configured data directory, falling back to the default.
    pub fn data_dir(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR))
    }

    /// Return the configured seed name, falling back to the default.
    pub fn seed_name(&self) -> &str {
        self.seed_name.as_deref().unwrap_or(DEFAULT_SEED_NAME)
    }

    /// Return the configured registry path, falling back to the default.
    pub fn registry_path(&self) -> PathBuf {
        self.registry_path
            .clone()
            .unwrap_or_else(default_registry_path)
    }
}
