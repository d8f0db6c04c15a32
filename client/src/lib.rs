//! Civic issue reporting client core.
//!
//! The [`domain`] module holds the issue model and the report workflow,
//! [`outbound`] the adapters for geolocation, persisted state and report
//! observers, and [`config`] the settings loader.

pub mod config;
pub mod domain;
#[cfg(feature = "example-data")]
pub mod example_data;
pub mod outbound;

pub use config::ReporterSettings;
