//! Error types for the example-data crate.
//!
//! Registry parsing and issue generation each get their own `thiserror`
//! enum.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing or querying a seed registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// A category name is not one of the known categories.
    #[error("unknown category at index {index}: {value}")]
    UnknownCategory {
        /// Index of the invalid entry in the array.
        index: usize,
        /// The rejected category name.
        value: String,
    },

    /// The registry enables no categories.
    #[error("registry enables no categories")]
    EmptyCategories,

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// Two seed definitions share a name.
    #[error("seed '{name}' is defined more than once")]
    DuplicateSeedName {
        /// The repeated seed name.
        name: String,
    },

    /// A seed requests a scatter radius outside the supported range.
    #[error("seed '{name}' has invalid radius {radius_metres} m")]
    InvalidRadius {
        /// Seed name.
        name: String,
        /// The rejected radius.
        radius_metres: u32,
    },

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

/// Errors that can occur during issue generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// Failed to generate a valid reporter label after maximum retries.
    #[error("failed to generate valid reporter label after {max_attempts} attempts")]
    ReporterLabelGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },

    /// The scatter centre is not a valid coordinate.
    #[error("invalid generation centre ({latitude}, {longitude})")]
    InvalidCentre {
        /// Rejected latitude.
        latitude: f64,
        /// Rejected longitude.
        longitude: f64,
    },

    /// No categories were supplied to pick from.
    #[error("no categories available for selection")]
    NoCategories,
}
