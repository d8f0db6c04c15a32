//! Deterministic demo issue generation for the reporting client.
//!
//! This crate populates demo maps with believable, reproducible civic issues
//! scattered around a coordinate. It is independent of the client's domain
//! types; the client converts [`ExampleIssueSeed`] values at the point of use.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading seed registries from JSON files
//! - Deterministic issue generation using named seeds
//! - Injecting any seeded random source for fixed test sequences
//! - Reporter label, radius, and centre validation
//!
//! # Example
//!
//! ```
//! use example_data::{SeedRegistry, generate_example_issues};
//!
//! let json = r#"{
//!     "version": 1,
//!     "categories": ["Potholes", "Waste", "Lights", "Safety"],
//!     "seeds": [{"name": "test-seed", "seed": 42, "issueCount": 3, "radiusMetres": 500}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let issues = generate_example_issues(&registry, seed_def, (40.0, -73.0))
//!     .expect("generation succeeds");
//!
//! assert_eq!(issues.len(), 3);
//! ```

mod error;
mod generator;
mod registry;
mod seed;
mod validation;

pub use error::{GenerationError, RegistryError};
pub use generator::{generate_example_issues, generate_example_issues_with_rng};
pub use registry::{SeedDefinition, SeedRegistry};
pub use seed::{CategorySeed, ExampleIssueSeed};
pub use validation::{
    MAX_RADIUS_METRES, REPORTER_LABEL_MAX, REPORTER_LABEL_MIN, is_valid_centre, is_valid_radius,
    is_valid_reporter_label,
};
