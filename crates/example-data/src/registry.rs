//! Seed registry types and JSON parsing.
//!
//! The registry names the seeds available for demo issue generation and the
//! categories those issues may use.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::RegistryError;
use crate::seed::CategorySeed;
use crate::validation::is_valid_radius;

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// A seed registry containing named seeds and the enabled categories.
///
/// # Example
///
/// ```
/// use example_data::SeedRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "categories": ["Potholes", "Waste"],
///     "seeds": [{"name": "test", "seed": 42, "issueCount": 5, "radiusMetres": 400}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.seeds().len(), 1);
/// assert_eq!(registry.categories().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRegistry {
    version: u32,
    categories: Vec<CategorySeed>,
    seeds: Vec<SeedDefinition>,
}

impl SeedRegistry {
    /// Parses a seed registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed or required fields are missing
    /// - The version is unsupported
    /// - A category is unknown, or none are enabled
    /// - The seeds array is empty, repeats a name, or has an invalid radius
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawSeedRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a seed registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSeedRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let categories = raw
            .categories
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                CategorySeed::parse(&value).ok_or(RegistryError::UnknownCategory { index, value })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if categories.is_empty() {
            return Err(RegistryError::EmptyCategories);
        }

        if raw.seeds.is_empty() {
            return Err(RegistryError::EmptySeeds);
        }

        let mut seen = HashSet::new();
        let seeds = raw
            .seeds
            .into_iter()
            .map(|s| {
                if !seen.insert(s.name.clone()) {
                    return Err(RegistryError::DuplicateSeedName { name: s.name });
                }
                if !is_valid_radius(s.radius_metres) {
                    return Err(RegistryError::InvalidRadius {
                        name: s.name,
                        radius_metres: s.radius_metres,
                    });
                }
                Ok(SeedDefinition {
                    name: s.name,
                    seed: s.seed,
                    issue_count: s.issue_count,
                    radius_metres: s.radius_metres,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            version: raw.version,
            categories,
            seeds,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the categories generated issues may use.
    #[must_use]
    pub fn categories(&self) -> &[CategorySeed] {
        &self.categories
    }

    /// Returns all seed definitions.
    #[must_use]
    pub fn seeds(&self) -> &[SeedDefinition] {
        &self.seeds
    }

    /// Finds a seed definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SeedNotFound`] if no seed with the given name
    /// exists.
    pub fn find_seed(&self, name: &str) -> Result<&SeedDefinition, RegistryError> {
        self.seeds
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RegistryError::SeedNotFound {
                name: name.to_owned(),
            })
    }
}

/// A named seed definition for deterministic issue generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDefinition {
    name: String,
    seed: u64,
    issue_count: usize,
    radius_metres: u32,
}

impl SeedDefinition {
    /// Returns the seed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of issues to generate.
    #[must_use]
    pub const fn issue_count(&self) -> usize {
        self.issue_count
    }

    /// Returns the scatter radius around the centre, in metres.
    #[must_use]
    pub const fn radius_metres(&self) -> u32 {
        self.radius_metres
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedRegistry {
    version: u32,
    categories: Vec<String>,
    seeds: Vec<RawSeedDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedDefinition {
    name: String,
    seed: u64,
    issue_count: usize,
    radius_metres: u32,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const VALID_JSON: &str = r#"{
        "version": 1,
        "categories": ["Potholes", "Waste", "Lights", "Safety"],
        "seeds": [
            {"name": "mossy-owl", "seed": 2026, "issueCount": 12, "radiusMetres": 800},
            {"name": "snowy-penguin", "seed": 1234, "issueCount": 5, "radiusMetres": 250}
        ]
    }"#;

    #[test]
    fn parses_valid_registry() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");

        assert_eq!(registry.version(), 1);
        assert_eq!(registry.categories(), CategorySeed::ALL.as_slice());
        assert_eq!(registry.seeds().len(), 2);
    }

    #[test]
    fn finds_seed_by_name() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");
        let seed = registry.find_seed("mossy-owl").expect("seed found");

        assert_eq!(seed.name(), "mossy-owl");
        assert_eq!(seed.seed(), 2026);
        assert_eq!(seed.issue_count(), 12);
        assert_eq!(seed.radius_metres(), 800);
    }

    #[test]
    fn returns_error_for_unknown_seed() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");

        assert_eq!(
            registry.find_seed("unknown"),
            Err(RegistryError::SeedNotFound {
                name: "unknown".to_owned()
            })
        );
    }

    #[rstest]
    #[case::malformed_json("not valid json")]
    #[case::missing_version(
        r#"{"categories": ["Waste"], "seeds": [{"name": "a", "seed": 1, "issueCount": 1, "radiusMetres": 10}]}"#
    )]
    #[case::missing_radius(
        r#"{"version": 1, "categories": ["Waste"], "seeds": [{"name": "a", "seed": 1, "issueCount": 1}]}"#
    )]
    fn rejects_json_with_parse_error(#[case] json: &str) {
        let result = SeedRegistry::from_json(json);
        assert!(matches!(result, Err(RegistryError::ParseError { .. })));
    }

    #[rstest]
    #[case::unsupported_version(
        r#"{"version": 99, "categories": ["Waste"], "seeds": [{"name": "a", "seed": 1, "issueCount": 1, "radiusMetres": 10}]}"#,
        RegistryError::UnsupportedVersion { expected: 1, actual: 99 }
    )]
    #[case::unknown_category(
        r#"{"version": 1, "categories": ["Waste", "Graffiti"], "seeds": [{"name": "a", "seed": 1, "issueCount": 1, "radiusMetres": 10}]}"#,
        RegistryError::UnknownCategory { index: 1, value: "Graffiti".to_owned() }
    )]
    #[case::empty_categories(
        r#"{"version": 1, "categories": [], "seeds": [{"name": "a", "seed": 1, "issueCount": 1, "radiusMetres": 10}]}"#,
        RegistryError::EmptyCategories
    )]
    #[case::empty_seeds(
        r#"{"version": 1, "categories": ["Waste"], "seeds": []}"#,
        RegistryError::EmptySeeds
    )]
    #[case::duplicate_seed(
        r#"{"version": 1, "categories": ["Waste"], "seeds": [{"name": "a", "seed": 1, "issueCount": 1, "radiusMetres": 10}, {"name": "a", "seed": 2, "issueCount": 1, "radiusMetres": 10}]}"#,
        RegistryError::DuplicateSeedName { name: "a".to_owned() }
    )]
    #[case::zero_radius(
        r#"{"version": 1, "categories": ["Waste"], "seeds": [{"name": "a", "seed": 1, "issueCount": 1, "radiusMetres": 0}]}"#,
        RegistryError::InvalidRadius { name: "a".to_owned(), radius_metres: 0 }
    )]
    fn rejects_invalid_registry(#[case] json: &str, #[case] expected: RegistryError) {
        assert_eq!(SeedRegistry::from_json(json), Err(expected));
    }
}
