//! Integration tests for loading seed registries from disk.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::fs;
use std::path::PathBuf;

use example_data::{CategorySeed, RegistryError, SeedRegistry, generate_example_issues};
use rstest::rstest;
use tempfile::TempDir;

const VALID_JSON: &str = r#"{
    "version": 1,
    "categories": ["Potholes", "Lights"],
    "seeds": [
        {"name": "mossy-owl", "seed": 2026, "issueCount": 12, "radiusMetres": 800},
        {"name": "snowy-penguin", "seed": 1234, "issueCount": 5, "radiusMetres": 250}
    ]
}"#;

fn write_registry(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("seeds.json");
    fs::write(&path, contents).expect("write registry");
    path
}

#[test]
fn loads_registry_from_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_registry(&dir, VALID_JSON);

    let registry = SeedRegistry::from_file(&path).expect("registry loads");

    assert_eq!(registry.seeds().len(), 2);
    assert_eq!(
        registry.categories(),
        [CategorySeed::Potholes, CategorySeed::Lights].as_slice()
    );
}

#[test]
fn reports_missing_file_with_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("missing.json");

    let result = SeedRegistry::from_file(&path);

    match result {
        Err(RegistryError::IoError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected IoError, got {other:?}"),
    }
}

#[rstest]
#[case("mossy-owl", 12)]
#[case("snowy-penguin", 5)]
fn file_registry_drives_generation(#[case] name: &str, #[case] expected: usize) {
    let dir = TempDir::new().expect("temp dir");
    let path = write_registry(&dir, VALID_JSON);
    let registry = SeedRegistry::from_file(&path).expect("registry loads");
    let seed_def = registry.find_seed(name).expect("seed exists");

    let issues =
        generate_example_issues(&registry, seed_def, (51.5072, -0.1276)).expect("generated");

    assert_eq!(issues.len(), expected);
    assert!(issues.iter().all(|issue| {
        matches!(issue.category, CategorySeed::Potholes | CategorySeed::Lights)
    }));
}

#[test]
fn ships_a_parseable_default_registry() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("seeds.json");

    let registry = SeedRegistry::from_file(&path).expect("bundled registry parses");

    assert!(registry.find_seed("mossy-owl").is_ok());
}
