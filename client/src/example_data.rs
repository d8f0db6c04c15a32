//! Demo issue seeding from the example-data registry.

use chrono::{DateTime, Duration, Utc};
use example_data::{
    CategorySeed, ExampleIssueSeed, GenerationError, RegistryError, SeedRegistry,
    generate_example_issues,
};
use mockable::Clock;
use thiserror::Error;
use tracing::info;

use crate::config::ReporterSettings;
use crate::domain::{
    Category, Coordinates, CoordinatesValidationError, IssueDraft, IssueStore, Photo, PhotoError,
};

/// Errors returned while building the demo issue store.
#[derive(Debug, Error)]
pub enum DemoSeedingError {
    /// Registry loading or seed lookup failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Issue generation failed.
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    /// A generated issue had an unusable location.
    #[error("generated issue {index} has an invalid location: {source}")]
    InvalidLocation {
        /// Position of the issue in the generated batch.
        index: usize,
        /// Validation failure.
        #[source]
        source: CoordinatesValidationError,
    },
    /// A generated issue had no usable image reference.
    #[error("generated issue {index} has an invalid image: {source}")]
    InvalidImage {
        /// Position of the issue in the generated batch.
        index: usize,
        /// Validation failure.
        #[source]
        source: PhotoError,
    },
}

impl From<CategorySeed> for Category {
    fn from(value: CategorySeed) -> Self {
        match value {
            CategorySeed::Potholes => Self::Potholes,
            CategorySeed::Waste => Self::Waste,
            CategorySeed::Lights => Self::Lights,
            CategorySeed::Safety => Self::Safety,
        }
    }
}

impl IssueStore {
    /// Build a store from generated seeds. Each seed's age is subtracted from
    /// `now` to give its creation time.
    pub fn seed_from_examples(
        seeds: &[ExampleIssueSeed],
        now: DateTime<Utc>,
    ) -> Result<Self, DemoSeedingError> {
        let drafts = seeds
            .iter()
            .enumerate()
            .map(|(index, seed)| to_draft(index, seed, now))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::seeded(drafts))
    }
}

fn to_draft(
    index: usize,
    seed: &ExampleIssueSeed,
    now: DateTime<Utc>,
) -> Result<IssueDraft, DemoSeedingError> {
    let location = Coordinates::new(seed.latitude, seed.longitude)
        .map_err(|source| DemoSeedingError::InvalidLocation { index, source })?;
    let photo = Photo::from_reference(seed.image.clone())
        .map_err(|source| DemoSeedingError::InvalidImage { index, source })?;
    Ok(IssueDraft {
        category: seed.category.into(),
        location,
        title: seed.title.clone(),
        description: seed.description.clone(),
        reported_by: seed.reported_by.clone(),
        created_at: now - Duration::minutes(i64::from(seed.age_minutes)),
        photo,
    })
}

/// Load the configured registry and seed a store around `centre`.
///
/// # Examples
///
/// ```rust,no_run
/// use std::ffi::OsString;
/// use std::sync::Arc;
///
/// use impact_client::config::ReporterSettings;
/// use impact_client::domain::Coordinates;
/// use impact_client::example_data::demo_store;
/// use ortho_config::OrthoConfig;
///
/// let settings = ReporterSettings::load_from_iter([OsString::from("impact-demo")])?;
/// let store = demo_store(&settings, Coordinates::FALLBACK, Arc::new(mockable::DefaultClock))?;
/// assert!(!store.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn demo_store(
    settings: &ReporterSettings,
    centre: Coordinates,
    clock: std::sync::Arc<dyn Clock>,
) -> Result<IssueStore, DemoSeedingError> {
    let registry_path = settings.registry_path();
    let registry = SeedRegistry::from_file(&registry_path)?;
    let seed_def = registry.find_seed(settings.seed_name())?;
    let seeds = generate_example_issues(
        &registry,
        seed_def,
        (centre.latitude(), centre.longitude()),
    )?;
    let store = IssueStore::seed_from_examples(&seeds, clock.utc())?;
    info!(
        seed_key = seed_def.name(),
        issue_count = store.len(),
        registry = %registry_path.display(),
        "demo issues seeded"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domain::IssueFilter;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 2, 18, 0, 0)
            .single()
            .expect("valid time")
    }

    fn seed(category: CategorySeed, age_minutes: u32) -> ExampleIssueSeed {
        ExampleIssueSeed {
            category,
            latitude: 37.78,
            longitude: -122.41,
            title: "Generated".to_owned(),
            description: "Generated description".to_owned(),
            reported_by: "Ada L.".to_owned(),
            age_minutes,
            image: "/images/potholes.jpg".to_owned(),
        }
    }

    #[test]
    fn seeds_become_pending_issues_ordered_by_age() {
        let seeds = [seed(CategorySeed::Waste, 90), seed(CategorySeed::Safety, 5)];

        let store = IssueStore::seed_from_examples(&seeds, now()).expect("valid seeds");

        let issues: Vec<_> = store.list(IssueFilter::All).collect();
        assert_eq!(issues.len(), 2);
        let first = issues.first().expect("first issue");
        assert_eq!(first.category(), Category::Safety);
        assert_eq!(first.created_at(), now() - Duration::minutes(5));
        assert_eq!(first.reported_by(), "Ada L.");
        assert_eq!(first.reward_amount(), 60);
    }

    #[test]
    fn invalid_location_is_reported_with_index() {
        let mut bad = seed(CategorySeed::Lights, 1);
        bad.latitude = 120.0;
        let seeds = [seed(CategorySeed::Lights, 2), bad];

        let err = IssueStore::seed_from_examples(&seeds, now()).expect_err("invalid seed");

        assert!(matches!(err, DemoSeedingError::InvalidLocation { index: 1, .. }));
    }

    #[test]
    fn category_seeds_map_one_to_one() {
        let mapped: Vec<Category> = CategorySeed::ALL.into_iter().map(Category::from).collect();
        assert_eq!(mapped, Category::ALL);
    }
}
