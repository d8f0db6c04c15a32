//! Demo entry point: seeds the map, runs one report through the workflow and
//! logs the result.

use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr, eyre};
use mockable::{Clock, DefaultClock};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use impact_client::ReporterSettings;
use impact_client::domain::ports::GeolocationProvider;
use impact_client::domain::{
    Category, IntroGate, IssueFilter, IssueStore, MapController, PhotoPayload, ReportWorkflow,
    time_ago,
};
use impact_client::outbound::geolocation::{
    CachedGeolocation, FixedGeolocation, TimeoutGeolocation, UnsupportedGeolocation,
};
use impact_client::outbound::intro_flag::FileIntroFlagStore;
use impact_client::outbound::observers::TracingReportObserver;

const DEMO_PHOTO: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRgABAQAAAQABAAD";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ReporterSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let fallback = settings
        .fallback_location()
        .wrap_err("invalid fallback location")?;

    let intro_store = FileIntroFlagStore::open(&settings.data_dir())
        .wrap_err("failed to open data directory")?;
    let mut intro = IntroGate::load(Arc::new(intro_store));
    if intro.should_show() {
        info!("showing intro");
        intro.acknowledge().wrap_err("failed to record intro")?;
    }

    let store = seed_store(&settings, clock.clone())?;

    match settings.device_location().transpose() {
        Ok(Some(position)) => run(&settings, store, clock, FixedGeolocation::new(position)).await,
        Ok(None) => run(&settings, store, clock, UnsupportedGeolocation).await,
        Err(err) => Err(eyre!("invalid device location: {err}")),
    }
}

#[cfg(feature = "example-data")]
fn seed_store(settings: &ReporterSettings, clock: Arc<dyn Clock>) -> Result<IssueStore> {
    let centre = settings
        .device_location()
        .transpose()
        .wrap_err("invalid device location")?
        .map_or(settings.fallback_location(), Ok)
        .wrap_err("invalid fallback location")?;
    impact_client::example_data::demo_store(settings, centre, clock)
        .wrap_err("failed to seed demo issues")
}

#[cfg(not(feature = "example-data"))]
fn seed_store(_settings: &ReporterSettings, _clock: Arc<dyn Clock>) -> Result<IssueStore> {
    Ok(IssueStore::new())
}

async fn run<P>(
    settings: &ReporterSettings,
    store: IssueStore,
    clock: Arc<dyn Clock>,
    device: P,
) -> Result<()>
where
    P: GeolocationProvider,
{
    let provider = CachedGeolocation::new(TimeoutGeolocation::new(device), clock.clone());
    let mut workflow = ReportWorkflow::new(store, clock.clone())
        .with_fallback(settings.fallback_location()?)
        .with_options(settings.geolocation_options());
    workflow.subscribe(Arc::new(TracingReportObserver));

    workflow.open()?;
    workflow.supply_photo(PhotoPayload::DataUrl(DEMO_PHOTO.to_owned()))?;
    workflow.select_category(Category::Potholes.as_str())?;
    let receipt = workflow.resolve_location(&provider).await?;
    if let Some(notice) = receipt.location_notice() {
        warn!(notice, "location fallback");
    }

    let store = workflow.store();
    let markers = MapController::visible_markers(store, Category::Potholes.into());
    let now = clock.utc();
    for marker in &markers {
        if let Some(issue) = MapController::marker_clicked(store, marker.id) {
            info!(
                issue_id = %marker.id,
                icon = marker.icon,
                title = issue.title(),
                age = %time_ago(issue.created_at(), now),
                "pothole marker"
            );
        }
    }
    info!(
        total = store.len(),
        potholes = markers.len(),
        all = store.list(IssueFilter::All).count(),
        "demo finished"
    );
    Ok(())
}
