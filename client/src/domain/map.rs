//! Map marker projection and camera control.

use super::issue::{Category, Coordinates, Issue, IssueId};
use super::issue_store::{IssueFilter, IssueStore};
use super::ports::MapView;

/// Zoom level used when centring on a location.
pub const DEFAULT_ZOOM: u8 = 15;

/// Marker for one issue on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapMarker {
    pub id: IssueId,
    pub category: Category,
    pub location: Coordinates,
    pub icon: &'static str,
}

impl From<&Issue> for MapMarker {
    fn from(issue: &Issue) -> Self {
        Self {
            id: issue.id(),
            category: issue.category(),
            location: issue.location(),
            icon: issue.category().icon(),
        }
    }
}

/// Markers for `issues`, in the same order.
pub fn markers<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> Vec<MapMarker> {
    issues.into_iter().map(MapMarker::from).collect()
}

/// Errors raised by [`MapController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// No map view has registered yet.
    #[error("map view is not registered")]
    NotRegistered,
}

/// Holds the map view once the map component has mounted and registered it.
#[derive(Default)]
pub struct MapController {
    view: Option<Box<dyn MapView>>,
}

impl MapController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the rendered map. Replaces any earlier registration.
    pub fn register(&mut self, view: Box<dyn MapView>) {
        self.view = Some(view);
    }

    /// Detach the map, e.g. when it unmounts.
    pub fn unregister(&mut self) {
        self.view = None;
    }

    /// Whether a map view is attached.
    pub fn is_registered(&self) -> bool {
        self.view.is_some()
    }

    /// Centre the map on `location` at [`DEFAULT_ZOOM`].
    pub fn recenter(&mut self, location: Coordinates) -> Result<(), MapError> {
        let view = self.view.as_mut().ok_or(MapError::NotRegistered)?;
        view.set_view(location, DEFAULT_ZOOM);
        Ok(())
    }

    /// Markers for the issues visible under `filter`.
    pub fn visible_markers(store: &IssueStore, filter: IssueFilter) -> Vec<MapMarker> {
        markers(store.list(filter))
    }

    /// Resolve a clicked marker to its issue.
    pub fn marker_clicked(store: &IssueStore, id: IssueId) -> Option<&Issue> {
        store.get(id)
    }
}

impl std::fmt::Debug for MapController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapController")
            .field("registered", &self.is_registered())
            .finish()
    }
}
