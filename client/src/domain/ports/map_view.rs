//! Driven port for the rendered map widget.

use crate::domain::Coordinates;

/// Port for moving the map camera.
#[cfg_attr(test, mockall::automock)]
pub trait MapView: Send {
    /// Centre the view on `centre` at `zoom`.
    fn set_view(&mut self, centre: Coordinates, zoom: u8);
}
