//! Geolocation adapters.
//!
//! Adapters compose: wrap a device provider in [`TimeoutGeolocation`] to
//! enforce the request timeout, then in [`CachedGeolocation`] to reuse a recent
//! fix.

mod cached;
mod fixed;
mod timeout;

pub use cached::CachedGeolocation;
pub use fixed::{FixedGeolocation, UnsupportedGeolocation};
pub use timeout::TimeoutGeolocation;
