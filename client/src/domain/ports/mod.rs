//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod balance_source;
mod geolocation;
mod identity_provider;
mod intro_flag_store;
mod map_view;
mod report_observer;

#[cfg(test)]
pub use balance_source::MockBalanceSource;
pub use balance_source::{BalanceSource, FixtureBalanceSource};
pub(crate) use geolocation::duration_millis;
#[cfg(test)]
pub use geolocation::MockGeolocationProvider;
pub use geolocation::{GeolocationError, GeolocationOptions, GeolocationProvider};
#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
pub use identity_provider::{IdentityProvider, WalletError};
#[cfg(test)]
pub use intro_flag_store::MockIntroFlagStore;
pub use intro_flag_store::{InMemoryIntroFlagStore, IntroFlagStore, IntroFlagStoreError};
#[cfg(test)]
pub use map_view::MockMapView;
pub use map_view::MapView;
#[cfg(test)]
pub use report_observer::MockReportObserver;
pub use report_observer::ReportObserver;

#[cfg(test)]
mod tests;
