//! Outbound adapters implementing the domain ports.

pub mod geolocation;
pub mod intro_flag;
pub mod observers;
