//! Dashboard controller for district-level MGNREGA figures.
//!
//! Everything here is platform independent: the browser-facing pieces
//! (HTTP, geolocation, chart drawing) sit behind the traits in [`source`]
//! and are supplied by the frontend crate.

pub mod charts;
pub mod controller;
pub mod error;
pub mod fallback;
pub mod format;
pub mod geocode;
pub mod messages;
pub mod source;
pub mod state;

#[cfg(test)]
mod testing;

pub use controller::{Controller, ControllerConfig, FetchOutcome};
pub use error::{FetchError, LocateError, Result};
pub use source::{DataSource, Geocoder, Locator};
pub use state::{DashboardState, Summary, DEFAULT_STATE};
