//! Collaborators the controller talks to.
//!
//! The browser runs everything on one thread, so none of these futures
//! need to be `Send`.

use async_trait::async_trait;
use common::{Address, Coordinates, MonthlyRecord};

use crate::error::{LocateError, Result};

/// The district-data backend.
#[async_trait(?Send)]
pub trait DataSource {
    /// District names for a state.
    async fn districts(&self, state: &str) -> Result<Vec<String>>;

    /// Up to `months` monthly records, newest first.
    async fn monthly_series(
        &self,
        state: &str,
        district: &str,
        months: u32,
    ) -> Result<Vec<MonthlyRecord>>;
}

/// Reverse geocoding of a position to an address.
#[async_trait(?Send)]
pub trait Geocoder {
    async fn reverse(&self, position: Coordinates) -> Result<Address>;
}

/// The device position.
#[async_trait(?Send)]
pub trait Locator {
    /// Whether a position can be requested at all.
    fn is_supported(&self) -> bool;

    /// Asks for the current position; `timeout_ms` bounds the whole request,
    /// including the permission prompt.
    async fn locate(&self, timeout_ms: u32) -> std::result::Result<Coordinates, LocateError>;
}
