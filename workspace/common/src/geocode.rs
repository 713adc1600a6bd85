use serde::{Deserialize, Serialize};

/// A position reported by the browser.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Response of the reverse-geocoding endpoint (`format=jsonv2`).
/// Only the address block is consumed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub address: Address,
}

/// Administrative fields of a reverse-geocoded address.
/// Providers fill whichever subset applies to the location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Address {
    pub county: Option<String>,
    pub state_district: Option<String>,
    pub district: Option<String>,
    pub town: Option<String>,
    pub city: Option<String>,
    pub village: Option<String>,
}
