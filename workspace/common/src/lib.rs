//! Transport-layer types for the MGNREGA dashboard.
//! These structs mirror the payloads of the district-data backend and the
//! reverse-geocoding provider so the frontend can deserialize responses
//! without duplicating shapes.

mod districts;
mod geocode;
mod records;

pub use districts::{DistrictOption, DistrictsResponse};
pub use geocode::{Address, Coordinates, ReverseGeocodeResponse};
pub use records::{MetricsResponse, MonthlyRecord};
