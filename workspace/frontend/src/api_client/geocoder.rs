use async_trait::async_trait;
use common::{Address, Coordinates, ReverseGeocodeResponse};
use dashboard::{FetchError, Geocoder};
use gloo_net::http::Request;

use super::get;

/// Reverse geocoding through a Nominatim-compatible `/reverse` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct NominatimGeocoder {
    endpoint: String,
}

impl NominatimGeocoder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    fn reverse_url(&self, position: Coordinates) -> String {
        format!(
            "{}?format=jsonv2&lat={}&lon={}",
            self.endpoint, position.latitude, position.longitude
        )
    }
}

#[async_trait(?Send)]
impl Geocoder for NominatimGeocoder {
    async fn reverse(&self, position: Coordinates) -> Result<Address, FetchError> {
        let url = self.reverse_url(position);
        let response: ReverseGeocodeResponse = get(Request::get(&url), &url).await?;
        Ok(response.address)
    }
}
