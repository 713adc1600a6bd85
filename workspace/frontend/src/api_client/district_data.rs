use async_trait::async_trait;
use common::{DistrictsResponse, MetricsResponse, MonthlyRecord};
use dashboard::{DataSource, FetchError};
use gloo_net::http::Request;
use web_sys::RequestCache;

use super::{encode_segment, get};

/// The district-data backend, reached over HTTP.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpDataSource {
    api_base: String,
}

impl HttpDataSource {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    fn districts_url(&self, state: &str) -> String {
        format!("{}/districts/{}", self.api_base, encode_segment(state))
    }

    fn data_url(&self, state: &str, district: &str, months: u32) -> String {
        format!(
            "{}/data/{}/{}?months={}",
            self.api_base,
            encode_segment(state),
            encode_segment(district),
            months
        )
    }
}

#[async_trait(?Send)]
impl DataSource for HttpDataSource {
    async fn districts(&self, state: &str) -> Result<Vec<String>, FetchError> {
        log::trace!("Fetching districts for state: {}", state);
        let url = self.districts_url(state);
        let request = Request::get(&url).cache(RequestCache::NoStore);
        let response: DistrictsResponse = get(request, &url).await?;
        Ok(response.districts)
    }

    async fn monthly_series(
        &self,
        state: &str,
        district: &str,
        months: u32,
    ) -> Result<Vec<MonthlyRecord>, FetchError> {
        log::trace!("Fetching {} months for {} / {}", months, state, district);
        let url = self.data_url(state, district, months);
        let request = Request::get(&url).cache(RequestCache::NoStore);
        let response: MetricsResponse = get(request, &url).await?;
        Ok(response.data)
    }
}
