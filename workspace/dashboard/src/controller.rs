//! Orchestration of the dashboard's user actions.
//!
//! Each action mutates a [`DashboardState`] owned by the caller and hands a
//! snapshot to `publish` whenever the page should change, so the frontend
//! can render intermediate steps (busy buttons) while a request is pending.
//! Only one action is expected to run at a time; the busy flags disable the
//! triggering buttons but nothing here enforces it.

use common::MonthlyRecord;
use tracing::{debug, error, info, instrument, warn};

use crate::error::FetchError;
use crate::fallback::sample_series;
use crate::geocode::resolve_candidate;
use crate::messages;
use crate::source::{DataSource, Geocoder, Locator};
use crate::state::DashboardState;

#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Months of history requested per district.
    pub months: u32,
    /// Budget for the position request, including the permission prompt.
    pub geolocation_timeout_ms: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            months: 12,
            geolocation_timeout_ms: 10_000,
        }
    }
}

/// Result of a metrics request. Always carries a series; `notice` is set
/// when the built-in sample replaced the server's answer.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub series: Vec<MonthlyRecord>,
    pub notice: Option<&'static str>,
}

impl FetchOutcome {
    pub fn is_fallback(&self) -> bool {
        self.notice.is_some()
    }
}

pub struct Controller<D, G, L> {
    source: D,
    geocoder: G,
    locator: L,
    config: ControllerConfig,
}

impl<D, G, L> Controller<D, G, L>
where
    D: DataSource,
    G: Geocoder,
    L: Locator,
{
    pub fn new(source: D, geocoder: G, locator: L) -> Self {
        Self {
            source,
            geocoder,
            locator,
            config: ControllerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Page start-up: fetch the district list for the selected state, falling
    /// back to the built-in list if nothing usable arrived.
    pub async fn init<P>(&self, state: &mut DashboardState, publish: &P)
    where
        P: Fn(&DashboardState),
    {
        let state_name = state.selected_state.clone();
        self.load_districts(state, &state_name, publish).await;
        if state.has_only_placeholder() {
            debug!("district list still empty after load, using built-in list");
            state.use_fallback_districts();
            publish(state);
        }
    }

    /// Replaces the district list with the server's, or with the built-in
    /// list plus a notice when the server has none to give.
    #[instrument(skip(self, state, publish))]
    pub async fn load_districts<P>(&self, state: &mut DashboardState, state_name: &str, publish: &P)
    where
        P: Fn(&DashboardState),
    {
        match non_empty(self.source.districts(state_name).await) {
            Ok(districts) => {
                info!(count = districts.len(), "loaded district list");
                state.set_districts(districts.into_iter().map(Into::into));
                state.clear_error();
            }
            Err(err) => {
                warn!(%err, "districts API failed, using built-in list");
                state.use_fallback_districts();
                state.show_error(messages::DISTRICTS_UNAVAILABLE);
            }
        }
        publish(state);
    }

    /// Monthly figures for a district, newest first. Falls back to the
    /// sample series on any failure.
    #[instrument(skip(self))]
    pub async fn fetch_series(&self, state_name: &str, district: &str) -> FetchOutcome {
        let result = self
            .source
            .monthly_series(state_name, district, self.config.months)
            .await;
        match non_empty(result) {
            Ok(series) => {
                info!(months = series.len(), "loaded district data");
                FetchOutcome {
                    series,
                    notice: None,
                }
            }
            Err(err) => {
                warn!(%err, "data fetch failed, showing sample data");
                FetchOutcome {
                    series: sample_series(),
                    notice: Some(messages::DATA_UNAVAILABLE),
                }
            }
        }
    }

    /// The "get data" button.
    pub async fn get_data<P>(&self, state: &mut DashboardState, publish: &P)
    where
        P: Fn(&DashboardState),
    {
        state.clear_error();
        let Some(district) = state.selected_district().map(str::to_owned) else {
            state.show_error(messages::CHOOSE_DISTRICT);
            publish(state);
            return;
        };
        let state_name = state.selected_state.clone();

        state.fetching = true;
        publish(state);

        let outcome = self.fetch_series(&state_name, &district).await;
        if let Some(notice) = outcome.notice {
            state.show_error(notice);
            publish(state);
        }
        // display() clears the error region, so a fallback notice only lasts
        // until the sample series is drawn.
        state.display(&outcome.series);

        state.fetching = false;
        publish(state);
    }

    /// The "choose by location" button.
    pub async fn locate<P>(&self, state: &mut DashboardState, publish: &P)
    where
        P: Fn(&DashboardState),
    {
        state.clear_error();
        if !self.locator.is_supported() {
            state.show_error(messages::GEOLOCATION_UNSUPPORTED);
            publish(state);
            return;
        }

        state.locating = true;
        publish(state);

        self.resolve_location(state).await;

        state.locating = false;
        publish(state);
    }

    async fn resolve_location(&self, state: &mut DashboardState) {
        let position = match self.locator.locate(self.config.geolocation_timeout_ms).await {
            Ok(position) => position,
            Err(err) => {
                warn!(%err, "geolocation refused");
                state.show_error(messages::location_denied(err.browser_message()));
                return;
            }
        };
        debug!(lat = position.latitude, lon = position.longitude, "got position");

        let address = match self.geocoder.reverse(position).await {
            Ok(address) => address,
            Err(err) => {
                error!(%err, "reverse geocoding failed");
                state.show_error(messages::LOCATION_FAILED);
                return;
            }
        };

        match resolve_candidate(&address) {
            Some(candidate) => state.apply_candidate(candidate),
            None => {
                info!("no district-like field in geocoded address");
                state.show_error(messages::DISTRICT_NOT_FOUND);
            }
        }
    }
}

fn non_empty<T>(result: Result<Vec<T>, FetchError>) -> Result<Vec<T>, FetchError> {
    match result {
        Ok(items) if items.is_empty() => Err(FetchError::Empty),
        other => other,
    }
}
