//! Recording fakes for the collaborator traits.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use common::{Address, Coordinates, MonthlyRecord};

use crate::error::{FetchError, LocateError};
use crate::source::{DataSource, Geocoder, Locator};
use crate::state::DashboardState;

/// Sends controller logs to the test output. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub struct FakeSource {
    districts: Result<Vec<String>, FetchError>,
    series: Result<Vec<MonthlyRecord>, FetchError>,
    calls: RefCell<Vec<String>>,
}

impl Default for FakeSource {
    fn default() -> Self {
        Self {
            districts: Err(FetchError::Network("not configured".into())),
            series: Err(FetchError::Network("not configured".into())),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeSource {
    pub fn with_districts(mut self, districts: Result<Vec<String>, FetchError>) -> Self {
        self.districts = districts;
        self
    }

    pub fn with_series(mut self, series: Result<Vec<MonthlyRecord>, FetchError>) -> Self {
        self.series = series;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl DataSource for FakeSource {
    async fn districts(&self, state: &str) -> Result<Vec<String>, FetchError> {
        self.calls.borrow_mut().push(format!("districts:{}", state));
        self.districts.clone()
    }

    async fn monthly_series(
        &self,
        state: &str,
        district: &str,
        months: u32,
    ) -> Result<Vec<MonthlyRecord>, FetchError> {
        self.calls
            .borrow_mut()
            .push(format!("data:{}/{}?months={}", state, district, months));
        self.series.clone()
    }
}

pub struct FakeGeocoder {
    answer: Result<Address, FetchError>,
    requests: RefCell<Vec<Coordinates>>,
}

impl Default for FakeGeocoder {
    fn default() -> Self {
        Self::answering(Err(FetchError::Network("not configured".into())))
    }
}

impl FakeGeocoder {
    pub fn answering(answer: Result<Address, FetchError>) -> Self {
        Self {
            answer,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Coordinates> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Geocoder for FakeGeocoder {
    async fn reverse(&self, position: Coordinates) -> Result<Address, FetchError> {
        self.requests.borrow_mut().push(position);
        self.answer.clone()
    }
}

pub struct FakeLocator {
    supported: bool,
    answer: Result<Coordinates, LocateError>,
    timeouts: RefCell<Vec<u32>>,
}

impl Default for FakeLocator {
    fn default() -> Self {
        Self::failing(LocateError::PositionUnavailable("not configured".into()))
    }
}

impl FakeLocator {
    pub fn at(position: Coordinates) -> Self {
        Self {
            supported: true,
            answer: Ok(position),
            timeouts: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(err: LocateError) -> Self {
        Self {
            supported: true,
            answer: Err(err),
            timeouts: RefCell::new(Vec::new()),
        }
    }

    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::failing(LocateError::Unsupported)
        }
    }

    pub fn timeouts(&self) -> Vec<u32> {
        self.timeouts.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Locator for FakeLocator {
    fn is_supported(&self) -> bool {
        self.supported
    }

    async fn locate(&self, timeout_ms: u32) -> Result<Coordinates, LocateError> {
        self.timeouts.borrow_mut().push(timeout_ms);
        self.answer.clone()
    }
}

/// Collects every published snapshot.
#[derive(Default)]
pub struct Recorder {
    snapshots: Rc<RefCell<Vec<DashboardState>>>,
}

impl Recorder {
    pub fn publish(&self) -> impl Fn(&DashboardState) {
        let snapshots = Rc::clone(&self.snapshots);
        move |state: &DashboardState| snapshots.borrow_mut().push(state.clone())
    }

    pub fn snapshots(&self) -> Vec<DashboardState> {
        self.snapshots.borrow().clone()
    }
}

/// A publisher that drops every snapshot.
pub fn discard(_: &DashboardState) {}
