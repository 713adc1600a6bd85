use common::{DistrictOption, MonthlyRecord};

use crate::charts::{BarChart, TrendChart};
use crate::fallback::fallback_districts;
use crate::format::{format_currency, format_number, format_percent};
use crate::messages;

/// The only state served by this deployment.
pub const DEFAULT_STATE: &str = "Uttar Pradesh";

/// Headline figures of the most recent month, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub month: String,
    pub households_worked: String,
    pub persondays: String,
    pub expenditure: String,
    pub female_pct: String,
}

impl Summary {
    pub fn from_record(record: &MonthlyRecord) -> Self {
        Self {
            month: record.month.clone(),
            households_worked: format_number(Some(record.households_worked)),
            persondays: format_number(Some(record.persondays)),
            expenditure: format_currency(record.expenditure),
            female_pct: format_percent(record.female_pct),
        }
    }
}

/// Everything the dashboard page shows.
///
/// `options[0]` is always the placeholder entry. `summary` being set means
/// the result panel is visible. `chart_revision` changes on every render so
/// the chart slots know to replace what they drew before.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub states: Vec<String>,
    pub selected_state: String,
    pub options: Vec<DistrictOption>,
    pub selected: String,
    pub error: Option<String>,
    pub summary: Option<Summary>,
    pub trend: Option<TrendChart>,
    pub bar: Option<BarChart>,
    pub chart_revision: u32,
    pub fetching: bool,
    pub locating: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DEFAULT_STATE)
    }
}

impl DashboardState {
    pub fn new(state: impl Into<String>) -> Self {
        let state = state.into();
        let placeholder = Self::placeholder();
        Self {
            states: vec![state.clone()],
            selected_state: state,
            selected: placeholder.value.clone(),
            options: vec![placeholder],
            error: None,
            summary: None,
            trend: None,
            bar: None,
            chart_revision: 0,
            fetching: false,
            locating: false,
        }
    }

    /// The non-selectable first entry of the district list.
    pub fn placeholder() -> DistrictOption {
        DistrictOption::new(messages::PLACEHOLDER)
    }

    pub fn is_placeholder(value: &str) -> bool {
        value.is_empty() || value.starts_with('—')
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Replaces the district list; the selection goes back to the placeholder.
    pub fn set_districts<I>(&mut self, districts: I)
    where
        I: IntoIterator<Item = DistrictOption>,
    {
        let placeholder = Self::placeholder();
        self.selected = placeholder.value.clone();
        self.options = std::iter::once(placeholder).chain(districts).collect();
    }

    pub fn use_fallback_districts(&mut self) {
        self.set_districts(fallback_districts());
    }

    pub fn has_only_placeholder(&self) -> bool {
        self.options.len() <= 1
    }

    /// Selects a district by value. Values not in the list are ignored.
    pub fn select(&mut self, value: &str) {
        if self.options.iter().any(|o| o.value == value) {
            self.selected = value.to_string();
        } else {
            tracing::debug!(value, "ignoring selection of unknown district");
        }
    }

    pub fn select_state(&mut self, state: &str) {
        if self.states.iter().any(|s| s == state) {
            self.selected_state = state.to_string();
        }
    }

    /// The selected district, unless the placeholder is selected.
    pub fn selected_district(&self) -> Option<&str> {
        Some(self.selected.as_str()).filter(|value| !Self::is_placeholder(value))
    }

    /// Shows a newest-first series. An empty series leaves the page as it was.
    pub fn display(&mut self, series: &[MonthlyRecord]) {
        let Some(latest) = series.first() else {
            return;
        };
        self.clear_error();
        self.summary = Some(Summary::from_record(latest));
        self.trend = Some(TrendChart::from_series(series));
        self.bar = Some(BarChart::from_series(series));
        self.chart_revision = self.chart_revision.wrapping_add(1);
    }

    /// Selects the district matching a geocoded name.
    ///
    /// Matching is a case-insensitive substring test on the visible labels.
    /// An unknown name is appended as an unverified entry and selected.
    pub fn apply_candidate(&mut self, candidate: &str) {
        let needle = candidate.to_lowercase();
        let matched = self
            .options
            .iter()
            .filter(|o| !Self::is_placeholder(&o.value))
            .find(|o| o.label.to_lowercase().contains(&needle))
            .map(|o| o.value.clone());

        match matched {
            Some(value) => {
                tracing::info!(candidate, %value, "location matched a listed district");
                self.selected = value;
                self.clear_error();
            }
            None => {
                tracing::info!(candidate, "location district not listed, adding it");
                self.options.push(DistrictOption::new(candidate));
                self.selected = candidate.to_string();
                self.show_error(messages::DISTRICT_ADDED_FROM_LOCATION);
            }
        }
    }

    /// An operation is in flight. Every control is locked until it finishes,
    /// since the operation publishes over the whole page when it does.
    pub fn is_busy(&self) -> bool {
        self.fetching || self.locating
    }

    pub fn get_data_label(&self) -> &'static str {
        if self.fetching {
            messages::GET_DATA_BUSY
        } else {
            messages::GET_DATA
        }
    }

    pub fn locate_label(&self) -> &'static str {
        if self.locating {
            messages::LOCATE_BUSY
        } else {
            messages::LOCATE
        }
    }
}
