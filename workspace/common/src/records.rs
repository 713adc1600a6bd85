use serde::{Deserialize, Serialize};

/// Response of `GET {API_BASE}/data/{state}/{district}?months=N`.
/// Records are delivered newest-first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MetricsResponse {
    #[serde(default)]
    pub data: Vec<MonthlyRecord>,
}

/// Scheme figures for one district and month.
///
/// Deserialization accepts the older field names (`households`,
/// `persondays_generated`, `total_expenditure`) and numbers sent as floats.
/// A primary field that is missing or zero falls through to its synonym,
/// then to zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(from = "WireMonthlyRecord")]
pub struct MonthlyRecord {
    /// `YYYY-MM`; empty when the backend omitted it.
    pub month: String,
    pub households_worked: i64,
    pub persondays: i64,
    /// Whole rupees.
    pub expenditure: i64,
    /// Share of women in persondays, 0-100.
    pub female_pct: Option<f64>,
}

impl MonthlyRecord {
    pub fn new(
        month: impl Into<String>,
        households_worked: i64,
        persondays: i64,
        expenditure: i64,
        female_pct: Option<f64>,
    ) -> Self {
        Self {
            month: month.into(),
            households_worked,
            persondays,
            expenditure,
            female_pct,
        }
    }
}

#[derive(Deserialize)]
struct WireMonthlyRecord {
    month: Option<String>,
    households_worked: Option<f64>,
    households: Option<f64>,
    persondays: Option<f64>,
    persondays_generated: Option<f64>,
    expenditure: Option<f64>,
    total_expenditure: Option<f64>,
    female_pct: Option<f64>,
}

impl From<WireMonthlyRecord> for MonthlyRecord {
    fn from(wire: WireMonthlyRecord) -> Self {
        let month = wire.month.unwrap_or_default();
        if wire.households_worked.is_none() && wire.households.is_some() {
            tracing::trace!(%month, "record uses legacy field names");
        }
        Self {
            households_worked: first_nonzero(wire.households_worked, wire.households),
            persondays: first_nonzero(wire.persondays, wire.persondays_generated),
            expenditure: first_nonzero(wire.expenditure, wire.total_expenditure),
            female_pct: wire.female_pct,
            month,
        }
    }
}

fn first_nonzero(primary: Option<f64>, synonym: Option<f64>) -> i64 {
    primary
        .filter(|v| *v != 0.0)
        .or(synonym)
        .filter(|v| v.is_finite())
        .map(|v| v.round() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_field_names() {
        let body = r#"{"month":"2025-10","households_worked":221000,"persondays":760000,"expenditure":52000000,"female_pct":46.2}"#;
        let record: MonthlyRecord = serde_json::from_str(body).unwrap();
        assert_eq!(
            record,
            MonthlyRecord::new("2025-10", 221000, 760000, 52000000, Some(46.2))
        );
    }

    #[test]
    fn test_synonym_field_names() {
        let body = r#"{"month":"2025-09","households":198500,"persondays_generated":710000,"total_expenditure":48000000}"#;
        let record: MonthlyRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.households_worked, 198500);
        assert_eq!(record.persondays, 710000);
        assert_eq!(record.expenditure, 48000000);
        assert_eq!(record.female_pct, None);
    }

    #[test]
    fn test_zero_primary_falls_through_to_synonym() {
        let body = r#"{"households_worked":0,"households":1200}"#;
        let record: MonthlyRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.households_worked, 1200);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let record: MonthlyRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.month, "");
        assert_eq!(record.households_worked, 0);
        assert_eq!(record.persondays, 0);
        assert_eq!(record.expenditure, 0);
        assert_eq!(record.female_pct, None);
    }

    #[test]
    fn test_float_counts_are_rounded() {
        let body = r#"{"month":"2025-01","households_worked":102000.0,"persondays":399999.6,"expenditure":2.6e7}"#;
        let record: MonthlyRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.households_worked, 102000);
        assert_eq!(record.persondays, 400000);
        assert_eq!(record.expenditure, 26000000);
    }

    #[test]
    fn test_metrics_response_keeps_order() {
        let body = r#"{"data":[{"month":"2025-10"},{"month":"2025-09"}]}"#;
        let parsed: MetricsResponse = serde_json::from_str(body).unwrap();
        let months: Vec<_> = parsed.data.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, vec!["2025-10", "2025-09"]);
    }
}
