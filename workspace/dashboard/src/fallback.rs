//! Built-in data shown when the backend cannot be reached.

use common::{DistrictOption, MonthlyRecord};

/// Common Uttar Pradesh districts, used when the district list cannot be fetched.
pub const FALLBACK_DISTRICTS: [&str; 30] = [
    "Agra",
    "Aligarh",
    "Prayagraj",
    "Lucknow",
    "Varanasi",
    "Gorakhpur",
    "Meerut",
    "Moradabad",
    "Faizabad",
    "Kanpur Nagar",
    "Kanpur Dehat",
    "Bareilly",
    "Saharanpur",
    "Jhansi",
    "Mathura",
    "Gautam Buddha Nagar",
    "Ballia",
    "Sultanpur",
    "Rampur",
    "Azamgarh",
    "Mau",
    "Budaun",
    "Ghaziabad",
    "Firozabad",
    "Etawah",
    "Etah",
    "Bijnor",
    "Shahjahanpur",
    "Sambhal",
    "Bahraich",
];

pub fn fallback_districts() -> impl Iterator<Item = DistrictOption> {
    FALLBACK_DISTRICTS.iter().map(|name| DistrictOption::new(*name))
}

/// Ten months of sample figures, newest first.
pub fn sample_series() -> Vec<MonthlyRecord> {
    vec![
        MonthlyRecord::new("2025-10", 221000, 760000, 52000000, Some(46.2)),
        MonthlyRecord::new("2025-09", 198500, 710000, 48000000, Some(45.8)),
        MonthlyRecord::new("2025-08", 175000, 650000, 44000000, Some(45.0)),
        MonthlyRecord::new("2025-07", 160200, 600000, 40000000, Some(44.6)),
        MonthlyRecord::new("2025-06", 150000, 560000, 38000000, Some(44.0)),
        MonthlyRecord::new("2025-05", 139000, 520000, 35000000, Some(43.5)),
        MonthlyRecord::new("2025-04", 128000, 480000, 33000000, Some(43.1)),
        MonthlyRecord::new("2025-03", 118000, 450000, 30000000, Some(42.8)),
        MonthlyRecord::new("2025-02", 110000, 420000, 28000000, Some(42.0)),
        MonthlyRecord::new("2025-01", 102000, 400000, 26000000, Some(41.5)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_series_is_newest_first() {
        let series = sample_series();
        assert_eq!(series.len(), 10);
        assert!(series.windows(2).all(|w| w[0].month > w[1].month));
    }

    #[test]
    fn test_fallback_districts_are_unique() {
        let mut names = FALLBACK_DISTRICTS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FALLBACK_DISTRICTS.len());
    }
}
