use common::Address;

/// Picks the district-like name from a reverse-geocoded address.
///
/// Fields are tried from the most to the least administrative:
/// county, state_district, district, town, city, village.
pub fn resolve_candidate(address: &Address) -> Option<&str> {
    [
        &address.county,
        &address.state_district,
        &address.district,
        &address.town,
        &address.city,
        &address.village,
    ]
    .into_iter()
    .filter_map(|field| field.as_deref())
    .map(str::trim)
    .find(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_county_wins() {
        let address = Address {
            county: Some("Agra".into()),
            city: Some("Agra City".into()),
            ..Default::default()
        };
        assert_eq!(resolve_candidate(&address), Some("Agra"));
    }

    #[test]
    fn test_falls_through_in_priority_order() {
        let address = Address {
            city: Some("Lucknow".into()),
            village: Some("Bakshi Ka Talab".into()),
            town: Some("Malihabad".into()),
            ..Default::default()
        };
        assert_eq!(resolve_candidate(&address), Some("Malihabad"));
    }

    #[test]
    fn test_blank_fields_are_skipped() {
        let address = Address {
            county: Some("  ".into()),
            state_district: Some("Varanasi".into()),
            ..Default::default()
        };
        assert_eq!(resolve_candidate(&address), Some("Varanasi"));
    }

    #[test]
    fn test_no_candidate() {
        assert_eq!(resolve_candidate(&Address::default()), None);
    }
}
