use serde::{Deserialize, Serialize};

/// Response of `GET {API_BASE}/districts/{state}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DistrictsResponse {
    #[serde(default)]
    pub districts: Vec<String>,
}

/// One entry of the district selector.
///
/// `label` is what the user sees and may differ from `value`, e.g. when a
/// localized name is shown for an English key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DistrictOption {
    pub value: String,
    pub label: String,
}

impl DistrictOption {
    /// Option whose value and label are the same text.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: name.clone(),
            label: name,
        }
    }

    pub fn with_label(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl From<String> for DistrictOption {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_districts_response_parses() {
        let body = r#"{"districts": ["Agra", "Aligarh"]}"#;
        let parsed: DistrictsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.districts, vec!["Agra", "Aligarh"]);
    }

    #[test]
    fn test_missing_districts_field_is_empty() {
        let parsed: DistrictsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.districts.is_empty());
    }

    #[test]
    fn test_option_from_name_uses_name_for_both() {
        let option = DistrictOption::from("Mau".to_string());
        assert_eq!(option.value, "Mau");
        assert_eq!(option.label, "Mau");
    }
}
