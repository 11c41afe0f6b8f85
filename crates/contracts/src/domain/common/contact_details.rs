use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Contact block the backend attaches to vendors, users and bookings.
/// Keys not modelled here are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContactDetails {
    /// `+<countryCode>-<mobile>` when both parts are present
    pub fn phone(&self) -> Option<String> {
        match (self.country_code.as_deref(), self.mobile.as_deref()) {
            (Some(code), Some(mobile)) if !code.is_empty() && !mobile.is_empty() => {
                Some(format!("+{}-{}", code.trim_start_matches('+'), mobile))
            }
            _ => None,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("—")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_needs_both_parts() {
        let mut contact = ContactDetails {
            country_code: Some("91".to_string()),
            mobile: Some("9876543210".to_string()),
            ..Default::default()
        };
        assert_eq!(contact.phone().as_deref(), Some("+91-9876543210"));
        contact.mobile = None;
        assert_eq!(contact.phone(), None);
    }

    #[test]
    fn test_unmodelled_keys_survive_serialization() {
        let value = serde_json::json!({ "name": "V", "vendorId": "v-9" });
        let contact: ContactDetails = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(contact.display_name(), "V");
        assert_eq!(serde_json::to_value(&contact).unwrap(), value);
    }
}
