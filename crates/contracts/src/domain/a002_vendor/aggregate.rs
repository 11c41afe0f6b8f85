use crate::domain::common::{deserialize_id, deserialize_opt_count, ContactDetails};
use crate::enums::VendorStatus;
use serde::{Deserialize, Serialize};

/// Vendor row of `vendor/all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub contact_details: ContactDetails,
    #[serde(default = "default_status")]
    pub status: VendorStatus,
    #[serde(default, deserialize_with = "deserialize_opt_count")]
    pub total_products: Option<u64>,
    #[serde(default)]
    pub created_time_stamp: Option<String>,
}

fn default_status() -> VendorStatus {
    VendorStatus::Pending
}

impl Vendor {
    pub fn display_name(&self) -> &str {
        self.business_name
            .as_deref()
            .or(self.contact_details.name.as_deref())
            .unwrap_or("—")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_decodes_backend_row() {
        let raw = r#"{
            "id": "v-7",
            "businessName": "Green Acres",
            "contactDetails": { "name": "Asha", "email": "asha@example.com" },
            "status": "approved",
            "totalProducts": 12,
            "createdTimeStamp": "2025-01-04T09:00:00Z"
        }"#;
        let vendor: Vendor = serde_json::from_str(raw).unwrap();
        assert_eq!(vendor.status, VendorStatus::Approved);
        assert_eq!(vendor.total_products, Some(12));
        assert_eq!(vendor.display_name(), "Green Acres");
    }

    #[test]
    fn test_vendor_defaults() {
        let vendor: Vendor = serde_json::from_str(r#"{ "id": 1 }"#).unwrap();
        assert_eq!(vendor.status, VendorStatus::Pending);
        assert_eq!(vendor.display_name(), "—");
    }
}
