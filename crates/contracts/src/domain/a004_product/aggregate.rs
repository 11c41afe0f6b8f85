use crate::domain::common::{deserialize_opt_count, ContactDetails, NamedRef, RecordId};
use crate::enums::ProductStatus;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Product row of `product/all`.
///
/// Moderation posts the whole record back to `POST product`. Keys this console
/// does not model are kept in `extra` (top level) or in the nested refs' own
/// `extra`, and keys the backend left out stay out of the posted body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_contact_details: Option<ContactDetails>,
    #[serde(default = "default_status")]
    pub product_status: ProductStatus,
    #[serde(
        default,
        deserialize_with = "deserialize_opt_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub views: Option<u64>,
    #[serde(
        default,
        deserialize_with = "deserialize_opt_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub likes: Option<u64>,
    #[serde(
        default,
        deserialize_with = "deserialize_opt_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub sold: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time_stamp: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_status() -> ProductStatus {
    ProductStatus::Pending
}

impl Product {
    /// Copy of this product approved by the moderator
    pub fn approved(&self) -> Self {
        Self {
            product_status: ProductStatus::Approved,
            rejection_reason: None,
            ..self.clone()
        }
    }

    /// Copy of this product rejected with `reason` (may be empty)
    pub fn rejected(&self, reason: &str) -> Self {
        Self {
            product_status: ProductStatus::Rejected,
            rejection_reason: Some(reason.trim().to_string()),
            ..self.clone()
        }
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(NamedRef::display_name).unwrap_or("—")
    }

    pub fn vendor_name(&self) -> &str {
        self.vendor_contact_details
            .as_ref()
            .map(ContactDetails::display_name)
            .unwrap_or("—")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Product {
        serde_json::from_value(json!({
            "id": "p-1",
            "title": "Teak sofa",
            "category": { "id": "c-3", "name": "Furniture" },
            "price": 1200.5,
            "productStatus": "PENDING",
            "views": 40,
            "warehouseCode": "W-17"
        }))
        .unwrap()
    }

    #[test]
    fn test_unknown_fields_survive_moderation() {
        let approved = sample().approved();
        let body = serde_json::to_value(&approved).unwrap();
        assert_eq!(body["productStatus"], "APPROVED");
        assert_eq!(body["warehouseCode"], "W-17");
        assert!(body.get("rejectionReason").is_none());
    }

    #[test]
    fn test_rejection_carries_reason() {
        let rejected = sample().rejected("  blurry photos ");
        assert_eq!(rejected.product_status, ProductStatus::Rejected);
        assert_eq!(rejected.rejection_reason.as_deref(), Some("blurry photos"));
        assert_eq!(rejected.category_name(), "Furniture");
        assert_eq!(rejected.vendor_name(), "—");
    }

    #[test]
    fn test_approval_posts_back_the_record_as_received() {
        let product: Product = serde_json::from_value(json!({
            "id": 7,
            "category": { "id": "c-3", "name": "Furniture", "icon": "sofa.png" },
            "vendorContactDetails": { "name": "V", "vendorId": "v-9" }
        }))
        .unwrap();
        assert_eq!(product.id.as_str(), "7");

        let body = serde_json::to_value(product.approved()).unwrap();
        assert_eq!(
            body,
            json!({
                "id": 7,
                "category": { "id": "c-3", "name": "Furniture", "icon": "sofa.png" },
                "vendorContactDetails": { "name": "V", "vendorId": "v-9" },
                "productStatus": "APPROVED"
            })
        );
    }

    #[test]
    fn test_nested_numeric_id_decodes() {
        let product: Product = serde_json::from_value(json!({
            "id": "p-1",
            "category": { "id": 3, "name": "Furniture" },
            "location": { "id": 12, "name": "Goa" }
        }))
        .unwrap();
        assert_eq!(product.category_name(), "Furniture");
        let location_id = product.location.as_ref().and_then(|l| l.id.as_ref());
        assert_eq!(location_id.map(RecordId::as_str), Some("12"));
    }
}
