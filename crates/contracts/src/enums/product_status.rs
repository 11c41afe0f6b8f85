use super::ListStatus;
use serde::{Deserialize, Serialize};

/// Product moderation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductStatus {
    Pending,
    Approved,
    Rejected,
    /// Anything the backend sends that this console does not know
    Unknown,
}

impl ListStatus for ProductStatus {
    fn wire_value(&self) -> &'static str {
        match self {
            ProductStatus::Pending => "PENDING",
            ProductStatus::Approved => "APPROVED",
            ProductStatus::Rejected => "REJECTED",
            ProductStatus::Unknown => "UNKNOWN",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ProductStatus::Pending => "Pending",
            ProductStatus::Approved => "Approved",
            ProductStatus::Rejected => "Rejected",
            ProductStatus::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[
            ProductStatus::Pending,
            ProductStatus::Approved,
            ProductStatus::Rejected,
        ]
    }

    fn badge_class(&self) -> &'static str {
        match self {
            ProductStatus::Pending => "badge--warning",
            ProductStatus::Approved => "badge--success",
            ProductStatus::Rejected => "badge--danger",
            ProductStatus::Unknown => "badge--neutral",
        }
    }
}

impl From<String> for ProductStatus {
    fn from(value: String) -> Self {
        ProductStatus::from_wire(&value).unwrap_or(ProductStatus::Unknown)
    }
}

impl From<ProductStatus> for String {
    fn from(value: ProductStatus) -> Self {
        value.wire_value().to_string()
    }
}
