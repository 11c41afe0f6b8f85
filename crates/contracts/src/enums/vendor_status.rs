use super::ListStatus;
use serde::{Deserialize, Serialize};

/// Vendor onboarding status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VendorStatus {
    Pending,
    Approved,
    Rejected,
    Disabled,
    /// Anything the backend sends that this console does not know
    Unknown,
}

impl ListStatus for VendorStatus {
    fn wire_value(&self) -> &'static str {
        match self {
            VendorStatus::Pending => "PENDING",
            VendorStatus::Approved => "APPROVED",
            VendorStatus::Rejected => "REJECTED",
            VendorStatus::Disabled => "DISABLED",
            VendorStatus::Unknown => "UNKNOWN",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            VendorStatus::Pending => "Pending",
            VendorStatus::Approved => "Approved",
            VendorStatus::Rejected => "Rejected",
            VendorStatus::Disabled => "Disabled",
            VendorStatus::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[
            VendorStatus::Pending,
            VendorStatus::Approved,
            VendorStatus::Rejected,
            VendorStatus::Disabled,
        ]
    }

    fn badge_class(&self) -> &'static str {
        match self {
            VendorStatus::Pending => "badge--warning",
            VendorStatus::Approved => "badge--success",
            VendorStatus::Rejected => "badge--danger",
            VendorStatus::Disabled => "badge--neutral",
            VendorStatus::Unknown => "badge--neutral",
        }
    }
}

impl From<String> for VendorStatus {
    fn from(value: String) -> Self {
        VendorStatus::from_wire(&value).unwrap_or(VendorStatus::Unknown)
    }
}

impl From<VendorStatus> for String {
    fn from(value: VendorStatus) -> Self {
        value.wire_value().to_string()
    }
}
