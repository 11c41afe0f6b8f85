use super::ListStatus;
use serde::{Deserialize, Serialize};

/// End-user account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
    /// Anything the backend sends that this console does not know
    Unknown,
}

impl ListStatus for UserStatus {
    fn wire_value(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
            UserStatus::Suspended => "SUSPENDED",
            UserStatus::Unknown => "UNKNOWN",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Suspended => "Suspended",
            UserStatus::Unknown => "Unknown",
        }
    }

    fn all() -> &'static [Self] {
        &[
            UserStatus::Active,
            UserStatus::Inactive,
            UserStatus::Suspended,
        ]
    }

    fn badge_class(&self) -> &'static str {
        match self {
            UserStatus::Active => "badge--success",
            UserStatus::Inactive => "badge--neutral",
            UserStatus::Suspended => "badge--danger",
            UserStatus::Unknown => "badge--neutral",
        }
    }
}

impl From<String> for UserStatus {
    fn from(value: String) -> Self {
        UserStatus::from_wire(&value).unwrap_or(UserStatus::Unknown)
    }
}

impl From<UserStatus> for String {
    fn from(value: UserStatus) -> Self {
        value.wire_value().to_string()
    }
}
