use crate::domain::common::{deserialize_id, deserialize_opt_count, ContactDetails};
use crate::enums::UserStatus;
use serde::{Deserialize, Serialize};

/// End-user row of `user/all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub contact_details: ContactDetails,
    /// Missing status means the account is active
    #[serde(default = "default_status")]
    pub status: UserStatus,
    #[serde(default, deserialize_with = "deserialize_opt_count")]
    pub total_bookings: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_opt_count")]
    pub completed_bookings: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_opt_count")]
    pub favorites_count: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_opt_count")]
    pub reviews_count: Option<u64>,
    #[serde(default)]
    pub created_time_stamp: Option<String>,
}

fn default_status() -> UserStatus {
    UserStatus::Active
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// First letter of the name for the avatar bubble
    pub fn initial(&self) -> String {
        self.contact_details
            .name
            .as_deref()
            .and_then(|n| n.trim().chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_status_is_active() {
        let user: User = serde_json::from_str(r#"{ "id": 9, "contactDetails": { "name": "ravi" } }"#)
            .unwrap();
        assert!(user.is_active());
        assert_eq!(user.initial(), "R");
    }

    #[test]
    fn test_suspended_user() {
        let user: User = serde_json::from_str(r#"{ "id": "u1", "status": "SUSPENDED" }"#).unwrap();
        assert_eq!(user.status, UserStatus::Suspended);
        assert_eq!(user.initial(), "?");
    }
}
