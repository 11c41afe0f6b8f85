use crate::domain::common::deserialize_id;
use serde::{Deserialize, Serialize};

/// Level of the location hierarchy, root first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LocationLevel {
    Country,
    State,
    City,
    Area,
}

impl LocationLevel {
    pub const ALL: [LocationLevel; 4] = [
        LocationLevel::Country,
        LocationLevel::State,
        LocationLevel::City,
        LocationLevel::Area,
    ];

    pub fn index(&self) -> usize {
        match self {
            LocationLevel::Country => 0,
            LocationLevel::State => 1,
            LocationLevel::City => 2,
            LocationLevel::Area => 3,
        }
    }

    pub fn parent(&self) -> Option<LocationLevel> {
        match self {
            LocationLevel::Country => None,
            LocationLevel::State => Some(LocationLevel::Country),
            LocationLevel::City => Some(LocationLevel::State),
            LocationLevel::Area => Some(LocationLevel::City),
        }
    }

    pub fn child(&self) -> Option<LocationLevel> {
        match self {
            LocationLevel::Country => Some(LocationLevel::State),
            LocationLevel::State => Some(LocationLevel::City),
            LocationLevel::City => Some(LocationLevel::Area),
            LocationLevel::Area => None,
        }
    }

    /// Levels strictly below this one
    pub fn descendants(&self) -> impl Iterator<Item = LocationLevel> {
        let index = self.index();
        LocationLevel::ALL.into_iter().skip(index + 1)
    }

    /// Backend endpoint that lists options of this level
    pub fn endpoint(&self) -> &'static str {
        match self {
            LocationLevel::Country => "location/country",
            LocationLevel::State => "location/state",
            LocationLevel::City => "location/district",
            LocationLevel::Area => "location/area",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LocationLevel::Country => "Country",
            LocationLevel::State => "State",
            LocationLevel::City => "City",
            LocationLevel::Area => "Area",
        }
    }
}

/// One option of a location selector. Parent ids the backend includes are
/// ignored: the chain itself knows the parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationOption {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

impl LocationOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_navigation() {
        assert_eq!(LocationLevel::Country.child(), Some(LocationLevel::State));
        assert_eq!(LocationLevel::Area.child(), None);
        assert_eq!(LocationLevel::City.parent(), Some(LocationLevel::State));
        let below: Vec<_> = LocationLevel::State.descendants().collect();
        assert_eq!(below, vec![LocationLevel::City, LocationLevel::Area]);
    }

    #[test]
    fn test_option_ignores_parent_ids() {
        let option: LocationOption =
            serde_json::from_str(r#"{ "id": 12, "name": "Pune", "parentStateId": "mh" }"#).unwrap();
        assert_eq!(option, LocationOption::new("12", "Pune"));
    }
}
