use serde::{Deserialize, Serialize};

/// A person record as stored by the gateway. Everything except the id is
/// optional; formatting downstream degrades by omission rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i64,
    pub external_link_id: Option<String>,
    pub name: PersonName,
    pub locations: Vec<Location>,
    pub portrait_images: Vec<Image>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonName {
    pub first: Option<String>,
    pub middle: Option<String>,
    pub last: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub aka: Option<String>,
    pub maiden: Option<String>,
}

/// A city/state/country association. A person matches a location-id filter
/// if any sub-object of any of their locations carries that id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    pub city: City,
    pub state: State,
    pub country: Country,
}

impl Location {
    pub fn matches(&self, location_id: i64) -> bool {
        self.city.id == Some(location_id)
            || self.state.id == Some(location_id)
            || self.country.id == Some(location_id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub url_safe_name: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub url_safe_name: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Country {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    pub name: Option<String>,
    pub href: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location_with_city(id: i64) -> Location {
        Location {
            city: City {
                id: Some(id),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn location_matches_on_city_state_or_country() {
        let loc = Location {
            city: City {
                id: Some(1),
                ..Default::default()
            },
            state: State {
                id: Some(2),
                ..Default::default()
            },
            country: Country {
                id: Some(3),
                ..Default::default()
            },
        };
        assert!(loc.matches(1));
        assert!(loc.matches(2));
        assert!(loc.matches(3));
        assert!(!loc.matches(4));
    }

    #[test]
    fn empty_location_matches_nothing() {
        let loc = Location::default();
        assert!(!loc.matches(0));
        assert!(!loc.matches(222));
    }

    #[test]
    fn city_serializes_with_camel_case_fields() {
        let loc = location_with_city(7);
        let json = serde_json::to_value(&loc.city).expect("serialize city");
        assert_eq!(json["id"], 7);
        assert!(json.get("urlSafeName").is_some());
        assert!(json.get("url_safe_name").is_none());
    }
}
