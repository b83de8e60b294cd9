//! Read-only mirrors of the server's activity data.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Everything the server reports about one activity, minus its name.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Registration order, as returned by the server.
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub details: ActivityDetails,
}

impl Activity {
    /// Remaining capacity. Not clamped: an over-full activity reports a
    /// negative number.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.details.max_participants) - self.details.participants.len() as i64
    }

    pub fn removal_for(&self, email: &str) -> Removal {
        Removal {
            activity: self.name.clone(),
            email: email.to_string(),
        }
    }
}

/// The full set of activities from one `GET /activities`, in the order the
/// server listed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    activities: Vec<Activity>,
}

impl Catalog {
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Insert or overwrite by name. An overwritten entry keeps its position.
    pub fn insert(&mut self, name: String, details: ActivityDetails) {
        match self.activities.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.details = details,
            None => self.activities.push(Activity { name, details }),
        }
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Catalog, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut catalog = Catalog {
                    activities: Vec::with_capacity(map.size_hint().unwrap_or(0)),
                };
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    catalog.insert(name, details);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// Payload carried by a participant's removal control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub activity: String,
    pub email: String,
}

impl Removal {
    pub fn confirmation_prompt(&self) -> String {
        format!("Unregister {} from {}?", self.email, self.activity)
    }
}

/// Body shape shared by the signup and unregister endpoints.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ReplyBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// A decoded response from a mutation endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: ReplyBody,
}

impl ApiReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(max: u32, participants: &[&str]) -> ActivityDetails {
        ActivityDetails {
            description: "desc".into(),
            schedule: "Fridays".into(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn spots_left_is_capacity_minus_roster() {
        let a = Activity {
            name: "Chess Club".into(),
            details: details(10, &["a@x.com"]),
        };
        assert_eq!(a.spots_left(), 9);
    }

    #[test]
    fn spots_left_goes_negative_when_over_full() {
        let a = Activity {
            name: "Gym".into(),
            details: details(1, &["a@x.com", "b@x.com", "c@x.com"]),
        };
        assert_eq!(a.spots_left(), -2);
    }

    #[test]
    fn catalog_keeps_server_order() {
        let json = r#"{
            "Zumba": {"description": "d", "schedule": "Mon", "max_participants": 5, "participants": []},
            "Art": {"description": "d", "schedule": "Tue", "max_participants": 5, "participants": []},
            "Math": {"description": "d", "schedule": "Wed", "max_participants": 5, "participants": []}
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Zumba", "Art", "Math"]);
    }

    #[test]
    fn duplicate_key_keeps_first_position_and_last_value() {
        let json = r#"{
            "Art": {"description": "old", "schedule": "Tue", "max_participants": 5},
            "Math": {"description": "d", "schedule": "Wed", "max_participants": 5},
            "Art": {"description": "new", "schedule": "Tue", "max_participants": 5}
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.activities()[0].name, "Art");
        assert_eq!(catalog.get("Art").unwrap().details.description, "new");
    }

    #[test]
    fn missing_participants_decode_as_empty() {
        let json = r#"{"Chess Club": {"description": "d", "schedule": "Fri", "max_participants": 3}}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        let chess = catalog.get("Chess Club").unwrap();
        assert!(chess.details.participants.is_empty());
        assert_eq!(chess.spots_left(), 3);
    }

    #[test]
    fn non_object_catalog_is_rejected() {
        assert!(serde_json::from_str::<Catalog>("[1, 2, 3]").is_err());
    }

    #[test]
    fn confirmation_prompt_names_email_and_activity() {
        let r = Removal {
            activity: "Chess Club".into(),
            email: "a@x.com".into(),
        };
        assert_eq!(r.confirmation_prompt(), "Unregister a@x.com from Chess Club?");
    }

    #[test]
    fn reply_body_tolerates_either_field() {
        let b: ReplyBody = serde_json::from_str(r#"{"detail": "Already signed up"}"#).unwrap();
        assert_eq!(b.detail.as_deref(), Some("Already signed up"));
        assert_eq!(b.message, None);

        let b: ReplyBody = serde_json::from_str("{}").unwrap();
        assert_eq!(b, ReplyBody::default());
    }
}
