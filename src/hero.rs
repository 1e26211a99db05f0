// Hero model
//
// The one entity this app deals with. Ids are assigned by the backend;
// the client only ever sends a `NewHero` when creating.

use serde::{Deserialize, Serialize};

/// A hero as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    pub name: String,
    pub strength: i32,
}

impl Hero {
    pub fn new(id: u32, name: impl Into<String>, strength: i32) -> Self {
        Self {
            id,
            name: name.into(),
            strength,
        }
    }
}

/// Hero without an id, as sent on create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHero {
    pub name: String,
    /// Omitted from the body when unset; the backend picks a default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<i32>,
}

impl NewHero {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            strength: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hero_omits_missing_strength() {
        let json = serde_json::to_string(&NewHero::named("Hero Bro")).unwrap();
        assert_eq!(json, r#"{"name":"Hero Bro"}"#);
    }

    #[test]
    fn test_hero_wire_format() {
        let hero: Hero =
            serde_json::from_str(r#"{"id":4,"name":"testhero","strength":100}"#).unwrap();
        assert_eq!(hero, Hero::new(4, "testhero", 100));
    }
}
