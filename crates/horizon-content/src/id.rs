use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of an entity in the content tree.
///
/// Compared and stored without interpretation. The empty string is a valid
/// value at this layer; callers decide what it means.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_is_transparent_in_json() {
        let id = EntityId::new("milky-way");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"milky-way\"");

        let back: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn entity_id_display() {
        assert_eq!(EntityId::from("sol").to_string(), "sol");
        assert!(EntityId::from("").is_empty());
    }
}
