//! Core type definitions for relationship graphs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used when a pair key is rendered as text
pub const PAIR_SEPARATOR: &str = "|";

/// Identifier of an entity (actor, director, production company or movie)
///
/// Usually the plain name. With role namespacing enabled the id carries a
/// role prefix (`director:Name`) while the node label keeps the plain name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        EntityId(id.into())
    }

    /// Build a role-prefixed id, e.g. `director:Bong Joon-ho`
    pub fn prefixed(role: Role, name: &str) -> Self {
        EntityId(format!("{}:{}", role.prefix(), name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        EntityId(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId(s.to_string())
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The part an entity plays in the dataset
///
/// Variants are declared in ascending precedence. When one id shows up in
/// several roles the node keeps the highest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Movie,
    Supporting,
    Lead,
    Producer,
    Director,
}

impl Role {
    /// Lead vs. everything else, the split used for node shapes
    pub fn is_lead(&self) -> bool {
        matches!(self, Role::Lead)
    }

    /// Combine two observations of the same entity
    pub fn merge(self, other: Role) -> Role {
        self.max(other)
    }

    /// Prefix used by role namespacing
    pub fn prefix(&self) -> &'static str {
        match self {
            Role::Movie => "movie",
            Role::Supporting | Role::Lead => "actor",
            Role::Producer => "producer",
            Role::Director => "director",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Movie => "movie",
            Role::Supporting => "supporting",
            Role::Lead => "lead",
            Role::Producer => "producer",
            Role::Director => "director",
        };
        write!(f, "{}", name)
    }
}

/// Key of a pair counter
///
/// Kept as two ids rather than a joined string so names that contain the
/// separator still split back correctly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct PairKey {
    pub a: EntityId,
    pub b: EntityId,
}

impl PairKey {
    /// Unordered pair: the two ids are stored in lexicographic order
    pub fn symmetric(x: EntityId, y: EntityId) -> Self {
        if x <= y {
            PairKey { a: x, b: y }
        } else {
            PairKey { a: y, b: x }
        }
    }

    /// Ordered pair: `a` is the source side (director, producer)
    pub fn directed(source: EntityId, target: EntityId) -> Self {
        PairKey { a: source, b: target }
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        &self.a == id || &self.b == id
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.a, PAIR_SEPARATOR, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id() {
        let id = EntityId::new("Song Kang-ho");
        assert_eq!(id.as_str(), "Song Kang-ho");
        assert_eq!(format!("{}", id), "Song Kang-ho");

        let id2: EntityId = "Lee Sun-kyun".into();
        assert_eq!(id2.as_str(), "Lee Sun-kyun");
    }

    #[test]
    fn test_prefixed_id() {
        let id = EntityId::prefixed(Role::Director, "Bong Joon-ho");
        assert_eq!(id.as_str(), "director:Bong Joon-ho");

        let lead = EntityId::prefixed(Role::Lead, "Bong Joon-ho");
        let support = EntityId::prefixed(Role::Supporting, "Bong Joon-ho");
        assert_eq!(lead, support);
        assert_ne!(id, lead);
    }

    #[test]
    fn test_role_precedence() {
        assert_eq!(Role::Supporting.merge(Role::Lead), Role::Lead);
        assert_eq!(Role::Lead.merge(Role::Supporting), Role::Lead);
        assert_eq!(Role::Lead.merge(Role::Director), Role::Director);
        assert_eq!(Role::Movie.merge(Role::Producer), Role::Producer);
        assert!(Role::Lead.is_lead());
        assert!(!Role::Director.is_lead());
    }

    #[test]
    fn test_symmetric_pair_key() {
        let ab = PairKey::symmetric("A".into(), "B".into());
        let ba = PairKey::symmetric("B".into(), "A".into());
        assert_eq!(ab, ba);
        assert_eq!(ab.a.as_str(), "A");
        assert_eq!(format!("{}", ab), "A|B");
    }

    #[test]
    fn test_directed_pair_key() {
        let ab = PairKey::directed("Z".into(), "A".into());
        let ba = PairKey::directed("A".into(), "Z".into());
        assert_ne!(ab, ba);
        assert_eq!(ab.a.as_str(), "Z");
        assert!(ab.contains(&"A".into()));
        assert!(!ab.contains(&"Q".into()));
    }

    #[test]
    fn test_pair_key_with_dash_names() {
        // names with hyphens must not be split apart
        let key = PairKey::symmetric("Song Kang-ho".into(), "Choi Woo-shik".into());
        assert_eq!(key.a.as_str(), "Choi Woo-shik");
        assert_eq!(key.b.as_str(), "Song Kang-ho");
    }
}
