use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Natural key of an actor: `"name surname"`.
///
/// Two actors with the same name and surname are the same actor; nationality
/// does not participate in identity.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    pub fn from_parts(name: &str, surname: &str) -> Self {
        Self(format!("{name} {surname}"))
    }

    /// Wrap an already-joined `"name surname"` key.
    pub fn from_key(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ActorId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorId({:?})", self.0)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn joins_name_and_surname() {
        assert_eq!(ActorId::from_parts("John", "Doe").as_str(), "John Doe");
        assert_eq!(ActorId::from_parts("John", "Doe"), ActorId::from_key("John Doe"));
    }

    #[test]
    fn lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(ActorId::from_parts("Ada", "Lovelace"), 1);
        assert_eq!(map.get("Ada Lovelace"), Some(&1));
    }
}
