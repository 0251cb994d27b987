//! Field identifiers
//!
//! [`FieldId`] is opaque: ids generated here are ULIDs, but ids loaded from
//! storage may be any non-empty string.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use ulid::Ulid;

/// Unique, stable identifier of a field within a schema
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldId(String);

impl FieldId {
    /// Wrap a generated ULID
    #[inline]
    #[must_use]
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid.to_string())
    }

    /// Generate a fresh random id
    ///
    /// Prefer [`FieldFactory`](crate::FieldFactory) inside an editing session;
    /// it guarantees monotonic, collision-free ids.
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self::from_ulid(Ulid::new())
    }

    /// Borrow as string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FieldId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FieldId {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SchemaError::EmptyFieldId);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl TryFrom<String> for FieldId {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldId> for String {
    fn from(id: FieldId) -> Self {
        id.0
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_differ() {
        let a = FieldId::generate();
        let b = FieldId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 26);
    }

    #[test]
    fn parse_rejects_blank() {
        assert_eq!("   ".parse::<FieldId>(), Err(SchemaError::EmptyFieldId));
        assert_eq!("k3j9x0a1b".parse::<FieldId>().unwrap().as_str(), "k3j9x0a1b");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id: FieldId = "abc123".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");
    }

    #[test]
    fn deserialize_applies_parse_rules() {
        assert!(serde_json::from_str::<FieldId>("\"\"").is_err());
        assert!(serde_json::from_str::<FieldId>("\"  \"").is_err());
        let id: FieldId = serde_json::from_str("\" f-1 \"").unwrap();
        assert_eq!(id.as_str(), "f-1");
    }
}
