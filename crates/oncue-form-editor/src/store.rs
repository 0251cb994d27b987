//! Persistence port
//!
//! The editor never touches storage directly. A session loads and saves
//! whole schemas through a [`SchemaStore`]; the store decides where they live.

use crate::error::StoreError;
use async_trait::async_trait;
use dashmap::DashMap;
use oncue_form_schema::FormSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of a stored form
///
/// Non-empty; ASCII alphanumerics, `-`, `_` and `.` only; no leading `.`.
/// The same key is safe as a file stem.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FormKey(String);

impl FormKey {
    /// Validate a key
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidKey`] if the key is empty, starts with `.`
    /// or contains any other character
    pub fn new(key: impl Into<String>) -> Result<Self, StoreError> {
        let key = key.into();
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if valid {
            Ok(Self(key))
        } else {
            Err(StoreError::InvalidKey(key))
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FormKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FormKey {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FormKey {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FormKey> for String {
    fn from(key: FormKey) -> Self {
        key.0
    }
}

/// Load/save port for whole schemas
#[async_trait]
pub trait SchemaStore: Send + Sync + Debug {
    /// Fetch the schema stored under `key`; `Ok(None)` if there is none
    async fn load(&self, key: &FormKey) -> Result<Option<FormSchema>, StoreError>;

    /// Store `schema` under `key`, replacing what was there
    async fn save(&self, key: &FormKey, schema: &FormSchema) -> Result<(), StoreError>;
}

/// Process-local store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    forms: DashMap<FormKey, FormSchema>,
}

impl InMemoryStore {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &FormKey) -> bool {
        self.forms.contains_key(key)
    }
}

#[async_trait]
impl SchemaStore for InMemoryStore {
    async fn load(&self, key: &FormKey) -> Result<Option<FormSchema>, StoreError> {
        Ok(self.forms.get(key).map(|entry| entry.value().clone()))
    }

    async fn save(&self, key: &FormKey, schema: &FormSchema) -> Result<(), StoreError> {
        self.forms.insert(key.clone(), schema.clone());
        Ok(())
    }
}

/// One pretty-printed `<key>.json` file per form under a directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`
    #[must_use]
    pub fn path_for(&self, key: &FormKey) -> PathBuf {
        self.root.join(format!("{}.json", key.as_str()))
    }
}

#[async_trait]
impl SchemaStore for JsonFileStore {
    async fn load(&self, key: &FormKey) -> Result<Option<FormSchema>, StoreError> {
        let path = self.path_for(key);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no stored form");
                return Ok(None);
            }
            Err(e) => return Err(StoreError::io_error(path, e)),
        };

        let schema = serde_json::from_slice(&bytes)?;
        Ok(Some(schema))
    }

    async fn save(&self, key: &FormKey, schema: &FormSchema) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StoreError::io_error(&self.root, e))?;

        let path = self.path_for(key);
        let staging = self.root.join(format!(".{}.json.tmp", key.as_str()));
        let json = serde_json::to_vec_pretty(schema)?;

        tokio::fs::write(&staging, json)
            .await
            .map_err(|e| StoreError::io_error(&staging, e))?;
        tokio::fs::rename(&staging, &path)
            .await
            .map_err(|e| StoreError::io_error(&path, e))?;

        tracing::debug!(path = %path.display(), "form written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oncue_form_schema::FieldFactory;

    #[test]
    fn key_validation() {
        assert!(FormKey::new("client-onboarding_v2.draft").is_ok());
        for bad in ["", ".hidden", "../escape", "a/b", "sp ace"] {
            assert!(
                matches!(FormKey::new(bad), Err(StoreError::InvalidKey(_))),
                "{bad:?} accepted"
            );
        }
    }

    #[tokio::test]
    async fn in_memory_round_trip() {
        let store = InMemoryStore::new();
        let key: FormKey = "intake".parse().unwrap();
        assert!(store.load(&key).await.unwrap().is_none());

        let schema = FormSchema::client_onboarding(&mut FieldFactory::new());
        store.save(&key, &schema).await.unwrap();

        assert_eq!(store.load(&key).await.unwrap(), Some(schema));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("forms"));
        let key: FormKey = "intake".parse().unwrap();

        assert!(store.load(&key).await.unwrap().is_none());

        let schema = FormSchema::client_onboarding(&mut FieldFactory::new());
        store.save(&key, &schema).await.unwrap();

        assert!(store.path_for(&key).exists());
        assert_eq!(store.load(&key).await.unwrap(), Some(schema));
    }

    #[tokio::test]
    async fn corrupt_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        let key: FormKey = "broken".parse().unwrap();
        std::fs::write(store.path_for(&key), "{ not json").unwrap();

        assert!(matches!(
            store.load(&key).await,
            Err(StoreError::Serialization(_))
        ));
    }
}
