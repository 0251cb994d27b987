//! Error types for the form editor
//!
//! Provides error handling for:
//! - Mutations that reference a missing field
//! - Invariant-guard refusals (last option, inapplicable attributes)
//! - Edits attempted while previewing
//! - Load/save calls against a schema store
//! - Configuration parsing

use oncue_form_schema::{FieldAttribute, FieldId, FieldType, OptionError, SchemaError};
use std::path::PathBuf;

/// Errors from editor operations
///
/// Every variant leaves the schema exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// No field with this id
    #[error("field not found: {0}")]
    FieldNotFound(FieldId),

    /// Option edit on a field without an option list
    #[error("field {0} has no option list")]
    NoOptions(FieldId),

    /// Patch names an attribute the field type does not carry
    #[error("attribute '{attribute}' does not apply to {field_type} field {id}")]
    NotApplicable {
        id: FieldId,
        attribute: FieldAttribute,
        field_type: FieldType,
    },

    /// Option list edit refused
    #[error("option edit on field {id} refused: {source}")]
    Option {
        id: FieldId,
        #[source]
        source: OptionError,
    },

    /// Reorder index outside the field list
    #[error("index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Properties panel edit with nothing selected
    #[error("no field selected")]
    NoSelection,

    /// Structural edit attempted in preview mode
    #[error("editor is in preview mode")]
    ReadOnly,

    /// Schema structure violation
    #[error("schema error: {0}")]
    Schema(SchemaError),
}

impl EditError {
    /// Operation referenced an id absent from the schema
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FieldNotFound(_))
    }

    /// Operation was refused to protect an invariant or the current mode
    #[inline]
    #[must_use]
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            Self::Option { .. } | Self::NotApplicable { .. } | Self::NoOptions(_) | Self::ReadOnly
        )
    }
}

impl From<SchemaError> for EditError {
    fn from(error: SchemaError) -> Self {
        match error {
            SchemaError::IndexOutOfBounds { index, len } => Self::IndexOutOfBounds { index, len },
            other => Self::Schema(other),
        }
    }
}

/// Errors from schema stores
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem failure
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored document is not a valid schema
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key cannot name a stored form
    #[error("invalid form key: '{0}'")]
    InvalidKey(String),

    /// Remote or backend-specific failure
    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors loading editor configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file unreadable
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`EditorConfig`](crate::EditorConfig)
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_bounds_map_to_edit_bounds() {
        let err: EditError = SchemaError::IndexOutOfBounds { index: 4, len: 2 }.into();
        assert_eq!(err, EditError::IndexOutOfBounds { index: 4, len: 2 });
    }

    #[test]
    fn classification() {
        let id: FieldId = "f1".parse().unwrap();
        assert!(EditError::FieldNotFound(id.clone()).is_not_found());
        assert!(EditError::Option {
            id,
            source: OptionError::LastOption
        }
        .is_refusal());
        assert!(EditError::ReadOnly.is_refusal());
        assert!(!EditError::NoSelection.is_not_found());
    }
}
