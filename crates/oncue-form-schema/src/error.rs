//! Error types for the schema model
//!
//! Provides error handling for:
//! - Option list edits (range checks, minimum-one guard)
//! - Schema structure (unique ids, options per field type)
//! - Field patches (attributes a field type does not carry)

use crate::field_type::FieldType;
use crate::id::FieldId;
use crate::patch::FieldAttribute;

/// Errors from option list edits
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    /// Option index outside the list
    #[error("option index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Refused: a choice field keeps at least one option
    #[error("cannot remove the last remaining option")]
    LastOption,

    /// An option list was built from zero entries
    #[error("option list must not be empty")]
    Empty,
}

/// Errors in schema structure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Field id is the empty string
    #[error("field id must not be empty")]
    EmptyFieldId,

    /// Two fields share an id
    #[error("duplicate field id: {0}")]
    DuplicateFieldId(FieldId),

    /// Type tag outside the closed field type set
    #[error("unknown field type: '{0}'")]
    UnknownFieldType(String),

    /// Choice field without an option list
    #[error("field {id} of type {field_type} requires options")]
    MissingOptions { id: FieldId, field_type: FieldType },

    /// Option list on a field type that has none
    #[error("field {id} of type {field_type} does not take options")]
    UnexpectedOptions { id: FieldId, field_type: FieldType },

    /// Option list present but invalid
    #[error("invalid options on field {id}: {source}")]
    InvalidOptions {
        id: FieldId,
        #[source]
        source: OptionError,
    },

    /// Position outside the field sequence
    #[error("index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Errors applying a [`FieldPatch`](crate::FieldPatch)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    /// Patch names an attribute the field type does not carry
    #[error("attribute '{attribute}' does not apply to {field_type} fields")]
    NotApplicable {
        attribute: FieldAttribute,
        field_type: FieldType,
    },

    /// Options patch rejected
    #[error("options rejected: {0}")]
    Option(#[from] OptionError),
}
