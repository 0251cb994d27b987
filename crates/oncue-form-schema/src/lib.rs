//! OnCue Form Schema
//!
//! Typed model of a form builder document.
//!
//! # Core Concepts
//!
//! - [`FormSchema`]: Title, description and the ordered field list
//! - [`FormField`]: One input definition with a stable [`FieldId`]
//! - [`FieldKind`]: Tagged union, one variant per [`FieldType`]
//! - [`OptionList`]: Non-empty choice list for choice fields
//! - [`FieldPatch`]: Partial, type-checked field update
//! - [`FieldFactory`]: Fresh fields with collision-free ids
//!
//! # Example
//!
//! ```rust
//! use oncue_form_schema::{FieldFactory, FieldPatch, FieldType, FormSchema};
//!
//! let mut factory = FieldFactory::new();
//! let mut schema = FormSchema::new("Feedback", "Tell us how we did");
//!
//! let mut rating = factory.create(FieldType::Dropdown);
//! rating.apply(&FieldPatch::new().label("Rating").options(["Good", "Bad"]))?;
//! schema.push(rating)?;
//!
//! assert_eq!(schema.fields()[0].options().map(|o| o.len()), Some(2));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod factory;
mod field;
mod field_type;
mod id;
mod options;
mod ordering;
mod patch;
mod schema;
mod wire;

// Re-exports
pub use error::{OptionError, PatchError, SchemaError};
pub use factory::FieldFactory;
pub use field::{
    ChoiceInput, FieldKind, FormField, InputMeta, PlainInput, TextInput, COPY_SUFFIX,
    DEFAULT_FIELD_LABEL,
};
pub use field_type::FieldType;
pub use id::FieldId;
pub use options::{default_option_label, OptionList, DEFAULT_OPTION_COUNT};
pub use ordering::move_item;
pub use patch::{FieldAttribute, FieldPatch};
pub use schema::FormSchema;
pub use wire::RawField;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn build_edit_serialize() {
        let mut factory = FieldFactory::new();
        let mut schema = FormSchema::new("Kickoff", "Project kickoff questions");

        schema.push(factory.create(FieldType::Heading)).unwrap();
        schema.push(factory.create(FieldType::SingleChoice)).unwrap();
        schema.push(factory.create(FieldType::Date)).unwrap();

        let choice_id = schema.fields()[1].id().clone();
        schema
            .get_mut(&choice_id)
            .unwrap()
            .options_mut()
            .unwrap()
            .push_default();

        schema.move_field(2, 0).unwrap();

        let types: Vec<_> = schema.fields().iter().map(FormField::field_type).collect();
        assert_eq!(
            types,
            vec![FieldType::Date, FieldType::Heading, FieldType::SingleChoice]
        );

        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["fields"][2]["options"][3], "Option 4");
    }
}
