//! Form schema document
//!
//! [`FormSchema`] is the editable document: title, description and the
//! ordered field list. Field ids are unique at all times; every insert checks
//! it and deserialization rejects duplicates.

use crate::error::SchemaError;
use crate::factory::FieldFactory;
use crate::field::{FieldKind, FormField, InputMeta, TextInput};
use crate::id::FieldId;
use crate::ordering::move_item;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered collection of fields plus form-level text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSchema")]
pub struct FormSchema {
    title: String,
    description: String,
    fields: Vec<FormField>,
}

#[derive(Deserialize)]
struct RawSchema {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    fields: Vec<FormField>,
}

impl TryFrom<RawSchema> for FormSchema {
    type Error = SchemaError;

    fn try_from(raw: RawSchema) -> Result<Self, Self::Error> {
        Self::from_fields(raw.title, raw.description, raw.fields)
    }
}

impl FormSchema {
    /// Empty schema with form-level text
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            fields: Vec::new(),
        }
    }

    /// Schema from an existing field list
    ///
    /// # Errors
    /// Returns [`SchemaError::DuplicateFieldId`] if two fields share an id
    pub fn from_fields(
        title: impl Into<String>,
        description: impl Into<String>,
        fields: Vec<FormField>,
    ) -> Result<Self, SchemaError> {
        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !seen.insert(field.id()) {
                return Err(SchemaError::DuplicateFieldId(field.id().clone()));
            }
        }
        Ok(Self {
            title: title.into(),
            description: description.into(),
            fields,
        })
    }

    /// The builder's starter document: a three-question client onboarding form
    pub fn client_onboarding(factory: &mut FieldFactory) -> Self {
        let text = |placeholder: &str, description: &str| {
            TextInput::new(placeholder, InputMeta::new(description, true))
        };

        let fields = vec![
            FormField::new(
                factory.next_id(),
                "Full Name",
                FieldKind::ShortText(text(
                    "Enter your full name",
                    "Please enter your full legal name",
                )),
            ),
            FormField::new(
                factory.next_id(),
                "Email Address",
                FieldKind::Email(text(
                    "email@example.com",
                    "We'll use this for all communications",
                )),
            ),
            FormField::new(
                factory.next_id(),
                "Project Description",
                FieldKind::LongText(text(
                    "Describe your project in detail",
                    "Include your goals, requirements, and any relevant information",
                )),
            ),
        ];

        Self {
            title: "Client Onboarding Form".to_string(),
            description: "Please fill out this form to help us understand your project requirements better."
                .to_string(),
            fields,
        }
    }

    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Fields in render order
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Position of the field with `id`
    #[must_use]
    pub fn position(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id() == id)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: &FieldId) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: &FieldId) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id() == id)
    }

    pub fn get_mut(&mut self, id: &FieldId) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.id() == id)
    }

    /// Field at `index`
    #[inline]
    #[must_use]
    pub fn field_at(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }

    /// Append a field
    ///
    /// # Errors
    /// Returns [`SchemaError::DuplicateFieldId`] if the id is already present
    pub fn push(&mut self, field: FormField) -> Result<(), SchemaError> {
        let index = self.fields.len();
        self.insert(index, field)
    }

    /// Insert a field at `index`, shifting later fields back
    ///
    /// # Errors
    /// - [`SchemaError::DuplicateFieldId`] if the id is already present
    /// - [`SchemaError::IndexOutOfBounds`] if `index > len`
    pub fn insert(&mut self, index: usize, field: FormField) -> Result<(), SchemaError> {
        if self.contains(field.id()) {
            return Err(SchemaError::DuplicateFieldId(field.id().clone()));
        }
        if index > self.fields.len() {
            return Err(SchemaError::IndexOutOfBounds {
                index,
                len: self.fields.len(),
            });
        }
        self.fields.insert(index, field);
        Ok(())
    }

    /// Remove and return the field with `id`
    pub fn remove(&mut self, id: &FieldId) -> Option<FormField> {
        let index = self.position(id)?;
        Some(self.fields.remove(index))
    }

    /// Move the field at `source` to `destination`
    ///
    /// # Errors
    /// Returns [`SchemaError::IndexOutOfBounds`] if either index is `>= len`
    pub fn move_field(&mut self, source: usize, destination: usize) -> Result<(), SchemaError> {
        move_item(&mut self.fields, source, destination)
    }

    /// Ids in render order
    pub fn ids(&self) -> impl Iterator<Item = &FieldId> {
        self.fields.iter().map(FormField::id)
    }
}
