//! Partial field updates
//!
//! A [`FieldPatch`] names the attributes to overwrite; unset attributes are
//! left alone. Patches are checked against the field type before any write.

use crate::field_type::FieldType;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Editable attribute of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldAttribute {
    /// Caption, or content for heading/paragraph
    Label,
    /// Required flag
    Required,
    /// Placeholder hint
    Placeholder,
    /// Help text
    Description,
    /// Choice list
    Options,
}

impl FieldAttribute {
    /// Whether fields of `field_type` carry this attribute
    #[must_use]
    pub fn applies_to(&self, field_type: FieldType) -> bool {
        match self {
            FieldAttribute::Label => true,
            FieldAttribute::Required | FieldAttribute::Description => {
                !field_type.is_display_only()
            }
            FieldAttribute::Placeholder => field_type.accepts_placeholder(),
            FieldAttribute::Options => field_type.has_options(),
        }
    }
}

impl Display for FieldAttribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldAttribute::Label => "label",
            FieldAttribute::Required => "required",
            FieldAttribute::Placeholder => "placeholder",
            FieldAttribute::Description => "description",
            FieldAttribute::Options => "options",
        };
        f.write_str(name)
    }
}

/// Set of attribute overwrites for one field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldPatch {
    /// New label
    pub label: Option<String>,
    /// New required flag
    pub required: Option<bool>,
    /// New placeholder
    pub placeholder: Option<String>,
    /// New help text
    pub description: Option<String>,
    /// Replacement option list
    pub options: Option<Vec<String>>,
}

impl FieldPatch {
    /// Empty patch
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set label
    #[inline]
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set required flag
    #[inline]
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Set placeholder
    #[inline]
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set help text
    #[inline]
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace the option list
    #[must_use]
    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    /// Attributes this patch writes
    #[must_use]
    pub fn attributes(&self) -> Vec<FieldAttribute> {
        let mut attributes = Vec::new();
        if self.label.is_some() {
            attributes.push(FieldAttribute::Label);
        }
        if self.required.is_some() {
            attributes.push(FieldAttribute::Required);
        }
        if self.placeholder.is_some() {
            attributes.push(FieldAttribute::Placeholder);
        }
        if self.description.is_some() {
            attributes.push(FieldAttribute::Description);
        }
        if self.options.is_some() {
            attributes.push(FieldAttribute::Options);
        }
        attributes
    }

    /// Writes nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_attributes() {
        let patch = FieldPatch::new().label("Name").required(true);
        assert_eq!(
            patch.attributes(),
            vec![FieldAttribute::Label, FieldAttribute::Required]
        );
        assert!(FieldPatch::new().is_empty());
    }

    #[test]
    fn applicability_matrix() {
        assert!(FieldAttribute::Label.applies_to(FieldType::Heading));
        assert!(!FieldAttribute::Required.applies_to(FieldType::Paragraph));
        assert!(!FieldAttribute::Description.applies_to(FieldType::Heading));
        assert!(FieldAttribute::Description.applies_to(FieldType::File));
        assert!(!FieldAttribute::Placeholder.applies_to(FieldType::Date));
        assert!(FieldAttribute::Placeholder.applies_to(FieldType::Phone));
        assert!(FieldAttribute::Options.applies_to(FieldType::Dropdown));
        assert!(!FieldAttribute::Options.applies_to(FieldType::LongText));
    }

    #[test]
    fn deserializes_partial_json() {
        let patch: FieldPatch = serde_json::from_str(r#"{"label":"Budget","required":true}"#).unwrap();
        assert_eq!(patch, FieldPatch::new().label("Budget").required(true));
    }
}
