//! Form fields
//!
//! A [`FormField`] pairs a stable id and label with a [`FieldKind`]: one
//! variant per [`FieldType`], each carrying only the attributes that type
//! supports. Headings and paragraphs carry nothing beyond their label; choice
//! fields always carry a non-empty [`OptionList`].

use crate::error::PatchError;
use crate::field_type::FieldType;
use crate::id::FieldId;
use crate::options::OptionList;
use crate::patch::{FieldAttribute, FieldPatch};
use crate::wire::RawField;
use serde::{Deserialize, Serialize};

/// Label given to freshly created fields
pub const DEFAULT_FIELD_LABEL: &str = "New Field";

/// Suffix appended to a duplicated field's label
pub const COPY_SUFFIX: &str = " (Copy)";

/// Attributes shared by every answer-collecting field
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct InputMeta {
    /// Help text shown under the label
    pub description: String,
    /// Answer must be given
    pub required: bool,
}

impl InputMeta {
    /// Create metadata
    #[inline]
    #[must_use]
    pub fn new(description: impl Into<String>, required: bool) -> Self {
        Self {
            description: description.into(),
            required,
        }
    }
}

/// Text-like input (short/long text, email, phone)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextInput {
    pub meta: InputMeta,
    pub placeholder: String,
}

impl TextInput {
    #[inline]
    #[must_use]
    pub fn new(placeholder: impl Into<String>, meta: InputMeta) -> Self {
        Self {
            meta,
            placeholder: placeholder.into(),
        }
    }
}

/// Choice input (single, multiple, dropdown)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ChoiceInput {
    pub meta: InputMeta,
    pub options: OptionList,
}

impl ChoiceInput {
    #[inline]
    #[must_use]
    pub fn new(options: OptionList, meta: InputMeta) -> Self {
        Self { meta, options }
    }
}

/// Input without placeholder or options (date, file)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PlainInput {
    pub meta: InputMeta,
}

/// Type-specific payload of a field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    ShortText(TextInput),
    LongText(TextInput),
    Email(TextInput),
    Phone(TextInput),
    SingleChoice(ChoiceInput),
    MultipleChoice(ChoiceInput),
    Dropdown(ChoiceInput),
    Date(PlainInput),
    File(PlainInput),
    Heading,
    Paragraph,
}

impl FieldKind {
    /// Default payload for a new field of `field_type`
    ///
    /// Choice types are seeded with three default options.
    #[must_use]
    pub fn blank(field_type: FieldType) -> Self {
        Self::assemble(field_type, InputMeta::default(), String::new(), OptionList::seeded())
    }

    /// Build a payload from loosely-typed parts, keeping only what
    /// `field_type` carries
    pub(crate) fn assemble(
        field_type: FieldType,
        meta: InputMeta,
        placeholder: String,
        options: OptionList,
    ) -> Self {
        match field_type {
            FieldType::ShortText => FieldKind::ShortText(TextInput::new(placeholder, meta)),
            FieldType::LongText => FieldKind::LongText(TextInput::new(placeholder, meta)),
            FieldType::Email => FieldKind::Email(TextInput::new(placeholder, meta)),
            FieldType::Phone => FieldKind::Phone(TextInput::new(placeholder, meta)),
            FieldType::SingleChoice => FieldKind::SingleChoice(ChoiceInput::new(options, meta)),
            FieldType::MultipleChoice => {
                FieldKind::MultipleChoice(ChoiceInput::new(options, meta))
            }
            FieldType::Dropdown => FieldKind::Dropdown(ChoiceInput::new(options, meta)),
            FieldType::Date => FieldKind::Date(PlainInput { meta }),
            FieldType::File => FieldKind::File(PlainInput { meta }),
            FieldType::Heading => FieldKind::Heading,
            FieldType::Paragraph => FieldKind::Paragraph,
        }
    }

    /// Discriminator
    #[must_use]
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::ShortText(_) => FieldType::ShortText,
            FieldKind::LongText(_) => FieldType::LongText,
            FieldKind::Email(_) => FieldType::Email,
            FieldKind::Phone(_) => FieldType::Phone,
            FieldKind::SingleChoice(_) => FieldType::SingleChoice,
            FieldKind::MultipleChoice(_) => FieldType::MultipleChoice,
            FieldKind::Dropdown(_) => FieldType::Dropdown,
            FieldKind::Date(_) => FieldType::Date,
            FieldKind::File(_) => FieldType::File,
            FieldKind::Heading => FieldType::Heading,
            FieldKind::Paragraph => FieldType::Paragraph,
        }
    }

    /// Shared input metadata, absent for display-only kinds
    #[must_use]
    pub fn meta(&self) -> Option<&InputMeta> {
        match self {
            FieldKind::ShortText(t)
            | FieldKind::LongText(t)
            | FieldKind::Email(t)
            | FieldKind::Phone(t) => Some(&t.meta),
            FieldKind::SingleChoice(c) | FieldKind::MultipleChoice(c) | FieldKind::Dropdown(c) => {
                Some(&c.meta)
            }
            FieldKind::Date(p) | FieldKind::File(p) => Some(&p.meta),
            FieldKind::Heading | FieldKind::Paragraph => None,
        }
    }

    fn meta_mut(&mut self) -> Option<&mut InputMeta> {
        match self {
            FieldKind::ShortText(t)
            | FieldKind::LongText(t)
            | FieldKind::Email(t)
            | FieldKind::Phone(t) => Some(&mut t.meta),
            FieldKind::SingleChoice(c) | FieldKind::MultipleChoice(c) | FieldKind::Dropdown(c) => {
                Some(&mut c.meta)
            }
            FieldKind::Date(p) | FieldKind::File(p) => Some(&mut p.meta),
            FieldKind::Heading | FieldKind::Paragraph => None,
        }
    }

    fn text_mut(&mut self) -> Option<&mut TextInput> {
        match self {
            FieldKind::ShortText(t)
            | FieldKind::LongText(t)
            | FieldKind::Email(t)
            | FieldKind::Phone(t) => Some(t),
            _ => None,
        }
    }

    /// Placeholder, for text-like kinds
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            FieldKind::ShortText(t)
            | FieldKind::LongText(t)
            | FieldKind::Email(t)
            | FieldKind::Phone(t) => Some(&t.placeholder),
            _ => None,
        }
    }

    /// Option list, for choice kinds
    #[must_use]
    pub fn options(&self) -> Option<&OptionList> {
        match self {
            FieldKind::SingleChoice(c) | FieldKind::MultipleChoice(c) | FieldKind::Dropdown(c) => {
                Some(&c.options)
            }
            _ => None,
        }
    }

    /// Mutable option list, for choice kinds
    pub fn options_mut(&mut self) -> Option<&mut OptionList> {
        match self {
            FieldKind::SingleChoice(c) | FieldKind::MultipleChoice(c) | FieldKind::Dropdown(c) => {
                Some(&mut c.options)
            }
            _ => None,
        }
    }
}

/// A single input definition within a form schema
///
/// # Invariants
/// - `id` never changes after creation
/// - the field type never changes; edits go through [`FormField::apply`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawField", into = "RawField")]
pub struct FormField {
    id: FieldId,
    label: String,
    kind: FieldKind,
}

impl FormField {
    /// Create a field from its parts
    #[inline]
    #[must_use]
    pub fn new(id: FieldId, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id,
            label: label.into(),
            kind,
        }
    }

    /// Default field of `field_type` with the given id
    #[must_use]
    pub fn blank(id: FieldId, field_type: FieldType) -> Self {
        Self::new(id, DEFAULT_FIELD_LABEL, FieldKind::blank(field_type))
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    #[inline]
    #[must_use]
    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// Required flag; always false for display-only fields
    #[inline]
    #[must_use]
    pub fn required(&self) -> bool {
        self.kind.meta().is_some_and(|m| m.required)
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.kind.meta().map(|m| m.description.as_str())
    }

    #[inline]
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.kind.placeholder()
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> Option<&OptionList> {
        self.kind.options()
    }

    /// Mutable option list, for choice fields
    #[inline]
    pub fn options_mut(&mut self) -> Option<&mut OptionList> {
        self.kind.options_mut()
    }

    /// Overwrite label directly
    #[inline]
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Copy of this field under a new id, label suffixed with " (Copy)"
    #[must_use]
    pub fn duplicate_as(&self, id: FieldId) -> Self {
        Self {
            id,
            label: format!("{}{}", self.label, COPY_SUFFIX),
            kind: self.kind.clone(),
        }
    }

    /// Merge `patch` into this field
    ///
    /// All-or-nothing: every attribute is checked against the field type and
    /// the option list is validated before anything is written.
    ///
    /// # Errors
    /// - [`PatchError::NotApplicable`] if the patch names an attribute this
    ///   field type does not carry
    /// - [`PatchError::Option`] if the replacement option list is empty
    pub fn apply(&mut self, patch: &FieldPatch) -> Result<(), PatchError> {
        let field_type = self.field_type();
        if let Some(attribute) = patch
            .attributes()
            .into_iter()
            .find(|a| !a.applies_to(field_type))
        {
            return Err(PatchError::NotApplicable {
                attribute,
                field_type,
            });
        }

        let options = patch
            .options
            .clone()
            .map(OptionList::new)
            .transpose()?;

        if let Some(label) = &patch.label {
            self.label.clone_from(label);
        }
        if let Some(meta) = self.kind.meta_mut() {
            if let Some(required) = patch.required {
                meta.required = required;
            }
            if let Some(description) = &patch.description {
                meta.description.clone_from(description);
            }
        }
        if let (Some(placeholder), Some(text)) = (&patch.placeholder, self.kind.text_mut()) {
            text.placeholder.clone_from(placeholder);
        }
        if let (Some(options), Some(slot)) = (options, self.kind.options_mut()) {
            *slot = options;
        }
        Ok(())
    }

    /// Whether `attribute` can be edited on this field
    #[inline]
    #[must_use]
    pub fn supports(&self, attribute: FieldAttribute) -> bool {
        attribute.applies_to(self.field_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptionError;

    fn field(field_type: FieldType) -> FormField {
        FormField::blank(FieldId::generate(), field_type)
    }

    #[test]
    fn blank_choice_is_seeded() {
        for t in FieldType::ALL {
            let f = field(t);
            assert_eq!(f.label(), DEFAULT_FIELD_LABEL);
            assert!(!f.required());
            assert_eq!(f.field_type(), t);
            match f.options() {
                Some(options) => {
                    assert!(t.has_options());
                    assert_eq!(options.len(), 3);
                }
                None => assert!(!t.has_options()),
            }
        }
    }

    #[test]
    fn display_only_has_no_meta() {
        let heading = field(FieldType::Heading);
        assert_eq!(heading.description(), None);
        assert_eq!(heading.placeholder(), None);
        assert!(!heading.required());
    }

    #[test]
    fn apply_merges_attributes() {
        let mut f = field(FieldType::Email);
        f.apply(
            &FieldPatch::new()
                .label("Work email")
                .required(true)
                .placeholder("you@company.com"),
        )
        .unwrap();

        assert_eq!(f.label(), "Work email");
        assert!(f.required());
        assert_eq!(f.placeholder(), Some("you@company.com"));
        assert_eq!(f.description(), Some(""));
    }

    #[test]
    fn apply_is_all_or_nothing() {
        let mut f = field(FieldType::Date);
        let before = f.clone();

        let err = f
            .apply(&FieldPatch::new().label("Start").placeholder("yyyy-mm-dd"))
            .unwrap_err();

        assert_eq!(
            err,
            PatchError::NotApplicable {
                attribute: FieldAttribute::Placeholder,
                field_type: FieldType::Date,
            }
        );
        assert_eq!(f, before);
    }

    #[test]
    fn apply_rejects_empty_options() {
        let mut f = field(FieldType::Dropdown);
        let err = f.apply(&FieldPatch::new().options(Vec::<String>::new())).unwrap_err();
        assert_eq!(err, PatchError::Option(OptionError::Empty));
        assert_eq!(f.options().unwrap().len(), 3);
    }

    #[test]
    fn apply_replaces_options() {
        let mut f = field(FieldType::SingleChoice);
        f.apply(&FieldPatch::new().options(["Yes", "No"])).unwrap();
        assert_eq!(f.options().unwrap().as_slice(), ["Yes", "No"]);
    }

    #[test]
    fn heading_accepts_label_only() {
        let mut f = field(FieldType::Heading);
        f.apply(&FieldPatch::new().label("About you")).unwrap();
        assert_eq!(f.label(), "About you");
        assert!(f.apply(&FieldPatch::new().required(true)).is_err());
    }

    #[test]
    fn duplicate_keeps_payload() {
        let mut original = field(FieldType::MultipleChoice);
        original
            .apply(&FieldPatch::new().label("Services").required(true))
            .unwrap();

        let copy = original.duplicate_as(FieldId::generate());
        assert_ne!(copy.id(), original.id());
        assert_eq!(copy.label(), "Services (Copy)");
        assert_eq!(copy.kind(), original.kind());
    }
}
