//! Properties panel
//!
//! Read side: [`PanelView`] projects the selected field into the attributes
//! its type carries. Write side: [`PanelEditor`] binds each attribute to a
//! patch against the selected field.

use crate::editor::FormEditor;
use crate::error::EditError;
use oncue_form_schema::{FieldId, FieldPatch, FieldType, FormField};

/// What the properties panel shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView<'a> {
    /// Nothing selected (or previewing)
    Empty,
    /// Attributes of the selected field
    Field(FieldProperties<'a>),
}

impl<'a> PanelView<'a> {
    #[must_use]
    pub fn for_selection(field: Option<&'a FormField>) -> Self {
        field.map_or(Self::Empty, |f| Self::Field(FieldProperties::of(f)))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    #[must_use]
    pub fn field(&self) -> Option<&FieldProperties<'a>> {
        match self {
            Self::Field(props) => Some(props),
            Self::Empty => None,
        }
    }
}

/// Attribute controls for one field
///
/// An attribute is `None` when the field type has no such control: headings
/// and paragraphs have no required toggle or description, only text inputs
/// have a placeholder, only choice fields have options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProperties<'a> {
    pub id: &'a FieldId,
    pub field_type: FieldType,
    pub label: &'a str,
    pub required: Option<bool>,
    pub placeholder: Option<&'a str>,
    pub description: Option<&'a str>,
    pub options: Option<&'a [String]>,
}

impl<'a> FieldProperties<'a> {
    #[must_use]
    pub fn of(field: &'a FormField) -> Self {
        let meta = field.kind().meta();
        Self {
            id: field.id(),
            field_type: field.field_type(),
            label: field.label(),
            required: meta.map(|m| m.required),
            placeholder: field.placeholder(),
            description: meta.map(|m| m.description.as_str()),
            options: field.options().map(|o| o.as_slice()),
        }
    }
}

/// Attribute setters bound to the current selection
#[derive(Debug)]
pub struct PanelEditor<'a> {
    editor: &'a mut FormEditor,
}

impl<'a> PanelEditor<'a> {
    pub(crate) fn new(editor: &'a mut FormEditor) -> Self {
        Self { editor }
    }

    fn selection(&self) -> Result<FieldId, EditError> {
        self.editor
            .selected_field()
            .map(|f| f.id().clone())
            .ok_or(EditError::NoSelection)
    }

    fn patch(&mut self, patch: &FieldPatch) -> Result<(), EditError> {
        let id = self.selection()?;
        self.editor.update_field(&id, patch)
    }

    /// # Errors
    /// [`EditError::NoSelection`] or any error of [`FormEditor::update_field`]
    pub fn set_label(&mut self, label: impl Into<String>) -> Result<(), EditError> {
        self.patch(&FieldPatch::new().label(label))
    }

    /// # Errors
    /// [`EditError::NoSelection`] or any error of [`FormEditor::update_field`]
    pub fn set_required(&mut self, required: bool) -> Result<(), EditError> {
        self.patch(&FieldPatch::new().required(required))
    }

    /// # Errors
    /// [`EditError::NoSelection`] or any error of [`FormEditor::update_field`]
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> Result<(), EditError> {
        self.patch(&FieldPatch::new().placeholder(placeholder))
    }

    /// # Errors
    /// [`EditError::NoSelection`] or any error of [`FormEditor::update_field`]
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), EditError> {
        self.patch(&FieldPatch::new().description(description))
    }

    /// # Errors
    /// [`EditError::NoSelection`] or any error of [`FormEditor::add_option`]
    pub fn add_option(&mut self) -> Result<usize, EditError> {
        let id = self.selection()?;
        self.editor.add_option(&id)
    }

    /// # Errors
    /// [`EditError::NoSelection`] or any error of [`FormEditor::update_option`]
    pub fn update_option(&mut self, index: usize, value: impl Into<String>) -> Result<(), EditError> {
        let id = self.selection()?;
        self.editor.update_option(&id, index, value)
    }

    /// # Errors
    /// [`EditError::NoSelection`] or any error of [`FormEditor::delete_option`]
    pub fn delete_option(&mut self, index: usize) -> Result<String, EditError> {
        let id = self.selection()?;
        self.editor.delete_option(&id, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::notify::NullNotifier;
    use std::sync::Arc;

    fn editor() -> FormEditor {
        FormEditor::new(EditorConfig::default(), Arc::new(NullNotifier))
    }

    #[test]
    fn empty_without_selection() {
        let editor = editor();
        assert!(editor.properties().is_empty());
    }

    #[test]
    fn heading_shows_label_only() {
        let mut editor = editor();
        editor.add_field(FieldType::Heading).unwrap();

        let view = editor.properties();
        let props = view.field().unwrap();
        assert_eq!(props.field_type, FieldType::Heading);
        assert_eq!(props.required, None);
        assert_eq!(props.placeholder, None);
        assert_eq!(props.description, None);
        assert_eq!(props.options, None);
    }

    #[test]
    fn choice_field_exposes_options() {
        let mut editor = editor();
        editor.add_field(FieldType::MultipleChoice).unwrap();

        let view = editor.properties();
        let props = view.field().unwrap();
        assert_eq!(props.required, Some(false));
        assert_eq!(props.placeholder, None);
        assert_eq!(props.options.map(<[String]>::len), Some(3));
    }

    #[test]
    fn setters_patch_selected_field() {
        let mut editor = editor();
        let id = editor.add_field(FieldType::ShortText).unwrap();

        let mut panel = editor.panel_mut();
        panel.set_label("Company").unwrap();
        panel.set_required(true).unwrap();
        panel.set_placeholder("Acme Ltd").unwrap();

        let field = editor.schema().get(&id).unwrap();
        assert_eq!(field.label(), "Company");
        assert!(field.required());
        assert_eq!(field.placeholder(), Some("Acme Ltd"));
    }

    #[test]
    fn setters_without_selection_fail() {
        let mut editor = editor();
        editor.add_field(FieldType::ShortText).unwrap();
        editor.clear_selection();

        assert_eq!(
            editor.panel_mut().set_label("x"),
            Err(EditError::NoSelection)
        );
    }

    #[test]
    fn panel_option_editing() {
        let mut editor = editor();
        let id = editor.add_field(FieldType::Dropdown).unwrap();

        let mut panel = editor.panel_mut();
        assert_eq!(panel.add_option().unwrap(), 3);
        panel.update_option(3, "Other").unwrap();
        assert_eq!(panel.delete_option(0).unwrap(), "Option 1");

        let options = editor.schema().get(&id).unwrap().options().unwrap();
        assert_eq!(options.as_slice(), ["Option 2", "Option 3", "Other"]);
    }
}
