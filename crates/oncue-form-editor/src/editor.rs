//! Form editor
//!
//! [`FormEditor`] owns one schema for one editing session and applies every
//! mutation synchronously:
//! - Field insertion, deletion, duplication, patching and reordering
//! - Option list edits for choice fields
//! - Selection and edit/preview mode
//!
//! Every operation reports its outcome. A call that names a missing field, or
//! that a guard refuses, returns an [`EditError`] and changes nothing.

use crate::config::EditorConfig;
use crate::drag::{DropResult, ReorderOutcome};
use crate::error::EditError;
use crate::mode::EditorMode;
use crate::notify::{Notification, Notifier};
use crate::panel::{PanelEditor, PanelView};
use crate::preview::PreviewSession;
use oncue_form_schema::{
    FieldFactory, FieldId, FieldPatch, FieldType, FormField, FormSchema, OptionList, PatchError,
};
use std::sync::Arc;

/// Single-writer editing state for one form
#[derive(Debug)]
pub struct FormEditor {
    schema: FormSchema,
    selected: Option<FieldId>,
    mode: EditorMode,
    factory: FieldFactory,
    notifier: Arc<dyn Notifier>,
    config: EditorConfig,
}

impl FormEditor {
    /// Editor over a new form
    ///
    /// Starts from the onboarding template when the config asks for it,
    /// otherwise from an empty form with the configured title.
    #[must_use]
    pub fn new(config: EditorConfig, notifier: Arc<dyn Notifier>) -> Self {
        let mut factory = FieldFactory::new();
        let schema = if config.start_from_template {
            FormSchema::client_onboarding(&mut factory)
        } else {
            FormSchema::new(
                config.default_title.clone(),
                config.default_description.clone(),
            )
        };
        Self::assemble(schema, factory, config, notifier)
    }

    /// Editor over an existing schema
    #[must_use]
    pub fn with_schema(
        schema: FormSchema,
        config: EditorConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::assemble(schema, FieldFactory::new(), config, notifier)
    }

    fn assemble(
        schema: FormSchema,
        factory: FieldFactory,
        config: EditorConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            schema,
            selected: None,
            mode: EditorMode::Edit,
            factory,
            notifier,
            config,
        }
    }

    #[inline]
    #[must_use]
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        self.schema.fields()
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// Consume the editor, keeping the schema
    #[inline]
    #[must_use]
    pub fn into_schema(self) -> FormSchema {
        self.schema
    }

    /// Replace the whole document (reload); clears selection
    pub fn replace_schema(&mut self, schema: FormSchema) {
        tracing::debug!(fields = schema.len(), "schema replaced");
        self.schema = schema;
        self.selected = None;
    }

    /// Emit a user-facing message through the injected port
    pub fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }

    // ------------------------------------------------------------------
    // Mode
    // ------------------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Flip between edit and preview; fields are untouched
    pub fn toggle_mode(&mut self) -> EditorMode {
        self.mode = self.mode.toggled();
        tracing::debug!(mode = ?self.mode, "mode toggled");
        self.mode
    }

    /// Enter `mode`; idempotent
    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    fn ensure_editable(&self) -> Result<(), EditError> {
        if self.mode.is_preview() {
            tracing::warn!("edit refused in preview mode");
            return Err(EditError::ReadOnly);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Stored selection, regardless of mode
    #[inline]
    #[must_use]
    pub fn selected_id(&self) -> Option<&FieldId> {
        self.selected.as_ref()
    }

    /// Selected field; inert (None) while previewing
    #[must_use]
    pub fn selected_field(&self) -> Option<&FormField> {
        if self.mode.is_preview() {
            return None;
        }
        self.selected.as_ref().and_then(|id| self.schema.get(id))
    }

    /// Select the field with `id`
    ///
    /// # Errors
    /// - [`EditError::ReadOnly`] in preview mode
    /// - [`EditError::FieldNotFound`] if no field has this id
    pub fn select(&mut self, id: &FieldId) -> Result<(), EditError> {
        self.ensure_editable()?;
        if !self.schema.contains(id) {
            return Err(EditError::FieldNotFound(id.clone()));
        }
        self.selected = Some(id.clone());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ------------------------------------------------------------------
    // Form-level text
    // ------------------------------------------------------------------

    /// # Errors
    /// Returns [`EditError::ReadOnly`] in preview mode
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), EditError> {
        self.ensure_editable()?;
        self.schema.set_title(title);
        Ok(())
    }

    /// # Errors
    /// Returns [`EditError::ReadOnly`] in preview mode
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), EditError> {
        self.ensure_editable()?;
        self.schema.set_description(description);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Field mutations
    // ------------------------------------------------------------------

    /// Append a new field of `field_type` and select it
    ///
    /// # Errors
    /// Returns [`EditError::ReadOnly`] in preview mode
    pub fn add_field(&mut self, field_type: FieldType) -> Result<FieldId, EditError> {
        self.ensure_editable()?;

        let field = self.fresh_field(|factory| factory.create(field_type));
        let id = field.id().clone();
        self.schema.push(field)?;
        self.selected = Some(id.clone());

        tracing::debug!(field = %id, %field_type, "field added");
        if self.config.notify_on_add {
            self.notify(Notification::success(format!(
                "Added new {} field",
                field_type.tag()
            )));
        }
        Ok(id)
    }

    /// Merge `patch` into the field with `id`
    ///
    /// # Errors
    /// - [`EditError::ReadOnly`] in preview mode
    /// - [`EditError::FieldNotFound`] if no field has this id
    /// - [`EditError::NotApplicable`] if the patch names an attribute the
    ///   field type does not carry
    /// - [`EditError::Option`] if the patch carries an empty option list
    pub fn update_field(&mut self, id: &FieldId, patch: &FieldPatch) -> Result<(), EditError> {
        self.ensure_editable()?;
        let field = self
            .schema
            .get_mut(id)
            .ok_or_else(|| EditError::FieldNotFound(id.clone()))?;

        field.apply(patch).map_err(|e| match e {
            PatchError::NotApplicable {
                attribute,
                field_type,
            } => EditError::NotApplicable {
                id: id.clone(),
                attribute,
                field_type,
            },
            PatchError::Option(source) => EditError::Option {
                id: id.clone(),
                source,
            },
        })?;

        tracing::debug!(field = %id, attributes = ?patch.attributes(), "field updated");
        Ok(())
    }

    /// Remove the field with `id`, clearing selection if it was selected
    ///
    /// # Errors
    /// - [`EditError::ReadOnly`] in preview mode
    /// - [`EditError::FieldNotFound`] if no field has this id
    pub fn delete_field(&mut self, id: &FieldId) -> Result<FormField, EditError> {
        self.ensure_editable()?;
        let removed = self
            .schema
            .remove(id)
            .ok_or_else(|| EditError::FieldNotFound(id.clone()))?;

        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }

        tracing::debug!(field = %id, "field deleted");
        if self.config.notify_on_delete {
            self.notify(Notification::success("Field deleted"));
        }
        Ok(removed)
    }

    /// Insert a copy of the field right after it and select the copy
    ///
    /// # Errors
    /// - [`EditError::ReadOnly`] in preview mode
    /// - [`EditError::FieldNotFound`] if no field has this id
    pub fn duplicate_field(&mut self, id: &FieldId) -> Result<FieldId, EditError> {
        self.ensure_editable()?;
        let index = self
            .schema
            .position(id)
            .ok_or_else(|| EditError::FieldNotFound(id.clone()))?;

        let original = self.schema.fields()[index].clone();
        let copy = self.fresh_field(|factory| factory.duplicate(&original));
        let copy_id = copy.id().clone();
        self.schema.insert(index + 1, copy)?;
        self.selected = Some(copy_id.clone());

        tracing::debug!(field = %id, copy = %copy_id, "field duplicated");
        if self.config.notify_on_duplicate {
            self.notify(Notification::success("Field duplicated"));
        }
        Ok(copy_id)
    }

    /// Move the field at `source` to `destination`
    ///
    /// # Errors
    /// - [`EditError::ReadOnly`] in preview mode
    /// - [`EditError::IndexOutOfBounds`] if either index is outside the list;
    ///   the list is left unchanged
    pub fn reorder(
        &mut self,
        source: usize,
        destination: usize,
    ) -> Result<ReorderOutcome, EditError> {
        self.ensure_editable()?;
        self.schema.move_field(source, destination)?;

        if source == destination {
            return Ok(ReorderOutcome::Unchanged);
        }
        tracing::debug!(from = source, to = destination, "field moved");
        Ok(ReorderOutcome::Moved {
            from: source,
            to: destination,
        })
    }

    /// Consume a resolved drag gesture
    ///
    /// A drop without destination is [`ReorderOutcome::Cancelled`] and leaves
    /// the list unchanged.
    ///
    /// # Errors
    /// Same as [`FormEditor::reorder`]
    pub fn apply_drop(&mut self, drop: DropResult) -> Result<ReorderOutcome, EditError> {
        self.ensure_editable()?;
        match drop.destination {
            Some(destination) => self.reorder(drop.source, destination),
            None => {
                tracing::debug!(from = drop.source, "drag cancelled");
                Ok(ReorderOutcome::Cancelled)
            }
        }
    }

    /// Build a field from the factory, regenerating on the (never expected)
    /// clash with an id loaded from storage
    fn fresh_field(&mut self, mut build: impl FnMut(&mut FieldFactory) -> FormField) -> FormField {
        loop {
            let field = build(&mut self.factory);
            if !self.schema.contains(field.id()) {
                return field;
            }
        }
    }

    // ------------------------------------------------------------------
    // Option list editor
    // ------------------------------------------------------------------

    fn options_mut(&mut self, id: &FieldId) -> Result<&mut OptionList, EditError> {
        self.ensure_editable()?;
        self.schema
            .get_mut(id)
            .ok_or_else(|| EditError::FieldNotFound(id.clone()))?
            .options_mut()
            .ok_or_else(|| EditError::NoOptions(id.clone()))
    }

    /// Append `Option {N}` to the field's option list
    ///
    /// Returns the index of the new option.
    ///
    /// # Errors
    /// - [`EditError::FieldNotFound`] / [`EditError::NoOptions`]
    /// - [`EditError::ReadOnly`] in preview mode
    pub fn add_option(&mut self, id: &FieldId) -> Result<usize, EditError> {
        let index = self.options_mut(id)?.push_default();
        tracing::debug!(field = %id, index, "option added");
        Ok(index)
    }

    /// Replace the option at `index`
    ///
    /// # Errors
    /// - [`EditError::FieldNotFound`] / [`EditError::NoOptions`]
    /// - [`EditError::Option`] if `index` is out of range
    /// - [`EditError::ReadOnly`] in preview mode
    pub fn update_option(
        &mut self,
        id: &FieldId,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), EditError> {
        self.options_mut(id)?
            .set(index, value)
            .map_err(|source| EditError::Option {
                id: id.clone(),
                source,
            })?;
        Ok(())
    }

    /// Remove the option at `index`; refused when it is the last one
    ///
    /// # Errors
    /// - [`EditError::FieldNotFound`] / [`EditError::NoOptions`]
    /// - [`EditError::Option`] with `LastOption` or `IndexOutOfRange`
    /// - [`EditError::ReadOnly`] in preview mode
    pub fn delete_option(&mut self, id: &FieldId, index: usize) -> Result<String, EditError> {
        let removed = self
            .options_mut(id)?
            .remove(index)
            .map_err(|source| EditError::Option {
                id: id.clone(),
                source,
            });

        match &removed {
            Ok(_) => tracing::debug!(field = %id, index, "option removed"),
            Err(e) => tracing::warn!(field = %id, index, "option removal refused: {}", e),
        }
        removed
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// Properties panel for the current selection
    #[must_use]
    pub fn properties(&self) -> PanelView<'_> {
        PanelView::for_selection(self.selected_field())
    }

    /// Editable bindings for the selected field
    pub fn panel_mut(&mut self) -> PanelEditor<'_> {
        PanelEditor::new(self)
    }

    /// Switch to preview and start filling the form
    pub fn begin_preview(&mut self) -> PreviewSession<'_> {
        self.mode = EditorMode::Preview;
        PreviewSession::new(&self.schema)
    }
}
