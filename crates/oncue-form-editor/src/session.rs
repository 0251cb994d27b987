//! Editing session
//!
//! Binds a [`FormEditor`] to one stored form. Loading and saving are the only
//! async steps; the outcome of each is reported through the editor's
//! notifier as well as returned.

use crate::config::EditorConfig;
use crate::editor::FormEditor;
use crate::error::StoreError;
use crate::notify::{Notification, Notifier};
use crate::store::{FormKey, SchemaStore};
use std::sync::Arc;

/// An editor plus the store and key it persists to
#[derive(Debug)]
pub struct EditingSession {
    key: FormKey,
    store: Arc<dyn SchemaStore>,
    editor: FormEditor,
}

impl EditingSession {
    /// Load `key` from `store`, or start a new form if it is not there
    ///
    /// A missing form yields an info notification and a fresh editor built
    /// from `config`.
    ///
    /// # Errors
    /// Returns the [`StoreError`] if loading fails; a failure notification is
    /// emitted first
    pub async fn open(
        store: Arc<dyn SchemaStore>,
        key: FormKey,
        notifier: Arc<dyn Notifier>,
        config: EditorConfig,
    ) -> Result<Self, StoreError> {
        let editor = match store.load(&key).await {
            Ok(Some(schema)) => {
                tracing::info!(%key, fields = schema.len(), "form loaded");
                FormEditor::with_schema(schema, config, notifier)
            }
            Ok(None) => {
                tracing::info!(%key, "form not found");
                notifier.notify(Notification::info("Form not found, starting a new one"));
                FormEditor::new(config, notifier)
            }
            Err(e) => {
                tracing::warn!(%key, "load failed: {}", e);
                notifier.notify(Notification::failure(format!("Failed to load form: {e}")));
                return Err(e);
            }
        };

        Ok(Self { key, store, editor })
    }

    /// Persist the current schema
    ///
    /// On failure the schema stays exactly as it is; nothing is retried.
    ///
    /// # Errors
    /// Returns the [`StoreError`] from the store
    pub async fn save(&self) -> Result<(), StoreError> {
        match self.store.save(&self.key, self.editor.schema()).await {
            Ok(()) => {
                tracing::info!(key = %self.key, "form saved");
                self.editor
                    .notify(Notification::success("Form saved successfully"));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(key = %self.key, "save failed: {}", e);
                self.editor
                    .notify(Notification::failure(format!("Failed to save form: {e}")));
                Err(e)
            }
        }
    }

    /// Discard unsaved edits and read the stored form again
    ///
    /// Returns `false` (and leaves the editor alone) if nothing is stored.
    ///
    /// # Errors
    /// Returns the [`StoreError`] if loading fails
    pub async fn reload(&mut self) -> Result<bool, StoreError> {
        match self.store.load(&self.key).await? {
            Some(schema) => {
                self.editor.replace_schema(schema);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[inline]
    #[must_use]
    pub fn key(&self) -> &FormKey {
        &self.key
    }

    #[inline]
    #[must_use]
    pub fn editor(&self) -> &FormEditor {
        &self.editor
    }

    #[inline]
    pub fn editor_mut(&mut self) -> &mut FormEditor {
        &mut self.editor
    }

    #[inline]
    #[must_use]
    pub fn into_editor(self) -> FormEditor {
        self.editor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{ChannelNotifier, NotificationLevel};
    use crate::store::InMemoryStore;
    use oncue_form_schema::FieldType;

    #[tokio::test]
    async fn open_missing_then_save_and_reopen() {
        let store: Arc<dyn SchemaStore> = Arc::new(InMemoryStore::new());
        let key: FormKey = "intake".parse().unwrap();
        let (notifier, mut rx) = ChannelNotifier::new();
        let notifier: Arc<dyn Notifier> = Arc::new(notifier);

        let mut session = EditingSession::open(
            Arc::clone(&store),
            key.clone(),
            Arc::clone(&notifier),
            EditorConfig::new().with_notifications(false),
        )
        .await
        .unwrap();
        assert_eq!(rx.try_recv().unwrap().level, NotificationLevel::Info);

        session.editor_mut().add_field(FieldType::Email).unwrap();
        session.save().await.unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            Notification::success("Form saved successfully")
        );

        let reopened = EditingSession::open(store, key, notifier, EditorConfig::default())
            .await
            .unwrap();
        assert_eq!(reopened.editor().schema(), session.editor().schema());
    }

    #[tokio::test]
    async fn reload_discards_edits() {
        let store: Arc<dyn SchemaStore> = Arc::new(InMemoryStore::new());
        let key: FormKey = "intake".parse().unwrap();
        let notifier: Arc<dyn Notifier> = Arc::new(crate::notify::NullNotifier);

        let mut session =
            EditingSession::open(store, key, notifier, EditorConfig::new().with_template(true))
                .await
                .unwrap();
        assert!(!session.reload().await.unwrap());

        session.save().await.unwrap();
        session.editor_mut().add_field(FieldType::Date).unwrap();
        assert_eq!(session.editor().fields().len(), 4);

        assert!(session.reload().await.unwrap());
        assert_eq!(session.editor().fields().len(), 3);
        assert!(session.editor().selected_id().is_none());
    }
}
