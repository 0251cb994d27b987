//! Testing utilities for the OnCue forms workspace
//!
//! Shared fixtures: a notifier that records, a store that fails, and sample
//! schemas.

#![allow(missing_docs)]

use async_trait::async_trait;
use oncue_form_editor::{
    EditorConfig, FormEditor, FormKey, Notification, NotificationLevel, Notifier, SchemaStore,
    StoreError,
};
use oncue_form_schema::{FieldFactory, FieldPatch, FieldType, FormSchema};
use parking_lot::Mutex;
use std::sync::Arc;

/// Notifier that keeps every message for later assertions
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.seen.lock().iter().map(|n| n.message.clone()).collect()
    }

    pub fn count(&self, level: NotificationLevel) -> usize {
        self.seen.lock().iter().filter(|n| n.level == level).count()
    }

    pub fn last(&self) -> Option<Notification> {
        self.seen.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.seen.lock().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().push(notification);
    }
}

/// Store whose every call fails with a backend error
#[derive(Debug, Clone)]
pub struct FailingStore {
    reason: String,
}

impl FailingStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl SchemaStore for FailingStore {
    async fn load(&self, _key: &FormKey) -> Result<Option<FormSchema>, StoreError> {
        Err(StoreError::Backend(self.reason.clone()))
    }

    async fn save(&self, _key: &FormKey, _schema: &FormSchema) -> Result<(), StoreError> {
        Err(StoreError::Backend(self.reason.clone()))
    }
}

/// Store that loads a fixed schema but refuses to save
#[derive(Debug, Clone)]
pub struct ReadOnlyStore {
    schema: FormSchema,
}

impl ReadOnlyStore {
    pub fn new(schema: FormSchema) -> Self {
        Self { schema }
    }
}

#[async_trait]
impl SchemaStore for ReadOnlyStore {
    async fn load(&self, _key: &FormKey) -> Result<Option<FormSchema>, StoreError> {
        Ok(Some(self.schema.clone()))
    }

    async fn save(&self, _key: &FormKey, _schema: &FormSchema) -> Result<(), StoreError> {
        Err(StoreError::Backend("store is read-only".to_string()))
    }
}

/// One field of every type, in palette order
pub fn every_type_schema() -> FormSchema {
    let mut factory = FieldFactory::new();
    let mut schema = FormSchema::new("Every Field", "One of each field type");
    for field_type in FieldType::ALL {
        schema.push(factory.create(field_type)).unwrap();
    }
    schema
}

/// Small survey: heading, required name, dropdown with three sizes
pub fn sample_schema() -> FormSchema {
    let mut factory = FieldFactory::new();
    let mut schema = FormSchema::new("Team Survey", "Quarterly check-in");

    let mut heading = factory.create(FieldType::Heading);
    heading.set_label("About you");

    let mut name = factory.create(FieldType::ShortText);
    name.apply(
        &FieldPatch::new()
            .label("Name")
            .required(true)
            .placeholder("Jane Doe"),
    )
    .unwrap();

    let mut size = factory.create(FieldType::Dropdown);
    size.apply(
        &FieldPatch::new()
            .label("Team size")
            .options(["1-5", "6-20", "21+"]),
    )
    .unwrap();

    for field in [heading, name, size] {
        schema.push(field).unwrap();
    }
    schema
}

pub fn form_key(key: &str) -> FormKey {
    key.parse().unwrap()
}

/// Editor with a recording notifier attached
pub fn recording_editor(config: EditorConfig) -> (FormEditor, Arc<RecordingNotifier>) {
    let notifier = RecordingNotifier::new();
    let editor = FormEditor::new(config, notifier.clone());
    (editor, notifier)
}
