//! OnCue Form Editor
//!
//! Editing session over a [`FormSchema`](oncue_form_schema::FormSchema).
//!
//! # Core Concepts
//!
//! - [`FormEditor`]: Single-writer state; every mutation returns a `Result`
//! - [`EditorMode`]: Edit vs. preview; preview refuses structural edits
//! - [`PanelView`] / [`PanelEditor`]: Properties panel for the selection
//! - [`DragGesture`]: Transient drag state resolving to a [`DropResult`]
//! - [`Notifier`]: Injected sink for user-facing messages
//! - [`SchemaStore`]: Async load/save port, with in-memory and JSON file stores
//! - [`EditingSession`]: Editor bound to one stored form
//!
//! # Example
//!
//! ```rust
//! use oncue_form_editor::{EditorConfig, FormEditor, NullNotifier};
//! use oncue_form_schema::FieldType;
//! use std::sync::Arc;
//!
//! let mut editor = FormEditor::new(EditorConfig::default(), Arc::new(NullNotifier));
//!
//! let id = editor.add_field(FieldType::Dropdown)?;
//! editor.add_option(&id)?;
//! editor.delete_option(&id, 0)?;
//!
//! let options = editor.schema().get(&id).and_then(|f| f.options()).map(|o| o.len());
//! assert_eq!(options, Some(3));
//! # Ok::<(), oncue_form_editor::EditError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod config;
mod drag;
mod editor;
mod error;
mod mode;
mod notify;
mod panel;
mod preview;
mod session;
mod store;

// Re-exports
pub use config::EditorConfig;
pub use drag::{DragGesture, DropResult, ReorderOutcome};
pub use editor::FormEditor;
pub use error::{ConfigError, EditError, StoreError};
pub use mode::EditorMode;
pub use notify::{
    ChannelNotifier, Notification, NotificationLevel, Notifier, NullNotifier, TracingNotifier,
};
pub use panel::{FieldProperties, PanelEditor, PanelView};
pub use preview::{validate_response, Answer, FormResponse, PreviewSession, ResponseIssue};
pub use session::EditingSession;
pub use store::{FormKey, InMemoryStore, JsonFileStore, SchemaStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
