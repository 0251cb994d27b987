//! Subcommand implementations
//!
//! Each command returns the text to print so the binary stays a thin shell.

use anyhow::{bail, Context};
use oncue_form_editor::{
    validate_response, ChannelNotifier, EditingSession, EditorConfig, FormKey, FormResponse,
    JsonFileStore, Notification, NotificationLevel, Notifier, SchemaStore,
};
use oncue_form_schema::{FieldPatch, FieldType, FormField, FormSchema};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

/// Store directory and key for a `<dir>/<key>.json` path
fn locate(path: &Path) -> anyhow::Result<(JsonFileStore, FormKey)> {
    if path.extension().and_then(|e| e.to_str()) != Some("json") {
        bail!("form files must end in .json: {}", path.display());
    }
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("no file name in {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let key = FormKey::new(stem)?;
    tracing::debug!(dir = %dir.display(), %key, "resolved form store");
    Ok((JsonFileStore::new(dir), key))
}

struct Opened {
    session: EditingSession,
    messages: UnboundedReceiver<Notification>,
}

impl Opened {
    fn drain(&mut self, out: &mut String) {
        while let Ok(notification) = self.messages.try_recv() {
            let marker = match notification.level {
                NotificationLevel::Success => "ok",
                NotificationLevel::Failure => "error",
                NotificationLevel::Info => "note",
            };
            let _ = writeln!(out, "[{marker}] {}", notification.message);
        }
    }
}

async fn open(path: &Path, config: EditorConfig, must_exist: bool) -> anyhow::Result<Opened> {
    if must_exist && !path.exists() {
        bail!("no form at {}", path.display());
    }
    let (store, key) = locate(path)?;
    let (notifier, messages) = ChannelNotifier::new();
    let notifier: Arc<dyn Notifier> = Arc::new(notifier);

    let session = EditingSession::open(Arc::new(store), key, notifier, config).await?;
    Ok(Opened { session, messages })
}

async fn load(path: &Path) -> anyhow::Result<FormSchema> {
    let (store, key) = locate(path)?;
    store
        .load(&key)
        .await?
        .with_context(|| format!("no form at {}", path.display()))
}

/// Create a form file
///
/// `template` overrides `start_from_template` from the config when given.
pub(crate) async fn init(
    path: &Path,
    config: EditorConfig,
    template: Option<bool>,
) -> anyhow::Result<String> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    let config = match template {
        Some(enabled) => config.with_template(enabled),
        None => config,
    };
    let mut opened = open(path, config, false).await?;
    // Drop the "not found" note; creating is the point
    while opened.messages.try_recv().is_ok() {}

    opened.session.save().await?;
    tracing::info!(path = %path.display(), fields = opened.session.editor().fields().len(), "form created");

    let mut out = String::new();
    opened.drain(&mut out);
    let _ = writeln!(
        out,
        "Created {} with {} field(s)",
        path.display(),
        opened.session.editor().fields().len()
    );
    Ok(out)
}

pub(crate) async fn show(path: &Path) -> anyhow::Result<String> {
    Ok(render(&load(path).await?))
}

fn render(schema: &FormSchema) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", schema.title());
    if !schema.description().is_empty() {
        let _ = writeln!(out, "{}", schema.description());
    }
    let _ = writeln!(out);
    for (index, field) in schema.fields().iter().enumerate() {
        let _ = writeln!(out, "{index:>3}  {}", describe(field));
        if let Some(options) = field.options() {
            for option in options {
                let _ = writeln!(out, "       - {option}");
            }
        }
    }
    if schema.is_empty() {
        let _ = writeln!(out, "  (no fields)");
    }
    out
}

fn describe(field: &FormField) -> String {
    let required = if field.required() { " *" } else { "" };
    format!(
        "{}{} [{}] ({})",
        field.label(),
        required,
        field.field_type().label(),
        field.id()
    )
}

pub(crate) async fn add(
    path: &Path,
    config: EditorConfig,
    field_type: FieldType,
    label: Option<&str>,
) -> anyhow::Result<String> {
    let mut opened = open(path, config, true).await?;
    let editor = opened.session.editor_mut();

    let id = editor.add_field(field_type)?;
    if let Some(label) = label {
        editor.update_field(&id, &FieldPatch::new().label(label))?;
    }
    opened.session.save().await?;
    tracing::info!(path = %path.display(), field = %id, "field added");

    let mut out = String::new();
    opened.drain(&mut out);
    if let Some(field) = opened.session.editor().schema().get(&id) {
        let _ = writeln!(out, "{}", describe(field));
    }
    Ok(out)
}

pub(crate) async fn remove(
    path: &Path,
    config: EditorConfig,
    index: usize,
) -> anyhow::Result<String> {
    let mut opened = open(path, config, true).await?;
    let editor = opened.session.editor_mut();

    let id = editor
        .schema()
        .field_at(index)
        .map(|f| f.id().clone())
        .with_context(|| format!("no field at index {index}"))?;
    let removed = editor.delete_field(&id)?;
    opened.session.save().await?;
    tracing::info!(path = %path.display(), index, field = %id, "field removed");

    let mut out = String::new();
    opened.drain(&mut out);
    let _ = writeln!(out, "Removed {}", describe(&removed));
    Ok(out)
}

pub(crate) async fn move_field(
    path: &Path,
    config: EditorConfig,
    from: usize,
    to: usize,
) -> anyhow::Result<String> {
    let mut opened = open(path, config, true).await?;
    let outcome = opened.session.editor_mut().reorder(from, to)?;
    opened.session.save().await?;
    tracing::info!(path = %path.display(), ?outcome, "reorder applied");

    let mut out = String::new();
    opened.drain(&mut out);
    let _ = writeln!(out, "{outcome:?}");
    Ok(out)
}

pub(crate) struct CheckOutcome {
    pub(crate) passed: bool,
    pub(crate) report: String,
}

pub(crate) async fn check(path: &Path, answers: Option<&Path>) -> anyhow::Result<CheckOutcome> {
    let schema = load(path).await?;
    let mut report = String::new();
    let _ = writeln!(report, "{}: {} field(s), structure ok", path.display(), schema.len());

    let Some(answers) = answers else {
        return Ok(CheckOutcome {
            passed: true,
            report,
        });
    };

    let text = tokio::fs::read_to_string(answers)
        .await
        .with_context(|| format!("reading {}", answers.display()))?;
    let response: FormResponse = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", answers.display()))?;

    let issues = validate_response(&schema, &response);
    tracing::info!(answers = response.len(), issues = issues.len(), "response checked");
    for issue in &issues {
        let _ = writeln!(report, "  - {issue}");
    }
    let _ = writeln!(
        report,
        "{} answer(s), {} issue(s)",
        response.len(),
        issues.len()
    );

    Ok(CheckOutcome {
        passed: issues.is_empty(),
        report,
    })
}

pub(crate) fn types() -> String {
    let mut out = String::new();
    for field_type in FieldType::ALL {
        let extra = if field_type.has_options() {
            "  (options)"
        } else if field_type.is_display_only() {
            "  (display only)"
        } else {
            ""
        };
        let _ = writeln!(out, "{:<16}{}{extra}", field_type.tag(), field_type.label());
    }
    out
}
