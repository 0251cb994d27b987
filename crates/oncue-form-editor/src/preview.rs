//! Preview fill
//!
//! In preview mode the schema renders as fillable inputs. Answers collected
//! here are checked against the schema the same way the rendered form would
//! check them on submit.

use crate::error::EditError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use oncue_form_schema::{FieldId, FieldType, FormField, FormSchema};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// One answer to one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Answer {
    /// Short/long text, email, phone
    Text(String),
    /// Single choice or dropdown
    Choice(String),
    /// Multiple choice
    Choices(Vec<String>),
    Date(NaiveDate),
    /// Uploaded file name
    File(String),
}

impl Answer {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Answer::Text(_) => "text",
            Answer::Choice(_) => "choice",
            Answer::Choices(_) => "choices",
            Answer::Date(_) => "date",
            Answer::File(_) => "file",
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            Answer::Text(s) | Answer::Choice(s) | Answer::File(s) => s.trim().is_empty(),
            Answer::Choices(v) => v.is_empty(),
            Answer::Date(_) => false,
        }
    }

    fn fits(&self, field_type: FieldType) -> bool {
        matches!(
            (field_type, self),
            (
                FieldType::ShortText | FieldType::LongText | FieldType::Email | FieldType::Phone,
                Answer::Text(_)
            ) | (FieldType::SingleChoice | FieldType::Dropdown, Answer::Choice(_))
                | (FieldType::MultipleChoice, Answer::Choices(_))
                | (FieldType::Date, Answer::Date(_))
                | (FieldType::File, Answer::File(_))
        )
    }
}

/// Answers keyed by field id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormResponse {
    answers: BTreeMap<FieldId, Answer>,
}

impl FormResponse {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an answer, returning the one it replaced
    pub fn insert(&mut self, id: FieldId, answer: Answer) -> Option<Answer> {
        self.answers.insert(id, answer)
    }

    pub fn remove(&mut self, id: &FieldId) -> Option<Answer> {
        self.answers.remove(id)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: &FieldId) -> Option<&Answer> {
        self.answers.get(id)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &Answer)> {
        self.answers.iter()
    }
}

/// Problem found in a response
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseIssue {
    #[error("'{label}' is required")]
    MissingRequired { id: FieldId, label: String },

    #[error("field {id} expects a {expected} answer, got {found}")]
    KindMismatch {
        id: FieldId,
        expected: FieldType,
        found: &'static str,
    },

    #[error("'{value}' is not an option of field {id}")]
    UnknownChoice { id: FieldId, value: String },

    #[error("'{value}' is not a valid email address")]
    InvalidEmail { id: FieldId, value: String },

    #[error("field {id} does not take an answer")]
    NotAnswerable { id: FieldId },

    #[error("no field with id {id}")]
    UnknownField { id: FieldId },
}

/// Check `response` against `schema`
///
/// Issues come in field order, followed by answers to ids the schema does
/// not contain.
#[must_use]
pub fn validate_response(schema: &FormSchema, response: &FormResponse) -> Vec<ResponseIssue> {
    let mut issues = Vec::new();

    for field in schema.fields() {
        check_field(field, response.get(field.id()), &mut issues);
    }

    issues.extend(
        response
            .iter()
            .filter(|(id, _)| !schema.contains(id))
            .map(|(id, _)| ResponseIssue::UnknownField { id: id.clone() }),
    );

    issues
}

fn check_field(field: &FormField, answer: Option<&Answer>, issues: &mut Vec<ResponseIssue>) {
    let id = field.id();
    let field_type = field.field_type();

    if field_type.is_display_only() {
        if answer.is_some() {
            issues.push(ResponseIssue::NotAnswerable { id: id.clone() });
        }
        return;
    }

    let answer = match answer {
        Some(answer) if !answer.is_blank() => answer,
        _ => {
            if field.required() {
                issues.push(ResponseIssue::MissingRequired {
                    id: id.clone(),
                    label: field.label().to_string(),
                });
            }
            return;
        }
    };

    if !answer.fits(field_type) {
        issues.push(ResponseIssue::KindMismatch {
            id: id.clone(),
            expected: field_type,
            found: answer.kind(),
        });
        return;
    }

    match answer {
        Answer::Text(value) if field_type == FieldType::Email => {
            if !EMAIL.is_match(value.trim()) {
                issues.push(ResponseIssue::InvalidEmail {
                    id: id.clone(),
                    value: value.clone(),
                });
            }
        }
        Answer::Choice(value) => check_choice(field, value, issues),
        Answer::Choices(values) => {
            for value in values {
                check_choice(field, value, issues);
            }
        }
        _ => {}
    }
}

fn check_choice(field: &FormField, value: &str, issues: &mut Vec<ResponseIssue>) {
    let known = field.options().is_some_and(|options| options.contains(value));
    if !known {
        issues.push(ResponseIssue::UnknownChoice {
            id: field.id().clone(),
            value: value.to_string(),
        });
    }
}

/// Fillable rendering of a schema
#[derive(Debug)]
pub struct PreviewSession<'a> {
    schema: &'a FormSchema,
    response: FormResponse,
}

impl<'a> PreviewSession<'a> {
    #[must_use]
    pub fn new(schema: &'a FormSchema) -> Self {
        Self {
            schema,
            response: FormResponse::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn schema(&self) -> &FormSchema {
        self.schema
    }

    #[inline]
    #[must_use]
    pub fn response(&self) -> &FormResponse {
        &self.response
    }

    /// Answer the field with `id`
    ///
    /// # Errors
    /// Returns [`EditError::FieldNotFound`] if the schema has no such field
    pub fn fill(&mut self, id: &FieldId, answer: Answer) -> Result<(), EditError> {
        if !self.schema.contains(id) {
            return Err(EditError::FieldNotFound(id.clone()));
        }
        self.response.insert(id.clone(), answer);
        Ok(())
    }

    /// Withdraw the answer to `id`
    pub fn clear(&mut self, id: &FieldId) -> Option<Answer> {
        self.response.remove(id)
    }

    #[must_use]
    pub fn issues(&self) -> Vec<ResponseIssue> {
        validate_response(self.schema, &self.response)
    }

    /// Finish filling
    ///
    /// # Errors
    /// Returns every issue found when the response does not satisfy the form
    pub fn submit(self) -> Result<FormResponse, Vec<ResponseIssue>> {
        let issues = self.issues();
        if issues.is_empty() {
            tracing::info!(answers = self.response.len(), "preview response accepted");
            Ok(self.response)
        } else {
            tracing::debug!(issues = issues.len(), "preview response rejected");
            Err(issues)
        }
    }
}
