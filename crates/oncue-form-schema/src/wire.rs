//! Wire format
//!
//! Persisted fields use a flat record with optional attributes, keyed by a
//! `type` tag. [`RawField`] is that record; conversion into [`FormField`]
//! validates it against the field type.

use crate::error::SchemaError;
use crate::field::{FieldKind, FormField, InputMeta};
use crate::field_type::FieldType;
use crate::id::FieldId;
use crate::options::OptionList;
use serde::{Deserialize, Serialize};

/// Flat, loosely-typed field record as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawField {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl TryFrom<RawField> for FormField {
    type Error = SchemaError;

    fn try_from(raw: RawField) -> Result<Self, Self::Error> {
        let id: FieldId = raw.id.parse()?;
        let field_type: FieldType = raw.field_type.parse()?;

        let options = match (field_type.has_options(), raw.options) {
            (true, Some(options)) => OptionList::new(options)
                .map_err(|source| SchemaError::InvalidOptions {
                    id: id.clone(),
                    source,
                })?,
            (true, None) => return Err(SchemaError::MissingOptions { id, field_type }),
            (false, Some(_)) => return Err(SchemaError::UnexpectedOptions { id, field_type }),
            // Unused by non-choice kinds
            (false, None) => OptionList::seeded(),
        };

        let meta = InputMeta::new(raw.description.unwrap_or_default(), raw.required);
        let kind = FieldKind::assemble(
            field_type,
            meta,
            raw.placeholder.unwrap_or_default(),
            options,
        );

        Ok(FormField::new(id, raw.label, kind))
    }
}

impl From<FormField> for RawField {
    fn from(field: FormField) -> Self {
        let field_type = field.field_type();
        Self {
            id: field.id().to_string(),
            field_type: field_type.tag().to_string(),
            label: field.label().to_string(),
            placeholder: field.placeholder().map(str::to_string),
            description: field.description().map(str::to_string),
            required: field.required(),
            options: field.options().map(|o| o.as_slice().to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptionError;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> Result<FormField, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn reads_builder_record() {
        let field = parse(
            r#"{"id":"k3j9x0a1b","type":"shortText","label":"Full Name",
                "placeholder":"Enter your full name",
                "description":"Please enter your full legal name","required":true}"#,
        )
        .unwrap();

        assert_eq!(field.id().as_str(), "k3j9x0a1b");
        assert_eq!(field.field_type(), FieldType::ShortText);
        assert_eq!(field.placeholder(), Some("Enter your full name"));
        assert!(field.required());
    }

    #[test]
    fn drops_meaningless_attributes() {
        let field = parse(
            r#"{"id":"h1","type":"heading","label":"Contact","placeholder":"x",
                "description":"y","required":true}"#,
        )
        .unwrap();

        assert_eq!(field.kind(), &FieldKind::Heading);
        let raw = RawField::from(field);
        assert_eq!(raw.placeholder, None);
        assert_eq!(raw.description, None);
        assert!(!raw.required);
    }

    #[test]
    fn rejects_choice_without_options() {
        let err = RawField {
            id: "c1".into(),
            field_type: "dropdown".into(),
            label: "Budget".into(),
            placeholder: None,
            description: None,
            required: false,
            options: None,
        };
        assert!(matches!(
            FormField::try_from(err),
            Err(SchemaError::MissingOptions { .. })
        ));
    }

    #[test]
    fn rejects_empty_options() {
        let raw = RawField {
            id: "c1".into(),
            field_type: "singleChoice".into(),
            label: "Pick".into(),
            placeholder: None,
            description: None,
            required: false,
            options: Some(vec![]),
        };
        assert_eq!(
            FormField::try_from(raw),
            Err(SchemaError::InvalidOptions {
                id: "c1".parse().unwrap(),
                source: OptionError::Empty,
            })
        );
    }

    #[test]
    fn rejects_options_on_text() {
        assert!(parse(r#"{"id":"t1","type":"email","label":"E","options":["a"]}"#).is_err());
    }

    #[test]
    fn rejects_unknown_type() {
        let err = parse(r#"{"id":"t1","type":"signature","label":"Sign"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown field type"));
    }

    #[test]
    fn writes_options_only_for_choices() {
        let field = FormField::blank(FieldId::generate(), FieldType::Dropdown);
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["type"], "dropdown");
        assert_eq!(value["options"][2], "Option 3");
        assert!(value.get("placeholder").is_none());

        let text = FormField::blank(FieldId::generate(), FieldType::LongText);
        let value = serde_json::to_value(&text).unwrap();
        assert!(value.get("options").is_none());
        assert_eq!(value["placeholder"], "");
    }
}
