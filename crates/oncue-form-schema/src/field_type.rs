//! Field Type
//!
//! The closed set of input kinds a form can contain. Wire tags match the
//! camelCase names persisted by the form builder.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Discriminator of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    /// Single-line text input
    ShortText,
    /// Multi-line text input
    LongText,
    /// Radio group
    SingleChoice,
    /// Checkbox group
    MultipleChoice,
    /// Select box
    Dropdown,
    /// Email input
    Email,
    /// Telephone input
    Phone,
    /// Date picker
    Date,
    /// File upload
    File,
    /// Section heading (display only)
    Heading,
    /// Paragraph of text (display only)
    Paragraph,
}

impl FieldType {
    /// Every field type, in palette order
    pub const ALL: [FieldType; 11] = [
        FieldType::ShortText,
        FieldType::LongText,
        FieldType::SingleChoice,
        FieldType::MultipleChoice,
        FieldType::Dropdown,
        FieldType::Email,
        FieldType::Phone,
        FieldType::Date,
        FieldType::File,
        FieldType::Heading,
        FieldType::Paragraph,
    ];

    /// Wire tag
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            FieldType::ShortText => "shortText",
            FieldType::LongText => "longText",
            FieldType::SingleChoice => "singleChoice",
            FieldType::MultipleChoice => "multipleChoice",
            FieldType::Dropdown => "dropdown",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Date => "date",
            FieldType::File => "file",
            FieldType::Heading => "heading",
            FieldType::Paragraph => "paragraph",
        }
    }

    /// Human-readable name shown in the field palette
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            FieldType::ShortText => "Short Text",
            FieldType::LongText => "Long Text",
            FieldType::SingleChoice => "Single Choice",
            FieldType::MultipleChoice => "Multiple Choice",
            FieldType::Dropdown => "Dropdown",
            FieldType::Email => "Email",
            FieldType::Phone => "Phone Number",
            FieldType::Date => "Date",
            FieldType::File => "File Upload",
            FieldType::Heading => "Section Heading",
            FieldType::Paragraph => "Paragraph Text",
        }
    }

    /// Carries an option list
    #[inline]
    #[must_use]
    pub fn has_options(&self) -> bool {
        matches!(
            self,
            FieldType::SingleChoice | FieldType::MultipleChoice | FieldType::Dropdown
        )
    }

    /// Renders content only; collects no answer
    #[inline]
    #[must_use]
    pub fn is_display_only(&self) -> bool {
        matches!(self, FieldType::Heading | FieldType::Paragraph)
    }

    /// Text-like input that shows a placeholder
    #[inline]
    #[must_use]
    pub fn accepts_placeholder(&self) -> bool {
        matches!(
            self,
            FieldType::ShortText | FieldType::LongText | FieldType::Email | FieldType::Phone
        )
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FieldType {
    type Err = SchemaError;

    /// Accepts wire tags (`shortText`) and kebab-case (`short-text`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        FieldType::ALL
            .into_iter()
            .find(|t| t.tag().to_lowercase() == normalized)
            .ok_or_else(|| SchemaError::UnknownFieldType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_bearing_types() {
        let with_options: Vec<_> = FieldType::ALL.iter().filter(|t| t.has_options()).collect();
        assert_eq!(
            with_options,
            vec![
                &FieldType::SingleChoice,
                &FieldType::MultipleChoice,
                &FieldType::Dropdown
            ]
        );
    }

    #[test]
    fn placeholder_only_on_text_inputs() {
        assert!(FieldType::Email.accepts_placeholder());
        assert!(!FieldType::Date.accepts_placeholder());
        assert!(!FieldType::File.accepts_placeholder());
        assert!(!FieldType::Dropdown.accepts_placeholder());
        assert!(!FieldType::Heading.accepts_placeholder());
    }

    #[test]
    fn parse_tag_and_kebab() {
        assert_eq!("shortText".parse::<FieldType>().unwrap(), FieldType::ShortText);
        assert_eq!("short-text".parse::<FieldType>().unwrap(), FieldType::ShortText);
        assert_eq!("multiple_choice".parse::<FieldType>().unwrap(), FieldType::MultipleChoice);
        assert!(matches!(
            "signature".parse::<FieldType>(),
            Err(SchemaError::UnknownFieldType(_))
        ));
    }

    #[test]
    fn serde_uses_wire_tags() {
        for t in FieldType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.tag()));
        }
    }
}
