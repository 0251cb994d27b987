//! Edit / preview mode

use serde::{Deserialize, Serialize};

/// Mutually exclusive editor modes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// Authoring: selection, drag and structural edits enabled
    #[default]
    Edit,
    /// Fillable rendering; structure is read-only
    Preview,
}

impl EditorMode {
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            EditorMode::Edit => EditorMode::Preview,
            EditorMode::Preview => EditorMode::Edit,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_edit(self) -> bool {
        self == EditorMode::Edit
    }

    #[inline]
    #[must_use]
    pub fn is_preview(self) -> bool {
        self == EditorMode::Preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_identity() {
        assert_eq!(EditorMode::Edit.toggled(), EditorMode::Preview);
        assert_eq!(EditorMode::Edit.toggled().toggled(), EditorMode::Edit);
        assert!(EditorMode::default().is_edit());
    }
}
