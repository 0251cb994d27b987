//! Field factory
//!
//! Creates fields with fresh ids. Ids come from a monotonic ULID generator,
//! so a factory never hands out the same id twice.

use crate::field::FormField;
use crate::field_type::FieldType;
use crate::id::FieldId;
use ulid::{Generator, Ulid};

/// Source of new fields for one editing session
pub struct FieldFactory {
    generator: Generator,
}

impl FieldFactory {
    /// Create factory
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            generator: Generator::new(),
        }
    }

    /// Next unused id
    pub fn next_id(&mut self) -> FieldId {
        // Overflow only happens after 2^80 ids in one millisecond
        let ulid = self.generator.generate().unwrap_or_else(|_| Ulid::new());
        FieldId::from_ulid(ulid)
    }

    /// New default field of `field_type`
    ///
    /// Label "New Field", empty placeholder/description, not required.
    /// Choice types get `Option 1..3`; other types get no option list.
    pub fn create(&mut self, field_type: FieldType) -> FormField {
        FormField::blank(self.next_id(), field_type)
    }

    /// Copy of `field` under a fresh id, label suffixed with " (Copy)"
    pub fn duplicate(&mut self, field: &FormField) -> FormField {
        field.duplicate_as(self.next_id())
    }
}

impl Default for FieldFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FieldFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldFactory").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut factory = FieldFactory::new();
        let ids: Vec<FieldId> = (0..500).map(|_| factory.next_id()).collect();

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn create_applies_defaults() {
        let mut factory = FieldFactory::new();
        let field = factory.create(FieldType::Phone);
        assert_eq!(field.label(), "New Field");
        assert_eq!(field.placeholder(), Some(""));
        assert_eq!(field.description(), Some(""));
        assert!(field.options().is_none());
    }

    #[test]
    fn duplicate_gets_fresh_id() {
        let mut factory = FieldFactory::new();
        let original = factory.create(FieldType::Dropdown);
        let copy = factory.duplicate(&original);
        assert_ne!(copy.id(), original.id());
        assert_eq!(copy.label(), "New Field (Copy)");
        assert_eq!(copy.options(), original.options());
    }
}
