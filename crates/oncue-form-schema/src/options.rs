//! Option lists for choice fields
//!
//! [`OptionList`] is never empty: construction from zero entries fails and
//! removing the last entry is refused.

use crate::error::OptionError;
use serde::{Deserialize, Serialize};

/// Number of options a new choice field starts with
pub const DEFAULT_OPTION_COUNT: usize = 3;

/// Positional default label: `Option {n}`, 1-based
#[inline]
#[must_use]
pub fn default_option_label(n: usize) -> String {
    format!("Option {n}")
}

/// Ordered, non-empty list of choice strings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct OptionList(Vec<String>);

impl OptionList {
    /// Build from entries
    ///
    /// # Errors
    /// Returns [`OptionError::Empty`] for an empty vector
    pub fn new(options: Vec<String>) -> Result<Self, OptionError> {
        if options.is_empty() {
            return Err(OptionError::Empty);
        }
        Ok(Self(options))
    }

    /// Default seed: `Option 1` through `Option 3`
    #[must_use]
    pub fn seeded() -> Self {
        Self((1..=DEFAULT_OPTION_COUNT).map(default_option_label).collect())
    }

    /// Number of options (at least one)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow entries
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Entry at index
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Whether `value` is one of the options
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|o| o == value)
    }

    /// Iterate entries in order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Append `Option {N}` where N is the length after insertion
    ///
    /// Returns the index of the new option.
    pub fn push_default(&mut self) -> usize {
        let label = default_option_label(self.0.len() + 1);
        self.0.push(label);
        self.0.len() - 1
    }

    /// Replace the option at `index`, returning the previous value
    ///
    /// # Errors
    /// Returns [`OptionError::IndexOutOfRange`] if `index` is past the end
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<String, OptionError> {
        let len = self.0.len();
        let slot = self
            .0
            .get_mut(index)
            .ok_or(OptionError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, value.into()))
    }

    /// Remove the option at `index`
    ///
    /// # Errors
    /// - [`OptionError::LastOption`] when only one option remains
    /// - [`OptionError::IndexOutOfRange`] if `index` is past the end
    pub fn remove(&mut self, index: usize) -> Result<String, OptionError> {
        if self.0.len() <= 1 {
            return Err(OptionError::LastOption);
        }
        if index >= self.0.len() {
            return Err(OptionError::IndexOutOfRange {
                index,
                len: self.0.len(),
            });
        }
        Ok(self.0.remove(index))
    }

    /// Unwrap entries
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Default for OptionList {
    fn default() -> Self {
        Self::seeded()
    }
}

impl TryFrom<Vec<String>> for OptionList {
    type Error = OptionError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<[String]> for OptionList {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
