//! Saliency dictionary with punctuation-stripped fallback lookup.

use std::collections::HashMap;

use crate::range::ValueRange;

/// Keep letters, digits, and apostrophes; drop everything else.
fn strip_punctuation(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '\'')
        .collect()
}

/// True for keys with no visible representation: empty, or solely control
/// characters (C0, DEL, and the Latin-1 supplement control range).
fn is_artifact_key(key: &str) -> bool {
    key.is_empty() || key.chars().all(char::is_control)
}

/// Token -> saliency value dictionary.
///
/// Artifact keys are discarded at construction so they can never match a
/// lookup and never skew the value range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaliencyMap {
    values: HashMap<String, f64>,
}

impl SaliencyMap {
    #[must_use]
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let values = entries
            .into_iter()
            .filter(|(key, _)| !is_artifact_key(key))
            .collect();
        Self { values }
    }

    /// Resolve a value for a token: exact match first, then the
    /// punctuation-stripped form, else `None`.
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<f64> {
        if let Some(value) = self.values.get(token) {
            return Some(*value);
        }
        self.values.get(&strip_punctuation(token)).copied()
    }

    /// Range over every value in the dictionary.
    #[must_use]
    pub fn value_range(&self) -> ValueRange {
        ValueRange::from_values(self.values.values().copied())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}
