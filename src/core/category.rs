use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered label registry backing a category axis.
///
/// The data coordinate of a category is its registration index, so series
/// address categories by index while tick labels resolve back to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CategoryRegistry {
    labels: IndexMap<String, usize>,
}

impl CategoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for label in labels {
            registry.register(label);
        }
        registry
    }

    /// Registers a label and returns its index; re-registering is idempotent.
    pub fn register(&mut self, label: impl Into<String>) -> usize {
        let label = label.into();
        let next = self.labels.len();
        *self.labels.entry(label).or_insert(next)
    }

    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.get(label).copied()
    }

    #[must_use]
    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.labels.get_index(index).map(|(label, _)| label.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
