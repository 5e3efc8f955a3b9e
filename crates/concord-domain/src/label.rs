//! Label sequence module

/// One annotator's ordered labels, one entry per item
///
/// Index `i` in every sequence taking part in a comparison refers to the same
/// item. Labels are opaque: two labels agree only if their strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LabelSequence(Vec<String>);

impl LabelSequence {
    /// Create a sequence from any iterable of string-like labels
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    /// Number of items labelled
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence holds no labels
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the labels
    pub fn labels(&self) -> &[String] {
        &self.0
    }

    /// Label at item `index`, if present
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterate over the labels as string slices
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for LabelSequence {
    fn from(labels: Vec<String>) -> Self {
        Self(labels)
    }
}

impl From<Vec<&str>> for LabelSequence {
    fn from(labels: Vec<&str>) -> Self {
        Self::new(labels)
    }
}

impl<const N: usize> From<[&str; N]> for LabelSequence {
    fn from(labels: [&str; N]) -> Self {
        Self::new(labels)
    }
}

impl<S: Into<String>> FromIterator<S> for LabelSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
