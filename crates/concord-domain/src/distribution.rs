//! Category distribution module
//!
//! Derives the union of categories seen in two sequences and the marginal
//! frequency of each category on either side. Categories are kept in an ordered
//! map so that chance-agreement sums always run in the same order.

use crate::LabelSequence;
use std::collections::BTreeMap;

/// Per-category occurrence counts for two compared sequences
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDistribution<'a> {
    counts: BTreeMap<&'a str, (usize, usize)>,
    left_len: usize,
    right_len: usize,
}

impl<'a> CategoryDistribution<'a> {
    /// Count every category occurring in `a` or `b`
    pub fn from_pair(a: &'a LabelSequence, b: &'a LabelSequence) -> Self {
        let mut counts: BTreeMap<&'a str, (usize, usize)> = BTreeMap::new();

        for label in a.iter() {
            counts.entry(label).or_insert((0, 0)).0 += 1;
        }
        for label in b.iter() {
            counts.entry(label).or_insert((0, 0)).1 += 1;
        }

        Self {
            counts,
            left_len: a.len(),
            right_len: b.len(),
        }
    }

    /// Categories in the union, in sorted order
    pub fn categories(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.counts.keys().copied()
    }

    /// Number of distinct categories in the union
    pub fn category_count(&self) -> usize {
        self.counts.len()
    }

    /// Marginal frequency of `category` in the left-hand sequence
    pub fn left_marginal(&self, category: &str) -> f64 {
        let count = self.counts.get(category).map_or(0, |c| c.0);
        relative(count, self.left_len)
    }

    /// Marginal frequency of `category` in the right-hand sequence
    pub fn right_marginal(&self, category: &str) -> f64 {
        let count = self.counts.get(category).map_or(0, |c| c.1);
        relative(count, self.right_len)
    }

    /// Chance agreement `pe = Σ pA(c) · pB(c)` over the category union
    pub fn expected_agreement(&self) -> f64 {
        self.counts
            .values()
            .map(|&(left, right)| relative(left, self.left_len) * relative(right, self.right_len))
            .sum()
    }
}

fn relative(count: usize, len: usize) -> f64 {
    if len == 0 {
        0.0
    } else {
        count as f64 / len as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marginals() {
        let a = LabelSequence::from(["A", "B", "A", "A"]);
        let b = LabelSequence::from(["A", "B", "B", "A"]);
        let dist = CategoryDistribution::from_pair(&a, &b);

        assert_eq!(dist.left_marginal("A"), 0.75);
        assert_eq!(dist.right_marginal("A"), 0.5);
        assert_eq!(dist.left_marginal("B"), 0.25);
        assert_eq!(dist.right_marginal("B"), 0.5);
        assert_eq!(dist.expected_agreement(), 0.5);
    }

    #[test]
    fn test_union_counts_each_category_once() {
        let a = LabelSequence::from(["cat", "dog", "cat"]);
        let b = LabelSequence::from(["bird", "dog", "dog"]);
        let dist = CategoryDistribution::from_pair(&a, &b);

        let categories: Vec<_> = dist.categories().collect();
        assert_eq!(categories, vec!["bird", "cat", "dog"]);
        assert_eq!(dist.category_count(), 3);
    }

    #[test]
    fn test_category_absent_on_one_side() {
        let a = LabelSequence::from(["X", "X"]);
        let b = LabelSequence::from(["Y", "Y"]);
        let dist = CategoryDistribution::from_pair(&a, &b);

        assert_eq!(dist.left_marginal("Y"), 0.0);
        assert_eq!(dist.right_marginal("X"), 0.0);
        assert_eq!(dist.expected_agreement(), 0.0);
    }

    #[test]
    fn test_unknown_category() {
        let a = LabelSequence::from(["X"]);
        let dist = CategoryDistribution::from_pair(&a, &a);
        assert_eq!(dist.left_marginal("missing"), 0.0);
    }

    #[test]
    fn test_empty_sequences() {
        let empty = LabelSequence::default();
        let dist = CategoryDistribution::from_pair(&empty, &empty);
        assert_eq!(dist.category_count(), 0);
        assert_eq!(dist.expected_agreement(), 0.0);
    }
}
