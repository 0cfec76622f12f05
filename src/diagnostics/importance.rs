//! Factor-importance ranking for a fitted model.
//!
//! A fitted estimator reports one importance score per factor; this type
//! orders them for the usual horizontal bar chart and exposes normalized
//! shares when the scores have a meaningful total.

use serde::Serialize;

/// Factor names paired with importance scores, sorted descending.
///
/// Ties in importance fall back to name order, so the ranking is
/// deterministic regardless of input order.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct FactorImportance {
    factors: Vec<(String, f64)>,
}

impl FactorImportance {
    /// Build a ranking from `(name, importance)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut factors: Vec<(String, f64)> = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect();
        factors.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        Self { factors }
    }

    /// Number of factors.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Whether the ranking is empty.
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Iterate `(name, importance)` in descending importance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.factors.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// The `k` most important factors (all of them when `k` exceeds the count).
    pub fn top(&self, k: usize) -> &[(String, f64)] {
        &self.factors[..k.min(self.factors.len())]
    }

    /// Importance shares summing to 1, or `None` when the total is not
    /// positive (all-zero or negative importances have no meaningful shares).
    pub fn normalized(&self) -> Option<Vec<(String, f64)>> {
        let total: f64 = self.factors.iter().map(|(_, v)| v).sum();
        if total <= 0.0 {
            return None;
        }
        Some(
            self.factors
                .iter()
                .map(|(name, value)| (name.clone(), value / total))
                .collect(),
        )
    }
}
