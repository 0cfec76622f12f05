//! Scoring metrics for fitted models.
//!
//! Metrics here evaluate predictions after the fact; they are independent of
//! whatever loss the model was trained with.
//!
//! # Available Metrics
//!
//! - [`NormalizedGini`]: ranking concordance between predicted and true values
//!
//! All computation accumulates in `f64` regardless of the `f32` input storage.

mod ranking;

use ndarray::ArrayView1;

pub use ranking::{normalized_gini, NormalizedGini};

// =============================================================================
// Errors
// =============================================================================

/// Input validation and domain errors for metric computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    /// `y_true` and `y_pred` must be index-aligned, so equal length.
    #[error("y_true and y_pred must have the same length, got {true_len} and {pred_len}")]
    LengthMismatch { true_len: usize, pred_len: usize },

    /// Metrics require at least one sample.
    #[error("at least one sample is required")]
    Empty,

    /// The true values carry no ranking signal (all-zero, constant, or a
    /// single sample), so the normalizing denominator is zero and the score
    /// is undefined.
    #[error("target induces no ranking signal (constant or all-zero y_true)")]
    DegenerateTarget,
}

// =============================================================================
// Ranking Metric Trait
// =============================================================================

/// A metric over a ranking induced by predicted values.
///
/// Ranking metrics depend only on the ordering of predictions, never on
/// their magnitude: rescaling predictions by any positive factor leaves the
/// score unchanged.
pub trait RankingMetric: Send + Sync {
    /// Compute the metric over index-aligned true/predicted values.
    ///
    /// Views must be contiguous (the usual case for freshly built arrays).
    fn compute(
        &self,
        y_true: ArrayView1<'_, f32>,
        y_pred: ArrayView1<'_, f32>,
    ) -> Result<f64, MetricsError>;

    /// Whether higher values indicate better performance.
    fn higher_is_better(&self) -> bool;

    /// Name of the metric (for logging).
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // Verify Send + Sync
    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn metrics_are_send_sync() {
        assert_send_sync::<NormalizedGini>();
        assert_send_sync::<MetricsError>();
    }

    #[test]
    fn trait_object_dispatch() {
        let metric: &dyn RankingMetric = &NormalizedGini;
        let y_true = array![1.0f32, 2.0, 3.0];
        let y_pred = array![1.0f32, 2.0, 3.0];
        let score = metric.compute(y_true.view(), y_pred.view()).unwrap();
        approx::assert_abs_diff_eq!(score, 1.0, epsilon = 1e-12);
        assert!(metric.higher_is_better());
        assert_eq!(metric.name(), "gini");
    }
}
