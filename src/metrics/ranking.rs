//! Ranking metrics.
//!
//! The normalized Gini coefficient scores how well the ordering induced by
//! predictions reproduces the ordering induced by the true values.

use ndarray::ArrayView1;

use super::{MetricsError, RankingMetric};

// =============================================================================
// Normalized Gini Coefficient
// =============================================================================

/// Normalized Gini coefficient for ranking quality.
///
/// Higher is better. The score lands in roughly `[-1, 1]`:
///
/// - `1.0`: the predicted ranking exactly reproduces the true ranking
/// - `~0.0`: no better than a random ordering
/// - negative: the model tends to invert high and low values
///
/// Only the ordering of predictions matters; the score is invariant to any
/// positive rescaling of `y_pred`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedGini;

impl RankingMetric for NormalizedGini {
    fn compute(
        &self,
        y_true: ArrayView1<'_, f32>,
        y_pred: ArrayView1<'_, f32>,
    ) -> Result<f64, MetricsError> {
        let y_true = y_true.as_slice().expect("y_true should be contiguous");
        let y_pred = y_pred.as_slice().expect("y_pred should be contiguous");
        normalized_gini(y_true, y_pred)
    }

    fn higher_is_better(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "gini"
    }
}

/// Compute the normalized Gini coefficient of `y_pred` against `y_true`.
///
/// Both orderings are summarized as Lorenz curves (cumulative share of the
/// total true-value mass captured by the top-k items), and the area between
/// the model's curve and the equality line is normalized by the same area
/// for the oracle ordering:
///
/// ```text
/// G_pred = sum_i ( (i+1)/n - cumsum(true by pred desc)_i / sum(true) )
/// G_true = sum_i ( (i+1)/n - cumsum(true desc)_i        / sum(true) )
/// gini   = G_pred / G_true
/// ```
///
/// # Tie-breaking
///
/// Equal predicted values keep their input order (stable descending sort).
/// When true values differ among tied predictions the score depends on this
/// choice, so it is fixed deterministically rather than left to sort
/// internals.
///
/// # Errors
///
/// - [`MetricsError::LengthMismatch`] when the inputs differ in length
/// - [`MetricsError::Empty`] when the inputs are empty
/// - [`MetricsError::DegenerateTarget`] when `y_true` is all-zero, constant,
///   or a single sample: the oracle area `G_true` is zero and the ratio is
///   undefined, surfaced as an error instead of a NaN/Inf score
pub fn normalized_gini(y_true: &[f32], y_pred: &[f32]) -> Result<f64, MetricsError> {
    if y_true.len() != y_pred.len() {
        return Err(MetricsError::LengthMismatch {
            true_len: y_true.len(),
            pred_len: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(MetricsError::Empty);
    }

    let total: f64 = y_true.iter().map(|&v| v as f64).sum();
    if total == 0.0 {
        return Err(MetricsError::DegenerateTarget);
    }

    let g_true = lorenz_gap(y_true, &descending_argsort(y_true), total);
    if g_true == 0.0 {
        return Err(MetricsError::DegenerateTarget);
    }
    let g_pred = lorenz_gap(y_true, &descending_argsort(y_pred), total);

    Ok(g_pred / g_true)
}

/// Indices that sort `values` descending.
///
/// Stable: equal values keep their input order. Incomparable values (NaN)
/// compare equal, matching how prediction sorts behave elsewhere in the
/// ecosystem.
fn descending_argsort(values: &[f32]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&a, &b| {
        values[b]
            .partial_cmp(&values[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    indices
}

/// Area between the equality line and the Lorenz curve of `values` taken in
/// `order`, with `total = sum(values)` as the normalizer.
fn lorenz_gap(values: &[f32], order: &[usize], total: f64) -> f64 {
    let n = values.len() as f64;
    let mut cumulative = 0.0f64;
    let mut gap = 0.0f64;
    for (i, &idx) in order.iter().enumerate() {
        cumulative += values[idx] as f64;
        gap += (i as f64 + 1.0) / n - cumulative / total;
    }
    gap
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn perfect_prediction_is_one() {
        // Any strictly order-preserving transform of the target scores 1.0.
        let y_true = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        let y_pred = [10.0f32, 20.0, 30.0, 40.0, 50.0];
        let score = normalized_gini(&y_true, &y_pred).unwrap();
        assert_abs_diff_eq!(score, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn identity_prediction_is_one() {
        let y = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        let score = normalized_gini(&y, &y).unwrap();
        assert_abs_diff_eq!(score, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn perfect_inversion_is_minus_one() {
        // For the symmetric set [1..5] the flipped ranking mirrors the
        // perfect one exactly.
        let y_true = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        let y_pred = [5.0f32, 4.0, 3.0, 2.0, 1.0];
        let score = normalized_gini(&y_true, &y_pred).unwrap();
        assert_abs_diff_eq!(score, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn shuffled_ranking_known_value() {
        // pred_order = [3, 5, 1, 4, 2], worked by hand:
        // G_pred = -0.2, G_true = -2/3, score = 0.3
        let y_true = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        let y_pred = [3.0f32, 1.0, 5.0, 2.0, 4.0];
        let score = normalized_gini(&y_true, &y_pred).unwrap();
        assert_abs_diff_eq!(score, 0.3, epsilon = 1e-9);
    }

    #[test]
    fn binary_target_known_value() {
        // One inversion among four samples: G_pred = -0.5, G_true = -1.0.
        let y_true = [0.0f32, 0.0, 1.0, 1.0];
        let y_pred = [0.1f32, 0.4, 0.3, 0.8];
        let score = normalized_gini(&y_true, &y_pred).unwrap();
        assert_abs_diff_eq!(score, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn constant_predictions_keep_input_order() {
        // With the stable tie-break, constant predictions degenerate to the
        // input order. [1..5] arrives ascending, the worst ordering, so the
        // score is exactly -1.0 rather than ~0.
        let y_true = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        let y_pred = [1.0f32, 1.0, 1.0, 1.0, 1.0];
        let score = normalized_gini(&y_true, &y_pred).unwrap();
        assert_abs_diff_eq!(score, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn length_mismatch_errors() {
        let err = normalized_gini(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            MetricsError::LengthMismatch {
                true_len: 3,
                pred_len: 2
            }
        );
    }

    #[test]
    fn empty_input_errors() {
        assert_eq!(normalized_gini(&[], &[]).unwrap_err(), MetricsError::Empty);
    }

    #[test]
    fn scale_invariance_is_exact() {
        // Positive rescaling leaves the induced ordering untouched, so the
        // exact same arithmetic runs and the result is bit-identical.
        let y_true = [0.0f32, 3.0, 1.0, 7.0, 2.0, 5.0];
        let y_pred = [0.2f32, 0.9, 0.1, 0.8, 0.3, 0.7];
        let scaled: Vec<f32> = y_pred.iter().map(|&p| 2.5 * p).collect();
        let a = normalized_gini(&y_true, &y_pred).unwrap();
        let b = normalized_gini(&y_true, &scaled).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn determinism_bit_identical() {
        let y_true = [0.0f32, 3.0, 1.0, 7.0, 2.0, 5.0];
        let y_pred = [0.2f32, 0.9, 0.1, 0.8, 0.3, 0.7];
        let a = normalized_gini(&y_true, &y_pred).unwrap();
        let b = normalized_gini(&y_true, &y_pred).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn all_zero_target_is_degenerate() {
        let err = normalized_gini(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, MetricsError::DegenerateTarget);
    }

    #[test]
    fn constant_target_is_degenerate() {
        // Constant nonzero target: the Lorenz curve coincides with the
        // equality line, so the normalizer is zero.
        let err = normalized_gini(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, MetricsError::DegenerateTarget);
    }

    #[test]
    fn single_sample_is_degenerate() {
        let err = normalized_gini(&[3.0], &[1.0]).unwrap_err();
        assert_eq!(err, MetricsError::DegenerateTarget);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let y_true = [2.0f32, 1.0, 3.0];
        let y_pred = [0.3f32, 0.1, 0.9];
        let before = (y_true, y_pred);
        let _ = normalized_gini(&y_true, &y_pred).unwrap();
        assert_eq!((y_true, y_pred), before);
    }

    #[test]
    fn descending_argsort_stable_on_ties() {
        let order = descending_argsort(&[1.0, 3.0, 1.0, 3.0]);
        assert_eq!(order, vec![1, 3, 0, 2]);
    }
}
