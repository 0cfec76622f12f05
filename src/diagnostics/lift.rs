//! Lift table: actual vs. predicted means across prediction percentile bands.
//!
//! Rows are ranked by predicted value and split into equal-population bands.
//! Comparing the mean actual against the mean predicted value per band shows
//! where the model over- or under-predicts along its own ranking.

use serde::Serialize;

use super::binning::{band_index, percentile_edges};
use super::SummaryError;

/// Default number of bands: 5% percentile steps.
pub const DEFAULT_BANDS: usize = 20;

/// One percentile band of predictions with its aggregated statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiftBand {
    /// Lower prediction edge. The first band includes this value.
    pub lower: f64,
    /// Upper prediction edge (inclusive).
    pub upper: f64,
    /// Number of samples in the band.
    pub count: usize,
    /// Mean of `y_true` over the band.
    pub mean_actual: f64,
    /// Mean of `y_pred` over the band.
    pub mean_predicted: f64,
}

impl LiftBand {
    /// Display label for the band, `"(lo, hi]"` style.
    pub fn label(&self) -> String {
        format!("({:.3}, {:.3}]", self.lower, self.upper)
    }
}

/// Lift bands ordered by ascending prediction.
///
/// Every sample with a finite prediction lands in exactly one band. Heavily
/// tied predictions collapse adjacent bands, so fewer than the requested
/// number may come back; constant predictions yield a single band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiftTable {
    /// Per-band statistics, ascending by prediction.
    pub bands: Vec<LiftBand>,
}

impl LiftTable {
    /// Total number of samples across all bands.
    pub fn n_samples(&self) -> usize {
        self.bands.iter().map(|b| b.count).sum()
    }
}

/// Build a lift table over `n_bands` percentile bands of `y_pred`.
///
/// The percentile edges span the full prediction range, first band closed on
/// the left, so no finite row is dropped. Samples with a non-finite
/// prediction belong to no band.
///
/// # Errors
///
/// - [`SummaryError::LengthMismatch`] when the inputs differ in length
/// - [`SummaryError::ZeroBands`] when `n_bands == 0`
/// - [`SummaryError::Empty`] when no prediction is finite
pub fn lift_table(y_true: &[f32], y_pred: &[f32], n_bands: usize) -> Result<LiftTable, SummaryError> {
    if y_true.len() != y_pred.len() {
        return Err(SummaryError::LengthMismatch {
            left: y_true.len(),
            right: y_pred.len(),
        });
    }
    if n_bands == 0 {
        return Err(SummaryError::ZeroBands);
    }

    let edges = percentile_edges(y_pred, n_bands);
    if edges.len() < 2 {
        return Err(SummaryError::Empty);
    }
    let n = edges.len() - 1;

    let mut counts = vec![0usize; n];
    let mut sum_actual = vec![0.0f64; n];
    let mut sum_pred = vec![0.0f64; n];
    for (&actual, &pred) in y_true.iter().zip(y_pred.iter()) {
        if let Some(band) = band_index(&edges, pred as f64) {
            counts[band] += 1;
            sum_actual[band] += actual as f64;
            sum_pred[band] += pred as f64;
        }
    }

    let bands = (0..n)
        .filter(|&b| counts[b] > 0)
        .map(|b| LiftBand {
            lower: edges[b],
            upper: edges[b + 1],
            count: counts[b],
            mean_actual: sum_actual[b] / counts[b] as f64,
            mean_predicted: sum_pred[b] / counts[b] as f64,
        })
        .collect();

    Ok(LiftTable { bands })
}

// =============================================================================
// Tests
// =============================================================================
