//! Emblem summary: actual vs. predicted means per factor level.
//!
//! The classic "emblem" diagnostic overlays mean actual and mean predicted
//! values on top of exposure counts, one group per level of a rating factor.
//! A well-calibrated model tracks the actual line across all levels.

use serde::Serialize;

use super::binning::{band_index, equal_width_edges};
use super::SummaryError;

/// Factors with more distinct values than this are binned into
/// [`MAX_DISTINCT_LEVELS`] equal-width intervals before grouping.
pub const MAX_DISTINCT_LEVELS: usize = 20;

/// One factor level (or interval) with its aggregated statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmblemGroup {
    /// Display label: the level value, or `"(lo, hi]"` for binned intervals.
    pub label: String,
    /// Number of samples in the group.
    pub count: usize,
    /// Mean of `y_true` over the group.
    pub mean_actual: f64,
    /// Mean of `y_pred` over the group.
    pub mean_predicted: f64,
}

/// Actual vs. predicted means grouped by the levels of one factor.
///
/// Groups are ordered by ascending level value. Samples with a non-finite
/// factor value belong to no group. Empty intervals are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmblemSummary {
    /// Name of the grouping factor (chart title).
    pub factor: String,
    /// Per-level statistics, ascending by level.
    pub groups: Vec<EmblemGroup>,
}

impl EmblemSummary {
    /// Total number of samples across all groups.
    pub fn n_samples(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }

    /// Largest group count (bar-axis ceiling when plotting).
    pub fn max_count(&self) -> usize {
        self.groups.iter().map(|g| g.count).max().unwrap_or(0)
    }
}

/// Group `y_true` and `y_pred` by the levels of `factor`.
///
/// Factors with at most [`MAX_DISTINCT_LEVELS`] distinct finite values are
/// grouped by exact value; wider factors are first binned into
/// [`MAX_DISTINCT_LEVELS`] equal-width intervals.
///
/// # Errors
///
/// - [`SummaryError::LengthMismatch`] when the three inputs differ in length
/// - [`SummaryError::Empty`] when no sample has a finite factor value
pub fn emblem_summary(
    factor_name: &str,
    factor: &[f32],
    y_true: &[f32],
    y_pred: &[f32],
) -> Result<EmblemSummary, SummaryError> {
    check_len(factor.len(), y_true.len())?;
    check_len(factor.len(), y_pred.len())?;

    // (factor, actual, predicted) rows with a usable key, ascending by key
    let mut rows: Vec<(f64, f64, f64)> = factor
        .iter()
        .zip(y_true.iter())
        .zip(y_pred.iter())
        .filter(|((f, _), _)| f.is_finite())
        .map(|((&f, &t), &p)| (f as f64, t as f64, p as f64))
        .collect();
    if rows.is_empty() {
        return Err(SummaryError::Empty);
    }
    rows.sort_by(|a, b| a.0.partial_cmp(&b.0).expect("keys are finite"));

    let n_distinct = count_distinct_sorted(&rows);
    let groups = if n_distinct <= MAX_DISTINCT_LEVELS {
        group_by_level(&rows)
    } else {
        group_by_interval(&rows, factor)
    };

    Ok(EmblemSummary {
        factor: factor_name.to_string(),
        groups,
    })
}

fn check_len(left: usize, right: usize) -> Result<(), SummaryError> {
    if left != right {
        return Err(SummaryError::LengthMismatch { left, right });
    }
    Ok(())
}

fn count_distinct_sorted(rows: &[(f64, f64, f64)]) -> usize {
    1 + rows.windows(2).filter(|w| w[0].0 != w[1].0).count()
}

/// Run-length grouping of rows pre-sorted by factor value.
fn group_by_level(rows: &[(f64, f64, f64)]) -> Vec<EmblemGroup> {
    let mut groups = Vec::new();
    let mut start = 0;
    while start < rows.len() {
        let level = rows[start].0;
        let mut end = start + 1;
        while end < rows.len() && rows[end].0 == level {
            end += 1;
        }
        groups.push(aggregate(format_level(level), &rows[start..end]));
        start = end;
    }
    groups
}

/// Interval grouping for high-cardinality factors.
fn group_by_interval(rows: &[(f64, f64, f64)], factor: &[f32]) -> Vec<EmblemGroup> {
    let edges = equal_width_edges(factor, MAX_DISTINCT_LEVELS);
    let n_bands = edges.len().saturating_sub(1).max(1);

    let mut counts = vec![0usize; n_bands];
    let mut sum_actual = vec![0.0f64; n_bands];
    let mut sum_pred = vec![0.0f64; n_bands];
    for &(key, actual, pred) in rows {
        if let Some(band) = band_index(&edges, key) {
            counts[band] += 1;
            sum_actual[band] += actual;
            sum_pred[band] += pred;
        }
    }

    (0..n_bands)
        .filter(|&b| counts[b] > 0)
        .map(|b| EmblemGroup {
            label: format_interval(edges[b], edges[b + 1]),
            count: counts[b],
            mean_actual: sum_actual[b] / counts[b] as f64,
            mean_predicted: sum_pred[b] / counts[b] as f64,
        })
        .collect()
}

fn aggregate(label: String, rows: &[(f64, f64, f64)]) -> EmblemGroup {
    let count = rows.len();
    let sum_actual: f64 = rows.iter().map(|r| r.1).sum();
    let sum_pred: f64 = rows.iter().map(|r| r.2).sum();
    EmblemGroup {
        label,
        count,
        mean_actual: sum_actual / count as f64,
        mean_predicted: sum_pred / count as f64,
    }
}

fn format_level(level: f64) -> String {
    format!("{level}")
}

fn format_interval(lo: f64, hi: f64) -> String {
    format!("({lo:.3}, {hi:.3}]")
}

// =============================================================================
// Tests
// =============================================================================
