//! Edge construction and band assignment for summary grouping.
//!
//! Two edge families cover the diagnostic charts: percentile edges (lift
//! bands over predictions) and equal-width edges (binning a high-cardinality
//! factor for the emblem summary). Non-finite values never receive a band.

/// Percentile edges over `values` for `n_bands` equal-population bands.
///
/// Returns up to `n_bands + 1` strictly increasing edges spanning the full
/// `[min, max]` range. Percentiles use linear interpolation between order
/// statistics. Repeated edges (heavily tied data) are collapsed, so fewer
/// bands than requested may come back; constant input yields a single pair
/// of equal edges.
///
/// Non-finite values are ignored. Returns an empty vector when no finite
/// values exist.
pub fn percentile_edges(values: &[f32], n_bands: usize) -> Vec<f64> {
    let mut sorted: Vec<f64> = values
        .iter()
        .filter(|v| v.is_finite())
        .map(|&v| v as f64)
        .collect();
    if sorted.is_empty() || n_bands == 0 {
        return Vec::new();
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("finite values are comparable"));

    let mut edges: Vec<f64> = Vec::with_capacity(n_bands + 1);
    for i in 0..=n_bands {
        let q = 100.0 * i as f64 / n_bands as f64;
        let edge = percentile_sorted(&sorted, q);
        // keep edges strictly increasing; ties collapse bands
        if edges.last().map_or(true, |&last| edge > last) {
            edges.push(edge);
        }
    }
    if edges.len() == 1 {
        // constant input: one zero-width band covering the single value
        edges.push(edges[0]);
    }
    edges
}

/// Equal-width edges spanning `[min, max]` of the finite values.
///
/// Returns `n_bins + 1` edges, or a single zero-width pair when all finite
/// values are equal. Returns an empty vector when no finite values exist.
pub fn equal_width_edges(values: &[f32], n_bins: usize) -> Vec<f64> {
    let finite = values.iter().filter(|v| v.is_finite());
    let (mut min, mut max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &v in finite {
        min = min.min(v as f64);
        max = max.max(v as f64);
    }
    if min > max || n_bins == 0 {
        return Vec::new();
    }
    if min == max {
        return vec![min, max];
    }
    let width = (max - min) / n_bins as f64;
    let mut edges: Vec<f64> = (0..n_bins).map(|i| min + width * i as f64).collect();
    // close the range exactly despite rounding
    edges.push(max);
    edges
}

/// Percentile of pre-sorted data with linear interpolation between order
/// statistics.
fn percentile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = q / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Band index of `value` among strictly increasing `edges`.
///
/// Band `i` spans `(edges[i], edges[i+1]]`, except band 0 which is closed on
/// the left so the minimum lands in a band. Returns `None` for values outside
/// the range, non-finite values, or fewer than two edges.
pub(crate) fn band_index(edges: &[f64], value: f64) -> Option<usize> {
    if !value.is_finite() || edges.len() < 2 {
        return None;
    }
    let last = edges.len() - 1;
    if value < edges[0] || value > edges[last] {
        return None;
    }
    if value <= edges[1] {
        return Some(0);
    }
    // first edge >= value; band k-1 spans (edges[k-1], edges[k]]
    let k = edges.partition_point(|&e| e < value);
    Some(k - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn percentile_edges_quartiles() {
        let values: Vec<f32> = (1..=100).map(|i| i as f32).collect();
        let edges = percentile_edges(&values, 4);
        assert_eq!(edges.len(), 5);
        assert_abs_diff_eq!(edges[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(edges[1], 25.75, epsilon = 1e-12);
        assert_abs_diff_eq!(edges[2], 50.5, epsilon = 1e-12);
        assert_abs_diff_eq!(edges[3], 75.25, epsilon = 1e-12);
        assert_abs_diff_eq!(edges[4], 100.0, epsilon = 1e-12);
    }

    #[test]
    fn percentile_edges_collapse_ties() {
        // 90% of the mass at one value: most quantile edges coincide
        let mut values = vec![1.0f32; 18];
        values.push(0.0);
        values.push(2.0);
        let edges = percentile_edges(&values, 10);
        assert!(edges.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*edges.first().unwrap(), 0.0);
        assert_eq!(*edges.last().unwrap(), 2.0);
    }

    #[test]
    fn percentile_edges_constant_input() {
        let edges = percentile_edges(&[3.0f32; 5], 4);
        assert_eq!(edges, vec![3.0, 3.0]);
    }

    #[test]
    fn percentile_edges_ignore_non_finite() {
        let edges = percentile_edges(&[f32::NAN, 1.0, 2.0, f32::INFINITY], 2);
        assert_eq!(edges, vec![1.0, 1.5, 2.0]);
    }

    #[test]
    fn equal_width_edges_basic() {
        let edges = equal_width_edges(&[0.0f32, 10.0], 5);
        assert_eq!(edges.len(), 6);
        assert_abs_diff_eq!(edges[1], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(edges[5], 10.0, epsilon = 1e-12);
    }

    #[test]
    fn equal_width_edges_degenerate() {
        assert_eq!(equal_width_edges(&[7.0f32, 7.0], 4), vec![7.0, 7.0]);
        assert!(equal_width_edges(&[], 4).is_empty());
    }

    #[test]
    fn band_index_boundaries() {
        let edges = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(band_index(&edges, 0.0), Some(0)); // min is included
        assert_eq!(band_index(&edges, 1.0), Some(0)); // right-closed
        assert_eq!(band_index(&edges, 1.5), Some(1));
        assert_eq!(band_index(&edges, 3.0), Some(2));
        assert_eq!(band_index(&edges, -0.1), None);
        assert_eq!(band_index(&edges, 3.1), None);
        assert_eq!(band_index(&edges, f64::NAN), None);
    }

    #[test]
    fn band_index_zero_width() {
        let edges = [3.0, 3.0];
        assert_eq!(band_index(&edges, 3.0), Some(0));
        assert_eq!(band_index(&edges, 2.9), None);
    }
}
