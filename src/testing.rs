//! Shared helpers for tests.

/// Absolute tolerance for approximate score comparisons in tests.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Deterministic pseudo-random pairs for ranking tests: a target sequence and
/// a prediction that preserves its ordering through a strictly monotone
/// transform, so the pair scores a Gini of exactly 1.0.
///
/// The target itself is scrambled (not sorted) so tests exercise real
/// permutations rather than already-ordered input.
pub fn monotone_ranked_pairs(n: usize) -> (Vec<f32>, Vec<f32>) {
    // LCG keeps this dependency-free and reproducible
    let mut state = 0x2545_f491u64;
    let mut y_true = Vec::with_capacity(n);
    let mut y_pred = Vec::with_capacity(n);
    for _ in 0..n {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let t = ((state >> 33) % 10_000) as f32 / 100.0;
        y_true.push(t);
        y_pred.push(2.0 * t + 5.0);
    }
    (y_true, y_pred)
}
