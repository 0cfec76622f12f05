//! Chart summaries for model diagnostics.
//!
//! Each summary is the data half of a diagnostic chart: the binning,
//! grouping, and aggregation that a plot displays. Summaries are plain
//! serializable structs, so they can be rendered by the optional `plot`
//! module (feature = "plots"), exported as JSON, or fed to any other
//! charting stack.
//!
//! # Available Summaries
//!
//! - [`EmblemSummary`]: actual vs. predicted means per factor level
//! - [`LiftTable`]: actual vs. predicted means per prediction percentile band
//! - [`FactorImportance`]: sorted factor-importance ranking

mod binning;
mod emblem;
mod importance;
mod lift;

pub use binning::{equal_width_edges, percentile_edges};
pub use emblem::{emblem_summary, EmblemGroup, EmblemSummary, MAX_DISTINCT_LEVELS};
pub use importance::FactorImportance;
pub use lift::{lift_table, LiftBand, LiftTable, DEFAULT_BANDS};

// =============================================================================
// Errors
// =============================================================================

/// Input validation errors for summary construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummaryError {
    /// All per-sample inputs must be index-aligned, so equal length.
    #[error("inputs must have the same length, got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Summaries require at least one sample with a finite key value.
    #[error("at least one sample with a finite value is required")]
    Empty,

    /// Band counts start at one.
    #[error("n_bands must be >= 1, got 0")]
    ZeroBands,
}
