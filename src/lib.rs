//! modeldiag: model-diagnostic metrics and chart summaries.
//!
//! Helpers for inspecting already-fitted models. Nothing here trains a model
//! or loads data; every entry point takes true targets and predicted values
//! that the caller computed elsewhere.
//!
//! # Key Types
//!
//! - [`NormalizedGini`] / [`normalized_gini`] - Ranking-quality score
//! - [`EmblemSummary`] - Actual vs. predicted per factor level
//! - [`LiftTable`] - Actual vs. predicted across prediction percentile bands
//! - [`FactorImportance`] - Sorted factor-importance ranking
//!
//! # Rendering
//!
//! The `plots` cargo feature enables the `plot` module, which renders the
//! summary types to PNG via `plotters`. The summaries themselves are plain
//! data and serialize with serde, so charts can also be drawn elsewhere.

// Re-export approx traits for users who want to compare scores
pub use approx;

pub mod diagnostics;
pub mod metrics;
#[cfg(feature = "plots")]
pub mod plot;
pub mod testing;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Scoring
pub use metrics::{normalized_gini, MetricsError, NormalizedGini, RankingMetric};

// Chart summaries
pub use diagnostics::{
    emblem_summary, lift_table, EmblemGroup, EmblemSummary, FactorImportance, LiftBand,
    LiftTable, SummaryError,
};
