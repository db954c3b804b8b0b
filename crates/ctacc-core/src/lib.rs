//! # ctacc-core
//!
//! Core library for the CT scanner accuracy comparison.
//! Evaluates `±(a + L/b)` accuracy formulas over a validated scanner
//! catalog and ranks the results for a given part length.

pub mod calculator;
pub mod catalog;
pub mod constants;
pub mod range;
pub mod ranking;

// Re-exports
pub use calculator::{compute, AccuracyError, ScannerResult};
pub use catalog::{Catalog, Role, ScannerSpec};
pub use constants::{
    exit_codes, DEFAULT_LENGTH_MM, LENGTH_STEP_MM, MAX_LENGTH_MM, MIN_LENGTH_MM, PAGE_STEPS,
};
pub use range::LengthRange;
pub use ranking::{segment_widths, Emphasis, Ranking, Summary};

/// Rank the built-in catalog at a part length in millimeters.
///
/// This is a convenience function for simple use cases. Front-ends that
/// recompute often should build the `Catalog` once and call `Catalog::rank`.
///
/// # Example
/// ```
/// let ranking = ctacc_core::rank_builtin(100.0).unwrap();
/// assert_eq!(ranking.results()[0].spec.name, "Waygate");
/// assert_eq!(ranking.best_total(), 5.5);
/// ```
pub fn rank_builtin(length: f64) -> Result<Ranking, AccuracyError> {
    Catalog::builtin()?.rank(length)
}
