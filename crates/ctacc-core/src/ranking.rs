//! Ranked results and the aggregates shown next to them.

use serde::Serialize;

use crate::calculator::{compute, AccuracyError, ScannerResult};
use crate::catalog::ScannerSpec;

/// How a ranked row should be emphasized by a front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// The reference scanner. Takes precedence over `Best`.
    Reference,
    /// The lowest total error.
    Best,
    /// Any other row.
    Normal,
}

/// Aggregate statistics over a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Part length in mm.
    pub part_length: f64,
    /// Lowest total error.
    pub best_total: f64,
    /// Total error of the reference scanner.
    pub reference_total: f64,
    /// `reference_total - best_total`, never negative.
    pub delta: f64,
    /// Highest total error, used to scale bars.
    pub max_total: f64,
}

impl Summary {
    /// Whether the reference scanner is level with the best at one decimal.
    #[must_use]
    pub fn reference_is_best(&self) -> bool {
        (self.delta * 10.0).round() == 0.0
    }
}

/// Results sorted ascending by total error, for one part length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    #[serde(rename = "part_length_mm")]
    length: f64,
    results: Vec<ScannerResult>,
}

impl Ranking {
    /// Wrap results already produced by `compute`. They are non-empty and sorted.
    pub(crate) fn new(length: f64, results: Vec<ScannerResult>) -> Self {
        Self { length, results }
    }

    /// Rank an unvalidated slice of entries.
    pub fn compute(catalog: &[ScannerSpec], length: f64) -> Result<Self, AccuracyError> {
        compute(catalog, length).map(|results| Self::new(length, results))
    }

    /// Part length in mm.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Results, best first.
    #[must_use]
    pub fn results(&self) -> &[ScannerResult] {
        &self.results
    }

    /// Lowest total error; the first ranked entry.
    #[must_use]
    pub fn best_total(&self) -> f64 {
        self.results[0].total_error
    }

    /// Highest total error.
    #[must_use]
    pub fn max_total(&self) -> f64 {
        self.results
            .iter()
            .map(|r| r.total_error)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Rank index of the reference scanner.
    #[must_use]
    pub fn reference_position(&self) -> Option<usize> {
        self.results.iter().position(ScannerResult::is_reference)
    }

    /// Total error of the reference scanner.
    pub fn reference_total(&self) -> Result<f64, AccuracyError> {
        self.reference_position()
            .map(|i| self.results[i].total_error)
            .ok_or(AccuracyError::MissingReference)
    }

    /// Reference total minus best total.
    pub fn delta(&self) -> Result<f64, AccuracyError> {
        Ok(self.reference_total()? - self.best_total())
    }

    /// All aggregates at once.
    pub fn summary(&self) -> Result<Summary, AccuracyError> {
        let reference_total = self.reference_total()?;
        let best_total = self.best_total();
        Ok(Summary {
            part_length: self.length,
            best_total,
            reference_total,
            delta: reference_total - best_total,
            max_total: self.max_total(),
        })
    }

    /// Emphasis for the row at rank `index`.
    #[must_use]
    pub fn emphasis(&self, index: usize) -> Emphasis {
        match self.results.get(index) {
            Some(r) if r.is_reference() => Emphasis::Reference,
            Some(_) if index == 0 => Emphasis::Best,
            _ => Emphasis::Normal,
        }
    }
}

/// Split `width` cells into the fixed and length-dependent segments of a bar.
///
/// Both segments are scaled against `max_total`; the longest bar fills
/// `width` exactly and no bar exceeds it.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn segment_widths(fixed: f64, length_dep: f64, max_total: f64, width: usize) -> (usize, usize) {
    if !max_total.is_finite() || max_total <= 0.0 || width == 0 {
        return (0, 0);
    }
    let scale = |value: f64| -> usize {
        let cells = (value.max(0.0) / max_total * width as f64).round();
        (cells as usize).min(width)
    };
    let fixed_cells = scale(fixed);
    let total_cells = scale(fixed + length_dep).max(fixed_cells);
    (fixed_cells, total_cells - fixed_cells)
}
