//! Accuracy calculator: part length to ranked error results.
//!
//! `compute` is a pure function. It evaluates `±(a + L/b)` for every
//! catalog entry and returns the results sorted ascending by total error,
//! keeping catalog order between equal totals.

use serde::Serialize;

use crate::catalog::ScannerSpec;

/// Error type for accuracy calculations and catalog validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccuracyError {
    /// The part length or a divisor cannot be evaluated.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No catalog entry is marked as the reference scanner.
    #[error("catalog has no reference scanner")]
    MissingReference,

    /// More than one catalog entry is marked as the reference scanner.
    #[error("catalog has {0} reference scanners, expected exactly one")]
    MultipleReferences(usize),

    /// A catalog coefficient is unusable.
    #[error("invalid coefficient for {name}: {detail}")]
    InvalidCoefficient { name: String, detail: String },

    /// The catalog has no entries.
    #[error("catalog is empty")]
    EmptyCatalog,
}

impl AccuracyError {
    /// Whether this error comes from the catalog rather than from user input.
    #[must_use]
    pub fn is_config(&self) -> bool {
        !matches!(self, Self::InvalidInput(_))
    }
}

/// A scanner evaluated at one part length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScannerResult {
    /// The catalog entry.
    #[serde(flatten)]
    pub spec: ScannerSpec,
    /// Fixed error term `a` in µm.
    pub fixed_error: f64,
    /// Length-dependent term `L / b` in µm.
    pub length_error: f64,
    /// `a + L / b` in µm.
    pub total_error: f64,
}

impl ScannerResult {
    /// Evaluate a single entry at `length`. The divisor must be non-zero.
    #[must_use]
    pub fn evaluate(spec: &ScannerSpec, length: f64) -> Self {
        let fixed_error = spec.a;
        let length_error = length / spec.b;
        Self {
            spec: spec.clone(),
            fixed_error,
            length_error,
            total_error: fixed_error + length_error,
        }
    }

    /// Whether this result belongs to the reference scanner.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.spec.is_reference()
    }
}

/// Evaluate every entry of `catalog` at part length `length` (mm).
///
/// Results are sorted ascending by total error; ties keep catalog order.
///
/// # Errors
///
/// `InvalidInput` if `length` is not finite or is negative, or if any
/// entry has a zero divisor. `EmptyCatalog` if `catalog` is empty.
pub fn compute(catalog: &[ScannerSpec], length: f64) -> Result<Vec<ScannerResult>, AccuracyError> {
    if !length.is_finite() || length < 0.0 {
        return Err(AccuracyError::InvalidInput(format!(
            "part length must be finite and non-negative, got {length}"
        )));
    }
    if catalog.is_empty() {
        return Err(AccuracyError::EmptyCatalog);
    }
    if let Some(spec) = catalog.iter().find(|s| s.b == 0.0) {
        return Err(AccuracyError::InvalidInput(format!(
            "{} has a zero length divisor",
            spec.name
        )));
    }

    let mut results: Vec<ScannerResult> = catalog
        .iter()
        .map(|spec| ScannerResult::evaluate(spec, length))
        .collect();
    // sort_by is stable
    results.sort_by(|x, y| x.total_error.total_cmp(&y.total_error));
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Role;

    fn scenario_catalog() -> Vec<ScannerSpec> {
        vec![
            ScannerSpec::new("Ref", "R", 7.0, 20.0, Role::Reference),
            ScannerSpec::new("Zeiss", "Z", 9.0, 50.0, Role::Competitor),
            ScannerSpec::new("Nikon", "N", 9.0, 50.0, Role::Competitor),
            ScannerSpec::new("Waygate", "W", 4.5, 100.0, Role::Competitor),
        ]
    }

    fn totals(results: &[ScannerResult]) -> Vec<f64> {
        results.iter().map(|r| r.total_error).collect()
    }

    #[test]
    fn sorted_totals_at_100mm() {
        let results = compute(&scenario_catalog(), 100.0).unwrap();
        assert_eq!(totals(&results), vec![5.5, 11.0, 11.0, 12.0]);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let results = compute(&scenario_catalog(), 100.0).unwrap();
        assert_eq!(results[1].spec.name, "Zeiss");
        assert_eq!(results[2].spec.name, "Nikon");
    }

    #[test]
    fn components_at_100mm() {
        let results = compute(&scenario_catalog(), 100.0).unwrap();
        let reference = results.iter().find(|r| r.is_reference()).unwrap();
        assert!((reference.fixed_error - 7.0).abs() < 1e-12);
        assert!((reference.length_error - 5.0).abs() < 1e-12);
        assert!((reference.total_error - 12.0).abs() < 1e-12);
    }

    #[test]
    fn zero_length_ranks_by_fixed_error() {
        let results = compute(&scenario_catalog(), 0.0).unwrap();
        for r in &results {
            assert_eq!(r.length_error, 0.0);
            assert_eq!(r.total_error, r.spec.a);
        }
        assert_eq!(totals(&results), vec![4.5, 7.0, 9.0, 9.0]);
    }

    #[test]
    fn upper_bound_is_linear() {
        let results = compute(&scenario_catalog(), 500.0).unwrap();
        assert_eq!(totals(&results), vec![9.5, 19.0, 19.0, 32.0]);
        assert_eq!(results[3].spec.name, "Ref");
    }

    #[test]
    fn rejects_non_finite_length() {
        for length in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = compute(&scenario_catalog(), length).unwrap_err();
            assert!(matches!(err, AccuracyError::InvalidInput(_)));
        }
    }

    #[test]
    fn rejects_negative_length() {
        let err = compute(&scenario_catalog(), -10.0).unwrap_err();
        assert!(matches!(err, AccuracyError::InvalidInput(_)));
    }

    #[test]
    fn rejects_zero_divisor() {
        let mut catalog = scenario_catalog();
        catalog[2].b = 0.0;
        let err = compute(&catalog, 100.0).unwrap_err();
        assert_eq!(
            err,
            AccuracyError::InvalidInput("Nikon has a zero length divisor".into())
        );
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(compute(&[], 100.0).unwrap_err(), AccuracyError::EmptyCatalog);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            AccuracyError::MissingReference.to_string(),
            "catalog has no reference scanner"
        );
        assert_eq!(
            AccuracyError::MultipleReferences(2).to_string(),
            "catalog has 2 reference scanners, expected exactly one"
        );
    }

    #[test]
    fn config_classification() {
        assert!(!AccuracyError::InvalidInput("x".into()).is_config());
        assert!(AccuracyError::MissingReference.is_config());
        assert!(AccuracyError::EmptyCatalog.is_config());
    }

    #[test]
    fn result_serializes_flat() {
        let result = ScannerResult::evaluate(&scenario_catalog()[0], 100.0);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["name"], "Ref");
        assert_eq!(value["role"], "reference");
        assert_eq!(value["total_error"], 12.0);
    }
}
