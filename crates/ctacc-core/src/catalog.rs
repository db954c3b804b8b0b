//! Scanner catalog: the static accuracy specifications being compared.
//!
//! The catalog is validated once, when it is built. After that every
//! divisor is known to be positive and exactly one entry is the reference
//! scanner, so recomputations never re-check configuration.

use serde::Serialize;

use crate::calculator::{compute, AccuracyError};
use crate::ranking::Ranking;

/// Role of a scanner in the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The user's own scanner, highlighted against the others.
    Reference,
    /// Any other scanner.
    Competitor,
}

/// A catalog entry with an accuracy formula `±(a + L/b)` µm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScannerSpec {
    /// Manufacturer name.
    pub name: String,
    /// Model designation.
    pub model: String,
    /// Display form of the formula, e.g. `±(7 + L/20)`.
    pub formula: String,
    /// Fixed error term in µm.
    pub a: f64,
    /// Length divisor: millimeters of part length per µm of added error.
    pub b: f64,
    /// Whether this is the reference scanner.
    pub role: Role,
}

impl ScannerSpec {
    /// Create an entry, deriving the formula display string from `a` and `b`.
    #[must_use]
    pub fn new(name: impl Into<String>, model: impl Into<String>, a: f64, b: f64, role: Role) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            formula: format_formula(a, b),
            a,
            b,
            role,
        }
    }

    /// Whether this entry is the reference scanner.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.role == Role::Reference
    }
}

/// Format the `±(a + L/b)` display string using the shortest decimal forms.
#[must_use]
pub fn format_formula(a: f64, b: f64) -> String {
    format!("±({a} + L/{b})")
}

/// Validated, immutable scanner catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ScannerSpec>,
    reference_index: usize,
}

impl Catalog {
    /// Validate `entries` and build a catalog.
    ///
    /// Rejects an empty list, unusable coefficients, and any count of
    /// reference entries other than one.
    pub fn new(entries: Vec<ScannerSpec>) -> Result<Self, AccuracyError> {
        if entries.is_empty() {
            return Err(AccuracyError::EmptyCatalog);
        }

        for spec in &entries {
            validate_coefficients(spec)?;
        }

        let mut references = entries
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_reference())
            .map(|(i, _)| i);
        let reference_index = references.next().ok_or(AccuracyError::MissingReference)?;
        let extra = references.count();
        if extra > 0 {
            return Err(AccuracyError::MultipleReferences(extra + 1));
        }

        let catalog = Self {
            entries,
            reference_index,
        };
        tracing::debug!(
            scanners = catalog.len(),
            reference = %catalog.reference().name,
            "scanner catalog validated"
        );
        Ok(catalog)
    }

    /// The built-in catalog of published specifications.
    pub fn builtin() -> Result<Self, AccuracyError> {
        Self::new(vec![
            ScannerSpec::new("Lumafield", "Neptune", 7.0, 20.0, Role::Reference),
            ScannerSpec::new("Zeiss", "METROTOM 1", 9.0, 50.0, Role::Competitor),
            ScannerSpec::new("Nikon", "MCT225", 9.0, 50.0, Role::Competitor),
            ScannerSpec::new("Waygate", "v|tome|x M", 4.5, 100.0, Role::Competitor),
        ])
    }

    /// Entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[ScannerSpec] {
        &self.entries
    }

    /// Number of scanners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a validated catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The reference entry.
    #[must_use]
    pub fn reference(&self) -> &ScannerSpec {
        &self.entries[self.reference_index]
    }

    /// Compute the ranking for a part length in millimeters.
    pub fn rank(&self, length: f64) -> Result<Ranking, AccuracyError> {
        let results = compute(&self.entries, length)?;
        Ok(Ranking::new(length, results))
    }
}

fn validate_coefficients(spec: &ScannerSpec) -> Result<(), AccuracyError> {
    let invalid = |detail: String| AccuracyError::InvalidCoefficient {
        name: spec.name.clone(),
        detail,
    };

    if !spec.a.is_finite() || spec.a < 0.0 {
        return Err(invalid(format!("fixed error a = {} must be finite and >= 0", spec.a)));
    }
    if !spec.b.is_finite() || spec.b <= 0.0 {
        return Err(invalid(format!("divisor b = {} must be finite and > 0", spec.b)));
    }
    Ok(())
}
