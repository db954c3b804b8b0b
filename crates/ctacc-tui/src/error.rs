//! TUI error type.

use std::io;

use ctacc_core::AccuracyError;

/// Errors raised while running the dashboard.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    /// Terminal setup, drawing or input failed.
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    /// The ranking could not be computed.
    #[error(transparent)]
    Accuracy(#[from] AccuracyError),
}
