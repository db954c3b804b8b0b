//! Error handling and exit codes.

use ctacc_core::constants::exit_codes;
use ctacc_core::AccuracyError;
use ctacc_tui::TuiError;

/// Handle an accuracy error and return the appropriate exit code.
pub fn handle_error(err: &AccuracyError) -> i32 {
    if err.is_config() {
        exit_codes::ERROR_CONFIG
    } else {
        exit_codes::ERROR_INVALID_INPUT
    }
}

/// Exit code for an application error, looking through TUI wrapping.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(accuracy) = err.downcast_ref::<AccuracyError>() {
        return handle_error(accuracy);
    }
    match err.downcast_ref::<TuiError>() {
        Some(TuiError::Accuracy(accuracy)) => handle_error(accuracy),
        _ => exit_codes::ERROR_GENERIC,
    }
}
