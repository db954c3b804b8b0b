//! Constants for the part-length control and process exit codes.

/// Smallest selectable part length in millimeters.
pub const MIN_LENGTH_MM: f64 = 10.0;

/// Largest selectable part length in millimeters.
pub const MAX_LENGTH_MM: f64 = 500.0;

/// Increment between selectable part lengths in millimeters.
pub const LENGTH_STEP_MM: f64 = 10.0;

/// Part length shown at startup.
pub const DEFAULT_LENGTH_MM: f64 = 100.0;

/// Number of steps moved by a page key in the TUI.
pub const PAGE_STEPS: u32 = 10;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, terminal setup).
    pub const ERROR_GENERIC: i32 = 1;
    /// The requested part length was rejected.
    pub const ERROR_INVALID_INPUT: i32 = 2;
    /// The scanner catalog failed validation.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_length_within_bounds() {
        assert!(DEFAULT_LENGTH_MM >= MIN_LENGTH_MM);
        assert!(DEFAULT_LENGTH_MM <= MAX_LENGTH_MM);
    }

    #[test]
    fn bounds_are_whole_steps() {
        let span = MAX_LENGTH_MM - MIN_LENGTH_MM;
        assert!((span / LENGTH_STEP_MM).fract().abs() < f64::EPSILON);
        assert!(((DEFAULT_LENGTH_MM - MIN_LENGTH_MM) / LENGTH_STEP_MM).fract().abs() < f64::EPSILON);
    }
}
