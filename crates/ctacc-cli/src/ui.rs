//! Console styling for the text report.

use console::style;

use ctacc_core::ranking::Emphasis;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// Applies the report's color scheme, or nothing when color is off.
///
/// Reference scanner in blue, best scanner in green, the `YOU` tag in
/// magenta, a non-zero delta in yellow.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Color unless `NO_COLOR` is set or `no_color` is requested.
    #[must_use]
    pub fn from_env(no_color: bool) -> Self {
        Self::new(!no_color && !is_color_disabled())
    }

    /// A palette that never styles; used for plain-text rendering and tests.
    #[must_use]
    pub fn plain() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Section heading.
    #[must_use]
    pub fn heading(&self, text: &str) -> String {
        if self.enabled {
            style(text).bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    /// Labels, column headers, secondary values.
    #[must_use]
    pub fn muted(&self, text: &str) -> String {
        if self.enabled {
            style(text).dim().to_string()
        } else {
            text.to_string()
        }
    }

    /// Text for a ranked row.
    #[must_use]
    pub fn emphasis(&self, text: &str, emphasis: Emphasis) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match emphasis {
            Emphasis::Reference => style(text).blue().bold().to_string(),
            Emphasis::Best => style(text).green().to_string(),
            Emphasis::Normal => text.to_string(),
        }
    }

    /// The lighter length-dependent bar segment.
    #[must_use]
    pub fn secondary(&self, text: &str, emphasis: Emphasis) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match emphasis {
            Emphasis::Reference => style(text).blue().dim().to_string(),
            Emphasis::Best => style(text).green().dim().to_string(),
            Emphasis::Normal => style(text).dim().to_string(),
        }
    }

    /// The tag marking the user's own scanner.
    #[must_use]
    pub fn tag(&self, text: &str) -> String {
        if self.enabled {
            style(text).magenta().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Delta value: green when level with the best, yellow otherwise.
    #[must_use]
    pub fn delta(&self, text: &str, level: bool) -> String {
        match (self.enabled, level) {
            (false, _) => text.to_string(),
            (true, true) => style(text).green().to_string(),
            (true, false) => style(text).yellow().to_string(),
        }
    }
}
