//! Application configuration from CLI flags and environment.

use clap::Parser;
use tracing::Level;

use ctacc_core::constants::DEFAULT_LENGTH_MM;

/// Compare CT scanner accuracy specs of the form ±(a + L/b) µm.
#[derive(Parser, Debug)]
#[command(name = "ctacc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Part length in mm. Clamped to 10-500 and snapped to steps of 10.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_LENGTH_MM,
        env = "CTACC_LENGTH",
        allow_negative_numbers = true
    )]
    pub length: f64,

    /// Launch the interactive dashboard.
    #[arg(long, conflicts_with_all = ["json", "quiet"])]
    pub tui: bool,

    /// Print the ranking as JSON.
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Quiet mode (one `name<TAB>total` line per scanner).
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Default log level; `RUST_LOG` still overrides it.
    #[must_use]
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}
