//! Result presenters for the one-shot CLI report.

use std::io::{self, Write};

use ctacc_core::ranking::{Ranking, Summary};

use crate::output::{render_json, render_quiet, render_report, DEFAULT_CHART_WIDTH};
use crate::ui::{print_error, Palette};

/// Trait for presenting a ranking to the user.
pub trait ResultPresenter: Send + Sync {
    /// Write the ranking and its summary to `out`.
    fn present(&self, ranking: &Ranking, summary: &Summary, out: &mut dyn Write) -> io::Result<()>;

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Human-readable text presenter.
pub struct CLIResultPresenter {
    palette: Palette,
    quiet: bool,
    chart_width: usize,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(palette: Palette, quiet: bool) -> Self {
        Self {
            palette,
            quiet,
            chart_width: DEFAULT_CHART_WIDTH,
        }
    }

    /// Override the bar chart width.
    #[must_use]
    pub fn with_chart_width(mut self, chart_width: usize) -> Self {
        self.chart_width = chart_width;
        self
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present(&self, ranking: &Ranking, summary: &Summary, out: &mut dyn Write) -> io::Result<()> {
        tracing::debug!(
            length = ranking.length(),
            quiet = self.quiet,
            color = self.palette.is_enabled(),
            "rendering text report"
        );
        if self.quiet {
            return write!(out, "{}", render_quiet(ranking));
        }
        write!(
            out,
            "{}",
            render_report(ranking, summary, self.chart_width, &self.palette)
        )
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

/// Machine-readable JSON presenter.
pub struct JsonPresenter {
    pretty: bool,
}

impl JsonPresenter {
    #[must_use]
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ResultPresenter for JsonPresenter {
    fn present(&self, ranking: &Ranking, summary: &Summary, out: &mut dyn Write) -> io::Result<()> {
        let json = render_json(ranking, summary, self.pretty).map_err(io::Error::other)?;
        writeln!(out, "{json}")
    }

    fn present_error(&self, error: &str) {
        let body = serde_json::json!({ "error": error });
        eprintln!("{body}");
    }
}
