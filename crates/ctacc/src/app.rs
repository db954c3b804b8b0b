//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::Result;
use tracing::info;

use ctacc_cli::presenter::{CLIResultPresenter, JsonPresenter, ResultPresenter};
use ctacc_cli::ui::Palette;
use ctacc_core::catalog::Catalog;
use ctacc_core::range::LengthRange;
use ctacc_core::AccuracyError;
use ctacc_tui::TuiApp;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        ctacc_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    // The catalog is validated once; a broken catalog stops here
    let catalog = Catalog::builtin()?;
    let range = LengthRange::default();
    let length = resolve_length(&range, config.length)?;

    if config.tui {
        return run_tui(catalog, range, length);
    }

    run_cli(config, &catalog, length)
}

/// Bring a requested length onto the slider range, logging any adjustment.
#[allow(clippy::float_cmp)]
pub fn resolve_length(range: &LengthRange, requested: f64) -> Result<f64, AccuracyError> {
    let length = range.clamp(requested)?;
    if length != requested {
        info!(requested, length, "part length adjusted to slider range");
    }
    Ok(length)
}

/// Select the presenter for the configured output mode.
#[must_use]
pub fn presenter_for(config: &AppConfig) -> Box<dyn ResultPresenter> {
    if config.json {
        Box::new(JsonPresenter::new(true))
    } else {
        Box::new(CLIResultPresenter::new(
            Palette::from_env(config.no_color),
            config.quiet,
        ))
    }
}

/// Report a failed run on stderr, as JSON when `--json` is set.
pub fn report_error(config: &AppConfig, err: &anyhow::Error) {
    presenter_for(config).present_error(&format!("{err:#}"));
}

fn run_cli(config: &AppConfig, catalog: &Catalog, length: f64) -> Result<()> {
    let ranking = catalog.rank(length)?;
    let summary = ranking.summary()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    presenter_for(config).present(&ranking, &summary, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run_tui(catalog: Catalog, range: LengthRange, length: f64) -> Result<()> {
    let mut app = TuiApp::new(catalog, range, length)?;
    app.run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn resolve_length_in_range() {
        let range = LengthRange::default();
        assert!((resolve_length(&range, 120.0).unwrap() - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn resolve_length_clamps_and_snaps() {
        let range = LengthRange::default();
        assert!((resolve_length(&range, 1000.0).unwrap() - 500.0).abs() < f64::EPSILON);
        assert!((resolve_length(&range, 0.0).unwrap() - 10.0).abs() < f64::EPSILON);
        assert!((resolve_length(&range, 104.0).unwrap() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn resolve_length_rejects_invalid() {
        let range = LengthRange::default();
        assert!(matches!(
            resolve_length(&range, f64::NAN),
            Err(AccuracyError::InvalidInput(_))
        ));
        assert!(matches!(
            resolve_length(&range, -5.0),
            Err(AccuracyError::InvalidInput(_))
        ));
    }

    #[test]
    fn json_presenter_selected() {
        let config = AppConfig::try_parse_from(["ctacc", "--json"]).unwrap();
        let ranking = Catalog::builtin().unwrap().rank(100.0).unwrap();
        let summary = ranking.summary().unwrap();
        let mut buf = Vec::new();
        presenter_for(&config)
            .present(&ranking, &summary, &mut buf)
            .unwrap();
        assert!(String::from_utf8(buf).unwrap().trim_start().starts_with('{'));
    }

    #[test]
    fn quiet_presenter_selected() {
        let config = AppConfig::try_parse_from(["ctacc", "-q"]).unwrap();
        let ranking = Catalog::builtin().unwrap().rank(100.0).unwrap();
        let summary = ranking.summary().unwrap();
        let mut buf = Vec::new();
        presenter_for(&config)
            .present(&ranking, &summary, &mut buf)
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 4);
    }
}
