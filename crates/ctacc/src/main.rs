//! ctacc: CT scanner accuracy comparison.

use ctacc_core::constants::exit_codes;
use ctacc_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Logs go to stderr so they never mix with report or JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(config.log_level().into())
                .from_env_lossy(),
        )
        .init();

    let code = match app::run(&config) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => {
            app::report_error(&config, &err);
            errors::exit_code(&err)
        }
    };
    std::process::exit(code);
}
