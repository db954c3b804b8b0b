//! # ctacc-cli
//!
//! Text and JSON reports, console styling, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CLIResultPresenter, JsonPresenter, ResultPresenter};
pub use ui::Palette;
