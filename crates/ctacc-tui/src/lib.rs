//! # ctacc-tui
//!
//! Interactive accuracy dashboard using ratatui with Elm architecture.

pub mod chart;
pub mod details;
pub mod error;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod parameters;
pub mod styles;
pub mod table;

pub use error::TuiError;
pub use keymap::KeyAction;
pub use messages::TuiMessage;
pub use model::TuiApp;
pub use styles::ColorTheme;
