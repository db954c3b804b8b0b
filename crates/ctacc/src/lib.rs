//! ctacc library: application logic for the CT accuracy comparison.

pub mod app;
pub mod config;
pub mod errors;
