//! CLI library components for the dataset validator.

pub mod commands;
pub mod logging;
pub mod types;
