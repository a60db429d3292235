//! CLI components for the bikeshare explorer.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod pipeline;
pub mod prompt;
pub mod summary;
pub mod types;
