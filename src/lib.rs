#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

uniffi::setup_scaffolding!();

pub mod commands;
pub mod editor;
pub mod error;
pub mod launcher;
pub mod models;
pub mod placement;
pub mod plugin;
pub mod prompt;
pub mod settings;
pub mod store;
pub mod templates;
pub mod workflow;

// Re-export common error types for convenience
pub use error::{
    InsertError, InsertResult, LaunchError, LaunchResult, QuickInsertError, QuickInsertResult,
};
