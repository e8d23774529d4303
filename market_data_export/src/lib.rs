#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod io;
pub mod models;
pub mod providers;

pub use errors::Error;
pub use export::{confirmation_message, export_history};
