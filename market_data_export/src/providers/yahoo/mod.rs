//! Yahoo Finance chart API (v8).

pub mod config;
pub mod params;
pub mod provider;
pub mod response;

pub use config::YahooConfig;
pub use provider::YahooProvider;
