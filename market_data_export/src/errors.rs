use shared_utils::config::ConfigError;
use thiserror::Error;

use crate::{
    io::sink::SinkError,
    providers::{ProviderError, ProviderInitError},
};

/// The unified error type for the `market_data_export` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The provider failed to deliver the series (network, unknown symbol, bad payload).
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider could not be constructed from its configuration.
    #[error("Provider initialization error: {0}")]
    ProviderInit(#[from] ProviderInitError),

    /// The series could not be written out.
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),

    /// An error related to configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Interactive input ended before every value was supplied.
    #[error("Input error: {0}")]
    Input(String),

    /// A generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
