//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, the single seam between the
//! export pipeline and whatever vendor actually serves the price history.
//! [`yahoo::YahooProvider`] is the production implementation; tests swap in
//! their own.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn DataProvider`).
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use market_data_export::models::{
//!     bar::BarSeries, exchange_time::ExchangeTimezone, request_params::HistoryRequest,
//! };
//! use market_data_export::providers::{DataProvider, ProviderError};
//!
//! struct EmptyProvider;
//!
//! #[async_trait]
//! impl DataProvider for EmptyProvider {
//!     async fn fetch_bars(&self, request: &HistoryRequest) -> Result<BarSeries, ProviderError> {
//!         Ok(BarSeries {
//!             symbol: request.symbol.clone(),
//!             period: request.period.clone(),
//!             interval: request.interval.clone(),
//!             bars: vec![],
//!             timezone: ExchangeTimezone::default(),
//!         })
//!     }
//! }
//! ```

pub mod yahoo;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::{bar::BarSeries, request_params::HistoryRequest};

/// Trait for fetching a price history from a market data provider.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetches the history described by `request`.
    ///
    /// The request's symbol, period and interval are forwarded as-is. An empty
    /// [`BarSeries`] is a valid answer; failures reported by the provider are
    /// surfaced as [`ProviderError`] without being retried.
    async fn fetch_bars(&self, request: &HistoryRequest) -> Result<BarSeries, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The configured base URL can't be parsed or can't carry a path.
    #[snafu(display("Invalid provider base URL {url:?}: {message}"))]
    InvalidUrl {
        url: String,
        message: String,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider's API returned a specific error message (e.g., unknown symbol).
    #[snafu(display("API error: {message}"))]
    Api {
        message: String,
        backtrace: Backtrace,
    },

    /// An internal error occurred while processing data within the provider.
    #[snafu(display("Internal provider error: {message}"))]
    Internal {
        message: String,
        backtrace: Backtrace,
    },
}
