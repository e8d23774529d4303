//! Canonical in-memory representation of a downloaded price history.
//!
//! [`BarSeries`] is what every [`DataProvider`](crate::providers::DataProvider)
//! returns and what every [`DataSink`](crate::io::sink::DataSink) consumes. It
//! lives for a single run: created by the fetch, read once by the export.

use chrono::{DateTime, Utc};

use crate::models::{exchange_time::ExchangeTimezone, request_params::HistoryRequest};

/// A single sampled period (OHLCV plus adjusted close).
///
/// Every value is optional because providers publish `null` for periods with
/// no trading activity or for a bar that is still forming.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Start of the sampled period (UTC).
    pub timestamp: DateTime<Utc>,

    /// Opening price.
    pub open: Option<f64>,

    /// Highest price during the period.
    pub high: Option<f64>,

    /// Lowest price during the period.
    pub low: Option<f64>,

    /// Closing price.
    pub close: Option<f64>,

    /// Close adjusted for splits and dividends. Not every interval carries it.
    pub adj_close: Option<f64>,

    /// Shares traded during the period.
    pub volume: Option<u64>,
}

/// The full history for one symbol, as returned by a single fetch.
///
/// Bars keep the provider's order, which is ascending by timestamp for every
/// provider we talk to. Nothing here re-sorts or deduplicates them.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// The symbol exactly as it was requested.
    pub symbol: String,
    /// The requested period.
    pub period: String,
    /// The requested interval.
    pub interval: String,
    /// The collection of bars.
    pub bars: Vec<Bar>,
    /// Zone of the listing exchange, used to render bar timestamps.
    pub timezone: ExchangeTimezone,
}

impl BarSeries {
    /// Header row used when the series is exported as a table.
    pub const COLUMNS: [&'static str; 7] =
        ["Date", "Open", "High", "Low", "Close", "Adj Close", "Volume"];

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Daily and coarser rows are labelled by trading day, not time of day.
    pub fn has_date_only_rows(&self) -> bool {
        matches!(
            self.interval.as_str(),
            "1d" | "5d" | "1wk" | "1mo" | "3mo"
        )
    }
}

impl From<&BarSeries> for HistoryRequest {
    fn from(series: &BarSeries) -> Self {
        HistoryRequest::new(&series.symbol, &series.period, &series.interval)
    }
}
