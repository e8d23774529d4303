use serde::{Deserialize, Serialize};

/// Parameters for a single history download.
///
/// All three fields are free-form. They are handed to the provider exactly as
/// entered; no trimming, case folding or validation happens locally, so an
/// unsupported period or interval is reported by the provider itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRequest {
    /// Ticker of the instrument (e.g. `"AAPL"`).
    pub symbol: String,

    /// Total span of history to request (e.g. `"1y"`, `"5y"`, `"max"`).
    pub period: String,

    /// Sampling granularity of each row (e.g. `"1h"`, `"1d"`, `"1wk"`).
    pub interval: String,
}

impl HistoryRequest {
    pub fn new(
        symbol: impl Into<String>,
        period: impl Into<String>,
        interval: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            period: period.into(),
            interval: interval.into(),
        }
    }

    /// Name of the workbook this request is exported to:
    /// `{symbol}_{period}_{interval}.xlsx`.
    pub fn output_filename(&self) -> String {
        format!("{}_{}_{}.xlsx", self.symbol, self.period, self.interval)
    }
}
