//! The fetch-then-write pipeline behind the binary.

use std::path::Path;

use tracing::warn;

use crate::{
    errors::Error,
    io::sink::DataSink,
    models::request_params::HistoryRequest,
    providers::DataProvider,
};

/// Fetches the history for `request` and hands it to `sink`.
///
/// The fetch runs first and its failure is returned untouched, so nothing is
/// written when the provider errors. An empty series is still written.
pub async fn export_history<S>(
    provider: &dyn DataProvider,
    sink: &S,
    request: &HistoryRequest,
) -> Result<S::Output, Error>
where
    S: DataSink + Sync,
{
    let series = provider.fetch_bars(request).await?;
    if series.is_empty() {
        warn!(symbol = %request.symbol, "Provider returned no rows, exporting header only");
    }

    Ok(sink.write(&series).await?)
}

/// The line printed once the workbook is on disk.
pub fn confirmation_message(symbol: &str, path: &Path) -> String {
    format!("Data for {symbol} saved to {}", path.display())
}
