use std::path::PathBuf;

use clap::Parser;

/// Download the price history of one symbol into an `.xlsx` workbook.
///
/// Any of SYMBOL, PERIOD and INTERVAL left off the command line is asked for
/// interactively.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Ticker symbol (e.g. AAPL)
    pub symbol: Option<String>,

    /// Span of history: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max
    pub period: Option<String>,

    /// Row granularity: 1m, 2m, 5m, 15m, 30m, 60m, 90m, 1h, 1d, 5d, 1wk, 1mo, 3mo
    pub interval: Option<String>,

    /// Path to the config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory to write the workbook into, overrides the config file
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}
