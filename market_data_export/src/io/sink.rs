use std::path::PathBuf;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::bar::BarSeries;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SinkError {
    /// The workbook could not be assembled in memory.
    #[snafu(display("Failed to build workbook: {source}"))]
    Workbook {
        source: rust_xlsxwriter::XlsxError,
        backtrace: Backtrace,
    },

    /// An error occurred while converting the canonical `BarSeries` model into the destination format.
    #[snafu(display("Data conversion error: {message}"))]
    Conversion {
        message: String,
        backtrace: Backtrace,
    },

    /// The finished output could not be written to disk.
    #[snafu(display("Failed to write {}: {source}", path.display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

#[async_trait]
pub trait DataSink {
    /// The type of output returned after a successful write operation.
    ///
    /// A file sink returns the path it wrote; other sinks are free to
    /// return whatever identifies what they stored.
    type Output;

    /// Writes one `BarSeries` to the destination.
    async fn write(&self, data: &BarSeries) -> Result<Self::Output, SinkError>;
}
