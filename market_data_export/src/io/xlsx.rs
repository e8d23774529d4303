//! Excel export of a [`BarSeries`].
//!
//! The layout mirrors a plain table dump: one worksheet, a header row taken
//! from [`BarSeries::COLUMNS`], then one row per bar in provider order. The
//! date column is the exchange's wall-clock time, shown as a bare date for
//! daily and coarser intervals. It is the only column with a number format.

use std::path::PathBuf;

use async_trait::async_trait;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use snafu::ResultExt;
use tracing::info;

use crate::{
    io::sink::{ConversionSnafu, DataSink, IoSnafu, SinkError, WorkbookSnafu},
    models::{
        bar::{Bar, BarSeries},
        request_params::HistoryRequest,
    },
};

pub const DATE_FORMAT: &str = "yyyy-mm-dd";
pub const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Writes each series to `{directory}/{symbol}_{period}_{interval}.xlsx`,
/// replacing any file already at that path.
#[derive(Clone, Debug)]
pub struct XlsxSink {
    directory: PathBuf,
}

impl XlsxSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Path the given series will be written to.
    pub fn output_path(&self, data: &BarSeries) -> PathBuf {
        self.directory
            .join(HistoryRequest::from(data).output_filename())
    }
}

#[async_trait]
impl DataSink for XlsxSink {
    type Output = PathBuf;

    async fn write(&self, data: &BarSeries) -> Result<PathBuf, SinkError> {
        let path = self.output_path(data);

        // Build everything in memory first so a conversion failure never
        // leaves a truncated file behind.
        let buffer = build_workbook(data)?;
        if !self.directory.as_os_str().is_empty() {
            tokio::fs::create_dir_all(&self.directory)
                .await
                .context(IoSnafu {
                    path: self.directory.clone(),
                })?;
        }
        tokio::fs::write(&path, buffer)
            .await
            .context(IoSnafu { path: path.clone() })?;

        info!(path = %path.display(), rows = data.len(), "Wrote workbook");
        Ok(path)
    }
}

/// Serializes the series into the bytes of an `.xlsx` file.
pub fn build_workbook(data: &BarSeries) -> Result<Vec<u8>, SinkError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let date_format = Format::new().set_num_format(if data.has_date_only_rows() {
        DATE_FORMAT
    } else {
        DATETIME_FORMAT
    });

    for (col, name) in BarSeries::COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *name)
            .context(WorkbookSnafu)?;
    }

    for (index, bar) in data.bars.iter().enumerate() {
        let row = u32::try_from(index + 1).map_err(|_| {
            ConversionSnafu {
                message: format!("Row {index} exceeds the worksheet row limit"),
            }
            .build()
        })?;
        write_bar(worksheet, row, bar, data, &date_format)?;
    }

    workbook.save_to_buffer().context(WorkbookSnafu)
}

fn write_bar(
    worksheet: &mut Worksheet,
    row: u32,
    bar: &Bar,
    data: &BarSeries,
    date_format: &Format,
) -> Result<(), SinkError> {
    let local = data.timezone.local_time(bar.timestamp);
    let written = if data.has_date_only_rows() {
        worksheet.write_datetime_with_format(row, 0, &local.date(), date_format)
    } else {
        worksheet.write_datetime_with_format(row, 0, &local, date_format)
    };
    written.context(WorkbookSnafu)?;

    let values = [
        bar.open,
        bar.high,
        bar.low,
        bar.close,
        bar.adj_close,
        // Excel cells are f64; volumes past 2^53 lose their low digits.
        bar.volume.map(|v| v as f64),
    ];
    for (offset, value) in values.into_iter().enumerate() {
        // Missing values stay as blank cells.
        if let Some(value) = value {
            worksheet
                .write_number(row, offset as u16 + 1, value)
                .context(WorkbookSnafu)?;
        }
    }

    Ok(())
}
