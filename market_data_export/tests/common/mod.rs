#![allow(dead_code)]

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use market_data_export::models::{
    bar::{Bar, BarSeries},
    exchange_time::ExchangeTimezone,
};

/// One ASX session. 1704150000 is 2024-01-01T23:00:00Z, which is already
/// the morning of 2024-01-02 in Sydney.
pub const BHP_CHART: &str = r#"{
  "chart": {
    "result": [{
      "meta": {"currency": "AUD", "symbol": "BHP.AX", "gmtoffset": 39600, "exchangeTimezoneName": "Australia/Sydney"},
      "timestamp": [1704150000],
      "indicators": {
        "quote": [{"open": [45.1], "high": [45.6], "low": [44.9], "close": [45.3], "volume": [6100000]}],
        "adjclose": [{"adjclose": [43.8]}]
      }
    }],
    "error": null
  }
}"#;

/// Two trading days of AAPL as Yahoo's chart endpoint returns them.
pub const AAPL_CHART: &str = r#"{
  "chart": {
    "result": [{
      "meta": {
        "currency": "USD", "symbol": "AAPL", "dataGranularity": "1d", "range": "1y",
        "gmtoffset": -18000, "exchangeTimezoneName": "America/New_York"
      },
      "timestamp": [1704205800, 1704292200],
      "indicators": {
        "quote": [{
          "open": [187.15, 184.22],
          "high": [188.44, 185.88],
          "low": [183.89, 183.43],
          "close": [185.64, 184.25],
          "volume": [82488700, 58414500]
        }],
        "adjclose": [{"adjclose": [184.53, 183.15]}]
      }
    }],
    "error": null
  }
}"#;

pub const NOT_FOUND_CHART: &str = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;

pub fn aapl_bars() -> Vec<Bar> {
    vec![
        Bar {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 14, 30, 0).unwrap(),
            open: Some(187.15),
            high: Some(188.44),
            low: Some(183.89),
            close: Some(185.64),
            adj_close: Some(184.53),
            volume: Some(82488700),
        },
        Bar {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 3, 14, 30, 0).unwrap(),
            open: Some(184.22),
            high: Some(185.88),
            low: Some(183.43),
            close: Some(184.25),
            adj_close: Some(183.15),
            volume: Some(58414500),
        },
    ]
}

pub fn series(symbol: &str, period: &str, interval: &str, bars: Vec<Bar>) -> BarSeries {
    BarSeries {
        symbol: symbol.to_string(),
        period: period.to_string(),
        interval: interval.to_string(),
        bars,
        timezone: ExchangeTimezone::default(),
    }
}

/// Trading dates of [`aapl_bars`] as daily rows show them.
pub fn aapl_dates() -> Vec<NaiveDateTime> {
    [2, 3]
        .into_iter()
        .map(|day| {
            NaiveDate::from_ymd_opt(2024, 1, day)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .unwrap()
        })
        .collect()
}

/// Reads every row of the first worksheet.
pub fn read_sheet(path: &Path) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("workbook should open");
    let names = workbook.sheet_names();
    assert_eq!(names, vec!["Sheet1".to_string()], "expected a single sheet");

    let range = workbook
        .worksheet_range(&names[0])
        .expect("sheet should be readable");
    range.rows().map(|row| row.to_vec()).collect()
}

pub fn header_row() -> Vec<Data> {
    BarSeries::COLUMNS
        .iter()
        .map(|name| Data::String(name.to_string()))
        .collect()
}

/// Asserts that a data row holds `date` followed by exactly the values of `bar`.
pub fn assert_row_matches(row: &[Data], date: NaiveDateTime, bar: &Bar) {
    use calamine::DataType;

    let written = row[0].as_datetime().expect("first column should be a date");
    let drift = (written - date).num_milliseconds().abs();
    assert!(drift < 1000, "date {written} does not match {date}");

    let expected = [
        bar.open,
        bar.high,
        bar.low,
        bar.close,
        bar.adj_close,
        bar.volume.map(|v| v as f64),
    ];
    for (offset, value) in expected.into_iter().enumerate() {
        let cell = &row[offset + 1];
        match value {
            Some(value) => assert_eq!(cell, &Data::Float(value), "column {}", offset + 1),
            None => assert_eq!(cell, &Data::Empty, "column {}", offset + 1),
        }
    }
}
