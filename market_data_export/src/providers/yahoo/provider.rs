use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use snafu::{OptionExt, ResultExt};
use tracing::{debug, info};
use url::Url;

use crate::{
    models::{
        bar::{Bar, BarSeries},
        exchange_time::ExchangeTimezone,
        request_params::HistoryRequest,
    },
    providers::{
        ApiSnafu, ClientBuildSnafu, DataProvider, InternalSnafu, InvalidUrlSnafu, ProviderError,
        ProviderInitError, ReqwestSnafu,
        yahoo::{
            config::YahooConfig,
            params::construct_params,
            response::{Chart, ChartResponse},
        },
    },
};

pub struct YahooProvider {
    client: Client,
    base_url: Url,
}

impl YahooProvider {
    /// Creates a provider pointed at the public Yahoo Finance endpoint.
    pub fn new() -> Result<Self, ProviderInitError> {
        Self::with_config(&YahooConfig::default())
    }

    pub fn with_config(config: &YahooConfig) -> Result<Self, ProviderInitError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            InvalidUrlSnafu {
                url: &config.base_url,
                message: e.to_string(),
            }
            .build()
        })?;
        if base_url.cannot_be_a_base() {
            return InvalidUrlSnafu {
                url: &config.base_url,
                message: "URL cannot carry a path",
            }
            .fail();
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self { client, base_url })
    }

    /// `{base_url}/v8/finance/chart/{symbol}` with the symbol percent-encoded
    /// as a single path segment.
    pub fn chart_url(&self, symbol: &str) -> Url {
        let mut url = self.base_url.clone();
        // `with_config` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v8", "finance", "chart", symbol]);
        }
        url
    }
}

#[async_trait]
impl DataProvider for YahooProvider {
    async fn fetch_bars(&self, request: &HistoryRequest) -> Result<BarSeries, ProviderError> {
        let url = self.chart_url(&request.symbol);
        debug!(%url, period = %request.period, interval = %request.interval, "Requesting chart");

        let response = self
            .client
            .get(url)
            .query(&construct_params(request))
            .send()
            .await
            .context(ReqwestSnafu)?;

        let status = response.status();
        let body = response.text().await.context(ReqwestSnafu)?;

        if !status.is_success() {
            // Yahoo wraps most failures (unknown symbol, bad range) in the
            // regular chart envelope; fall back to the raw body otherwise.
            let message = match serde_json::from_str::<ChartResponse>(&body) {
                Ok(ChartResponse {
                    chart: Chart {
                        error: Some(error), ..
                    },
                }) => format!("{}: {}", error.code, error.description),
                _ => format!("HTTP {status}: {body}"),
            };
            return ApiSnafu { message }.fail();
        }

        let chart = serde_json::from_str::<ChartResponse>(&body).map_err(|e| {
            InternalSnafu {
                message: format!("Failed to parse chart response: {e}"),
            }
            .build()
        })?;

        let series = parse_chart(chart, request)?;
        info!(
            symbol = %request.symbol,
            rows = series.len(),
            timezone = ?series.timezone,
            "Fetched price history"
        );

        Ok(series)
    }
}

/// Flattens Yahoo's column-oriented chart payload into rows.
///
/// A result without `timestamp` is Yahoo's way of saying the range is empty
/// and yields no bars. Indicator arrays shorter than `timestamp` leave the
/// missing cells as `None`. The exchange zone comes from `meta`.
pub fn parse_chart(
    response: ChartResponse,
    request: &HistoryRequest,
) -> Result<BarSeries, ProviderError> {
    if let Some(error) = response.chart.error {
        return ApiSnafu {
            message: format!("{}: {}", error.code, error.description),
        }
        .fail();
    }

    let result = response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .context(ApiSnafu {
            message: "No data returned",
        })?;

    let timezone = ExchangeTimezone::from_provider(
        result.meta.exchange_timezone_name.as_deref(),
        result.meta.gmtoffset,
    );
    let timestamps = result.timestamp.unwrap_or_default();
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let adj_close = result
        .indicators
        .adjclose
        .into_iter()
        .next()
        .unwrap_or_default()
        .adjclose;

    let bars = timestamps
        .into_iter()
        .enumerate()
        .map(|(i, ts)| {
            let timestamp = DateTime::from_timestamp(ts, 0).context(InternalSnafu {
                message: format!("Invalid timestamp {ts}"),
            })?;

            Ok(Bar {
                timestamp,
                open: value_at(&quote.open, i),
                high: value_at(&quote.high, i),
                low: value_at(&quote.low, i),
                close: value_at(&quote.close, i),
                adj_close: value_at(&adj_close, i),
                volume: value_at(&quote.volume, i),
            })
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;

    Ok(BarSeries {
        symbol: request.symbol.clone(),
        period: request.period.clone(),
        interval: request.interval.clone(),
        bars,
        timezone,
    })
}

fn value_at<T: Copy>(values: &[Option<T>], index: usize) -> Option<T> {
    values.get(index).copied().flatten()
}
