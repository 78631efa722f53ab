//! Async client for the Alpha Vantage query API.

use std::sync::Arc;

use url::Url;

use crate::{
    config::ClientConfig,
    decode,
    endpoint::{
        Endpoint, QUERY_DATA_TYPE, QUERY_FUNCTION, QUERY_INTERVAL, QUERY_KEYWORDS, QUERY_MARKET,
        QUERY_OUTPUT_SIZE, QUERY_SYMBOL, VALUE_JSON,
    },
    errors::ConfigError,
    transport::{HttpTransport, ResponseBody, Transport},
    types::{
        DigitalCurrencySeriesValue, OutputSize, QuoteValue, SymbolMatches, TimeInterval,
        TimeSeries, TimeSeriesValue,
    },
    Error,
};

const FUNCTION_INTRADAY: &str = "TIME_SERIES_INTRADAY";
const FUNCTION_DIGITAL_CURRENCY: &str = "DIGITAL_CURRENCY_INTRADAY";
const FUNCTION_GLOBAL_QUOTE: &str = "GLOBAL_QUOTE";
const FUNCTION_SYMBOL_SEARCH: &str = "SYMBOL_SEARCH";

/// Client for Alpha Vantage stock, digital currency, quote and search data.
///
/// Each call performs exactly one round trip. The client only holds the API
/// key and a shared transport, so it is cheap to clone and safe to use from
/// many tasks at once. There is no retry: callers wanting a shorter deadline
/// wrap calls in their own timeout.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    api_key: String,
}

impl Client {
    /// Creates a client for the production Alpha Vantage host.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::from_config(&ClientConfig::new(api_key))
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Self::from_config(&ClientConfig::new(api_key).with_base_url(base_url))
    }

    /// Creates a client backed by [`HttpTransport`] from an explicit configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url).map_err(ConfigError::from)?;
        let transport = HttpTransport::with_base_url(base_url, config.timeout)?;
        Ok(Self::with_transport(&config.api_key, Arc::new(transport)))
    }

    /// Creates a client that sends every request through `transport`.
    pub fn with_transport(api_key: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            api_key: api_key.to_string(),
        }
    }

    /// Builds the endpoint for `params`, with this client's API key and the
    /// standard defaults.
    pub fn endpoint(&self, params: &[(&str, &str)]) -> Endpoint {
        Endpoint::build(&self.api_key, params.iter().copied())
    }

    async fn get<T>(
        &self,
        params: &[(&str, &str)],
        decode: fn(ResponseBody) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let endpoint = self.endpoint(params);
        let function = endpoint.function().unwrap_or_default().to_string();
        tracing::debug!(function = %function, "Requesting Alpha Vantage endpoint");

        let body = self.transport.request(&endpoint).await.map_err(|e| {
            tracing::error!("Request for {} failed: {}", function, e);
            Error::Transport(e)
        })?;

        // The body is moved into the decoder and dropped when it returns.
        decode(body).map_err(|e| {
            match &e {
                Error::Api(message) => {
                    tracing::warn!("Alpha Vantage returned a message for {}: {}", function, message)
                }
                Error::EmptyResult => tracing::warn!("No data rows in {} response", function),
                _ => tracing::error!("Failed to decode {} response: {}", function, e),
            }
            e
        })
    }

    /// Intraday time series for `symbol`, returned past to present as delivered.
    pub async fn stock_time_series_intraday(
        &self,
        interval: TimeInterval,
        symbol: &str,
    ) -> Result<Vec<TimeSeriesValue>, Error> {
        self.get(
            &[
                (QUERY_FUNCTION, FUNCTION_INTRADAY),
                (QUERY_INTERVAL, interval.as_str()),
                (QUERY_SYMBOL, symbol),
            ],
            decode::time_series,
        )
        .await
    }

    /// Daily, weekly or monthly time series for `symbol`.
    ///
    /// `output_size` of `None` requests [`OutputSize::Compact`].
    pub async fn stock_time_series(
        &self,
        series: TimeSeries,
        symbol: &str,
        output_size: Option<OutputSize>,
    ) -> Result<Vec<TimeSeriesValue>, Error> {
        self.get(
            &[
                (QUERY_FUNCTION, series.as_str()),
                (QUERY_SYMBOL, symbol),
                (QUERY_OUTPUT_SIZE, output_size.unwrap_or_default().as_str()),
            ],
            decode::time_series,
        )
        .await
    }

    /// Prices of the `digital` currency (e.g. `BTC`) quoted in the `physical`
    /// market currency (e.g. `CNY`) and in USD.
    pub async fn digital_currency(
        &self,
        digital: &str,
        physical: &str,
    ) -> Result<Vec<DigitalCurrencySeriesValue>, Error> {
        self.get(
            &[
                (QUERY_FUNCTION, FUNCTION_DIGITAL_CURRENCY),
                (QUERY_SYMBOL, digital),
                (QUERY_MARKET, physical),
            ],
            decode::digital_currency_series,
        )
        .await
    }

    /// Latest price and volume for `symbol`; a lightweight alternative to the
    /// time series calls.
    pub async fn stock_quote(&self, symbol: &str) -> Result<QuoteValue, Error> {
        self.get(
            &[
                (QUERY_FUNCTION, FUNCTION_GLOBAL_QUOTE),
                (QUERY_SYMBOL, symbol),
            ],
            decode::quote,
        )
        .await
    }

    /// Best-matching symbols for `keywords`. This endpoint is requested as JSON.
    pub async fn symbol_search(&self, keywords: &str) -> Result<SymbolMatches, Error> {
        self.get(
            &[
                (QUERY_FUNCTION, FUNCTION_SYMBOL_SEARCH),
                (QUERY_DATA_TYPE, VALUE_JSON),
                (QUERY_KEYWORDS, keywords),
            ],
            decode::symbol_search,
        )
        .await
    }
}
