//! Time-stamped price records returned by the time series and digital currency endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::decode::fields;

/// One row of a stock time series.
///
/// Timestamps are naive; Alpha Vantage reports intraday times in US/Eastern and
/// daily rows as plain dates, which decode to midnight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesValue {
    #[serde(deserialize_with = "fields::timestamp")]
    pub timestamp: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Open/high/low/close prices in a single currency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Ohlc {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// One row of a digital currency series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DigitalCurrencySeriesValue {
    pub timestamp: NaiveDateTime,
    /// Prices in the requested physical market currency.
    pub market: Ohlc,
    /// Prices in USD.
    pub usd: Ohlc,
    pub volume: f64,
    /// Market capitalization in USD.
    pub market_cap: f64,
}
