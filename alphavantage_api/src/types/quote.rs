use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decode::fields;

/// Latest price and volume for a single security (`GLOBAL_QUOTE`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteValue {
    pub symbol: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub price: f64,
    pub volume: u64,
    #[serde(rename = "latestDay")]
    pub latest_trading_day: NaiveDate,
    pub previous_close: f64,
    pub change: f64,
    /// Percentage change, `"-1.2345%"` decodes to `-1.2345`.
    #[serde(deserialize_with = "fields::percent")]
    pub change_percent: f64,
}
