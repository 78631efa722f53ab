//! Symbol search results (`SYMBOL_SEARCH`).

use serde::{Deserialize, Serialize};

use crate::decode::fields;

/// Matches returned by a keyword search, in the order Alpha Vantage ranked them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolMatches {
    #[serde(rename(deserialize = "bestMatches"))]
    pub matches: Vec<SymbolMatch>,
}

impl SymbolMatches {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymbolMatch> {
        self.matches.iter()
    }
}

impl IntoIterator for SymbolMatches {
    type Item = SymbolMatch;
    type IntoIter = std::vec::IntoIter<SymbolMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

/// A single search hit. Only `symbol` is guaranteed; the remaining fields are
/// left empty (or `0.0`) when the provider omits them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SymbolMatch {
    #[serde(rename(deserialize = "1. symbol"))]
    pub symbol: String,

    #[serde(rename(deserialize = "2. name"), default)]
    pub name: String,

    /// Security type, e.g. `Equity` or `ETF`.
    #[serde(rename(deserialize = "3. type"), default)]
    pub match_type: String,

    #[serde(rename(deserialize = "4. region"), default)]
    pub region: String,

    /// Local market open time, `HH:MM`.
    #[serde(rename(deserialize = "5. marketOpen"), default)]
    pub market_open: String,

    /// Local market close time, `HH:MM`.
    #[serde(rename(deserialize = "6. marketClose"), default)]
    pub market_close: String,

    #[serde(rename(deserialize = "7. timezone"), default)]
    pub timezone: String,

    #[serde(rename(deserialize = "8. currency"), default)]
    pub currency: String,

    /// Relevance between 0 and 1.
    #[serde(
        rename(deserialize = "9. matchScore"),
        default,
        deserialize_with = "fields::score"
    )]
    pub match_score: f64,
}
