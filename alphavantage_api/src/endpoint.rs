//! Query endpoint construction.
//!
//! Every Alpha Vantage product is served from the single `/query` path and
//! selected with the `function` parameter.

use std::collections::BTreeMap;
use std::fmt;

use url::{form_urlencoded, Url};

use crate::types::OutputSize;

pub(crate) const PATH_QUERY: &str = "query";

pub(crate) const QUERY_API_KEY: &str = "apikey";
pub(crate) const QUERY_DATA_TYPE: &str = "datatype";
pub(crate) const QUERY_OUTPUT_SIZE: &str = "outputsize";
pub(crate) const QUERY_FUNCTION: &str = "function";
pub(crate) const QUERY_SYMBOL: &str = "symbol";
pub(crate) const QUERY_MARKET: &str = "market";
pub(crate) const QUERY_INTERVAL: &str = "interval";
pub(crate) const QUERY_KEYWORDS: &str = "keywords";

pub(crate) const VALUE_CSV: &str = "csv";
pub(crate) const VALUE_JSON: &str = "json";

/// A request path plus its query parameters.
///
/// Parameters are kept sorted by name so the encoded query string is the same
/// for the same inputs.
#[derive(Clone, PartialEq, Eq)]
pub struct Endpoint {
    params: BTreeMap<String, String>,
}

impl Endpoint {
    /// Builds an endpoint carrying the API key, `datatype=csv` and
    /// `outputsize=compact`, then applies `params` on top. A caller-supplied
    /// key replaces the default of the same name.
    pub fn build<I, K, V>(api_key: &str, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut all = BTreeMap::new();
        all.insert(QUERY_API_KEY.to_string(), api_key.to_string());
        all.insert(QUERY_DATA_TYPE.to_string(), VALUE_CSV.to_string());
        all.insert(
            QUERY_OUTPUT_SIZE.to_string(),
            OutputSize::Compact.as_str().to_string(),
        );
        for (key, value) in params {
            all.insert(key.into(), value.into());
        }
        Self { params: all }
    }

    pub fn path(&self) -> &str {
        PATH_QUERY
    }

    /// Returns the value of a query parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// The `function` marker naming the requested product.
    pub fn function(&self) -> Option<&str> {
        self.get(QUERY_FUNCTION)
    }

    /// Encodes the parameters as `application/x-www-form-urlencoded`, sorted by name.
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }

    /// Appends the endpoint path and query to `base`, keeping any path prefix
    /// `base` already has.
    pub fn add_to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        let path = format!("{}/{}", base.path().trim_end_matches('/'), self.path());
        url.set_path(&path);
        url.set_query(Some(&self.query_string()));
        url
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted: BTreeMap<&str, &str> = self
            .params
            .iter()
            .map(|(k, v)| {
                if k == QUERY_API_KEY {
                    (k.as_str(), "***")
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect();
        f.debug_struct("Endpoint")
            .field("path", &PATH_QUERY)
            .field("params", &redacted)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_always_present() {
        let endpoint = Endpoint::build("demo", Vec::<(String, String)>::new());
        assert_eq!(endpoint.get(QUERY_API_KEY), Some("demo"));
        assert_eq!(endpoint.get(QUERY_DATA_TYPE), Some("csv"));
        assert_eq!(endpoint.get(QUERY_OUTPUT_SIZE), Some("compact"));
        assert_eq!(endpoint.path(), "query");
        assert_eq!(endpoint.function(), None);
    }

    #[test]
    fn caller_params_override_defaults() {
        let endpoint = Endpoint::build(
            "demo",
            [
                (QUERY_DATA_TYPE, VALUE_JSON),
                (QUERY_OUTPUT_SIZE, "full"),
                (QUERY_API_KEY, "other"),
                (QUERY_SYMBOL, "IBM"),
            ],
        );
        assert_eq!(endpoint.get(QUERY_DATA_TYPE), Some("json"));
        assert_eq!(endpoint.get(QUERY_OUTPUT_SIZE), Some("full"));
        assert_eq!(endpoint.get(QUERY_API_KEY), Some("other"));
        assert_eq!(endpoint.get(QUERY_SYMBOL), Some("IBM"));
        assert_eq!(endpoint.params().len(), 4);
    }

    #[test]
    fn query_string_is_sorted_and_encoded() {
        let endpoint = Endpoint::build(
            "demo",
            [
                (QUERY_FUNCTION, "SYMBOL_SEARCH"),
                (QUERY_KEYWORDS, "tesco plc&co"),
            ],
        );
        insta::assert_snapshot!(
            endpoint.query_string(),
            @"apikey=demo&datatype=csv&function=SYMBOL_SEARCH&keywords=tesco+plc%26co&outputsize=compact"
        );
    }

    #[test]
    fn building_twice_is_identical() {
        let params = [
            (QUERY_SYMBOL, "IBM"),
            (QUERY_FUNCTION, "TIME_SERIES_INTRADAY"),
            (QUERY_INTERVAL, "5min"),
        ];
        let a = Endpoint::build("demo", params);
        let b = Endpoint::build("demo", params.iter().rev().copied());
        assert_eq!(a, b);
        assert_eq!(a.query_string(), b.query_string());
    }

    #[test]
    fn add_to_url_keeps_base_path() {
        let endpoint = Endpoint::build("demo", [(QUERY_SYMBOL, "IBM")]);

        let url = endpoint.add_to_url(&Url::parse("https://www.alphavantage.co").unwrap());
        insta::assert_snapshot!(
            url.to_string(),
            @"https://www.alphavantage.co/query?apikey=demo&datatype=csv&outputsize=compact&symbol=IBM"
        );

        let url = endpoint.add_to_url(&Url::parse("http://localhost:8080/av/").unwrap());
        assert_eq!(url.path(), "/av/query");
    }

    #[test]
    fn debug_redacts_api_key() {
        let endpoint = Endpoint::build("secret-key", [(QUERY_SYMBOL, "IBM")]);
        let debug = format!("{:?}", endpoint);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("IBM"));
    }
}
