//! Client for the Alpha Vantage market data API: stock time series, digital
//! currency series, latest quotes and symbol search.
//!
//! Requests go through a [`Transport`]; the default [`HttpTransport`] uses
//! `reqwest`. Tabular (CSV) and JSON bodies are decoded into the records in
//! [`types`].

mod client;
mod config;
pub mod decode;
mod endpoint;
mod errors;
mod transport;
pub mod types;
pub use self::client::Client;
pub use self::config::{ClientConfig, ENV_API_KEY, ENV_BASE_URL};
pub use self::endpoint::Endpoint;
pub use self::errors::{ConfigError, Error, TransportError};
pub use self::transport::{
    HttpTransport, ResponseBody, Transport, DEFAULT_BASE_URL, REQUEST_TIMEOUT,
};
pub use async_trait::async_trait;
