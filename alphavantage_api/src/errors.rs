//! Error types for the API client.

/// Errors that can occur when requesting and decoding Alpha Vantage data.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The transport failed to deliver a response body.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The response body could not be decoded into the expected records.
    ///
    /// `row` is the 1-based data row (the header is row 0).
    #[error("Failed to decode row {row}: {message}")]
    Decode { row: usize, message: String },
    /// A single-record endpoint returned no data rows.
    #[error("Response contained no data rows")]
    EmptyResult,
    /// Alpha Vantage replied with an error or notice message instead of data.
    #[error("Alpha Vantage API error: {0}")]
    Api(String),
    /// The client configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    pub(crate) fn decode(row: usize, message: impl Into<String>) -> Self {
        Self::Decode {
            row,
            message: message.into(),
        }
    }
}

/// Errors raised while performing the network round trip.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,
    /// The connection to the host could not be established.
    #[error("Connection failed: {0}")]
    Connect(String),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// Reading the response body failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Any other HTTP client failure (invalid URL, builder error, ...).
    #[error("Request failed: {0}")]
    Client(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else {
            Self::Client(e.to_string())
        }
    }
}

/// Errors from building a [`ClientConfig`](crate::ClientConfig) out of the environment.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("ALPHAVANTAGE_API_KEY environment variable not set")]
    MissingApiKey,
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_display_names_row() {
        let err = Error::decode(3, "invalid float literal");
        assert_eq!(
            err.to_string(),
            "Failed to decode row 3: invalid float literal"
        );
    }

    #[test]
    fn transport_error_is_transparent() {
        let err = Error::from(TransportError::Timeout);
        assert_eq!(err.to_string(), "Request timed out");
        assert!(matches!(err, Error::Transport(TransportError::Timeout)));
    }

    #[test]
    fn config_error_display() {
        assert!(ConfigError::MissingApiKey
            .to_string()
            .contains("ALPHAVANTAGE_API_KEY"));
    }
}
