//! Response decoders.
//!
//! Tabular bodies are decoded by header name, so benign column reordering and
//! extra columns do not break decoding. Every decoder is all-or-nothing: one bad
//! row fails the call and no partial sequence is returned.
//!
//! Alpha Vantage reports throttling and bad requests with HTTP 200 and a small
//! JSON object (`{"Error Message": ...}`, `{"Note": ...}` or `{"Information": ...}`)
//! even when CSV was requested. Each decoder turns that into [`Error::Api`].

use std::io::{BufRead, BufReader, Read};

use serde::de::DeserializeOwned;

use crate::{Error, TransportError};

mod digital;
pub(crate) mod fields;
mod quote;
mod search;
mod series;

pub use self::digital::digital_currency_series;
pub use self::quote::quote;
pub use self::search::symbol_search;
pub use self::series::time_series;

const MESSAGE_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

/// Extracts the provider message from a JSON envelope, if the object carries one.
fn api_message(value: &serde_json::Value) -> Option<String> {
    let object = value.as_object()?;
    MESSAGE_KEYS.iter().find_map(|key| {
        object.get(*key).map(|message| match message.as_str() {
            Some(text) => text.to_string(),
            None => message.to_string(),
        })
    })
}

fn read_error(e: std::io::Error) -> Error {
    Error::Transport(TransportError::Io(e))
}

/// Maps a csv failure on the given data row into the crate error.
fn row_error(row: usize, e: csv::Error) -> Error {
    if e.is_io_error() {
        if let csv::ErrorKind::Io(io) = e.into_kind() {
            return read_error(io);
        }
        return Error::decode(row, "failed to read response body");
    }
    Error::decode(row, e.to_string())
}

/// Skips leading whitespace and reports whether the body opens with `{`.
///
/// `fill_buf` may hand back as little as one byte, so whitespace-only buffers
/// are consumed until a significant byte or EOF shows up.
fn starts_with_object<R: Read>(reader: &mut BufReader<R>) -> Result<bool, Error> {
    loop {
        let buf = reader.fill_buf().map_err(read_error)?;
        if buf.is_empty() {
            return Ok(false);
        }
        match buf.iter().position(|b| !b.is_ascii_whitespace()) {
            Some(pos) => {
                let first = buf[pos];
                reader.consume(pos);
                return Ok(first == b'{');
            }
            None => {
                let len = buf.len();
                reader.consume(len);
            }
        }
    }
}

/// Wraps a tabular body in a csv reader, after making sure the body is not a
/// JSON message envelope.
fn tabular<R: Read>(body: R) -> Result<csv::Reader<BufReader<R>>, Error> {
    let mut reader = BufReader::new(body);

    if starts_with_object(&mut reader)? {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw).map_err(read_error)?;
        let value: serde_json::Value = serde_json::from_slice(&raw)
            .map_err(|e| Error::decode(0, format!("expected CSV, got malformed JSON: {}", e)))?;
        return Err(match api_message(&value) {
            Some(message) => Error::Api(message),
            None => Error::decode(0, "expected CSV, got a JSON object"),
        });
    }

    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader))
}

/// Fails at row 0 when the header row lacks one of `required`. An empty body
/// has no header and passes.
fn require_columns<R: Read>(
    reader: &mut csv::Reader<R>,
    required: &[&str],
) -> Result<(), Error> {
    let headers = reader.headers().map_err(|e| row_error(0, e))?;
    if headers.is_empty() {
        return Ok(());
    }
    match required
        .iter()
        .find(|name| !headers.iter().any(|h| h == **name))
    {
        Some(name) => Err(Error::decode(0, format!("missing column `{}`", name))),
        None => Ok(()),
    }
}

/// Deserializes every data row by header name, numbering rows from 1.
fn records<T, R>(reader: &mut csv::Reader<R>) -> Result<Vec<T>, Error>
where
    T: DeserializeOwned,
    R: Read,
{
    reader
        .deserialize::<T>()
        .enumerate()
        .map(|(i, row)| row.map_err(|e| row_error(i + 1, e)))
        .collect()
}
