use std::io::Read;

use crate::{types::TimeSeriesValue, Error};

const COLUMNS: [&str; 6] = ["timestamp", "open", "high", "low", "close", "volume"];

/// Decodes a `timestamp,open,high,low,close,volume` body.
///
/// Rows keep the order they were received in; adjusted series carry extra
/// columns which are ignored.
pub fn time_series<R: Read>(body: R) -> Result<Vec<TimeSeriesValue>, Error> {
    let mut reader = super::tabular(body)?;
    super::require_columns(&mut reader, &COLUMNS)?;
    super::records(&mut reader)
}
