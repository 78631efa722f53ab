use std::io::Read;

use crate::{types::QuoteValue, Error};

const COLUMNS: [&str; 10] = [
    "symbol",
    "open",
    "high",
    "low",
    "price",
    "volume",
    "latestDay",
    "previousClose",
    "change",
    "changePercent",
];

/// Decodes a `GLOBAL_QUOTE` body, which must hold exactly one data row.
///
/// A header with no rows is [`Error::EmptyResult`]; a second row is rejected
/// rather than silently dropped.
pub fn quote<R: Read>(body: R) -> Result<QuoteValue, Error> {
    let mut reader = super::tabular(body)?;
    super::require_columns(&mut reader, &COLUMNS)?;
    let mut rows = reader.deserialize::<QuoteValue>();

    let quote = match rows.next() {
        Some(row) => row.map_err(|e| super::row_error(1, e))?,
        None => return Err(Error::EmptyResult),
    };
    if rows.next().is_some() {
        return Err(Error::decode(2, "expected a single quote row"));
    }
    Ok(quote)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    const HEADER: &str = "symbol,open,high,low,price,volume,latestDay,previousClose,change,changePercent\n";
    const IBM: &str = "IBM,159.7800,161.2300,158.9600,160.8600,4573521,2024-01-05,159.1600,1.7000,1.0681%\n";

    #[test]
    fn decodes_single_row() {
        let body = format!("{}{}", HEADER, IBM);
        let quote = quote(body.as_bytes()).unwrap();
        assert_eq!(quote.symbol, "IBM");
        assert_eq!(quote.open, 159.78);
        assert_eq!(quote.price, 160.86);
        assert_eq!(quote.volume, 4573521);
        assert_eq!(
            quote.latest_trading_day,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
        assert_eq!(quote.previous_close, 159.16);
        assert_eq!(quote.change, 1.7);
        assert_eq!(quote.change_percent, 1.0681);
    }

    #[test]
    fn negative_change_percent() {
        let body = format!(
            "{}MSFT,370.0,372.0,365.0,367.75,1000,2024-01-05,370.5,-2.75,-0.7422%\n",
            HEADER
        );
        let quote = quote(body.as_bytes()).unwrap();
        assert_eq!(quote.change, -2.75);
        assert_eq!(quote.change_percent, -0.7422);
    }

    #[test]
    fn header_only_is_empty_result() {
        let err = quote(HEADER.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::EmptyResult));

        let err = quote("".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::EmptyResult));
    }

    #[test]
    fn header_missing_column_is_decode_error() {
        let err = quote("symbol,open,high,low,price,volume\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Decode { row: 0, .. }));
        assert!(err.to_string().contains("latestDay"));
    }

    #[test]
    fn multiple_rows_are_rejected() {
        let body = format!("{}{}{}", HEADER, IBM, IBM);
        let err = quote(body.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Decode { row: 2, .. }));
    }

    #[test]
    fn malformed_row_is_decode_error() {
        let body = format!("{}{}", HEADER, IBM.replace("4573521", "n/a"));
        let err = quote(body.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Decode { row: 1, .. }));
    }
}
