use std::io::Read;

use csv::StringRecord;

use super::fields::parse_timestamp;
use crate::{
    types::{DigitalCurrencySeriesValue, Ohlc},
    Error,
};

const PRICES: [&str; 4] = ["open", "high", "low", "close"];

/// Column positions resolved from the header row.
///
/// Price headers carry their currency, e.g. `open (CNY)` then `open (USD)`. The
/// first column of each price name is the market currency and the second the
/// USD reference. When only one column is present it serves as both.
#[derive(Debug)]
struct Columns {
    timestamp: usize,
    market: [usize; 4],
    usd: [usize; 4],
    volume: usize,
    market_cap: usize,
}

/// Strips the `(CUR)` suffix and normalises case: `Market Cap (USD)` -> `market cap`.
fn base_name(header: &str) -> String {
    header
        .split('(')
        .next()
        .unwrap_or(header)
        .trim()
        .to_ascii_lowercase()
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, Error> {
        let names: Vec<String> = headers.iter().map(base_name).collect();
        let find = |name: &str| -> Result<usize, Error> {
            names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| Error::decode(0, format!("missing column `{}`", name)))
        };

        let mut market = [0; 4];
        let mut usd = [0; 4];
        for (i, price) in PRICES.iter().enumerate() {
            let mut positions = names
                .iter()
                .enumerate()
                .filter(|(_, n)| n.as_str() == *price)
                .map(|(pos, _)| pos);
            let first = positions
                .next()
                .ok_or_else(|| Error::decode(0, format!("missing column `{}`", price)))?;
            market[i] = first;
            usd[i] = positions.next().unwrap_or(first);
        }

        Ok(Columns {
            timestamp: find("timestamp")?,
            market,
            usd,
            volume: find("volume")?,
            market_cap: find("market cap")?,
        })
    }

    fn number(
        &self,
        record: &StringRecord,
        headers: &StringRecord,
        idx: usize,
        row: usize,
    ) -> Result<f64, Error> {
        let raw = record.get(idx).unwrap_or_default();
        raw.parse::<f64>().map_err(|_| {
            Error::decode(
                row,
                format!(
                    "column `{}`: invalid number `{}`",
                    headers.get(idx).unwrap_or_default(),
                    raw
                ),
            )
        })
    }

    fn ohlc(
        &self,
        record: &StringRecord,
        headers: &StringRecord,
        idx: [usize; 4],
        row: usize,
    ) -> Result<Ohlc, Error> {
        Ok(Ohlc {
            open: self.number(record, headers, idx[0], row)?,
            high: self.number(record, headers, idx[1], row)?,
            low: self.number(record, headers, idx[2], row)?,
            close: self.number(record, headers, idx[3], row)?,
        })
    }

    fn value(
        &self,
        record: &StringRecord,
        headers: &StringRecord,
        row: usize,
    ) -> Result<DigitalCurrencySeriesValue, Error> {
        let timestamp = parse_timestamp(record.get(self.timestamp).unwrap_or_default())
            .map_err(|message| Error::decode(row, message))?;
        Ok(DigitalCurrencySeriesValue {
            timestamp,
            market: self.ohlc(record, headers, self.market, row)?,
            usd: self.ohlc(record, headers, self.usd, row)?,
            volume: self.number(record, headers, self.volume, row)?,
            market_cap: self.number(record, headers, self.market_cap, row)?,
        })
    }
}

/// Decodes a digital currency body with market-currency and USD price columns.
pub fn digital_currency_series<R: Read>(
    body: R,
) -> Result<Vec<DigitalCurrencySeriesValue>, Error> {
    let mut reader = super::tabular(body)?;
    let headers = reader
        .headers()
        .map_err(|e| super::row_error(0, e))?
        .clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    let columns = Columns::resolve(&headers)?;

    let mut values = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let row = i + 1;
        let record = record.map_err(|e| super::row_error(row, e))?;
        values.push(columns.value(&record, &headers, row)?);
    }
    Ok(values)
}
