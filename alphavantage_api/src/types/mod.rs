mod params;
pub use self::params::{OutputSize, TimeInterval, TimeSeries};

mod series;
pub use self::series::{DigitalCurrencySeriesValue, Ohlc, TimeSeriesValue};

mod quote;
pub use self::quote::QuoteValue;

mod search;
pub use self::search::{SymbolMatch, SymbolMatches};
