//! Typed request parameters: output size, intraday interval and series granularity.

use std::fmt;

/// How many rows a tabular endpoint returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputSize {
    /// The latest 100 data points. This is the default.
    #[default]
    Compact,
    /// The full-length history.
    Full,
}

impl OutputSize {
    /// Returns the `outputsize` query value.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputSize::Compact => "compact",
            OutputSize::Full => "full",
        }
    }

    /// Parses a raw `outputsize` value, falling back to [`OutputSize::Compact`]
    /// for anything that is not `full`.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("full") {
            OutputSize::Full
        } else {
            OutputSize::Compact
        }
    }
}

impl From<u8> for OutputSize {
    /// `1` is [`OutputSize::Full`]; every other value is [`OutputSize::Compact`].
    fn from(value: u8) -> Self {
        match value {
            1 => OutputSize::Full,
            _ => OutputSize::Compact,
        }
    }
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spacing between two consecutive intraday data points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeInterval {
    OneMin,
    FiveMin,
    FifteenMin,
    ThirtyMin,
    SixtyMin,
}

impl TimeInterval {
    /// Returns the `interval` query value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInterval::OneMin => "1min",
            TimeInterval::FiveMin => "5min",
            TimeInterval::FifteenMin => "15min",
            TimeInterval::ThirtyMin => "30min",
            TimeInterval::SixtyMin => "60min",
        }
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-intraday time series, selected through the `function` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeSeries {
    Daily,
    DailyAdjusted,
    Weekly,
    WeeklyAdjusted,
    Monthly,
    MonthlyAdjusted,
}

impl TimeSeries {
    /// Returns the `function` query value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSeries::Daily => "TIME_SERIES_DAILY",
            TimeSeries::DailyAdjusted => "TIME_SERIES_DAILY_ADJUSTED",
            TimeSeries::Weekly => "TIME_SERIES_WEEKLY",
            TimeSeries::WeeklyAdjusted => "TIME_SERIES_WEEKLY_ADJUSTED",
            TimeSeries::Monthly => "TIME_SERIES_MONTHLY",
            TimeSeries::MonthlyAdjusted => "TIME_SERIES_MONTHLY_ADJUSTED",
        }
    }
}

impl fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
