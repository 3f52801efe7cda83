use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One time-stamped OHLCV observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Unix timestamp in milliseconds.
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// Absolute size of the candle body.
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Length of the upper wick.
    pub fn upper_wick(&self) -> f64 {
        self.high - self.open.max(self.close)
    }

    /// Length of the lower wick.
    pub fn lower_wick(&self) -> f64 {
        self.open.min(self.close) - self.low
    }

    /// Whether the bar closed above its own open.
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Bar timestamp as a UTC datetime, None when out of range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time)
    }
}

/// Chart interval for a bar series.
///
/// The engine itself never consults the interval; the higher-timeframe
/// lookup is owned by the caller fetching the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
    OneMinute,
    FiveMinute,
    FifteenMinute,
    ThirtyMinute,
    OneHour,
    FourHours,
    OneDay,
    OneWeek,
    OneMonth,
}

impl Interval {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "1m" => Some(Self::OneMinute),
            "5m" => Some(Self::FiveMinute),
            "15m" => Some(Self::FifteenMinute),
            "30m" => Some(Self::ThirtyMinute),
            "1h" | "60m" => Some(Self::OneHour),
            "4h" => Some(Self::FourHours),
            "1d" => Some(Self::OneDay),
            "1w" | "1wk" => Some(Self::OneWeek),
            "1mo" => Some(Self::OneMonth),
            _ => None,
        }
    }

    /// Get display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::FiveMinute => "5m",
            Self::FifteenMinute => "15m",
            Self::ThirtyMinute => "30m",
            Self::OneHour => "1h",
            Self::FourHours => "4h",
            Self::OneDay => "1d",
            Self::OneWeek => "1wk",
            Self::OneMonth => "1mo",
        }
    }

    /// Get the recommended higher timeframe for trend context.
    pub fn higher(&self) -> Self {
        match self {
            Self::OneMinute | Self::FiveMinute => Self::FifteenMinute,
            Self::FifteenMinute => Self::OneHour,
            Self::ThirtyMinute => Self::FourHours,
            Self::OneHour => Self::OneDay,
            Self::FourHours | Self::OneDay => Self::OneWeek,
            Self::OneWeek | Self::OneMonth => Self::OneMonth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_geometry() {
        let bar = Bar {
            time: 0,
            open: 10.0,
            high: 12.0,
            low: 7.0,
            close: 11.0,
            volume: 100.0,
        };
        assert_eq!(bar.body(), 1.0);
        assert_eq!(bar.upper_wick(), 1.0);
        assert_eq!(bar.lower_wick(), 3.0);
        assert!(bar.is_bullish());
    }

    #[test]
    fn test_bar_datetime() {
        let bar = Bar {
            time: 1_700_000_000_000,
            open: 1.0,
            high: 1.0,
            low: 1.0,
            close: 1.0,
            volume: 0.0,
        };
        let dt = bar.datetime().unwrap();
        assert_eq!(dt.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_interval_parse() {
        assert_eq!(Interval::from_str("15m"), Some(Interval::FifteenMinute));
        assert_eq!(Interval::from_str("60m"), Some(Interval::OneHour));
        assert_eq!(Interval::from_str("1WK"), Some(Interval::OneWeek));
        assert_eq!(Interval::from_str("3d"), None);
    }

    #[test]
    fn test_interval_higher_timeframe() {
        assert_eq!(Interval::FifteenMinute.higher(), Interval::OneHour);
        assert_eq!(Interval::OneHour.higher(), Interval::OneDay);
        assert_eq!(Interval::OneDay.higher(), Interval::OneWeek);
        assert_eq!(Interval::OneMonth.higher(), Interval::OneMonth);
    }
}
