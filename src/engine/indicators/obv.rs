//! On-Balance Volume (OBV) indicator.

use crate::types::{Bar, ObvTrend};

/// OBV (On-Balance Volume) indicator.
///
/// Cumulative volume signed by price direction:
/// - close > previous close: OBV += volume
/// - close < previous close: OBV -= volume
///
/// The trend compares the latest OBV to its value `lag` bars prior.
pub struct Obv {
    lag: usize,
    min_bars: usize,
}

impl Default for Obv {
    fn default() -> Self {
        Self {
            lag: 5,
            min_bars: 15,
        }
    }
}

impl Obv {
    pub fn new(lag: usize, min_bars: usize) -> Self {
        Self { lag, min_bars }
    }

    pub fn min_periods(&self) -> usize {
        self.min_bars
    }

    /// Cumulative OBV series, one value per bar.
    pub fn series(&self, bars: &[Bar]) -> Vec<f64> {
        let mut obv = 0.0;
        let mut values = Vec::with_capacity(bars.len());
        if !bars.is_empty() {
            values.push(0.0);
        }
        for i in 1..bars.len() {
            if bars[i].close > bars[i - 1].close {
                obv += bars[i].volume;
            } else if bars[i].close < bars[i - 1].close {
                obv -= bars[i].volume;
            }
            values.push(obv);
        }
        values
    }

    /// Trend of the OBV series, or None with fewer than `min_bars` bars.
    pub fn trend(&self, bars: &[Bar]) -> Option<ObvTrend> {
        if bars.len() < self.min_bars || bars.len() <= self.lag {
            return None;
        }

        let series = self.series(bars);
        let latest = *series.last()?;
        let earlier = series[series.len() - 1 - self.lag];

        if latest > earlier {
            Some(ObvTrend::Rising)
        } else {
            Some(ObvTrend::Falling)
        }
    }
}
