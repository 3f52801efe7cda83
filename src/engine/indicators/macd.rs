//! MACD (Moving Average Convergence Divergence) indicator.

use super::ema::ema_series;

/// Current MACD line and signal line values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdValue {
    pub macd: f64,
    pub signal: f64,
}

impl MacdValue {
    /// Histogram: MACD line minus signal line.
    pub fn histogram(&self) -> f64 {
        self.macd - self.signal
    }
}

/// MACD indicator.
///
/// - MACD Line = EMA(fast) - EMA(slow)
/// - Signal Line = EMA(signal) of the MACD line
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
        }
    }

    pub fn min_periods(&self) -> usize {
        self.slow_period + self.signal_period
    }

    /// Current MACD/signal pair, or None with insufficient closes.
    pub fn value(&self, closes: &[f64]) -> Option<MacdValue> {
        if closes.len() < self.min_periods() {
            return None;
        }

        let fast_ema = ema_series(closes, self.fast_period);
        let slow_ema = ema_series(closes, self.slow_period);
        if fast_ema.is_empty() || slow_ema.is_empty() {
            return None;
        }

        // Align the EMAs (fast starts earlier)
        let offset = self.slow_period - self.fast_period;
        let macd_line: Vec<f64> = fast_ema
            .iter()
            .skip(offset)
            .zip(slow_ema.iter())
            .map(|(f, s)| f - s)
            .collect();

        if macd_line.len() < self.signal_period {
            return None;
        }

        let signal_line = ema_series(&macd_line, self.signal_period);
        let macd = *macd_line.last()?;
        let signal = *signal_line.last()?;

        Some(MacdValue { macd, signal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macd_min_periods() {
        assert_eq!(Macd::default().min_periods(), 35);
    }

    #[test]
    fn test_macd_insufficient_data() {
        let macd = Macd::default();
        let closes = vec![100.0; 34];
        assert!(macd.value(&closes).is_none());
    }

    #[test]
    fn test_macd_flat_series_near_zero() {
        let macd = Macd::default();
        let value = macd.value(&[100.0; 60]).unwrap();
        assert!(value.macd.abs() < 1e-9);
        assert!(value.signal.abs() < 1e-9);
        assert!(value.histogram().abs() < 1e-9);
    }

    #[test]
    fn test_macd_positive_in_uptrend() {
        let closes: Vec<f64> = (0..80).map(|i| 100.0 + i as f64 * 0.8).collect();
        let value = Macd::default().value(&closes).unwrap();
        assert!(value.macd > 0.0, "MACD should be positive in an uptrend");
    }

    #[test]
    fn test_macd_negative_in_downtrend() {
        let closes: Vec<f64> = (0..80).map(|i| 200.0 - i as f64 * 0.8).collect();
        let value = Macd::default().value(&closes).unwrap();
        assert!(value.macd < 0.0, "MACD should be negative in a downtrend");
    }
}
