//! Average True Range (ATR) indicator.

use crate::types::Bar;

/// ATR (Average True Range) indicator.
///
/// Measures volatility as the average of true ranges:
/// TR = max(High-Low, |High-PrevClose|, |Low-PrevClose|)
///
/// Uses Wilder's smoothing over `period` true ranges.
pub struct Atr {
    period: usize,
}

impl Default for Atr {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Atr {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn min_periods(&self) -> usize {
        self.period + 1
    }

    /// Current ATR value, or None with fewer than `period + 1` bars.
    pub fn value(&self, bars: &[Bar]) -> Option<f64> {
        if self.period == 0 || bars.len() < self.min_periods() {
            return None;
        }

        let mut true_ranges = Vec::with_capacity(bars.len() - 1);
        for i in 1..bars.len() {
            true_ranges.push(Self::true_range(&bars[i], &bars[i - 1]));
        }

        let initial: f64 = true_ranges.iter().take(self.period).sum::<f64>() / self.period as f64;

        let mut atr = initial;
        for tr in true_ranges.iter().skip(self.period) {
            atr = (atr * (self.period - 1) as f64 + tr) / self.period as f64;
        }

        Some(atr)
    }

    /// Classic true range.
    fn true_range(current: &Bar, previous: &Bar) -> f64 {
        let hl = current.high - current.low;
        let hc = (current.high - previous.close).abs();
        let lc = (current.low - previous.close).abs();
        hl.max(hc).max(lc)
    }
}
