//! Relative Strength Index (RSI) indicator.

/// RSI (Relative Strength Index) indicator.
///
/// Measures momentum by comparing the magnitude of recent gains to
/// recent losses. Values range 0-100; below 30 is oversold, above 70
/// overbought. Uses Wilder's smoothing for the running averages.
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn min_periods(&self) -> usize {
        self.period + 1
    }

    /// Offset of the first series element relative to the input closes.
    ///
    /// `series(closes)[k]` is the RSI at bar index `k + offset()`.
    pub fn offset(&self) -> usize {
        self.period
    }

    /// Current RSI value, or None with fewer than `period + 1` closes.
    pub fn value(&self, closes: &[f64]) -> Option<f64> {
        self.series(closes).and_then(|s| s.last().copied())
    }

    /// Per-bar RSI series starting at bar index `offset()`.
    pub fn series(&self, closes: &[f64]) -> Option<Vec<f64>> {
        if self.period == 0 || closes.len() < self.period + 1 {
            return None;
        }

        let mut gains = Vec::with_capacity(closes.len() - 1);
        let mut losses = Vec::with_capacity(closes.len() - 1);
        for i in 1..closes.len() {
            let change = closes[i] - closes[i - 1];
            if change > 0.0 {
                gains.push(change);
                losses.push(0.0);
            } else {
                gains.push(0.0);
                losses.push(-change);
            }
        }

        let mut avg_gain: f64 = gains.iter().take(self.period).sum::<f64>() / self.period as f64;
        let mut avg_loss: f64 = losses.iter().take(self.period).sum::<f64>() / self.period as f64;

        let mut series = Vec::with_capacity(closes.len() - self.period);
        series.push(rsi_from_averages(avg_gain, avg_loss));

        for i in self.period..gains.len() {
            avg_gain = (avg_gain * (self.period - 1) as f64 + gains[i]) / self.period as f64;
            avg_loss = (avg_loss * (self.period - 1) as f64 + losses[i]) / self.period as f64;
            series.push(rsi_from_averages(avg_gain, avg_loss));
        }

        Some(series)
    }
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        // No movement at all is neutral; pure gains saturate.
        if avg_gain == 0.0 {
            return 50.0;
        }
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rising_closes(count: usize) -> Vec<f64> {
        (0..count).map(|i| 100.0 + i as f64 * 1.5).collect()
    }

    fn falling_closes(count: usize) -> Vec<f64> {
        (0..count).map(|i| 200.0 - i as f64 * 1.5).collect()
    }

    #[test]
    fn test_rsi_min_periods() {
        assert_eq!(Rsi::default().min_periods(), 15);
        assert_eq!(Rsi::new(7).min_periods(), 8);
    }

    #[test]
    fn test_rsi_insufficient_data() {
        let rsi = Rsi::default();
        assert!(rsi.value(&rising_closes(10)).is_none());
        assert!(rsi.series(&rising_closes(14)).is_none());
    }

    #[test]
    fn test_rsi_uptrend_high_value() {
        let rsi = Rsi::default();
        let value = rsi.value(&rising_closes(50)).unwrap();
        assert!(value > 50.0, "RSI in uptrend should be > 50, got {}", value);
    }

    #[test]
    fn test_rsi_downtrend_low_value() {
        let rsi = Rsi::default();
        let value = rsi.value(&falling_closes(50)).unwrap();
        assert!(value < 50.0, "RSI in downtrend should be < 50, got {}", value);
    }

    #[test]
    fn test_rsi_pure_gains_saturates() {
        let rsi = Rsi::default();
        let value = rsi.value(&rising_closes(30)).unwrap();
        assert_eq!(value, 100.0);
    }

    #[test]
    fn test_rsi_flat_series_neutral() {
        let rsi = Rsi::default();
        let value = rsi.value(&[100.0; 20]).unwrap();
        assert_eq!(value, 50.0);
    }

    #[test]
    fn test_rsi_series_alignment() {
        let rsi = Rsi::default();
        let closes = rising_closes(40);
        let series = rsi.series(&closes).unwrap();
        assert_eq!(series.len(), closes.len() - rsi.offset());
    }

    #[test]
    fn test_rsi_value_range() {
        let rsi = Rsi::default();
        let closes: Vec<f64> = (0..60)
            .map(|i| 100.0 + ((i * 7) % 13) as f64 - 6.0)
            .collect();
        for v in rsi.series(&closes).unwrap() {
            assert!((0.0..=100.0).contains(&v));
        }
    }
}
