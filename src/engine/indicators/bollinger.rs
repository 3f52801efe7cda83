//! Bollinger Bands indicator.

/// Current Bollinger band levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerValue {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Bollinger Bands indicator.
///
/// - Middle band: SMA(period)
/// - Upper band: SMA + k * StdDev
/// - Lower band: SMA - k * StdDev
pub struct BollingerBands {
    period: usize,
    std_dev_multiplier: f64,
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev_multiplier: 2.0,
        }
    }
}

impl BollingerBands {
    pub fn new(period: usize, std_dev_multiplier: f64) -> Self {
        Self {
            period,
            std_dev_multiplier,
        }
    }

    pub fn min_periods(&self) -> usize {
        self.period
    }

    /// Current band levels, or None with fewer than `period` closes.
    pub fn value(&self, closes: &[f64]) -> Option<BollingerValue> {
        if self.period == 0 || closes.len() < self.period {
            return None;
        }

        let window: Vec<f64> = closes.iter().rev().take(self.period).copied().collect();
        let middle = window.iter().sum::<f64>() / self.period as f64;
        let std_dev = Self::std_dev(&window, middle);

        Some(BollingerValue {
            upper: middle + self.std_dev_multiplier * std_dev,
            middle,
            lower: middle - self.std_dev_multiplier * std_dev,
        })
    }

    /// Population standard deviation.
    fn std_dev(values: &[f64], mean: f64) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let variance: f64 =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        variance.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bollinger_insufficient_data() {
        let bb = BollingerBands::default();
        assert!(bb.value(&[100.0; 19]).is_none());
    }

    #[test]
    fn test_bollinger_flat_series_collapses() {
        let bb = BollingerBands::default();
        let value = bb.value(&[100.0; 25]).unwrap();
        assert_eq!(value.middle, 100.0);
        assert_eq!(value.upper, 100.0);
        assert_eq!(value.lower, 100.0);
    }

    #[test]
    fn test_bollinger_band_ordering() {
        let closes: Vec<f64> = (0..40)
            .map(|i| 100.0 + ((i * 11) % 7) as f64 - 3.0)
            .collect();
        let value = BollingerBands::default().value(&closes).unwrap();
        assert!(value.lower < value.middle);
        assert!(value.middle < value.upper);
    }

    #[test]
    fn test_bollinger_uses_trailing_window() {
        // Older closes beyond the window must not affect the bands.
        let mut closes = vec![1000.0; 10];
        closes.extend([100.0; 20]);
        let value = BollingerBands::default().value(&closes).unwrap();
        assert_eq!(value.middle, 100.0);
    }
}
