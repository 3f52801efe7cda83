//! Simple Moving Average (SMA) indicator.

/// SMA (Simple Moving Average) indicator.
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn min_periods(&self) -> usize {
        self.period
    }

    /// Current SMA value, or None with fewer than `period` values.
    pub fn value(&self, values: &[f64]) -> Option<f64> {
        if self.period == 0 || values.len() < self.period {
            return None;
        }

        let sum: f64 = values.iter().rev().take(self.period).sum();
        Some(sum / self.period as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_insufficient_data() {
        let sma = Sma::new(50);
        assert!(sma.value(&[1.0; 49]).is_none());
    }

    #[test]
    fn test_sma_exact_window() {
        let sma = Sma::new(4);
        let value = sma.value(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(value, 2.5);
    }

    #[test]
    fn test_sma_uses_trailing_window() {
        let sma = Sma::new(2);
        let value = sma.value(&[100.0, 1.0, 3.0]).unwrap();
        assert_eq!(value, 2.0);
    }
}
