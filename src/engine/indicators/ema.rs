//! Exponential Moving Average (EMA) indicator.

/// EMA (Exponential Moving Average) indicator.
///
/// Like SMA but gives more weight to recent prices. Seeded with the SMA
/// of the first `period` values.
pub struct Ema {
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn min_periods(&self) -> usize {
        self.period
    }

    /// Current EMA value, or None with fewer than `period` values.
    pub fn value(&self, values: &[f64]) -> Option<f64> {
        ema_series(values, self.period).last().copied()
    }
}

/// Full EMA series for `values`.
///
/// The first element corresponds to index `period - 1` of the input;
/// empty when the input is shorter than `period`.
pub(crate) fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut ema = Vec::with_capacity(values.len() - period + 1);

    // First EMA is SMA
    let sma: f64 = values.iter().take(period).sum::<f64>() / period as f64;
    ema.push(sma);

    let mut current = sma;
    for value in values.iter().skip(period) {
        current = (value - current) * multiplier + current;
        ema.push(current);
    }

    ema
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ema_insufficient_data() {
        let ema = Ema::new(50);
        assert!(ema.value(&[1.0; 49]).is_none());
    }

    #[test]
    fn test_ema_constant_series() {
        let ema = Ema::new(10);
        let value = ema.value(&[5.0; 30]).unwrap();
        assert!((value - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_ema_tracks_rising_prices() {
        let values: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let ema = Ema::new(20);
        let value = ema.value(&values).unwrap();
        // EMA lags behind the latest price but sits above the window mean.
        assert!(value < 159.0);
        assert!(value > 140.0);
    }

    #[test]
    fn test_ema_series_length() {
        let values: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let series = ema_series(&values, 10);
        assert_eq!(series.len(), 21);
    }
}
