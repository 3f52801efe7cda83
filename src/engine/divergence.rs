//! Price/RSI divergence detection.

use crate::config::EngineConfig;
use crate::engine::extrema::{detect, ExtremumPoint};
use crate::engine::indicators::Rsi;
use crate::types::{Bar, DivergenceKind, DivergenceSignal};

/// Scan a bar series for bullish or bearish price/RSI divergence.
///
/// Returns None when the series is too short, the extremum counts are
/// insufficient, or the price and RSI extrema are out of sync.
pub fn detect_divergence(bars: &[Bar], config: &EngineConfig) -> Option<DivergenceSignal> {
    if bars.len() < config.divergence_min_bars {
        return None;
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let rsi = Rsi::new(config.rsi_period);
    let rsi_series = rsi.series(&closes)?;

    detect_from_series(&closes, &rsi_series, rsi.offset(), config)
}

/// Divergence check on an explicit price/RSI series pair.
///
/// `rsi_offset` maps RSI-series indices back into price-series indices
/// so the synchronization tolerance compares like with like.
pub fn detect_from_series(
    closes: &[f64],
    rsi_series: &[f64],
    rsi_offset: usize,
    config: &EngineConfig,
) -> Option<DivergenceSignal> {
    let window = config.extremum_window;
    let (price_peaks, price_troughs) = detect(closes, window);
    let (rsi_peaks, rsi_troughs) = detect(rsi_series, window);

    let rsi_peaks = shift(rsi_peaks, rsi_offset);
    let rsi_troughs = shift(rsi_troughs, rsi_offset);

    // Bullish first: lower low in price, higher low in RSI.
    if let (Some([p_prev, p_last]), Some([r_prev, r_last])) =
        (last_two(&price_troughs), last_two(&rsi_troughs))
    {
        if p_last.value < p_prev.value
            && r_last.value > r_prev.value
            && in_sync(p_last.index, r_last.index, config.divergence_sync_tolerance)
        {
            return Some(DivergenceSignal {
                kind: DivergenceKind::Bullish,
                description: "Price made a lower low while RSI made a higher low".to_string(),
            });
        }
    }

    // Bearish: higher high in price, lower high in RSI.
    if let (Some([p_prev, p_last]), Some([r_prev, r_last])) =
        (last_two(&price_peaks), last_two(&rsi_peaks))
    {
        if p_last.value > p_prev.value
            && r_last.value < r_prev.value
            && in_sync(p_last.index, r_last.index, config.divergence_sync_tolerance)
        {
            return Some(DivergenceSignal {
                kind: DivergenceKind::Bearish,
                description: "Price made a higher high while RSI made a lower high".to_string(),
            });
        }
    }

    None
}

fn shift(mut points: Vec<ExtremumPoint>, offset: usize) -> Vec<ExtremumPoint> {
    for p in &mut points {
        p.index += offset;
    }
    points
}

fn last_two(points: &[ExtremumPoint]) -> Option<[ExtremumPoint; 2]> {
    if points.len() < 2 {
        return None;
    }
    Some([points[points.len() - 2], points[points.len() - 1]])
}

fn in_sync(a: usize, b: usize, tolerance: usize) -> bool {
    a.abs_diff(b) <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar {
                time: 1_000_000 + i as i64 * 60_000,
                open: close,
                high: close + 0.5,
                low: close - 0.5,
                close,
                volume: 1000.0,
            })
            .collect()
    }

    /// Series with troughs at `indices` dipping to `depths`, flat elsewhere.
    fn series_with_troughs(len: usize, indices: &[usize], depths: &[f64]) -> Vec<f64> {
        let mut values: Vec<f64> = (0..len).map(|i| 100.0 + (i % 2) as f64 * 0.1).collect();
        for (&idx, &depth) in indices.iter().zip(depths) {
            values[idx] = depth;
        }
        values
    }

    #[test]
    fn test_divergence_short_series() {
        let bars = bars_from_closes(&[100.0; 19]);
        let config = EngineConfig::default();
        assert!(detect_divergence(&bars, &config).is_none());
    }

    #[test]
    fn test_divergence_monotonic_series() {
        let closes: Vec<f64> = (0..80).map(|i| 100.0 + i as f64).collect();
        let config = EngineConfig::default();
        assert!(detect_divergence(&bars_from_closes(&closes), &config).is_none());
    }

    #[test]
    fn test_bullish_divergence_from_series() {
        let config = EngineConfig::default();
        // Price: lower low at bar 60 vs bar 40.
        let closes = series_with_troughs(70, &[40, 60], &[90.0, 85.0]);
        // RSI (offset 0 for clarity): higher low at the same bars.
        let rsi = series_with_troughs(70, &[40, 60], &[25.0, 35.0]);
        let signal = detect_from_series(&closes, &rsi, 0, &config).unwrap();
        assert_eq!(signal.kind, DivergenceKind::Bullish);
    }

    #[test]
    fn test_bearish_divergence_from_series() {
        let config = EngineConfig::default();
        let mut closes: Vec<f64> = (0..70).map(|i| 100.0 - (i % 2) as f64 * 0.1).collect();
        closes[40] = 110.0;
        closes[60] = 115.0;
        let mut rsi: Vec<f64> = (0..70).map(|i| 50.0 - (i % 2) as f64 * 0.1).collect();
        rsi[40] = 80.0;
        rsi[60] = 72.0;
        let signal = detect_from_series(&closes, &rsi, 0, &config).unwrap();
        assert_eq!(signal.kind, DivergenceKind::Bearish);
    }

    #[test]
    fn test_divergence_rejected_when_out_of_sync() {
        let config = EngineConfig::default();
        let closes = series_with_troughs(70, &[40, 60], &[90.0, 85.0]);
        // RSI trough lands 5 bars away from the price trough.
        let rsi = series_with_troughs(70, &[40, 55], &[25.0, 35.0]);
        assert!(detect_from_series(&closes, &rsi, 0, &config).is_none());
    }

    #[test]
    fn test_divergence_requires_confirming_rsi_direction() {
        let config = EngineConfig::default();
        let closes = series_with_troughs(70, &[40, 60], &[90.0, 85.0]);
        // RSI also makes a lower low: no divergence.
        let rsi = series_with_troughs(70, &[40, 60], &[35.0, 25.0]);
        assert!(detect_from_series(&closes, &rsi, 0, &config).is_none());
    }

    #[test]
    fn test_divergence_respects_rsi_offset() {
        let config = EngineConfig::default();
        let closes = series_with_troughs(70, &[40, 60], &[90.0, 85.0]);
        // RSI indices shifted down by 14; offset restores alignment.
        let rsi = series_with_troughs(56, &[26, 46], &[25.0, 35.0]);
        let signal = detect_from_series(&closes, &rsi, 14, &config).unwrap();
        assert_eq!(signal.kind, DivergenceKind::Bullish);
    }
}
