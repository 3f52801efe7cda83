//! Single-bar candlestick and abnormal-volume classification.

use crate::config::EngineConfig;
use crate::types::{Bar, CandlePattern, VolumeFlag};

/// Classify the latest bar as a pin-bar, if its wick geometry qualifies.
///
/// A bullish pin-bar rejects price from below: the lower wick dwarfs
/// both the body and the upper wick. Bearish is the mirror image on the
/// upper wick. The body is floored at a small fraction of the close so
/// doji bars cannot qualify on a near-zero body alone. At most one
/// pattern per bar; the bullish test runs first.
pub fn classify_candle(bar: &Bar, config: &EngineConfig) -> Option<CandlePattern> {
    let body_floor = config.pinbar_body_floor * bar.close.abs();
    let body = bar.body().max(body_floor);
    let upper = bar.upper_wick();
    let lower = bar.lower_wick();

    if lower > config.pinbar_body_ratio * body && lower > config.pinbar_wick_ratio * upper {
        return Some(CandlePattern::BullishPinbar);
    }
    if upper > config.pinbar_body_ratio * body && upper > config.pinbar_wick_ratio * lower {
        return Some(CandlePattern::BearishPinbar);
    }
    None
}

/// Flag the current bar's volume against its trailing average.
///
/// The baseline is the mean volume of the trailing window excluding the
/// current bar. None when fewer bars exist or the baseline is zero.
pub fn volume_flag(bars: &[Bar], config: &EngineConfig) -> Option<VolumeFlag> {
    let window = config.volume_window;
    if window == 0 || bars.len() < window + 1 {
        return None;
    }

    let trailing = &bars[bars.len() - 1 - window..bars.len() - 1];
    let average: f64 = trailing.iter().map(|b| b.volume).sum::<f64>() / window as f64;
    if average <= 0.0 {
        return None;
    }

    let current = bars[bars.len() - 1].volume;
    let ratio = current / average;

    if ratio >= config.volume_ultra_ratio {
        Some(VolumeFlag::UltraHigh)
    } else if ratio >= config.volume_high_ratio {
        Some(VolumeFlag::High)
    } else {
        None
    }
}
