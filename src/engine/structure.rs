//! Support/resistance levels and mean-reversion distance.

use crate::config::EngineConfig;
use crate::engine::indicators::Sma;
use crate::types::{Bar, MeanReversion, Overextension, StructureLevels};

/// Support and resistance over the trailing window, excluding the
/// current (still-forming) bar.
///
/// Resistance is the highest High, support the lowest Low. None when
/// fewer than `structure_window` completed bars precede the current one.
pub fn support_resistance(bars: &[Bar], config: &EngineConfig) -> Option<StructureLevels> {
    let window = config.structure_window;
    if window == 0 || bars.len() < window + 1 {
        return None;
    }

    let trailing = &bars[bars.len() - 1 - window..bars.len() - 1];
    let mut support = f64::INFINITY;
    let mut resistance = f64::NEG_INFINITY;
    for bar in trailing {
        support = support.min(bar.low);
        resistance = resistance.max(bar.high);
    }

    Some(StructureLevels {
        support,
        resistance,
    })
}

/// Signed relative distance of the last close from its SMA, with an
/// overextension flag past the configured threshold.
pub fn mean_reversion(bars: &[Bar], config: &EngineConfig) -> Option<MeanReversion> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let sma = Sma::new(config.sma_period).value(&closes)?;
    if sma == 0.0 {
        return None;
    }

    let price = *closes.last()?;
    let distance = (price - sma) / sma;
    let flag = if distance > config.overextension_threshold {
        Some(Overextension::Up)
    } else if distance < -config.overextension_threshold {
        Some(Overextension::Down)
    } else {
        None
    };

    Some(MeanReversion { distance, flag })
}
