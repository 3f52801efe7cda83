//! Higher-timeframe trend classification.

use crate::config::EngineConfig;
use crate::engine::indicators::{Ema, Rsi};
use crate::types::{Bar, TrendContext, TrendLabel};

/// Classify the trend of a higher-timeframe series.
///
/// Price above its EMA with RSI above 50 is a strong uptrend; the
/// remaining quadrants grade down from there. An empty series, or one
/// too short for the EMA/RSI windows, yields NoData.
pub fn analyze_trend(bars: &[Bar], config: &EngineConfig) -> TrendContext {
    if bars.is_empty() {
        return TrendContext {
            label: TrendLabel::NoData,
            description: "No higher-timeframe data available".to_string(),
        };
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let ema = Ema::new(config.trend_ema_period).value(&closes);
    let rsi = Rsi::new(config.rsi_period).value(&closes);

    let (ema, rsi) = match (ema, rsi) {
        (Some(e), Some(r)) => (e, r),
        _ => {
            return TrendContext {
                label: TrendLabel::NoData,
                description: "Insufficient higher-timeframe history".to_string(),
            }
        }
    };

    let price = closes[closes.len() - 1];

    let (label, description) = if price > ema {
        if rsi > 50.0 {
            (
                TrendLabel::StrongUp,
                "Strong uptrend: price above EMA with momentum confirming",
            )
        } else {
            (
                TrendLabel::WeakUp,
                "Weak uptrend: price above EMA but momentum is soft",
            )
        }
    } else if price < ema {
        if rsi < 50.0 {
            (
                TrendLabel::StrongDown,
                "Strong downtrend: price below EMA with momentum confirming",
            )
        } else {
            (
                TrendLabel::WeakDown,
                "Weak downtrend: price below EMA but momentum is recovering",
            )
        }
    } else {
        (TrendLabel::Neutral, "Price sitting exactly on its EMA")
    };

    TrendContext {
        label,
        description: description.to_string(),
    }
}
