//! Benchmark market regime classification.

use tracing::warn;

use crate::engine::indicators::Sma;
use crate::types::{Bar, MarketHealth, MarketHealthStatus};

/// Classify a benchmark series into a market regime from its SMA50 and
/// SMA200.
///
/// Short series degrade the window sizes proportionally instead of
/// failing, so the classifier still answers on a few weeks of history.
pub fn market_health(bars: &[Bar]) -> MarketHealth {
    if bars.is_empty() {
        return MarketHealth {
            status: MarketHealthStatus::NoData,
            description: "No benchmark data available".to_string(),
        };
    }

    let length = bars.len();
    let window50 = if length >= 50 { 50 } else { (length / 4).max(5) };
    let window200 = if length >= 200 {
        200
    } else {
        (length / 2).max(window50 + 1)
    };

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let sma50 = Sma::new(window50).value(&closes);
    let sma200 = Sma::new(window200).value(&closes);

    let (sma50, sma200) = match (sma50, sma200) {
        (Some(short), Some(long)) => (short, long),
        _ => {
            warn!(length, window50, window200, "market health windows exceed series length");
            return MarketHealth {
                status: MarketHealthStatus::Error,
                description: "Market health could not be computed".to_string(),
            };
        }
    };

    let price = closes[closes.len() - 1];

    let (status, description) = if price > sma200 {
        if price > sma50 {
            (
                MarketHealthStatus::Bull,
                "Market is in an uptrend. Buying is supported.",
            )
        } else {
            (
                MarketHealthStatus::Correction,
                "Primary trend is up but short-term momentum is weak.",
            )
        }
    } else if price < sma50 {
        (
            MarketHealthStatus::Bear,
            "Market is in a downtrend. Risk is elevated.",
        )
    } else {
        (
            MarketHealthStatus::ReliefRally,
            "Bounce within a downtrend. Caution advised.",
        )
    };

    MarketHealth {
        status,
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar {
                time: 1_000_000 + i as i64 * 86_400_000,
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 1000.0,
            })
            .collect()
    }

    #[test]
    fn test_health_empty_series() {
        let health = market_health(&[]);
        assert_eq!(health.status, MarketHealthStatus::NoData);
    }

    #[test]
    fn test_health_bull_market() {
        let closes: Vec<f64> = (0..250).map(|i| 100.0 + i as f64).collect();
        let health = market_health(&bars_from_closes(&closes));
        assert_eq!(health.status, MarketHealthStatus::Bull);
    }

    #[test]
    fn test_health_bear_market() {
        let closes: Vec<f64> = (0..250).map(|i| 400.0 - i as f64).collect();
        let health = market_health(&bars_from_closes(&closes));
        assert_eq!(health.status, MarketHealthStatus::Bear);
    }

    #[test]
    fn test_health_correction() {
        // Long rise keeps price above SMA200, recent slump drags it
        // below SMA50.
        let mut closes: Vec<f64> = (0..230).map(|i| 100.0 + i as f64).collect();
        for i in 0..20 {
            closes.push(329.0 - i as f64 * 3.0);
        }
        let health = market_health(&bars_from_closes(&closes));
        assert_eq!(health.status, MarketHealthStatus::Correction);
    }

    #[test]
    fn test_health_degrades_windows_on_short_series() {
        // 40 bars: window50 degrades to 10, window200 to 20.
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
        let health = market_health(&bars_from_closes(&closes));
        assert_eq!(health.status, MarketHealthStatus::Bull);
    }

    #[test]
    fn test_health_tiny_series_errors() {
        // 3 bars: degraded windows (5 and 6) still exceed the length.
        let closes = [100.0, 101.0, 102.0];
        let health = market_health(&bars_from_closes(&closes));
        assert_eq!(health.status, MarketHealthStatus::Error);
    }
}
