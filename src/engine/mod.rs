//! Technical signal engine.
//!
//! Turns an OHLCV series into indicator values, structural features,
//! higher-timeframe trend context, and one weighted composite verdict
//! with a rationale and an ATR-based risk plan.

pub mod divergence;
pub mod extrema;
pub mod health;
pub mod indicators;
pub mod mtf;
pub mod patterns;
mod scoring;
pub mod structure;

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::types::{Bar, MarketHealth, TrendContext, Verdict};
use indicators::{Atr, BollingerBands, Macd, Obv, Rsi};
use scoring::Snapshot;

/// Stateless signal engine.
///
/// A pure function of its inputs: every invocation recomputes from
/// scratch, holds no state between calls, and never blocks.
pub struct SignalEngine {
    config: EngineConfig,
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl SignalEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze a bar series and produce a composite verdict.
    ///
    /// `higher_timeframe` supplies optional trend context from an
    /// independently fetched coarser series. `risk_budget` sizes the
    /// position-risk guidance, defaulting to the configured budget.
    ///
    /// Mandatory indicators (price, RSI, ATR) abort the whole verdict
    /// when they cannot be computed; optional sub-analyses degrade to
    /// absent fields.
    pub fn analyze(
        &self,
        bars: &[Bar],
        higher_timeframe: Option<&[Bar]>,
        risk_budget: Option<f64>,
    ) -> Result<Verdict> {
        let config = &self.config;

        if bars.is_empty() {
            return Err(EngineError::EmptyInput);
        }
        validate_series(bars)?;

        let last_bar = bars[bars.len() - 1];
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

        let rsi_ind = Rsi::new(config.rsi_period);
        let rsi = rsi_ind
            .value(&closes)
            .ok_or(EngineError::InsufficientData {
                required: rsi_ind.min_periods(),
                actual: bars.len(),
            })?;

        let atr_ind = Atr::new(config.atr_period);
        let atr = atr_ind
            .value(bars)
            .ok_or(EngineError::InsufficientData {
                required: atr_ind.min_periods(),
                actual: bars.len(),
            })?;

        if !last_bar.close.is_finite() || !rsi.is_finite() || !atr.is_finite() {
            return Err(EngineError::Computation(
                "non-finite price, RSI, or ATR".to_string(),
            ));
        }

        let snapshot = Snapshot {
            last_bar,
            rsi,
            atr,
            macd: Macd::new(
                config.macd_fast_period,
                config.macd_slow_period,
                config.macd_signal_period,
            )
            .value(&closes),
            bollinger: BollingerBands::new(config.bollinger_period, config.bollinger_std_dev)
                .value(&closes),
            obv_trend: Obv::new(config.obv_lag, config.obv_min_bars).trend(bars),
            divergence: divergence::detect_divergence(bars, config),
            trend_context: higher_timeframe.map(|htf| mtf::analyze_trend(htf, config)),
            levels: structure::support_resistance(bars, config),
            mean_reversion: structure::mean_reversion(bars, config),
            candle: patterns::classify_candle(&last_bar, config),
            volume_flag: patterns::volume_flag(bars, config),
            pct_std: scoring::pct_return_std(&closes),
        };

        let verdict = scoring::build_verdict(snapshot, config, risk_budget);
        debug!(
            score = verdict.score,
            label = ?verdict.label,
            bars = bars.len(),
            "verdict computed"
        );
        Ok(verdict)
    }

    /// Classify the trend of a higher-timeframe series on its own.
    pub fn trend_context(&self, bars: &[Bar]) -> TrendContext {
        mtf::analyze_trend(bars, &self.config)
    }

    /// Classify a benchmark series into a market regime.
    pub fn market_health(&self, bars: &[Bar]) -> MarketHealth {
        health::market_health(bars)
    }
}

/// Reject out-of-order or duplicate timestamps.
fn validate_series(bars: &[Bar]) -> Result<()> {
    for window in bars.windows(2) {
        if window[1].time <= window[0].time {
            return Err(EngineError::InvalidSeries(format!(
                "timestamps not strictly increasing at {}",
                window[1].time
            )));
        }
    }
    Ok(())
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
                open: close - 0.2,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 1000.0,
            })
            .collect()
    }

    #[test]
    fn test_analyze_empty_input() {
        let engine = SignalEngine::default();
        assert_eq!(engine.analyze(&[], None, None), Err(EngineError::EmptyInput));
    }

    #[test]
    fn test_analyze_insufficient_data() {
        let engine = SignalEngine::default();
        let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let err = engine
            .analyze(&bars_from_closes(&closes), None, None)
            .unwrap_err();
        assert!(matches!(err, EngineError::InsufficientData { .. }));
    }

    #[test]
    fn test_analyze_rejects_duplicate_timestamps() {
        let engine = SignalEngine::default();
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let mut bars = bars_from_closes(&closes);
        bars[5].time = bars[4].time;
        let err = engine.analyze(&bars, None, None).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSeries(_)));
    }

    #[test]
    fn test_analyze_rejects_nan_price() {
        let engine = SignalEngine::default();
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let mut bars = bars_from_closes(&closes);
        let last = bars.len() - 1;
        bars[last].close = f64::NAN;
        let err = engine.analyze(&bars, None, None).unwrap_err();
        assert!(matches!(err, EngineError::Computation(_)));
    }

    #[test]
    fn test_analyze_minimal_series_degrades_optionals() {
        let engine = SignalEngine::default();
        // 15 bars: RSI and ATR work, everything windowed past that is absent.
        let closes: Vec<f64> = (0..15).map(|i| 100.0 + i as f64 * 0.1).collect();
        let verdict = engine
            .analyze(&bars_from_closes(&closes), None, None)
            .unwrap();
        // MACD (35 bars) and Bollinger (20) are absent: no evidence rows.
        assert!(verdict
            .details
            .iter()
            .all(|d| !d.starts_with("MACD") && !d.starts_with("Bollinger")));
        assert!(verdict.levels.is_none());
        assert!(verdict.divergence.is_none());
        assert!(verdict.volume_flag.is_none());
        assert!(verdict.mean_reversion.is_none());
        assert!(verdict.trend_context.is_none());
    }

    #[test]
    fn test_trend_context_passthrough() {
        let engine = SignalEngine::default();
        let closes: Vec<f64> = (0..80).map(|i| 100.0 + i as f64).collect();
        let context = engine.trend_context(&bars_from_closes(&closes));
        assert!(context.label.is_up());
    }
}
