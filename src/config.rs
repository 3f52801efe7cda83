use std::env;

/// Fixed integer weights contributed by each signal during scoring.
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    /// RSI oversold/overbought contribution.
    pub rsi: i32,
    /// MACD line vs signal line contribution.
    pub macd: i32,
    /// Close below the lower Bollinger band.
    pub bollinger: i32,
    /// Price near support/resistance.
    pub structure: i32,
    /// Confirmed price/RSI divergence.
    pub divergence: i32,
    /// Abnormal volume in the direction of the bar.
    pub volume: i32,
    /// Pin-bar rejection candle.
    pub candle: i32,
    /// Higher-timeframe trend agreement bonus.
    pub mtf: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            rsi: 2,
            macd: 1,
            bollinger: 2,
            structure: 2,
            divergence: 3,
            volume: 2,
            candle: 3,
            mtf: 1,
        }
    }
}

/// Score cut points that map the composite score to a signal label.
#[derive(Debug, Clone)]
pub struct LabelThresholds {
    /// Score at or above this is a strong buy.
    pub strong_buy: i32,
    /// Score at or above this is a buy.
    pub buy: i32,
    /// Score at or below this is a sell.
    pub sell: i32,
    /// Score at or below this is a strong sell.
    pub strong_sell: i32,
}

impl Default for LabelThresholds {
    fn default() -> Self {
        Self {
            strong_buy: 6,
            buy: 2,
            sell: -2,
            strong_sell: -6,
        }
    }
}

/// Engine configuration.
///
/// Every tuned threshold in the pipeline lives here so the cut points
/// can be adjusted and tested independently of the algorithm logic.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RSI lookback period.
    pub rsi_period: usize,
    /// MACD fast EMA period.
    pub macd_fast_period: usize,
    /// MACD slow EMA period.
    pub macd_slow_period: usize,
    /// MACD signal EMA period.
    pub macd_signal_period: usize,
    /// Bollinger band SMA period.
    pub bollinger_period: usize,
    /// Bollinger band standard deviation multiplier.
    pub bollinger_std_dev: f64,
    /// ATR lookback period.
    pub atr_period: usize,
    /// OBV trend comparison lag in bars.
    pub obv_lag: usize,
    /// Minimum bars before the OBV trend is reported.
    pub obv_min_bars: usize,
    /// Confirmation window for peak/trough detection in the divergence scan.
    pub extremum_window: usize,
    /// Minimum bars before divergence is evaluated.
    pub divergence_min_bars: usize,
    /// Maximum index distance between matching price and RSI extrema.
    pub divergence_sync_tolerance: usize,
    /// Trailing window for support/resistance levels (excludes the forming bar).
    pub structure_window: usize,
    /// Relative distance to support/resistance that counts as "near".
    pub structure_proximity: f64,
    /// Mean-reversion distance from the SMA that flags overextension.
    pub overextension_threshold: f64,
    /// SMA window used for mean-reversion distance.
    pub sma_period: usize,
    /// EMA window used by the higher-timeframe trend analyzer.
    pub trend_ema_period: usize,
    /// Trailing window for the average-volume baseline (excludes the forming bar).
    pub volume_window: usize,
    /// Volume ratio that counts as high.
    pub volume_high_ratio: f64,
    /// Volume ratio that counts as ultra-high (whale activity).
    pub volume_ultra_ratio: f64,
    /// Wick-to-body ratio required for a pin-bar.
    pub pinbar_body_ratio: f64,
    /// Dominant-wick to opposite-wick ratio required for a pin-bar.
    pub pinbar_wick_ratio: f64,
    /// Minimal body floor as a fraction of close, guards doji bars.
    pub pinbar_body_floor: f64,
    /// RSI level at or below which price is oversold.
    pub rsi_oversold: f64,
    /// RSI level at or above which price is overbought.
    pub rsi_overbought: f64,
    /// ATR multiple subtracted from price for the stop-loss.
    pub stop_atr_multiple: f64,
    /// ATR multiple added to price for the take-profit.
    pub target_atr_multiple: f64,
    /// Default risk budget (currency units) for position sizing.
    pub default_risk_budget: f64,
    /// Return std-dev above which volatility is rated high.
    pub volatility_high_std: f64,
    /// Return std-dev above which volatility is rated medium.
    pub volatility_medium_std: f64,
    /// ATR-to-price ratio above which volatility is rated high.
    pub volatility_high_atr_ratio: f64,
    /// Per-signal score weights.
    pub weights: ScoreWeights,
    /// Label cut points on the composite score.
    pub labels: LabelThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast_period: 12,
            macd_slow_period: 26,
            macd_signal_period: 9,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            atr_period: 14,
            obv_lag: 5,
            obv_min_bars: 15,
            extremum_window: 2,
            divergence_min_bars: 20,
            divergence_sync_tolerance: 3,
            structure_window: 50,
            structure_proximity: 0.02,
            overextension_threshold: 0.15,
            sma_period: 50,
            trend_ema_period: 50,
            volume_window: 20,
            volume_high_ratio: 2.0,
            volume_ultra_ratio: 3.0,
            pinbar_body_ratio: 2.0,
            pinbar_wick_ratio: 1.5,
            pinbar_body_floor: 0.0005,
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            stop_atr_multiple: 2.0,
            target_atr_multiple: 3.0,
            default_risk_budget: 1000.0,
            volatility_high_std: 0.03,
            volatility_medium_std: 0.015,
            volatility_high_atr_ratio: 0.02,
            weights: ScoreWeights::default(),
            labels: LabelThresholds::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables, falling back to
    /// the defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(v) = env_f64("AUGUR_RISK_BUDGET") {
            config.default_risk_budget = v;
        }
        if let Some(v) = env_f64("AUGUR_VOLUME_HIGH_RATIO") {
            config.volume_high_ratio = v;
        }
        if let Some(v) = env_f64("AUGUR_VOLUME_ULTRA_RATIO") {
            config.volume_ultra_ratio = v;
        }
        if let Some(v) = env_i32("AUGUR_STRONG_BUY_THRESHOLD") {
            config.labels.strong_buy = v;
        }
        if let Some(v) = env_i32("AUGUR_BUY_THRESHOLD") {
            config.labels.buy = v;
        }
        if let Some(v) = env_i32("AUGUR_SELL_THRESHOLD") {
            config.labels.sell = v;
        }
        if let Some(v) = env_i32("AUGUR_STRONG_SELL_THRESHOLD") {
            config.labels.strong_sell = v;
        }

        config
    }
}

fn env_f64(key: &str) -> Option<f64> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

fn env_i32(key: &str) -> Option<i32> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
