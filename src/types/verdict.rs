use serde::{Deserialize, Serialize};

/// Discrete signal label derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalLabel {
    StrongBuy,
    Buy,
    Neutral,
    Sell,
    StrongSell,
}

impl SignalLabel {
    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            SignalLabel::StrongBuy => "Strong Buy",
            SignalLabel::Buy => "Buy",
            SignalLabel::Neutral => "Neutral",
            SignalLabel::Sell => "Sell",
            SignalLabel::StrongSell => "Strong Sell",
        }
    }
}

/// Kind of a confirmed price/RSI divergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivergenceKind {
    Bullish,
    Bearish,
}

/// A confirmed divergence between price and RSI extrema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivergenceSignal {
    pub kind: DivergenceKind,
    pub description: String,
}

/// Higher-timeframe trend classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendLabel {
    StrongUp,
    WeakUp,
    StrongDown,
    WeakDown,
    Neutral,
    NoData,
}

impl TrendLabel {
    /// Whether the higher timeframe trends upward.
    pub fn is_up(&self) -> bool {
        matches!(self, TrendLabel::StrongUp | TrendLabel::WeakUp)
    }

    /// Whether the higher timeframe trends downward.
    pub fn is_down(&self) -> bool {
        matches!(self, TrendLabel::StrongDown | TrendLabel::WeakDown)
    }
}

/// Higher-timeframe trend context fed into scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendContext {
    pub label: TrendLabel,
    pub description: String,
}

/// Recent support/resistance levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureLevels {
    pub support: f64,
    pub resistance: f64,
}

/// Mean-reversion overextension direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overextension {
    Up,
    Down,
}

/// Distance of price from its moving average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeanReversion {
    /// Signed relative distance from the SMA, e.g. 0.18 = 18% above.
    pub distance: f64,
    /// Set when the distance exceeds the overextension threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<Overextension>,
}

/// Single-bar candlestick classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandlePattern {
    BullishPinbar,
    BearishPinbar,
}

/// Abnormal-volume classification for the current bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeFlag {
    UltraHigh,
    High,
}

/// On-balance-volume trend direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObvTrend {
    Rising,
    Falling,
}

/// Coarse volatility rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityLevel {
    Low,
    Medium,
    High,
}

/// Volatility metrics for the analyzed series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolatilityInfo {
    pub level: VolatilityLevel,
    /// Sample standard deviation of close-to-close returns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct_std: Option<f64>,
    /// Average true range of the series.
    pub atr: f64,
}

/// Position-sizing guidance derived from the ATR risk plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskPlan {
    /// Reward-to-risk ratio of the stop/target pair.
    pub rr_ratio: f64,
    /// Units purchasable so that a stop-out loses at most the budget.
    pub position_size: u64,
    /// Risk budget the position size was computed for.
    pub risk_budget: f64,
}

/// Composite verdict for one analyzed series.
///
/// Either fully populated or not produced at all; optional fields are
/// absent when their sub-analysis lacked data, never zeroed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Composite integer score, sum of the individual signal weights.
    pub score: i32,
    /// Discrete label derived from the score.
    pub label: SignalLabel,
    /// Last close, rounded.
    pub price: f64,
    /// Current RSI value, rounded.
    pub rsi: f64,
    /// Evidence strings in evaluation order.
    pub details: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obv_trend: Option<ObvTrend>,
    pub volatility: VolatilityInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divergence: Option<DivergenceSignal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_context: Option<TrendContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<StructureLevels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_reversion: Option<MeanReversion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candle: Option<CandlePattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_flag: Option<VolumeFlag>,
    /// ATR-based stop-loss suggestion.
    pub stop_loss: f64,
    /// ATR-based take-profit suggestion.
    pub take_profit: f64,
    /// Absent when the stop distance collapses to zero (flat series).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskPlan>,
    /// Timestamp of the last analyzed bar (milliseconds).
    pub time: i64,
}

/// Benchmark market regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketHealthStatus {
    Bull,
    Correction,
    Bear,
    ReliefRally,
    NoData,
    Error,
}

/// Benchmark regime classification with fixed commentary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketHealth {
    pub status: MarketHealthStatus,
    pub description: String,
}

/// Round to a fixed number of decimal places at the output boundary.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
