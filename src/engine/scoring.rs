//! Composite scoring and ATR-based risk planning.

use crate::config::EngineConfig;
use crate::engine::indicators::{BollingerValue, MacdValue};
use crate::types::{
    round_to, Bar, CandlePattern, DivergenceKind, DivergenceSignal, MeanReversion, ObvTrend,
    Overextension, RiskPlan, SignalLabel, StructureLevels, TrendContext, VolatilityInfo,
    VolatilityLevel, Verdict, VolumeFlag,
};

/// Everything the scoring pass consumes, computed upstream.
///
/// Mandatory inputs (price, RSI, ATR, the last bar) are plain values;
/// everything else degrades to None when its sub-analysis lacked data.
pub(crate) struct Snapshot {
    pub last_bar: Bar,
    pub rsi: f64,
    pub atr: f64,
    pub macd: Option<MacdValue>,
    pub bollinger: Option<BollingerValue>,
    pub obv_trend: Option<ObvTrend>,
    pub divergence: Option<DivergenceSignal>,
    pub trend_context: Option<TrendContext>,
    pub levels: Option<StructureLevels>,
    pub mean_reversion: Option<MeanReversion>,
    pub candle: Option<CandlePattern>,
    pub volume_flag: Option<VolumeFlag>,
    pub pct_std: Option<f64>,
}

/// Run the weighted accumulation pass and assemble the verdict.
///
/// Evaluation order fixes both the score bookkeeping (the MTF bonus
/// looks at the running total) and the order of the evidence list.
pub(crate) fn build_verdict(
    snapshot: Snapshot,
    config: &EngineConfig,
    risk_budget: Option<f64>,
) -> Verdict {
    let weights = &config.weights;
    let price = snapshot.last_bar.close;
    let mut score = 0;
    let mut details = Vec::new();

    // RSI
    if snapshot.rsi < config.rsi_oversold {
        score += weights.rsi;
        details.push("RSI: oversold, potential bounce zone".to_string());
    } else if snapshot.rsi > config.rsi_overbought {
        score -= weights.rsi;
        details.push("RSI: overbought, elevated risk".to_string());
    }

    // MACD
    if let Some(macd) = &snapshot.macd {
        if macd.macd > macd.signal {
            score += weights.macd;
            details.push("MACD: line above signal (buy side)".to_string());
        } else {
            score -= weights.macd;
            details.push("MACD: line below signal (sell side)".to_string());
        }
    }

    // Bollinger
    if let Some(bb) = &snapshot.bollinger {
        if price < bb.lower {
            score += weights.bollinger;
            details.push("Bollinger: close below lower band, stretched down".to_string());
        }
    }

    // Structure
    if let Some(levels) = &snapshot.levels {
        if near_level(price, levels.support, config.structure_proximity) {
            score += weights.structure;
            details.push(format!(
                "Structure: price near support at {}",
                round_to(levels.support, 2)
            ));
        } else if near_level(price, levels.resistance, config.structure_proximity) {
            score -= weights.structure;
            details.push(format!(
                "Structure: price near resistance at {}",
                round_to(levels.resistance, 2)
            ));
        }
    }

    // Divergence
    if let Some(divergence) = &snapshot.divergence {
        match divergence.kind {
            DivergenceKind::Bullish => {
                score += weights.divergence;
                details.push(format!("Divergence: bullish ({})", divergence.description));
            }
            DivergenceKind::Bearish => {
                score -= weights.divergence;
                details.push(format!("Divergence: bearish ({})", divergence.description));
            }
        }
    }

    // Abnormal volume, signed by the bar's own direction
    if snapshot.volume_flag.is_some() {
        if snapshot.last_bar.is_bullish() {
            score += weights.volume;
            details.push("Volume: abnormal volume on an up bar".to_string());
        } else {
            score -= weights.volume;
            details.push("Volume: abnormal volume on a down bar".to_string());
        }
    }

    // Candle pattern
    match snapshot.candle {
        Some(CandlePattern::BullishPinbar) => {
            score += weights.candle;
            details.push("Candle: bullish pin-bar, rejection from below".to_string());
        }
        Some(CandlePattern::BearishPinbar) => {
            score -= weights.candle;
            details.push("Candle: bearish pin-bar, rejection from above".to_string());
        }
        None => {}
    }

    // Higher-timeframe agreement bonus on the running total
    if let Some(trend) = &snapshot.trend_context {
        if trend.label.is_up() && score > 0 {
            score += weights.mtf;
            details.push("Trend: higher timeframe confirms the long bias".to_string());
        } else if trend.label.is_down() && score < 0 {
            score -= weights.mtf;
            details.push("Trend: higher timeframe confirms the short bias".to_string());
        }
    }

    // Overextension is evidence only, it never moves the score.
    if let Some(mr) = &snapshot.mean_reversion {
        match mr.flag {
            Some(Overextension::Up) => details.push(format!(
                "Mean reversion: {:.0}% above SMA{}, overextended",
                mr.distance * 100.0,
                config.sma_period
            )),
            Some(Overextension::Down) => details.push(format!(
                "Mean reversion: {:.0}% below SMA{}, overextended",
                mr.distance.abs() * 100.0,
                config.sma_period
            )),
            None => {}
        }
    }

    let label = label_for(score, config);
    let volatility = volatility_info(price, snapshot.atr, snapshot.pct_std, config);

    // Risk plan is long-biased regardless of label.
    let stop_loss = price - config.stop_atr_multiple * snapshot.atr;
    let take_profit = price + config.target_atr_multiple * snapshot.atr;
    let risk = risk_plan(price, stop_loss, take_profit, risk_budget, config);

    Verdict {
        score,
        label,
        price: round_to(price, 2),
        rsi: round_to(snapshot.rsi, 2),
        details,
        obv_trend: snapshot.obv_trend,
        volatility,
        divergence: snapshot.divergence,
        trend_context: snapshot.trend_context,
        levels: snapshot.levels.map(|l| StructureLevels {
            support: round_to(l.support, 2),
            resistance: round_to(l.resistance, 2),
        }),
        mean_reversion: snapshot.mean_reversion,
        candle: snapshot.candle,
        volume_flag: snapshot.volume_flag,
        stop_loss: round_to(stop_loss, 4),
        take_profit: round_to(take_profit, 4),
        risk,
        time: snapshot.last_bar.time,
    }
}

fn near_level(price: f64, level: f64, proximity: f64) -> bool {
    level != 0.0 && ((price - level) / level).abs() <= proximity
}

fn label_for(score: i32, config: &EngineConfig) -> SignalLabel {
    let labels = &config.labels;
    if score >= labels.strong_buy {
        SignalLabel::StrongBuy
    } else if score >= labels.buy {
        SignalLabel::Buy
    } else if score <= labels.strong_sell {
        SignalLabel::StrongSell
    } else if score <= labels.sell {
        SignalLabel::Sell
    } else {
        SignalLabel::Neutral
    }
}

fn volatility_info(
    price: f64,
    atr: f64,
    pct_std: Option<f64>,
    config: &EngineConfig,
) -> VolatilityInfo {
    let std = pct_std.unwrap_or(0.0);
    let atr_ratio = if price != 0.0 { atr / price } else { 0.0 };

    let level = if std > config.volatility_high_std || atr_ratio > config.volatility_high_atr_ratio
    {
        VolatilityLevel::High
    } else if std > config.volatility_medium_std {
        VolatilityLevel::Medium
    } else {
        VolatilityLevel::Low
    };

    VolatilityInfo {
        level,
        pct_std: pct_std.map(|v| round_to(v, 5)),
        atr: round_to(atr, 6),
    }
}

fn risk_plan(
    price: f64,
    stop_loss: f64,
    take_profit: f64,
    risk_budget: Option<f64>,
    config: &EngineConfig,
) -> Option<RiskPlan> {
    let risk_per_unit = price - stop_loss;
    if risk_per_unit <= 0.0 {
        return None;
    }

    let budget = risk_budget.unwrap_or(config.default_risk_budget);
    let rr_ratio = (take_profit - price) / risk_per_unit;

    Some(RiskPlan {
        rr_ratio: round_to(rr_ratio, 2),
        position_size: (budget / risk_per_unit).floor().max(0.0) as u64,
        risk_budget: budget,
    })
}

/// Sample standard deviation of close-to-close percent returns.
pub(crate) fn pct_return_std(closes: &[f64]) -> Option<f64> {
    if closes.len() < 3 {
        return None;
    }

    let mut returns = Vec::with_capacity(closes.len() - 1);
    for i in 1..closes.len() {
        if closes[i - 1] != 0.0 {
            returns.push((closes[i] - closes[i - 1]) / closes[i - 1]);
        }
    }
    if returns.len() < 2 {
        return None;
    }

    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>()
        / (returns.len() - 1) as f64;
    Some(variance.sqrt())
}
