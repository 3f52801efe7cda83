//! Augur - technical signal engine for OHLCV market data.
//!
//! Derives a composite technical-analysis verdict from a price/volume
//! series: a directional bias, a confidence score, supporting evidence,
//! and an ATR-based risk plan. Data retrieval, chart rendering, and
//! message formatting are the embedding application's concern; this
//! crate is the pure analysis core.

pub mod config;
pub mod engine;
pub mod error;
pub mod types;

pub use config::{EngineConfig, LabelThresholds, ScoreWeights};
pub use engine::SignalEngine;
pub use error::{EngineError, Result};
pub use types::*;
