//! Shared data types for the signal engine.

mod bar;
mod verdict;

pub use bar::{Bar, Interval};
pub use verdict::{
    round_to, CandlePattern, DivergenceKind, DivergenceSignal, MarketHealth, MarketHealthStatus,
    MeanReversion, ObvTrend, Overextension, RiskPlan, SignalLabel, StructureLevels, TrendContext,
    TrendLabel, Verdict, VolatilityInfo, VolatilityLevel, VolumeFlag,
};
