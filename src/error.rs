use thiserror::Error;

/// Engine error types.
///
/// Callers can tell apart the failure families: no data at all, not
/// enough history for a mandatory indicator, a malformed input series,
/// and a numeric computation that went off the rails (NaN/inf inputs).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("empty input series")]
    EmptyInput,

    #[error("insufficient data: {required} bars required, {actual} available")]
    InsufficientData { required: usize, actual: usize },

    #[error("invalid series: {0}")]
    InvalidSeries(String),

    #[error("computation failed: {0}")]
    Computation(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
