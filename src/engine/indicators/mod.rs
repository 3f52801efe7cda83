//! Technical indicator implementations.

pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod obv;
pub mod rsi;
pub mod sma;

pub use atr::Atr;
pub use bollinger::{BollingerBands, BollingerValue};
pub use ema::Ema;
pub use macd::{Macd, MacdValue};
pub use obv::Obv;
pub use rsi::Rsi;
pub use sma::Sma;
