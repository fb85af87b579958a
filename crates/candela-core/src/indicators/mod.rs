// File: crates/candela-core/src/indicators/mod.rs
// Summary: Technical-indicator library; pure transforms over the full candle sequence.
//
// Every function returns a series aligned index-for-index with its input;
// `None` marks the warm-up region (insufficient history) and is consumed by
// the redraw engine as a line-break signal.

pub mod moving_averages;
pub mod trend;
pub mod volatility;

pub use moving_averages::{hull_ma, mcginley, median_price, sma, wma};
pub use trend::{aroon, parabolic_sar, supertrend, AroonSeries};
pub use volatility::{atr, true_range};
