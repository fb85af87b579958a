//! Volatility primitives: True Range and Average True Range.

use crate::candle::Candle;

/// True Range of a single candle: the greatest of the candle's own range,
/// `|high - prev_close|` and `|low - prev_close|`. Without a previous close
/// (the first candle) it is just `high - low`.
pub fn true_range(candle: &Candle, prev_close: Option<f64>) -> f64 {
    match prev_close {
        Some(prev) => candle
            .range()
            .max((candle.high - prev).abs())
            .max((candle.low - prev).abs()),
        None => candle.range(),
    }
}

/// Average True Range: trailing simple average of true range over `period`.
/// `None` for indices below `period`; the first defined window covers the
/// `period` ranges measured against a previous close.
pub fn atr(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let n = candles.len();
    let mut out = vec![None; n];
    if period == 0 || n == 0 {
        return out;
    }
    let tr: Vec<f64> = candles
        .iter()
        .enumerate()
        .map(|(i, c)| true_range(c, (i > 0).then(|| candles[i - 1].close)))
        .collect();
    for i in period..n {
        let window = &tr[i + 1 - period..=i];
        out[i] = Some(window.iter().sum::<f64>() / period as f64);
    }
    out
}
