//! Moving-average overlays: SMA, WMA, Hull MA, McGinley Dynamic, Median Price.

use crate::candle::Candle;

/// Simple Moving Average of closes: arithmetic mean over the trailing
/// `period` candles. `None` for indices below `period - 1`.
///
/// Uses a rolling sum, so the cost is linear in the input length.
pub fn sma(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; candles.len()];
    if period == 0 {
        return out;
    }
    let mut sum = 0.0;
    for i in 0..candles.len() {
        sum += candles[i].close;
        if i + 1 > period {
            sum -= candles[i - period].close;
        }
        if i + 1 >= period {
            out[i] = Some(sum / period as f64);
        }
    }
    out
}

/// Weighted Moving Average over an already-derived series. Weights run
/// `period, period-1, ..., 1` with the newest sample weighted heaviest; the
/// divisor is the triangular number `period*(period+1)/2`. A window touching
/// any `None` sample yields `None`, so warm-up gaps propagate.
pub fn wma(series: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; series.len()];
    if period == 0 {
        return out;
    }
    let denom = (period * (period + 1)) as f64 / 2.0;
    for i in (period - 1)..series.len() {
        let mut acc = 0.0;
        let mut complete = true;
        for j in 0..period {
            match series[i - j] {
                Some(v) => acc += v * (period - j) as f64,
                None => {
                    complete = false;
                    break;
                }
            }
        }
        if complete {
            out[i] = Some(acc / denom);
        }
    }
    out
}

/// Hull Moving Average:
/// `WMA(2*WMA(close, period/2) - WMA(close, period), floor(sqrt(period)))`.
/// The half and square-root periods are integer-floored.
pub fn hull_ma(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let closes: Vec<Option<f64>> = candles.iter().map(|c| Some(c.close)).collect();
    let half = wma(&closes, period / 2);
    let full = wma(&closes, period);
    let diff: Vec<Option<f64>> = half
        .iter()
        .zip(&full)
        .map(|(h, f)| match (h, f) {
            (Some(h), Some(f)) => Some(2.0 * h - f),
            _ => None,
        })
        .collect();
    let sqrt_period = (period as f64).sqrt().floor() as usize;
    wma(&diff, sqrt_period)
}

/// McGinley Dynamic:
/// `mcg[0] = close[0]`, `mcg[i] = mcg[i-1] + (close[i] - mcg[i-1]) / (k * (close[i]/mcg[i-1])^4)`.
/// Stateful: each value depends on the previous *output*, not the previous
/// close. The recurrence is kept exactly as written; a non-finite value
/// (possible when a close reaches zero) maps to the `None` sentinel and
/// carries through the remaining recurrence.
pub fn mcginley(candles: &[Candle], k: f64) -> Vec<Option<f64>> {
    let mut out = vec![None; candles.len()];
    if candles.is_empty() {
        return out;
    }
    let mut prev = candles[0].close;
    out[0] = Some(prev);
    for i in 1..candles.len() {
        let close = candles[i].close;
        let next = prev + (close - prev) / (k * (close / prev).powi(4));
        out[i] = next.is_finite().then_some(next);
        prev = next;
    }
    out
}

/// Median Price: `(high + low) / 2` per candle. No warm-up.
pub fn median_price(candles: &[Candle]) -> Vec<Option<f64>> {
    candles.iter().map(|c| Some(c.hl2())).collect()
}
