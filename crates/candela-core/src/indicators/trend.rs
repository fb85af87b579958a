//! Trend-following overlays: Parabolic SAR, SuperTrend and Aroon.

use crate::candle::Candle;
use crate::indicators::volatility::atr;

/// Parabolic stop-and-reverse. Projects `sar += af * (ep - sar)` each step;
/// flips when price crosses the SAR (low below it while up, high above it
/// while down), resetting the acceleration factor and swapping the extreme
/// point; otherwise the extreme point extends toward the new extreme and the
/// acceleration factor grows by `step` up to `max_af`.
///
/// The first output equals `candles[0].low` (trend starts up).
pub fn parabolic_sar(candles: &[Candle], step: f64, max_af: f64) -> Vec<Option<f64>> {
    let n = candles.len();
    let mut out = vec![None; n];
    if n == 0 {
        return out;
    }
    let mut is_uptrend = true;
    let mut af = step;
    let mut ep = candles[0].high;
    let mut sar = candles[0].low;
    out[0] = Some(sar);
    for i in 1..n {
        sar += af * (ep - sar);
        let c = &candles[i];
        if is_uptrend {
            if c.low < sar {
                is_uptrend = false;
                sar = ep;
                ep = c.low;
                af = step;
            } else if c.high > ep {
                ep = c.high;
                af = (af + step).min(max_af);
            }
        } else if c.high > sar {
            is_uptrend = true;
            sar = ep;
            ep = c.high;
            af = step;
        } else if c.low < ep {
            ep = c.low;
            af = (af + step).min(max_af);
        }
        out[i] = Some(sar);
    }
    out
}

/// SuperTrend over basic bands `hl2 ± multiplier * ATR(period)`. Maintains a
/// trend flag and the previous value: flips up-to-down when close crosses
/// below the lower band and down-to-up when close crosses above the upper
/// band; otherwise tracks the tighter of the basic band and the previous
/// value (min while up, max while down). `None` before `period` samples.
pub fn supertrend(candles: &[Candle], period: usize, multiplier: f64) -> Vec<Option<f64>> {
    let n = candles.len();
    let mut out = vec![None; n];
    let ranges = atr(candles, period);
    let mut is_uptrend = true;
    let mut prev: Option<f64> = None;
    for i in 0..n {
        let Some(range) = ranges[i] else { continue };
        let mid = candles[i].hl2();
        let upper = mid + multiplier * range;
        let lower = mid - multiplier * range;
        let close = candles[i].close;
        let value = match prev {
            None => {
                is_uptrend = true;
                lower
            }
            Some(p) => {
                if is_uptrend && close < lower {
                    is_uptrend = false;
                    upper
                } else if !is_uptrend && close > upper {
                    is_uptrend = true;
                    lower
                } else if is_uptrend {
                    lower.min(p)
                } else {
                    upper.max(p)
                }
            }
        };
        out[i] = Some(value);
        prev = Some(value);
    }
    out
}

/// Aroon up/down pair, aligned to the input length.
pub struct AroonSeries {
    pub up: Vec<Option<f64>>,
    pub down: Vec<Option<f64>>,
}

/// Aroon: within the trailing `period + 1` window, locate the most recent
/// highest high and lowest low (ties break toward the most recent
/// occurrence), then `up = (period - offset_since_high) / period * 100` and
/// symmetrically for `down`. Defined once a full window exists.
pub fn aroon(candles: &[Candle], period: usize) -> AroonSeries {
    let n = candles.len();
    let mut up = vec![None; n];
    let mut down = vec![None; n];
    if period == 0 {
        return AroonSeries { up, down };
    }
    for i in period..n {
        let start = i - period;
        let mut hi_idx = start;
        let mut lo_idx = start;
        for j in start..=i {
            if candles[j].high >= candles[hi_idx].high {
                hi_idx = j;
            }
            if candles[j].low <= candles[lo_idx].low {
                lo_idx = j;
            }
        }
        up[i] = Some((period - (i - hi_idx)) as f64 / period as f64 * 100.0);
        down[i] = Some((period - (i - lo_idx)) as f64 / period as f64 * 100.0);
    }
    AroonSeries { up, down }
}
