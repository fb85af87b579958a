// File: crates/candela-core/src/axis.rs
// Summary: Axis label formatting and tick stride helpers.

use chrono::DateTime;

/// Price label with two decimals, shared by the y-axis and the tooltip.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// Calendar date for an epoch-millis timestamp; falls back to the raw value
/// when the timestamp is outside chrono's representable range.
pub fn format_date(timestamp_ms: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => timestamp_ms.to_string(),
    }
}

/// Index stride that keeps x-axis labels at least `min_gap_px` apart at the
/// given candle pitch. Labels are emitted at absolute indices divisible by
/// the stride, so their positions are stable under panning.
pub fn label_stride(scaled_spacing: f64, min_gap_px: f64) -> usize {
    ((min_gap_px / scaled_spacing).ceil().max(1.0)) as usize
}
