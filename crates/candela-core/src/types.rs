// File: crates/candela-core/src/types.rs
// Summary: Shared configuration and surface constants.

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 500;

/// Tunable chart behavior.
/// Contract: `min_zoom > 0`, `min_zoom <= max_zoom`, `base_spacing > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    /// Smallest allowed camera scale.
    pub min_zoom: f64,
    /// Largest allowed camera scale.
    pub max_zoom: f64,
    /// Fractional scale change per wheel step (0.1 => one step multiplies or
    /// divides the scale by 1.1).
    pub zoom_step: f64,
    /// Horizontal pixels per candle at scale 1.0.
    pub base_spacing: f64,
    /// Height of the x-axis label strip at the bottom of the surface.
    pub axis_height: i32,
    /// Height of the secondary pane used by oscillator-style indicators.
    pub secondary_pane_height: i32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.1,
            max_zoom: 10.0,
            zoom_step: 0.1,
            base_spacing: 10.0,
            axis_height: 30,
            secondary_pane_height: 100,
        }
    }
}
