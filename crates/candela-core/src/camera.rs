// File: crates/candela-core/src/camera.rs
// Summary: Zoom/pan camera mapping candle indices to screen pixels.

use crate::types::ChartConfig;

/// Camera over the virtual data space. `scale` is a multiplicative zoom
/// factor (1.0 = `base_spacing` pixels per candle); `offset_x` is the pixel
/// translation of index 0 and is kept in `[min(0, viewport - n*spacing), 0]`
/// so the view can never pan past either end of the data.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub scale: f64,
    pub offset_x: f64,
    base_spacing: f64,
    min_zoom: f64,
    max_zoom: f64,
    zoom_step: f64,
}

impl Camera {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            base_spacing: config.base_spacing.max(0.01),
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            zoom_step: config.zoom_step,
        }
    }

    /// Current pixels per candle.
    #[inline]
    pub fn spacing(&self) -> f64 {
        self.base_spacing * self.scale
    }

    /// Left edge of a candle slot in screen pixels.
    #[inline]
    pub fn to_px(&self, index: f64) -> f64 {
        index * self.spacing() + self.offset_x
    }

    /// Fractional candle index under a screen x position.
    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        (px - self.offset_x) / self.spacing()
    }

    /// Candle slot under a screen x position (may be out of data range).
    #[inline]
    pub fn index_at(&self, px: f64) -> i64 {
        self.from_px(px).floor() as i64
    }

    /// One discrete zoom step around `pivot_px`. Negative `wheel_delta` zooms
    /// in. The world point under the pivot stays put: after rescaling, the
    /// offset is re-derived from `world * spacing + offset == pivot`.
    pub fn zoom_at(&mut self, pivot_px: f64, wheel_delta: f64, data_len: usize, viewport_width: f64) {
        let factor = if wheel_delta < 0.0 {
            1.0 + self.zoom_step
        } else {
            1.0 / (1.0 + self.zoom_step)
        };
        let pivot_world = self.from_px(pivot_px);
        self.scale = (self.scale * factor).clamp(self.min_zoom, self.max_zoom);
        self.offset_x = pivot_px - pivot_world * self.spacing();
        self.clamp_offset(data_len, viewport_width);
    }

    /// Translate by `dx_px` screen pixels, clamped to the data bounds.
    pub fn pan(&mut self, dx_px: f64, data_len: usize, viewport_width: f64) {
        self.offset_x += dx_px;
        self.clamp_offset(data_len, viewport_width);
    }

    /// Clamp `offset_x` into `[min(0, viewport - n*spacing), 0]`. When the
    /// data is narrower than the viewport the offset pins to 0. Idempotent.
    pub fn clamp_offset(&mut self, data_len: usize, viewport_width: f64) {
        let min_offset = (viewport_width - data_len as f64 * self.spacing()).min(0.0);
        self.offset_x = self.offset_x.clamp(min_offset, 0.0);
    }

    /// Index window `[start, end)` covering the viewport, padded by two slots
    /// on the right so partially clipped candles still draw.
    pub fn visible_range(&self, data_len: usize, viewport_width: f64) -> (usize, usize) {
        if data_len == 0 {
            return (0, 0);
        }
        let spacing = self.spacing();
        let start = ((-self.offset_x / spacing).floor().max(0.0) as usize).min(data_len);
        let count = (viewport_width / spacing).ceil() as usize;
        let end = (start + count + 2).min(data_len);
        (start, end)
    }
}
