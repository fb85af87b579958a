// File: crates/candela-core/src/chart.rs
// Summary: Chart state, the per-frame redraw pipeline, and Skia CPU raster painting.

use std::sync::Arc;

use skia_safe as skia;

use crate::axis;
use crate::camera::Camera;
use crate::candle::Candle;
use crate::frame::{Frame, Primitive};
use crate::grid::linspace;
use crate::indicators;
use crate::theme::Theme;
use crate::types::{ChartConfig, HEIGHT, WIDTH};

/// Which primitive-emission rule applies per candle/series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartType {
    Candlestick,
    HollowCandles,
    Line,
    Area,
    VolumeBars,
    StepLine,
    LineWithMarkers,
    Bars,
    Hlc,
    Baseline,
    Columns,
}

impl ChartType {
    pub const ALL: [ChartType; 11] = [
        ChartType::Candlestick,
        ChartType::HollowCandles,
        ChartType::Line,
        ChartType::Area,
        ChartType::VolumeBars,
        ChartType::StepLine,
        ChartType::LineWithMarkers,
        ChartType::Bars,
        ChartType::Hlc,
        ChartType::Baseline,
        ChartType::Columns,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Candlestick => "candlestick",
            ChartType::HollowCandles => "hollow-candles",
            ChartType::Line => "line",
            ChartType::Area => "area",
            ChartType::VolumeBars => "volume-bars",
            ChartType::StepLine => "step-line",
            ChartType::LineWithMarkers => "line-with-markers",
            ChartType::Bars => "bars",
            ChartType::Hlc => "hlc",
            ChartType::Baseline => "baseline",
            ChartType::Columns => "columns",
        }
    }

    /// Types drawn as one continuous polyline across the visible window.
    fn is_line_family(&self) -> bool {
        matches!(
            self,
            ChartType::Line
                | ChartType::Area
                | ChartType::StepLine
                | ChartType::LineWithMarkers
                | ChartType::Baseline
        )
    }

    /// Types whose fill closes down to the chart floor.
    fn fills_to_floor(&self) -> bool {
        matches!(self, ChartType::Area | ChartType::Baseline)
    }
}

/// Overlay selection; at most one indicator is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorKind {
    MaCross,
    McGinleyDynamic,
    MedianPrice,
    HullMa,
    ParabolicSar,
    SuperTrend,
    Aroon,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 7] = [
        IndicatorKind::MaCross,
        IndicatorKind::McGinleyDynamic,
        IndicatorKind::MedianPrice,
        IndicatorKind::HullMa,
        IndicatorKind::ParabolicSar,
        IndicatorKind::SuperTrend,
        IndicatorKind::Aroon,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IndicatorKind::MaCross => "ma-cross",
            IndicatorKind::McGinleyDynamic => "mcginley-dynamic",
            IndicatorKind::MedianPrice => "median-price",
            IndicatorKind::HullMa => "hull-ma",
            IndicatorKind::ParabolicSar => "parabolic-sar",
            IndicatorKind::SuperTrend => "supertrend",
            IndicatorKind::Aroon => "aroon",
        }
    }

    /// Indicators rendered in the secondary pane below the chart body.
    fn uses_secondary_pane(&self) -> bool {
        matches!(self, IndicatorKind::Aroon)
    }
}

/// Per-invocation surface parameters.
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub draw_labels: bool,
    /// Pointer position in surface pixels; drives crosshair and tooltip.
    pub crosshair: Option<(f32, f32)>,
    pub show_tooltip: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::dark(),
            draw_labels: true,
            crosshair: None,
            show_tooltip: true,
        }
    }
}

/// Errors from the painting layer.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create raster surface")]
    SurfaceCreation,
    #[error("PNG encoding failed")]
    PngEncode,
    #[error("pixel readback failed")]
    PixelReadback,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One chart instance: a read-only candle sequence plus the mutable view
/// state (camera, chart type, indicator selection). Multiple instances may
/// share the same candle storage; each owns its camera.
pub struct Chart {
    candles: Arc<[Candle]>,
    pub camera: Camera,
    pub chart_type: ChartType,
    pub indicator: Option<IndicatorKind>,
    pub config: ChartConfig,
}

impl Chart {
    pub fn new(candles: impl Into<Arc<[Candle]>>) -> Self {
        Self::with_config(candles, ChartConfig::default())
    }

    pub fn with_config(candles: impl Into<Arc<[Candle]>>, config: ChartConfig) -> Self {
        Self {
            candles: candles.into(),
            camera: Camera::new(&config),
            chart_type: ChartType::Candlestick,
            indicator: None,
            config,
        }
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    /// Shared handle to the candle storage, for sibling panes over the same
    /// data.
    pub fn candles_handle(&self) -> Arc<[Candle]> {
        Arc::clone(&self.candles)
    }

    /// Rebuild the full primitive list for the current camera, chart type and
    /// indicator selection. Stateless: nothing carries over between frames.
    pub fn build_frame(&self, opts: &RenderOptions) -> Frame {
        let width = opts.width.max(1);
        let height = opts.height.max(1);
        let theme = &opts.theme;
        let mut frame = Frame::new(width, height, theme.background);

        let secondary = match self.indicator {
            Some(kind) if kind.uses_secondary_pane() => self.config.secondary_pane_height,
            _ => 0,
        };
        let body_height = (height - self.config.axis_height - secondary).max(1);

        let n = self.candles.len();
        let spacing = self.camera.spacing();
        let candle_width = (spacing * 0.6) as f32;
        let (start, end) = self.camera.visible_range(n, width as f64);
        let visible = &self.candles[start..end];
        if visible.is_empty() {
            return frame;
        }

        // Vertical scale over the visible window only; the price axis
        // re-scales as the user pans.
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for c in visible {
            min = min.min(c.low);
            max = max.max(c.high);
        }
        let range = if max - min > 0.0 { max - min } else { 1.0 };
        let scale_y = body_height as f64 / range;
        let offset_x = self.camera.offset_x;
        let x_for = |idx: usize| (idx as f64 * spacing + offset_x) as f32 + candle_width / 2.0;
        let y_for = |price: f64| (body_height as f64 - (price - min) * scale_y) as f32;

        self.emit_price_grid(&mut frame, opts, min, range, &y_for);
        self.emit_series(&mut frame, opts, body_height, start, visible, candle_width, &x_for, &y_for);
        if let Some(kind) = self.indicator {
            self.emit_indicator(&mut frame, opts, body_height, secondary, start, end, &x_for, &y_for, kind);
        }
        if opts.draw_labels {
            self.emit_x_labels(&mut frame, opts, height, spacing, start, end);
        }
        self.emit_crosshair(&mut frame, opts, body_height, spacing, candle_width);
        frame
    }

    fn emit_price_grid(
        &self,
        frame: &mut Frame,
        opts: &RenderOptions,
        min: f64,
        range: f64,
        y_for: &dyn Fn(f64) -> f32,
    ) {
        let theme = &opts.theme;
        let steps = 10usize;
        for price in linspace(min, min + range, steps + 1) {
            let y = y_for(price);
            frame.line(0.0, y, opts.width as f32, y, 0.5, theme.grid);
            if opts.draw_labels {
                frame.text(axis::format_price(price), 5.0, y - 6.0, 10.0, theme.axis_label);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn emit_series(
        &self,
        frame: &mut Frame,
        opts: &RenderOptions,
        body_height: i32,
        start: usize,
        visible: &[Candle],
        candle_width: f32,
        x_for: &dyn Fn(usize) -> f32,
        y_for: &dyn Fn(f64) -> f32,
    ) {
        let theme = &opts.theme;
        let floor = body_height as f32;

        for (i, c) in visible.iter().enumerate() {
            let x = x_for(start + i);
            let color = if c.is_bullish() { theme.bull } else { theme.bear };
            match self.chart_type {
                ChartType::Candlestick | ChartType::HollowCandles => {
                    let open_y = y_for(c.open);
                    let close_y = y_for(c.close);
                    frame.line(x, y_for(c.high), x, y_for(c.low), 1.0, color);
                    let top = open_y.min(close_y);
                    let body = (close_y - open_y).abs().max(1.0);
                    if self.chart_type == ChartType::Candlestick {
                        frame.fill_rect(x - candle_width / 2.0, top, candle_width, body, color);
                    } else {
                        frame.stroke_rect(x - candle_width / 2.0, top, candle_width, body, 1.0, color);
                    }
                }
                ChartType::Bars | ChartType::Hlc => {
                    frame.line(x, y_for(c.high), x, y_for(c.low), 1.0, color);
                    if self.chart_type == ChartType::Bars {
                        let open_y = y_for(c.open);
                        frame.line(x - 4.0, open_y, x, open_y, 1.0, color);
                    }
                    let close_y = y_for(c.close);
                    frame.line(x, close_y, x + 4.0, close_y, 1.0, color);
                }
                ChartType::VolumeBars | ChartType::Columns => {
                    let y = y_for(c.close);
                    frame.fill_rect(x - candle_width / 2.0, y, candle_width, floor - y, color);
                }
                ChartType::LineWithMarkers => {
                    frame.circle(x, y_for(c.close), 2.0, theme.marker);
                }
                _ => {}
            }
        }

        if self.chart_type.is_line_family() {
            let mut points: Vec<(f32, f32)> = Vec::with_capacity(visible.len() * 2);
            for (i, c) in visible.iter().enumerate() {
                let x = x_for(start + i);
                let y = y_for(c.close);
                if self.chart_type == ChartType::StepLine {
                    if let Some(&(_, prev_y)) = points.last() {
                        points.push((x, prev_y));
                    }
                }
                points.push((x, y));
            }
            if self.chart_type.fills_to_floor() {
                let mut fill = points.clone();
                fill.push((x_for(start + visible.len() - 1), floor));
                fill.push((x_for(start), floor));
                frame.polygon(fill, theme.area_fill);
            }
            frame.polyline(points, 1.0, theme.line_stroke);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn emit_indicator(
        &self,
        frame: &mut Frame,
        opts: &RenderOptions,
        body_height: i32,
        secondary: i32,
        start: usize,
        end: usize,
        x_for: &dyn Fn(usize) -> f32,
        y_for: &dyn Fn(f64) -> f32,
        kind: IndicatorKind,
    ) {
        let theme = &opts.theme;
        let data = &self.candles;
        match kind {
            IndicatorKind::MaCross => {
                let short = indicators::sma(data, 5);
                let long = indicators::sma(data, 10);
                overlay_polyline(frame, &short, start, end, x_for, y_for, 1.5, theme.ma_short);
                overlay_polyline(frame, &long, start, end, x_for, y_for, 1.5, theme.ma_long);
            }
            IndicatorKind::McGinleyDynamic => {
                let series = indicators::mcginley(data, 0.6);
                overlay_polyline(frame, &series, start, end, x_for, y_for, 1.5, theme.mcginley);
            }
            IndicatorKind::MedianPrice => {
                let series = indicators::median_price(data);
                overlay_polyline(frame, &series, start, end, x_for, y_for, 1.5, theme.median);
            }
            IndicatorKind::HullMa => {
                let series = indicators::hull_ma(data, 9);
                overlay_polyline(frame, &series, start, end, x_for, y_for, 1.5, theme.hull);
            }
            IndicatorKind::ParabolicSar => {
                let series = indicators::parabolic_sar(data, 0.02, 0.2);
                for (i, v) in series.iter().enumerate().take(end).skip(start) {
                    if let Some(v) = v {
                        frame.circle(x_for(i), y_for(*v), 2.0, theme.sar);
                    }
                }
            }
            IndicatorKind::SuperTrend => {
                let series = indicators::supertrend(data, 10, 3.0);
                overlay_polyline(frame, &series, start, end, x_for, y_for, 2.0, theme.supertrend);
            }
            IndicatorKind::Aroon => {
                let series = indicators::aroon(data, 14);
                let pane_top = body_height as f32;
                let pane_height = secondary.max(1) as f32;
                // Oscillator pane on a fixed 0..100 scale.
                let y_pct = move |pct: f64| pane_top + (1.0 - (pct / 100.0) as f32) * pane_height;
                frame.line(0.0, pane_top, opts.width as f32, pane_top, 0.5, theme.grid);
                overlay_polyline(frame, &series.up, start, end, x_for, &y_pct, 1.5, theme.aroon_up);
                overlay_polyline(frame, &series.down, start, end, x_for, &y_pct, 1.5, theme.aroon_down);
            }
        }
    }

    fn emit_x_labels(
        &self,
        frame: &mut Frame,
        opts: &RenderOptions,
        height: i32,
        spacing: f64,
        start: usize,
        end: usize,
    ) {
        let theme = &opts.theme;
        // Stride keyed on the absolute index, so label positions survive
        // panning instead of jumping with the window start.
        let skip = axis::label_stride(spacing, 80.0);
        let label_y = (height - self.config.axis_height) as f32 + 5.0;
        for idx in start..end {
            if idx % skip != 0 {
                continue;
            }
            let x = (idx as f64 * spacing + self.camera.offset_x) as f32;
            let date = axis::format_date(self.candles[idx].timestamp);
            frame.text(date, x - 10.0, label_y, 10.0, theme.axis_label);
        }
    }

    fn emit_crosshair(
        &self,
        frame: &mut Frame,
        opts: &RenderOptions,
        body_height: i32,
        spacing: f64,
        candle_width: f32,
    ) {
        let Some((mx, my)) = opts.crosshair else { return };
        let theme = &opts.theme;
        let index = self.camera.index_at(mx as f64);
        // Outside the data range both guides and the tooltip stay hidden.
        if index < 0 || index as usize >= self.candles.len() {
            return;
        }
        let idx = index as usize;
        let x = (idx as f64 * spacing + self.camera.offset_x) as f32 + candle_width / 2.0;
        frame.line(x, 0.0, x, body_height as f32, 1.0, theme.crosshair);
        frame.line(0.0, my, opts.width as f32, my, 1.0, theme.crosshair);
        if opts.show_tooltip {
            let c = &self.candles[idx];
            let text = format!(
                "O:{} H:{} L:{} C:{}",
                axis::format_price(c.open),
                axis::format_price(c.high),
                axis::format_price(c.low),
                axis::format_price(c.close),
            );
            frame.text(text, 80.0, 10.0, 12.0, theme.tooltip_text);
        }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster
    /// surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let data = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Render to PNG-encoded bytes without touching the filesystem.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let frame = self.build_frame(opts);
        let mut surface = skia::surfaces::raster_n32_premul((frame.width, frame.height))
            .ok_or(RenderError::SurfaceCreation)?;
        paint_frame(surface.canvas(), &frame);
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::PngEncode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a tightly packed RGBA8 buffer. Returns `(pixels, width,
    /// height, row_bytes)` for blitting into a window surface.
    pub fn render_to_rgba8(
        &self,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let frame = self.build_frame(opts);
        let mut surface = skia::surfaces::raster_n32_premul((frame.width, frame.height))
            .ok_or(RenderError::SurfaceCreation)?;
        paint_frame(surface.canvas(), &frame);
        let info = skia::ImageInfo::new(
            (frame.width, frame.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let row_bytes = frame.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * frame.height as usize];
        if !surface
            .canvas()
            .read_pixels(&info, &mut pixels, row_bytes, (0, 0))
        {
            return Err(RenderError::PixelReadback);
        }
        Ok((pixels, frame.width, frame.height, row_bytes))
    }
}

/// Emit a derived series as a polyline that breaks at warm-up gaps: a new
/// subpath starts whenever the current or previous sample is the "no value"
/// sentinel, so gaps are never bridged by interpolation.
fn overlay_polyline(
    frame: &mut Frame,
    series: &[Option<f64>],
    start: usize,
    end: usize,
    x_for: &dyn Fn(usize) -> f32,
    y_for: &dyn Fn(f64) -> f32,
    width: f32,
    color: skia::Color,
) {
    let mut run: Vec<(f32, f32)> = Vec::new();
    for (i, v) in series.iter().enumerate().take(end).skip(start) {
        match v {
            Some(v) => run.push((x_for(i), y_for(*v))),
            None => {
                frame.polyline(std::mem::take(&mut run), width, color);
            }
        }
    }
    frame.polyline(run, width, color);
}

// ---- painting ---------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn path_from(points: &[(f32, f32)], close: bool) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some(&(x0, y0)) = points.first() {
        path.move_to((x0, y0));
        for &(x, y) in &points[1..] {
            path.line_to((x, y));
        }
        if close {
            path.close();
        }
    }
    path
}

/// Paint a frame's primitives onto a Skia canvas in emission order.
pub fn paint_frame(canvas: &skia::Canvas, frame: &Frame) {
    canvas.clear(frame.background);
    for prim in &frame.primitives {
        match prim {
            Primitive::Line { x0, y0, x1, y1, width, color } => {
                canvas.draw_line((*x0, *y0), (*x1, *y1), &stroke_paint(*color, *width));
            }
            Primitive::Polyline { points, width, color } => {
                canvas.draw_path(&path_from(points, false), &stroke_paint(*color, *width));
            }
            Primitive::Polygon { points, color } => {
                canvas.draw_path(&path_from(points, true), &fill_paint(*color));
            }
            Primitive::FillRect { x, y, w, h, color } => {
                let rect = skia::Rect::from_xywh(*x, *y, *w, *h);
                canvas.draw_rect(rect, &fill_paint(*color));
            }
            Primitive::StrokeRect { x, y, w, h, width, color } => {
                let rect = skia::Rect::from_xywh(*x, *y, *w, *h);
                canvas.draw_rect(rect, &stroke_paint(*color, *width));
            }
            Primitive::Circle { x, y, r, color } => {
                canvas.draw_circle((*x, *y), *r, &fill_paint(*color));
            }
            Primitive::Text { text, x, y, size, color } => {
                let mut font = skia::Font::default();
                font.set_size(*size);
                canvas.draw_str(text, (*x, *y + *size), &font, &fill_paint(*color));
            }
        }
    }
}
