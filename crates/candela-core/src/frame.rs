// File: crates/candela-core/src/frame.rs
// Summary: Screen-space draw primitives and the per-redraw frame that holds them.

use skia_safe as skia;

/// One draw instruction, fully resolved to surface pixels. Colors carry their
/// alpha channel; there is no separate opacity field.
#[derive(Clone, Debug)]
pub enum Primitive {
    Line { x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: skia::Color },
    Polyline { points: Vec<(f32, f32)>, width: f32, color: skia::Color },
    /// Closed filled path (area/baseline fills).
    Polygon { points: Vec<(f32, f32)>, color: skia::Color },
    FillRect { x: f32, y: f32, w: f32, h: f32, color: skia::Color },
    StrokeRect { x: f32, y: f32, w: f32, h: f32, width: f32, color: skia::Color },
    Circle { x: f32, y: f32, r: f32, color: skia::Color },
    Text { text: String, x: f32, y: f32, size: f32, color: skia::Color },
}

/// Everything to draw for one redraw: rebuilt from scratch on each
/// invocation, never patched incrementally.
pub struct Frame {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
    pub primitives: Vec<Primitive>,
}

impl Frame {
    pub fn new(width: i32, height: i32, background: skia::Color) -> Self {
        Self { width, height, background, primitives: Vec::new() }
    }

    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: skia::Color) {
        self.primitives.push(Primitive::Line { x0, y0, x1, y1, width, color });
    }

    /// Push a polyline; runs of fewer than two points draw nothing and are
    /// dropped.
    pub fn polyline(&mut self, points: Vec<(f32, f32)>, width: f32, color: skia::Color) {
        if points.len() >= 2 {
            self.primitives.push(Primitive::Polyline { points, width, color });
        }
    }

    pub fn polygon(&mut self, points: Vec<(f32, f32)>, color: skia::Color) {
        if points.len() >= 3 {
            self.primitives.push(Primitive::Polygon { points, color });
        }
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: skia::Color) {
        self.primitives.push(Primitive::FillRect { x, y, w, h, color });
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, width: f32, color: skia::Color) {
        self.primitives.push(Primitive::StrokeRect { x, y, w, h, width, color });
    }

    pub fn circle(&mut self, x: f32, y: f32, r: f32, color: skia::Color) {
        self.primitives.push(Primitive::Circle { x, y, r, color });
    }

    pub fn text(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, color: skia::Color) {
        self.primitives.push(Primitive::Text { text: text.into(), x, y, size, color });
    }
}
