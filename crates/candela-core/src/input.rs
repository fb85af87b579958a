// File: crates/candela-core/src/input.rs
// Summary: Platform-agnostic pointer/wheel state machine driving camera mutations.

use crate::chart::Chart;

/// Raw input in surface pixel coordinates. The host event loop maps its
/// native events into these before handing them to the controller.
#[derive(Clone, Copy, Debug)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    /// Covers release inside and outside the surface alike.
    PointerUp,
    PointerLeave,
    /// Vertical wheel motion at pointer position (`x`, `y`). With
    /// `pan_modifier` set the motion pans horizontally instead of zooming.
    Wheel { delta_y: f64, x: f32, y: f32, pan_modifier: bool },
}

/// Translates raw pointer/wheel events into camera mutations on a chart.
/// Drag state machine: idle until pointer-down, dragging until pointer-up.
/// Each handled event reports whether a redraw is needed; the host decides
/// when to repaint (coalescing is its business, not ours).
#[derive(Debug, Default)]
pub struct InteractionController {
    dragging: bool,
    last_x: f32,
    hover: Option<(f32, f32)>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer position, for crosshair/tooltip rendering.
    pub fn hover(&self) -> Option<(f32, f32)> {
        self.hover
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Apply one event against a chart. `viewport_width` is the drawable
    /// width of this chart's surface, needed for pan/zoom clamping.
    pub fn handle(&mut self, event: InputEvent, chart: &mut Chart, viewport_width: f64) -> bool {
        let data_len = chart.candles().len();
        match event {
            InputEvent::PointerDown { x, y } => {
                self.dragging = true;
                self.last_x = x;
                self.hover = Some((x, y));
                false
            }
            InputEvent::PointerMove { x, y } => {
                self.hover = Some((x, y));
                if self.dragging {
                    let dx = (x - self.last_x) as f64;
                    self.last_x = x;
                    chart.camera.pan(dx, data_len, viewport_width);
                }
                // Hover moved, so the crosshair needs a rebuild either way.
                true
            }
            InputEvent::PointerUp => {
                self.dragging = false;
                false
            }
            InputEvent::PointerLeave => {
                self.hover = None;
                true
            }
            InputEvent::Wheel { delta_y, x, pan_modifier, .. } => {
                if pan_modifier {
                    chart.camera.pan(-delta_y, data_len, viewport_width);
                } else {
                    chart.camera.zoom_at(x as f64, delta_y, data_len, viewport_width);
                }
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candle::Candle;

    fn chart(n: usize) -> Chart {
        let candles: Vec<Candle> = (0..n)
            .map(|i| Candle::new(i as i64, 100.0, 105.0, 95.0, 101.0))
            .collect();
        Chart::new(candles)
    }

    #[test]
    fn drag_pans_camera() {
        let mut chart = chart(500);
        let mut ctl = InteractionController::new();
        ctl.handle(InputEvent::PointerDown { x: 400.0, y: 100.0 }, &mut chart, 800.0);
        assert!(ctl.is_dragging());
        ctl.handle(InputEvent::PointerMove { x: 360.0, y: 100.0 }, &mut chart, 800.0);
        assert_eq!(chart.camera.offset_x, -40.0);
        // Delta is measured from the last move, not the anchor.
        ctl.handle(InputEvent::PointerMove { x: 350.0, y: 100.0 }, &mut chart, 800.0);
        assert_eq!(chart.camera.offset_x, -50.0);
        ctl.handle(InputEvent::PointerUp, &mut chart, 800.0);
        assert!(!ctl.is_dragging());
        // Idle moves no longer pan.
        ctl.handle(InputEvent::PointerMove { x: 300.0, y: 100.0 }, &mut chart, 800.0);
        assert_eq!(chart.camera.offset_x, -50.0);
    }

    #[test]
    fn wheel_zooms_unless_modifier_pans() {
        let mut chart = chart(500);
        let mut ctl = InteractionController::new();
        ctl.handle(
            InputEvent::Wheel { delta_y: -1.0, x: 400.0, y: 50.0, pan_modifier: false },
            &mut chart,
            800.0,
        );
        assert!(chart.camera.scale > 1.0);

        let scale = chart.camera.scale;
        let before = chart.camera.offset_x;
        ctl.handle(
            InputEvent::Wheel { delta_y: 30.0, x: 400.0, y: 50.0, pan_modifier: true },
            &mut chart,
            800.0,
        );
        assert_eq!(chart.camera.scale, scale);
        assert!(chart.camera.offset_x < before);
    }

    #[test]
    fn leave_clears_hover() {
        let mut chart = chart(10);
        let mut ctl = InteractionController::new();
        ctl.handle(InputEvent::PointerMove { x: 5.0, y: 5.0 }, &mut chart, 800.0);
        assert!(ctl.hover().is_some());
        assert!(ctl.handle(InputEvent::PointerLeave, &mut chart, 800.0));
        assert!(ctl.hover().is_none());
    }
}
