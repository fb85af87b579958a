// File: crates/candela-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use candela_core::{Candle, Chart, RenderOptions};

#[test]
fn render_rgba8_buffer() {
    let candles: Vec<Candle> = (0..10)
        .map(|i| Candle::new(i, 100.0, 104.0, 96.0, 102.0))
        .collect();
    let chart = Chart::new(candles);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    let a = px[3];
    assert_eq!(a, 255);
}
