// File: crates/candela-core/tests/camera.rs
// Purpose: Camera transform properties: round-trips, zoom-to-cursor, pan clamping.

use candela_core::{Camera, ChartConfig};

fn camera() -> Camera {
    Camera::new(&ChartConfig::default())
}

#[test]
fn world_screen_round_trip() {
    let mut cam = camera();
    cam.scale = 1.7;
    cam.offset_x = -123.4;
    for i in [0usize, 1, 17, 250, 4999] {
        let px = cam.to_px(i as f64);
        let back = cam.from_px(px);
        assert!((back - i as f64).abs() < 1e-9, "index {} round-tripped to {}", i, back);
    }
}

#[test]
fn zoom_in_increases_scale_and_keeps_pivot_stationary() {
    let mut cam = camera();
    // Pan into the middle of the data so clamping cannot move the result.
    cam.pan(-2000.0, 1000, 800.0);
    let pivot = 400.0;
    let world = cam.from_px(pivot);
    let before = cam.scale;
    cam.zoom_at(pivot, -1.0, 1000, 800.0);
    assert!(cam.scale > before);
    // The world coordinate under the pivot still renders at the pivot.
    assert!((cam.to_px(world) - pivot).abs() < 1.0);
}

#[test]
fn zoom_out_decreases_scale() {
    let mut cam = camera();
    cam.pan(-2000.0, 1000, 800.0);
    let before = cam.scale;
    cam.zoom_at(400.0, 1.0, 1000, 800.0);
    assert!(cam.scale < before);
}

#[test]
fn scale_clamps_to_configured_range() {
    let cfg = ChartConfig::default();
    let mut cam = camera();
    for _ in 0..200 {
        cam.zoom_at(400.0, -1.0, 1000, 800.0);
    }
    assert!((cam.scale - cfg.max_zoom).abs() < 1e-9);
    for _ in 0..200 {
        cam.zoom_at(400.0, 1.0, 1000, 800.0);
    }
    assert!((cam.scale - cfg.min_zoom).abs() < 1e-9);
}

#[test]
fn pan_clamps_idempotently_at_both_edges() {
    let mut cam = camera();
    let n = 200usize;
    let viewport = 800.0;
    let min_offset = viewport - n as f64 * cam.spacing();

    cam.pan(-1.0e9, n, viewport);
    assert_eq!(cam.offset_x, min_offset);
    // Repeating the overshoot converges to the same boundary.
    cam.pan(-1.0e9, n, viewport);
    assert_eq!(cam.offset_x, min_offset);

    cam.pan(1.0e9, n, viewport);
    assert_eq!(cam.offset_x, 0.0);
    cam.pan(1.0e9, n, viewport);
    assert_eq!(cam.offset_x, 0.0);
}

#[test]
fn narrow_data_pins_offset_to_zero() {
    let mut cam = camera();
    // 10 candles at 10 px never fill an 800 px viewport.
    cam.pan(-500.0, 10, 800.0);
    assert_eq!(cam.offset_x, 0.0);
    cam.pan(500.0, 10, 800.0);
    assert_eq!(cam.offset_x, 0.0);
}

#[test]
fn empty_data_degenerates_without_panic() {
    let mut cam = camera();
    cam.pan(-300.0, 0, 800.0);
    assert_eq!(cam.offset_x, 0.0);
    cam.zoom_at(400.0, -1.0, 0, 800.0);
    assert_eq!(cam.visible_range(0, 800.0), (0, 0));
}

#[test]
fn visible_range_covers_viewport_with_padding() {
    let mut cam = camera();
    // At scale 1 an 800 px viewport shows 80 slots plus the 2-slot guard.
    assert_eq!(cam.visible_range(1000, 800.0), (0, 82));
    // Fewer candles than fit: the window ends at the data.
    assert_eq!(cam.visible_range(50, 800.0), (0, 50));
    // Panned: the start index follows the offset.
    cam.pan(-250.0, 1000, 800.0);
    assert_eq!(cam.visible_range(1000, 800.0), (25, 107));
}

#[test]
fn index_at_floor_maps_pixels() {
    let mut cam = camera();
    assert_eq!(cam.index_at(0.0), 0);
    assert_eq!(cam.index_at(9.9), 0);
    assert_eq!(cam.index_at(10.0), 1);
    cam.offset_x = -25.0;
    assert_eq!(cam.index_at(0.0), 2);
    // Left of the data start maps negative, which callers treat as out of range.
    cam.offset_x = 5.0;
    assert_eq!(cam.index_at(0.0), -1);
}
