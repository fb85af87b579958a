// File: crates/candela-core/tests/frame.rs
// Purpose: Redraw engine output: visible window, vertical scale, per-type
// primitive emission, axis labels, overlays and crosshair.

use candela_core::{Candle, Chart, ChartType, IndicatorKind, Primitive, RenderOptions, Theme};

fn flat_candles(n: usize) -> Vec<Candle> {
    (0..n)
        .map(|i| Candle::new(i as i64 * 86_400_000, 100.0, 105.0, 95.0, 101.0))
        .collect()
}

fn quiet_options() -> RenderOptions {
    RenderOptions { draw_labels: false, ..RenderOptions::default() }
}

fn count_fill_rects(frame: &candela_core::Frame) -> usize {
    frame
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::FillRect { .. }))
        .count()
}

fn polylines(frame: &candela_core::Frame) -> Vec<(usize, skia_safe::Color)> {
    frame
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Polyline { points, color, .. } => Some((points.len(), *color)),
            _ => None,
        })
        .collect()
}

#[test]
fn candlestick_emits_wick_and_body_per_candle() {
    let chart = Chart::new(flat_candles(5));
    let frame = chart.build_frame(&quiet_options());
    assert_eq!(count_fill_rects(&frame), 5);
    let lines = frame
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Line { width, .. } if *width == 1.0))
        .count();
    assert_eq!(lines, 5, "one wick per candle");
}

#[test]
fn price_grid_has_eleven_lines() {
    let chart = Chart::new(flat_candles(5));
    let frame = chart.build_frame(&quiet_options());
    let gridlines = frame
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Line { width, .. } if *width == 0.5))
        .count();
    assert_eq!(gridlines, 11);
}

#[test]
fn vertical_scale_uses_visible_window_only() {
    // The far half of the data is wildly higher; with the camera at the
    // origin it must not influence the price axis.
    let mut candles = flat_candles(100);
    for c in candles.iter_mut().skip(50) {
        c.high = 1000.0;
        c.low = 900.0;
        c.close = 950.0;
        c.open = 950.0;
    }
    let chart = Chart::new(candles);
    let opts = RenderOptions { width: 300, ..RenderOptions::default() };
    let frame = chart.build_frame(&opts);
    let price_labels: Vec<f64> = frame
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Text { text, x, .. } if *x == 5.0 => text.parse::<f64>().ok(),
            _ => None,
        })
        .collect();
    assert_eq!(price_labels.len(), 11);
    let top = price_labels.iter().cloned().fold(f64::MIN, f64::max);
    assert!((top - 105.0).abs() < 1e-9, "axis top {} leaked off-screen highs", top);
}

#[test]
fn flat_data_falls_back_to_unit_range() {
    // All prices identical: range would be zero, the guard substitutes 1.
    let candles: Vec<Candle> = (0..10)
        .map(|i| Candle::new(i, 100.0, 100.0, 100.0, 100.0))
        .collect();
    let chart = Chart::new(candles);
    let frame = chart.build_frame(&RenderOptions::default());
    for p in &frame.primitives {
        if let Primitive::Line { y0, y1, .. } = p {
            assert!(y0.is_finite() && y1.is_finite());
        }
    }
}

#[test]
fn x_labels_keep_absolute_stride_under_pan() {
    let candles = flat_candles(400);
    let mut chart = Chart::new(candles);
    let opts = RenderOptions::default();
    let label_positions = |chart: &Chart| -> Vec<f32> {
        chart
            .build_frame(&opts)
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, x, .. } if text.contains('-') => Some(*x),
                _ => None,
            })
            .collect()
    };

    // Spacing 10 px and an 80 px minimum gap: stride 8, labels sit at
    // absolute indices divisible by 8 regardless of the camera offset.
    for offset in [0.0, -40.0] {
        chart.camera.offset_x = offset;
        for x in label_positions(&chart) {
            let idx = (x as f64 + 10.0 - offset) / 10.0;
            assert!((idx / 8.0 - (idx / 8.0).round()).abs() < 1e-6, "label at index {}", idx);
        }
    }
}

#[test]
fn ma_cross_overlay_breaks_at_warm_up() {
    let mut chart = Chart::new(flat_candles(12));
    chart.indicator = Some(IndicatorKind::MaCross);
    let frame = chart.build_frame(&quiet_options());
    let theme = Theme::dark();
    let lines = polylines(&frame);
    assert_eq!(lines.len(), 2);
    // SMA(5) over 12 candles yields 8 samples, SMA(10) yields 3; the leading
    // sentinel region emits nothing instead of stretching the line back.
    assert!(lines.contains(&(8, theme.ma_short)));
    assert!(lines.contains(&(3, theme.ma_long)));
}

#[test]
fn parabolic_sar_emits_markers() {
    let mut chart = Chart::new(flat_candles(20));
    chart.indicator = Some(IndicatorKind::ParabolicSar);
    let frame = chart.build_frame(&quiet_options());
    let circles = frame
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Circle { .. }))
        .count();
    assert_eq!(circles, 20);
}

#[test]
fn aroon_draws_into_secondary_pane() {
    let mut chart = Chart::new(flat_candles(40));
    chart.indicator = Some(IndicatorKind::Aroon);
    let opts = quiet_options();
    let frame = chart.build_frame(&opts);
    // Body shrinks by the secondary pane: 500 - 30 - 100.
    let pane_top = 370.0f32;
    let pane_bottom = 470.0f32;
    let theme = Theme::dark();
    let mut saw_overlay = false;
    for p in &frame.primitives {
        if let Primitive::Polyline { points, color, .. } = p {
            if *color == theme.aroon_up || *color == theme.aroon_down {
                saw_overlay = true;
                for &(_, y) in points {
                    assert!(y >= pane_top && y <= pane_bottom, "aroon point left its pane: {}", y);
                }
            }
        }
    }
    assert!(saw_overlay);
}

#[test]
fn area_polygon_closes_to_chart_floor() {
    let mut chart = Chart::new(flat_candles(10));
    chart.chart_type = ChartType::Area;
    let frame = chart.build_frame(&quiet_options());
    let floor = (500 - 30) as f32;
    let polygon = frame.primitives.iter().find_map(|p| match p {
        Primitive::Polygon { points, .. } => Some(points.clone()),
        _ => None,
    });
    let points = polygon.expect("area emits a fill polygon");
    let n = points.len();
    assert_eq!(points[n - 1].1, floor);
    assert_eq!(points[n - 2].1, floor);
    assert_eq!(polylines(&frame).len(), 1, "plus the stroked outline");
}

#[test]
fn step_line_doubles_intermediate_points() {
    let mut chart = Chart::new(flat_candles(10));
    chart.chart_type = ChartType::StepLine;
    let frame = chart.build_frame(&quiet_options());
    let lines = polylines(&frame);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0, 19); // n + (n - 1) step corners
}

#[test]
fn columns_fill_down_to_floor() {
    let mut chart = Chart::new(flat_candles(5));
    chart.chart_type = ChartType::Columns;
    let frame = chart.build_frame(&quiet_options());
    let floor = (500 - 30) as f32;
    let mut rects = 0;
    for p in &frame.primitives {
        if let Primitive::FillRect { y, h, .. } = p {
            assert!((y + h - floor).abs() < 1e-3);
            rects += 1;
        }
    }
    assert_eq!(rects, 5);
}

#[test]
fn crosshair_and_tooltip_follow_hover() {
    let chart = Chart::new(flat_candles(20));
    let theme = Theme::dark();
    let opts = RenderOptions {
        crosshair: Some((100.0, 50.0)),
        draw_labels: false,
        ..RenderOptions::default()
    };
    let frame = chart.build_frame(&opts);
    let guides = frame
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Line { color, .. } if *color == theme.crosshair))
        .count();
    assert_eq!(guides, 2);
    let tooltip = frame.primitives.iter().find_map(|p| match p {
        Primitive::Text { text, .. } => Some(text.clone()),
        _ => None,
    });
    assert_eq!(tooltip.as_deref(), Some("O:100.00 H:105.00 L:95.00 C:101.00"));
}

#[test]
fn crosshair_hides_outside_data_range() {
    let chart = Chart::new(flat_candles(20));
    let theme = Theme::dark();
    let opts = RenderOptions {
        crosshair: Some((500.0, 50.0)), // index 50, past the 20 candles
        draw_labels: false,
        ..RenderOptions::default()
    };
    let frame = chart.build_frame(&opts);
    assert!(!frame
        .primitives
        .iter()
        .any(|p| matches!(p, Primitive::Line { color, .. } if *color == theme.crosshair)));
    assert!(!frame
        .primitives
        .iter()
        .any(|p| matches!(p, Primitive::Text { .. })));
}

#[test]
fn empty_data_renders_empty_state() {
    let chart = Chart::new(Vec::<Candle>::new());
    let frame = chart.build_frame(&RenderOptions::default());
    assert!(frame.primitives.is_empty());
}

#[test]
fn degenerate_dimensions_clamp_to_one_pixel() {
    let chart = Chart::new(flat_candles(5));
    let opts = RenderOptions { width: 0, height: -10, ..quiet_options() };
    let frame = chart.build_frame(&opts);
    assert_eq!(frame.width, 1);
    assert_eq!(frame.height, 1);
    for p in &frame.primitives {
        if let Primitive::FillRect { y, h, .. } = p {
            assert!(y.is_finite() && h.is_finite());
        }
    }
}
