// File: crates/candela-window/src/main.rs
// Summary: Windowed multi-pane chart viewer; winit + softbuffer blit of the CPU raster.
//
// Keys: T cycles chart type, I cycles indicator, L cycles layout, D cycles
// theme, R resets the camera. Drag pans, wheel zooms around the cursor,
// shift+wheel pans.

use candela_core::{
    pane_rects, theme, Candle, Chart, ChartType, IndicatorKind, InputEvent,
    InteractionController, LayoutKind, RectI32, RenderOptions, Theme,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::num::NonZeroU32;
use std::path::Path;
use std::sync::Arc;
use winit::event::{ElementState, Event, ModifiersState, MouseScrollDelta, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// One chart instance bound to a pane rectangle. Each pane owns its camera
/// and interaction state; only the candle storage is shared.
struct Pane {
    chart: Chart,
    rect: RectI32,
    controller: InteractionController,
}

fn build_panes(data: &Arc<[Candle]>, kind: LayoutKind, width: i32, height: i32) -> Vec<Pane> {
    pane_rects(kind, width, height)
        .into_iter()
        .map(|rect| Pane {
            chart: Chart::new(Arc::clone(data)),
            rect,
            controller: InteractionController::new(),
        })
        .collect()
}

fn main() {
    let candles = match std::env::args().nth(1) {
        Some(raw) => match load_ohlc_csv(Path::new(&raw)) {
            Ok(c) if !c.is_empty() => c,
            Ok(_) => {
                eprintln!("no candles loaded — check headers/delimiter.");
                return;
            }
            Err(e) => {
                eprintln!("failed to load '{}': {e}", raw);
                return;
            }
        },
        None => synthetic_candles(500),
    };
    println!("Loaded {} candles", candles.len());
    let data: Arc<[Candle]> = candles.into();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Candela Charts — Viewer")
        .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0))
        .build(&event_loop)
        .expect("build window");

    // Surface and listeners live and die with the window: both are torn down
    // together when the event loop exits.
    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut size = window.inner_size();
    let mut layout = LayoutKind::Single;
    let mut panes = build_panes(&data, layout, size.width as i32, size.height as i32);
    let mut cursor: Option<(f64, f64)> = None;
    let mut modifiers = ModifiersState::empty();
    let themes = theme::presets();
    let mut theme_idx = 0usize;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    reassign_rects(&mut panes, layout, size.width as i32, size.height as i32);
                    window.request_redraw();
                }
                WindowEvent::ModifiersChanged(state) => {
                    modifiers = state;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                    // A pane mid-drag keeps receiving moves even after the
                    // cursor leaves it; otherwise the pane under the cursor
                    // gets the move and stale crosshairs elsewhere clear.
                    let dragging = panes.iter().position(|p| p.controller.is_dragging());
                    let target = dragging.or_else(|| pane_at(&panes, position.x, position.y));
                    let mut redraw = false;
                    for (i, pane) in panes.iter_mut().enumerate() {
                        let event = if Some(i) == target {
                            let (lx, ly) = local(pane.rect, position.x, position.y);
                            InputEvent::PointerMove { x: lx, y: ly }
                        } else if pane.controller.hover().is_some() {
                            InputEvent::PointerLeave
                        } else {
                            continue;
                        };
                        let width = pane.rect.width() as f64;
                        redraw |= pane.controller.handle(event, &mut pane.chart, width);
                    }
                    if redraw {
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                    for pane in panes.iter_mut() {
                        let width = pane.rect.width() as f64;
                        pane.controller.handle(InputEvent::PointerLeave, &mut pane.chart, width);
                    }
                    window.request_redraw();
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if button == winit::event::MouseButton::Left {
                        match state {
                            ElementState::Pressed => {
                                if let Some((cx, cy)) = cursor {
                                    if let Some(i) = pane_at(&panes, cx, cy) {
                                        let pane = &mut panes[i];
                                        let (lx, ly) = local(pane.rect, cx, cy);
                                        let width = pane.rect.width() as f64;
                                        pane.controller.handle(
                                            InputEvent::PointerDown { x: lx, y: ly },
                                            &mut pane.chart,
                                            width,
                                        );
                                    }
                                }
                            }
                            ElementState::Released => {
                                // Release everywhere: covers "up outside" the
                                // pane the drag started in.
                                for pane in panes.iter_mut() {
                                    let width = pane.rect.width() as f64;
                                    pane.controller.handle(InputEvent::PointerUp, &mut pane.chart, width);
                                }
                            }
                        }
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    if let Some((cx, cy)) = cursor {
                        if let Some(i) = pane_at(&panes, cx, cy) {
                            let delta_y = match delta {
                                MouseScrollDelta::LineDelta(_, y) => -(y as f64) * 40.0,
                                MouseScrollDelta::PixelDelta(p) => -p.y,
                            };
                            let pane = &mut panes[i];
                            let (lx, ly) = local(pane.rect, cx, cy);
                            let width = pane.rect.width() as f64;
                            pane.controller.handle(
                                InputEvent::Wheel {
                                    delta_y,
                                    x: lx,
                                    y: ly,
                                    pan_modifier: modifiers.shift(),
                                },
                                &mut pane.chart,
                                width,
                            );
                            window.request_redraw();
                        }
                    }
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state != ElementState::Pressed {
                        return;
                    }
                    match input.virtual_keycode {
                        Some(VirtualKeyCode::T) => {
                            for pane in panes.iter_mut() {
                                pane.chart.chart_type = next_chart_type(pane.chart.chart_type);
                            }
                        }
                        Some(VirtualKeyCode::I) => {
                            for pane in panes.iter_mut() {
                                pane.chart.indicator = next_indicator(pane.chart.indicator);
                            }
                        }
                        Some(VirtualKeyCode::L) => {
                            layout = next_layout(layout);
                            panes = build_panes(&data, layout, size.width as i32, size.height as i32);
                        }
                        Some(VirtualKeyCode::D) => {
                            theme_idx = (theme_idx + 1) % themes.len();
                        }
                        Some(VirtualKeyCode::R) => {
                            for pane in panes.iter_mut() {
                                let config = pane.chart.config;
                                pane.chart.camera = candela_core::Camera::new(&config);
                            }
                        }
                        _ => return,
                    }
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                draw(&mut surface, &panes, themes[theme_idx], size.width, size.height);
            }
            Event::MainEventsCleared => {}
            _ => {}
        }
    });
}

fn pane_at(panes: &[Pane], x: f64, y: f64) -> Option<usize> {
    panes.iter().position(|p| p.rect.contains(x as i32, y as i32))
}

fn local(rect: RectI32, x: f64, y: f64) -> (f32, f32) {
    ((x - rect.left as f64) as f32, (y - rect.top as f64) as f32)
}

fn reassign_rects(panes: &mut [Pane], kind: LayoutKind, width: i32, height: i32) {
    for (pane, rect) in panes.iter_mut().zip(pane_rects(kind, width, height)) {
        pane.rect = rect;
    }
}

fn draw(surface: &mut softbuffer::Surface, panes: &[Pane], theme: Theme, win_w: u32, win_h: u32) {
    let w = win_w.max(1);
    let h = win_h.max(1);
    surface
        .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
        .ok();
    let mut frame = match surface.buffer_mut() {
        Ok(frame) => frame,
        Err(e) => {
            eprintln!("frame error: {e:?}");
            return;
        }
    };
    frame.fill(0xFF000000);

    for pane in panes {
        let opts = RenderOptions {
            width: pane.rect.width(),
            height: pane.rect.height(),
            theme,
            crosshair: pane.controller.hover(),
            ..RenderOptions::default()
        };
        let (rgba, pw, ph, row_bytes) = match pane.chart.render_to_rgba8(&opts) {
            Ok(out) => out,
            Err(e) => {
                eprintln!("render error: {e}");
                continue;
            }
        };
        // Blit RGBA rows into the ARGB window buffer at the pane offset.
        for row in 0..ph {
            let dst_y = pane.rect.top + row;
            if dst_y < 0 || dst_y >= h as i32 {
                continue;
            }
            let src = &rgba[row as usize * row_bytes..][..pw as usize * 4];
            for (col, px) in src.chunks_exact(4).enumerate() {
                let dst_x = pane.rect.left + col as i32;
                if dst_x < 0 || dst_x >= w as i32 {
                    continue;
                }
                let r = px[0] as u32;
                let g = px[1] as u32;
                let b = px[2] as u32;
                let a = px[3] as u32;
                frame[dst_y as usize * w as usize + dst_x as usize] = (a << 24) | (r << 16) | (g << 8) | b;
            }
        }
    }
    if let Err(e) = frame.present() {
        eprintln!("present error: {e:?}");
    }
}

fn next_chart_type(current: ChartType) -> ChartType {
    let i = ChartType::ALL.iter().position(|&t| t == current).unwrap_or(0);
    ChartType::ALL[(i + 1) % ChartType::ALL.len()]
}

/// None -> first indicator -> ... -> last -> None again.
fn next_indicator(current: Option<IndicatorKind>) -> Option<IndicatorKind> {
    match current {
        None => Some(IndicatorKind::ALL[0]),
        Some(kind) => {
            let i = IndicatorKind::ALL.iter().position(|&k| k == kind).unwrap_or(0);
            IndicatorKind::ALL.get(i + 1).copied()
        }
    }
}

fn next_layout(current: LayoutKind) -> LayoutKind {
    let i = LayoutKind::ALL.iter().position(|&k| k == current).unwrap_or(0);
    LayoutKind::ALL[(i + 1) % LayoutKind::ALL.len()]
}

/// Seeded random walk, so repeated runs draw the same chart.
fn synthetic_candles(n: usize) -> Vec<Candle> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut price = 100.0f64;
    let day_ms = 86_400_000i64;
    (0..n)
        .map(|i| {
            let open = price;
            let drift: f64 = rng.gen_range(-2.0..2.0);
            let close = (open + drift).max(1.0);
            let high = open.max(close) + rng.gen_range(0.0..1.5);
            let low = (open.min(close) - rng.gen_range(0.0..1.5)).max(0.5);
            let volume = rng.gen_range(500.0..5_000.0);
            price = close;
            Candle::new(1_700_000_000_000 + i as i64 * day_ms, open, high, low, close)
                .with_volume(volume)
        })
        .collect()
}

fn load_ohlc_csv(path: &Path) -> Result<Vec<Candle>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };
    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);

    let day_ms = 86_400_000i64;
    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| rec.get(ix))
                .and_then(|s| s.trim().parse::<f64>().ok())
        };
        let t = i_time
            .and_then(|ix| rec.get(ix))
            .and_then(|s| s.trim().parse::<i64>().ok())
            .map(|n| if n > 10_i64.pow(12) { n } else { n * 1000 })
            .unwrap_or(row as i64 * day_ms);
        if let (Some(o), Some(h), Some(l), Some(c)) =
            (parse(i_open), parse(i_high), parse(i_low), parse(i_close))
        {
            out.push(Candle::new(t, o, h, l, c));
        }
    }
    Ok(out)
}
