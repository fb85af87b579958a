// File: crates/candela-demo/src/main.rs
// Summary: Demo loads OHLC CSV (or synthesizes a random walk) and renders every
// chart type and indicator overlay to PNGs.

use anyhow::{Context, Result};
use candela_core::{Candle, Chart, ChartType, IndicatorKind, RenderOptions};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn main() -> Result<()> {
    let candles = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            let loaded = load_ohlc_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Using input file: {}", path.display());
            loaded
        }
        None => {
            println!("No CSV argument; generating a synthetic random walk");
            synthetic_candles(500)
        }
    };
    println!("Loaded {} candles", candles.len());
    if candles.is_empty() {
        anyhow::bail!("no candles loaded — check headers/delimiter.");
    }

    let data: Arc<[Candle]> = candles.into();
    let out_dir = PathBuf::from("target/out");

    // 1) One PNG per chart type
    for chart_type in ChartType::ALL {
        let mut chart = Chart::new(Arc::clone(&data));
        chart.chart_type = chart_type;
        let out = out_dir.join(format!("type_{}.png", chart_type.label()));
        chart.render_to_png(&RenderOptions::default(), &out)?;
        println!("Wrote {}", out.display());
    }

    // 2) One PNG per indicator overlay on candlesticks
    for kind in IndicatorKind::ALL {
        let mut chart = Chart::new(Arc::clone(&data));
        chart.indicator = Some(kind);
        let out = out_dir.join(format!("indicator_{}.png", kind.label()));
        chart.render_to_png(&RenderOptions::default(), &out)?;
        println!("Wrote {}", out.display());
    }

    // 3) A zoomed-and-panned view with the crosshair up, to exercise the camera
    let mut chart = Chart::new(Arc::clone(&data));
    chart.indicator = Some(IndicatorKind::MaCross);
    let opts = RenderOptions {
        crosshair: Some((400.0, 200.0)),
        ..RenderOptions::default()
    };
    let n = chart.candles().len();
    let width = opts.width as f64;
    for _ in 0..4 {
        chart.camera.zoom_at(width / 2.0, -1.0, n, width);
    }
    chart.camera.pan(-600.0, n, width);
    let out = out_dir.join("zoomed.png");
    chart.render_to_png(&opts, &out)?;
    println!("Wrote {}", out.display());

    Ok(())
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

fn load_ohlc_csv(path: &Path) -> Result<Vec<Candle>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("open csv '{}'", path.display()))?;
    let headers = rdr
        .headers()
        .context("headers")?
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
    let i_volume = idx(&["volume", "v", "vol"]);

    let day_ms = 86_400_000i64;
    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.context("record")?;
        let parse = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| rec.get(ix))
                .and_then(|s| s.trim().parse::<f64>().ok())
        };
        let t = i_time
            .and_then(|ix| rec.get(ix))
            .and_then(parse_time_to_millis)
            .unwrap_or(row as i64 * day_ms);
        if let (Some(o), Some(h), Some(l), Some(c)) =
            (parse(i_open), parse(i_high), parse(i_low), parse(i_close))
        {
            let mut candle = Candle::new(t, o, h, l, c);
            candle.volume = parse(i_volume);
            out.push(candle);
        }
    }
    Ok(out)
}

/// Epoch seconds and epoch millis both appear in the wild; normalize to millis.
fn parse_time_to_millis(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let n = s.parse::<i64>().ok()?;
    if n > 10_i64.pow(12) {
        Some(n)
    } else {
        Some(n * 1000)
    }
}
