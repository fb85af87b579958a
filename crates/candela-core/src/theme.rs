// File: crates/candela-core/src/theme.rs
// Summary: Light/Dark theming for chart drawing colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_label: skia::Color,
    pub crosshair: skia::Color,
    pub tooltip_text: skia::Color,
    pub bull: skia::Color,
    pub bear: skia::Color,
    pub line_stroke: skia::Color,
    pub area_fill: skia::Color,
    pub marker: skia::Color,
    pub ma_short: skia::Color,
    pub ma_long: skia::Color,
    pub mcginley: skia::Color,
    pub median: skia::Color,
    pub hull: skia::Color,
    pub sar: skia::Color,
    pub supertrend: skia::Color,
    pub aroon_up: skia::Color,
    pub aroon_down: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 0, 0, 0),
            grid: skia::Color::from_argb(77, 136, 136, 136),
            axis_label: skia::Color::from_argb(255, 255, 255, 255),
            crosshair: skia::Color::from_argb(128, 255, 255, 255),
            tooltip_text: skia::Color::from_argb(255, 255, 255, 255),
            bull: skia::Color::from_argb(255, 0x08, 0x99, 0x81),
            bear: skia::Color::from_argb(255, 0xf2, 0x36, 0x45),
            line_stroke: skia::Color::from_argb(255, 0x00, 0xcc, 0xff),
            area_fill: skia::Color::from_argb(51, 0x00, 0xcc, 0xff),
            marker: skia::Color::from_argb(255, 0x00, 0xcc, 0xff),
            ma_short: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            ma_long: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            mcginley: skia::Color::from_argb(255, 0xff, 0xaa, 0x00),
            median: skia::Color::from_argb(255, 0xff, 0x00, 0xff),
            hull: skia::Color::from_argb(255, 0x00, 0xff, 0x99),
            sar: skia::Color::from_argb(255, 0xff, 0x00, 0xff),
            supertrend: skia::Color::from_argb(255, 0x00, 0xff, 0xcc),
            aroon_up: skia::Color::from_argb(255, 0xff, 0x98, 0x00),
            aroon_down: skia::Color::from_argb(255, 0x29, 0x62, 0xff),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(90, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            crosshair: skia::Color::from_argb(140, 30, 30, 40),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
            bull: skia::Color::from_argb(255, 0x08, 0x99, 0x81),
            bear: skia::Color::from_argb(255, 0xf2, 0x36, 0x45),
            line_stroke: skia::Color::from_argb(255, 0x00, 0x7a, 0xcc),
            area_fill: skia::Color::from_argb(51, 0x00, 0x7a, 0xcc),
            marker: skia::Color::from_argb(255, 0x00, 0x7a, 0xcc),
            ma_short: skia::Color::from_argb(255, 0xb8, 0x8a, 0x00),
            ma_long: skia::Color::from_argb(255, 0x00, 0x8a, 0x8a),
            mcginley: skia::Color::from_argb(255, 0xcc, 0x70, 0x00),
            median: skia::Color::from_argb(255, 0xb0, 0x00, 0xb0),
            hull: skia::Color::from_argb(255, 0x00, 0x99, 0x55),
            sar: skia::Color::from_argb(255, 0xb0, 0x00, 0xb0),
            supertrend: skia::Color::from_argb(255, 0x00, 0x99, 0x88),
            aroon_up: skia::Color::from_argb(255, 0xd9, 0x77, 0x00),
            aroon_down: skia::Color::from_argb(255, 0x29, 0x62, 0xff),
        }
    }
}

/// Return the list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
