// File: crates/candela-core/src/layout.rs
// Summary: Multi-pane layout grid; splits a surface into per-chart rectangles.
//
// The host asks for rects and owns its panes directly; there is no handler
// registration or readiness polling.

use crate::geometry::RectI32;

/// Built-in pane arrangements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutKind {
    Single,
    /// Two panes side by side.
    TwoAcross,
    /// Two panes stacked.
    TwoStacked,
    ThreeAcross,
    ThreeStacked,
    /// One full-height pane on the left, two stacked on the right.
    ThreeLeftSplitRight,
    /// 2 x 2 grid.
    FourGrid,
    FourAcross,
    /// 3 x 2 grid.
    SixGrid,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 9] = [
        LayoutKind::Single,
        LayoutKind::TwoAcross,
        LayoutKind::TwoStacked,
        LayoutKind::ThreeAcross,
        LayoutKind::ThreeStacked,
        LayoutKind::ThreeLeftSplitRight,
        LayoutKind::FourGrid,
        LayoutKind::FourAcross,
        LayoutKind::SixGrid,
    ];

    pub fn pane_count(&self) -> usize {
        match self {
            LayoutKind::Single => 1,
            LayoutKind::TwoAcross | LayoutKind::TwoStacked => 2,
            LayoutKind::ThreeAcross | LayoutKind::ThreeStacked | LayoutKind::ThreeLeftSplitRight => 3,
            LayoutKind::FourGrid | LayoutKind::FourAcross => 4,
            LayoutKind::SixGrid => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LayoutKind::Single => "1",
            LayoutKind::TwoAcross => "2H",
            LayoutKind::TwoStacked => "2V",
            LayoutKind::ThreeAcross => "3H",
            LayoutKind::ThreeStacked => "3V",
            LayoutKind::ThreeLeftSplitRight => "3L-R2",
            LayoutKind::FourGrid => "4",
            LayoutKind::FourAcross => "4V",
            LayoutKind::SixGrid => "6",
        }
    }
}

/// Split a `width` x `height` surface into per-pane rects for `kind`.
/// Integer-division remainders go to the last column/row so the panes always
/// tile the surface exactly. Degenerate dimensions clamp to 1 px.
pub fn pane_rects(kind: LayoutKind, width: i32, height: i32) -> Vec<RectI32> {
    let w = width.max(1);
    let h = height.max(1);
    match kind {
        LayoutKind::Single => vec![RectI32::from_ltwh(0, 0, w, h)],
        LayoutKind::TwoAcross => grid(w, h, 2, 1),
        LayoutKind::TwoStacked => grid(w, h, 1, 2),
        LayoutKind::ThreeAcross => grid(w, h, 3, 1),
        LayoutKind::ThreeStacked => grid(w, h, 1, 3),
        LayoutKind::ThreeLeftSplitRight => {
            let left_w = w / 2;
            let top_h = h / 2;
            vec![
                RectI32::from_ltrb(0, 0, left_w, h),
                RectI32::from_ltrb(left_w, 0, w, top_h),
                RectI32::from_ltrb(left_w, top_h, w, h),
            ]
        }
        LayoutKind::FourGrid => grid(w, h, 2, 2),
        LayoutKind::FourAcross => grid(w, h, 4, 1),
        LayoutKind::SixGrid => grid(w, h, 3, 2),
    }
}

fn grid(w: i32, h: i32, cols: i32, rows: i32) -> Vec<RectI32> {
    let cell_w = w / cols;
    let cell_h = h / rows;
    let mut out = Vec::with_capacity((cols * rows) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let left = col * cell_w;
            let top = row * cell_h;
            let right = if col == cols - 1 { w } else { left + cell_w };
            let bottom = if row == rows - 1 { h } else { top + cell_h };
            out.push(RectI32::from_ltrb(left, top, right, bottom));
        }
    }
    out
}
