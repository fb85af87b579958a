// File: crates/candela-core/src/lib.rs
// Summary: Core library entry point; exports the charting engine API.

pub mod axis;
pub mod camera;
pub mod candle;
pub mod chart;
pub mod frame;
pub mod geometry;
pub mod grid;
pub mod indicators;
pub mod input;
pub mod layout;
pub mod theme;
pub mod types;

pub use camera::Camera;
pub use candle::Candle;
pub use chart::{paint_frame, Chart, ChartType, IndicatorKind, RenderError, RenderOptions};
pub use frame::{Frame, Primitive};
pub use geometry::RectI32;
pub use input::{InputEvent, InteractionController};
pub use layout::{pane_rects, LayoutKind};
pub use theme::Theme;
pub use types::ChartConfig;
