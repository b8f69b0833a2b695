// File: crates/chart-core/src/types.rs
// Summary: Shared constants and the plot margin used by the axis charts.

/// Default logical width for headless renders, in pixels.
pub const WIDTH: f64 = 600.0;
/// Default logical height for headless renders, in pixels.
pub const HEIGHT: f64 = 400.0;

/// Inset between the surface edge and the plot area of line/bar charts, in logical pixels.
/// Contract: all fields are non-negative. Pie charts ignore it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(40.0, 20.0, 30.0, 40.0)
    }
}
