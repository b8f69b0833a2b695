// File: crates/chart-core/src/layout.rs
// Summary: Per-chart pixel layouts shared by the renderers and the hit-tester.
// Notes:
// - Every coordinate a renderer draws and every region the hit-tester checks comes
//   from the functions in this file. Change the formulas here, never at a call site.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::geometry::{LogicalSize, Point, Rect};
use crate::scale::{self, CategoryScale, ValueScale};
use crate::series::{self, DataPoint};
use crate::types::Margin;

/// Share of a bar slot covered by the bar; the rest is spacing.
pub const BAR_FILL: f64 = 0.8;
/// Line markers are drawn with this radius.
pub const MARKER_RADIUS: f64 = 4.0;
/// Half-size of the square window around a line point that counts as a hit.
pub const LINE_HIT_WINDOW: f64 = 10.0;
/// Pie radius is `min(width, height) / PIE_RADIUS_DIVISOR`.
pub const PIE_RADIUS_DIVISOR: f64 = 2.5;
/// Percentage labels sit at this fraction of the pie radius.
pub const PIE_LABEL_RADIUS: f64 = 0.75;

/// Layout of a line chart.
#[derive(Clone, Debug)]
pub struct LineLayout {
    pub area: Rect,
    pub x: CategoryScale,
    /// Scale the data is plotted on (`[0, y_max]`).
    pub y: ValueScale,
    /// Tick values rounded to a nice maximum.
    pub ticks: Vec<f64>,
    /// Scale the tick labels are placed on (`[0, nice_max]`).
    pub tick_scale: ValueScale,
    pub points: Vec<Point>,
}

pub fn line(data: &[DataPoint], size: LogicalSize, margin: &Margin) -> LineLayout {
    let area = Rect::plot_area(size, margin);
    let x = CategoryScale::points(area.left, area.width(), data.len());
    let y = ValueScale::new_linear(area.top, area.bottom, 0.0, scale::y_max(data.iter().map(|p| p.value)));

    let raw_max = data.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
    let nice = scale::nice_max(raw_max);
    let tick_scale = ValueScale::new_linear(area.top, area.bottom, 0.0, nice);

    let points = data
        .iter()
        .enumerate()
        .map(|(i, p)| Point::new(x.to_px(i as f64), y.to_px(p.value)))
        .collect();

    LineLayout { area, x, y, ticks: scale::ticks(nice), tick_scale, points }
}

/// Layout of a bar chart.
#[derive(Clone, Debug)]
pub struct BarLayout {
    pub area: Rect,
    pub y: ValueScale,
    /// Tick values taken straight off the padded maximum, without nice rounding.
    pub ticks: Vec<f64>,
    pub bar_width: f64,
    pub spacing: f64,
    /// One rectangle per data point; `bottom` is always the baseline.
    pub bars: Vec<Rect>,
}

pub fn bar(data: &[DataPoint], size: LogicalSize, margin: &Margin) -> BarLayout {
    let area = Rect::plot_area(size, margin);
    let slots = CategoryScale::slots(area.left, area.width(), data.len());
    let bar_width = slots.spacing * BAR_FILL;
    let spacing = slots.spacing - bar_width;
    let y_max = scale::y_max(data.iter().map(|p| p.value));
    let y = ValueScale::new_linear(area.top, area.bottom, 0.0, y_max);

    let bars = data
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let left = slots.to_px(i as f64);
            let height = p.value * y.px_per_unit();
            Rect::from_ltrb(left, area.bottom - height, left + bar_width, area.bottom)
        })
        .collect();

    BarLayout { area, y, ticks: scale::ticks(y_max), bar_width, spacing, bars }
}

/// Angular span of one pie slice, in radians measured clockwise from the +X axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSlice {
    pub start: f64,
    pub end: f64,
    /// Share of the total in `[0, 1]`.
    pub fraction: f64,
}

impl PieSlice {
    pub fn sweep(&self) -> f64 { self.end - self.start }
    pub fn mid(&self) -> f64 { self.start + self.sweep() * 0.5 }
    /// Share of the total as a percentage with one decimal, e.g. `"25.0"`.
    pub fn percent_label(&self) -> String {
        format!("{:.1}", self.fraction * 100.0)
    }
}

/// Layout of a pie chart. Ignores the margin and centers in the full box.
#[derive(Clone, Debug)]
pub struct PieLayout {
    pub center: Point,
    pub radius: f64,
    pub total: f64,
    /// Contiguous slices starting at 12 o'clock. Empty when the total is not positive.
    pub slices: Vec<PieSlice>,
}

impl PieLayout {
    /// Anchor of the percentage label of `slice`.
    pub fn label_anchor(&self, slice: &PieSlice) -> Point {
        let r = self.radius * PIE_LABEL_RADIUS;
        let mid = slice.mid();
        Point::new(self.center.x + mid.cos() * r, self.center.y + mid.sin() * r)
    }
}

pub fn pie(data: &[DataPoint], size: LogicalSize) -> PieLayout {
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    let radius = size.width.min(size.height) / PIE_RADIUS_DIVISOR;
    let total = series::total(data);

    let mut slices = Vec::with_capacity(data.len());
    if total.is_finite() && total > 0.0 {
        let mut start = -FRAC_PI_2;
        for p in data {
            let fraction = p.value / total;
            let end = start + fraction * TAU;
            slices.push(PieSlice { start, end, fraction });
            start = end;
        }
    }
    PieLayout { center, radius, total, slices }
}

/// Legend row `index`: swatch rectangle and text origin.
pub fn legend_row(size: LogicalSize, index: usize) -> (Rect, Point) {
    let x = size.width - 120.0;
    let y = 40.0 + index as f64 * 20.0;
    (Rect::from_ltwh(x, y, 15.0, 15.0), Point::new(x + 20.0, y + 12.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn pts(values: &[f64]) -> Vec<DataPoint> {
        values.iter().map(|&v| DataPoint::unlabeled(v)).collect()
    }

    #[test]
    fn pie_angles_sum_to_full_turn() {
        let data = pts(&[3.0, 7.5, 1.25, 9.0, 0.5]);
        let layout = pie(&data, LogicalSize::new(300.0, 200.0));
        let sum: f64 = layout.slices.iter().map(PieSlice::sweep).sum();
        assert!((sum - TAU).abs() < 1e-9);
        assert!((layout.slices[0].start + FRAC_PI_2).abs() < 1e-12);
        for w in layout.slices.windows(2) {
            assert_eq!(w[0].end, w[1].start);
        }
    }

    #[test]
    fn equal_pair_splits_in_halves() {
        let layout = pie(&pts(&[4.0, 4.0]), LogicalSize::new(100.0, 100.0));
        for s in &layout.slices {
            assert!((s.sweep() - PI).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_total_pie_has_no_slices() {
        let layout = pie(&pts(&[0.0, 0.0]), LogicalSize::new(100.0, 100.0));
        assert!(layout.slices.is_empty());
    }

    #[test]
    fn bars_share_baseline_and_scale() {
        let size = LogicalSize::new(600.0, 400.0);
        let layout = bar(&pts(&[10.0, 30.0]), size, &Margin::default());
        assert_eq!(layout.bars[0].bottom, 370.0);
        assert!((layout.bars[1].height() - 3.0 * layout.bars[0].height()).abs() < 1e-9);
        assert!((layout.bar_width - 216.0).abs() < 1e-9);
        assert!((layout.spacing - 54.0).abs() < 1e-9);
        assert!((layout.bars[1].left - (40.0 + 270.0)).abs() < 1e-9);
    }

    #[test]
    fn line_points_span_plot_width() {
        let size = LogicalSize::new(600.0, 400.0);
        let layout = line(&pts(&[1.0, 5.0, 2.0]), size, &Margin::default());
        assert_eq!(layout.points[0].x, 40.0);
        assert_eq!(layout.points[2].x, 580.0);
        assert_eq!(layout.ticks.last().copied(), Some(5.0));
        assert!(layout.points.iter().all(|p| p.y.is_finite()));
    }
}
