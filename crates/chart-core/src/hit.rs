// File: crates/chart-core/src/hit.rs
// Summary: Pointer hit-testing against the same layouts the renderers draw.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::geometry::{LogicalSize, Point};
use crate::layout::{self, LINE_HIT_WINDOW};
use crate::series::{ChartKind, DataPoint};
use crate::types::Margin;

/// Data point under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit<'a> {
    pub index: usize,
    pub point: &'a DataPoint,
}

/// Find the data point drawn under `pointer` (logical pixels), if any.
///
/// The first match in dataset order wins. Never panics; degenerate input yields `None`.
pub fn hit_test<'a>(
    kind: ChartKind,
    data: &'a [DataPoint],
    size: LogicalSize,
    margin: &Margin,
    pointer: Point,
) -> Option<Hit<'a>> {
    if !(pointer.x.is_finite() && pointer.y.is_finite()) {
        return None;
    }
    let index = match kind {
        ChartKind::Pie => pie_index(data, size, pointer),
        ChartKind::Line => layout::line(data, size, margin).points.iter().position(|p| {
            (p.x - pointer.x).abs() < LINE_HIT_WINDOW && (p.y - pointer.y).abs() < LINE_HIT_WINDOW
        }),
        ChartKind::Bar => layout::bar(data, size, margin).bars.iter().position(|r| r.contains(pointer)),
    }?;
    Some(Hit { index, point: &data[index] })
}

fn pie_index(data: &[DataPoint], size: LogicalSize, pointer: Point) -> Option<usize> {
    let layout = layout::pie(data, size);
    let dx = pointer.x - layout.center.x;
    let dy = pointer.y - layout.center.y;
    if dx.hypot(dy) > layout.radius || layout.slices.is_empty() {
        return None;
    }

    // Same rotation as the renderer: slice angles count from 12 o'clock.
    let mut angle = dy.atan2(dx);
    if angle < 0.0 {
        angle += TAU;
    }
    let angle = (angle + FRAC_PI_2) % TAU;

    let mut cumulative = 0.0;
    let found = layout.slices.iter().position(|s| {
        cumulative += s.sweep();
        angle <= cumulative
    });
    // Accumulated sweeps can fall a hair short of a full turn.
    found.or(Some(layout.slices.len() - 1))
}
