// File: crates/chart-core/src/render/line.rs
// Summary: Line chart renderer: axes, nice Y ticks, category labels, polyline and point markers.

use std::f64::consts::TAU;

use super::{draw_axes, draw_y_ticks, Frame};
use crate::context::{DrawContext, TextAlign};
use crate::layout::{self, MARKER_RADIUS};
use crate::series::{ColorPalette, DataPoint};

pub fn draw(ctx: &mut dyn DrawContext, data: &[DataPoint], colors: &ColorPalette, frame: &Frame<'_>) {
    let layout = layout::line(data, frame.size, frame.margin);
    let area = layout.area;

    draw_axes(ctx, &area, frame.theme);
    draw_y_ticks(ctx, frame, &area, &layout.ticks, |v| layout.tick_scale.to_px(v));

    // X labels under each point
    ctx.set_text_align(TextAlign::Center);
    for (i, (point, p)) in data.iter().zip(&layout.points).enumerate() {
        ctx.fill_text(&point.display_label(i), p.x, area.bottom + 15.0);
    }

    ctx.begin_path();
    ctx.set_stroke_style(colors.primary());
    ctx.set_line_width(2.0);
    for (i, p) in layout.points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(p.x, p.y);
        } else {
            ctx.line_to(p.x, p.y);
        }
    }
    ctx.stroke();

    for p in &layout.points {
        ctx.begin_path();
        ctx.arc(p.x, p.y, MARKER_RADIUS, 0.0, TAU);
        ctx.set_fill_style(frame.theme.contrast_color);
        ctx.fill();
        ctx.set_stroke_style(colors.primary());
        ctx.stroke();
    }
}
