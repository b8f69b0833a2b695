// File: crates/chart-core/src/render/bar.rs
// Summary: Bar chart renderer: axes, raw-scale Y ticks, one filled and outlined bar per point.

use super::{draw_axes, draw_y_ticks, Frame};
use crate::context::{DrawContext, TextAlign};
use crate::layout;
use crate::series::{ColorPalette, DataPoint};

pub fn draw(ctx: &mut dyn DrawContext, data: &[DataPoint], colors: &ColorPalette, frame: &Frame<'_>) {
    let layout = layout::bar(data, frame.size, frame.margin);
    let area = layout.area;
    let theme = frame.theme;

    draw_axes(ctx, &area, theme);
    // Ticks come straight off the padded maximum; the line chart rounds to a nice maximum instead.
    draw_y_ticks(ctx, frame, &area, &layout.ticks, |v| layout.y.to_px(v));

    for (i, (point, bar)) in data.iter().zip(&layout.bars).enumerate() {
        ctx.set_fill_style(colors.get(i));
        ctx.fill_rect(bar.left, bar.top, bar.width(), bar.height());
        ctx.set_stroke_style(theme.axis_color);
        ctx.stroke_rect(bar.left, bar.top, bar.width(), bar.height());

        ctx.set_fill_style(theme.label_color);
        ctx.set_text_align(TextAlign::Center);
        ctx.fill_text(&point.display_label(i), bar.left + bar.width() / 2.0, area.bottom + 15.0);
    }
}
