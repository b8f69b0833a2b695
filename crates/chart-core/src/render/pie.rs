// File: crates/chart-core/src/render/pie.rs
// Summary: Pie chart renderer: wedges with separators, percentage labels and a corner legend.

use super::Frame;
use crate::context::{DrawContext, FontSpec, TextAlign, TextBaseline};
use crate::layout;
use crate::series::{ColorPalette, DataPoint};

pub fn draw(ctx: &mut dyn DrawContext, data: &[DataPoint], colors: &ColorPalette, frame: &Frame<'_>) {
    let layout = layout::pie(data, frame.size);
    let theme = frame.theme;
    let c = layout.center;

    for (i, (point, slice)) in data.iter().zip(&layout.slices).enumerate() {
        ctx.begin_path();
        ctx.move_to(c.x, c.y);
        ctx.arc(c.x, c.y, layout.radius, slice.start, slice.end);
        ctx.close_path();
        ctx.set_fill_style(colors.get(i));
        ctx.fill();
        ctx.set_stroke_style(theme.contrast_color);
        ctx.set_line_width(2.0);
        ctx.stroke();

        let pct = slice.percent_label();
        let anchor = layout.label_anchor(slice);
        ctx.set_fill_style(theme.contrast_color);
        ctx.set_font(FontSpec::new(theme.font_family, theme.label_font_size).bold());
        ctx.set_text_align(TextAlign::Center);
        ctx.set_text_baseline(TextBaseline::Middle);
        ctx.fill_text(&format!("{pct}%"), anchor.x, anchor.y);

        let (swatch, text_at) = layout::legend_row(frame.size, i);
        ctx.set_fill_style(colors.get(i));
        ctx.fill_rect(swatch.left, swatch.top, swatch.width(), swatch.height());
        ctx.set_fill_style(theme.label_color);
        ctx.set_text_align(TextAlign::Left);
        ctx.set_font(FontSpec::new(theme.font_family, theme.label_font_size));
        ctx.fill_text(&format!("{}: {pct}%", point.display_label(i)), text_at.x, text_at.y);
    }
}
