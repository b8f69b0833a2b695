// File: crates/chart-core/src/render/mod.rs
// Summary: Render dispatcher; clears the surface, draws the chart body for the kind, then the title.

pub mod bar;
pub mod line;
pub mod pie;

use crate::chart::ChartOptions;
use crate::context::{DrawContext, FontSpec, TextAlign};
use crate::geometry::{LogicalSize, Rect};
use crate::series::ChartKind;
use crate::theme::Theme;
use crate::types::Margin;

/// Baseline of the title text, from the top edge.
pub const TITLE_Y: f64 = 30.0;

/// Everything about the drawing target a renderer needs besides the data.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub size: LogicalSize,
    pub margin: &'a Margin,
    pub theme: &'a Theme,
}

impl<'a> Frame<'a> {
    pub fn new(size: LogicalSize, margin: &'a Margin, theme: &'a Theme) -> Self {
        Self { size, margin, theme }
    }

    fn label_font(&self) -> FontSpec {
        FontSpec::new(self.theme.font_family, self.theme.label_font_size)
    }
}

/// Draw one complete frame of `options` into `ctx`.
pub fn render(ctx: &mut dyn DrawContext, options: &ChartOptions, frame: &Frame<'_>) {
    let LogicalSize { width, height } = frame.size;
    tracing::trace!(kind = %options.kind, points = options.data.len(), width, height, "render");

    ctx.clear_rect(0.0, 0.0, width, height);

    match options.kind {
        ChartKind::Line => line::draw(ctx, &options.data, &options.colors, frame),
        ChartKind::Bar => bar::draw(ctx, &options.data, &options.colors, frame),
        ChartKind::Pie => pie::draw(ctx, &options.data, &options.colors, frame),
    }

    if let Some(title) = options.title.as_deref() {
        ctx.set_font(FontSpec::new(frame.theme.font_family, frame.theme.title_font_size));
        ctx.set_fill_style(frame.theme.axis_color);
        ctx.set_text_align(TextAlign::Center);
        ctx.fill_text(title, width / 2.0, TITLE_Y);
    }
}

// ---- helpers shared by the axis charts ---------------------------------------

/// Y axis along the left edge and X axis along the baseline of `area`.
fn draw_axes(ctx: &mut dyn DrawContext, area: &Rect, theme: &Theme) {
    ctx.begin_path();
    ctx.set_stroke_style(theme.axis_color);
    ctx.set_line_width(1.0);
    ctx.move_to(area.left, area.top);
    ctx.line_to(area.left, area.bottom);
    ctx.move_to(area.left, area.bottom);
    ctx.line_to(area.right, area.bottom);
    ctx.stroke();
}

/// Right-aligned integer labels left of the Y axis; `to_px` places each value.
fn draw_y_ticks(ctx: &mut dyn DrawContext, frame: &Frame<'_>, area: &Rect, ticks: &[f64], to_px: impl Fn(f64) -> f64) {
    ctx.set_fill_style(frame.theme.label_color);
    ctx.set_font(frame.label_font());
    ctx.set_text_align(TextAlign::Right);
    for &value in ticks {
        ctx.fill_text(&format_tick(value), area.left - 5.0, to_px(value) + 4.0);
    }
}

/// Round half up to an integer label.
pub fn format_tick(value: f64) -> String {
    format!("{}", (value + 0.5).floor() as i64)
}
