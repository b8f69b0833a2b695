// File: crates/chart-core/src/tooltip.rs
// Summary: Tooltip overlay state following the pointer, and its native painting.

use crate::context::{DrawContext, FontSpec, TextAlign, TextBaseline};
use crate::geometry::Point;
use crate::series::DataPoint;
use crate::theme::Theme;

/// Offset of the tooltip's top-left corner from the pointer.
pub const OFFSET_X: f64 = 10.0;
pub const OFFSET_Y: f64 = -10.0;
const PADDING: f64 = 8.0;
const LINE_HEIGHT: f64 = 16.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    /// Top-left corner in logical pixels relative to the surface.
    pub position: Point,
    pub title: String,
    pub body: String,
}

impl Tooltip {
    /// Show the tooltip for `point` next to the pointer at `(x, y)`.
    pub fn show(&mut self, point: &DataPoint, x: f64, y: f64) {
        self.visible = true;
        self.position = Point::new(x + OFFSET_X, y + OFFSET_Y);
        self.title = point.label.clone().unwrap_or_default();
        self.body = format!("Value: {}", point.value);
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// HTML fragment for document-based hosts.
    pub fn html(&self) -> String {
        format!("<strong>{}</strong><br>{}", escape_html(&self.title), escape_html(&self.body))
    }

    /// Paint the tooltip box for hosts that have no overlay layer of their own.
    pub fn paint(&self, ctx: &mut dyn DrawContext, theme: &Theme) {
        if !self.visible {
            return;
        }
        let title_font = FontSpec::new(theme.font_family, theme.label_font_size).bold();
        let body_font = FontSpec::new(theme.font_family, theme.label_font_size);
        let chars = self.title.chars().count().max(self.body.chars().count()) as f64;
        let width = chars * theme.label_font_size as f64 * 0.6 + PADDING * 2.0;
        let height = LINE_HEIGHT * 2.0 + PADDING * 2.0;
        let Point { x, y } = self.position;

        ctx.set_fill_style(theme.tooltip_background);
        ctx.fill_rect(x, y, width, height);
        ctx.set_fill_style(theme.tooltip_text);
        ctx.set_text_align(TextAlign::Left);
        ctx.set_text_baseline(TextBaseline::Middle);
        ctx.set_font(title_font);
        ctx.fill_text(&self.title, x + PADDING, y + PADDING + LINE_HEIGHT * 0.5);
        ctx.set_font(body_font);
        ctx.fill_text(&self.body, x + PADDING, y + PADDING + LINE_HEIGHT * 1.5);
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
