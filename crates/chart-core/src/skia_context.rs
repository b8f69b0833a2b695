// File: crates/chart-core/src/skia_context.rs
// Summary: DrawContext implementation on top of a Skia canvas.

use skia_safe as skia;
use skia::textlayout::FontCollection;

use crate::color::{self, Rgba};
use crate::context::{DrawContext, FontSpec, TextAlign, TextBaseline};

/// Families tried after the requested one.
const FALLBACK_FAMILIES: [&str; 5] = ["Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

/// Draws onto a Skia canvas, keeping canvas-style paint state between calls.
pub struct SkiaContext<'a> {
    canvas: &'a skia::Canvas,
    fill: skia::Color,
    stroke: skia::Color,
    line_width: f32,
    fonts: FontCollection,
    // Resolved fonts, so switching back and forth between specs does not hit the font manager.
    font_cache: Vec<(FontSpec, skia::Font)>,
    font_spec: FontSpec,
    font: skia::Font,
    align: TextAlign,
    baseline: TextBaseline,
    path: skia::Path,
}

impl<'a> SkiaContext<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        let font_spec = FontSpec::default();
        let font = make_font(&mut fonts, font_spec);
        Self {
            canvas,
            fill: skia::Color::BLACK,
            stroke: skia::Color::BLACK,
            line_width: 1.0,
            font_cache: vec![(font_spec, font.clone())],
            fonts,
            font_spec,
            font,
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
            path: skia::Path::new(),
        }
    }

    fn paint(&self, style: skia::paint::Style) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(style);
        match style {
            skia::paint::Style::Stroke => {
                paint.set_color(self.stroke);
                paint.set_stroke_width(self.line_width);
            }
            _ => {
                paint.set_color(self.fill);
            }
        }
        paint
    }
}

/// Resolve a CSS token to a Skia color; unknown tokens paint black.
pub fn to_skia_color(token: &str) -> skia::Color {
    let c = color::parse(token).unwrap_or_else(|| {
        tracing::warn!(token, "unsupported color token, using black");
        Rgba::BLACK
    });
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn make_font(fonts: &mut FontCollection, spec: FontSpec) -> skia::Font {
    let style = if spec.bold { skia::FontStyle::bold() } else { skia::FontStyle::normal() };
    let mut families = vec![spec.family];
    families.extend(FALLBACK_FAMILIES.iter().copied().filter(|f| *f != spec.family));
    let typeface = fonts
        .find_typefaces(&families, style)
        .into_iter()
        .next()
        .or_else(|| skia::FontMgr::default().legacy_make_typeface(None, style));
    let mut font = match typeface {
        Some(tf) => skia::Font::from_typeface(tf, spec.size),
        None => {
            let mut f = skia::Font::default();
            f.set_size(spec.size);
            f
        }
    };
    if spec.bold {
        font.set_embolden(true);
    }
    font
}

impl DrawContext for SkiaContext<'_> {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let mut paint = skia::Paint::default();
        paint.set_blend_mode(skia::BlendMode::Clear);
        let rect = skia::Rect::from_xywh(x as f32, y as f32, w as f32, h as f32);
        self.canvas.draw_rect(rect, &paint);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.fill = to_skia_color(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.stroke = to_skia_color(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width as f32;
    }

    fn set_font(&mut self, font: FontSpec) {
        if font == self.font_spec {
            return;
        }
        let resolved = match self.font_cache.iter().find(|(spec, _)| *spec == font) {
            Some((_, cached)) => cached.clone(),
            None => {
                let made = make_font(&mut self.fonts, font);
                self.font_cache.push((font, made.clone()));
                made
            }
        };
        self.font_spec = font;
        self.font = resolved;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.baseline = baseline;
    }

    fn begin_path(&mut self) {
        self.path = skia::Path::new();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to((x as f32, y as f32));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to((x as f32, y as f32));
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        let sweep = end - start;
        if sweep >= std::f64::consts::TAU - 1e-9 {
            self.path.add_circle((cx as f32, cy as f32), radius as f32, None);
            return;
        }
        let oval = skia::Rect::from_ltrb(
            (cx - radius) as f32,
            (cy - radius) as f32,
            (cx + radius) as f32,
            (cy + radius) as f32,
        );
        self.path.arc_to(oval, start.to_degrees() as f32, sweep.to_degrees() as f32, false);
    }

    fn close_path(&mut self) {
        self.path.close();
    }

    fn fill(&mut self) {
        let paint = self.paint(skia::paint::Style::Fill);
        self.canvas.draw_path(&self.path, &paint);
    }

    fn stroke(&mut self) {
        let paint = self.paint(skia::paint::Style::Stroke);
        self.canvas.draw_path(&self.path, &paint);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let paint = self.paint(skia::paint::Style::Fill);
        self.canvas.draw_rect(skia::Rect::from_xywh(x as f32, y as f32, w as f32, h as f32), &paint);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let paint = self.paint(skia::paint::Style::Stroke);
        self.canvas.draw_rect(skia::Rect::from_xywh(x as f32, y as f32, w as f32, h as f32), &paint);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let paint = self.paint(skia::paint::Style::Fill);
        let (width, _) = self.font.measure_str(text, None);
        let dx = match self.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => width * 0.5,
            TextAlign::Right => width,
        };
        let dy = match self.baseline {
            TextBaseline::Alphabetic => 0.0,
            TextBaseline::Middle => {
                let (_, metrics) = self.font.metrics();
                -(metrics.ascent + metrics.descent) * 0.5
            }
        };
        self.canvas.draw_str(text, (x as f32 - dx, y as f32 + dy), &self.font, &paint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fonts_are_resolved_once_per_spec() {
        let mut surface = skia::surfaces::raster_n32_premul((16, 16)).expect("surface");
        let mut ctx = SkiaContext::new(surface.canvas());
        let label = FontSpec::new("Arial", 12.0);
        for _ in 0..3 {
            ctx.set_font(label.bold());
            ctx.set_font(label);
        }
        assert_eq!(ctx.font_cache.len(), 3);
        assert_eq!(ctx.font.size(), 12.0);
    }

    #[test]
    fn unknown_family_falls_back_at_requested_size() {
        let mut surface = skia::surfaces::raster_n32_premul((16, 16)).expect("surface");
        let mut ctx = SkiaContext::new(surface.canvas());
        ctx.set_font(FontSpec::new("No Such Family", 14.0));
        assert_eq!(ctx.font.size(), 14.0);
    }

    #[test]
    fn unknown_color_token_paints_black() {
        assert_eq!(to_skia_color("not-a-color"), skia::Color::BLACK);
        assert_eq!(to_skia_color("#f00"), skia::Color::from_rgb(255, 0, 0));
    }
}
