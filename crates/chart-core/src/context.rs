// File: crates/chart-core/src/context.rs
// Summary: Canvas-style drawing context the renderers issue commands against.

/// Horizontal anchoring of text relative to the given x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical anchoring of text relative to the given y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    pub family: &'static str,
    pub size: f32,
    pub bold: bool,
}

impl FontSpec {
    pub const fn new(family: &'static str, size: f32) -> Self {
        Self { family, size, bold: false }
    }
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("sans-serif", 10.0)
    }
}

/// Stateful 2D drawing context in logical pixels.
///
/// Paint state (colors, line width, font, alignment) persists between calls until
/// changed, and path commands accumulate until `begin_path`. Colors are CSS tokens.
pub trait DrawContext {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: FontSpec);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Clockwise arc around `(cx, cy)` from `start` to `end` radians; connects to the current point.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}
