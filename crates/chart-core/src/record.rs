// File: crates/chart-core/src/record.rs
// Summary: Recording DrawContext producing a display list, for tests and diagnostics.

use crate::context::{DrawContext, FontSpec, TextAlign, TextBaseline};

/// Path segment as issued by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc { cx: f64, cy: f64, radius: f64, start: f64, end: f64 },
    Close,
}

/// One painting operation with the paint state resolved at the time it was issued.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear { x: f64, y: f64, w: f64, h: f64 },
    FillRect { x: f64, y: f64, w: f64, h: f64, color: String },
    StrokeRect { x: f64, y: f64, w: f64, h: f64, color: String, width: f64 },
    FillPath { path: Vec<PathCmd>, color: String },
    StrokePath { path: Vec<PathCmd>, color: String, width: f64 },
    Text { text: String, x: f64, y: f64, color: String, font: FontSpec, align: TextAlign, baseline: TextBaseline },
}

#[derive(Clone, Debug)]
pub struct Recorder {
    ops: Vec<DrawOp>,
    fill: String,
    stroke: String,
    line_width: f64,
    font: FontSpec,
    align: TextAlign,
    baseline: TextBaseline,
    path: Vec<PathCmd>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            fill: "#000".to_string(),
            stroke: "#000".to_string(),
            line_width: 1.0,
            font: FontSpec::default(),
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
            path: Vec::new(),
        }
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Filled rectangles, in drawing order.
    pub fn filled_rects(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::FillRect { .. }))
    }

    /// Text strings, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawContext for Recorder {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(DrawOp::Clear { x, y, w, h });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.fill = color.to_string();
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.stroke = color.to_string();
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_font(&mut self, font: FontSpec) {
        self.font = font;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.baseline = baseline;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(PathCmd::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push(PathCmd::LineTo(x, y));
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.path.push(PathCmd::Arc { cx, cy, radius, start, end });
    }

    fn close_path(&mut self) {
        self.path.push(PathCmd::Close);
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::FillPath { path: self.path.clone(), color: self.fill.clone() });
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::StrokePath {
            path: self.path.clone(),
            color: self.stroke.clone(),
            width: self.line_width,
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(DrawOp::FillRect { x, y, w, h, color: self.fill.clone() });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(DrawOp::StrokeRect { x, y, w, h, color: self.stroke.clone(), width: self.line_width });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            color: self.fill.clone(),
            font: self.font,
            align: self.align,
            baseline: self.baseline,
        });
    }
}
