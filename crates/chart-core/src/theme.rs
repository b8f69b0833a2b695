// File: crates/chart-core/src/theme.rs
// Summary: Flat constant table of colors, fonts and tooltip styling.

/// Palette used when none is declared.
pub const DEFAULT_COLOR: &str = "#2196F3";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub font_family: &'static str,
    pub title_font_size: f32,
    pub label_font_size: f32,
    pub axis_color: &'static str,
    pub label_color: &'static str,
    /// Fill of line markers, pie separators and pie percentage labels.
    pub contrast_color: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_text: &'static str,
}

impl Theme {
    pub const fn standard() -> Self {
        Self {
            font_family: "Arial",
            title_font_size: 16.0,
            label_font_size: 12.0,
            axis_color: "#333",
            label_color: "#666",
            contrast_color: "#fff",
            tooltip_background: "rgba(0, 0, 0, 0.8)",
            tooltip_text: "white",
        }
    }

    /// Inline style applied to the tooltip overlay by document-based hosts.
    pub fn tooltip_style(&self) -> String {
        format!(
            "position: absolute; display: none; background: {}; color: {}; padding: 8px; \
             border-radius: 4px; font-size: {}px; font-family: {}; pointer-events: none; z-index: 1000;",
            self.tooltip_background, self.tooltip_text, self.label_font_size, self.font_family
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}
