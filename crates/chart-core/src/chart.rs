// File: crates/chart-core/src/chart.rs
// Summary: Chart options snapshot and the headless PNG/RGBA rendering pipeline.

use crate::error::{ConfigError, SurfaceError};
use crate::geometry::LogicalSize;
use crate::render::{self, Frame};
use crate::series::{self, ChartKind, ColorPalette, Dataset};
use crate::surface::ChartSurface;
use crate::theme::Theme;
use crate::types::{Margin, HEIGHT, WIDTH};

/// Immutable description of one chart: what to draw, in which colors, under which title.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub kind: ChartKind,
    pub data: Dataset,
    pub colors: ColorPalette,
    pub title: Option<String>,
}

impl ChartOptions {
    /// Build options, rejecting datasets no chart can be drawn from.
    pub fn new(kind: ChartKind, data: Dataset) -> Result<Self, ConfigError> {
        if data.is_empty() {
            return Err(ConfigError::EmptyDataset { kind });
        }
        if kind == ChartKind::Pie {
            let total = series::total(&data);
            if !(total.is_finite() && total > 0.0) {
                return Err(ConfigError::NonPositiveTotal { total });
            }
        }
        Ok(Self { kind, data, colors: ColorPalette::default(), title: None })
    }

    pub fn with_colors(mut self, colors: ColorPalette) -> Self {
        self.colors = colors;
        self
    }

    /// Set the title; an empty string means no title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = if title.is_empty() { None } else { Some(title) };
        self
    }
}

/// Size and look of a headless render.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub size: LogicalSize,
    pub dpr: f64,
    pub margin: Margin,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: LogicalSize::new(WIDTH, HEIGHT),
            dpr: 1.0,
            margin: Margin::default(),
            theme: Theme::standard(),
        }
    }
}

impl ChartOptions {
    /// Render onto a new surface sized per `opts`.
    pub fn render_to_surface(&self, opts: &RenderOptions) -> Result<ChartSurface, SurfaceError> {
        let mut surface = ChartSurface::new(opts.size, Some(opts.dpr))?;
        let frame = Frame::new(surface.display_size(), &opts.margin, &opts.theme);
        surface.draw(|ctx| render::render(ctx, self, &frame));
        Ok(surface)
    }

    /// Render and encode as PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, SurfaceError> {
        self.render_to_surface(opts)?.encode_png()
    }

    /// Render to a PNG at `output_png_path`, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), SurfaceError> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to unpremultiplied RGBA8: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize), SurfaceError> {
        self.render_to_surface(opts)?.read_rgba8()
    }
}
