// File: crates/chart-core/src/view.rs
// Summary: Mounted chart: owns its surface, tooltip overlay and options snapshot; reacts to pointer and resize.

use crate::chart::ChartOptions;
use crate::error::SurfaceError;
use crate::geometry::{LogicalSize, Point};
use crate::hit::{hit_test, Hit};
use crate::host::{PointerEvent, ResizeEntry};
use crate::render::{self, Frame};
use crate::surface::ChartSurface;
use crate::theme::Theme;
use crate::tooltip::Tooltip;
use crate::types::Margin;

pub struct ChartView {
    options: ChartOptions,
    surface: ChartSurface,
    tooltip: Tooltip,
    margin: Margin,
    theme: Theme,
    renders: u64,
}

impl ChartView {
    /// Create the surface for a host box. Nothing is drawn until [`ChartView::render`].
    pub fn new(
        options: ChartOptions,
        size: LogicalSize,
        dpr: Option<f64>,
        margin: Margin,
        theme: Theme,
    ) -> Result<Self, SurfaceError> {
        let surface = ChartSurface::new(size, dpr)?;
        Ok(Self { options, surface, tooltip: Tooltip::default(), margin, theme, renders: 0 })
    }

    /// Redraw the whole chart from the options snapshot.
    pub fn render(&mut self) {
        let frame = Frame::new(self.surface.display_size(), &self.margin, &self.theme);
        let options = &self.options;
        self.surface.draw(|ctx| render::render(ctx, options, &frame));
        self.renders += 1;
    }

    /// Re-size the surface to the notified box and redraw.
    pub fn resize(&mut self, entry: &ResizeEntry) -> Result<(), SurfaceError> {
        self.surface.resize(entry.size, entry.device_pixel_ratio)?;
        self.render();
        Ok(())
    }

    /// Data point under `(x, y)` in logical surface coordinates.
    pub fn hit(&self, x: f64, y: f64) -> Option<Hit<'_>> {
        hit_test(
            self.options.kind,
            &self.options.data,
            self.surface.display_size(),
            &self.margin,
            Point::new(x, y),
        )
    }

    /// Update the tooltip for a pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Move { x, y } => {
                let point = self.hit(x, y).map(|h| h.point.clone());
                match point {
                    Some(p) => self.tooltip.show(&p, x, y),
                    None => self.tooltip.hide(),
                }
            }
            PointerEvent::Leave => self.tooltip.hide(),
        }
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn surface(&self) -> &ChartSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut ChartSurface {
        &mut self.surface
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Number of completed renders since creation.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Chart pixels with the tooltip painted on top, for hosts without an overlay layer.
    pub fn compose_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize), SurfaceError> {
        let chart = self.surface.image_snapshot();
        let mut composed = ChartSurface::new(self.surface.display_size(), Some(self.surface.device_pixel_ratio()))?;
        composed.blit(&chart);
        let (tooltip, theme) = (&self.tooltip, &self.theme);
        composed.draw(|ctx| tooltip.paint(ctx, theme));
        composed.read_rgba8()
    }
}
