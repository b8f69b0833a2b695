// File: crates/chart-core/src/surface.rs
// Summary: Pixel-density aware raster surface; backing resolution = logical size x device pixel ratio.

use skia_safe as skia;

use crate::context::DrawContext;
use crate::error::SurfaceError;
use crate::geometry::LogicalSize;
use crate::skia_context::SkiaContext;

/// Device pixel ratio to use; absent, non-finite or non-positive ratios mean 1.
pub fn effective_dpr(dpr: Option<f64>) -> f64 {
    match dpr {
        Some(r) if r.is_finite() && r > 0.0 => r,
        _ => 1.0,
    }
}

/// Backing resolution in device pixels, truncated like a canvas dimension.
pub fn backing_for(size: LogicalSize, dpr: f64) -> (u32, u32) {
    let px = |logical: f64| (logical * dpr).max(0.0) as u32;
    (px(size.width), px(size.height))
}

/// Raster drawing target of one chart.
///
/// Drawing happens in logical pixels: the canvas carries a `dpr` scale.
pub struct ChartSurface {
    surface: skia::Surface,
    logical: LogicalSize,
    dpr: f64,
    backing: (u32, u32),
}

impl ChartSurface {
    pub fn new(size: LogicalSize, dpr: Option<f64>) -> Result<Self, SurfaceError> {
        let dpr = effective_dpr(dpr);
        let backing = backing_for(size, dpr);
        let surface = allocate(backing, dpr)?;
        Ok(Self { surface, logical: size, dpr, backing })
    }

    /// Re-allocate the backing store for a new host box. Previous pixels are discarded.
    pub fn resize(&mut self, size: LogicalSize, dpr: Option<f64>) -> Result<(), SurfaceError> {
        let dpr = effective_dpr(dpr);
        let backing = backing_for(size, dpr);
        self.surface = allocate(backing, dpr)?;
        self.logical = size;
        self.dpr = dpr;
        self.backing = backing;
        tracing::debug!(width = size.width, height = size.height, dpr, ?backing, "surface resized");
        Ok(())
    }

    /// Backing resolution in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    /// Displayed size in logical pixels.
    pub fn display_size(&self) -> LogicalSize {
        self.logical
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.dpr
    }

    /// Run `f` against a fresh drawing context over this surface.
    pub fn draw<R>(&mut self, f: impl FnOnce(&mut dyn DrawContext) -> R) -> R {
        let canvas = self.surface.canvas();
        let mut ctx = SkiaContext::new(canvas);
        f(&mut ctx)
    }

    pub fn image_snapshot(&mut self) -> skia::Image {
        self.surface.image_snapshot()
    }

    /// Copy `image` to the top-left corner in device pixels, ignoring the dpr scale.
    pub fn blit(&mut self, image: &skia::Image) {
        let canvas = self.surface.canvas();
        canvas.save();
        canvas.reset_matrix();
        canvas.draw_image(image, (0.0, 0.0), None);
        canvas.restore();
    }

    /// Copy out unpremultiplied RGBA8 pixels: (pixels, width, height, stride).
    pub fn read_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize), SurfaceError> {
        let (w, h) = (self.surface.width(), self.surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(SurfaceError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    pub fn encode_png(&mut self) -> Result<Vec<u8>, SurfaceError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(SurfaceError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }
}

// A zero-area box still gets a one-pixel allocation so the chart can be drawn (invisibly).
fn allocate(backing: (u32, u32), dpr: f64) -> Result<skia::Surface, SurfaceError> {
    let width = backing.0.max(1) as i32;
    let height = backing.1.max(1) as i32;
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or(SurfaceError::Allocation { width, height })?;
    surface.canvas().scale((dpr as f32, dpr as f32));
    Ok(surface)
}
