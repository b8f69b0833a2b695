// File: crates/chart-core/tests/sizing.rs
// Purpose: Backing resolution follows the device pixel ratio while the display size stays logical.

use petal_core::{ChartKind, ChartOptions, ChartSurface, DataPoint, LogicalSize, RenderOptions};

#[test]
fn backing_scales_with_ratio() {
    let surface = ChartSurface::new(LogicalSize::new(200.0, 100.0), Some(2.0)).expect("surface");
    assert_eq!(surface.backing_size(), (400, 200));
    assert_eq!(surface.display_size(), LogicalSize::new(200.0, 100.0));
    assert_eq!(surface.device_pixel_ratio(), 2.0);
}

#[test]
fn missing_ratio_means_one() {
    let surface = ChartSurface::new(LogicalSize::new(200.0, 100.0), None).expect("surface");
    assert_eq!(surface.backing_size(), (200, 100));
}

#[test]
fn resize_reallocates() {
    let mut surface = ChartSurface::new(LogicalSize::new(200.0, 100.0), None).expect("surface");
    surface.resize(LogicalSize::new(320.0, 240.0), Some(1.5)).expect("resize");
    assert_eq!(surface.backing_size(), (480, 360));
    assert_eq!(surface.display_size().width, 320.0);
}

#[test]
fn zero_area_box_still_renders() {
    let mut surface = ChartSurface::new(LogicalSize::new(0.0, 0.0), None).expect("surface");
    assert_eq!(surface.backing_size(), (0, 0));
    let (px, w, h, _) = surface.read_rgba8().expect("pixels");
    assert_eq!((w, h, px.len()), (1, 1, 4));
}

#[test]
fn headless_render_honours_ratio() {
    let options = ChartOptions::new(ChartKind::Pie, vec![DataPoint::unlabeled(2.0), DataPoint::unlabeled(3.0)]).unwrap();
    let opts = RenderOptions { size: LogicalSize::new(200.0, 100.0), dpr: 2.0, ..RenderOptions::default() };
    let (px, w, h, stride) = options.render_to_rgba8(&opts).expect("rgba");
    assert_eq!((w, h), (400, 200));
    assert_eq!(px.len(), stride * h as usize);

    // Pie center (100, 50) logical lands at (200, 100) device pixels and is painted.
    assert_eq!(px[100 * stride + 200 * 4 + 3], 255);
}
