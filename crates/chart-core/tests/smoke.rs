// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG for every chart kind.

use petal_core::{ChartKind, ChartOptions, ColorPalette, DataPoint, RenderOptions};

fn sample(kind: ChartKind) -> ChartOptions {
    let data = vec![
        DataPoint::new("Jan", 12.0),
        DataPoint::new("Feb", 19.0),
        DataPoint::new("Mar", 3.0),
        DataPoint::new("Apr", 5.0),
    ];
    ChartOptions::new(kind, data).expect("valid options").with_title(format!("{kind} smoke"))
}

#[test]
fn render_smoke_png() {
    let opts = RenderOptions::default();
    for kind in ChartKind::ALL {
        let out = std::path::PathBuf::from(format!("target/test_out/smoke_{kind}.png"));
        sample(kind).render_to_png(&opts, &out).expect("render should succeed");
        let meta = std::fs::metadata(&out).expect("output exists");
        assert!(meta.len() > 0, "png should be non-empty");

        let bytes = sample(kind).render_to_png_bytes(&opts).expect("render bytes");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    }
}

#[test]
fn render_rgba8_buffer() {
    let data = vec![DataPoint::new("A", 10.0), DataPoint::new("B", 30.0)];
    let options = ChartOptions::new(ChartKind::Bar, data)
        .unwrap()
        .with_colors(ColorPalette::new(vec!["#000".to_string()]));

    let (px, w, h, stride) = options.render_to_rgba8(&RenderOptions::default()).expect("rgba render");
    assert_eq!((w, h), (600, 400));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Cleared background stays transparent.
    assert_eq!(px[3], 0);

    // Interior of the second bar (x 310..526, y 70..370) is the palette color.
    let at = |x: usize, y: usize| &px[y * stride + x * 4..y * stride + x * 4 + 4];
    assert_eq!(at(418, 220), &[0, 0, 0, 255]);
}

#[test]
fn pie_wedges_land_where_hit_test_expects() {
    use petal_core::{hit_test, LogicalSize, Margin, Point};

    let data = vec![DataPoint::unlabeled(1.0), DataPoint::unlabeled(1.0), DataPoint::unlabeled(2.0)];
    let options = ChartOptions::new(ChartKind::Pie, data.clone())
        .unwrap()
        .with_colors(ColorPalette::new(["#f00", "#0f0", "#00f"].map(String::from).to_vec()));
    let opts = RenderOptions::default();
    let (px, _, _, stride) = options.render_to_rgba8(&opts).expect("rgba render");
    let at = |x: usize, y: usize| px[y * stride + x * 4..y * stride + x * 4 + 4].to_vec();

    // First slice starts at 12 o'clock and runs clockwise; the last one covers the left half.
    let samples = [((350, 150), [255, 0, 0, 255], 0), ((350, 250), [0, 255, 0, 255], 1), ((250, 200), [0, 0, 255, 255], 2)];
    for ((x, y), rgba, index) in samples {
        assert_eq!(at(x, y), rgba.to_vec(), "pixel at ({x}, {y})");
        let hit = hit_test(ChartKind::Pie, &data, LogicalSize::new(600.0, 400.0), &Margin::default(), Point::new(x as f64, y as f64));
        assert_eq!(hit.map(|h| h.index), Some(index));
    }
}
