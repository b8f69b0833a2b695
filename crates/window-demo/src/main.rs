// File: crates/window-demo/src/main.rs
// Summary: Windowed demo; the window is a chart host, frames are composed on the CPU and blitted with softbuffer.
// Keys: any key cycles line -> bar -> pie. Hovering a data point shows its tooltip.

mod host;

use anyhow::{Context, Result};
use petal_core::config::{ATTR_COLORS, ATTR_DATA, ATTR_KIND, ATTR_TITLE};
use petal_core::{ChartEngine, ChartKind, DataPoint, Host};
use std::num::NonZeroU32;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::host::WindowHost;

const PALETTE: &str = r##"["#2196F3","#4CAF50","#FF9800","#9C27B0","#F44336","#00BCD4"]"##;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Arg: JSON dataset path; built-in sample otherwise
    let data = match std::env::args().nth(1) {
        Some(path) => load_json(Path::new(&path))?,
        None => sample(),
    };

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Petal Chart - Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(800.0, 500.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut host = WindowHost::new(window.inner_size(), window.scale_factor());
    host.set_attribute(ATTR_DATA, &serde_json::to_string(&data)?);
    host.set_attribute(ATTR_COLORS, PALETTE);

    let mut engine = ChartEngine::new();
    let mut kind_idx = 0usize;
    attach_kind(&mut engine, &mut host, ChartKind::ALL[kind_idx])?;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    engine.detach(&mut host);
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    host.relayout(new_size, window.scale_factor());
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged { scale_factor, new_inner_size } => {
                    host.relayout(*new_inner_size, scale_factor);
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    host.pointer_at(position.x, position.y);
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    host.pointer_left();
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput { input, .. } if input.state == ElementState::Pressed => {
                    kind_idx = (kind_idx + 1) % ChartKind::ALL.len();
                    if let Err(e) = attach_kind(&mut engine, &mut host, ChartKind::ALL[kind_idx]) {
                        tracing::error!(error = %e, "switching chart type failed");
                    }
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&host, &mut surface) {
                    tracing::error!(error = %e, "present failed");
                }
            }
            _ => {}
        }
    });
}

fn attach_kind(engine: &mut ChartEngine, host: &mut WindowHost, kind: ChartKind) -> Result<()> {
    host.set_attribute(ATTR_KIND, kind.as_str());
    host.set_attribute(ATTR_TITLE, &format!("{kind} chart (press any key)"));
    let handle = engine.attach(host)?;
    tracing::info!(%handle, %kind, "chart shown");
    Ok(())
}

/// Compose chart + tooltip and copy into the window buffer over a white page.
fn present(host: &WindowHost, surface: &mut softbuffer::Surface) -> Result<()> {
    let size = host.physical_size();
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow::anyhow!("resize buffer: {e}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame: {e}"))?;
    frame.fill(0x00FF_FFFF);

    if let Some(view) = host.view() {
        let (rgba, cw, ch, stride) = view.borrow_mut().compose_rgba8()?;
        let (fw, fh) = (w.get() as usize, h.get() as usize);
        for y in 0..fh.min(ch as usize) {
            for x in 0..fw.min(cw as usize) {
                let px = &rgba[y * stride + x * 4..y * stride + x * 4 + 4];
                let a = px[3] as u32;
                let over = |c: u8| (c as u32 * a + 255 * (255 - a)) / 255;
                // softbuffer expects 0RGB
                frame[y * fw + x] = (over(px[0]) << 16) | (over(px[1]) << 8) | over(px[2]);
            }
        }
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}

fn load_json(path: &Path) -> Result<Vec<DataPoint>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn sample() -> Vec<DataPoint> {
    [("Jan", 12.0), ("Feb", 19.0), ("Mar", 3.0), ("Apr", 5.0), ("May", 2.0), ("Jun", 3.0)]
        .into_iter()
        .map(|(l, v)| DataPoint::new(l, v))
        .collect()
}
