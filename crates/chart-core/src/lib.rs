// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart engine, renderers and geometry.

pub mod chart;
pub mod color;
pub mod config;
pub mod context;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod host;
pub mod layout;
pub mod record;
pub mod registry;
pub mod render;
pub mod scale;
pub mod series;
pub mod skia_context;
pub mod surface;
pub mod theme;
pub mod tooltip;
pub mod types;
pub mod view;

pub use chart::{ChartOptions, RenderOptions};
pub use config::Declaration;
pub use context::DrawContext;
pub use discovery::{bootstrap, Document};
pub use engine::ChartEngine;
pub use error::{AttachError, ConfigError, SurfaceError};
pub use geometry::{LogicalSize, Point};
pub use hit::{hit_test, Hit};
pub use host::{Host, PointerEvent, ResizeEntry, ResizeWatch, SharedView};
pub use record::{DrawOp, Recorder};
pub use registry::Handle;
pub use series::{ChartKind, ColorPalette, DataPoint, Dataset};
pub use surface::ChartSurface;
pub use theme::Theme;
pub use types::Margin;
pub use view::ChartView;
