// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for configuration, surface and attach failures.

use thiserror::Error;

use crate::series::ChartKind;

/// Invalid chart declaration read from host attributes.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid chart type: {found:?}. Must be one of: line, bar, pie")]
    InvalidKind { found: String },
    #[error("malformed chart data: {0}")]
    MalformedData(#[source] serde_json::Error),
    #[error("malformed color palette: {0}")]
    MalformedColors(#[source] serde_json::Error),
    #[error("{kind} chart needs at least one data point")]
    EmptyDataset { kind: ChartKind },
    #[error("pie chart values must sum to a positive total, got {total}")]
    NonPositiveTotal { total: f64 },
}

/// Raster surface allocation or readback failure.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to create {width}x{height} raster surface")]
    Allocation { width: i32, height: i32 },
    #[error("failed to read surface pixels")]
    ReadPixels,
    #[error("failed to encode PNG")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Attribute value that is not a `petal-<n>` handle.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("not a chart handle")]
pub struct ParseHandleError;

/// Reason an `attach` call did not register a chart.
#[derive(Debug, Error)]
pub enum AttachError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
