// File: crates/chart-core/src/series.rs
// Summary: Data model for a single labeled series, its color palette and the chart kind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::DEFAULT_COLOR;

/// Chart body selected by the `data-petal` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Line, ChartKind::Bar, ChartKind::Pie];

    pub const fn as_str(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidKind { found: s.to_string() })
    }
}

/// One labeled value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: Some(label.into()), value }
    }

    pub fn unlabeled(value: f64) -> Self {
        Self { label: None, value }
    }

    /// Label shown on axes and in the legend; falls back to the position when absent or empty.
    pub fn display_label(&self, index: usize) -> String {
        match self.label.as_deref() {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => index.to_string(),
        }
    }
}

/// Ordered data points; order defines X categories and pie slice order.
pub type Dataset = Vec<DataPoint>;

/// Sum of all values.
pub fn total(data: &[DataPoint]) -> f64 {
    data.iter().map(|p| p.value).sum()
}

/// Ordered color tokens cycled by dataset position. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorPalette {
    colors: Vec<String>,
}

impl ColorPalette {
    /// Build a palette; an empty list falls back to the default single-color palette.
    pub fn new(colors: Vec<String>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors }
    }

    /// Color for dataset position `index` (`colors[index % len]`).
    pub fn get(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    pub fn primary(&self) -> &str {
        self.get(0)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_slice(&self) -> &[String] {
        &self.colors
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self { colors: vec![DEFAULT_COLOR.to_string()] }
    }
}

impl<S: Into<String>> FromIterator<S> for ColorPalette {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_known_names_only() {
        assert_eq!("pie".parse::<ChartKind>().unwrap(), ChartKind::Pie);
        assert!(matches!("scatter".parse::<ChartKind>(), Err(ConfigError::InvalidKind { .. })));
        assert!("Line".parse::<ChartKind>().is_err());
    }

    #[test]
    fn palette_cycles_and_never_empties() {
        let p: ColorPalette = ["#000", "#111"].into_iter().collect();
        assert_eq!(p.get(3), "#111");
        let empty = ColorPalette::new(Vec::new());
        assert_eq!(empty.get(7), DEFAULT_COLOR);
    }

    #[test]
    fn label_defaults_to_index() {
        assert_eq!(DataPoint::unlabeled(1.0).display_label(2), "2");
        assert_eq!(DataPoint::new("", 1.0).display_label(0), "0");
        assert_eq!(DataPoint::new("Q1", 1.0).display_label(0), "Q1");
    }
}
