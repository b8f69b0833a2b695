// File: crates/chart-core/src/config.rs
// Summary: Attribute contract of a host element and parsing it into ChartOptions.

use crate::chart::ChartOptions;
use crate::error::ConfigError;
use crate::host::Host;
use crate::series::{ChartKind, ColorPalette, Dataset};

/// Chart kind: `line`, `bar` or `pie`. Its presence marks a host as a chart declaration.
pub const ATTR_KIND: &str = "data-petal";
/// JSON array of `{ "label"?: string, "value": number }`.
pub const ATTR_DATA: &str = "data-petal-data";
/// JSON array of CSS color strings.
pub const ATTR_COLORS: &str = "data-petal-colors";
pub const ATTR_TITLE: &str = "data-petal-title";
/// Written by the engine on attach; used to find the registry entry on detach.
pub const ATTR_HANDLE: &str = "data-petal-handle";

/// Raw attribute values as declared on a host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Declaration {
    pub kind: Option<String>,
    pub data: Option<String>,
    pub colors: Option<String>,
    pub title: Option<String>,
}

impl Declaration {
    pub fn read(host: &dyn Host) -> Self {
        Self {
            kind: host.attribute(ATTR_KIND),
            data: host.attribute(ATTR_DATA),
            colors: host.attribute(ATTR_COLORS),
            title: host.attribute(ATTR_TITLE),
        }
    }

    /// Parse and validate into an options snapshot.
    ///
    /// Missing data parses as an empty dataset (and is then rejected); missing colors
    /// give the default palette; a missing or empty title gives no title.
    pub fn parse(&self) -> Result<ChartOptions, ConfigError> {
        let kind: ChartKind = self.kind.as_deref().unwrap_or_default().parse()?;
        let data: Dataset = serde_json::from_str(self.data.as_deref().unwrap_or("[]"))
            .map_err(ConfigError::MalformedData)?;
        let colors = match self.colors.as_deref() {
            Some(raw) => ColorPalette::new(serde_json::from_str(raw).map_err(ConfigError::MalformedColors)?),
            None => ColorPalette::default(),
        };
        let options = ChartOptions::new(kind, data)?.with_colors(colors);
        Ok(match &self.title {
            Some(t) => options.with_title(t.clone()),
            None => options,
        })
    }
}

/// Serialize options back into the attribute contract (what a component wrapper writes).
pub fn declaration_for(options: &ChartOptions) -> Result<Declaration, serde_json::Error> {
    Ok(Declaration {
        kind: Some(options.kind.as_str().to_string()),
        data: Some(serde_json::to_string(&options.data)?),
        colors: Some(serde_json::to_string(options.colors.as_slice())?),
        title: options.title.clone(),
    })
}
