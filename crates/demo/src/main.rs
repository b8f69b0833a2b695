// File: crates/demo/src/main.rs
// Summary: Loads a JSON or CSV dataset, declares a chart on an in-memory host and writes the rendered PNG.

mod page;

use anyhow::{Context, Result};
use clap::Parser;
use petal_core::config::{ATTR_COLORS, ATTR_DATA, ATTR_KIND, ATTR_TITLE};
use petal_core::types::{HEIGHT, WIDTH};
use petal_core::{ChartEngine, ChartKind, DataPoint, Host, LogicalSize};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::page::PageHost;

#[derive(Parser, Debug)]
#[command(name = "petal-demo", about = "Render a line, bar or pie chart from a dataset file to PNG")]
struct Args {
    /// Dataset: JSON array of {label, value} objects, or CSV with label,value columns.
    input: PathBuf,
    /// Chart type.
    #[arg(long = "type", default_value = "bar")]
    kind: ChartKind,
    /// JSON array of CSS colors, e.g. '["#4CAF50","#FF9800"]'.
    #[arg(long)]
    colors: Option<String>,
    #[arg(long)]
    title: Option<String>,
    #[arg(long, default_value_t = WIDTH)]
    width: f64,
    #[arg(long, default_value_t = HEIGHT)]
    height: f64,
    /// Device pixel ratio of the simulated display.
    #[arg(long)]
    dpr: Option<f64>,
    /// Re-layout the host box to WIDTHxHEIGHT after attaching, before encoding.
    #[arg(long, value_parser = parse_box)]
    resize: Option<LogicalSize>,
    /// Output PNG; defaults to target/out/chart_<stem>_<type>.png.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let data = load_dataset(&args.input).with_context(|| format!("failed to load '{}'", args.input.display()))?;
    tracing::info!(points = data.len(), input = %args.input.display(), "dataset loaded");

    let mut host = PageHost::new(LogicalSize::new(args.width, args.height), args.dpr);
    host.set_attribute(ATTR_KIND, args.kind.as_str());
    host.set_attribute(ATTR_DATA, &serde_json::to_string(&data)?);
    if let Some(colors) = &args.colors {
        host.set_attribute(ATTR_COLORS, colors);
    }
    if let Some(title) = &args.title {
        host.set_attribute(ATTR_TITLE, title);
    }

    let mut engine = ChartEngine::new();
    let handle = engine.attach(&mut host).context("chart could not be attached")?;
    let view = host.view().context("host has no mounted chart")?;
    if let Some(size) = args.resize {
        host.relayout(size, args.dpr);
        tracing::info!(width = size.width, height = size.height, renders = view.borrow().render_count(), "host re-laid out");
    }

    let out = args.out.clone().unwrap_or_else(|| out_name_with(&args.input, args.kind.as_str()));
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let png = view.borrow_mut().surface_mut().encode_png()?;
    std::fs::write(&out, png).with_context(|| format!("writing {}", out.display()))?;

    let (bw, bh) = view.borrow().surface().backing_size();
    println!("Wrote {} ({}x{} px, {handle})", out.display(), bw, bh);

    engine.detach(&mut host);
    Ok(())
}

/// Parse `WIDTHxHEIGHT`, e.g. `800x500`.
fn parse_box(s: &str) -> Result<LogicalSize, String> {
    let (w, h) = s.split_once(|c: char| c == 'x' || c == 'X').ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let dim = |v: &str| v.trim().parse::<f64>().map_err(|e| format!("{v:?}: {e}"));
    Ok(LogicalSize::new(dim(w)?, dim(h)?))
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("chart_{stem}_{suffix}.png"))
}

fn load_dataset(path: &Path) -> Result<Vec<DataPoint>> {
    match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("csv") => load_csv(path),
        _ => {
            let text = std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
            Ok(serde_json::from_str(&text)?)
        }
    }
}

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(default)]
    label: Option<String>,
    value: f64,
}

/// CSV with a `value` column and an optional `label` column; header names are case-insensitive.
fn load_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<csv::StringRecord>();
    tracing::debug!(?headers, "csv headers");
    rdr.set_headers(headers);

    let mut out = Vec::new();
    for (i, rec) in rdr.deserialize::<Row>().enumerate() {
        let row = rec.with_context(|| format!("row {}", i + 1))?;
        out.push(DataPoint { label: row.label.filter(|l| !l.is_empty()), value: row.value });
    }
    Ok(out)
}
