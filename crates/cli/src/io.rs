//! Point-file input and hull report output.
//!
//! Inputs: CSV with `x` and `y` columns (read through Polars, any numeric
//! dtype) or a JSON array of `{ "x": .., "y": .. }`. Row order defines the
//! point index that tags every hull vertex.

use anyhow::{anyhow, bail, Context, Result};
use dchull::hull::ConvexHull;
use dchull::Vec2;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// One input row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
}

/// A hull vertex with its input row index.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Output document of the `hull` command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HullReport {
    pub points: usize,
    /// Hull vertices in `clockwise` order.
    pub vertices: Vec<VertexRecord>,
    /// Directed edges as input row indices.
    pub edges: Vec<[usize; 2]>,
    pub elapsed_ms: f64,
}

impl HullReport {
    pub fn from_hull(hull: &ConvexHull<usize>, points: usize, elapsed: Duration) -> Self {
        let vertices = hull
            .vertices()
            .map(|p| VertexRecord {
                index: p.tag,
                x: p.x(),
                y: p.y(),
            })
            .collect();
        let edges = hull
            .edge_tags()
            .into_iter()
            .map(|(a, b)| [*a, *b])
            .collect();
        Self {
            points,
            vertices,
            edges,
            elapsed_ms: elapsed.as_secs_f64() * 1e3,
        }
    }
}

pub fn read_points(path: &Path) -> Result<Vec<PointRecord>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => read_json(path),
        Some("csv") => read_csv(path),
        other => bail!(
            "unsupported input extension {:?} for {} (expected .csv or .json)",
            other,
            path.display()
        ),
    }
}

fn read_json(path: &Path) -> Result<Vec<PointRecord>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn read_csv(path: &Path) -> Result<Vec<PointRecord>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns of {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(PointRecord { x, y }),
            _ => Err(anyhow!("{}: row {row} is missing x or y", path.display())),
        })
        .collect()
}

/// Write points as a two-column `x,y` CSV.
pub fn write_csv(path: &Path, points: &[Vec2<f64>]) -> Result<()> {
    ensure_parent(path)?;
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}

pub fn write_json<S: Serialize>(path: &Path, value: &S) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}
