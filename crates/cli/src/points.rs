//! Point tables on disk: CSV with `x` and `y` columns.

use anyhow::{anyhow, Context, Result};
use planar::Vec2;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Read all rows of `x`,`y` as `Vec2`. Null cells are an error.
pub fn read_points(path: &str) -> Result<Vec<Vec2>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {path}"))?
        .select([
            col("x").cast(DataType::Float32),
            col("y").cast(DataType::Float32),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {path}"))?;
    let xs = df.column("x")?.f32()?;
    let ys = df.column("y")?.f32()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => Err(anyhow!("{path}: null coordinate in row {row}")),
        })
        .collect()
}

/// Write points as a CSV with `x`,`y` columns, creating parent directories.
pub fn write_points(path: &Path, points: &[Vec2]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let xs: Vec<f32> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f32> = points.iter().map(|p| p.y).collect();
    let mut df = DataFrame::new(vec![Series::new("x".into(), xs), Series::new("y".into(), ys)])?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}
