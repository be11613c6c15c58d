//! Sidecar record written next to every transformed point table.

use anyhow::{Context, Result};
use planar::Matrix2D;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Commit baked in at build time via `GIT_COMMIT`, if any.
pub fn code_rev() -> Option<&'static str> {
    option_env!("GIT_COMMIT").filter(|rev| !rev.is_empty())
}

/// What produced a point table: inputs, the transform, and post-processing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformRecord {
    pub planar_version: String,
    pub code_rev: Option<String>,
    pub tag: Option<String>,
    pub input: String,
    pub output: String,
    pub matrix: Matrix2D,
    pub snap: String,
    pub rows: usize,
}

impl TransformRecord {
    pub fn new(input: &str, output: &Path, matrix: Matrix2D, snap: &str, rows: usize) -> Self {
        Self {
            planar_version: planar::VERSION.to_string(),
            code_rev: code_rev().map(str::to_string),
            tag: None,
            input: input.to_string(),
            output: output.to_string_lossy().into_owned(),
            matrix,
            snap: snap.to_string(),
            rows,
        }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}

/// `dir/points.csv` → `dir/points.provenance.json`.
pub fn sidecar_path(table: &Path) -> PathBuf {
    table.with_extension("provenance.json")
}

/// Write `record` beside `table` and return the sidecar path.
pub fn write_sidecar(table: &Path, record: &TransformRecord) -> Result<PathBuf> {
    let path = sidecar_path(table);
    fs::write(&path, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
