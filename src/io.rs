//! CSV output for the sample sequence.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
struct SampleRow {
    hausdorff_dimension: f64,
}

pub fn ensure_outdir(outdir: &Path) -> Result<()> {
    fs::create_dir_all(outdir)
        .with_context(|| format!("failed to create output directory: {}", outdir.display()))
}

/// Writes the samples as a single-column CSV, one row per iteration.
///
/// The header is written unconditionally, so a zero-iteration run still
/// produces a file containing exactly the header row.
pub fn write_samples_csv(path: &Path, samples: &[f64]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to open samples CSV for writing: {}", path.display()))?;

    wtr.write_record(["Hausdorff_Dimension"])?;
    for &value in samples {
        wtr.serialize(SampleRow {
            hausdorff_dimension: value,
        })?;
    }

    wtr.flush()
        .with_context(|| format!("failed to flush samples CSV: {}", path.display()))?;
    Ok(())
}
