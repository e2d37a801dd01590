//! # aqi-io: Dataset Loading & Validation
//!
//! Loads user-supplied CSV air-quality datasets into polars `DataFrame`s
//! and provides the column-level operations the rest of the workspace
//! builds on: required-column checks, dataset-wide column means, and an
//! explicit optional-field accessor for per-row numeric values.
//!
//! Datasets are loaded fresh on every handler invocation; nothing here
//! caches across calls.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use aqi_core::schema;
//! use aqi_io::{load_dataset, missing_columns};
//!
//! fn main() -> anyhow::Result<()> {
//!     let df = load_dataset(Path::new("global_air_quality.csv"))?;
//!     let missing = missing_columns(&df, &schema::PREDICTION_COLUMNS);
//!     if !missing.is_empty() {
//!         eprintln!("dataset unusable for prediction: {missing:?}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Fallback policy
//!
//! [`numeric_at`] reports a missing *value* as `Ok(None)`; callers decide
//! what stands in for it. The row resolver substitutes [`column_mean`],
//! the arithmetic mean over the full, unfiltered dataset with the
//! column's own nulls excluded.

use std::fs::File;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use polars::prelude::{CsvReader, DataFrame, DataType, SerReader};

/// Load the CSV file at `path` into a `DataFrame`.
///
/// Every handler call re-reads the file; a malformed or unreadable file
/// surfaces as an error with the path in context.
pub fn load_dataset(path: &Path) -> Result<DataFrame> {
    let mut file =
        File::open(path).with_context(|| format!("opening dataset '{}'", path.display()))?;
    let reader = CsvReader::new(&mut file);
    reader
        .finish()
        .with_context(|| format!("reading CSV dataset '{}'", path.display()))
}

/// Return the entries of `required` that are absent from `df`, in the
/// order given. Column names are exact-match and case-sensitive.
pub fn missing_columns<'a>(df: &DataFrame, required: &[&'a str]) -> Vec<&'a str> {
    let present = df.get_column_names();
    required
        .iter()
        .copied()
        .filter(|name| !present.contains(name))
        .collect()
}

/// Arithmetic mean of a column over the entire dataset, nulls excluded.
///
/// Pure function of (dataset, column); this is the substitution value for
/// feature fields missing on a matched row. A column with no numeric
/// values at all is an error, not a silent zero.
pub fn column_mean(df: &DataFrame, name: &str) -> Result<f64> {
    let series = df
        .column(name)
        .with_context(|| format!("column '{}' missing from dataset", name))?;
    series
        .mean()
        .ok_or_else(|| anyhow!("column '{}' has no numeric values to average", name))
}

/// Numeric value of `name` at row `idx`, or `None` when the cell is null.
///
/// Integer-typed CSV columns are cast to f64 before the lookup so callers
/// see one numeric type regardless of how the parser inferred the column.
pub fn numeric_at(df: &DataFrame, name: &str, idx: usize) -> Result<Option<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("column '{}' missing from dataset", name))?;
    let values = series
        .cast(&DataType::Float64)
        .with_context(|| format!("column '{}' is not numeric", name))?;
    let values = values
        .f64()
        .map_err(|err| anyhow!("column '{}' not readable as f64: {}", name, err))?;
    Ok(values.get(idx))
}
