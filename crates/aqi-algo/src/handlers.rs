//! Request handlers composing load, resolve, predict, and rank.
//!
//! Each handler re-reads the dataset from disk, runs to completion, and
//! returns a single synchronous result. Expected conditions (no matching
//! row, dataset unusable for the operation) come back as user-facing
//! strings; unreadable files propagate as errors for the shell to report.

use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::predictor::predict_message;
use crate::ranking::top_polluted_cities;
use crate::resolver::resolve;
use aqi_core::{schema, CityMean, ModelStore};
use aqi_io::{load_dataset, missing_columns};

/// Reply when no row matches the requested (country, city) pair.
pub const NOT_FOUND_MESSAGE: &str = "No matching data found for the specified Country and City.";

/// How many cities the analysis path reports.
pub const TOP_CITY_LIMIT: usize = 10;

/// Result of the analysis handler: either the ranked cities to chart, or
/// a message explaining why the dataset cannot be analyzed.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisOutcome {
    Ranking(Vec<CityMean>),
    MissingColumns(String),
}

/// The unusable-dataset reply, naming every required column (not just the
/// missing ones).
pub fn missing_columns_message(required: &[&str]) -> String {
    format!("Dataset is missing required columns: {}", required.join(", "))
}

/// Load the dataset at `path` and predict for the (country, city) pair.
///
/// The dataset must carry all eight prediction columns; otherwise the
/// models are never invoked and the reply names the full required set.
pub fn upload_and_predict(
    store: &ModelStore,
    path: &Path,
    country: &str,
    city: &str,
) -> Result<String> {
    let dataset = load_dataset(path)?;
    let missing = missing_columns(&dataset, &schema::PREDICTION_COLUMNS);
    if !missing.is_empty() {
        warn!(?missing, "dataset unusable for prediction");
        return Ok(missing_columns_message(&schema::PREDICTION_COLUMNS));
    }
    match resolve(&dataset, country, city)? {
        Some(row) => {
            info!(country, city, "matched row, running models");
            predict_message(store, &row)
        }
        None => {
            info!(country, city, "no matching row");
            Ok(NOT_FOUND_MESSAGE.to_string())
        }
    }
}

/// Load the dataset at `path` and rank the most polluted cities.
///
/// Guards the two analysis columns the same way the prediction path
/// guards its eight, then aggregates. Rendering the returned ranking is
/// the chart builder's job.
pub fn analyze(path: &Path) -> Result<AnalysisOutcome> {
    let dataset = load_dataset(path)?;
    let missing = missing_columns(&dataset, &schema::ANALYSIS_COLUMNS);
    if !missing.is_empty() {
        warn!(?missing, "dataset unusable for analysis");
        return Ok(AnalysisOutcome::MissingColumns(missing_columns_message(
            &schema::ANALYSIS_COLUMNS,
        )));
    }
    let ranking = top_polluted_cities(&dataset, TOP_CITY_LIMIT)?;
    info!(cities = ranking.len(), "ranked most polluted cities");
    Ok(AnalysisOutcome::Ranking(ranking))
}
