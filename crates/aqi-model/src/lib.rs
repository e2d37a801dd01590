//! # aqi-model: Serialized Model Artifacts
//!
//! Deserializes the two pre-trained pipelines the toolkit ships with and
//! exposes them behind the `aqi-core` model traits. Nothing here trains or
//! evaluates anything; the artifacts are the exported parameters of
//! pipelines trained elsewhere, and this crate only loads them (once, at
//! process start) and runs their forward pass.
//!
//! ## Artifact format
//!
//! Both artifacts are JSON documents carrying a `schema_version` field,
//! checked at load time:
//!
//! - `aqi_regressor.json` → [`LinearRegressor`]: intercept, one weight per
//!   numeric feature column, and optional per-country / per-city offset
//!   tables produced by the original pipeline's target encoding.
//! - `aqi_classifier.json` → [`ThresholdClassifier`]: its own linear score
//!   plus ordered `(upper bound, label)` bands; the final band is
//!   open-ended and catches everything above the last bound.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use aqi_core::{schema, AqiError, AqiResult, Classifier, FeatureRow, ModelStore, Regressor};

/// Artifact format revision this build understands.
pub const ARTIFACT_SCHEMA_VERSION: u32 = 1;

/// File name of the regression artifact inside the models directory.
pub const REGRESSOR_FILE: &str = "aqi_regressor.json";

/// File name of the classification artifact inside the models directory.
pub const CLASSIFIER_FILE: &str = "aqi_classifier.json";

/// Linear AQI regressor: intercept + per-feature weights + categorical
/// offsets. Unknown countries and cities contribute no offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegressor {
    schema_version: u32,
    intercept: f64,
    weights: BTreeMap<String, f64>,
    #[serde(default)]
    country_offsets: BTreeMap<String, f64>,
    #[serde(default)]
    city_offsets: BTreeMap<String, f64>,
}

impl LinearRegressor {
    /// Deserialize and validate the artifact at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let model: Self = read_artifact(path)?;
        model
            .validate()
            .with_context(|| format!("invalid regressor artifact '{}'", path.display()))?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        check_schema_version(self.schema_version)?;
        check_feature_weights(&self.weights)?;
        Ok(())
    }

    fn score(&self, row: &FeatureRow) -> AqiResult<f64> {
        let mut score = linear_score(self.intercept, &self.weights, row)?;
        score += self.country_offsets.get(&row.country).copied().unwrap_or(0.0);
        score += self.city_offsets.get(&row.city).copied().unwrap_or(0.0);
        Ok(score)
    }
}

impl Regressor for LinearRegressor {
    fn predict(&self, row: &FeatureRow) -> AqiResult<f64> {
        self.score(row)
    }
}

/// One decision band of the classifier: every score up to and including
/// `upper` maps to `label`. `upper: None` marks the open-ended final band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Band {
    pub upper: Option<f64>,
    pub label: String,
}

/// Threshold AQI classifier: a linear score cut into ordered bands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdClassifier {
    schema_version: u32,
    intercept: f64,
    weights: BTreeMap<String, f64>,
    bands: Vec<Band>,
}

impl ThresholdClassifier {
    /// Deserialize and validate the artifact at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let model: Self = read_artifact(path)?;
        model
            .validate()
            .with_context(|| format!("invalid classifier artifact '{}'", path.display()))?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        check_schema_version(self.schema_version)?;
        check_feature_weights(&self.weights)?;
        let Some(last) = self.bands.last() else {
            bail!("classifier has no decision bands");
        };
        if last.upper.is_some() {
            bail!("final decision band must be open-ended");
        }
        let bounds: Vec<f64> = self.bands.iter().filter_map(|band| band.upper).collect();
        if bounds.windows(2).any(|pair| pair[0] >= pair[1]) {
            bail!("decision band bounds must be strictly ascending");
        }
        Ok(())
    }
}

impl Classifier for ThresholdClassifier {
    fn predict(&self, row: &FeatureRow) -> AqiResult<String> {
        let score = linear_score(self.intercept, &self.weights, row)?;
        for band in &self.bands {
            if band.upper.map_or(true, |upper| score <= upper) {
                return Ok(band.label.clone());
            }
        }
        // Unreachable once validate() has enforced an open-ended final band.
        Err(AqiError::Model(
            "classifier bands exhausted without a match".into(),
        ))
    }
}

/// Load both artifacts from `dir` and assemble the process-wide store.
pub fn load_store(dir: &Path) -> Result<ModelStore> {
    let regressor = LinearRegressor::load(&dir.join(REGRESSOR_FILE))?;
    let classifier = ThresholdClassifier::load(&dir.join(CLASSIFIER_FILE))?;
    Ok(ModelStore::new(Box::new(regressor), Box::new(classifier)))
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading model artifact '{}'", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing model artifact '{}'", path.display()))
}

fn check_schema_version(found: u32) -> Result<()> {
    if found != ARTIFACT_SCHEMA_VERSION {
        bail!(
            "artifact schema version {} not supported (expected {})",
            found,
            ARTIFACT_SCHEMA_VERSION
        );
    }
    Ok(())
}

fn check_feature_weights(weights: &BTreeMap<String, f64>) -> Result<()> {
    for name in schema::NUMERIC_FEATURE_COLUMNS {
        if !weights.contains_key(name) {
            bail!("artifact has no weight for feature '{}'", name);
        }
    }
    Ok(())
}

fn linear_score(
    intercept: f64,
    weights: &BTreeMap<String, f64>,
    row: &FeatureRow,
) -> AqiResult<f64> {
    let mut score = intercept;
    for (name, value) in row.numeric_features() {
        let weight = weights
            .get(name)
            .ok_or_else(|| AqiError::Model(format!("artifact has no weight for feature '{name}'")))?;
        score += weight * value;
    }
    Ok(score)
}
