//! # aqi-core: AQI Toolkit Domain Types
//!
//! Provides the shared vocabulary for the AQI prediction and analysis
//! toolkit: the fixed-schema feature row consumed by the models, the city
//! ranking produced by the analysis path, the dataset column names, the
//! unified error type, and the model traits.
//!
//! ## Quick Start
//!
//! ```rust
//! use aqi_core::{schema, FeatureRow};
//!
//! let row = FeatureRow {
//!     country: "USA".to_string(),
//!     city: "Los Angeles".to_string(),
//!     co_aqi: 1.0,
//!     ozone_aqi: 2.0,
//!     no2_aqi: 3.0,
//!     pm25_aqi: 4.0,
//!     lat: 34.0,
//!     lng: -118.0,
//! };
//!
//! // Numeric features come back paired with their dataset column names,
//! // in the fixed order the models were trained on.
//! let features = row.numeric_features();
//! assert_eq!(features[0], (schema::CO_AQI, 1.0));
//! assert_eq!(features.len(), schema::NUMERIC_FEATURE_COLUMNS.len());
//! ```
//!
//! ## Core Data Structures
//!
//! - [`FeatureRow`] - the single-row model input built by the row resolver
//! - [`CityMean`] - one entry of the aggregated city ranking
//! - [`ModelStore`] - the immutable pair of loaded model artifacts
//! - [`AqiError`] / [`AqiResult`] - unified error handling
//! - [`schema`] - dataset column names and required-column sets

pub mod error;
pub mod model;
pub mod schema;

pub use error::{AqiError, AqiResult};
pub use model::{Classifier, ModelStore, Regressor};

use serde::{Deserialize, Serialize};

/// The fixed-schema single-row input consumed by both predictive models.
///
/// Country and city are copied verbatim from the request; each numeric
/// field holds the matched row's value or, when that value is absent, the
/// dataset-wide mean of its column. Built per request and discarded after
/// inference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub country: String,
    pub city: String,
    pub co_aqi: f64,
    pub ozone_aqi: f64,
    pub no2_aqi: f64,
    pub pm25_aqi: f64,
    pub lat: f64,
    pub lng: f64,
}

impl FeatureRow {
    /// Numeric features paired with their dataset column names, in the
    /// order of [`schema::NUMERIC_FEATURE_COLUMNS`].
    pub fn numeric_features(&self) -> [(&'static str, f64); 6] {
        [
            (schema::CO_AQI, self.co_aqi),
            (schema::OZONE_AQI, self.ozone_aqi),
            (schema::NO2_AQI, self.no2_aqi),
            (schema::PM25_AQI, self.pm25_aqi),
            (schema::LAT, self.lat),
            (schema::LNG, self.lng),
        ]
    }
}

/// One entry of the aggregated city ranking: a city and the mean of its
/// `AQI Value` column over every row in the uploaded dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityMean {
    pub city: String,
    pub mean_aqi: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_features_follow_schema_order() {
        let row = FeatureRow {
            country: "India".into(),
            city: "Delhi".into(),
            co_aqi: 5.0,
            ozone_aqi: 41.0,
            no2_aqi: 12.0,
            pm25_aqi: 180.0,
            lat: 28.65,
            lng: 77.23,
        };
        let names: Vec<&str> = row.numeric_features().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, schema::NUMERIC_FEATURE_COLUMNS.to_vec());
    }

    #[test]
    fn feature_row_round_trips_through_serde() {
        let row = FeatureRow {
            country: "USA".into(),
            city: "Chicago".into(),
            co_aqi: 1.0,
            ozone_aqi: 2.0,
            no2_aqi: 3.0,
            pm25_aqi: 4.0,
            lat: 41.8,
            lng: -87.6,
        };
        let json = serde_json::to_string(&row).unwrap();
        let back: FeatureRow = serde_json::from_str(&json).unwrap();
        assert_eq!(row, back);
    }

    #[test]
    fn prediction_columns_cover_identity_and_features() {
        assert!(schema::PREDICTION_COLUMNS.contains(&schema::COUNTRY));
        assert!(schema::PREDICTION_COLUMNS.contains(&schema::CITY));
        for name in schema::NUMERIC_FEATURE_COLUMNS {
            assert!(schema::PREDICTION_COLUMNS.contains(&name));
        }
    }
}
