//! Two-model inference over a resolved feature row.

use anyhow::Result;

use aqi_core::{FeatureRow, ModelStore};

/// Run the regressor and classifier over `row` and format the result.
///
/// The output is exactly two lines: the numeric prediction to two decimal
/// places, then the category label verbatim. No range validation and no
/// confidence reporting; the only side effects are the two model calls.
pub fn predict_message(store: &ModelStore, row: &FeatureRow) -> Result<String> {
    let value = store.regressor().predict(row)?;
    let category = store.classifier().predict(row)?;
    Ok(format!(
        "Predicted AQI Value: {value:.2}\nPredicted AQI Category: {category}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqi_core::{AqiError, AqiResult, Classifier, Regressor};

    struct FixedRegressor(f64);

    impl Regressor for FixedRegressor {
        fn predict(&self, _row: &FeatureRow) -> AqiResult<f64> {
            Ok(self.0)
        }
    }

    struct FixedClassifier(&'static str);

    impl Classifier for FixedClassifier {
        fn predict(&self, _row: &FeatureRow) -> AqiResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingClassifier;

    impl Classifier for FailingClassifier {
        fn predict(&self, _row: &FeatureRow) -> AqiResult<String> {
            Err(AqiError::Model("bands missing".into()))
        }
    }

    fn sample_row() -> FeatureRow {
        FeatureRow {
            country: "USA".into(),
            city: "Los Angeles".into(),
            co_aqi: 1.0,
            ozone_aqi: 2.0,
            no2_aqi: 3.0,
            pm25_aqi: 4.0,
            lat: 34.0,
            lng: -118.0,
        }
    }

    #[test]
    fn formats_value_to_two_decimals_and_label_verbatim() {
        let store = ModelStore::new(
            Box::new(FixedRegressor(87.456)),
            Box::new(FixedClassifier("Moderate")),
        );
        let message = predict_message(&store, &sample_row()).unwrap();
        assert_eq!(
            message,
            "Predicted AQI Value: 87.46\nPredicted AQI Category: Moderate"
        );
    }

    #[test]
    fn model_failure_propagates_as_error() {
        let store = ModelStore::new(Box::new(FixedRegressor(1.0)), Box::new(FailingClassifier));
        assert!(predict_message(&store, &sample_row()).is_err());
    }
}
