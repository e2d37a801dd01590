//! Model traits and the process-wide model store.
//!
//! The toolkit never trains anything; it consumes two pre-serialized
//! artifacts through the [`Regressor`] and [`Classifier`] traits. Concrete
//! implementations live in `aqi-model`; handlers only ever see the trait
//! objects, so tests can substitute mock models.

use crate::error::AqiResult;
use crate::FeatureRow;

/// A pre-trained model producing a numeric AQI value for a feature row.
pub trait Regressor: Send + Sync {
    /// Predict the composite AQI value for a single feature row.
    fn predict(&self, row: &FeatureRow) -> AqiResult<f64>;
}

/// A pre-trained model producing an AQI category label for a feature row.
pub trait Classifier: Send + Sync {
    /// Predict the AQI category label for a single feature row.
    fn predict(&self, row: &FeatureRow) -> AqiResult<String>;
}

/// Immutable container for the two loaded model artifacts.
///
/// Constructed once at process start and passed by reference into every
/// handler. No request mutates it, so concurrent handlers may share it
/// without locking.
pub struct ModelStore {
    regressor: Box<dyn Regressor>,
    classifier: Box<dyn Classifier>,
}

impl ModelStore {
    pub fn new(regressor: Box<dyn Regressor>, classifier: Box<dyn Classifier>) -> Self {
        Self {
            regressor,
            classifier,
        }
    }

    pub fn regressor(&self) -> &dyn Regressor {
        self.regressor.as_ref()
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }
}

impl std::fmt::Debug for ModelStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AqiError;

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

    struct FailingRegressor;

    impl Regressor for FailingRegressor {
        fn predict(&self, _row: &FeatureRow) -> AqiResult<f64> {
            Err(AqiError::Model("corrupt weights".into()))
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
    fn store_dispatches_to_both_models() {
        let store = ModelStore::new(
            Box::new(FixedRegressor(87.5)),
            Box::new(FixedClassifier("Moderate")),
        );
        let row = sample_row();
        assert_eq!(store.regressor().predict(&row).unwrap(), 87.5);
        assert_eq!(store.classifier().predict(&row).unwrap(), "Moderate");
    }

    #[test]
    fn model_errors_surface_as_model_variant() {
        let store = ModelStore::new(
            Box::new(FailingRegressor),
            Box::new(FixedClassifier("Good")),
        );
        let err = store.regressor().predict(&sample_row()).unwrap_err();
        assert!(matches!(err, AqiError::Model(_)));
    }

    #[test]
    fn store_is_shareable_across_threads() {
        fn assert_sync<T: Sync>(_t: &T) {}
        let store = ModelStore::new(
            Box::new(FixedRegressor(1.0)),
            Box::new(FixedClassifier("Good")),
        );
        assert_sync(&store);
    }
}
