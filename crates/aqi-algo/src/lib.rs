//! # aqi-algo: Lookup, Prediction & Ranking
//!
//! The functional core of the AQI toolkit, composed from three pieces:
//!
//! - [`resolver`] - find the first row matching a (country, city) pair and
//!   build the single-row model input, substituting dataset-wide column
//!   means for missing values;
//! - [`predictor`] - run both loaded models over a feature row and format
//!   the two-line result text;
//! - [`ranking`] - aggregate the per-city mean AQI and keep the most
//!   polluted cities.
//!
//! [`handlers`] wires these into the two request surfaces the interface
//! shell exposes: upload-and-predict and analyze. Handlers recover
//! expected conditions (no matching row, unusable dataset) as user-facing
//! strings; only unreadable files and broken artifacts surface as errors.

pub mod handlers;
pub mod predictor;
pub mod ranking;
pub mod resolver;

pub use handlers::{
    analyze, missing_columns_message, upload_and_predict, AnalysisOutcome, NOT_FOUND_MESSAGE,
    TOP_CITY_LIMIT,
};
pub use predictor::predict_message;
pub use ranking::top_polluted_cities;
pub use resolver::resolve;
