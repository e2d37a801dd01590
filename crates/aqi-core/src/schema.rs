//! Column names of the tabular air-quality dataset.
//!
//! Names are exact-match and case-sensitive; they mirror the headers of the
//! CSV files users upload. All lookups elsewhere in the workspace go through
//! these constants rather than string literals.

/// Country column (string, exact match).
pub const COUNTRY: &str = "Country";
/// City column (string, exact match).
pub const CITY: &str = "City";
/// Carbon monoxide sub-index column.
pub const CO_AQI: &str = "CO AQI Value";
/// Ozone sub-index column.
pub const OZONE_AQI: &str = "Ozone AQI Value";
/// Nitrogen dioxide sub-index column.
pub const NO2_AQI: &str = "NO2 AQI Value";
/// Fine particulate sub-index column.
pub const PM25_AQI: &str = "PM2.5 AQI Value";
/// Latitude column.
pub const LAT: &str = "lat";
/// Longitude column.
pub const LNG: &str = "lng";
/// Composite AQI column used by the analysis path.
pub const AQI_VALUE: &str = "AQI Value";

/// Every column the prediction path requires, in reporting order.
pub const PREDICTION_COLUMNS: [&str; 8] = [
    COUNTRY, CITY, CO_AQI, OZONE_AQI, NO2_AQI, PM25_AQI, LAT, LNG,
];

/// The numeric feature columns fed to the models, in feature order.
pub const NUMERIC_FEATURE_COLUMNS: [&str; 6] = [CO_AQI, OZONE_AQI, NO2_AQI, PM25_AQI, LAT, LNG];

/// Columns the analysis path requires.
pub const ANALYSIS_COLUMNS: [&str; 2] = [CITY, AQI_VALUE];
