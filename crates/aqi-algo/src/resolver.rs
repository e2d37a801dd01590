//! Row resolution: (country, city) lookup with mean fallback.

use anyhow::Result;
use polars::prelude::DataFrame;

use aqi_core::{schema, FeatureRow};
use aqi_io::{column_mean, numeric_at};

/// Find the first row whose Country and City exactly equal the inputs and
/// build the model input from it.
///
/// Matching is case-sensitive with no normalization; when several rows
/// match, all but the first (in dataset order) are ignored. `Ok(None)`
/// means no row matched, a reportable outcome rather than an error.
///
/// Numeric features use the matched row's value when populated; a null
/// cell falls back to the mean of its column over the entire, unfiltered
/// dataset. Country and city are copied from the request verbatim.
///
/// Callers must have checked that the required columns exist; missing
/// *values* inside an existing column are tolerated here.
pub fn resolve(dataset: &DataFrame, country: &str, city: &str) -> Result<Option<FeatureRow>> {
    let countries = dataset.column(schema::COUNTRY)?.utf8()?;
    let cities = dataset.column(schema::CITY)?.utf8()?;
    let matched = countries
        .into_iter()
        .zip(cities.into_iter())
        .position(|(row_country, row_city)| {
            row_country == Some(country) && row_city == Some(city)
        });
    let Some(idx) = matched else {
        return Ok(None);
    };

    let mut features = [0.0f64; 6];
    for (slot, name) in features.iter_mut().zip(schema::NUMERIC_FEATURE_COLUMNS) {
        *slot = match numeric_at(dataset, name, idx)? {
            Some(value) => value,
            None => column_mean(dataset, name)?,
        };
    }
    let [co_aqi, ozone_aqi, no2_aqi, pm25_aqi, lat, lng] = features;

    Ok(Some(FeatureRow {
        country: country.to_string(),
        city: city.to_string(),
        co_aqi,
        ozone_aqi,
        no2_aqi,
        pm25_aqi,
        lat,
        lng,
    }))
}
