//! Per-city AQI aggregation for the analysis path.

use std::cmp::Ordering;

use anyhow::{Context, Result};
use polars::prelude::{col, DataFrame, IntoLazy};

use aqi_core::{schema, CityMean};

/// Group rows by city, average the `AQI Value` column per group, and keep
/// the `limit` most polluted cities.
///
/// The result is sorted non-strictly descending by mean; ties keep the
/// order in which the cities first appear in the dataset. Fewer than
/// `limit` distinct cities yields exactly that many entries. Rows with a
/// null city or an all-null group mean are dropped.
pub fn top_polluted_cities(dataset: &DataFrame, limit: usize) -> Result<Vec<CityMean>> {
    let grouped = dataset
        .clone()
        .lazy()
        .group_by_stable([col(schema::CITY)])
        .agg([col(schema::AQI_VALUE).mean()])
        .collect()
        .context("aggregating mean AQI per city")?;
    let cities = grouped.column(schema::CITY)?.utf8()?;
    let means = grouped.column(schema::AQI_VALUE)?.f64()?;

    let mut ranking: Vec<CityMean> = cities
        .into_iter()
        .zip(means.into_iter())
        .filter_map(|(city, mean)| {
            Some(CityMean {
                city: city?.to_string(),
                mean_aqi: mean?,
            })
        })
        .collect();
    ranking.sort_by(|a, b| {
        b.mean_aqi
            .partial_cmp(&a.mean_aqi)
            .unwrap_or(Ordering::Equal)
    });
    ranking.truncate(limit);
    Ok(ranking)
}
