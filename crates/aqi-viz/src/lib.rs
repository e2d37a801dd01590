//! # aqi-viz: Chart Rendering
//!
//! Renders the aggregated city ranking produced by `aqi-algo` as a bar
//! chart. This crate knows nothing about datasets or models; it takes the
//! derived `CityMean` table and a target path, draws, and hands the path
//! back.

pub mod chart;

pub use chart::{render_city_chart, CHART_TITLE};
