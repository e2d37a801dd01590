//! Bar chart of the most polluted cities.

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::FontTransform;

use aqi_core::{AqiError, AqiResult, CityMean};

/// Caption drawn across the top of the chart.
pub const CHART_TITLE: &str = "Top 10 Polluted Cities by AQI Value";

const CHART_SIZE: (u32, u32) = (900, 600);

/// Render `ranking` as a bar chart PNG at `out_path`.
///
/// One bar per city in ranking order, y-axis in mean AQI. Tick labels are
/// rotated vertical to keep long city names legible. The drawing area is
/// presented and dropped before returning, so repeated calls do not
/// accumulate rendering surfaces.
pub fn render_city_chart(ranking: &[CityMean], out_path: &Path) -> AqiResult<PathBuf> {
    if ranking.is_empty() {
        return Err(AqiError::Chart("no cities to chart".into()));
    }
    draw(ranking, out_path).map_err(|err| AqiError::Chart(err.to_string()))?;
    Ok(out_path.to_path_buf())
}

fn draw(ranking: &[CityMean], out_path: &Path) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let max_mean = ranking.iter().map(|c| c.mean_aqi).fold(f64::NAN, f64::max);
    let y_max = if max_mean.is_finite() && max_mean > 0.0 {
        max_mean * 1.1
    } else {
        1.0
    };

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(120)
        .y_label_area_size(60)
        .build_cartesian_2d(0i32..ranking.len() as i32, 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("City")
        .y_desc("Average AQI Value")
        .x_labels(ranking.len())
        .x_label_formatter(&|idx| {
            ranking
                .get(*idx as usize)
                .map(|c| c.city.clone())
                .unwrap_or_default()
        })
        .x_label_style(
            ("sans-serif", 14)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .draw()?;

    chart.draw_series(ranking.iter().enumerate().map(|(idx, city)| {
        Rectangle::new(
            [(idx as i32, 0.0), (idx as i32 + 1, city.mean_aqi)],
            BLUE.filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}
