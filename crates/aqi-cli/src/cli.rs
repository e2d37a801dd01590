use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict the AQI value and category for a country/city pair
    Predict {
        /// Path to the CSV dataset to look the pair up in
        #[arg(long)]
        data: PathBuf,
        /// Country to match (exact, case-sensitive)
        #[arg(long)]
        country: String,
        /// City to match (exact, case-sensitive)
        #[arg(long)]
        city: String,
        /// Directory holding the two serialized model artifacts
        #[arg(long, default_value = "models")]
        models_dir: PathBuf,
    },
    /// Chart the most polluted cities in a dataset
    Analyze {
        /// Path to the CSV dataset to aggregate
        #[arg(long)]
        data: PathBuf,
        /// Where to write the bar chart
        #[arg(short, long, default_value = "top_cities.png")]
        out: PathBuf,
    },
}
