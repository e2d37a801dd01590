use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use aqi_algo::{analyze, upload_and_predict, AnalysisOutcome};
use aqi_cli::{Cli, Commands};
use aqi_viz::render_city_chart;

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    if let Err(err) = run(&cli) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Predict {
            data,
            country,
            city,
            models_dir,
        } => {
            info!(models_dir = %models_dir.display(), "loading model artifacts");
            let store = aqi_model::load_store(models_dir)?;
            let message = upload_and_predict(&store, data, country, city)?;
            println!("{message}");
        }
        Commands::Analyze { data, out } => match analyze(data)? {
            AnalysisOutcome::Ranking(ranking) => {
                let written = render_city_chart(&ranking, out)?;
                println!("Chart written to {}", written.display());
            }
            AnalysisOutcome::MissingColumns(message) => println!("{message}"),
        },
    }
    Ok(())
}
