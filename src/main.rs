use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pozole::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pozole")]
#[command(about = "An equal-weight buy-and-hold portfolio analyzer for daily market data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    //run the portfolio analysis
    Run {
        //path to a json configuration file (flags below override it)
        #[arg(long)]
        config: Option<PathBuf>,

        //path to the combined csv data file
        #[arg(long)]
        data: Option<PathBuf>,

        //directory receiving the three output artifacts
        #[arg(long)]
        output_dir: Option<PathBuf>,

        //output path for the value series csv (overrides output-dir naming)
        #[arg(long)]
        output_values_csv: Option<PathBuf>,

        //output path for the return series csv (overrides output-dir naming)
        #[arg(long)]
        output_returns_csv: Option<PathBuf>,

        //output path for the metrics text file (overrides output-dir naming)
        #[arg(long)]
        output_metrics_txt: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            data,
            output_dir,
            output_values_csv,
            output_returns_csv,
            output_metrics_txt,
        } => {
            run_analysis(
                config,
                data,
                output_dir,
                output_values_csv,
                output_returns_csv,
                output_metrics_txt,
            )?;
        }
    }

    Ok(())
}

fn run_analysis(
    config_path: Option<PathBuf>,
    data: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    output_values_csv: Option<PathBuf>,
    output_returns_csv: Option<PathBuf>,
    output_metrics_txt: Option<PathBuf>,
) -> Result<()> {
    println!("Pozole Buy-and-Hold Portfolio Analyzer");
    println!("======================================\n");

    //resolve configuration: json file if given, defaults otherwise, flags win
    let mut config = match &config_path {
        Some(path) => AnalysisConfiguration::from_json_file(path)
            .context(format!("Failed to load configuration from {:?}", path))?,
        None => AnalysisConfiguration::default(),
    };

    if let Some(data) = data {
        config.data_path = data;
    }
    if let Some(output_dir) = output_dir {
        config.output_dir = output_dir;
    }

    let values_path = output_values_csv.unwrap_or_else(|| config.values_path());
    let returns_path = output_returns_csv.unwrap_or_else(|| config.returns_path());
    let metrics_path = output_metrics_txt.unwrap_or_else(|| config.metrics_path());

    //load data
    println!("Loading data from {:?}...", config.data_path);
    let table = load_csv(&config.data_path)
        .context(format!("Failed to load data from {:?}", config.data_path))?;

    println!(
        "Loaded {} rows, {} columns",
        table.num_rows(),
        table.num_columns()
    );
    println!(
        "Date range: {} to {}\n",
        table.dates().first().unwrap(),
        table.dates().last().unwrap()
    );

    //report how each column will be interpreted
    for name in table.columns().keys() {
        match ColumnKind::classify(name) {
            ColumnKind::Price => println!("  {} -> price series", name),
            ColumnKind::Yield => println!("  {} -> yield series (annual %, converted)", name),
        }
    }
    println!();

    //normalize, build, measure
    let normalized = normalize(&table)?;
    let portfolio = build_buy_and_hold(&normalized)?;
    let returns = calculate_returns(&portfolio.values);
    let metrics = PortfolioMetrics::from_series(&portfolio, &returns)?;

    //display results
    println!("Portfolio Metrics");
    println!("=================\n");
    metrics.pretty_print_table();

    //save outputs
    save_values_csv(&portfolio, &values_path)?;
    println!("\nValue series saved to {:?}", values_path);

    save_returns_csv(&portfolio.dates, &returns, &returns_path)?;
    println!("Return series saved to {:?}", returns_path);

    save_metrics_txt(&metrics, &metrics_path)?;
    println!("Metrics saved to {:?}", metrics_path);

    Ok(())
}
