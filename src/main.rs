mod config;
mod error;
mod fetcher;
mod models;
mod pipeline;
mod reducer;
mod storage;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::AppConfig;
use crate::fetcher::NasdaqClient;
use crate::pipeline::Pipeline;
use crate::storage::write_results;

#[derive(Parser)]
#[command(
    name = "stock-summary",
    about = "Five-year close price statistics for stock tickers",
    version
)]
struct Cli {
    /// Ticker symbols, processed in the order given
    tickers: Vec<String>,

    /// Output file (default: stocks.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "stock_summary=info,warn",
        1 => "stock_summary=debug,info",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::new(filter))
        .init();

    let mut config = AppConfig::load()?;
    if let Some(path) = cli.output {
        config.output.path = path;
    }

    let (results, _stats) = {
        let _t = utils::Timer::start(format!("{} tickers", cli.tickers.len()));
        let client = NasdaqClient::new(&config.fetcher).context("Failed to build quote client")?;
        Pipeline::new(client).run(&cli.tickers)
    };

    let path = &config.output.path;
    write_results(path, &results)
        .with_context(|| format!("Error opening {}", path.display()))?;

    println!("Stock data written to {}", path.display());
    Ok(())
}
