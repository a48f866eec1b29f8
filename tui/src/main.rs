use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use cluegrid_client::Endpoints;
use cluegrid_core::BoardConfig;
use url::Url;

use crate::app::App;

mod app;
mod ui;

/// Terminal trivia board: pick random categories, reveal questions and
/// answers clue by clue.
#[derive(Debug, Parser)]
#[command(name = "cluegrid")]
struct Args {
    /// Number of categories on the board
    #[arg(long, default_value_t = BoardConfig::DEFAULT_CATEGORIES)]
    categories: usize,

    /// Clues per category
    #[arg(long, default_value_t = BoardConfig::DEFAULT_CLUES_PER_CATEGORY)]
    clues: usize,

    /// Category pool endpoint
    #[arg(long)]
    pool_url: Option<Url>,

    /// Category detail endpoint
    #[arg(long)]
    detail_url: Option<Url>,

    /// How many pool entries to request before sampling
    #[arg(long)]
    pool_size: Option<u32>,

    /// Seed category selection for reproducible boards
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (stderr would tear the board display)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn endpoints(&self) -> Endpoints {
        let mut endpoints = Endpoints::default();
        if let Some(url) = &self.pool_url {
            endpoints.category_pool = url.clone();
        }
        if let Some(url) = &self.detail_url {
            endpoints.category_detail = url.clone();
        }
        if let Some(size) = self.pool_size {
            endpoints.pool_size = size;
        }
        endpoints
    }
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    match &args.log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.filter_level(args.verbosity.log_level_filter());
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = BoardConfig::new(args.categories, args.clues);
    let mut app = App::new(config, args.endpoints(), args.seed);
    app.run()
}
