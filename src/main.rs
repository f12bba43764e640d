//! Newsroom API server entry point.
//!
//! # Usage
//!
//! ```bash
//! # Start with empty collections on the default address
//! cargo run
//!
//! # Start on another port with the demo data set
//! cargo run -- --listen 127.0.0.1:8080 --seed
//! ```
//!
//! Command-line flags override the matching environment variables described
//! in [`newsroom::config`].

use anyhow::Result;
use clap::Parser;
use newsroom::config::{self, Config};
use newsroom::domain::IdStrategy;
use newsroom::server;
use tracing_subscriber::EnvFilter;

/// In-memory REST service for articles, journalists and categories.
#[derive(Parser)]
#[command(name = "newsroom")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(short, long)]
    listen: Option<String>,

    /// Load the demo data set, overrides `SEED_DATA`
    #[arg(long)]
    seed: bool,

    /// Id assignment strategy (`sequential` or `length`), overrides `ID_STRATEGY`
    #[arg(long)]
    id_strategy: Option<IdStrategy>,
}

impl Cli {
    fn apply(self, mut config: Config) -> Config {
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if self.seed {
            config.seed_data = true;
        }
        if let Some(strategy) = self.id_strategy {
            config.id_strategy = strategy;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(config::load_from_env()?);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
