use beerstock_core::{BeerId, BeerType};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "beerstock")]
#[command(about = "Beer stock keeping backed by SQLite", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// SQLite database file (overrides BEERSTOCK_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new beer
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        brand: String,
        /// Maximum stock capacity
        #[arg(long)]
        max: u32,
        #[arg(long)]
        quantity: u32,
        /// Beer style (lager, malzbier, witbier, weiss, ale, ipa, stout)
        #[arg(long = "type", value_parser = parse_beer_type)]
        kind: BeerType,
    },

    /// Show one beer by name
    Get { name: String },

    /// List all beers
    #[command(alias = "ls")]
    List,

    /// Delete one beer by id
    #[command(alias = "rm")]
    Delete { id: BeerId },
}

fn parse_beer_type(value: &str) -> Result<BeerType, String> {
    BeerType::parse(value).ok_or_else(|| format!("unknown beer type `{value}`"))
}
