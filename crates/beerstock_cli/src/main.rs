//! Command-line entry point for the beer stock core.
//!
//! Opens the configured SQLite file, runs one service operation and prints
//! the result as JSON. Domain errors go to stderr with exit status 1.

mod args;

use args::{Cli, Commands};
use beerstock_core::db::open_db;
use beerstock_core::{init_logging, AppConfig, BeerDto, BeerService, SqliteBeerRepository};
use clap::Parser;
use log::{info, warn};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(&cli);
    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir)?;
    }

    let conn = open_db(&config.db_path)?;
    let repo = SqliteBeerRepository::try_new(&conn)?;
    let service = BeerService::with_default_mapper(repo);

    let output = match &cli.command {
        Commands::Create {
            name,
            brand,
            max,
            quantity,
            kind,
        } => {
            let dto = BeerDto::new(name.as_str(), brand.as_str(), *max, *quantity, *kind);
            let created = service
                .create_beer(&dto)
                .inspect_err(|err| warn!("event=beer_create module=cli status=error error={err}"))?;
            info!(
                "event=beer_create module=cli status=ok id={:?}",
                created.id
            );
            serde_json::to_string_pretty(&created)?
        }
        Commands::Get { name } => serde_json::to_string_pretty(&service.find_by_name(name)?)?,
        Commands::List => serde_json::to_string_pretty(&service.list_all()?)?,
        Commands::Delete { id } => {
            service.delete_by_id(*id)?;
            info!("event=beer_delete module=cli status=ok id={id}");
            serde_json::json!({ "deleted": id }).to_string()
        }
    };

    println!("{output}");
    Ok(())
}

fn resolve_config(cli: &Cli) -> AppConfig {
    AppConfig::from_env().with_overrides(
        cli.db.clone(),
        cli.log_level.clone(),
        cli.log_dir.clone(),
    )
}
