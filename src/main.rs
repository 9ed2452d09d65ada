use chrono::Local;
use clap::Parser;
use log::{info, warn};
use std::io;

use pantry_chef::actions;
use pantry_chef::cli::{Cli, Commands};
use pantry_chef::{menu, pantry_from_config, PantryConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let mut config = PantryConfig::load()?;
    if let Some(file) = cli.file {
        config.store_path = file;
    }

    if config.has_api_key() {
        info!("API key loaded");
    } else {
        warn!("API_KEY is missing; recipe search will not work until it is set");
    }

    let pantry = pantry_from_config(&config);
    if let Err(e) = pantry.store().initialize() {
        // Not fatal: every later action reports its own store errors
        warn!("{}", e);
    }

    let today = Local::now().date_naive();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Add { name, date } => actions::add(&pantry, &mut out, &name, &date, today)?,
        Commands::List => actions::view(&pantry, &mut out, today)?,
        Commands::Expiring { days } => actions::expiring(
            &pantry,
            &mut out,
            today,
            days.unwrap_or(config.lookahead_days),
        )?,
        Commands::Remove { name } => actions::remove(&pantry, &mut out, &name)?,
        Commands::Recipes => actions::find_recipes(&pantry, &mut out).await?,
        Commands::Menu => {
            let stdin = io::stdin();
            menu::run(&pantry, &mut stdin.lock(), &mut out, today).await?
        }
    }

    Ok(())
}
