use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pantry-chef",
    version,
    about = "Track pantry ingredients, spot what is about to expire and find recipes that use them"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "PANTRY_FILE",
        help = "Ingredients CSV file (defaults to the configured store_path)"
    )]
    pub file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Add an ingredient with its expiration date
    Add {
        name: String,
        #[arg(help = "Expiration date as YYYY-MM-DD")]
        date: String,
    },
    /// List every ingredient with an expiration timeline
    List,
    /// Show ingredients expiring soon
    Expiring {
        #[arg(long, help = "Lookahead window in days (defaults to lookahead_days)")]
        days: Option<u32>,
    },
    /// Remove every ingredient with this name
    Remove { name: String },
    /// Find recipes using the stored ingredients
    Recipes,
    /// Interactive menu (the default)
    Menu,
}
