use clap::Parser;
use std::path::PathBuf;

/// Command-line configuration for the entry ledger server.
#[derive(Debug, Parser)]
#[command(name = "entry-ledger", about = "CRUD HTTP API for financial ledger entries")]
pub struct Config {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:3000")]
    pub listen: String,

    /// Path to the SQLite database file
    #[arg(long, default_value = "entries.db")]
    pub db: PathBuf,
}
