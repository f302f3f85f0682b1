use anyhow::Result;
use clap::Parser;
use rusqlite::Connection;
use tracing_subscriber::EnvFilter;

use entry_ledger::{api, config::Config, db};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();

    // Open database and make sure the schema exists
    let conn = Connection::open(&config.db)?;
    db::setup_database(&conn)?;
    tracing::info!("database ready at {}", config.db.display());

    let state = api::AppState::new(conn);
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    tracing::info!("listening on {}", config.listen);

    axum::serve(listener, app).await?;

    Ok(())
}
