use anyhow::Result;
use bookharvest::{
    config::{Args, Config},
    fetch::{harvest, BoardClient},
    table::Tables,
};
use clap::Parser;
use reqwest::Client;
use tokio::time::Instant;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) resolve config; missing credentials stop here ───────────
    let config = Config::from_args(Args::parse())?;
    let client = BoardClient::from_config(Client::new(), &config);

    // ─── 3) fetch everything first ───────────────────────────────────
    let start = Instant::now();
    let harvested = harvest(&client, &config.board_id).await?;
    info!(
        cards = harvested.cards.len(),
        years = harvested.per_year.len(),
        elapsed = ?start.elapsed(),
        "fetched board"
    );

    // ─── 4) normalize, sort, then write both tables ──────────────────
    let tables = Tables::assemble(&harvested.cards, harvested.per_year, config.date_order)?;
    tables.write(config.books_path(), config.books_per_year_path())?;

    info!("done");
    Ok(())
}
