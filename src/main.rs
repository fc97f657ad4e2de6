use anyhow::Result;
use clap::Parser;
use tracing::info;

use mysql_query_analyzer::cli::Cli;
use mysql_query_analyzer::db::Session;
use mysql_query_analyzer::{render, report};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the rendered report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!(host = %cli.host, database = %cli.database, "connecting");

    let session = Session::connect(&cli).await?;
    info!("session established");

    // The session is released on every exit path, including analysis failure.
    let outcome = report::analyze(session.pool(), &cli.query).await;
    session.close().await;
    let report = outcome?;

    render::for_mode(cli.plain).render(&report);
    Ok(())
}
