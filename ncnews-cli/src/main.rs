//! ncnews CLI - runs the news API server
//!
//! - `serve`: start the HTTP API against a PostgreSQL database
//! - `endpoints`: print the endpoint description served at `GET /api`

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "ncnews",
    author,
    version,
    about = "REST API over topics, articles, comments and users"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),

    /// Print the API endpoint description as JSON
    Endpoints,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap so env-backed flags see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Endpoints => commands::run_endpoints(),
    }
}
