//! One-shot CLI: fetch a repository's contributor aggregate and print it as
//! JSON, consulting the cache before upstream.

use std::process::ExitCode;

use clap::Parser;
use contribs::{Config, RepoRef, Result, Services};
use contribs::error::ContribsError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contribs", about = "Fetch and cache GitHub contributor aggregates")]
struct Cli {
    /// Repository to fetch, as owner/name.
    repo: String,

    /// Verbosity: -v for debug output.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("contribs=info,usage=info"),
        _ => EnvFilter::new("contribs=debug,usage=info"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let repo = RepoRef::parse(&cli.repo)
        .ok_or_else(|| ContribsError::Other(format!("invalid repository: {}", cli.repo)))?;

    let config = Config::from_env()?;
    let services = Services::from_config(&config).await?;

    let aggregate = services.contributors.get_aggregate(&repo).await?;
    services.usage.record(&aggregate, "cli");

    println!("{}", serde_json::to_string_pretty(&aggregate)?);
    Ok(())
}
