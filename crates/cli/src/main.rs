use std::env;

use anyhow::{Context, Result};
use clap::Parser;
use nzdpu_client::{
    HistoricEmissionsScopes, HistoryFetcher, RegistryConfig, API_KEY_VAR, DEFAULT_BASE_URL,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "nzdpu")]
#[command(about = "Scope-classified emissions histories from the NZDPU registry", long_about = None)]
#[command(version)]
struct Cli {
    /// Legal Entity Identifiers to look up, processed in order
    #[arg(required = true)]
    leis: Vec<String>,

    /// Registry base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Registry access key (defaults to the NZDPU_API_KEY environment variable)
    #[arg(long)]
    api_key: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long)]
    quiet: bool,
}

/// One stdout line per requested identifier.
#[derive(Serialize)]
struct CompanyScopes {
    lei: String,
    scopes: HistoricEmissionsScopes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let api_key = match cli.api_key {
        Some(key) => key,
        None => env::var(API_KEY_VAR)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .with_context(|| format!("No access key: pass --api-key or set {API_KEY_VAR}"))?,
    };
    let fetcher = HistoryFetcher::new(RegistryConfig::new(cli.base_url, api_key))?;

    let mut failed = 0usize;
    for lei in &cli.leis {
        match fetcher.historic_scopes(lei).await {
            Ok(scopes) => {
                let record = CompanyScopes {
                    lei: lei.clone(),
                    scopes,
                };
                let output = if cli.pretty {
                    serde_json::to_string_pretty(&record)?
                } else {
                    serde_json::to_string(&record)?
                };
                println!("{output}");
            }
            Err(err) => {
                let err = anyhow::Error::from(err);
                log::error!("{lei}: {err:#}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        log::warn!("{failed} of {} lookups failed", cli.leis.len());
        std::process::exit(1);
    }
    Ok(())
}
