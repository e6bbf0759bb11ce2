//! Command-line front-end for the catalog.
//!
//! Prints the `{success, data, error}` envelope (or a value derived from it)
//! as JSON on stdout. Exit status is 0 on success, 1 otherwise.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use sheet_catalog::infrastructure::logging::{init_logging_with_config, log_system_info};
use sheet_catalog::{CatalogConfig, CatalogView, RetrievalResult, build_catalog_service};

#[derive(Debug, Parser)]
#[command(name = "sheet-catalog", version, about = "Query a spreadsheet-backed product catalog")]
struct Cli {
    /// Config file (TOML or JSON); defaults to the user config dir when present
    #[arg(long, global = true, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Serve the sample catalog when the sheet cannot be fetched
    #[arg(long, global = true)]
    fallback: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every product
    List,
    /// Products in one category (case-insensitive)
    Category { name: String },
    /// Products whose title, description or category contains the term
    Search { term: String },
    /// Distinct categories of the catalog
    Categories,
    /// Contact link for one product
    Contact {
        id: String,
        /// Phone number; defaults to display.contact_phone
        #[arg(long)]
        phone: Option<String>,
    },
}

#[derive(Serialize)]
struct Envelope<T: Serialize> {
    success: bool,
    data: T,
    error: Option<String>,
}

fn load_config(cli: &Cli) -> Result<CatalogConfig> {
    let path = cli
        .config
        .clone()
        .or_else(|| CatalogConfig::default_path().filter(|p| p.exists()));

    let mut config = CatalogConfig::load(path.as_deref()).context("Failed to load configuration")?;
    if cli.fallback {
        config.sheets.use_fallback_on_error = true;
    }
    Ok(config)
}

/// Contact link for product `id`. A failed retrieval keeps its own error;
/// a successful one without the product reports it as not found.
fn contact_envelope(result: RetrievalResult, id: &str, phone: &str) -> Envelope<Option<String>> {
    let link = result
        .data
        .iter()
        .find(|p| p.id() == id)
        .map(|p| p.contact_link(phone));

    let error = match (&link, result.error) {
        (_, Some(e)) => Some(e),
        (None, None) => Some(format!("Product not found: {id}")),
        (Some(_), None) => None,
    };

    Envelope {
        success: error.is_none(),
        data: link,
        error,
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

async fn run(cli: Cli) -> Result<bool> {
    let config = load_config(&cli)?;
    init_logging_with_config(&config.logging)?;
    log_system_info();

    let service = build_catalog_service(&config)?;

    let success = match cli.command {
        Command::List => {
            let result = service.get_all_products().await;
            print_json(&result, cli.pretty)?;
            result.success
        }
        Command::Category { name } => {
            let result = service.get_products_by_category(&name).await;
            print_json(&result, cli.pretty)?;
            result.success
        }
        Command::Search { term } => {
            let result = service.search_products(&term).await;
            print_json(&result, cli.pretty)?;
            result.success
        }
        Command::Categories => {
            let result = service.get_all_products().await;
            let view = CatalogView::from_result(&result);
            print_json(
                &Envelope {
                    success: result.success,
                    data: view.categories(),
                    error: result.error,
                },
                cli.pretty,
            )?;
            result.success
        }
        Command::Contact { id, phone } => {
            let result = service.get_all_products().await;
            let phone = phone.unwrap_or_else(|| config.display.contact_phone.clone());
            let envelope = contact_envelope(result, &id, &phone);
            print_json(&envelope, cli.pretty)?;
            envelope.success
        }
    };

    Ok(success)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
