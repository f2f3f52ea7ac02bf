//! dynacrud CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use dynacrud::cli::{Backend, Cli, Commands, OutputFormat};
use dynacrud::output::{json, pretty};
use dynacrud::{RecordRepository, RepositoryError};
use dynacrud_core::storage::repository_error_to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dynacrud=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<RepositoryError>()
                .map(repository_error_to_exit_code)
                .and_then(|code| u8::try_from(code).ok())
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let repo = build_repository(&cli).await?;

    match cli.command {
        Commands::Create { collection, attrs } => {
            let record = repo.create(&collection, attrs).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", json::format_json(&record)),
                OutputFormat::Pretty => println!(
                    "{}",
                    pretty::with_banner("Created", pretty::format_record(&record), cli.quiet)
                ),
            }
        }
        Commands::List { collection, filter } => {
            let records = repo.find_all(&collection, &filter).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", json::format_json(&records)),
                OutputFormat::Pretty => println!("{}", pretty::format_records(&records)),
            }
        }
        Commands::Get { collection, id } => {
            let record = repo.find_by_id(&collection, &id).await?;
            match (cli.format, record) {
                (OutputFormat::Json, record) => {
                    println!("{}", json::format_json(&record))
                }
                (OutputFormat::Pretty, Some(record)) => {
                    println!("{}", pretty::format_record(&record))
                }
                (OutputFormat::Pretty, None) => println!("No record {} in {}", id, collection),
            }
        }
        Commands::Update {
            collection,
            id,
            attrs,
        } => {
            let record = repo.update(&collection, &id, attrs).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", json::format_json(&record)),
                OutputFormat::Pretty => println!(
                    "{}",
                    pretty::with_banner("Updated", pretty::format_record(&record), cli.quiet)
                ),
            }
        }
        Commands::Delete { collection, id } => {
            let deleted = repo.destroy(&collection, &id).await?;
            match cli.format {
                OutputFormat::Json => println!(
                    "{}",
                    json::format_json(&serde_json::json!({ "deleted": deleted }))
                ),
                OutputFormat::Pretty if cli.quiet => {}
                OutputFormat::Pretty if deleted => println!("Deleted record {}", id),
                OutputFormat::Pretty => println!("No record {} in {}", id, collection),
            }
        }
    }

    Ok(())
}

/// Build the repository for the selected backend.
///
/// The DynamoDB client is constructed once here and injected.
async fn build_repository(cli: &Cli) -> Result<Arc<dyn RecordRepository>> {
    match cli.backend {
        #[cfg(feature = "dynamodb")]
        Backend::Dynamodb => {
            let config = cli.config();
            tracing::info!(endpoint = %config.target_display(), "Using DynamoDB backend");
            let client = dynacrud::storage::dynamodb::create_client(&config).await;
            Ok(Arc::new(dynacrud::storage::DynamoDbRepository::new(client)))
        }
        #[cfg(feature = "inmemory")]
        Backend::Memory => {
            tracing::warn!("Using in-memory backend; nothing is persisted");
            Ok(Arc::new(dynacrud::storage::InMemoryRepository::new()))
        }
        #[allow(unreachable_patterns)]
        backend => anyhow::bail!(
            "dynacrud was built without support for the {:?} backend",
            backend
        ),
    }
}
