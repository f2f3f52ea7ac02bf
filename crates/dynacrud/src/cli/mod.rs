//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use dynacrud_core::storage::RepositoryError;
use dynacrud_core::{Record, Value};

use crate::config::Config;

/// Create, find, update and delete records in DynamoDB tables.
#[derive(Debug, Parser)]
#[command(name = "dynacrud")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// AWS region [default: $AWS_REGION, then us-east-2].
    #[arg(long)]
    pub region: Option<String>,

    /// Custom DynamoDB endpoint, e.g. http://localhost:8000 for DynamoDB Local
    /// [default: $AWS_ENDPOINT_URL].
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Storage backend.
    #[arg(long, default_value = "dynamodb")]
    pub backend: Backend,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress banners and confirmation messages in pretty output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Client configuration from the environment, overridden by flags.
    pub fn config(&self) -> Config {
        self.override_config(Config::from_env())
    }

    /// Applies the `--region` and `--endpoint-url` flags on top of `config`.
    pub fn override_config(&self, mut config: Config) -> Config {
        if let Some(region) = &self.region {
            config.region = region.clone();
        }
        if let Some(url) = self.endpoint_url.as_ref().filter(|url| !url.is_empty()) {
            config.endpoint_url = Some(url.clone());
        }
        config
    }
}

/// Storage backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Backend {
    /// AWS DynamoDB.
    #[default]
    Dynamodb,
    /// Process-local store; contents vanish when the command exits.
    Memory,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a record with a generated ID.
    Create {
        /// Collection (table) name.
        collection: String,
        /// Record attributes as a JSON object.
        #[arg(long, default_value = "{}", value_parser = parse_record)]
        attrs: Record,
    },
    /// List records whose fields equal every value in the filter.
    List {
        /// Collection (table) name.
        collection: String,
        /// Equality filter as a JSON object; empty lists everything.
        #[arg(long, default_value = "{}", value_parser = parse_record)]
        filter: Record,
    },
    /// Get a record by ID.
    Get {
        /// Collection (table) name.
        collection: String,
        /// Record ID.
        id: String,
    },
    /// Set fields on an existing record.
    Update {
        /// Collection (table) name.
        collection: String,
        /// Record ID.
        id: String,
        /// Fields to set as a JSON object.
        #[arg(long, value_parser = parse_record)]
        attrs: Record,
    },
    /// Delete a record by ID.
    Delete {
        /// Collection (table) name.
        collection: String,
        /// Record ID.
        id: String,
    },
}

/// Parse a JSON object argument into a record.
pub fn parse_record(raw: &str) -> Result<Record, RepositoryError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(RepositoryError::InvalidInput(format!(
            "expected a JSON object, got: {}",
            other
        ))),
        Err(err) => Err(RepositoryError::InvalidInput(format!("invalid JSON: {}", err))),
    }
}
