//! CLI for the catalog client.

mod commands;

use anyhow::Result;
use catalog_core::config::{self, CatalogConfig};
use catalog_core::service::CatalogObjectService;
use catalog_core::transport::CurlTransport;
use clap::{Parser, Subcommand};

use commands::{run_metadata, run_raw, run_resolve, run_url};

/// Top-level CLI for the catalog client.
#[derive(Debug, Parser)]
#[command(name = "catalog")]
#[command(about = "Query catalog resources and resolve PA:GET_FROM_URL links", long_about = None)]
pub struct Cli {
    /// Catalog base URL (overrides `catalog_url` from config.toml).
    #[arg(long, global = true, value_name = "URL")]
    pub catalog_url: Option<String>,

    /// Session id sent with every request (overrides `session_id` from config.toml).
    #[arg(long, global = true, value_name = "ID")]
    pub session_id: Option<String>,

    /// Read configuration from this file instead of the XDG config dir.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the URL of a resource without contacting the catalog.
    Url {
        /// Bucket identifier.
        #[arg(allow_negative_numbers = true)]
        bucket_id: i64,
        /// Resource name.
        name: String,
        /// Address the resource content instead of its metadata.
        #[arg(long)]
        raw: bool,
    },

    /// Print the metadata record of a resource as JSON.
    Metadata {
        /// Bucket identifier.
        #[arg(allow_negative_numbers = true)]
        bucket_id: i64,
        /// Resource name.
        name: String,
    },

    /// Print the raw content of a resource.
    Raw {
        /// Bucket identifier.
        #[arg(allow_negative_numbers = true)]
        bucket_id: i64,
        /// Resource name.
        name: String,
    },

    /// Print the content of a resource with PA:GET_FROM_URL links replaced.
    Resolve {
        /// Bucket identifier.
        #[arg(allow_negative_numbers = true)]
        bucket_id: i64,
        /// Resource name.
        name: String,
        /// Leave links untouched (same output as `raw`).
        #[arg(long)]
        no_resolve_links: bool,
    },
}

/// Catalog endpoint and session after applying CLI overrides to the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub catalog_url: String,
    pub session_id: String,
}

impl Endpoint {
    fn from_config(cfg: &CatalogConfig, cli: &Cli) -> Self {
        Self {
            catalog_url: cli
                .catalog_url
                .clone()
                .unwrap_or_else(|| cfg.catalog_url.clone()),
            session_id: cli
                .session_id
                .clone()
                .or_else(|| cfg.session_id.clone())
                .unwrap_or_default(),
        }
    }
}

impl Cli {
    /// False only for `url` with an explicit `--catalog-url`: nothing else is read from the config.
    fn needs_config(&self) -> bool {
        !(matches!(self.command, CliCommand::Url { .. }) && self.catalog_url.is_some())
    }

    fn load_config(&self) -> Result<CatalogConfig> {
        if !self.needs_config() {
            return Ok(CatalogConfig::default());
        }
        match self.config.as_deref() {
            Some(path) => config::load_from(std::path::Path::new(path)),
            None => config::load_or_init(),
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.load_config()?;
        tracing::debug!(
            "loaded config: catalog_url={} timeout={}s",
            cfg.catalog_url,
            cfg.timeout_secs
        );
        let endpoint = Endpoint::from_config(&cfg, &cli);
        let service = CatalogObjectService::new(CurlTransport::new(cfg.curl_options()));

        match cli.command {
            CliCommand::Url {
                bucket_id,
                name,
                raw,
            } => run_url(&service, &endpoint, bucket_id, &name, raw),
            CliCommand::Metadata { bucket_id, name } => {
                run_metadata(&service, &endpoint, bucket_id, &name)?
            }
            CliCommand::Raw { bucket_id, name } => run_raw(&service, &endpoint, bucket_id, &name)?,
            CliCommand::Resolve {
                bucket_id,
                name,
                no_resolve_links,
            } => run_resolve(&service, &endpoint, bucket_id, &name, !no_resolve_links)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
