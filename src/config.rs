use std::time::Duration;

use clap::{Parser, ValueEnum};
use reqwest::Url;
use storefront_core::{DEFAULT_CATALOG_URL, HttpCatalog};

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Browse the product catalog from the terminal")]
pub struct Cli {
    /// Catalog Service endpoint returning the product listing
    #[arg(long, env = "STOREFRONT_CATALOG_URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    /// Fixed delay before the catalog is requested, in milliseconds
    #[arg(long, env = "STOREFRONT_DELAY_MS", default_value_t = 0)]
    pub delay_ms: u64,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// How the listing is printed
    #[arg(short, long, value_enum, default_value_t = OutputMode::Cards)]
    pub output: OutputMode,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Cards,
    Table,
    Json,
}

/// Validated settings for one run of the listing.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_url: Url,
    pub delay: Option<Duration>,
    pub timeout: Option<Duration>,
    pub output: OutputMode,
    pub color: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, CliError> {
        let catalog_url = Url::parse(&cli.catalog_url).map_err(|e| CliError::InvalidUrl {
            url: cli.catalog_url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(catalog_url.scheme(), "http" | "https") {
            return Err(CliError::UnsupportedScheme(catalog_url.scheme().to_string()));
        }

        let timeout = match cli.timeout_secs {
            Some(0) => return Err(CliError::ZeroTimeout),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(Self {
            catalog_url,
            delay: (cli.delay_ms > 0).then(|| Duration::from_millis(cli.delay_ms)),
            timeout,
            output: cli.output,
            color: !cli.no_color,
        })
    }

    /// Builds the HTTP catalog, applying the request timeout if one is set.
    pub fn catalog(&self) -> Result<HttpCatalog, CliError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CliError::HttpClient(e.to_string()))?;

        Ok(HttpCatalog::with_client(client, self.catalog_url.as_str()))
    }
}
