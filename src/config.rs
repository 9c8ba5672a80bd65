use std::path::Path;

use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::catalog::page::PageOptions;

/// Default config file looked up in the working directory.
const CWD_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Host to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Catalog title shown on every page
    #[arg(long, env = "CATALOG_TITLE")]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub title: String,
    #[serde(default)]
    pub stylesheet: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Load configuration with priority CLI flag > CLI env var >
    /// `AXTLIVE_` env > config file > defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 6006)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("catalog.title", "axtlive-ui")?;

        // An explicit file must exist; ./config.yaml is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path).required(true)),
            None if Path::new(CWD_CONFIG_FILE).exists() => {
                builder.add_source(File::new(CWD_CONFIG_FILE, FileFormat::Yaml))
            }
            None => builder,
        };

        // E.g. AXTLIVE_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("AXTLIVE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(title) = cli.title {
            builder = builder.set_override("catalog.title", title)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Listen address, `host:port`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Page chrome derived from the catalog section.
    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            site_title: self.catalog.title.clone(),
            stylesheet: self.catalog.stylesheet.clone(),
        }
    }
}
