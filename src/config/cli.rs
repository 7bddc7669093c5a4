use crate::config::toml_config::SiteConfig;
use crate::config::BackendConfig;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "brand-site")]
#[command(about = "Render the portfolio page and send contact form messages")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a site TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Override the backend base URL")]
    pub backend_url: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Write the rendered page to the output directory
    Render {
        #[arg(long)]
        output_path: Option<String>,
    },
    /// Send one contact form submission
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        message: String,
    },
}

impl CliConfig {
    pub fn load_site_config(&self) -> Result<SiteConfig> {
        match &self.config {
            Some(path) => SiteConfig::from_file(path),
            None => Ok(SiteConfig::default()),
        }
    }

    /// `--backend-url`, then the config file, then `BACKEND_URL`, then the default.
    pub fn resolve_backend(&self, site: &SiteConfig) -> BackendConfig {
        self.backend_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| site.backend_url())
            .map(|url| BackendConfig::new(url))
            .unwrap_or_else(BackendConfig::from_env)
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
