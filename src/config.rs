use anyhow::{bail, Context, Result};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_FRONTEND_DIR: &str = "../frontend";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    // Front-end bundle served for every non-API path
    pub frontend_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .trim()
                .parse()
                .context("Invalid PORT")?,
            frontend_dir: lookup("FRONTEND_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIR)),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            bail!("HOST must not be empty");
        }

        if !self.frontend_dir.is_dir() {
            tracing::warn!(
                "Frontend directory {} not found, static assets will return 404",
                self.frontend_dir.display()
            );
        }

        tracing::info!("Configuration validated for {}", self.bind_addr());

        Ok(())
    }
}
