//! Handles settings for the application.
//!
//! Sources, later ones winning: built-in defaults, an optional `settings`
//! file (any format `config` understands, path set with `--config`),
//! `FINANCES__*` environment variables and the legacy `DATABASE_PATH`.

use std::path::Path;

use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Parser)]
#[command(version, about = "Personal finances backend")]
struct Cli {
    /// Settings file, with or without extension.
    #[arg(long, env = "FINANCES_CONFIG", default_value = "settings")]
    config: String,
}

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Database {
    pub path: String,
    /// Use a throwaway in-memory database instead of `path`.
    #[serde(default)]
    pub memory: bool,
}

impl Database {
    /// Connection url; creates the directory of the database file if needed.
    pub fn url(&self) -> std::io::Result<String> {
        if self.memory {
            return Ok("sqlite::memory:".to_string());
        }
        if let Some(parent) = Path::new(&self.path)
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
        {
            std::fs::create_dir_all(parent)?;
        }
        Ok(format!("sqlite:{}?mode=rwc", self.path))
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub database: Database,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let cli = Cli::parse();
        Self::load(&cli.config)
    }

    pub fn load(config_path: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.bind", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("database.path", "data/personal_finances.db")?
            .set_default("database.memory", false)?
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix("FINANCES")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Ok(path) = std::env::var("DATABASE_PATH") {
            builder = builder.set_override("database.path", path)?;
        }

        builder.build()?.try_deserialize()
    }
}
