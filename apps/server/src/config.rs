//! Configuration for the catalog server
//!
//! Configuration is layered: built-in defaults, then optional TOML files
//! (`config/default.toml`, `config/{RUN_MODE}.toml`, `config/local.toml`),
//! then environment variables prefixed with `CATALOG` using `__` as the
//! section separator (e.g. `CATALOG__SERVER__PORT=8080`). The conventional
//! `DATABASE_URL` and `PORT` variables override their nested equivalents.

use std::net::SocketAddr;

use config::{Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS. Empty means no cross-origin access.
    pub cors_origins: Vec<String>,
    /// Maximum accepted request body size in bytes.
    pub max_request_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
            max_request_body_size: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_min_size: u32,
    pub pool_max_size: u32,
    pub pool_timeout_seconds: u64,
    pub statement_timeout_seconds: u64,
    pub lock_timeout_seconds: u64,
    /// Apply embedded migrations at startup.
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            pool_min_size: 1,
            pool_max_size: 10,
            pool_timeout_seconds: 30,
            statement_timeout_seconds: 30,
            lock_timeout_seconds: 5,
            run_migrations: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: String,
    pub file_prefix: String,
    /// One of `daily`, `hourly`, `minutely`, `never`.
    pub file_rotation: String,
    pub deployment_environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_enabled: false,
            file_directory: "logs".to_string(),
            file_prefix: "catalog-server".to_string(),
            file_rotation: "daily".to_string(),
            deployment_environment: "development".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Page size applied when the request does not specify one.
    pub default_page_size: u32,
    /// Upper bound a requested page size is clamped to.
    pub max_page_size: u32,
    /// Match the text query case-insensitively (ILIKE instead of LIKE).
    pub case_insensitive: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 100,
            case_insensitive: false,
        }
    }
}

impl Config {
    /// Load configuration from files and the environment.
    pub fn load() -> anyhow::Result<Self> {
        // Pull in a .env file if one exists; ignore absence.
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("CATALOG").separator("__"));

        // Conventional single-variable overrides used by most deployments.
        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", url)?;
        }
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        let config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Check internal consistency. Called once at startup before anything
    /// touches the network.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("server.port must be non-zero".to_string());
        }
        if self.database.url.is_empty() {
            return Err(
                "database.url must be set (via config file, CATALOG__DATABASE__URL or DATABASE_URL)"
                    .to_string(),
            );
        }
        if self.database.pool_max_size == 0 {
            return Err("database.pool_max_size must be at least 1".to_string());
        }
        if self.database.pool_min_size > self.database.pool_max_size {
            return Err(format!(
                "database.pool_min_size ({}) must not exceed database.pool_max_size ({})",
                self.database.pool_min_size, self.database.pool_max_size
            ));
        }
        if self.search.max_page_size == 0 {
            return Err("search.max_page_size must be at least 1".to_string());
        }
        if self.search.default_page_size == 0
            || self.search.default_page_size > self.search.max_page_size
        {
            return Err(format!(
                "search.default_page_size ({}) must be within 1..={}",
                self.search.default_page_size, self.search.max_page_size
            ));
        }
        Ok(())
    }

    /// Address the HTTP listener binds to.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid listen address: {e}"))
    }
}
