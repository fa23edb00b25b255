use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    /// HTTP status sent along with `{"message": "Item not found"}`.
    /// Only 200 (legacy behaviour) and 404 are accepted.
    #[serde(default = "default_not_found_status")]
    pub not_found_status: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            worker_threads: Some(4),
            not_found_status: default_not_found_status(),
        }
    }
}

/// How the store mints ids for newly created items.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// `len + 1` at creation time. After a delete this can hand out an id
    /// that is still in use, and the create overwrites that entry.
    #[default]
    CountBased,
    /// Counter starting at 1 that never hands out the same id twice.
    Monotonic,
}

impl FromStr for IdStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count_based" | "count-based" | "count" => Ok(Self::CountBased),
            "monotonic" => Ok(Self::Monotonic),
            other => Err(anyhow!("unknown id strategy `{other}` (expected count_based or monotonic)")),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub id_strategy: IdStrategy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8000 }
fn default_not_found_status() -> u16 { 200 }
fn default_log_format() -> String { "compact".into() }

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`) when present, otherwise fall back
    /// to environment variables; the result is normalized and validated.
    pub fn load_and_validate() -> Result<Self> {
        Self::load_and_validate_from(&config_path(), |key| std::env::var(key).ok())
    }

    fn load_and_validate_from<F>(path: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = if Path::new(path).exists() {
            load_from_file(path)?
        } else {
            Self::from_lookup(lookup)?
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Build a config from `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS`,
    /// `NOT_FOUND_STATUS`, `ITEM_ID_STRATEGY` and `LOG_FORMAT`.
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(host) = lookup("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            cfg.server.port = port
                .trim()
                .parse()
                .map_err(|e| anyhow!("SERVER_PORT `{port}` is not a valid port: {e}"))?;
        }
        if let Some(threads) = lookup("TOKIO_WORKER_THREADS") {
            let threads = threads
                .trim()
                .parse::<usize>()
                .map_err(|e| anyhow!("TOKIO_WORKER_THREADS `{threads}` is not a number: {e}"))?;
            cfg.server.worker_threads = Some(threads);
        }
        if let Some(status) = lookup("NOT_FOUND_STATUS") {
            cfg.server.not_found_status = status
                .trim()
                .parse()
                .map_err(|e| anyhow!("NOT_FOUND_STATUS `{status}` is not a number: {e}"))?;
        }
        if let Some(strategy) = lookup("ITEM_ID_STRATEGY") {
            cfg.store.id_strategy = strategy.parse()?;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            cfg.log.format = format;
        }
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.log.normalize()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        // 0 或未设置的线程数回落到 4
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        self.check_not_found_status()
    }

    /// Only 200 and 404 may accompany the not-found body.
    pub fn check_not_found_status(&self) -> Result<()> {
        if !matches!(self.not_found_status, 200 | 404) {
            return Err(anyhow!(
                "server.not_found_status must be 200 or 404, got {}",
                self.not_found_status
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl LogConfig {
    fn normalize(&mut self) -> Result<()> {
        let format = self.format.trim().to_ascii_lowercase();
        match format.as_str() {
            "" => self.format = default_log_format(),
            "compact" | "json" => self.format = format,
            other => return Err(anyhow!("log.format must be compact or json, got `{other}`")),
        }
        Ok(())
    }
}
