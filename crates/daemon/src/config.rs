//! Service configuration from `PREREG_*` environment variables

use prereg_core::domain::DEFAULT_QUEUE_CAPACITY;
use prereg_core::error::{AppError, Result};
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_DB_PATH: &str = "sqlite::memory:";
const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9530;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// SQLite path or URL, `~` expanded
    pub db_path: String,
    pub rpc_host: String,
    pub rpc_port: u16,
    pub queue_capacity: usize,
    pub log_format: LogFormat,
    /// Daily rolling log files are written here when set
    pub log_dir: Option<PathBuf>,
}

impl DaemonConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let db_path = lookup("PREREG_DB_PATH")
            .map(|p| shellexpand::tilde(&p).into_owned())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

        let log_format = match lookup("PREREG_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let log_dir = lookup("PREREG_LOG_DIR")
            .filter(|d| !d.trim().is_empty())
            .map(|d| PathBuf::from(shellexpand::tilde(&d).into_owned()));

        Ok(Self {
            db_path,
            rpc_host: lookup("PREREG_RPC_HOST").unwrap_or_else(|| DEFAULT_RPC_HOST.to_string()),
            rpc_port: parse_var(&lookup, "PREREG_RPC_PORT", DEFAULT_RPC_PORT)?,
            queue_capacity: parse_var(&lookup, "PREREG_QUEUE_CAPACITY", DEFAULT_QUEUE_CAPACITY)?,
            log_format,
            log_dir,
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} has an invalid value: {:?}", key, raw))),
    }
}
