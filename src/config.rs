//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

impl StorageBackend {
    fn from_env(raw: &str) -> Result<Self, ConfigError> {
        match raw.to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" | "mem" => Ok(Self::Memory),
            _ => Err(ConfigError::Invalid {
                name: "STORAGE_BACKEND",
                value: raw.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage_backend: StorageBackend,
    /// Snapshot path for the file backend.
    pub storage_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let raw_port = env::var("API_PORT").unwrap_or_else(|_| "3000".to_string());
        let port = raw_port.parse::<u16>().map_err(|_| ConfigError::Invalid {
            name: "API_PORT",
            value: raw_port,
        })?;

        let storage_backend = StorageBackend::from_env(
            &env::var("STORAGE_BACKEND").unwrap_or_else(|_| "file".to_string()),
        )?;

        let storage_file =
            PathBuf::from(env::var("STORAGE_FILE").unwrap_or_else(|_| "staybook.json".to_string()));

        Ok(Self {
            host,
            port,
            storage_backend,
            storage_file,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_names_parse() {
        assert_eq!(StorageBackend::from_env("file").unwrap(), StorageBackend::File);
        assert_eq!(StorageBackend::from_env("MEMORY").unwrap(), StorageBackend::Memory);
        assert!(StorageBackend::from_env("postgres").is_err());
    }
}
