//! Configuration manager for roster.

use std::fs::File;
use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;
use serde::{Deserialize, Serialize};

use crate::AppState;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Instance name.
    pub name: String,
    /// Interface to listen on.
    #[serde(skip_serializing)]
    pub address: String,
    /// Port to listen on.
    #[serde(skip_serializing)]
    pub port: u16,
    /// Seconds before a request is aborted with `408`.
    #[serde(skip_serializing)]
    pub timeout: u64,
    #[serde(skip_deserializing)]
    version: String,
    #[serde(skip)]
    path: PathBuf,
    /// Related to SQLite configuration.
    #[serde(skip_serializing)]
    pub database: Database,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            name: env!("CARGO_CRATE_NAME").into(),
            address: "0.0.0.0".into(),
            port: 8000,
            timeout: 10,
            version: VERSION.to_owned(),
            path: PathBuf::default(),
            database: Database::default(),
        }
    }
}

/// SQLite configuration.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Database {
    /// Database file, created when missing.
    pub path: PathBuf,
    /// Seconds a writer waits for the file lock.
    pub busy_timeout: u64,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            path: PathBuf::from("crud.db"),
            busy_timeout: 5,
        }
    }
}

impl Database {
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.busy_timeout)
    }
}

impl FromRef<AppState> for Arc<Configuration> {
    fn from_ref(state: &AppState) -> Arc<Configuration> {
        Arc::clone(&state.config)
    }
}

impl Configuration {
    pub fn path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Public version of the running binary.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Address the HTTP server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.address.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Override fields with environment variables, if set.
    pub fn env(mut self) -> Self {
        if let Some(port) = std::env::var("PORT")
            .ok()
            .and_then(|port| port.parse::<u16>().ok())
        {
            self.port = port;
        }
        self
    }

    /// Reads the `config.yaml` file from the specified path or the default
    /// location.
    pub fn read(self) -> Self {
        let file_path = if self.path.is_file() {
            &self.path
        } else {
            &Path::new(DEFAULT_CONFIG_PATH).to_path_buf()
        };

        match File::open(file_path) {
            Ok(file) => match serde_yaml::from_reader::<_, Configuration>(file) {
                Ok(config) => Self {
                    version: VERSION.to_owned(),
                    path: file_path.clone(),
                    ..config
                },
                Err(err) => self.error(err),
            },
            Err(err) => self.error(err),
        }
    }

    /// Return a default configuration as fallback.
    fn error(&self, err: impl std::error::Error) -> Self {
        tracing::error!(error = %err, "`config.yaml` file cannot be read, using defaults");
        Self {
            path: self.path.clone(),
            ..Default::default()
        }
    }
}
