use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
}

/// Where and how the HTTP listener runs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// The interface to bind. `0.0.0.0` listens on all of them.
    pub host: IpAddr,
    pub port: u16,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

/// Contains parameters for the SQLite store.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Path of the SQLite file. Usually supplied through the `FILENAME` variable.
    pub filename: Option<PathBuf>,
    pub max_connections: u32,
    /// How long a request may wait for a pooled connection.
    pub acquire_timeout_secs: u64,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
