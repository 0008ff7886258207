use std::net::{Ipv4Addr, SocketAddr};

use tracing::info;

use crate::store::DEFAULT_STORAGE_PATH;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "./public";

/// Effective settings for a server run.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: String,
    pub in_memory: bool,
    pub port: u16,
    pub public_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_STORAGE_PATH.to_string(),
            in_memory: false,
            port: DEFAULT_PORT,
            public_dir: DEFAULT_PUBLIC_DIR.to_string(),
        }
    }
}

impl Config {
    pub fn address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn log_summary(&self) {
        if self.in_memory {
            info!("Contacts are kept in memory only");
        } else {
            info!("Contacts are stored at {}", self.data_path);
        }
        info!("Static files served from {}", self.public_dir);

        if self.port == DEFAULT_PORT {
            info!("PORT not set, using default: {DEFAULT_PORT}");
        }
    }
}
