//! Server configuration parsed from environment variables.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSET_DIR: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BIMLINKER_PORT '{0}': expected 1-65535")]
    Port(String),
    #[error("BIMLINKER_ASSET_DIR is set but empty")]
    EmptyAssetDir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub asset_dir: PathBuf,
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `BIMLINKER_PORT`: default 3000
    /// - `BIMLINKER_ASSET_DIR`: default `public`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = std::env::var("BIMLINKER_PORT").ok();
        let asset_dir = std::env::var("BIMLINKER_ASSET_DIR").ok();
        Self::from_vars(port.as_deref(), asset_dir.as_deref())
    }

    pub fn from_vars(port: Option<&str>, asset_dir: Option<&str>) -> Result<Self, ConfigError> {
        let port = parse_port(port)?;
        let asset_dir = match asset_dir.map(str::trim) {
            None => PathBuf::from(DEFAULT_ASSET_DIR),
            Some("") => return Err(ConfigError::EmptyAssetDir),
            Some(dir) => PathBuf::from(dir),
        };
        Ok(Self { port, asset_dir })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PORT);
    };
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::Port(raw.to_string())),
        Ok(port) => Ok(port),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
