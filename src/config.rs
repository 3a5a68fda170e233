//! Server configuration parsed from environment variables.

use std::path::PathBuf;

use crate::error::ServerError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Overrides the Leptos `site_root` for static assets.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: directory holding the `pkg/` bundle
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let host = get("HOST")
            .map(|h| h.trim().to_owned())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = parse_port(get("PORT").as_deref())?;
        let site_root = get("SITE_ROOT").filter(|p| !p.trim().is_empty()).map(PathBuf::from);
        Ok(Self { host, port, site_root })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ServerError::Config(format!("invalid PORT: {value}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
