use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output: `index.html` plus the wasm bundle.
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/

        let port = match get("SITE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SITE_PORT is not a valid port: {raw:?}"))?,
            None => 3000,
        };

        Ok(Self {
            host: get("SITE_HOST").unwrap_or_else(|| "127.0.0.1".to_owned()),
            port,
            dist_dir: get("SITE_DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("../dist")),
            assets_dir: get("SITE_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("../assets")),
        })
    }
}
