use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub uploads: UploadsConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:80".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub root: PathBuf,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./public"),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct UploadsConfig {
    pub root: PathBuf,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./uploads"),
        }
    }
}

impl Config {
    /// Loads the configuration file named by `WICKET_CONFIG` (default
    /// `wicket.yaml`). A missing file yields the defaults; a present but
    /// invalid one is an error. `LISTEN` overrides the listen address
    /// either way.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("WICKET_CONFIG").unwrap_or_else(|_| "wicket.yaml".to_string());
        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(raw) => {
                serde_yaml::from_str(&raw).with_context(|| format!("parsing {}", path))?
            }
            Err(_) => Config::default(),
        };
        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = listen_addr;
        }
        Ok(cfg)
    }
}
