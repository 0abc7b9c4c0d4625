//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Server configuration, loaded from YAML with CLI overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Local model artifact path
    #[serde(default = "default_model_path")]
    pub model_path: String,

    /// Remote artifact location, fetched when the local file is absent
    #[serde(default = "default_model_url")]
    pub model_url: String,

    /// Label served by the fallback predictor
    #[serde(default = "default_fallback_label")]
    pub fallback_label: String,
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &crate::Cli) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        // Apply CLI overrides
        if let Some(model) = &cli.model {
            config.model_path = model.clone();
        }
        if let Some(model_url) = &cli.model_url {
            config.model_url = model_url.clone();
        }
        if let Some(listen) = &cli.listen {
            config.listen = listen.clone();
        }
        if let Some(port) = cli.port {
            config.port = port;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            port: default_port(),
            model_path: default_model_path(),
            model_url: default_model_url(),
            fallback_label: default_fallback_label(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_model_path() -> String {
    "gesture_model.json".to_string()
}

fn default_model_url() -> String {
    "https://models.handsign.dev/gesture_model.json".to_string()
}

fn default_fallback_label() -> String {
    "A".to_string()
}
