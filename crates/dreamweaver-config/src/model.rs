//! Configuration schema for Dreamweaver.

use serde::{Deserialize, Serialize};

/// Root config for the Dreamweaver service.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DreamweaverConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub synth: SynthConfig,
}

impl DreamweaverConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> DreamweaverConfigBuilder {
        DreamweaverConfigBuilder::new()
    }
}

/// Builder for assembling a `DreamweaverConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct DreamweaverConfigBuilder {
    config: DreamweaverConfig,
}

impl DreamweaverConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: DreamweaverConfig::default(),
        }
    }

    /// Replace the HTTP server configuration.
    pub fn server(mut self, server: ServerConfig) -> Self {
        self.config.server = server;
        self
    }

    /// Replace the store configuration.
    pub fn store(mut self, store: StoreConfig) -> Self {
        self.config.store = store;
        self
    }

    /// Replace the synthesizer configuration.
    pub fn synth(mut self, synth: SynthConfig) -> Self {
        self.config.synth = synth;
        self
    }

    /// Finalize and return the built `DreamweaverConfig`.
    pub fn build(self) -> DreamweaverConfig {
        self.config
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Host and port as a bind target; hostnames are resolved when binding.
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Dream store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// SQLite database file, relative to the working directory unless absolute.
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> String {
    "dreams.db".to_string()
}

/// Image synthesizer settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SynthConfig {
    /// Fixed seed for reproducible images; thread-local randomness when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}
