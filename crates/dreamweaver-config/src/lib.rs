//! Dreamweaver settings: the JSON5 schema, its defaults, and the layered
//! loader that merges user, project, and runtime files.

mod error;
mod loader;
mod model;

pub use error::ConfigError;
pub use loader::{ConfigLayer, ConfigLayerSource, LayeredConfig, LayeredConfigOptions};
pub use model::{
    DreamweaverConfig, DreamweaverConfigBuilder, ServerConfig, StoreConfig, SynthConfig,
};
