//! Dreamweaver HTTP service entry point.

use anyhow::Context;
use clap::Parser;
use dreamweaver::config::DreamweaverConfig;
use dreamweaver::{bind_listener, build_service, init_logging};
use log::{debug, info, warn};
use std::path::PathBuf;

/// Command-line options for the Dreamweaver service.
#[derive(Parser, Debug)]
#[command(name = "dreamweaver", version)]
struct Cli {
    /// Optional path to a dreamweaver.json5 config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Address to bind, overriding server.host
    #[arg(long)]
    host: Option<String>,
    /// Port to bind, overriding server.port
    #[arg(long)]
    port: Option<u16>,
    /// SQLite database path, overriding store.path
    #[arg(long)]
    database: Option<String>,
    /// Fixed synthesizer seed, overriding synth.seed
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    /// Resolve the effective config: file or layered defaults, then flags.
    fn load_config(&self) -> anyhow::Result<DreamweaverConfig> {
        let mut config = match self.config.as_ref() {
            Some(path) => DreamweaverConfig::load_from_path(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => {
                let cwd = std::env::current_dir().context("failed to resolve cwd")?;
                let layered = DreamweaverConfig::load_layered(&cwd)
                    .context("failed to load layered config")?;
                debug!("layered config loaded (layers={})", layered.layers.len());
                layered.config
            }
        };
        self.apply_overrides(&mut config);
        config.validate().context("invalid config")?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut DreamweaverConfig) {
        if let Some(host) = self.host.as_ref() {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(path) = self.database.as_ref() {
            config.store.path = path.clone();
        }
        if let Some(seed) = self.seed {
            config.synth.seed = Some(seed);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    info!(
        "starting dreamweaver (config_set={}, seed_set={})",
        cli.config.is_some(),
        cli.seed.is_some()
    );

    let config = cli.load_config()?;
    let service = build_service(&config)?;
    let listener = bind_listener(&config.server).await?;

    dreamweaver::server::serve(listener, service, async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for ctrl-c: {err}");
            return;
        }
        info!("shutdown requested");
    })
    .await
    .context("server error")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use dreamweaver::config::DreamweaverConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn flags_override_config_values() {
        let cli = Cli::try_parse_from([
            "dreamweaver",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--database",
            "/tmp/dreams.db",
            "--seed",
            "7",
        ])
        .expect("parse");
        let mut config = DreamweaverConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.path, "/tmp/dreams.db");
        assert_eq!(config.synth.seed, Some(7));
    }

    #[test]
    fn absent_flags_keep_defaults() {
        let cli = Cli::try_parse_from(["dreamweaver"]).expect("parse");
        let mut config = DreamweaverConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, DreamweaverConfig::default());
    }

    #[test]
    fn explicit_config_file_is_loaded() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("dreamweaver.json5");
        std::fs::write(&path, "{ server: { port: 6100 }, synth: { seed: 3 } }").expect("write");

        let cli = Cli::try_parse_from([
            "dreamweaver".to_string(),
            "--config".to_string(),
            path.to_string_lossy().to_string(),
        ])
        .expect("parse");
        let config = cli.load_config().expect("config");
        assert_eq!(config.server.port, 6100);
        assert_eq!(config.synth.seed, Some(3));
    }

    #[test]
    fn zero_port_is_rejected() {
        let cli = Cli::try_parse_from(["dreamweaver", "--port", "0"]).expect("parse");
        let mut config = DreamweaverConfig::default();
        cli.apply_overrides(&mut config);
        assert!(config.validate().is_err());
    }
}
