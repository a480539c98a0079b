//! Tests for layered configuration loading.

use super::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write JSON5 contents to a path, creating parent directories if needed.
fn write_json5(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("dir");
    }
    fs::write(path, contents).expect("write");
}

/// Build a project with a `.git` marker and a nested cwd.
fn project_layout(temp: &TempDir) -> (PathBuf, PathBuf) {
    let project_root = temp.path().join("project");
    fs::create_dir_all(project_root.join(".git")).expect("git");
    let cwd = project_root.join("subdir");
    fs::create_dir_all(&cwd).expect("cwd");
    (project_root, cwd)
}

/// Verify that a minimal config parses with defaults.
#[test]
fn parse_minimal_config() {
    let config = DreamweaverConfig::load_from_str("{}").expect("config");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.store.path, "dreams.db");
    assert_eq!(config.synth.seed, None);
}

/// Parse every supported section.
#[test]
fn parse_full_config() {
    let json5 = r#"{
        // comments are allowed
        server: { host: "0.0.0.0", port: 8080 },
        store: { path: "/var/lib/dreamweaver/dreams.db" },
        synth: { seed: 42 },
    }"#;
    let config = DreamweaverConfig::load_from_str(json5).expect("config");
    assert_eq!(config.server.bind_target(), ("0.0.0.0", 8080));
    assert_eq!(config.store.path, "/var/lib/dreamweaver/dreams.db");
    assert_eq!(config.synth.seed, Some(42));
}

/// Reject unexpected top-level config keys.
#[test]
fn rejects_unknown_top_level_key() {
    let err = DreamweaverConfig::load_from_str(r#"{ unexpected: true }"#).unwrap_err();
    assert!(format!("{err}").contains("unknown key"));
}

/// Reject ports outside the u16 range.
#[test]
fn rejects_out_of_range_port() {
    let err = DreamweaverConfig::load_from_str(r#"{ server: { port: 70000 } }"#).unwrap_err();
    assert!(format!("{err}").contains("server.port"));
}

/// Reject a zero port during validation.
#[test]
fn rejects_zero_port() {
    let err = DreamweaverConfig::load_from_str(r#"{ server: { port: 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

/// Reject negative seeds.
#[test]
fn rejects_negative_seed() {
    let err = DreamweaverConfig::load_from_str(r#"{ synth: { seed: -1 } }"#).unwrap_err();
    assert!(format!("{err}").contains("synth.seed"));
}

/// Load a config from a file path.
#[test]
fn load_from_path_reads_file() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("custom.json5");
    write_json5(&path, "{ store: { path: \"custom.db\" } }");
    let config = DreamweaverConfig::load_from_path(&path).expect("config");
    assert_eq!(config.store.path, "custom.db");
}

/// Ensure repo config takes precedence over cwd, project and user config.
#[test]
fn layered_config_prefers_repo_over_cwd() {
    let temp = TempDir::new().expect("tmp");
    let (project_root, cwd) = project_layout(&temp);

    let user_config = temp.path().join("user.json5");
    write_json5(&user_config, "{ store: { path: \"user.db\" } }");
    write_json5(
        &project_root.join(DEFAULT_CONFIG_FILE),
        "{ store: { path: \"project.db\" } }",
    );
    write_json5(
        &cwd.join(DEFAULT_CONFIG_FILE),
        "{ store: { path: \"cwd.db\" } }",
    );
    write_json5(
        &project_root
            .join(DEFAULT_CONFIG_DIR)
            .join(DEFAULT_CONFIG_FILE),
        "{ store: { path: \"repo.db\" } }",
    );

    let mut options = LayeredConfigOptions::new(&cwd);
    options.user_config_path = Some(user_config);

    let layered = DreamweaverConfig::load_layered_with_options(options).expect("layered");
    assert_eq!(layered.config.store.path, "repo.db");
    let sources: Vec<_> = layered.layers.iter().map(|layer| layer.source).collect();
    assert_eq!(
        sources,
        vec![
            ConfigLayerSource::User,
            ConfigLayerSource::Project,
            ConfigLayerSource::Cwd,
            ConfigLayerSource::Repo,
        ]
    );
}

/// Lower layers keep fields that higher layers do not mention.
#[test]
fn layered_config_merges_sections() {
    let temp = TempDir::new().expect("tmp");
    let (_, cwd) = project_layout(&temp);

    let user_config = temp.path().join("user.json5");
    write_json5(&user_config, "{ server: { host: \"0.0.0.0\", port: 9000 } }");
    write_json5(
        &cwd.join(DEFAULT_CONFIG_FILE),
        "{ server: { port: 9100 }, synth: { seed: 7 } }",
    );

    let mut options = LayeredConfigOptions::new(&cwd);
    options.user_config_path = Some(user_config);

    let layered = DreamweaverConfig::load_layered_with_options(options).expect("layered");
    assert_eq!(layered.config.server.host, "0.0.0.0");
    assert_eq!(layered.config.server.port, 9100);
    assert_eq!(layered.config.synth.seed, Some(7));
}

/// Runtime overrides are applied last.
#[test]
fn runtime_override_wins() {
    let temp = TempDir::new().expect("tmp");
    let (project_root, cwd) = project_layout(&temp);
    write_json5(
        &project_root.join(DEFAULT_CONFIG_FILE),
        "{ server: { port: 7000 } }",
    );
    let runtime_config = temp.path().join("runtime.json5");
    write_json5(&runtime_config, "{ server: { port: 7100 } }");

    let mut options = LayeredConfigOptions::new(&cwd).with_runtime_path(&runtime_config);
    options.user_config_path = None;

    let layered = DreamweaverConfig::load_layered_with_options(options).expect("layered");
    assert_eq!(layered.config.server.port, 7100);
    assert_eq!(layered.layers.last().map(|l| l.source), Some(ConfigLayerSource::Runtime));
}

/// A project config in the cwd is only loaded once.
#[test]
fn cwd_at_project_root_is_not_loaded_twice() {
    let temp = TempDir::new().expect("tmp");
    let (project_root, _) = project_layout(&temp);
    write_json5(
        &project_root.join(DEFAULT_CONFIG_FILE),
        "{ store: { path: \"root.db\" } }",
    );

    let mut options = LayeredConfigOptions::new(&project_root);
    options.user_config_path = None;

    let layered = DreamweaverConfig::load_layered_with_options(options).expect("layered");
    assert_eq!(layered.layers.len(), 1);
    assert_eq!(layered.config.store.path, "root.db");
}

/// A missing runtime override is an error, unlike missing local layers.
#[test]
fn missing_runtime_layer_fails() {
    let temp = TempDir::new().expect("tmp");
    let mut options =
        LayeredConfigOptions::new(temp.path()).with_runtime_path(temp.path().join("absent.json5"));
    options.user_config_path = None;

    let err = DreamweaverConfig::load_layered_with_options(options).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

/// Schema errors name the offending layer.
#[test]
fn invalid_layer_reports_its_label() {
    let temp = TempDir::new().expect("tmp");
    let (_, cwd) = project_layout(&temp);
    write_json5(&cwd.join(DEFAULT_CONFIG_FILE), "{ store: { path: 12 } }");

    let mut options = LayeredConfigOptions::new(&cwd);
    options.user_config_path = None;

    let err = DreamweaverConfig::load_layered_with_options(options).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("cwd("));
    assert!(msg.contains("store.path"));
}
