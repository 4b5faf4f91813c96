// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Three tiers, later tiers win:
//! 1. TOML file (optional, defaults when absent)
//! 2. Environment variables
//! 3. CLI arguments

use crate::{validate_config, ConfigError, ConfigResult, FolioConfig, CONFIG_FILE_NAME};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Find the configuration file
///
/// Search order:
/// 1. `FOLIO_CONFIG_PATH` environment variable (must exist if set)
/// 2. Current working directory
/// 3. Up to 3 parent directories
///
/// Returns `Ok(None)` when no file is found in the default locations.
pub fn find_config_file() -> ConfigResult<Option<PathBuf>> {
    if let Ok(env_path) = env::var("FOLIO_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(Some(path));
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by FOLIO_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let Ok(cwd) = env::current_dir() else {
        return Ok(None);
    };

    Ok(cwd
        .ancestors()
        .take(4)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.exists()))
}

/// Load configuration
///
/// # Arguments
///
/// * `config_path` - Explicit config file. It must exist. If `None`, the file is searched for
///   and defaults are used when nothing is found.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns an error if an explicit file is missing, the TOML is invalid, or validation fails.
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<FolioConfig> {
    let config_file = match config_path {
        Some(path) if !path.exists() => {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file()?,
    };

    let mut config = match config_file {
        Some(file) => {
            let content = fs::read_to_string(&file)?;
            toml::from_str::<FolioConfig>(&content)?
        }
        None => FolioConfig::default(),
    };

    apply_environment_overrides(&mut config);

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    normalize_paths(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `PORT` -> `server.port`
/// - `FOLIO_HOST` -> `server.host`
/// - `FOLIO_PUBLIC_DIR` -> `server.public_dir`
/// - `FOLIO_CATALOG_PATH` -> `catalog.path`
/// - `FOLIO_LOG_LEVEL` -> `logging.level`
/// - `FOLIO_LOG_DIR` -> `logging.log_dir`
pub fn apply_environment_overrides(config: &mut FolioConfig) {
    if let Ok(value) = env::var("PORT") {
        if let Ok(port) = value.trim().parse::<u16>() {
            config.server.port = port;
        }
    }
    if let Ok(value) = env::var("FOLIO_HOST") {
        config.server.host = value;
    }
    if let Ok(value) = env::var("FOLIO_PUBLIC_DIR") {
        config.server.public_dir = PathBuf::from(value);
    }
    if let Ok(value) = env::var("FOLIO_CATALOG_PATH") {
        config.catalog.path = Some(PathBuf::from(value));
    }
    if let Ok(value) = env::var("FOLIO_LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Ok(value) = env::var("FOLIO_LOG_DIR") {
        config.logging.log_dir = Some(PathBuf::from(value));
    }
}

/// Apply CLI argument overrides to configuration
///
/// Keys: `host`, `port`, `public_dir`, `catalog`, `log_level`, `log_dir`.
pub fn apply_cli_overrides(config: &mut FolioConfig, cli_args: &HashMap<String, String>) {
    if let Some(value) = cli_args.get("host") {
        config.server.host = value.clone();
    }
    if let Some(value) = cli_args.get("port") {
        if let Ok(port) = value.parse::<u16>() {
            config.server.port = port;
        }
    }
    if let Some(value) = cli_args.get("public_dir") {
        config.server.public_dir = PathBuf::from(value);
    }
    if let Some(value) = cli_args.get("catalog") {
        config.catalog.path = Some(PathBuf::from(value));
    }
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
    if let Some(value) = cli_args.get("log_dir") {
        config.logging.log_dir = Some(PathBuf::from(value));
    }
}

/// Empty optional paths (`path = ""` in TOML) mean "not set"
fn normalize_paths(config: &mut FolioConfig) {
    if config
        .catalog
        .path
        .as_ref()
        .is_some_and(|p| p.as_os_str().is_empty())
    {
        config.catalog.path = None;
    }
    if config
        .logging
        .log_dir
        .as_ref()
        .is_some_and(|p| p.as_os_str().is_empty())
    {
        config.logging.log_dir = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::tempdir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const OVERRIDE_VARS: &[&str] = &[
        "PORT",
        "FOLIO_CONFIG_PATH",
        "FOLIO_HOST",
        "FOLIO_PUBLIC_DIR",
        "FOLIO_CATALOG_PATH",
        "FOLIO_LOG_LEVEL",
        "FOLIO_LOG_DIR",
    ];

    /// Clears override variables and restores them on drop
    struct EnvSnapshot(Vec<(&'static str, Option<String>)>);

    impl EnvSnapshot {
        fn clear() -> Self {
            let saved = OVERRIDE_VARS
                .iter()
                .map(|name| (*name, env::var(name).ok()))
                .collect();
            for name in OVERRIDE_VARS {
                env::remove_var(name);
            }
            EnvSnapshot(saved)
        }
    }

    impl Drop for EnvSnapshot {
        fn drop(&mut self) {
            for (name, value) in &self.0 {
                match value {
                    Some(v) => env::set_var(name, v),
                    None => env::remove_var(name),
                }
            }
        }
    }

    #[test]
    fn test_find_config_file_env_var() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let _snapshot = EnvSnapshot::clear();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("custom_config.toml");
        File::create(&config_path).unwrap();

        env::set_var("FOLIO_CONFIG_PATH", config_path.to_str().unwrap());
        let result = find_config_file();

        assert_eq!(result.unwrap(), Some(config_path));
    }

    #[test]
    fn test_find_config_file_env_var_missing() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let _snapshot = EnvSnapshot::clear();
        env::set_var("FOLIO_CONFIG_PATH", "/definitely/not/here.toml");

        let result = find_config_file();

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_minimal_config() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let _snapshot = EnvSnapshot::clear();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[server]").unwrap();
        writeln!(file, "port = 9000").unwrap();
        writeln!(file, "[catalog]").unwrap();
        writeln!(file, "path = \"\"").unwrap();

        let config = load_config(Some(&config_path), None).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let _snapshot = EnvSnapshot::clear();
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let result = load_config(Some(&missing), None);

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let _snapshot = EnvSnapshot::clear();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[server\nport = 1").unwrap();

        let result = load_config(Some(&config_path), None);

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_port_environment_override() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let _snapshot = EnvSnapshot::clear();
        let mut config = FolioConfig::default();

        env::set_var("PORT", "8081");
        env::set_var("FOLIO_HOST", "127.0.0.1");
        apply_environment_overrides(&mut config);

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_unparseable_port_is_ignored() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let _snapshot = EnvSnapshot::clear();
        let mut config = FolioConfig::default();

        env::set_var("PORT", "not-a-port");
        apply_environment_overrides(&mut config);

        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = FolioConfig::default();
        let mut cli_args = HashMap::new();
        cli_args.insert("host".to_string(), "10.0.0.1".to_string());
        cli_args.insert("port".to_string(), "7777".to_string());
        cli_args.insert("catalog".to_string(), "catalog.json".to_string());

        apply_cli_overrides(&mut config, &cli_args);

        assert_eq!(config.server.host, "10.0.0.1");
        assert_eq!(config.server.port, 7777);
        assert_eq!(config.catalog.path, Some(PathBuf::from("catalog.json")));
    }

    #[test]
    fn test_override_precedence() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let _snapshot = EnvSnapshot::clear();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[server]").unwrap();
        writeln!(file, "host = \"file-host\"").unwrap();
        writeln!(file, "port = 8000").unwrap();

        env::set_var("FOLIO_HOST", "env-host");
        env::set_var("PORT", "9000");

        let mut cli_args = HashMap::new();
        cli_args.insert("host".to_string(), "cli-host".to_string());

        let config = load_config(Some(&config_path), Some(&cli_args)).unwrap();

        // CLI wins for host, env wins for port (no CLI override)
        assert_eq!(config.server.host, "cli-host");
        assert_eq!(config.server.port, 9000);
    }
}
