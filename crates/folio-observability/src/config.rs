// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Observability configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging configuration consumed by [`crate::init_logging`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Base log level (trace, debug, info, warn, error)
    pub level: String,

    /// Console format
    pub format: LogFormat,

    /// Directory for rotated log files (requires the `file-logging` feature)
    pub log_dir: Option<PathBuf>,

    /// Keep runs newer than this many days
    pub retention_days: u64,

    /// Keep at most this many runs
    pub retention_runs: usize,
}

/// Console log format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogFormat {
    Text,
    Json,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        ObservabilityConfig {
            level: "info".to_string(),
            format: LogFormat::Text,
            log_dir: None,
            retention_days: 30,
            retention_runs: 10,
        }
    }
}

impl ObservabilityConfig {
    /// Derive observability settings from the server configuration
    pub fn from_logging(logging: &folio_config::LoggingConfig) -> Self {
        ObservabilityConfig {
            level: logging.level.clone(),
            log_dir: logging.log_dir.clone(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_logging() {
        let logging = folio_config::LoggingConfig {
            level: "debug".to_string(),
            log_dir: Some(PathBuf::from("/tmp/folio-logs")),
        };

        let config = ObservabilityConfig::from_logging(&logging);

        assert_eq!(config.level, "debug");
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/folio-logs")));
        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.retention_runs, 10);
    }
}
