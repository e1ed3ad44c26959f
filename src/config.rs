// Runtime configuration.
// Validates CLI/env settings once and resolves default file locations.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Settings;
use crate::error::{DashError, Result};
use crate::metrics::MetricsClient;
use crate::snapshot::{default_history_path, default_snapshot_path};

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub snapshot_path: PathBuf,
    pub history_path: PathBuf,
    pub refresh_interval: Duration,
    pub cache_ttl: Duration,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut issues: Vec<String> = Vec::new();

        if settings.refresh_secs == 0 {
            issues.push("refresh interval must be > 0".into());
        }
        if settings.cache_ttl_secs == 0 {
            issues.push("cache TTL must be > 0".into());
        }
        if settings.timeout_secs == 0 {
            issues.push("HTTP timeout must be > 0".into());
        }
        if !issues.is_empty() {
            return Err(DashError::Config(issues.join("; ")));
        }

        Ok(Self {
            api_url: non_empty(settings.api_url.as_deref()),
            api_key: non_empty(settings.api_key.as_deref()),
            snapshot_path: settings
                .snapshot_path
                .clone()
                .unwrap_or_else(default_snapshot_path),
            history_path: settings
                .history_path
                .clone()
                .unwrap_or_else(default_history_path),
            refresh_interval: Duration::from_secs(settings.refresh_secs),
            cache_ttl: Duration::from_secs(settings.cache_ttl_secs),
            http_timeout: Duration::from_secs(settings.timeout_secs),
        })
    }

    /// Whether a remote endpoint is configured at all.
    pub fn has_remote(&self) -> bool {
        self.api_url.is_some()
    }

    /// Build a client for the configured endpoint.
    pub fn metrics_client(&self) -> Result<MetricsClient> {
        let url = self.api_url.as_deref().ok_or(DashError::MissingEndpoint)?;
        let key = self.api_key.as_deref().ok_or(DashError::MissingToken)?;
        MetricsClient::new(url, key, self.http_timeout)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["tridash"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_explicit_settings() {
        let cli = parse(&[
            "sync",
            "--api-url",
            "https://example.com/athlete/metrics",
            "--api-key",
            "secret",
            "--snapshot",
            "/tmp/snap.json",
            "--refresh-secs",
            "60",
        ]);
        let config = Config::from_settings(&cli.settings).unwrap();

        assert_eq!(
            config.api_url.as_deref(),
            Some("https://example.com/athlete/metrics")
        );
        assert_eq!(config.snapshot_path, PathBuf::from("/tmp/snap.json"));
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
        assert!(config.has_remote());
        assert!(config.metrics_client().is_ok());
    }

    #[test]
    fn test_zero_durations_rejected() {
        let cli = parse(&["--refresh-secs", "0", "--timeout-secs", "0"]);
        let err = Config::from_settings(&cli.settings).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("refresh interval"));
        assert!(msg.contains("HTTP timeout"));
    }

    #[test]
    fn test_missing_credentials() {
        let mut config = Config::from_settings(&parse(&[]).settings).unwrap();
        config.api_url = None;
        config.api_key = None;
        assert!(matches!(
            config.metrics_client(),
            Err(DashError::MissingEndpoint)
        ));

        config.api_url = Some("https://example.com/metrics".into());
        assert!(matches!(config.metrics_client(), Err(DashError::MissingToken)));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let cli = parse(&["--api-url", "  ", "--api-key", ""]);
        let config = Config::from_settings(&cli.settings).unwrap();
        assert!(!config.has_remote());
        assert!(config.api_key.is_none());
    }
}
