// src/config.rs
//
// Settings read once by rust_sdk_init. Everything comes from the process
// environment; there is no config file at this boundary.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::error::{Result, SdkError};

pub const ENV_LOG: &str = "RUST_SDK_LOG";
pub const ENV_LOG_FALLBACK: &str = "RUST_LOG";
pub const ENV_LOG_FILE: &str = "RUST_SDK_LOG_FILE";
pub const ENV_LOG_ANSI: &str = "RUST_SDK_LOG_ANSI";

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    /// EnvFilter directives, already validated.
    pub log_filter: String,
    pub log_file: Option<PathBuf>,
    pub log_ansi: bool,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
            log_ansi: false,
        }
    }
}

impl SdkConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. `from_env` passes the process
    /// environment; tests pass a map so they never mutate global state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // RUST_SDK_LOG is ours and must parse. RUST_LOG belongs to the host,
        // so a value we can't read is skipped rather than failing init.
        let log_filter = match non_empty(ENV_LOG) {
            Some(filter) => {
                EnvFilter::try_new(&filter)
                    .map_err(|e| SdkError::Config(format!("{ENV_LOG}={filter:?}: {e}")))?;
                filter
            }
            None => non_empty(ENV_LOG_FALLBACK)
                .filter(|filter| EnvFilter::try_new(filter).is_ok())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        };

        let log_file = non_empty(ENV_LOG_FILE).map(PathBuf::from);

        let log_ansi = match non_empty(ENV_LOG_ANSI) {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| SdkError::Config(format!("{ENV_LOG_ANSI}={raw:?} is not a boolean")))?,
            None => false,
        };

        Ok(Self { log_filter, log_file, log_ansi })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = SdkConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, SdkConfig::default());
    }

    #[test]
    fn sdk_filter_wins_over_rust_log() {
        let cfg = SdkConfig::from_lookup(lookup(&[
            (ENV_LOG, "rust_spm_sdk=debug"),
            (ENV_LOG_FALLBACK, "info"),
        ]))
        .unwrap();
        assert_eq!(cfg.log_filter, "rust_spm_sdk=debug");
    }

    #[test]
    fn falls_back_to_rust_log() {
        let cfg = SdkConfig::from_lookup(lookup(&[(ENV_LOG, "  "), (ENV_LOG_FALLBACK, "info")])).unwrap();
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn rejects_bad_filter() {
        let err = SdkConfig::from_lookup(lookup(&[(ENV_LOG, "rust_spm_sdk=notalevel")])).unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[test]
    fn bad_rust_log_falls_back_to_default() {
        let cfg = SdkConfig::from_lookup(lookup(&[(ENV_LOG_FALLBACK, "myapp=verbose")])).unwrap();
        assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn bad_sdk_filter_names_its_variable() {
        let err = SdkConfig::from_lookup(lookup(&[
            (ENV_LOG, "rust_spm_sdk=verbose"),
            (ENV_LOG_FALLBACK, "info"),
        ]))
        .unwrap_err();
        match err {
            SdkError::Config(msg) => {
                assert!(msg.starts_with("RUST_SDK_LOG=\"rust_spm_sdk=verbose\""), "{msg}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn parses_ansi_and_file() {
        let cfg = SdkConfig::from_lookup(lookup(&[
            (ENV_LOG_ANSI, "Yes"),
            (ENV_LOG_FILE, "/tmp/rust_sdk.log"),
        ]))
        .unwrap();
        assert!(cfg.log_ansi);
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/rust_sdk.log")));
    }

    #[test]
    fn rejects_bad_bool() {
        let err = SdkConfig::from_lookup(lookup(&[(ENV_LOG_ANSI, "maybe")])).unwrap_err();
        assert_eq!(
            err,
            SdkError::Config("RUST_SDK_LOG_ANSI=\"maybe\" is not a boolean".to_string())
        );
    }
}
