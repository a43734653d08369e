//! Settings loading.
//!
//! This module provides the [`SettingsLoader`] type, which layers defaults,
//! an optional YAML file and environment variables into [`Settings`].

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::{
    DEFAULT_ENGINE_URL, DEFAULT_LISTEN_ADDR, DEFAULT_REQUEST_TIMEOUT_SECS, Settings, SettingsFile,
};

/// Required engine credential.
pub const API_KEY_ENV: &str = "BORDRO_API_KEY";
/// Path of the optional YAML settings file.
pub const CONFIG_FILE_ENV: &str = "BORDRO_CONFIG";
/// Engine base URL override.
pub const ENGINE_URL_ENV: &str = "BORDRO_ENGINE_URL";
/// Listen address override.
pub const LISTEN_ADDR_ENV: &str = "BORDRO_LISTEN_ADDR";
/// Tool call timeout override, in seconds.
pub const REQUEST_TIMEOUT_ENV: &str = "BORDRO_REQUEST_TIMEOUT_SECS";

/// Builds [`Settings`] from the process environment.
///
/// # Example
///
/// ```
/// use bordro_tools::config::SettingsLoader;
///
/// let settings = SettingsLoader::from_lookup(|key| match key {
///     "BORDRO_API_KEY" => Some("secret".to_string()),
///     _ => None,
/// })?;
/// assert_eq!(settings.request_timeout_secs, 120);
/// # Ok::<(), bordro_tools::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SettingsLoader;

impl SettingsLoader {
    /// Loads settings from `.env`, the process environment and the optional file.
    ///
    /// # Returns
    ///
    /// Returns an error if:
    /// - `BORDRO_API_KEY` is missing or blank
    /// - the file named by `BORDRO_CONFIG` cannot be read or parsed
    /// - an override holds an unparsable value
    pub fn load() -> PayrollResult<Settings> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings reading variables through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> PayrollResult<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = var(API_KEY_ENV).ok_or_else(|| PayrollError::MissingCredential {
            variable: API_KEY_ENV.to_string(),
        })?;

        let file = match var(CONFIG_FILE_ENV) {
            Some(path) => Self::load_file(Path::new(&path))?,
            None => SettingsFile::default(),
        };

        let engine_url = var(ENGINE_URL_ENV)
            .or(file.engine_url)
            .unwrap_or_else(|| DEFAULT_ENGINE_URL.to_string());

        let listen_addr = var(LISTEN_ADDR_ENV)
            .or(file.listen_addr)
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr =
            listen_addr
                .parse()
                .map_err(|e: std::net::AddrParseError| PayrollError::ConfigParseError {
                    path: LISTEN_ADDR_ENV.to_string(),
                    message: format!("'{}': {}", listen_addr, e),
                })?;

        let request_timeout_secs = match var(REQUEST_TIMEOUT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| PayrollError::ConfigParseError {
                    path: REQUEST_TIMEOUT_ENV.to_string(),
                    message: format!("'{}': {}", raw, e),
                })?,
            None => file
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        };
        if request_timeout_secs == 0 {
            return Err(PayrollError::ConfigParseError {
                path: REQUEST_TIMEOUT_ENV.to_string(),
                message: "timeout must be at least one second".to_string(),
            });
        }

        Ok(Settings {
            api_key,
            engine_url,
            listen_addr,
            request_timeout_secs,
        })
    }

    /// Loads and parses the YAML settings file.
    fn load_file(path: &Path) -> PayrollResult<SettingsFile> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| PayrollError::ConfigParseError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::time::Duration;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn write_temp_yaml(content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("bordro-{}.yaml", uuid::Uuid::new_v4()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults_with_only_api_key() {
        let settings = SettingsLoader::from_lookup(lookup(&[(API_KEY_ENV, "secret")])).unwrap();
        assert_eq!(settings.api_key, "secret");
        assert_eq!(settings.engine_url, DEFAULT_ENGINE_URL);
        assert_eq!(settings.listen_addr, "127.0.0.1:8700".parse().unwrap());
        assert_eq!(settings.request_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let result = SettingsLoader::from_lookup(lookup(&[]));
        match result {
            Err(PayrollError::MissingCredential { variable }) => assert_eq!(variable, API_KEY_ENV),
            other => panic!("Expected MissingCredential, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let result = SettingsLoader::from_lookup(lookup(&[(API_KEY_ENV, "   ")]));
        assert!(matches!(result, Err(PayrollError::MissingCredential { .. })));
    }

    #[test]
    fn test_environment_overrides() {
        let settings = SettingsLoader::from_lookup(lookup(&[
            (API_KEY_ENV, "secret"),
            (ENGINE_URL_ENV, "http://engine.internal/api"),
            (LISTEN_ADDR_ENV, "0.0.0.0:9000"),
            (REQUEST_TIMEOUT_ENV, "15"),
        ]))
        .unwrap();
        assert_eq!(settings.engine_url, "http://engine.internal/api");
        assert_eq!(settings.listen_addr.port(), 9000);
        assert_eq!(settings.request_timeout_secs, 15);
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let result = SettingsLoader::from_lookup(lookup(&[
            (API_KEY_ENV, "secret"),
            (REQUEST_TIMEOUT_ENV, "soon"),
        ]));
        assert!(matches!(result, Err(PayrollError::ConfigParseError { .. })));

        let result = SettingsLoader::from_lookup(lookup(&[
            (API_KEY_ENV, "secret"),
            (REQUEST_TIMEOUT_ENV, "0"),
        ]));
        assert!(matches!(result, Err(PayrollError::ConfigParseError { .. })));
    }

    #[test]
    fn test_invalid_listen_addr_is_rejected() {
        let result = SettingsLoader::from_lookup(lookup(&[
            (API_KEY_ENV, "secret"),
            (LISTEN_ADDR_ENV, "localhost"),
        ]));
        assert!(matches!(result, Err(PayrollError::ConfigParseError { .. })));
    }

    #[test]
    fn test_file_values_used_and_env_wins() {
        let path = write_temp_yaml(
            "engine_url: http://from-file/api\nlisten_addr: 127.0.0.1:9100\nrequest_timeout_secs: 45\n",
        );
        let path_str = path.display().to_string();

        let settings = SettingsLoader::from_lookup(lookup(&[
            (API_KEY_ENV, "secret"),
            (CONFIG_FILE_ENV, &path_str),
            (REQUEST_TIMEOUT_ENV, "5"),
        ]))
        .unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(settings.engine_url, "http://from-file/api");
        assert_eq!(settings.listen_addr.port(), 9100);
        assert_eq!(settings.request_timeout_secs, 5);
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let result = SettingsLoader::from_lookup(lookup(&[
            (API_KEY_ENV, "secret"),
            (CONFIG_FILE_ENV, "/nonexistent/bordro.yaml"),
        ]));
        match result {
            Err(PayrollError::ConfigParseError { path, .. }) => {
                assert_eq!(path, "/nonexistent/bordro.yaml")
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_file_key_is_rejected() {
        let path = write_temp_yaml("api_key: leaked\n");
        let path_str = path.display().to_string();
        let result = SettingsLoader::from_lookup(lookup(&[
            (API_KEY_ENV, "secret"),
            (CONFIG_FILE_ENV, &path_str),
        ]));
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(PayrollError::ConfigParseError { .. })));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let settings = SettingsLoader::from_lookup(lookup(&[(API_KEY_ENV, "secret")])).unwrap();
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
