//! Runtime settings of the tool service.

use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;

/// Engine base URL used when neither the file nor the environment sets one.
pub const DEFAULT_ENGINE_URL: &str = "http://127.0.0.1:8080/api";

/// Listen address used when neither the file nor the environment sets one.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8700";

/// Tool call timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Fully resolved settings.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Engine credential, sent as the `x-api-key` header.
    pub api_key: String,
    /// Base URL of the payroll engine.
    pub engine_url: String,
    /// Address the HTTP surface binds to.
    pub listen_addr: SocketAddr,
    /// Upper bound for one tool call, in seconds.
    pub request_timeout_secs: u64,
}

impl Settings {
    /// The tool call timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("engine_url", &self.engine_url)
            .field("listen_addr", &self.listen_addr)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// Optional YAML settings file.
///
/// Never carries the credential.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    /// Base URL of the payroll engine.
    pub engine_url: Option<String>,
    /// Address the HTTP surface binds to.
    pub listen_addr: Option<String>,
    /// Upper bound for one tool call, in seconds.
    pub request_timeout_secs: Option<u64>,
}
