//! Configuration loading for the payroll tool service.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional YAML file named by `BORDRO_CONFIG`, and `BORDRO_*`
//! environment variables (a `.env` file is honoured). The engine credential
//! is only ever read from the environment.
//!
//! # Example
//!
//! ```no_run
//! use bordro_tools::config::SettingsLoader;
//!
//! let settings = SettingsLoader::load()?;
//! println!("Engine at {}", settings.engine_url);
//! # Ok::<(), bordro_tools::error::PayrollError>(())
//! ```

mod loader;
mod types;

pub use loader::{
    API_KEY_ENV, CONFIG_FILE_ENV, ENGINE_URL_ENV, LISTEN_ADDR_ENV, REQUEST_TIMEOUT_ENV,
    SettingsLoader,
};
pub use types::{
    DEFAULT_ENGINE_URL, DEFAULT_LISTEN_ADDR, DEFAULT_REQUEST_TIMEOUT_SECS, Settings, SettingsFile,
};
