//! Server configuration.
//!
//! Values are layered with the `config` crate, lowest precedence first:
//!
//! 1. built-in defaults (`0.0.0.0:8000`, 30 s request timeout)
//! 2. an optional `health-server.{toml,yaml,json}` file (working directory by default)
//! 3. `HEALTH_SERVER_*` environment variables
//!
//! Running the binary with no file and no variables listens on `0.0.0.0:8000`.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigBuilder, Environment, File, Map, builder::DefaultState};
use serde::Deserialize;

use crate::error::{Result, ServerError};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Prefix for environment overrides, e.g. `HEALTH_SERVER_PORT`.
pub const ENV_PREFIX: &str = "HEALTH_SERVER";

/// Base name of the optional configuration file.
pub const CONFIG_FILE: &str = "health-server";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Interface to listen on.
    pub host: String,

    /// TCP port to listen on.
    pub port: u16,

    /// Per-request timeout in seconds; 0 disables it.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from defaults, the optional config file and the
    /// process environment.
    pub fn load() -> Result<Self> {
        Self::from_sources(Path::new("."), None)
    }

    /// Loads configuration from defaults, an optional `health-server.*` file
    /// in `dir`, and then `vars` (or the process environment when `None`).
    pub fn from_sources(dir: &Path, vars: Option<Map<String, String>>) -> Result<Self> {
        let config = defaults()?
            .add_source(File::from(dir.join(CONFIG_FILE)).required(false))
            .add_source(environment(vars))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Loads configuration from defaults plus an explicit set of variables,
    /// ignoring the process environment and any config file.
    pub fn from_env_map(vars: Map<String, String>) -> Result<Self> {
        let config = defaults()?.add_source(environment(Some(vars))).build()?;

        Ok(config.try_deserialize()?)
    }

    /// Resolves host and port into the address the listener binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ServerError::InvalidAddress {
                host: self.host.clone(),
                port: self.port,
                source,
            })?;

        Ok(SocketAddr::new(ip, self.port))
    }

    /// Request timeout, or `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("host", DEFAULT_HOST)?
        .set_default("port", i64::from(DEFAULT_PORT))?
        .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?)
}

fn environment(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .source(vars)
}
