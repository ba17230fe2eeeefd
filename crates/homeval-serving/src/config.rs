//! Server configuration.

use crate::error::{ServingError, ServingResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the serving process.
///
/// # Example
///
/// ```
/// use homeval_serving::config::ServerConfig;
///
/// let config = ServerConfig::builder()
///     .host("0.0.0.0")
///     .port(8080)
///     .bundle_dir("/var/lib/homeval/bundle")
///     .build();
/// assert_eq!(config.socket_addr(), "0.0.0.0:8080");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,

    /// Port to listen on.
    pub port: u16,

    /// Directory holding the artifact bundle written by training.
    pub bundle_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            bundle_dir: PathBuf::from("./bundle"),
        }
    }
}

impl ServerConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// The socket address string for binding.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ServingResult<()> {
        if self.host.is_empty() {
            return Err(ServingError::config("host must not be empty"));
        }
        if self.port == 0 {
            return Err(ServingError::config("port must be non-zero"));
        }
        if self.bundle_dir.as_os_str().is_empty() {
            return Err(ServingError::config("bundle_dir must not be empty"));
        }
        Ok(())
    }
}

/// Builder for [`ServerConfig`].
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    bundle_dir: Option<PathBuf>,
}

impl ServerConfigBuilder {
    /// Set the host address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the bundle directory.
    pub fn bundle_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.bundle_dir = Some(dir.into());
        self
    }

    /// Build the configuration, falling back to defaults for unset fields.
    pub fn build(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            bundle_dir: self.bundle_dir.unwrap_or(defaults.bundle_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ServerConfig::builder()
            .host("0.0.0.0")
            .port(9000)
            .bundle_dir("/tmp/bundle")
            .build();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.socket_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let config = ServerConfig::builder().port(0).build();
        assert!(matches!(config.validate(), Err(ServingError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_host() {
        let config = ServerConfig {
            host: String::new(),
            ..ServerConfig::default()
        };
        assert!(matches!(config.validate(), Err(ServingError::Config(_))));
    }
}
