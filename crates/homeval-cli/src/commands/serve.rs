//! Serve Command Implementation
//!
//! Runs the HTTP serving process over an exported artifact bundle.

use anyhow::Context;
use clap::Args;
use homeval_serving::{server, ServerConfig};

use crate::CliResult;
use std::path::PathBuf;
use tracing::info;

/// Serve an exported bundle over HTTP
///
/// Loads the artifact bundle once at startup and exposes the prediction
/// endpoint plus the house record routes until interrupted.
///
/// # Example
///
/// ```bash
/// homeval serve --bundle-dir /path/to/bundle --host 0.0.0.0 --port 8080
/// ```
#[derive(Args, Debug, Clone)]
pub struct ServeCommand {
    /// Directory holding model.json, scaler.json, and encoders.json
    #[arg(long, short = 'b', env = "HOMEVAL_BUNDLE_DIR", default_value = "./bundle")]
    pub bundle_dir: PathBuf,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short = 'p', default_value = "8080")]
    pub port: u16,
}

impl ServeCommand {
    /// Execute the serve command
    pub async fn run(&self) -> CliResult<()> {
        let config = ServerConfig::builder()
            .host(&self.host)
            .port(self.port)
            .bundle_dir(&self.bundle_dir)
            .build();

        info!(host = %self.host, port = self.port, bundle = %self.bundle_dir.display(), "Starting server");
        server::run(config)
            .await
            .with_context(|| format!("server on {}:{} exited", self.host, self.port))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_run_fails_without_a_bundle() {
        let dir = TempDir::new().unwrap();
        let cmd = ServeCommand {
            bundle_dir: dir.path().join("missing"),
            host: "127.0.0.1".to_string(),
            port: 8099,
        };
        assert!(cmd.run().await.is_err());
    }
}
