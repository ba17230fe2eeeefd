//! Server lifecycle.

use crate::bundle::load_bundle;
use crate::config::ServerConfig;
use crate::error::ServingResult;
use crate::routes::router;
use crate::state::AppState;
use tracing::info;

/// Run the serving process until shutdown.
///
/// Startup order matters: the artifact bundle loads before the listener
/// binds, so a missing or corrupt bundle means the server never accepts a
/// request.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the bundle fails to
/// load, or the listener cannot bind.
pub async fn run(config: ServerConfig) -> ServingResult<()> {
    config.validate()?;

    let bundle = load_bundle(&config.bundle_dir)?;
    let state = AppState::new(bundle);
    let app = router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Serving predictions and house records");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    // Both a failed signal registration and a received signal end serving.
    let _ = tokio::signal::ctrl_c().await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServingError;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_run_refuses_missing_bundle() {
        let dir = tempdir().unwrap();
        let config = ServerConfig::builder()
            .host("127.0.0.1")
            .port(19080)
            .bundle_dir(dir.path().join("absent"))
            .build();

        let err = run(config).await.unwrap_err();
        assert!(matches!(err, ServingError::ArtifactLoad(_)));
    }

    #[tokio::test]
    async fn test_run_refuses_invalid_config() {
        let config = ServerConfig::builder().port(0).build();
        let err = run(config).await.unwrap_err();
        assert!(matches!(err, ServingError::Config(_)));
    }
}
