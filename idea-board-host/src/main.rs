//! Idea board host.
//!
//! Configuration comes from the environment and is fixed at startup:
//!
//! - `IDEA_BOARD_API_URL`: ideas API base URL (default `http://localhost:8000`)
//! - `IDEA_BOARD_ADDR`: listen address (default `127.0.0.1:3000`)
//! - `RUST_LOG`: log filter (default `info`)

use idea_board_host::{Assets, HostConfig, HostError, missing_bundle_files, router};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = HostConfig::from_env()?;

    let missing = missing_bundle_files::<Assets>();
    if !missing.is_empty() {
        tracing::warn!(
            ?missing,
            "Frontend bundle is incomplete; the page will not load. Rebuild with --features bundle"
        );
    }

    let app = router::<Assets>(config.client.clone());

    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| HostError::Bind {
            addr: config.addr,
            source,
        })?;

    tracing::info!(
        api_url = %config.client.api_url,
        "Idea board running on http://{}",
        config.addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
