use crate::api;
use anyhow::Result;
use tracing::debug;

/// Execute the server action.
/// # Errors
/// Returns an error if the server fails to start.
pub async fn execute(port: u16) -> Result<()> {
    debug!("starting server on port {}", port);

    api::new(port).await
}
