//! The HTTP boundary: validates requests and forwards them to the regression core.

mod error;
pub mod handlers;
pub mod requests;

use std::{io, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use log::info;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

pub use error::ApiError;

use crate::{
    config::{Limits, ServerConfig},
    datasets::DatasetRegistry,
};

/// State shared by every handler. Read only, so requests never contend.
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: Arc<DatasetRegistry>,
    pub limits: Limits,
}

impl AppState {
    pub fn new(registry: DatasetRegistry, limits: Limits) -> Self {
        Self {
            registry: Arc::new(registry),
            limits,
        }
    }
}

/// Builds the service's routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/datasets", get(handlers::list_datasets))
        .route("/api/datasets/:name", get(handlers::get_dataset))
        .route("/api/train", post(handlers::train))
        .route("/api/prediction-line", post(handlers::prediction_line))
        .with_state(state)
}

/// Serves the API until `shutdown` is cancelled.
///
/// # Errors
/// Returns an io error if binding or serving fails.
pub async fn serve(config: ServerConfig, shutdown: CancellationToken) -> io::Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("listening at {}", listener.local_addr()?);

    let app = router(AppState::new(DatasetRegistry::builtin(), config.limits));

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("server stopped");
    Ok(())
}
