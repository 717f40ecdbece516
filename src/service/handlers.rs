use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use log::{info, warn};
use serde_json::{json, Value};

use super::{
    error::ApiError,
    requests::{DatasetResponse, LineRequest, LineResponse, TrainRequest, TrainResponse},
    AppState,
};
use crate::{datasets::Dataset, regression::sample_line};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /api/datasets`
pub async fn list_datasets(State(state): State<AppState>) -> Json<Vec<Dataset>> {
    Json(state.registry.iter().cloned().collect())
}

/// `GET /api/datasets/{name}`
pub async fn get_dataset(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DatasetResponse>, ApiError> {
    let dataset = state.registry.get(&name)?;

    Ok(Json(DatasetResponse {
        name,
        data: dataset.points.clone(),
    }))
}

/// `POST /api/train`
///
/// Training runs on the blocking pool, so concurrent requests don't stall the runtime.
pub async fn train(
    State(state): State<AppState>,
    body: Result<Json<TrainRequest>, JsonRejection>,
) -> Result<Json<TrainResponse>, ApiError> {
    let Json(req) = body?;
    let dataset_name = req.dataset_name.clone();

    let (trainer, data) = req
        .validate(&state.limits, &state.registry)
        .inspect_err(|e| warn!("rejected training request for {dataset_name}: {e}"))?;

    info!(
        "training on {dataset_name} ({} points), learning_rate = {}, iterations = {}",
        data.len(),
        trainer.learning_rate(),
        trainer.iterations()
    );

    let result = tokio::task::spawn_blocking(move || trainer.train(&data))
        .await
        .map_err(|e| {
            warn!("training task failed: {e}");
            ApiError::internal("Training failed")
        })??;

    Ok(Json(result.into()))
}

/// `POST /api/prediction-line`
pub async fn prediction_line(
    State(state): State<AppState>,
    body: Result<Json<LineRequest>, JsonRejection>,
) -> Result<Json<LineResponse>, ApiError> {
    let Json(req) = body?;
    let point_count = req.point_count(&state.limits)?;

    Ok(Json(LineResponse {
        prediction_line: sample_line(req.theta0, req.theta1, req.x_min, req.x_max, point_count),
    }))
}
