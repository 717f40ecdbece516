use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::LinRegErr;

/// An error as reported to HTTP clients: a status code and a `{ "message": ... }` body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<LinRegErr> for ApiError {
    fn from(err: LinRegErr) -> Self {
        match err {
            LinRegErr::DatasetNotFound(name) => {
                log::debug!("unknown dataset {name}");
                Self::new(StatusCode::NOT_FOUND, "Dataset not found")
            }
            LinRegErr::TooFewPoints { min, .. } => Self::new(
                StatusCode::BAD_REQUEST,
                format!("Custom data must have at least {min} points"),
            ),
            LinRegErr::EmptyDataset
            | LinRegErr::InvalidHyperparameter { .. }
            | LinRegErr::NonFinitePoint { .. } => {
                Self::new(StatusCode::BAD_REQUEST, err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        log::debug!("rejected request body: {rejection}");
        Self::new(StatusCode::BAD_REQUEST, "Invalid parameters")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_statuses() {
        let err = ApiError::from(LinRegErr::DatasetNotFound("stocks".into()));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Dataset not found");

        let err = ApiError::from(LinRegErr::TooFewPoints { got: 1, min: 3 });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Custom data must have at least 3 points");

        let err = ApiError::from(LinRegErr::InvalidHyperparameter {
            name: "Iterations",
            reason: "must be between 1 and 10000".into(),
        });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Iterations must be between 1 and 10000");
    }

    #[test]
    fn response_carries_the_status() {
        let response = ApiError::internal("Training failed").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
