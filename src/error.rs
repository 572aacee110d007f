use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Proxy endpoint failures. Both variants render as a fixed JSON body; the
/// underlying cause is only ever logged, never sent to the browser.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("An Error Occurred")]
    Upstream(#[from] reqwest::Error),

    #[error("An Error Occurred")]
    Url(#[from] url::ParseError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Upstream(source) => {
                error!("Remote collection call failed: {source}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Url(source) => {
                error!("Bad collection URL: {source}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
