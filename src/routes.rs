use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::{error::AppError, state::AppState};

/// `GET /api/object/{id}`: relay the remote record for one object.
///
/// An empty id is rejected before any network call. The id format is not
/// validated beyond that; a bad id surfaces as whatever the remote returns.
pub async fn object_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    if id.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(state.collection.object(&id).await?))
}

/// `GET /api/search/{query}`: relay the remote hit list for a query, forwarded
/// verbatim as the `q` parameter.
pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Path(query): Path<String>,
) -> Result<Json<Value>, AppError> {
    if query.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(state.collection.search(&query).await?))
}
