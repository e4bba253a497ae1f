//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::shorten::ShortLinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored mapping and its hit counter.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// Does not count as a hit. The counter is eventually consistent with
/// redirects, since increments are applied by a background worker.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortLinkResponse>, AppError> {
    let link = state.resolver.inspect(&code).await?;

    Ok(Json(link.into()))
}
