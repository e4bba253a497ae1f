//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortLinkResponse, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/page",
///   "custom_path": "mypage"   // optional; empty string means none
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "short_url": "mypage",
///   "original_url": "https://example.com/page",
///   "created_at": "2024-01-01T00:00:00Z",
///   "clicks": 0
/// }
/// ```
///
/// # Errors
///
/// - 400 for an invalid URL, invalid custom path, or unparsable body
/// - 409 if the custom path is taken
/// - 503 if no free generated code was found
/// - 500 on storage failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortLinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .registrar
        .register(&payload.url, payload.custom_code())
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}
