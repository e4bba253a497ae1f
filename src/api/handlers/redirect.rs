//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Returns `307 Temporary Redirect`, so clients re-check on every visit and
/// each visit is counted. Hit counting happens off the request path.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or malformed.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let target_url = state.resolver.resolve(&code).await?;

    Ok(Redirect::temporary(&target_url))
}
