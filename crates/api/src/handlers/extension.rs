//! Handlers for owner decisions on `/extensions`.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use lendhub_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::services::rental::{self as rental_service, Decision};
use crate::state::AppState;

/// POST /api/v1/extensions/{extension_id}/approve
///
/// Approve a pending extension request. Owner only. Applies the recorded
/// end date and cost to the rental and returns the updated rental.
pub async fn approve_extension(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(extension_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rental = rental_service::decide_extension(
        &state.pool,
        extension_id,
        auth.user_id,
        Decision::Approve,
    )
    .await?;
    Ok(Json(DataResponse { data: rental }))
}

/// POST /api/v1/extensions/{extension_id}/reject
///
/// Reject a pending extension request. Owner only. The rental is untouched.
pub async fn reject_extension(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(extension_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rental = rental_service::decide_extension(
        &state.pool,
        extension_id,
        auth.user_id,
        Decision::Reject,
    )
    .await?;
    Ok(Json(DataResponse { data: rental }))
}
