//! Handlers for the `/rentals` resource.
//!
//! Every operation delegates to the rental service, which performs the
//! borrower/owner capability checks against the actual records.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use lendhub_core::types::DbId;
use lendhub_db::models::rental::{BookRentalRequest, ExtendRentalRequest};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::services::rental::{self as rental_service, Decision, ExtensionOutcome, RentalRole};
use crate::state::AppState;

/// Query parameters for `GET /rentals`.
#[derive(Debug, Deserialize)]
pub struct RentalQuery {
    /// Which side of the marketplace to list. Defaults to `borrower`.
    pub role: Option<RentalRole>,
}

/// POST /api/v1/rentals
///
/// Book a product. The authenticated user becomes the borrower.
pub async fn create_rental(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<BookRentalRequest>,
) -> AppResult<impl IntoResponse> {
    let rental = rental_service::create_rental(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: rental })))
}

/// GET /api/v1/rentals?role=borrower|owner
///
/// List the authenticated user's rentals from either side.
pub async fn list_rentals(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<RentalQuery>,
) -> AppResult<impl IntoResponse> {
    let role = params.role.unwrap_or(RentalRole::Borrower);
    let rentals = rental_service::list_rentals(&state.pool, auth.user_id, role).await?;
    Ok(Json(DataResponse { data: rentals }))
}

/// GET /api/v1/rentals/{rental_id}
///
/// Fetch one rental; visible to its borrower and the product owner only.
pub async fn get_rental(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(rental_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rental = rental_service::get_rental(&state.pool, rental_id, auth.user_id).await?;
    Ok(Json(DataResponse { data: rental }))
}

/// POST /api/v1/rentals/{rental_id}/approve
///
/// Approve a pending booking. Owner only.
pub async fn approve_booking(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(rental_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rental =
        rental_service::decide_booking(&state.pool, rental_id, auth.user_id, Decision::Approve)
            .await?;
    Ok(Json(DataResponse { data: rental }))
}

/// POST /api/v1/rentals/{rental_id}/reject
///
/// Reject a pending booking. Owner only.
pub async fn reject_booking(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(rental_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rental =
        rental_service::decide_booking(&state.pool, rental_id, auth.user_id, Decision::Reject)
            .await?;
    Ok(Json(DataResponse { data: rental }))
}

/// POST /api/v1/rentals/{rental_id}/complete
///
/// Mark an active rental completed. Owner only; idempotent.
pub async fn complete_rental(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(rental_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let rental =
        rental_service::complete_rental(&state.pool, rental_id, auth.user_id).await?;
    Ok(Json(DataResponse { data: rental }))
}

/// POST /api/v1/rentals/{rental_id}/extend
///
/// Request an extension. Borrower only. Responds with either the updated
/// rental (auto-approved) or the pending extension request.
pub async fn extend_rental(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(rental_id): Path<DbId>,
    Json(input): Json<ExtendRentalRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = rental_service::request_extension(
        &state.pool,
        rental_id,
        auth.user_id,
        input.new_end_date,
        rental_service::today(),
    )
    .await?;

    let response = match outcome {
        ExtensionOutcome::Applied(rental) => (
            StatusCode::OK,
            Json(serde_json::json!({ "data": { "rental": rental } })),
        ),
        ExtensionOutcome::Requested(extension) => (
            StatusCode::ACCEPTED,
            Json(serde_json::json!({ "data": { "extension": extension } })),
        ),
    };
    Ok(response)
}

/// GET /api/v1/rentals/{rental_id}/extensions
///
/// List a rental's extension requests; visible to borrower and owner only.
pub async fn list_extensions(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(rental_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let extensions =
        rental_service::list_extensions(&state.pool, rental_id, auth.user_id).await?;
    Ok(Json(DataResponse { data: extensions }))
}
