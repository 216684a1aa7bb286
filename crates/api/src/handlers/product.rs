//! Handlers for the `/products` resource (listings).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use lendhub_core::error::CoreError;
use lendhub_core::pricing::RatePeriod;
use lendhub_core::types::DbId;
use lendhub_db::models::product::{CreateProduct, UpdateProduct};
use lendhub_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /products`.
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    /// If `true`, return only listings open for booking. Defaults to `true`.
    pub available_only: Option<bool>,
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}

/// Maximum page size for listing browsing.
const MAX_LIMIT: i64 = 100;

/// Default page size for listing browsing.
const DEFAULT_LIMIT: i64 = 50;

/// Reject a listing payload whose pricing fields are unusable.
fn validate_pricing(price: i64, rate_period: Option<&str>) -> Result<(), AppError> {
    if price < 0 {
        return Err(CoreError::Validation("Price must not be negative".to_string()).into());
    }
    if let Some(period) = rate_period {
        RatePeriod::parse(period).map_err(|_| {
            CoreError::Validation(format!("Unknown rate period '{period}'"))
        })?;
    }
    Ok(())
}

/// POST /api/v1/products
///
/// Create a listing owned by the authenticated user.
pub async fn create_product(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    validate_pricing(input.price, Some(input.rate_period.as_str()))?;
    if let Some(deposit) = input.deposit {
        if deposit < 0 {
            return Err(
                CoreError::Validation("Deposit must not be negative".to_string()).into(),
            );
        }
    }

    let product = ProductRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        product_id = product.id,
        "Listing created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: product })))
}

/// GET /api/v1/products
///
/// Browse listings, newest first.
pub async fn list_products(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ProductQuery>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let offset = params.offset.unwrap_or(0);
    let available_only = params.available_only.unwrap_or(true);

    let products = ProductRepo::list(&state.pool, available_only, limit, offset).await?;
    Ok(Json(DataResponse { data: products }))
}

/// GET /api/v1/products/{product_id}
pub async fn get_product(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::find_by_id(&state.pool, product_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        })?;
    Ok(Json(DataResponse { data: product }))
}

/// PATCH /api/v1/products/{product_id}
///
/// Update a listing. Only its owner may do so.
pub async fn update_product(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    Json(patch): Json<UpdateProduct>,
) -> AppResult<impl IntoResponse> {
    let existing = ProductRepo::find_by_id(&state.pool, product_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        })?;

    if existing.owner_id != auth.user_id {
        return Err(CoreError::Unauthorized(
            "Only the product owner may update this listing".to_string(),
        )
        .into());
    }

    validate_pricing(patch.price.unwrap_or(0), patch.rate_period.as_deref())?;

    let product = ProductRepo::update(&state.pool, product_id, &patch)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        })?;

    tracing::info!(
        user_id = auth.user_id,
        product_id,
        "Listing updated"
    );

    Ok(Json(DataResponse { data: product }))
}
