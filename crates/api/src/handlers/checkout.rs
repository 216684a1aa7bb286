//! Handlers for the `/checkout` resource.
//!
//! Cart pricing is `price * quantity` plus a flat delivery fee; period
//! proration only happens at rental-creation time. The two pricing paths
//! are kept separate on purpose.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use lendhub_core::cart::{cart_total, checkout_total, CartLine, DELIVERY_FEE};
use lendhub_core::error::CoreError;
use lendhub_core::money::Money;
use lendhub_core::types::DbId;
use lendhub_db::repositories::ProductRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// One line of the submitted cart.
#[derive(Debug, Deserialize)]
pub struct QuoteItem {
    pub product_id: DbId,
    pub quantity: i64,
}

/// Request body for `POST /checkout/quote`.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub items: Vec<QuoteItem>,
}

/// Computed totals for a cart, all in paise.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub cart_total: Money,
    pub delivery_fee: Money,
    pub checkout_total: Money,
}

/// POST /api/v1/checkout/quote
///
/// Price the submitted cart against current listing prices.
pub async fn quote(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<QuoteRequest>,
) -> AppResult<impl IntoResponse> {
    let mut lines = Vec::with_capacity(input.items.len());

    for item in &input.items {
        if item.quantity < 1 {
            return Err(CoreError::Validation(
                "Quantity must be at least 1".to_string(),
            )
            .into());
        }

        let product = ProductRepo::find_by_id(&state.pool, item.product_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Product",
                id: item.product_id,
            })?;

        lines.push(CartLine {
            price: product.price,
            quantity: item.quantity,
        });
    }

    let subtotal = cart_total(&lines);

    Ok(Json(DataResponse {
        data: QuoteResponse {
            cart_total: subtotal,
            delivery_fee: DELIVERY_FEE,
            checkout_total: checkout_total(subtotal),
        },
    }))
}
