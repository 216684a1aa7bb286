//! Route definitions for product listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Listing routes, nested under `/products`.
///
/// ```text
/// GET    /                  list_products
/// POST   /                  create_product
/// GET    /{product_id}      get_product
/// PATCH  /{product_id}      update_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(product::list_products).post(product::create_product),
        )
        .route(
            "/{product_id}",
            get(product::get_product).patch(product::update_product),
        )
}
