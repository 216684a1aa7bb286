//! Route tree for the API.
//!
//! ```text
//! /health                               liveness + db ping (GET, unauthenticated)
//!
//! /products                             list, create (GET, POST)
//! /products/{id}                        get, update (GET, PATCH)
//!
//! /rentals                              list by role, book (GET, POST)
//! /rentals/{id}                         get (GET)
//! /rentals/{id}/approve                 owner approves booking (POST)
//! /rentals/{id}/reject                  owner rejects booking (POST)
//! /rentals/{id}/complete                owner completes rental (POST)
//! /rentals/{id}/extend                  borrower requests extension (POST)
//! /rentals/{id}/extensions              list extension requests (GET)
//!
//! /extensions/{id}/approve              owner approves extension (POST)
//! /extensions/{id}/reject               owner rejects extension (POST)
//!
//! /checkout/quote                       cart + delivery fee totals (POST)
//!
//! /notifications                        list (GET)
//! /notifications/unread-count           unread count (GET)
//! /notifications/read-all               mark all read (POST)
//! /notifications/{id}/read              mark one read (POST)
//! ```

pub mod checkout;
pub mod extension;
pub mod health;
pub mod notification;
pub mod product;
pub mod rental;

use axum::Router;

use crate::state::AppState;

/// All `/api/v1` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Product listings.
        .nest("/products", product::router())
        // Rental lifecycle (booking, decisions, extensions).
        .nest("/rentals", rental::router())
        // Owner decisions on recorded extension requests.
        .nest("/extensions", extension::router())
        // Cart/checkout quoting.
        .nest("/checkout", checkout::router())
        // Notification inbox.
        .nest("/notifications", notification::router())
}
