//! Product (listing) entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lendhub_core::money::Money;
use lendhub_core::types::{DbId, Timestamp};

/// A row from the `products` table.
///
/// `price` and `deposit` are integer paise; `rate_period` is one of the
/// `lendhub_core::pricing::RatePeriod` strings; `images` is a JSON array of
/// image URLs (upload itself is handled elsewhere).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub price: Money,
    pub rate_period: String,
    pub deposit: Money,
    pub images: serde_json::Value,
    pub is_available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a listing. The owner comes from the
/// authenticated user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub title: String,
    pub description: Option<String>,
    pub price: Money,
    pub rate_period: String,
    pub deposit: Option<Money>,
    pub images: Option<serde_json::Value>,
}

/// Request body for patching a listing (all fields optional).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub rate_period: Option<String>,
    pub deposit: Option<Money>,
    pub images: Option<serde_json::Value>,
    pub is_available: Option<bool>,
}
