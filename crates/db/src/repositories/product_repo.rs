//! Repository for the `products` table.

use sqlx::PgExecutor;

use lendhub_core::types::DbId;

use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list for `products` queries.
const COLUMNS: &str = "id, owner_id, title, description, price, rate_period, \
    deposit, images, is_available, created_at, updated_at";

/// Provides CRUD operations for product listings.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new listing owned by `owner_id`, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        owner_id: DbId,
        input: &CreateProduct,
    ) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products \
                (owner_id, title, description, price, rate_period, deposit, images) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, '[]'::jsonb)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.rate_period)
            .bind(input.deposit.unwrap_or(0))
            .bind(&input.images)
            .fetch_one(executor)
            .await
    }

    /// Find a listing by ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List listings, newest first.
    ///
    /// When `available_only` is `true`, only listings with
    /// `is_available = true` are returned.
    pub async fn list(
        executor: impl PgExecutor<'_>,
        available_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let filter = if available_only {
            "WHERE is_available = true"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM products {filter} \
             ORDER BY created_at DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(executor)
            .await
    }

    /// Patch a listing, returning the updated row, or `None` if it does not
    /// exist.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: DbId,
        patch: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                price = COALESCE($4, price), \
                rate_period = COALESCE($5, rate_period), \
                deposit = COALESCE($6, deposit), \
                images = COALESCE($7, images), \
                is_available = COALESCE($8, is_available), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&patch.title)
            .bind(&patch.description)
            .bind(patch.price)
            .bind(&patch.rate_period)
            .bind(patch.deposit)
            .bind(&patch.images)
            .bind(patch.is_available)
            .fetch_optional(executor)
            .await
    }
}
