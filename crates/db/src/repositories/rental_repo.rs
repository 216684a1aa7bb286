//! Repository for the `rentals` table.
//!
//! Mutations that move money or dates are version-checked: the UPDATE only
//! applies when the caller's `version` token still matches, and every
//! applied mutation bumps the token. A `None` return from those methods
//! means the row was changed underneath the caller (or the status no longer
//! admits the mutation), which the service layer reports as a conflict.

use sqlx::PgExecutor;

use lendhub_core::money::Money;
use lendhub_core::types::{Date, DbId};

use crate::models::rental::{NewRental, Rental};

/// Column list for `rentals` queries.
const COLUMNS: &str = "id, product_id, borrower_id, start_date, end_date, \
    status, total_amount, deposit_amount, version, created_at, updated_at";

/// Column list qualified with the `r` alias for joined queries.
const PREFIXED_COLUMNS: &str = "r.id, r.product_id, r.borrower_id, r.start_date, \
    r.end_date, r.status, r.total_amount, r.deposit_amount, r.version, \
    r.created_at, r.updated_at";

/// Provides CRUD operations for rental agreements.
pub struct RentalRepo;

impl RentalRepo {
    /// Insert a new rental in `pending` status, returning the created row.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &NewRental,
    ) -> Result<Rental, sqlx::Error> {
        let query = format!(
            "INSERT INTO rentals \
                (product_id, borrower_id, start_date, end_date, total_amount, deposit_amount) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(input.product_id)
            .bind(input.borrower_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.total_amount)
            .bind(input.deposit_amount)
            .fetch_one(executor)
            .await
    }

    /// Find a rental by ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rentals WHERE id = $1");
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List rentals where the user is the borrower, newest first.
    pub async fn list_for_borrower(
        executor: impl PgExecutor<'_>,
        borrower_id: DbId,
    ) -> Result<Vec<Rental>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rentals \
             WHERE borrower_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(borrower_id)
            .fetch_all(executor)
            .await
    }

    /// List rentals of products the user owns, newest first.
    pub async fn list_for_owner(
        executor: impl PgExecutor<'_>,
        owner_id: DbId,
    ) -> Result<Vec<Rental>, sqlx::Error> {
        let query = format!(
            "SELECT {PREFIXED_COLUMNS} FROM rentals r \
             JOIN products p ON p.id = r.product_id \
             WHERE p.owner_id = $1 \
             ORDER BY r.created_at DESC"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(owner_id)
            .fetch_all(executor)
            .await
    }

    /// Move a rental from `from_status` to `to_status`.
    ///
    /// Returns the updated row, or `None` if the rental does not exist or
    /// is no longer in `from_status` (a concurrent decision won).
    pub async fn update_status(
        executor: impl PgExecutor<'_>,
        id: DbId,
        from_status: &str,
        to_status: &str,
    ) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!(
            "UPDATE rentals \
             SET status = $3, version = version + 1, updated_at = NOW() \
             WHERE id = $1 AND status = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .bind(from_status)
            .bind(to_status)
            .fetch_optional(executor)
            .await
    }

    /// Apply an approved extension: push the end date out and add the
    /// extension cost to the running total.
    ///
    /// Version-checked; returns `None` when the token is stale or the
    /// rental left `active` status, in which case nothing was applied.
    pub async fn apply_extension(
        executor: impl PgExecutor<'_>,
        id: DbId,
        version: i32,
        new_end_date: Date,
        additional_cost: Money,
    ) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!(
            "UPDATE rentals \
             SET end_date = $3, total_amount = total_amount + $4, \
                 version = version + 1, updated_at = NOW() \
             WHERE id = $1 AND version = $2 AND status = 'active' \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .bind(version)
            .bind(new_end_date)
            .bind(additional_cost)
            .fetch_optional(executor)
            .await
    }

    /// Count rentals of a product in `pending` or `active` status whose
    /// booked range intersects `[start_date, end_date]`.
    pub async fn overlapping_count(
        executor: impl PgExecutor<'_>,
        product_id: DbId,
        start_date: Date,
        end_date: Date,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM rentals \
             WHERE product_id = $1 \
               AND status IN ('pending', 'active') \
               AND start_date <= $3 \
               AND end_date >= $2",
        )
        .bind(product_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_one(executor)
        .await?;
        Ok(count.unwrap_or(0))
    }

    /// Complete every `active` rental whose end date is strictly before
    /// `today`. Returns the number of rentals completed.
    pub async fn complete_lapsed(
        executor: impl PgExecutor<'_>,
        today: Date,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE rentals \
             SET status = 'completed', version = version + 1, updated_at = NOW() \
             WHERE status = 'active' AND end_date < $1",
        )
        .bind(today)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }
}
