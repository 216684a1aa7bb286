//! The rental lifecycle service.
//!
//! Owns every state transition of a rental (create, booking decision,
//! extension, completion) and the extension-request workflow. All
//! operations take the acting user's id explicitly and verify the acting
//! identity against the actual owning relationship (borrower of the rental,
//! owner of the underlying product) before touching anything; a
//! client-supplied role is never trusted.
//!
//! Each mutation runs inside a single transaction so a transition commits
//! fully (status + amounts together) or not at all. Notification rows are
//! written after commit and are best-effort: a failed write is logged and
//! never rolls back the transition.

use chrono::Utc;

use lendhub_core::error::CoreError;
use lendhub_core::notification as notif;
use lendhub_core::pricing::{
    evaluate_extension, rental_cost, span_days, ExtensionRoute, RatePeriod,
};
use lendhub_core::rental::{validate_transition, RentalStatus};
use lendhub_core::types::{Date, DbId};

use lendhub_db::models::extension::{
    ExtensionRequest, NewExtensionRequest, EXTENSION_APPROVED, EXTENSION_PENDING,
    EXTENSION_REJECTED,
};
use lendhub_db::models::product::Product;
use lendhub_db::models::rental::{BookRentalRequest, NewRental, Rental};
use lendhub_db::repositories::{ExtensionRepo, NotificationRepo, ProductRepo, RentalRepo};
use lendhub_db::DbPool;

use crate::error::{AppError, AppResult};

/// An owner's verdict on a pending booking or extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

/// Result of a borrower's extension request: applied immediately, or
/// recorded for the owner to decide.
#[derive(Debug)]
pub enum ExtensionOutcome {
    Applied(Rental),
    Requested(ExtensionRequest),
}

/// Which side of a rental the caller is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalRole {
    Borrower,
    Owner,
}

/// Today as a calendar date. Date-based rules always flow through here so
/// the pure functions in `lendhub_core` receive "today" explicitly.
pub fn today() -> Date {
    Utc::now().date_naive()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Book a product for `[start_date, end_date]`, creating a `pending`
/// rental.
///
/// The total is priced with the product's rate over the span, rounded up to
/// the rupee, and the deposit is snapshotted from the product. A date range
/// intersecting an existing `pending`/`active` rental of the same product
/// is rejected.
pub async fn create_rental(
    pool: &DbPool,
    borrower_id: DbId,
    input: &BookRentalRequest,
) -> AppResult<Rental> {
    if input.end_date <= input.start_date {
        return Err(CoreError::Validation(
            "End date must be after the start date".to_string(),
        )
        .into());
    }

    let mut tx = pool.begin().await?;

    let product = ProductRepo::find_by_id(&mut *tx, input.product_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Product",
            id: input.product_id,
        })?;

    if !product.is_available {
        return Err(CoreError::Validation(
            "Product is not available for booking".to_string(),
        )
        .into());
    }
    if product.owner_id == borrower_id {
        return Err(CoreError::Validation(
            "You cannot rent your own product".to_string(),
        )
        .into());
    }

    let overlapping = RentalRepo::overlapping_count(
        &mut *tx,
        product.id,
        input.start_date,
        input.end_date,
    )
    .await?;
    if overlapping > 0 {
        return Err(CoreError::Conflict(
            "Product is already booked for an overlapping period".to_string(),
        )
        .into());
    }

    let period = RatePeriod::parse(&product.rate_period)?;
    let days = span_days(input.start_date, input.end_date);
    let total_amount = rental_cost(product.price, period, days);

    let rental = RentalRepo::create(
        &mut *tx,
        &NewRental {
            product_id: product.id,
            borrower_id,
            start_date: input.start_date,
            end_date: input.end_date,
            total_amount,
            deposit_amount: product.deposit,
        },
    )
    .await?;

    tx.commit().await?;

    tracing::info!(
        rental_id = rental.id,
        product_id = product.id,
        borrower_id,
        total_amount,
        "Rental created"
    );

    notify(
        pool,
        product.owner_id,
        notif::TYPE_BOOKING_REQUESTED,
        notif::booking_requested(&product.title, total_amount),
        rental.id,
    )
    .await;

    Ok(rental)
}

// ---------------------------------------------------------------------------
// Booking decision
// ---------------------------------------------------------------------------

/// Approve or reject a `pending` booking. Owner only.
pub async fn decide_booking(
    pool: &DbPool,
    rental_id: DbId,
    acting_user_id: DbId,
    decision: Decision,
) -> AppResult<Rental> {
    let mut tx = pool.begin().await?;

    let (rental, product) = load_rental_with_product(&mut tx, rental_id).await?;
    ensure_owner(&product, acting_user_id)?;

    // Booking decisions only apply to pending rentals; an active rental's
    // cancellation path is not an owner "reject".
    let status = RentalStatus::parse(&rental.status)?;
    if status != RentalStatus::Pending {
        return Err(CoreError::InvalidState(format!(
            "Only pending bookings can be decided (rental is {status})"
        ))
        .into());
    }
    let target = match decision {
        Decision::Approve => RentalStatus::Active,
        Decision::Reject => RentalStatus::Cancelled,
    };
    validate_transition(status, target)?;

    let updated = RentalRepo::update_status(
        &mut *tx,
        rental.id,
        status.as_str(),
        target.as_str(),
    )
    .await?
    .ok_or_else(|| {
        CoreError::Conflict("Rental was decided concurrently".to_string())
    })?;

    tx.commit().await?;

    tracing::info!(
        rental_id,
        acting_user_id,
        decision = ?decision,
        status = %updated.status,
        "Booking decided"
    );

    let (notif_type, content) = match decision {
        Decision::Approve => (
            notif::TYPE_BOOKING_APPROVED,
            notif::booking_approved(&product.title),
        ),
        Decision::Reject => (
            notif::TYPE_BOOKING_REJECTED,
            notif::booking_rejected(&product.title),
        ),
    };
    notify(pool, rental.borrower_id, notif_type, content, rental.id).await;

    Ok(updated)
}

// ---------------------------------------------------------------------------
// Extension
// ---------------------------------------------------------------------------

/// Ask to move an `active` rental's end date out to `new_end_date`.
/// Borrower only.
///
/// Inside the auto-approve window the rental is updated immediately (the
/// synchronous response is the confirmation; no notification is written).
/// Outside it, a pending [`ExtensionRequest`] carrying the precomputed
/// additional cost is recorded for the owner, and the rental is untouched.
pub async fn request_extension(
    pool: &DbPool,
    rental_id: DbId,
    acting_user_id: DbId,
    new_end_date: Date,
    today: Date,
) -> AppResult<ExtensionOutcome> {
    let mut tx = pool.begin().await?;

    let (rental, product) = load_rental_with_product(&mut tx, rental_id).await?;
    if rental.borrower_id != acting_user_id {
        return Err(CoreError::Unauthorized(
            "Only the borrower may extend this rental".to_string(),
        )
        .into());
    }

    let status = RentalStatus::parse(&rental.status)?;
    if status != RentalStatus::Active {
        return Err(CoreError::InvalidState(format!(
            "Only active rentals can be extended (rental is {status})"
        ))
        .into());
    }

    let period = RatePeriod::parse(&product.rate_period)?;
    let eval = evaluate_extension(today, rental.end_date, new_end_date, product.price, period)?;

    match eval.route {
        ExtensionRoute::AutoApprove => {
            let updated = RentalRepo::apply_extension(
                &mut *tx,
                rental.id,
                rental.version,
                new_end_date,
                eval.additional_cost,
            )
            .await?
            .ok_or_else(|| {
                CoreError::Conflict("Rental was modified concurrently".to_string())
            })?;

            tx.commit().await?;

            tracing::info!(
                rental_id,
                acting_user_id,
                additional_days = eval.additional_days,
                additional_cost = eval.additional_cost,
                "Extension auto-approved"
            );

            Ok(ExtensionOutcome::Applied(updated))
        }
        ExtensionRoute::RequiresOwnerApproval => {
            let request = ExtensionRepo::create(
                &mut *tx,
                &NewExtensionRequest {
                    rental_id: rental.id,
                    requested_end_date: new_end_date,
                    additional_cost: eval.additional_cost,
                },
            )
            .await?;

            tx.commit().await?;

            tracing::info!(
                rental_id,
                acting_user_id,
                extension_id = request.id,
                additional_cost = eval.additional_cost,
                "Extension recorded for owner approval"
            );

            notify(
                pool,
                product.owner_id,
                notif::TYPE_EXTENSION_REQUESTED,
                notif::extension_requested(&product.title, eval.additional_cost),
                rental.id,
            )
            .await;

            Ok(ExtensionOutcome::Requested(request))
        }
    }
}

/// Approve or reject a pending extension request. Owner only.
///
/// Approval applies exactly the update auto-approval would have performed,
/// using the cost recorded at request time; rejection leaves the rental
/// untouched.
pub async fn decide_extension(
    pool: &DbPool,
    extension_id: DbId,
    acting_user_id: DbId,
    decision: Decision,
) -> AppResult<Rental> {
    let mut tx = pool.begin().await?;

    let extension = ExtensionRepo::find_by_id(&mut *tx, extension_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ExtensionRequest",
            id: extension_id,
        })?;

    let (rental, product) = load_rental_with_product(&mut tx, extension.rental_id).await?;
    ensure_owner(&product, acting_user_id)?;

    if extension.status != EXTENSION_PENDING {
        return Err(CoreError::InvalidState(format!(
            "Extension request is already {}",
            extension.status
        ))
        .into());
    }

    let updated = match decision {
        Decision::Approve => {
            let status = RentalStatus::parse(&rental.status)?;
            if status != RentalStatus::Active {
                return Err(CoreError::InvalidState(format!(
                    "Rental is no longer active (rental is {status})"
                ))
                .into());
            }

            let updated = RentalRepo::apply_extension(
                &mut *tx,
                rental.id,
                rental.version,
                extension.requested_end_date,
                extension.additional_cost,
            )
            .await?
            .ok_or_else(|| {
                CoreError::Conflict("Rental was modified concurrently".to_string())
            })?;

            ExtensionRepo::decide(&mut *tx, extension.id, EXTENSION_APPROVED)
                .await?
                .ok_or_else(|| {
                    CoreError::Conflict("Extension was decided concurrently".to_string())
                })?;

            updated
        }
        Decision::Reject => {
            ExtensionRepo::decide(&mut *tx, extension.id, EXTENSION_REJECTED)
                .await?
                .ok_or_else(|| {
                    CoreError::Conflict("Extension was decided concurrently".to_string())
                })?;

            rental
        }
    };

    tx.commit().await?;

    tracing::info!(
        extension_id,
        rental_id = updated.id,
        acting_user_id,
        decision = ?decision,
        "Extension decided"
    );

    let (notif_type, content) = match decision {
        Decision::Approve => (
            notif::TYPE_EXTENSION_APPROVED,
            notif::extension_approved(&product.title),
        ),
        Decision::Reject => (
            notif::TYPE_EXTENSION_REJECTED,
            notif::extension_rejected(&product.title),
        ),
    };
    notify(pool, updated.borrower_id, notif_type, content, updated.id).await;

    Ok(updated)
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// Mark an `active` rental `completed`. Owner only.
///
/// Completing an already-completed rental is an idempotent no-op, so
/// out-of-band completion (the background sweep, a retried request) never
/// turns into an error.
pub async fn complete_rental(
    pool: &DbPool,
    rental_id: DbId,
    acting_user_id: DbId,
) -> AppResult<Rental> {
    let mut tx = pool.begin().await?;

    let (rental, product) = load_rental_with_product(&mut tx, rental_id).await?;
    ensure_owner(&product, acting_user_id)?;

    let status = RentalStatus::parse(&rental.status)?;
    if status == RentalStatus::Completed {
        return Ok(rental);
    }
    validate_transition(status, RentalStatus::Completed)?;

    let updated = RentalRepo::update_status(
        &mut *tx,
        rental.id,
        status.as_str(),
        RentalStatus::Completed.as_str(),
    )
    .await?
    .ok_or_else(|| {
        CoreError::Conflict("Rental was decided concurrently".to_string())
    })?;

    tx.commit().await?;

    tracing::info!(rental_id, acting_user_id, "Rental completed");

    Ok(updated)
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// Fetch a rental visible to the acting user (its borrower or the owner of
/// the underlying product).
pub async fn get_rental(
    pool: &DbPool,
    rental_id: DbId,
    acting_user_id: DbId,
) -> AppResult<Rental> {
    let rental = RentalRepo::find_by_id(pool, rental_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Rental",
            id: rental_id,
        })?;

    let product = ProductRepo::find_by_id(pool, rental.product_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Product",
            id: rental.product_id,
        })?;

    if rental.borrower_id != acting_user_id && product.owner_id != acting_user_id {
        return Err(CoreError::Unauthorized(
            "Only the borrower or the product owner may view this rental".to_string(),
        )
        .into());
    }

    Ok(rental)
}

/// List the acting user's rentals from either side of the marketplace.
pub async fn list_rentals(
    pool: &DbPool,
    acting_user_id: DbId,
    role: RentalRole,
) -> AppResult<Vec<Rental>> {
    let rentals = match role {
        RentalRole::Borrower => RentalRepo::list_for_borrower(pool, acting_user_id).await?,
        RentalRole::Owner => RentalRepo::list_for_owner(pool, acting_user_id).await?,
    };
    Ok(rentals)
}

/// List a rental's extension requests, visible to borrower and owner only.
pub async fn list_extensions(
    pool: &DbPool,
    rental_id: DbId,
    acting_user_id: DbId,
) -> AppResult<Vec<ExtensionRequest>> {
    // Re-uses the visibility check.
    let rental = get_rental(pool, rental_id, acting_user_id).await?;
    Ok(ExtensionRepo::list_for_rental(pool, rental.id).await?)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a rental and its product inside the current transaction.
async fn load_rental_with_product(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    rental_id: DbId,
) -> AppResult<(Rental, Product)> {
    let rental = RentalRepo::find_by_id(&mut **tx, rental_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Rental",
            id: rental_id,
        })?;

    let product = ProductRepo::find_by_id(&mut **tx, rental.product_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Product",
            id: rental.product_id,
        })?;

    Ok((rental, product))
}

/// Fail with `Unauthorized` unless the acting user owns the product.
fn ensure_owner(product: &Product, acting_user_id: DbId) -> Result<(), AppError> {
    if product.owner_id != acting_user_id {
        return Err(CoreError::Unauthorized(
            "Only the product owner may perform this action".to_string(),
        )
        .into());
    }
    Ok(())
}

/// Write a notification row, logging (but swallowing) failures: the primary
/// transition already committed and must stand.
async fn notify(
    pool: &DbPool,
    user_id: DbId,
    notif_type: &str,
    content: String,
    rental_id: DbId,
) {
    if let Err(e) =
        NotificationRepo::create(pool, user_id, notif_type, &content, Some(rental_id)).await
    {
        tracing::warn!(
            error = %e,
            user_id,
            notif_type,
            rental_id,
            "Failed to write notification"
        );
    }
}
