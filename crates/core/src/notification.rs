//! Notification type constants and message content builders.
//!
//! Shared by the DB and API layers so the stored `notif_type` strings stay
//! consistent with what the inbox UI filters on.

use crate::money::{format_rupees, Money};

/// A new booking request landed on one of the owner's products.
pub const TYPE_BOOKING_REQUESTED: &str = "booking_requested";

/// The owner approved the borrower's booking.
pub const TYPE_BOOKING_APPROVED: &str = "booking_approved";

/// The owner rejected the borrower's booking.
pub const TYPE_BOOKING_REJECTED: &str = "booking_rejected";

/// A borrower asked to extend a rental past the auto-approve window.
pub const TYPE_EXTENSION_REQUESTED: &str = "extension_requested";

/// The owner approved an extension request.
pub const TYPE_EXTENSION_APPROVED: &str = "extension_approved";

/// The owner rejected an extension request.
pub const TYPE_EXTENSION_REJECTED: &str = "extension_rejected";

/// All valid notification type values.
pub const VALID_TYPES: &[&str] = &[
    TYPE_BOOKING_REQUESTED,
    TYPE_BOOKING_APPROVED,
    TYPE_BOOKING_REJECTED,
    TYPE_EXTENSION_REQUESTED,
    TYPE_EXTENSION_APPROVED,
    TYPE_EXTENSION_REJECTED,
];

pub fn booking_requested(product_title: &str, total: Money) -> String {
    format!(
        "New booking request for \"{product_title}\" ({})",
        format_rupees(total)
    )
}

pub fn booking_approved(product_title: &str) -> String {
    format!("Your booking for \"{product_title}\" was approved")
}

pub fn booking_rejected(product_title: &str) -> String {
    format!("Your booking for \"{product_title}\" was rejected")
}

pub fn extension_requested(product_title: &str, additional_cost: Money) -> String {
    format!(
        "Extension requested for \"{product_title}\" (additional {})",
        format_rupees(additional_cost)
    )
}

pub fn extension_approved(product_title: &str) -> String {
    format!("Your extension for \"{product_title}\" was approved")
}

pub fn extension_rejected(product_title: &str) -> String {
    format!("Your extension for \"{product_title}\" was rejected")
}
