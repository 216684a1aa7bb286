//! Integer money arithmetic in paise.
//!
//! All monetary amounts in the system are stored and computed as integer
//! minor units (paise) to avoid floating-point drift. The pricing rules
//! round up to the whole rupee, so every derived amount is a multiple of
//! [`PAISE_PER_RUPEE`].

/// Monetary amounts in paise (minor units).
pub type Money = i64;

/// Minor units per rupee.
pub const PAISE_PER_RUPEE: i64 = 100;

/// Convert a whole-rupee amount into paise.
pub const fn rupees(amount: i64) -> Money {
    amount * PAISE_PER_RUPEE
}

/// Divide `numerator` paise by `divisor`, rounding up to the next whole
/// rupee.
///
/// This is the system's visible rounding rule: a renter never underpays by
/// a fraction, and displayed amounts stay in whole rupees.
pub fn ceil_to_rupee_div(numerator: i64, divisor: i64) -> Money {
    debug_assert!(divisor > 0, "divisor must be positive");
    let paise_per_unit = divisor * PAISE_PER_RUPEE;
    let whole_rupees = (numerator + paise_per_unit - 1) / paise_per_unit;
    whole_rupees * PAISE_PER_RUPEE
}

/// Render a paise amount as a display string, e.g. `₹1999.00`.
pub fn format_rupees(amount: Money) -> String {
    format!(
        "₹{}.{:02}",
        amount / PAISE_PER_RUPEE,
        (amount % PAISE_PER_RUPEE).abs()
    )
}
