//! Cart and checkout totals.
//!
//! Cart pricing is deliberately distinct from rental pricing: a cart line is
//! `price * quantity` with no period proration. Proration only happens when
//! a rental is created ([`crate::pricing::rental_cost`]). The two must not
//! be unified.

use crate::money::{rupees, Money};

/// Flat delivery fee added at checkout, in paise.
pub const DELIVERY_FEE: Money = rupees(99);

/// One cart line: a product's unit price and the quantity requested.
#[derive(Debug, Clone, Copy)]
pub struct CartLine {
    pub price: Money,
    pub quantity: i64,
}

/// Sum of `price * quantity` over all lines.
pub fn cart_total(lines: &[CartLine]) -> Money {
    lines.iter().map(|line| line.price * line.quantity).sum()
}

/// Cart total plus the flat delivery fee.
pub fn checkout_total(cart_total: Money) -> Money {
    cart_total + DELIVERY_FEE
}
