//! Pure domain logic for the lendhub rental marketplace.
//!
//! This crate has zero internal dependencies so the same rules can be used
//! by the repository layer, the API layer, and any future worker or CLI
//! tooling. Everything here is synchronous and side-effect free; callers
//! supply "today" explicitly so the date-based rules are testable.

pub mod cart;
pub mod error;
pub mod money;
pub mod notification;
pub mod pricing;
pub mod rental;
pub mod types;
