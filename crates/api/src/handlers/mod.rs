//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers stay thin: they parse the request, call the rental service or a
//! repository in `lendhub_db`, and map errors via [`crate::error::AppError`].

pub mod checkout;
pub mod extension;
pub mod notification;
pub mod product;
pub mod rental;
