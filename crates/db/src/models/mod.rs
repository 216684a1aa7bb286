//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs for the operations that touch the table

pub mod extension;
pub mod notification;
pub mod product;
pub mod rental;
pub mod user;
