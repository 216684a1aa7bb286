//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods take `impl PgExecutor` so the same query runs against the pool
//! or inside a transaction (`&mut *tx`); every method is a single SQL
//! statement, so atomicity is the caller's concern.

pub mod extension_repo;
pub mod notification_repo;
pub mod product_repo;
pub mod rental_repo;
pub mod user_repo;

pub use extension_repo::ExtensionRepo;
pub use notification_repo::NotificationRepo;
pub use product_repo::ProductRepo;
pub use rental_repo::RentalRepo;
pub use user_repo::UserRepo;
