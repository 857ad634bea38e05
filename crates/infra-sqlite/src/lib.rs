// Prereg Infrastructure - SQLite Adapter
// Implements: IndividualCustomerRepository, BusinessCustomerRepository

mod business_repository;
mod connection;
mod error;
mod individual_repository;
mod migration;

pub use business_repository::SqliteBusinessRepository;
pub use connection::create_pool;
pub use individual_repository::SqliteIndividualRepository;
pub use migration::{current_version, run_migrations};

// Note: sqlx::Error conversion is handled by wrapping in helper functions
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
