// Port Layer - Interfaces for external dependencies

pub mod customer_repository;
pub mod time_provider;

// Re-exports
pub use customer_repository::{BusinessCustomerRepository, IndividualCustomerRepository};
pub use time_provider::TimeProvider;
