// Domain Layer - Pure business logic and entities

pub mod customer;
pub mod document;
pub mod error;
pub mod queue;
pub mod validation;

// Re-exports
pub use customer::{BusinessCustomer, Customer, IndividualCustomer};
pub use document::{normalize_cnpj, normalize_cpf, DocumentKind};
pub use error::DomainError;
pub use queue::{AttendanceQueue, BoundedQueue, DEFAULT_QUEUE_CAPACITY};
