// Application Layer - Use Cases and Business Logic

pub mod attendance;
pub mod business;
pub mod individual;

use serde::Serialize;

// Re-exports
pub use attendance::{AttendanceService, NextInLine, NextOutcome, QueueSnapshot};
pub use business::{BusinessCustomerService, BusinessRequest};
pub use individual::{IndividualCustomerService, IndividualRequest};

/// Result of a register/update use case
#[derive(Debug, Clone, Serialize)]
pub struct SaveOutcome<T> {
    pub customer: T,
    /// False when the attendance queue was full and the customer was not queued
    pub queued: bool,
}
