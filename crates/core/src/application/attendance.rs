// Attendance Use Cases
//
// Serving customers in the order they were registered or updated.

use crate::domain::{AttendanceQueue, Customer, DocumentKind};
use crate::error::{AppError, Result};
use crate::port::{BusinessCustomerRepository, IndividualCustomerRepository};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Put a customer's document at the back of the attendance queue.
///
/// A full queue is not an error for the caller; it is logged and reported
/// through the return value.
pub fn enqueue_for_attendance(queue: &AttendanceQueue, identifier: &str) -> bool {
    let queued = queue.enqueue(identifier.to_string());
    if queued {
        debug!(identifier = %identifier, size = queue.len(), "Customer queued for attendance");
    } else {
        warn!(
            identifier = %identifier,
            capacity = queue.capacity(),
            "Attendance queue full, customer not queued"
        );
    }
    queued
}

/// How a dequeued identifier was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NextOutcome {
    Served,
    /// Well-formed identifier whose customer no longer exists
    CustomerNotFound,
    /// Neither an 11-digit CPF nor a 14-digit CNPJ
    InvalidIdentifier,
    /// Repository error while loading the customer; the identifier has
    /// already left the queue
    LookupFailed,
}

/// The customer taken from the front of the queue
#[derive(Debug, Clone, Serialize)]
pub struct NextInLine {
    pub identifier: String,
    pub kind: Option<DocumentKind>,
    pub customer: Option<Customer>,
    pub outcome: NextOutcome,
}

/// Point-in-time view of the queue contents
#[derive(Debug, Clone, Serialize)]
pub struct QueueSnapshot {
    pub entries: Vec<String>,
    pub size: usize,
    pub capacity: usize,
}

/// Attendance Service
pub struct AttendanceService {
    queue: Arc<AttendanceQueue>,
    individuals: Arc<dyn IndividualCustomerRepository>,
    businesses: Arc<dyn BusinessCustomerRepository>,
}

impl AttendanceService {
    pub fn new(
        queue: Arc<AttendanceQueue>,
        individuals: Arc<dyn IndividualCustomerRepository>,
        businesses: Arc<dyn BusinessCustomerRepository>,
    ) -> Self {
        Self {
            queue,
            individuals,
            businesses,
        }
    }

    /// Take the next customer off the queue and load their record.
    ///
    /// The identifier's length selects the lookup: 11 digits is an
    /// individual, 14 digits is a business. An empty queue is `NotFound`.
    pub async fn next(&self) -> Result<NextInLine> {
        let identifier = self
            .queue
            .dequeue()
            .ok_or_else(|| AppError::NotFound("Attendance queue is empty".to_string()))?;

        let kind = DocumentKind::classify(&identifier);
        let lookup = match kind {
            Some(DocumentKind::Cpf) => self
                .individuals
                .find_by_cpf(&identifier)
                .await
                .map(|c| c.map(Customer::Individual)),
            Some(DocumentKind::Cnpj) => self
                .businesses
                .find_by_cnpj(&identifier)
                .await
                .map(|c| c.map(Customer::Business)),
            None => Ok(None),
        };

        // Lookup errors become an outcome so the dequeued identifier is reported
        let (customer, outcome) = match (kind, lookup) {
            (None, _) => (None, NextOutcome::InvalidIdentifier),
            (Some(_), Err(e)) => {
                error!(identifier = %identifier, error = %e, "Customer lookup failed after dequeue");
                (None, NextOutcome::LookupFailed)
            }
            (Some(_), Ok(None)) => (None, NextOutcome::CustomerNotFound),
            (Some(_), Ok(Some(customer))) => (Some(customer), NextOutcome::Served),
        };

        match outcome {
            NextOutcome::Served => {
                info!(identifier = %identifier, remaining = self.queue.len(), "Customer called for attendance")
            }
            NextOutcome::LookupFailed => {}
            _ => {
                warn!(identifier = %identifier, outcome = ?outcome, "Dequeued identifier could not be served")
            }
        }

        Ok(NextInLine {
            identifier,
            kind,
            customer,
            outcome,
        })
    }

    /// Current queue contents, oldest first
    pub fn snapshot(&self) -> QueueSnapshot {
        let entries = self.queue.snapshot();
        QueueSnapshot {
            size: entries.len(),
            capacity: self.queue.capacity(),
            entries,
        }
    }
}
