// Individual Customer Use Cases

use crate::application::attendance::enqueue_for_attendance;
use crate::application::SaveOutcome;
use crate::domain::validation::{validate_cpf, validate_email, validate_mcc, validate_name};
use crate::domain::{normalize_cpf, AttendanceQueue, IndividualCustomer};
use crate::error::{AppError, Result};
use crate::port::{IndividualCustomerRepository, TimeProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Register / update request for an individual customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndividualRequest {
    pub cpf: String,
    pub mcc: String,
    pub name: String,
    pub email: String,
}

/// Normalize the CPF in place and validate every field
pub fn validate_request(req: &mut IndividualRequest) -> Result<()> {
    req.cpf = normalize_cpf(&req.cpf);
    validate_cpf("cpf", &req.cpf)?;
    validate_mcc(&req.mcc)?;
    validate_name("name", &req.name)?;
    validate_email(&req.email)?;
    Ok(())
}

/// Individual Customer Service
pub struct IndividualCustomerService {
    repo: Arc<dyn IndividualCustomerRepository>,
    queue: Arc<AttendanceQueue>,
    time_provider: Arc<dyn TimeProvider>,
}

impl IndividualCustomerService {
    pub fn new(
        repo: Arc<dyn IndividualCustomerRepository>,
        queue: Arc<AttendanceQueue>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            repo,
            queue,
            time_provider,
        }
    }

    /// Register a new customer and queue them for attendance
    pub async fn register(
        &self,
        mut req: IndividualRequest,
    ) -> Result<SaveOutcome<IndividualCustomer>> {
        validate_request(&mut req)?;

        if self.repo.exists_by_cpf(&req.cpf).await? {
            return Err(AppError::Conflict(format!(
                "Individual customer {} already registered",
                req.cpf
            )));
        }

        let mut customer = IndividualCustomer::new(
            req.cpf,
            req.mcc,
            req.name,
            req.email,
            self.time_provider.now_millis(),
        );
        customer.id = Some(self.repo.insert(&customer).await?);

        let queued = enqueue_for_attendance(&self.queue, &customer.cpf);
        info!(cpf = %customer.cpf, queued, "Individual customer registered");

        Ok(SaveOutcome { customer, queued })
    }

    /// Update an existing customer and queue them for attendance again
    pub async fn update(&self, mut req: IndividualRequest) -> Result<SaveOutcome<IndividualCustomer>> {
        validate_request(&mut req)?;

        let mut customer = self.find_normalized(&req.cpf).await?;
        customer.mcc = req.mcc;
        customer.name = req.name;
        customer.email = req.email;
        customer.updated_at = self.time_provider.now_millis();

        self.repo.update(&customer).await?;

        let queued = enqueue_for_attendance(&self.queue, &customer.cpf);
        info!(cpf = %customer.cpf, queued, "Individual customer updated");

        Ok(SaveOutcome { customer, queued })
    }

    /// Look up a customer by CPF (formatted or not)
    pub async fn find(&self, cpf: &str) -> Result<IndividualCustomer> {
        self.find_normalized(&normalize_cpf(cpf)).await
    }

    /// Delete a customer by CPF, returning the removed record.
    ///
    /// A queued entry for this CPF stays in the attendance queue and is
    /// reported as not found when it reaches the front.
    pub async fn delete(&self, cpf: &str) -> Result<IndividualCustomer> {
        let cpf = normalize_cpf(cpf);
        let customer = self.find_normalized(&cpf).await?;

        if !self.repo.delete_by_cpf(&cpf).await? {
            return Err(not_found(&cpf));
        }

        info!(cpf = %cpf, "Individual customer deleted");
        Ok(customer)
    }

    pub async fn list(&self) -> Result<Vec<IndividualCustomer>> {
        self.repo.list().await
    }

    async fn find_normalized(&self, cpf: &str) -> Result<IndividualCustomer> {
        self.repo
            .find_by_cpf(cpf)
            .await?
            .ok_or_else(|| not_found(cpf))
    }
}

fn not_found(cpf: &str) -> AppError {
    AppError::NotFound(format!("Individual customer {} not found", cpf))
}
