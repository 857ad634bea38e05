// Business Customer Use Cases

use crate::application::attendance::enqueue_for_attendance;
use crate::application::SaveOutcome;
use crate::domain::validation::{
    validate_cnpj, validate_cpf, validate_email, validate_mcc, validate_name,
};
use crate::domain::{normalize_cnpj, normalize_cpf, AttendanceQueue, BusinessCustomer};
use crate::error::{AppError, Result};
use crate::port::{BusinessCustomerRepository, TimeProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Register / update request for a business customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessRequest {
    pub cnpj: String,
    pub corporate_name: String,
    pub mcc: String,
    /// Establishment contact CPF
    pub cpf: String,
    /// Establishment contact name
    pub name: String,
    pub email: String,
}

/// Normalize both documents in place and validate every field
pub fn validate_request(req: &mut BusinessRequest) -> Result<()> {
    req.cnpj = normalize_cnpj(&req.cnpj);
    req.cpf = normalize_cpf(&req.cpf);

    validate_cnpj(&req.cnpj)?;
    validate_name("corporate_name", &req.corporate_name)?;
    validate_mcc(&req.mcc)?;
    validate_cpf("contact cpf", &req.cpf)?;
    validate_name("name", &req.name)?;
    validate_email(&req.email)?;
    Ok(())
}

/// Business Customer Service
pub struct BusinessCustomerService {
    repo: Arc<dyn BusinessCustomerRepository>,
    queue: Arc<AttendanceQueue>,
    time_provider: Arc<dyn TimeProvider>,
}

impl BusinessCustomerService {
    pub fn new(
        repo: Arc<dyn BusinessCustomerRepository>,
        queue: Arc<AttendanceQueue>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            repo,
            queue,
            time_provider,
        }
    }

    /// Register a new business and queue it for attendance
    pub async fn register(&self, mut req: BusinessRequest) -> Result<SaveOutcome<BusinessCustomer>> {
        validate_request(&mut req)?;

        if self.repo.exists_by_cnpj(&req.cnpj).await? {
            return Err(AppError::Conflict(format!(
                "Business customer {} already registered",
                req.cnpj
            )));
        }

        let mut customer = BusinessCustomer::new(
            req.cnpj,
            req.corporate_name,
            req.mcc,
            req.cpf,
            req.name,
            req.email,
            self.time_provider.now_millis(),
        );
        customer.id = Some(self.repo.insert(&customer).await?);

        let queued = enqueue_for_attendance(&self.queue, &customer.cnpj);
        info!(cnpj = %customer.cnpj, queued, "Business customer registered");

        Ok(SaveOutcome { customer, queued })
    }

    /// Update an existing business and queue it for attendance again
    pub async fn update(&self, mut req: BusinessRequest) -> Result<SaveOutcome<BusinessCustomer>> {
        validate_request(&mut req)?;

        let mut customer = self.find_normalized(&req.cnpj).await?;
        customer.corporate_name = req.corporate_name;
        customer.mcc = req.mcc;
        customer.contact_cpf = req.cpf;
        customer.contact_name = req.name;
        customer.email = req.email;
        customer.updated_at = self.time_provider.now_millis();

        self.repo.update(&customer).await?;

        let queued = enqueue_for_attendance(&self.queue, &customer.cnpj);
        info!(cnpj = %customer.cnpj, queued, "Business customer updated");

        Ok(SaveOutcome { customer, queued })
    }

    /// Look up a business by CNPJ (formatted or not)
    pub async fn find(&self, cnpj: &str) -> Result<BusinessCustomer> {
        self.find_normalized(&normalize_cnpj(cnpj)).await
    }

    /// Delete a business by CNPJ, returning the removed record
    pub async fn delete(&self, cnpj: &str) -> Result<BusinessCustomer> {
        let cnpj = normalize_cnpj(cnpj);
        let customer = self.find_normalized(&cnpj).await?;

        if !self.repo.delete_by_cnpj(&cnpj).await? {
            return Err(not_found(&cnpj));
        }

        info!(cnpj = %cnpj, "Business customer deleted");
        Ok(customer)
    }

    pub async fn list(&self) -> Result<Vec<BusinessCustomer>> {
        self.repo.list().await
    }

    async fn find_normalized(&self, cnpj: &str) -> Result<BusinessCustomer> {
        self.repo
            .find_by_cnpj(cnpj)
            .await?
            .ok_or_else(|| not_found(cnpj))
    }
}

fn not_found(cnpj: &str) -> AppError {
    AppError::NotFound(format!("Business customer {} not found", cnpj))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::customer_repository::MockBusinessCustomerRepository;
    use crate::port::time_provider::FixedTimeProvider;

    fn request(cnpj: &str) -> BusinessRequest {
        BusinessRequest {
            cnpj: cnpj.to_string(),
            corporate_name: "Padaria Pao Quente Ltda".to_string(),
            mcc: "5462".to_string(),
            cpf: "123.456.789-01".to_string(),
            name: "Joao Souza".to_string(),
            email: "contato@padaria.com".to_string(),
        }
    }

    fn service(
        repo: MockBusinessCustomerRepository,
        queue: Arc<AttendanceQueue>,
    ) -> BusinessCustomerService {
        BusinessCustomerService::new(Arc::new(repo), queue, Arc::new(FixedTimeProvider(5000)))
    }

    #[test]
    fn test_validate_request_normalizes_documents() {
        let mut req = request("345678000199");
        assert!(validate_request(&mut req).is_ok());
        assert_eq!(req.cnpj, "00345678000199");
        assert_eq!(req.cpf, "12345678901");
    }

    #[test]
    fn test_validate_request_rejects_long_corporate_name() {
        let mut req = request("12345678000199");
        req.corporate_name = "x".repeat(51);
        let err = validate_request(&mut req).unwrap_err();
        assert!(err.to_string().contains("corporate_name"));
    }

    #[tokio::test]
    async fn test_register_inserts_and_enqueues() {
        let mut repo = MockBusinessCustomerRepository::new();
        repo.expect_exists_by_cnpj()
            .times(1)
            .returning(|_: &str| Ok(false));
        repo.expect_insert()
            .times(1)
            .returning(|customer: &BusinessCustomer| {
                assert_eq!(customer.cnpj, "12345678000199");
                assert_eq!(customer.contact_cpf, "12345678901");
                Ok(3)
            });

        let queue = Arc::new(AttendanceQueue::new(10).unwrap());
        let svc = service(repo, queue.clone());

        let outcome = svc.register(request("12.345.678/0001-99")).await.unwrap();
        assert!(outcome.queued);
        assert_eq!(outcome.customer.id, Some(3));
        assert_eq!(queue.snapshot(), vec!["12345678000199"]);
    }

    #[tokio::test]
    async fn test_register_duplicate_is_conflict() {
        let mut repo = MockBusinessCustomerRepository::new();
        repo.expect_exists_by_cnpj().returning(|_: &str| Ok(true));
        repo.expect_insert().never();

        let queue = Arc::new(AttendanceQueue::new(10).unwrap());
        let svc = service(repo, queue.clone());

        let err = svc.register(request("12345678000199")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_and_enqueues() {
        let mut repo = MockBusinessCustomerRepository::new();
        repo.expect_find_by_cnpj().returning(|cnpj: &str| {
            let mut customer = BusinessCustomer::new(
                cnpj,
                "Old Name",
                "1111",
                "00000000001",
                "Old Contact",
                "old@mail.com",
                1000,
            );
            customer.id = Some(9);
            Ok(Some(customer))
        });
        repo.expect_update()
            .times(1)
            .returning(|_: &BusinessCustomer| Ok(()));

        let queue = Arc::new(AttendanceQueue::new(10).unwrap());
        let svc = service(repo, queue.clone());

        let outcome = svc.update(request("12345678000199")).await.unwrap();
        assert_eq!(outcome.customer.id, Some(9));
        assert_eq!(outcome.customer.corporate_name, "Padaria Pao Quente Ltda");
        assert_eq!(outcome.customer.contact_cpf, "12345678901");
        assert_eq!(outcome.customer.updated_at, 5000);
        assert_eq!(queue.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut repo = MockBusinessCustomerRepository::new();
        repo.expect_find_by_cnpj().returning(|_: &str| Ok(None));
        repo.expect_delete_by_cnpj().never();

        let svc = service(repo, Arc::new(AttendanceQueue::default()));

        let err = svc.delete("12345678000199").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
