// Customer Repository Ports (Interfaces)

use crate::domain::{BusinessCustomer, IndividualCustomer};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for individual (CPF) customers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IndividualCustomerRepository: Send + Sync {
    /// Insert a new customer, returning the assigned ID
    async fn insert(&self, customer: &IndividualCustomer) -> Result<i64>;

    /// Overwrite the mutable fields of the customer with the same CPF
    async fn update(&self, customer: &IndividualCustomer) -> Result<()>;

    /// Find customer by normalized CPF
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<IndividualCustomer>>;

    async fn exists_by_cpf(&self, cpf: &str) -> Result<bool>;

    /// Delete by CPF, returns whether a row was removed
    async fn delete_by_cpf(&self, cpf: &str) -> Result<bool>;

    /// All customers in insertion order
    async fn list(&self) -> Result<Vec<IndividualCustomer>>;
}

/// Repository interface for business (CNPJ) customers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusinessCustomerRepository: Send + Sync {
    /// Insert a new customer, returning the assigned ID
    async fn insert(&self, customer: &BusinessCustomer) -> Result<i64>;

    /// Overwrite the mutable fields of the customer with the same CNPJ
    async fn update(&self, customer: &BusinessCustomer) -> Result<()>;

    /// Find customer by normalized CNPJ
    async fn find_by_cnpj(&self, cnpj: &str) -> Result<Option<BusinessCustomer>>;

    async fn exists_by_cnpj(&self, cnpj: &str) -> Result<bool>;

    /// Delete by CNPJ, returns whether a row was removed
    async fn delete_by_cnpj(&self, cnpj: &str) -> Result<bool>;

    /// All customers in insertion order
    async fn list(&self) -> Result<Vec<BusinessCustomer>>;
}
