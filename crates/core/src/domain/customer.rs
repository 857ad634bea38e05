// Customer Domain Model

use serde::{Deserialize, Serialize};

/// Database-assigned customer ID
pub type CustomerId = i64;

/// Individual customer (pessoa física), keyed by CPF
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualCustomer {
    pub id: Option<CustomerId>,
    pub cpf: String,
    pub mcc: String,
    pub name: String,
    pub email: String,

    pub created_at: i64, // epoch ms
    pub updated_at: i64, // epoch ms
}

impl IndividualCustomer {
    /// Create a not-yet-persisted customer
    ///
    /// `cpf` must already be normalized.
    pub fn new(
        cpf: impl Into<String>,
        mcc: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        now_millis: i64,
    ) -> Self {
        Self {
            id: None,
            cpf: cpf.into(),
            mcc: mcc.into(),
            name: name.into(),
            email: email.into(),
            created_at: now_millis,
            updated_at: now_millis,
        }
    }
}

/// Business customer (pessoa jurídica), keyed by CNPJ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessCustomer {
    pub id: Option<CustomerId>,
    pub cnpj: String,
    pub corporate_name: String,
    pub mcc: String,

    // Establishment contact
    pub contact_cpf: String,
    pub contact_name: String,
    pub email: String,

    pub created_at: i64, // epoch ms
    pub updated_at: i64, // epoch ms
}

impl BusinessCustomer {
    /// Create a not-yet-persisted customer
    ///
    /// `cnpj` and `contact_cpf` must already be normalized.
    pub fn new(
        cnpj: impl Into<String>,
        corporate_name: impl Into<String>,
        mcc: impl Into<String>,
        contact_cpf: impl Into<String>,
        contact_name: impl Into<String>,
        email: impl Into<String>,
        now_millis: i64,
    ) -> Self {
        Self {
            id: None,
            cnpj: cnpj.into(),
            corporate_name: corporate_name.into(),
            mcc: mcc.into(),
            contact_cpf: contact_cpf.into(),
            contact_name: contact_name.into(),
            email: email.into(),
            created_at: now_millis,
            updated_at: now_millis,
        }
    }
}

/// A customer of either type, as resolved from the attendance queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Customer {
    Individual(IndividualCustomer),
    Business(BusinessCustomer),
}

impl Customer {
    /// The document number this customer is queued under
    pub fn document(&self) -> &str {
        match self {
            Customer::Individual(c) => &c.cpf,
            Customer::Business(c) => &c.cnpj,
        }
    }
}
