//! SDK Request/Response Types
//!
//! Mirrors the JSON-RPC types from api-rpc crate.

use serde::{Deserialize, Serialize};

/// Register / update parameters for an individual customer
#[derive(Debug, Clone, Serialize)]
pub struct IndividualParams {
    pub cpf: String,
    pub mcc: String,
    pub name: String,
    pub email: String,
}

/// Register / update parameters for a business customer
#[derive(Debug, Clone, Serialize)]
pub struct BusinessParams {
    pub cnpj: String,
    pub corporate_name: String,
    pub mcc: String,
    /// Contact CPF
    pub cpf: String,
    /// Contact name
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndividualRecord {
    pub id: Option<i64>,
    pub cpf: String,
    pub mcc: String,
    pub name: String,
    pub email: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusinessRecord {
    pub id: Option<i64>,
    pub cnpj: String,
    pub corporate_name: String,
    pub mcc: String,
    pub contact_cpf: String,
    pub contact_name: String,
    pub email: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Either customer type, as returned by `queue.next.v1`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CustomerRecord {
    Individual(IndividualRecord),
    Business(BusinessRecord),
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndividualResponse {
    pub message: String,
    pub customer: IndividualRecord,
    /// Set by register/update only
    #[serde(default)]
    pub queued: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndividualListResponse {
    pub customers: Vec<IndividualRecord>,
    pub total: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BusinessResponse {
    pub message: String,
    pub customer: BusinessRecord,
    #[serde(default)]
    pub queued: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BusinessListResponse {
    pub customers: Vec<BusinessRecord>,
    pub total: usize,
}

/// Response from `queue.next.v1`
#[derive(Debug, Clone, Deserialize)]
pub struct NextCustomerResponse {
    pub identifier: String,
    /// "CPF" or "CNPJ", absent for malformed identifiers
    pub kind: Option<String>,
    /// "SERVED", "CUSTOMER_NOT_FOUND", "INVALID_IDENTIFIER" or "LOOKUP_FAILED"
    pub outcome: String,
    pub customer: Option<CustomerRecord>,
    pub message: String,
}

impl NextCustomerResponse {
    pub fn is_served(&self) -> bool {
        self.outcome == "SERVED"
    }
}

/// Response from `queue.view.v1`
#[derive(Debug, Clone, Deserialize)]
pub struct QueueViewResponse {
    pub entries: Vec<String>,
    pub size: usize,
    pub capacity: usize,
}
