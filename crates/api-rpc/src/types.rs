//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method parameters and results.

use prereg_core::application::{NextInLine, NextOutcome, QueueSnapshot};
use prereg_core::domain::{BusinessCustomer, Customer, DocumentKind, IndividualCustomer};
use serde::{Deserialize, Serialize};

/// individual.register.v1 / individual.update.v1
#[derive(Debug, Deserialize)]
pub struct IndividualParams {
    pub cpf: String,
    pub mcc: String,
    pub name: String,
    pub email: String,
}

/// individual.get.v1 / individual.delete.v1
#[derive(Debug, Deserialize)]
pub struct CpfRequest {
    pub cpf: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndividualResponse {
    pub message: String,
    pub customer: IndividualCustomer,
    /// Only set by register/update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queued: Option<bool>,
}

/// individual.list.v1
#[derive(Debug, Clone, Serialize)]
pub struct IndividualListResponse {
    pub customers: Vec<IndividualCustomer>,
    pub total: usize,
}

/// business.register.v1 / business.update.v1
#[derive(Debug, Deserialize)]
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

/// business.get.v1 / business.delete.v1
#[derive(Debug, Deserialize)]
pub struct CnpjRequest {
    pub cnpj: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BusinessResponse {
    pub message: String,
    pub customer: BusinessCustomer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queued: Option<bool>,
}

/// business.list.v1
#[derive(Debug, Clone, Serialize)]
pub struct BusinessListResponse {
    pub customers: Vec<BusinessCustomer>,
    pub total: usize,
}

/// queue.next.v1
#[derive(Debug, Clone, Serialize)]
pub struct NextCustomerResponse {
    pub identifier: String,
    pub kind: Option<DocumentKind>,
    pub outcome: NextOutcome,
    pub customer: Option<Customer>,
    pub message: String,
}

impl From<NextInLine> for NextCustomerResponse {
    fn from(next: NextInLine) -> Self {
        let message = match next.outcome {
            NextOutcome::Served => format!("Next customer: {}", next.identifier),
            NextOutcome::CustomerNotFound => {
                format!("Customer {} is no longer registered", next.identifier)
            }
            NextOutcome::InvalidIdentifier => {
                format!("Invalid identifier in queue: {}", next.identifier)
            }
            NextOutcome::LookupFailed => {
                format!("Could not load customer {}, register or update to queue again", next.identifier)
            }
        };

        Self {
            identifier: next.identifier,
            kind: next.kind,
            outcome: next.outcome,
            customer: next.customer,
            message,
        }
    }
}

/// queue.view.v1
#[derive(Debug, Clone, Serialize)]
pub struct QueueViewResponse {
    pub entries: Vec<String>,
    pub size: usize,
    pub capacity: usize,
}

impl From<QueueSnapshot> for QueueViewResponse {
    fn from(snapshot: QueueSnapshot) -> Self {
        Self {
            entries: snapshot.entries,
            size: snapshot.size,
            capacity: snapshot.capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_response_messages() {
        let next = NextInLine {
            identifier: "12345".to_string(),
            kind: None,
            customer: None,
            outcome: NextOutcome::InvalidIdentifier,
        };
        let resp = NextCustomerResponse::from(next);
        assert_eq!(resp.message, "Invalid identifier in queue: 12345");

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["outcome"], "INVALID_IDENTIFIER");
        assert!(json["customer"].is_null());
    }

    #[test]
    fn test_lookup_failure_names_identifier() {
        let resp = NextCustomerResponse::from(NextInLine {
            identifier: "12345678901".to_string(),
            kind: Some(DocumentKind::Cpf),
            customer: None,
            outcome: NextOutcome::LookupFailed,
        });
        assert!(resp.message.contains("12345678901"));

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["outcome"], "LOOKUP_FAILED");
        assert_eq!(json["identifier"], "12345678901");
    }

    #[test]
    fn test_queued_omitted_for_lookups() {
        let resp = IndividualResponse {
            message: "found".to_string(),
            customer: IndividualCustomer::new("12345678901", "4325", "Maria", "m@mail.com", 1),
            queued: None,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("queued").is_none());
        assert_eq!(json["customer"]["cpf"], "12345678901");
    }

    #[test]
    fn test_params_deserialize() {
        let params: BusinessParams = serde_json::from_value(serde_json::json!({
            "cnpj": "12.345.678/0001-99",
            "corporate_name": "Padaria Ltda",
            "mcc": "5462",
            "cpf": "12345678901",
            "name": "Joao",
            "email": "joao@padaria.com"
        }))
        .unwrap();
        assert_eq!(params.corporate_name, "Padaria Ltda");
    }
}
