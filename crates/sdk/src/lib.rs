//! Prereg SDK - Rust Client Library
//!
//! Client for the pre-registration service's JSON-RPC API.
//!
//! # Example
//!
//! ```no_run
//! use prereg_sdk::{IndividualParams, PreregClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PreregClient::connect("http://127.0.0.1:9530").await?;
//!
//!     let response = client.register_individual(IndividualParams {
//!         cpf: "123.456.789-01".to_string(),
//!         mcc: "4325".to_string(),
//!         name: "Maria da Silva".to_string(),
//!         email: "maria@mail.com".to_string(),
//!     }).await?;
//!     println!("{} (queued: {:?})", response.message, response.queued);
//!
//!     let next = client.next_customer().await?;
//!     println!("Now serving {}", next.identifier);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::PreregClient;
pub use error::{Result, SdkError};
pub use types::{
    BusinessListResponse, BusinessParams, BusinessRecord, BusinessResponse, CustomerRecord,
    IndividualListResponse, IndividualParams, IndividualRecord, IndividualResponse,
    NextCustomerResponse, QueueViewResponse,
};
