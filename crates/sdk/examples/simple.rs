//! Simple SDK Example
//!
//! Registers two customers and serves the attendance queue.
//!
//! # Usage
//!
//! 1. Start the service:
//!    ```bash
//!    cargo run --package prereg-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package prereg-sdk --example simple
//!    ```

use prereg_sdk::{BusinessParams, IndividualParams, PreregClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let url = std::env::var("PREREG_RPC_URL").unwrap_or_else(|_| "http://127.0.0.1:9530".into());
    let client = PreregClient::connect(&url).await?;

    let pf = client
        .register_individual(IndividualParams {
            cpf: "123.456.789-01".to_string(),
            mcc: "4325".to_string(),
            name: "Maria da Silva".to_string(),
            email: "maria@mail.com".to_string(),
        })
        .await?;
    println!("{}: {}", pf.message, pf.customer.cpf);

    let pj = client
        .register_business(BusinessParams {
            cnpj: "12.345.678/0001-99".to_string(),
            corporate_name: "Padaria Pao Quente Ltda".to_string(),
            mcc: "5462".to_string(),
            cpf: "98765432100".to_string(),
            name: "Joao Souza".to_string(),
            email: "contato@padaria.com".to_string(),
        })
        .await?;
    println!("{}: {}", pj.message, pj.customer.cnpj);

    let queue = client.view_queue().await?;
    println!("Queue ({}/{}): {:?}", queue.size, queue.capacity, queue.entries);

    while let Ok(next) = client.next_customer().await {
        println!("{}", next.message);
    }

    Ok(())
}
