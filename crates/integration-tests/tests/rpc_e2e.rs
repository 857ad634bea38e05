//! End-to-end: SDK client -> JSON-RPC server -> services -> SQLite

mod common;

use jsonrpsee::server::ServerHandle;
use prereg_api_rpc::{RpcHandler, RpcServer, RpcServerConfig};
use prereg_sdk::{BusinessParams, CustomerRecord, IndividualParams, PreregClient};

async fn start_server(capacity: usize) -> (PreregClient, ServerHandle) {
    let app = common::setup(capacity).await;
    let handler = RpcHandler::new(app.individuals, app.businesses, app.attendance);

    let config = RpcServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    let (addr, handle) = RpcServer::new(config, handler).start().await.unwrap();

    let client = PreregClient::connect(format!("http://{}", addr)).await.unwrap();
    (client, handle)
}

fn maria() -> IndividualParams {
    IndividualParams {
        cpf: "123.456.789-01".to_string(),
        mcc: "4325".to_string(),
        name: "Maria da Silva".to_string(),
        email: "maria@mail.com".to_string(),
    }
}

fn padaria() -> BusinessParams {
    BusinessParams {
        cnpj: "12.345.678/0001-99".to_string(),
        corporate_name: "Padaria Pao Quente Ltda".to_string(),
        mcc: "5462".to_string(),
        cpf: "98765432100".to_string(),
        name: "Joao Souza".to_string(),
        email: "contato@padaria.com".to_string(),
    }
}

#[tokio::test]
async fn test_register_view_and_serve() {
    let (client, _server) = start_server(10).await;

    let pf = client.register_individual(maria()).await.unwrap();
    assert_eq!(pf.customer.cpf, "12345678901");
    assert_eq!(pf.queued, Some(true));

    let pj = client.register_business(padaria()).await.unwrap();
    assert_eq!(pj.customer.cnpj, "12345678000199");

    let view = client.view_queue().await.unwrap();
    assert_eq!(view.entries, vec!["12345678901", "12345678000199"]);
    assert_eq!(view.capacity, 10);

    let first = client.next_customer().await.unwrap();
    assert!(first.is_served());
    assert!(matches!(first.customer, Some(CustomerRecord::Individual(_))));

    let second = client.next_customer().await.unwrap();
    assert_eq!(second.kind.as_deref(), Some("CNPJ"));

    let err = client.next_customer().await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_error_codes_reach_the_client() {
    let (client, _server) = start_server(10).await;

    let mut invalid = maria();
    invalid.email = "not-an-email".to_string();
    assert!(client.register_individual(invalid).await.unwrap_err().is_validation());

    client.register_individual(maria()).await.unwrap();
    assert!(client.register_individual(maria()).await.unwrap_err().is_conflict());

    assert!(client.get_business("12345678000199").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_crud_over_rpc() {
    let (client, _server) = start_server(10).await;

    client.register_business(padaria()).await.unwrap();

    let mut changed = padaria();
    changed.name = "Ana Lima".to_string();
    let updated = client.update_business(changed).await.unwrap();
    assert_eq!(updated.customer.contact_name, "Ana Lima");

    let found = client.get_business("12345678000199").await.unwrap();
    assert_eq!(found.queued, None);
    assert_eq!(client.list_businesses().await.unwrap().total, 1);

    let deleted = client.delete_business("12.345.678/0001-99").await.unwrap();
    assert_eq!(deleted.customer.cnpj, "12345678000199");
    assert!(client.list_businesses().await.unwrap().customers.is_empty());

    // Both queue entries remain and resolve to a missing customer
    let next = client.next_customer().await.unwrap();
    assert_eq!(next.outcome, "CUSTOMER_NOT_FOUND");
    assert_eq!(client.view_queue().await.unwrap().size, 1);
}

#[tokio::test]
async fn test_individual_lifecycle_over_rpc() {
    let (client, _server) = start_server(10).await;

    client.register_individual(maria()).await.unwrap();
    assert_eq!(client.list_individuals().await.unwrap().total, 1);

    let fetched = client.get_individual("12345678901").await.unwrap();
    assert_eq!(fetched.customer.name, "Maria da Silva");

    client.delete_individual("12345678901").await.unwrap();
    assert!(client.get_individual("12345678901").await.unwrap_err().is_not_found());
}
