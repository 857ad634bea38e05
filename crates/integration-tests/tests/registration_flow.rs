//! Registration and attendance flows over SQLite

mod common;

use common::{business, individual, setup};
use prereg_core::application::NextOutcome;
use prereg_core::domain::{Customer, DocumentKind};
use prereg_core::error::AppError;

#[tokio::test]
async fn test_mixed_customers_served_in_registration_order() {
    let app = setup(10).await;

    app.individuals.register(individual("111.111.111-11")).await.unwrap();
    app.businesses.register(business("22.222.222/0001-22")).await.unwrap();
    app.individuals.register(individual("33333333333")).await.unwrap();

    assert_eq!(
        app.attendance.snapshot().entries,
        vec!["11111111111", "22222222000122", "33333333333"]
    );

    let first = app.attendance.next().await.unwrap();
    assert_eq!(first.outcome, NextOutcome::Served);
    assert!(matches!(first.customer, Some(Customer::Individual(ref c)) if c.cpf == "11111111111"));

    let second = app.attendance.next().await.unwrap();
    assert_eq!(second.kind, Some(DocumentKind::Cnpj));
    assert!(matches!(second.customer, Some(Customer::Business(ref b)) if b.mcc == "5462"));

    let third = app.attendance.next().await.unwrap();
    assert_eq!(third.identifier, "33333333333");

    let err = app.attendance.next().await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_duplicate_registration_is_conflict_and_not_requeued() {
    let app = setup(10).await;

    app.individuals.register(individual("12345678901")).await.unwrap();
    let err = app
        .individuals
        .register(individual("123.456.789-01"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(app.queue.len(), 1);
}

#[tokio::test]
async fn test_update_persists_and_requeues() {
    let app = setup(10).await;

    app.businesses.register(business("12345678000199")).await.unwrap();
    assert_eq!(app.attendance.next().await.unwrap().outcome, NextOutcome::Served);

    let mut changed = business("12.345.678/0001-99");
    changed.corporate_name = "Padaria Nova Ltda".to_string();
    let outcome = app.businesses.update(changed).await.unwrap();
    assert!(outcome.queued);

    let stored = app.businesses.find("12345678000199").await.unwrap();
    assert_eq!(stored.corporate_name, "Padaria Nova Ltda");
    assert!(stored.updated_at >= stored.created_at);
    assert_eq!(app.attendance.snapshot().entries, vec!["12345678000199"]);
}

#[tokio::test]
async fn test_update_unknown_customer_is_not_found() {
    let app = setup(10).await;

    let err = app.individuals.update(individual("12345678901")).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(app.queue.is_empty());
}

#[tokio::test]
async fn test_deleted_customer_reported_when_dequeued() {
    let app = setup(10).await;

    app.individuals.register(individual("12345678901")).await.unwrap();
    let removed = app.individuals.delete("123.456.789-01").await.unwrap();
    assert_eq!(removed.cpf, "12345678901");

    // The queued entry outlives the record
    assert_eq!(app.queue.len(), 1);
    let next = app.attendance.next().await.unwrap();
    assert_eq!(next.outcome, NextOutcome::CustomerNotFound);
    assert_eq!(next.kind, Some(DocumentKind::Cpf));
    assert!(next.customer.is_none());
}

#[tokio::test]
async fn test_full_queue_still_persists_customer() {
    let app = setup(2).await;

    for cpf in ["00000000001", "00000000002", "00000000003"] {
        app.individuals.register(individual(cpf)).await.unwrap();
    }

    assert_eq!(app.individuals.list().await.unwrap().len(), 3);
    let snapshot = app.attendance.snapshot();
    assert_eq!(snapshot.entries, vec!["00000000001", "00000000002"]);
    assert_eq!(snapshot.capacity, 2);

    // Serving one frees a slot
    app.attendance.next().await.unwrap();
    let outcome = app.individuals.update(individual("00000000003")).await.unwrap();
    assert!(outcome.queued);
    assert_eq!(app.attendance.snapshot().entries, vec!["00000000002", "00000000003"]);
}

#[tokio::test]
async fn test_invalid_input_is_rejected_before_storage() {
    let app = setup(10).await;

    let mut bad_email = individual("12345678901");
    bad_email.email = "maria@mail".to_string();
    assert!(matches!(
        app.individuals.register(bad_email).await.unwrap_err(),
        AppError::Domain(_)
    ));

    let mut long_mcc = business("12345678000199");
    long_mcc.mcc = "54621".to_string();
    assert!(app.businesses.register(long_mcc).await.is_err());

    assert!(app.individuals.list().await.unwrap().is_empty());
    assert!(app.businesses.list().await.unwrap().is_empty());
    assert!(app.queue.is_empty());
}

#[tokio::test]
async fn test_unpadded_formatted_cnpj_is_served_as_invalid_identifier() {
    let app = setup(10).await;

    // Formatted input keeps its short length after stripping
    app.businesses.register(business("2.345.678/0001-99")).await.unwrap();
    assert_eq!(app.attendance.snapshot().entries, vec!["2345678000199"]);

    let next = app.attendance.next().await.unwrap();
    assert_eq!(next.outcome, NextOutcome::InvalidIdentifier);
    assert_eq!(next.kind, None);
}
