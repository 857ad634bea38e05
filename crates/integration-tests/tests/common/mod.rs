//! Shared wiring for integration tests

#![allow(dead_code)]

use prereg_core::application::{
    AttendanceService, BusinessCustomerService, BusinessRequest, IndividualCustomerService,
    IndividualRequest,
};
use prereg_core::domain::AttendanceQueue;
use prereg_core::port::time_provider::SystemTimeProvider;
use prereg_infra_sqlite::{
    create_pool, run_migrations, SqliteBusinessRepository, SqliteIndividualRepository,
};
use std::sync::Arc;

/// Services wired over a fresh in-memory database
pub struct App {
    pub queue: Arc<AttendanceQueue>,
    pub individuals: Arc<IndividualCustomerService>,
    pub businesses: Arc<BusinessCustomerService>,
    pub attendance: Arc<AttendanceService>,
}

pub async fn setup(capacity: usize) -> App {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    let queue = Arc::new(AttendanceQueue::new(capacity).unwrap());
    let time_provider = Arc::new(SystemTimeProvider);
    let individual_repo = Arc::new(SqliteIndividualRepository::new(pool.clone()));
    let business_repo = Arc::new(SqliteBusinessRepository::new(pool));

    App {
        individuals: Arc::new(IndividualCustomerService::new(
            individual_repo.clone(),
            queue.clone(),
            time_provider.clone(),
        )),
        businesses: Arc::new(BusinessCustomerService::new(
            business_repo.clone(),
            queue.clone(),
            time_provider,
        )),
        attendance: Arc::new(AttendanceService::new(
            queue.clone(),
            individual_repo,
            business_repo,
        )),
        queue,
    }
}

pub fn individual(cpf: &str) -> IndividualRequest {
    IndividualRequest {
        cpf: cpf.to_string(),
        mcc: "4325".to_string(),
        name: "Maria da Silva".to_string(),
        email: "maria@mail.com".to_string(),
    }
}

pub fn business(cnpj: &str) -> BusinessRequest {
    BusinessRequest {
        cnpj: cnpj.to_string(),
        corporate_name: "Padaria Pao Quente Ltda".to_string(),
        mcc: "5462".to_string(),
        cpf: "98765432100".to_string(),
        name: "Joao Souza".to_string(),
        email: "contato@padaria.com".to_string(),
    }
}
