// SQLite IndividualCustomerRepository Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use prereg_core::domain::IndividualCustomer;
use prereg_core::error::{AppError, Result};
use prereg_core::port::IndividualCustomerRepository;
use sqlx::SqlitePool;

pub struct SqliteIndividualRepository {
    pool: SqlitePool,
}

impl SqliteIndividualRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IndividualCustomerRepository for SqliteIndividualRepository {
    async fn insert(&self, customer: &IndividualCustomer) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO individual_customers (cpf, mcc, name, email, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&customer.cpf)
        .bind(&customer.mcc)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, customer: &IndividualCustomer) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE individual_customers
            SET mcc = ?, name = ?, email = ?, updated_at = ?
            WHERE cpf = ?
            "#,
        )
        .bind(&customer.mcc)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(customer.updated_at)
        .bind(&customer.cpf)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Individual customer {} not found",
                customer.cpf
            )));
        }
        Ok(())
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<IndividualCustomer>> {
        let row = sqlx::query_as::<_, IndividualRow>(
            "SELECT * FROM individual_customers WHERE cpf = ?",
        )
        .bind(cpf)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(IndividualRow::into_customer))
    }

    async fn exists_by_cpf(&self, cpf: &str) -> Result<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM individual_customers WHERE cpf = ?")
                .bind(cpf)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(count > 0)
    }

    async fn delete_by_cpf(&self, cpf: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM individual_customers WHERE cpf = ?")
            .bind(cpf)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<IndividualCustomer>> {
        let rows: Vec<IndividualRow> =
            sqlx::query_as("SELECT * FROM individual_customers ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(IndividualRow::into_customer).collect())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct IndividualRow {
    id: i64,
    cpf: String,
    mcc: String,
    name: String,
    email: String,
    created_at: i64,
    updated_at: i64,
}

impl IndividualRow {
    fn into_customer(self) -> IndividualCustomer {
        IndividualCustomer {
            id: Some(self.id),
            cpf: self.cpf,
            mcc: self.mcc,
            name: self.name,
            email: self.email,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
