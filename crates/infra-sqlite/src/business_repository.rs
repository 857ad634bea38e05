// SQLite BusinessCustomerRepository Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use prereg_core::domain::BusinessCustomer;
use prereg_core::error::{AppError, Result};
use prereg_core::port::BusinessCustomerRepository;
use sqlx::SqlitePool;

pub struct SqliteBusinessRepository {
    pool: SqlitePool,
}

impl SqliteBusinessRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BusinessCustomerRepository for SqliteBusinessRepository {
    async fn insert(&self, customer: &BusinessCustomer) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO business_customers (
                cnpj, corporate_name, mcc,
                contact_cpf, contact_name, email,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&customer.cnpj)
        .bind(&customer.corporate_name)
        .bind(&customer.mcc)
        .bind(&customer.contact_cpf)
        .bind(&customer.contact_name)
        .bind(&customer.email)
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, customer: &BusinessCustomer) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE business_customers
            SET corporate_name = ?, mcc = ?,
                contact_cpf = ?, contact_name = ?, email = ?,
                updated_at = ?
            WHERE cnpj = ?
            "#,
        )
        .bind(&customer.corporate_name)
        .bind(&customer.mcc)
        .bind(&customer.contact_cpf)
        .bind(&customer.contact_name)
        .bind(&customer.email)
        .bind(customer.updated_at)
        .bind(&customer.cnpj)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Business customer {} not found",
                customer.cnpj
            )));
        }
        Ok(())
    }

    async fn find_by_cnpj(&self, cnpj: &str) -> Result<Option<BusinessCustomer>> {
        let row =
            sqlx::query_as::<_, BusinessRow>("SELECT * FROM business_customers WHERE cnpj = ?")
                .bind(cnpj)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(row.map(BusinessRow::into_customer))
    }

    async fn exists_by_cnpj(&self, cnpj: &str) -> Result<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM business_customers WHERE cnpj = ?")
                .bind(cnpj)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(count > 0)
    }

    async fn delete_by_cnpj(&self, cnpj: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM business_customers WHERE cnpj = ?")
            .bind(cnpj)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<BusinessCustomer>> {
        let rows: Vec<BusinessRow> =
            sqlx::query_as("SELECT * FROM business_customers ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(BusinessRow::into_customer).collect())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct BusinessRow {
    id: i64,
    cnpj: String,
    corporate_name: String,
    mcc: String,
    contact_cpf: String,
    contact_name: String,
    email: String,
    created_at: i64,
    updated_at: i64,
}

impl BusinessRow {
    fn into_customer(self) -> BusinessCustomer {
        BusinessCustomer {
            id: Some(self.id),
            cnpj: self.cnpj,
            corporate_name: self.corporate_name,
            mcc: self.mcc,
            contact_cpf: self.contact_cpf,
            contact_name: self.contact_name,
            email: self.email,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
