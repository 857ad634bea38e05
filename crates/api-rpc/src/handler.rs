//! RPC Method Handlers
//!
//! Translates RPC parameters into use case calls and use case results
//! into RPC responses.

use crate::error::to_rpc_error;
use crate::types::{
    BusinessListResponse, BusinessParams, BusinessResponse, CnpjRequest, CpfRequest,
    IndividualListResponse, IndividualParams, IndividualResponse, NextCustomerResponse,
    QueueViewResponse,
};
use jsonrpsee::types::ErrorObjectOwned;
use prereg_core::application::{
    AttendanceService, BusinessCustomerService, BusinessRequest, IndividualCustomerService,
    IndividualRequest,
};
use std::sync::Arc;

/// RPC Handler with injected use cases
pub struct RpcHandler {
    individuals: Arc<IndividualCustomerService>,
    businesses: Arc<BusinessCustomerService>,
    attendance: Arc<AttendanceService>,
}

impl RpcHandler {
    pub fn new(
        individuals: Arc<IndividualCustomerService>,
        businesses: Arc<BusinessCustomerService>,
        attendance: Arc<AttendanceService>,
    ) -> Self {
        Self {
            individuals,
            businesses,
            attendance,
        }
    }

    /// individual.register.v1
    pub async fn register_individual(
        &self,
        params: IndividualParams,
    ) -> Result<IndividualResponse, ErrorObjectOwned> {
        let outcome = self
            .individuals
            .register(params.into())
            .await
            .map_err(to_rpc_error)?;

        Ok(IndividualResponse {
            message: "Individual customer registered".to_string(),
            customer: outcome.customer,
            queued: Some(outcome.queued),
        })
    }

    /// individual.update.v1
    pub async fn update_individual(
        &self,
        params: IndividualParams,
    ) -> Result<IndividualResponse, ErrorObjectOwned> {
        let outcome = self
            .individuals
            .update(params.into())
            .await
            .map_err(to_rpc_error)?;

        Ok(IndividualResponse {
            message: "Individual customer updated".to_string(),
            customer: outcome.customer,
            queued: Some(outcome.queued),
        })
    }

    /// individual.get.v1
    pub async fn get_individual(
        &self,
        params: CpfRequest,
    ) -> Result<IndividualResponse, ErrorObjectOwned> {
        let customer = self
            .individuals
            .find(&params.cpf)
            .await
            .map_err(to_rpc_error)?;

        Ok(IndividualResponse {
            message: "Individual customer found".to_string(),
            customer,
            queued: None,
        })
    }

    /// individual.delete.v1
    pub async fn delete_individual(
        &self,
        params: CpfRequest,
    ) -> Result<IndividualResponse, ErrorObjectOwned> {
        let customer = self
            .individuals
            .delete(&params.cpf)
            .await
            .map_err(to_rpc_error)?;

        Ok(IndividualResponse {
            message: "Individual customer deleted".to_string(),
            customer,
            queued: None,
        })
    }

    /// individual.list.v1
    pub async fn list_individuals(&self) -> Result<IndividualListResponse, ErrorObjectOwned> {
        let customers = self.individuals.list().await.map_err(to_rpc_error)?;
        Ok(IndividualListResponse {
            total: customers.len(),
            customers,
        })
    }

    /// business.register.v1
    pub async fn register_business(
        &self,
        params: BusinessParams,
    ) -> Result<BusinessResponse, ErrorObjectOwned> {
        let outcome = self
            .businesses
            .register(params.into())
            .await
            .map_err(to_rpc_error)?;

        Ok(BusinessResponse {
            message: "Business customer registered".to_string(),
            customer: outcome.customer,
            queued: Some(outcome.queued),
        })
    }

    /// business.update.v1
    pub async fn update_business(
        &self,
        params: BusinessParams,
    ) -> Result<BusinessResponse, ErrorObjectOwned> {
        let outcome = self
            .businesses
            .update(params.into())
            .await
            .map_err(to_rpc_error)?;

        Ok(BusinessResponse {
            message: "Business customer updated".to_string(),
            customer: outcome.customer,
            queued: Some(outcome.queued),
        })
    }

    /// business.get.v1
    pub async fn get_business(
        &self,
        params: CnpjRequest,
    ) -> Result<BusinessResponse, ErrorObjectOwned> {
        let customer = self
            .businesses
            .find(&params.cnpj)
            .await
            .map_err(to_rpc_error)?;

        Ok(BusinessResponse {
            message: "Business customer found".to_string(),
            customer,
            queued: None,
        })
    }

    /// business.delete.v1
    pub async fn delete_business(
        &self,
        params: CnpjRequest,
    ) -> Result<BusinessResponse, ErrorObjectOwned> {
        let customer = self
            .businesses
            .delete(&params.cnpj)
            .await
            .map_err(to_rpc_error)?;

        Ok(BusinessResponse {
            message: "Business customer deleted".to_string(),
            customer,
            queued: None,
        })
    }

    /// business.list.v1
    pub async fn list_businesses(&self) -> Result<BusinessListResponse, ErrorObjectOwned> {
        let customers = self.businesses.list().await.map_err(to_rpc_error)?;
        Ok(BusinessListResponse {
            total: customers.len(),
            customers,
        })
    }

    /// queue.next.v1
    pub async fn next_customer(&self) -> Result<NextCustomerResponse, ErrorObjectOwned> {
        let next = self.attendance.next().await.map_err(to_rpc_error)?;
        Ok(next.into())
    }

    /// queue.view.v1
    pub async fn view_queue(&self) -> Result<QueueViewResponse, ErrorObjectOwned> {
        Ok(self.attendance.snapshot().into())
    }
}

impl From<IndividualParams> for IndividualRequest {
    fn from(p: IndividualParams) -> Self {
        Self {
            cpf: p.cpf,
            mcc: p.mcc,
            name: p.name,
            email: p.email,
        }
    }
}

impl From<BusinessParams> for BusinessRequest {
    fn from(p: BusinessParams) -> Self {
        Self {
            cnpj: p.cnpj,
            corporate_name: p.corporate_name,
            mcc: p.mcc,
            cpf: p.cpf,
            name: p.name,
            email: p.email,
        }
    }
}
