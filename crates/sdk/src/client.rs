//! Prereg Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{
    BusinessListResponse, BusinessParams, BusinessResponse, IndividualListResponse,
    IndividualParams, IndividualResponse, NextCustomerResponse, QueueViewResponse,
};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Pre-registration service client
///
/// # Example
///
/// ```no_run
/// use prereg_sdk::PreregClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = PreregClient::connect("http://127.0.0.1:9530").await?;
/// let queue = client.view_queue().await?;
/// println!("{} waiting", queue.size);
/// # Ok(())
/// # }
/// ```
pub struct PreregClient {
    client: HttpClient,
}

impl PreregClient {
    /// Connect to the service
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9530`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    pub async fn register_individual(&self, params: IndividualParams) -> Result<IndividualResponse> {
        self.call("individual.register.v1", &params).await
    }

    pub async fn update_individual(&self, params: IndividualParams) -> Result<IndividualResponse> {
        self.call("individual.update.v1", &params).await
    }

    pub async fn get_individual(&self, cpf: &str) -> Result<IndividualResponse> {
        self.call("individual.get.v1", &DocumentParam { cpf: Some(cpf), cnpj: None })
            .await
    }

    pub async fn delete_individual(&self, cpf: &str) -> Result<IndividualResponse> {
        self.call("individual.delete.v1", &DocumentParam { cpf: Some(cpf), cnpj: None })
            .await
    }

    pub async fn list_individuals(&self) -> Result<IndividualListResponse> {
        Ok(self.client.request("individual.list.v1", rpc_params![]).await?)
    }

    pub async fn register_business(&self, params: BusinessParams) -> Result<BusinessResponse> {
        self.call("business.register.v1", &params).await
    }

    pub async fn update_business(&self, params: BusinessParams) -> Result<BusinessResponse> {
        self.call("business.update.v1", &params).await
    }

    pub async fn get_business(&self, cnpj: &str) -> Result<BusinessResponse> {
        self.call("business.get.v1", &DocumentParam { cpf: None, cnpj: Some(cnpj) })
            .await
    }

    pub async fn delete_business(&self, cnpj: &str) -> Result<BusinessResponse> {
        self.call("business.delete.v1", &DocumentParam { cpf: None, cnpj: Some(cnpj) })
            .await
    }

    pub async fn list_businesses(&self) -> Result<BusinessListResponse> {
        Ok(self.client.request("business.list.v1", rpc_params![]).await?)
    }

    /// Serve the customer at the front of the attendance queue.
    ///
    /// An empty queue is an RPC error with `is_not_found() == true`.
    pub async fn next_customer(&self) -> Result<NextCustomerResponse> {
        Ok(self.client.request("queue.next.v1", rpc_params![]).await?)
    }

    pub async fn view_queue(&self) -> Result<QueueViewResponse> {
        Ok(self.client.request("queue.view.v1", rpc_params![]).await?)
    }

    async fn call<P: Serialize, R: DeserializeOwned>(&self, method: &str, params: &P) -> Result<R> {
        Ok(self.client.request(method, object_params(params)?).await?)
    }
}

#[derive(Serialize)]
struct DocumentParam<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    cpf: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cnpj: Option<&'a str>,
}

/// Send a struct as named params
fn object_params<P: Serialize>(params: &P) -> Result<ObjectParams> {
    let serde_json::Value::Object(fields) = serde_json::to_value(params)? else {
        return Err(SdkError::Other("params must serialize to an object".to_string()));
    };

    let mut object = ObjectParams::new();
    for (name, value) in fields {
        object.insert(&name, value)?;
    }
    Ok(object)
}
