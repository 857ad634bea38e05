//! JSON-RPC Server
//!
//! Serves JSON-RPC 2.0 over HTTP on a local TCP port.

use crate::handler::RpcHandler;
use crate::types::{BusinessParams, CnpjRequest, CpfRequest, IndividualParams};
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub const DEFAULT_RPC_HOST: &str = "127.0.0.1";
pub const DEFAULT_RPC_PORT: u16 = 9530;

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    /// 0 picks a free port
    pub port: u16,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

// Register a method whose params parse into `$req`, or a method without params
macro_rules! register {
    ($module:ident, $handler:expr, $name:literal, $req:ty => $method:ident) => {{
        let handler = $handler.clone();
        $module
            .register_async_method($name, move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: $req = params.parse()?;
                    handler.$method(req).await
                }
            })
            .map_err(|e| e.to_string())?;
    }};
    ($module:ident, $handler:expr, $name:literal => $method:ident) => {{
        let handler = $handler.clone();
        $module
            .register_async_method($name, move |_, _, _| {
                let handler = handler.clone();
                async move { handler.$method().await }
            })
            .map_err(|e| e.to_string())?;
    }};
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(config: RpcServerConfig, handler: RpcHandler) -> Self {
        Self {
            config,
            handler: Arc::new(handler),
        }
    }

    /// Build the method table
    pub fn module(&self) -> Result<RpcModule<()>, String> {
        let mut module = RpcModule::new(());
        let handler = &self.handler;

        register!(module, handler, "individual.register.v1", IndividualParams => register_individual);
        register!(module, handler, "individual.update.v1", IndividualParams => update_individual);
        register!(module, handler, "individual.get.v1", CpfRequest => get_individual);
        register!(module, handler, "individual.delete.v1", CpfRequest => delete_individual);
        register!(module, handler, "individual.list.v1" => list_individuals);

        register!(module, handler, "business.register.v1", BusinessParams => register_business);
        register!(module, handler, "business.update.v1", BusinessParams => update_business);
        register!(module, handler, "business.get.v1", CnpjRequest => get_business);
        register!(module, handler, "business.delete.v1", CnpjRequest => delete_business);
        register!(module, handler, "business.list.v1" => list_businesses);

        register!(module, handler, "queue.next.v1" => next_customer);
        register!(module, handler, "queue.view.v1" => view_queue);

        Ok(module)
    }

    /// Start the JSON-RPC server, returning the bound address
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let module = self.module()?;

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;
        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        info!(
            addr = %local_addr,
            methods = module.method_names().count(),
            "JSON-RPC server started"
        );

        let handle = server.start(module);
        Ok((local_addr, handle))
    }
}
