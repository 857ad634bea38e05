//! JSON-RPC API Layer
//!
//! Exposes customer pre-registration and the attendance queue as
//! versioned JSON-RPC 2.0 methods.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use handler::RpcHandler;
pub use server::{RpcServer, RpcServerConfig};
