//! Remote backend adapters.

mod push_gateway;
mod rest_auth_client;
mod rest_config_client;
mod worker_runtime;

pub use push_gateway::WsPushGateway;
pub use rest_auth_client::RestAuthClient;
pub use rest_config_client::RestConfigClient;
pub use worker_runtime::RelayWorkerRuntime;
