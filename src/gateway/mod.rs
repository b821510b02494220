//! Remote call gateway.
//!
//! The effect layer talks to the schedule service only through the
//! [`Gateway`] trait, so sequences can run against a scripted gateway in
//! tests and against [`HttpGateway`] in production.

pub mod endpoints;
mod error;
mod http;
mod request;

pub use error::GatewayError;
pub use http::HttpGateway;
pub use request::{ApiRequest, Method};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Issues a request and returns the parsed JSON body.
///
/// Non-2xx answers are errors. An empty body is returned as `Value::Null`.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn call(&self, request: ApiRequest) -> Result<Value, GatewayError>;
}

/// Decode a response body into a typed record.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, GatewayError> {
    Ok(serde_json::from_value(value)?)
}
