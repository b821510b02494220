use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::config::ApiConfig;

use super::{ApiRequest, Gateway, GatewayError, Method};

/// [`Gateway`] backed by a pooled reqwest client.
pub struct HttpGateway {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpGateway {
    pub fn new(config: &ApiConfig) -> Result<Self, GatewayError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64));
        if let Some(seconds) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds as u64));
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, request: &ApiRequest) -> Result<Url, GatewayError> {
        let joined = format!("{}/{}", self.base_url, request.path.trim_start_matches('/'));
        let mut url = Url::parse(&joined)
            .map_err(|e| GatewayError::Transport(format!("Invalid URL '{}': {}", joined, e)))?;
        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// `message` field of a JSON error body.
fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn call(&self, request: ApiRequest) -> Result<Value, GatewayError> {
        let request_id = uuid::Uuid::new_v4();
        let url = self.url_for(&request)?;

        tracing::debug!(
            request_id = %request_id,
            method = %request.method,
            url = %url,
            "Sending API request"
        );

        let mut builder = self.client.request(to_reqwest(request.method), url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let start = Instant::now();
        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to read response body: {}", e)))?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let message = error_message(&body);
            tracing::warn!(
                request_id = %request_id,
                status = %status,
                latency_ms,
                message = message.as_deref().unwrap_or(""),
                "API request failed"
            );
            return Err(GatewayError::Status {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(request_id = %request_id, status = %status, latency_ms, "API request completed");

        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&body)?)
    }
}
