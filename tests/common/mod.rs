//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use schedule_client::model::Semester;
use schedule_client::{
    ApiRequest, AppState, EffectRuntime, Gateway, GatewayError, Method, Store, StoreHandle,
    Translator,
};

/// One scripted answer.
#[derive(Debug, Clone)]
struct Scripted {
    result: Result<Value, GatewayError>,
    delay: Duration,
}

/// In-process [`Gateway`] answering from a script.
///
/// Answers are keyed by `"METHOD target"` (see [`ApiRequest::target`]) and
/// consumed in order. Unscripted calls fail with a bare 404.
#[derive(Default)]
pub struct MockGateway {
    script: Mutex<HashMap<String, VecDeque<Scripted>>>,
    calls: Mutex<Vec<ApiRequest>>,
}

fn key(method: Method, target: &str) -> String {
    format!("{} {}", method, target)
}

impl MockGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, method: Method, target: &str, result: Result<Value, GatewayError>, delay: Duration) {
        self.script
            .lock()
            .entry(key(method, target))
            .or_default()
            .push_back(Scripted { result, delay });
    }

    pub fn respond(&self, method: Method, target: &str, body: Value) {
        self.push(method, target, Ok(body), Duration::ZERO);
    }

    pub fn respond_after(&self, method: Method, target: &str, delay: Duration, body: Value) {
        self.push(method, target, Ok(body), delay);
    }

    pub fn fail(&self, method: Method, target: &str, err: GatewayError) {
        self.push(method, target, Err(err), Duration::ZERO);
    }

    /// Every request received so far, in order.
    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().clone()
    }

    pub fn call_targets(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .map(|r| key(r.method, &r.target()))
            .collect()
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn call(&self, request: ApiRequest) -> Result<Value, GatewayError> {
        let scripted = self
            .script
            .lock()
            .get_mut(&key(request.method, &request.target()))
            .and_then(|queue| queue.pop_front());
        self.calls.lock().push(request);

        let Some(scripted) = scripted else {
            return Err(GatewayError::Status {
                status: 404,
                message: None,
            });
        };
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        scripted.result
    }
}

pub fn translator() -> Arc<Translator> {
    Arc::new(Translator::new("en").expect("built-in dictionary"))
}

/// Store over `gateway`, starting from `initial`.
pub fn store_with(gateway: Arc<MockGateway>, initial: AppState) -> StoreHandle {
    let runtime = EffectRuntime::new(gateway, translator());
    Store::spawn(initial, runtime, 64)
}

pub fn semester(id: i64, description: &str, current: bool) -> Semester {
    Semester {
        id: Some(id),
        description: description.to_string(),
        year: 2024,
        start_day: "01/09/2024".to_string(),
        end_day: "31/12/2024".to_string(),
        current_semester: current,
        ..Semester::default()
    }
}

pub fn structured(status: u16, message: &str) -> GatewayError {
    GatewayError::Status {
        status,
        message: Some(message.to_string()),
    }
}
