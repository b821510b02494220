//! What a running sequence can see and do.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::{mpsc, watch};

use crate::gateway::{decode, ApiRequest, Gateway, GatewayError};
use crate::i18n::{keys, Translator};
use crate::state::notification::NotificationIntent;
use crate::state::{Action, AppState};
use crate::store::StoreMessage;

use super::registry::Ticket;

/// Handle given to one run of a sequence.
///
/// Every bundle it emits is tagged with the run's [`Ticket`]; the store
/// discards bundles from runs that have been preempted.
pub struct EffectContext {
    gateway: Arc<dyn Gateway>,
    translator: Arc<Translator>,
    store: mpsc::WeakSender<StoreMessage>,
    state: watch::Receiver<Arc<AppState>>,
    ticket: Ticket,
}

impl EffectContext {
    pub(crate) fn new(
        gateway: Arc<dyn Gateway>,
        translator: Arc<Translator>,
        store: mpsc::WeakSender<StoreMessage>,
        state: watch::Receiver<Arc<AppState>>,
        ticket: Ticket,
    ) -> Self {
        Self {
            gateway,
            translator,
            store,
            state,
            ticket,
        }
    }

    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Latest published state.
    pub fn state(&self) -> Arc<AppState> {
        self.state.borrow().clone()
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub async fn call(&self, request: ApiRequest) -> Result<serde_json::Value, GatewayError> {
        let target = request.target();
        let method = request.method;
        self.gateway.call(request).await.map_err(|err| {
            tracing::warn!(
                kind = %self.ticket.kind,
                method = %method,
                target = %target,
                error = %err,
                "Remote call failed"
            );
            err
        })
    }

    /// Call and decode the body into `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, GatewayError> {
        decode(self.call(request).await?)
    }

    /// Send a bundle to the store; it is reduced as one step.
    pub async fn emit(&self, actions: Vec<Action>) {
        if actions.is_empty() {
            return;
        }
        let Some(store) = self.store.upgrade() else {
            tracing::trace!(kind = %self.ticket.kind, "Store gone, bundle dropped");
            return;
        };
        let message = StoreMessage::Apply {
            ticket: self.ticket,
            actions,
        };
        if store.send(message).await.is_err() {
            tracing::trace!(kind = %self.ticket.kind, "Store gone, bundle dropped");
        }
    }

    pub async fn emit_one(&self, action: impl Into<Action>) {
        self.emit(vec![action.into()]).await;
    }

    /// Structured message of the failure, else the localized fallback.
    pub fn error_message(&self, err: &GatewayError) -> String {
        match err.structured_message() {
            Some(message) => message.to_string(),
            None => self.translator.t(keys::COMMON_ERROR_MESSAGE),
        }
    }

    pub async fn notify_error(&self, err: &GatewayError) {
        let message = self.error_message(err);
        self.emit_one(NotificationIntent::error(message)).await;
    }

    pub fn success(&self, entity_label: &str, action_label: &str) -> Action {
        NotificationIntent::success(self.translator.success_message(entity_label, action_label))
            .into()
    }

    pub(crate) async fn finish(self) {
        let Some(store) = self.store.upgrade() else {
            tracing::trace!(kind = %self.ticket.kind, "Store gone, finish not reported");
            return;
        };
        if store.send(StoreMessage::Finished(self.ticket)).await.is_err() {
            tracing::trace!(kind = %self.ticket.kind, "Store gone, finish not reported");
        }
    }
}
