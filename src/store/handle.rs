use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};

use crate::state::{Action, AppState};

use super::message::StoreMessage;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store loop has stopped")]
    Closed,
}

/// Cloneable access to a running store.
///
/// The loop stops once every handle is dropped.
#[derive(Clone)]
pub struct StoreHandle {
    pub(super) sender: mpsc::Sender<StoreMessage>,
    pub(super) state: watch::Receiver<Arc<AppState>>,
    pub(super) in_flight: watch::Receiver<usize>,
}

impl StoreHandle {
    /// Queue an action. Actions are handled in dispatch order.
    pub async fn dispatch(&self, action: impl Into<Action>) -> Result<(), StoreError> {
        self.sender
            .send(StoreMessage::Dispatch(action.into()))
            .await
            .map_err(|_| StoreError::Closed)
    }

    /// Latest published state.
    pub fn snapshot(&self) -> Arc<AppState> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.state.clone()
    }

    /// Number of sequences currently running.
    pub fn in_flight(&self) -> usize {
        *self.in_flight.borrow()
    }

    /// Wait until the published state satisfies `predicate`.
    pub async fn wait_for<F>(&self, mut predicate: F) -> Result<Arc<AppState>, StoreError>
    where
        F: FnMut(&AppState) -> bool,
    {
        let mut state = self.state.clone();
        let matched = state
            .wait_for(|snapshot| predicate(snapshot.as_ref()))
            .await
            .map_err(|_| StoreError::Closed)?;
        Ok(matched.clone())
    }

    /// Wait until every action dispatched before this call has been handled.
    pub async fn flush(&self) -> Result<(), StoreError> {
        let (respond_to, receiver) = oneshot::channel();
        self.sender
            .send(StoreMessage::Barrier { respond_to })
            .await
            .map_err(|_| StoreError::Closed)?;
        receiver.await.map_err(|_| StoreError::Closed)
    }

    /// Wait until the queue is drained and no sequence is running.
    pub async fn until_idle(&self) -> Result<Arc<AppState>, StoreError> {
        self.flush().await?;
        let mut in_flight = self.in_flight.clone();
        in_flight
            .wait_for(|count| *count == 0)
            .await
            .map_err(|_| StoreError::Closed)?;
        Ok(self.snapshot())
    }
}
