//! Process-wide state coordinator.
//!
//! One task owns [`AppState`]. Everything else talks to it through a
//! [`StoreHandle`]: actions go in over an ordered queue, snapshots come out
//! over a `watch` channel. Only the loop calls the reducer, so state
//! transitions never interleave.

mod handle;
mod message;

pub use handle::{StoreError, StoreHandle};
pub(crate) use message::StoreMessage;

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::effects::{Command, EffectRuntime, TaskRegistry};
use crate::state::{self, Action, AppState};

pub struct Store {
    receiver: mpsc::Receiver<StoreMessage>,
    sender: mpsc::WeakSender<StoreMessage>,
    state: watch::Sender<Arc<AppState>>,
    in_flight: watch::Sender<usize>,
    registry: TaskRegistry,
    runtime: EffectRuntime,
}

impl Store {
    /// Start the loop on the current tokio runtime.
    pub fn spawn(initial: AppState, runtime: EffectRuntime, capacity: usize) -> StoreHandle {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let (state, state_rx) = watch::channel(Arc::new(initial));
        let (in_flight, in_flight_rx) = watch::channel(0usize);

        let store = Store {
            receiver,
            sender: sender.downgrade(),
            state,
            in_flight,
            registry: TaskRegistry::new(),
            runtime,
        };
        tokio::spawn(store.run());

        StoreHandle {
            sender,
            state: state_rx,
            in_flight: in_flight_rx,
        }
    }

    async fn run(mut self) {
        while let Some(message) = self.receiver.recv().await {
            match message {
                StoreMessage::Dispatch(action) => self.apply(vec![action]),
                StoreMessage::Apply { ticket, actions } => {
                    if self.registry.is_current(ticket) {
                        self.apply(actions);
                    } else {
                        tracing::trace!(
                            kind = %ticket.kind,
                            generation = ticket.generation,
                            dropped = actions.len(),
                            "Discarding bundle from preempted sequence"
                        );
                    }
                }
                StoreMessage::Finished(ticket) => {
                    if self.registry.finish(ticket) {
                        self.publish_in_flight();
                    }
                }
                StoreMessage::Barrier { respond_to } => {
                    if respond_to.send(()).is_err() {
                        tracing::trace!("Store: barrier response dropped (receiver gone)");
                    }
                }
            }
        }
        tracing::debug!("Store loop stopped");
    }

    /// Reduce a bundle as one step, then start the commands it carried.
    fn apply(&mut self, actions: Vec<Action>) {
        let mut next: Option<AppState> = None;
        let mut commands = Vec::new();
        for action in actions {
            match action {
                Action::Start(command) => commands.push(command),
                action => {
                    tracing::debug!(kind = action.kind(), "Reducing action");
                    let current = next.take().unwrap_or_else(|| (**self.state.borrow()).clone());
                    next = Some(state::reduce(current, action));
                }
            }
        }
        if let Some(next) = next {
            self.state.send_replace(Arc::new(next));
        }
        for command in commands {
            self.start(command);
        }
    }

    fn start(&mut self, command: Command) {
        let ticket = self.registry.begin(command.kind());
        let ctx = self
            .runtime
            .context(self.sender.clone(), self.state.subscribe(), ticket);
        let handle = tokio::spawn(EffectRuntime::run(ctx, command));
        self.registry.track(ticket, handle);
        self.publish_in_flight();
    }

    fn publish_in_flight(&self) {
        self.in_flight.send_replace(self.registry.in_flight());
    }
}
