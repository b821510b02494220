use tokio::sync::oneshot;

use crate::effects::Ticket;
use crate::state::Action;

/// Messages consumed by the store loop, in arrival order.
#[derive(Debug)]
pub(crate) enum StoreMessage {
    Dispatch(Action),
    /// Bundle emitted by the sequence holding `ticket`.
    Apply { ticket: Ticket, actions: Vec<Action> },
    Finished(Ticket),
    /// Answered once every earlier message has been handled.
    Barrier { respond_to: oneshot::Sender<()> },
}
