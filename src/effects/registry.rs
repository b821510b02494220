//! Last-task-wins bookkeeping for running effect sequences.

use std::collections::HashMap;

use tokio::task::JoinHandle;

use super::command::CommandKind;

/// Identifies one run of a sequence.
///
/// Bundles emitted under a ticket are applied only while the ticket is the
/// latest one issued for its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub kind: CommandKind,
    pub generation: u64,
}

/// Running sequences, at most one per [`CommandKind`].
///
/// Owned by the store loop, so it is never accessed concurrently.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    next_generation: u64,
    latest: HashMap<CommandKind, u64>,
    running: HashMap<CommandKind, JoinHandle<()>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for `kind`, aborting the sequence it replaces.
    pub fn begin(&mut self, kind: CommandKind) -> Ticket {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.latest.insert(kind, generation);
        if let Some(previous) = self.running.remove(&kind) {
            previous.abort();
            tracing::info!(kind = %kind, "Preempted running sequence");
        }
        Ticket { kind, generation }
    }

    /// Attach the task spawned for `ticket`.
    ///
    /// A task for a ticket that is already stale is aborted immediately.
    pub fn track(&mut self, ticket: Ticket, handle: JoinHandle<()>) {
        if self.is_current(ticket) {
            self.running.insert(ticket.kind, handle);
        } else {
            handle.abort();
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get(&ticket.kind) == Some(&ticket.generation)
    }

    /// Forget the task of `ticket`. Returns false when it was already preempted.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.running.remove(&ticket.kind);
        true
    }

    pub fn in_flight(&self) -> usize {
        self.running.len()
    }
}

impl Drop for TaskRegistry {
    fn drop(&mut self) {
        for (_, handle) in self.running.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn idle_task() -> JoinHandle<()> {
        tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        })
    }

    #[tokio::test]
    async fn newer_ticket_supersedes_older() {
        let mut registry = TaskRegistry::new();
        let first = registry.begin(CommandKind::GetAllSemesters);
        registry.track(first, idle_task());
        let second = registry.begin(CommandKind::GetAllSemesters);
        registry.track(second, idle_task());

        assert!(!registry.is_current(first));
        assert!(registry.is_current(second));
        assert_eq!(registry.in_flight(), 1);
        assert!(!registry.finish(first));
        assert!(registry.finish(second));
        assert_eq!(registry.in_flight(), 0);
    }

    #[tokio::test]
    async fn kinds_are_independent() {
        let mut registry = TaskRegistry::new();
        let semesters = registry.begin(CommandKind::GetAllSemesters);
        registry.track(semesters, idle_task());
        let students = registry.begin(CommandKind::FetchAllStudents);
        registry.track(students, idle_task());

        assert!(registry.is_current(semesters));
        assert!(registry.is_current(students));
        assert_eq!(registry.in_flight(), 2);
    }

    #[tokio::test]
    async fn begin_aborts_previous_task() {
        let mut registry = TaskRegistry::new();
        let first = registry.begin(CommandKind::DeleteLesson);
        let (guard, dropped) = tokio::sync::oneshot::channel::<()>();
        registry.track(
            first,
            tokio::spawn(async move {
                let _guard = guard;
                tokio::time::sleep(Duration::from_secs(3600)).await;
            }),
        );

        registry.begin(CommandKind::DeleteLesson);
        assert!(dropped.await.is_err());
    }
}
