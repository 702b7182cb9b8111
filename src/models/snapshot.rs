use serde::Deserialize;

/// Acknowledgement returned by `/resource-metrics/enqueue_snapshot/`.
/// The task runs on the backend queue; the client never polls it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SnapshotAck {
    pub task_id: String,
}

impl SnapshotAck {
    /// Status line shown after a successful enqueue.
    pub fn status_message(&self) -> String {
        format!("Tâche planifiée (id: {})", self.task_id)
    }
}
