//! Domain events and the channel that dispatches them.
//!
//! The channel is explicit and injected: listeners are registered at startup
//! and the channel is handed to the one action that publishes. There is no
//! global dispatch table.

use async_trait::async_trait;
use std::sync::Arc;
use taskdeck_core::TaskdeckResult;

use crate::task::Task;

/// Raised when a task transitions into the completed status. Carries a
/// snapshot of the task at the moment of completion and nothing else.
#[derive(Debug, Clone)]
pub struct TaskCompleted {
    pub task: Task,
}

#[async_trait]
pub trait TaskEventListener: Send + Sync {
    async fn on_task_completed(&self, event: &TaskCompleted) -> TaskdeckResult<()>;
}

/// Dispatches domain events to its registered listeners.
///
/// Listener failures are logged and swallowed; a publish never fails and
/// never surfaces an error to the action that raised the event.
#[derive(Default)]
pub struct EventChannel {
    listeners: Vec<Arc<dyn TaskEventListener>>,
}

impl EventChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Intended to be called only during startup
    /// wiring, before the channel is shared with any action.
    pub fn register(&mut self, listener: Arc<dyn TaskEventListener>) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub async fn publish(&self, event: TaskCompleted) {
        for listener in &self.listeners {
            if let Err(err) = listener.on_task_completed(&event).await {
                tracing::warn!(
                    task_id = %event.task.id,
                    error = %err,
                    "Task event listener failed; continuing"
                );
            }
        }
    }
}
