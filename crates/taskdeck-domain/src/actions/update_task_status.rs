use std::sync::Arc;
use taskdeck_core::{TaskdeckError, TaskdeckResult};

use crate::events::{EventChannel, TaskCompleted};
use crate::repository::TaskRepository;
use crate::task::{Task, TaskStatus};

/// Changes a task's status. This is the only mutation path that emits the
/// completion event.
///
/// The emission gate is evaluated on the pre-mutation snapshot: the event
/// fires iff the new status is completed and the previous one was not.
/// Re-completing an already completed task stays silent, as does moving away
/// from completed.
pub struct UpdateTaskStatusAction {
    repo: Arc<dyn TaskRepository>,
    events: Arc<EventChannel>,
}

impl UpdateTaskStatusAction {
    pub fn new(repo: Arc<dyn TaskRepository>, events: Arc<EventChannel>) -> Self {
        Self { repo, events }
    }

    pub async fn execute(&self, task: &Task, status: TaskStatus) -> TaskdeckResult<Task> {
        let previous = task.status;

        let mut fields = task.fields();
        fields.status = status;
        self.repo.update(task.id, fields).await?;

        let refreshed = self
            .repo
            .fetch(task.id)
            .await?
            .ok_or_else(|| TaskdeckError::NotFound(format!("Task not found: {}", task.id)))?;

        if status == TaskStatus::Completed && previous != TaskStatus::Completed {
            self.events
                .publish(TaskCompleted {
                    task: refreshed.clone(),
                })
                .await;
        }

        Ok(refreshed)
    }
}
