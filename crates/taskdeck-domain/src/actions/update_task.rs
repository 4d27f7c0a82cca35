use std::sync::Arc;
use taskdeck_core::{TaskdeckError, TaskdeckResult};

use crate::repository::TaskRepository;
use crate::task::{Task, TaskFields};

/// Full-replace update of a task's mutable fields.
///
/// Callers supply every field, including the ones they do not intend to
/// change. This path never emits domain events, even when the new field set
/// moves the status to completed; quick status changes that should notify go
/// through `UpdateTaskStatusAction` instead.
pub struct UpdateTaskAction {
    repo: Arc<dyn TaskRepository>,
}

impl UpdateTaskAction {
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, task: &Task, fields: TaskFields) -> TaskdeckResult<Task> {
        self.repo.update(task.id, fields).await?;

        // Re-read so repository-side changes (updated_at) are reflected.
        self.repo
            .fetch(task.id)
            .await?
            .ok_or_else(|| TaskdeckError::NotFound(format!("Task not found: {}", task.id)))
    }
}
