use std::sync::Arc;
use taskdeck_core::TaskdeckResult;

use crate::repository::TaskRepository;
use crate::task::Task;

/// Deletes a task. No events, no cascades; existence is the caller's
/// problem to establish beforehand.
pub struct DeleteTaskAction {
    repo: Arc<dyn TaskRepository>,
}

impl DeleteTaskAction {
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, task: &Task) -> TaskdeckResult<bool> {
        self.repo.delete(task.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockTaskRepository;
    use crate::task::{NewTask, TaskPriority, TaskStatus};
    use uuid::Uuid;

    fn some_task() -> Task {
        Task::new(NewTask {
            owner_id: Uuid::new_v4(),
            title: "Disposable".to_string(),
            description: None,
            status: TaskStatus::Pending,
            priority: TaskPriority::Low,
            due_date: None,
        })
    }

    #[tokio::test]
    async fn test_delete_reports_repository_outcome() {
        let task = some_task();
        let task_id = task.id;

        let mut repo = MockTaskRepository::new();
        repo.expect_delete()
            .withf(move |id| *id == task_id)
            .times(1)
            .returning(|_| Ok(true));

        let action = DeleteTaskAction::new(Arc::new(repo));
        assert!(action.execute(&task).await.unwrap());
    }
}
