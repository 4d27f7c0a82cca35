use chrono::NaiveDate;
use std::sync::Arc;
use taskdeck_core::TaskdeckResult;

use crate::repository::TaskRepository;
use crate::task::{NewTask, Task, TaskPriority, TaskStatus, UserId};

/// Creates a task owned by the given user. One persistence write, no other
/// side effects, no retry on failure.
pub struct CreateTaskAction {
    repo: Arc<dyn TaskRepository>,
}

impl CreateTaskAction {
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        owner_id: UserId,
        title: String,
        description: Option<String>,
        status: TaskStatus,
        priority: TaskPriority,
        due_date: Option<NaiveDate>,
    ) -> TaskdeckResult<Task> {
        self.repo
            .create(NewTask {
                owner_id,
                title,
                description,
                status,
                priority,
                due_date,
            })
            .await
    }
}
