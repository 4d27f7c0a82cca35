use std::sync::Arc;
use taskdeck_core::{TaskdeckError, TaskdeckResult};
use taskdeck_domain::{
    can, Capability, CreateTaskAction, DeleteTaskAction, EventChannel, LogListener, Task, TaskId,
    UpdateTaskAction, UpdateTaskStatusAction, UserId,
};
use taskdeck_persistence::JsonFileTaskRepository;

/// Wiring for one CLI invocation: the file-backed repository, the event
/// channel with its startup-registered listeners, and the four actions.
pub struct CliContext {
    pub user: Option<UserId>,
    pub repo: Arc<JsonFileTaskRepository>,
    pub create_task: CreateTaskAction,
    pub update_task: UpdateTaskAction,
    pub update_task_status: UpdateTaskStatusAction,
    pub delete_task: DeleteTaskAction,
}

impl CliContext {
    pub fn new(file: &str, user: Option<UserId>) -> Self {
        let repo = Arc::new(JsonFileTaskRepository::new(file));

        let mut events = EventChannel::new();
        events.register(Arc::new(LogListener));
        let events = Arc::new(events);

        Self {
            user,
            repo: repo.clone(),
            create_task: CreateTaskAction::new(repo.clone()),
            update_task: UpdateTaskAction::new(repo.clone()),
            update_task_status: UpdateTaskStatusAction::new(repo.clone(), events),
            delete_task: DeleteTaskAction::new(repo),
        }
    }

    pub fn require_user(&self) -> TaskdeckResult<UserId> {
        self.user
            .ok_or_else(|| TaskdeckError::Validation("--user is required".to_string()))
    }

    /// Load a task and enforce the ownership policy for the acting user.
    /// Every show/update/status/delete path goes through here before its
    /// action runs.
    pub async fn authorize(&self, id: TaskId, capability: Capability) -> TaskdeckResult<Task> {
        use taskdeck_domain::TaskRepository;

        let task = self
            .repo
            .fetch(id)
            .await?
            .ok_or_else(|| TaskdeckError::NotFound(format!("Task not found: {}", id)))?;

        if !can(self.user, &task, capability) {
            return Err(TaskdeckError::Forbidden(format!(
                "You do not own task {}",
                id
            )));
        }
        Ok(task)
    }
}
