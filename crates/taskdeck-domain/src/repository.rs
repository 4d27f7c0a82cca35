use async_trait::async_trait;
use taskdeck_core::TaskdeckResult;

use crate::task::{NewTask, Task, TaskFields, TaskId};

/// Persistence contract the actions depend on. Implementations own identity
/// assignment and timestamp maintenance; callers never set either.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persist a new task, assigning its id and both timestamps.
    async fn create(&self, input: NewTask) -> TaskdeckResult<Task>;

    /// Load a task by id. `Ok(None)` when the id is unknown.
    async fn fetch(&self, id: TaskId) -> TaskdeckResult<Option<Task>>;

    /// Overwrite the mutable fields of an existing task and bump its
    /// `updated_at`. Errors with `NotFound` for an unknown id.
    async fn update(&self, id: TaskId, fields: TaskFields) -> TaskdeckResult<()>;

    /// Remove a task. Returns `false` when the id was already absent.
    async fn delete(&self, id: TaskId) -> TaskdeckResult<bool>;
}
