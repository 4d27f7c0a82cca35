use async_trait::async_trait;
use std::collections::HashMap;
use taskdeck_core::{TaskdeckError, TaskdeckResult};
use taskdeck_domain::{NewTask, Task, TaskFields, TaskId, TaskRepository};
use tokio::sync::RwLock;

/// In-memory task repository. Backs tests and ephemeral runs; no durability.
#[derive(Default)]
pub struct MemoryTaskRepository {
    tasks: RwLock<HashMap<TaskId, Task>>,
}

impl MemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }
}

#[async_trait]
impl TaskRepository for MemoryTaskRepository {
    async fn create(&self, input: NewTask) -> TaskdeckResult<Task> {
        let task = Task::new(input);
        self.tasks.write().await.insert(task.id, task.clone());
        tracing::debug!(task_id = %task.id, "Created task");
        Ok(task)
    }

    async fn fetch(&self, id: TaskId) -> TaskdeckResult<Option<Task>> {
        Ok(self.tasks.read().await.get(&id).cloned())
    }

    async fn update(&self, id: TaskId, fields: TaskFields) -> TaskdeckResult<()> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .get_mut(&id)
            .ok_or_else(|| TaskdeckError::NotFound(format!("Task not found: {}", id)))?;
        task.apply(fields);
        tracing::debug!(task_id = %id, "Updated task");
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskdeckResult<bool> {
        let removed = self.tasks.write().await.remove(&id).is_some();
        if removed {
            tracing::debug!(task_id = %id, "Deleted task");
        }
        Ok(removed)
    }
}
