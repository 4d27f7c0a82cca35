use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use taskdeck_core::{TaskdeckError, TaskdeckResult};
use taskdeck_domain::{NewTask, Task, TaskFields, TaskId, TaskRepository};
use tokio::fs;
use tokio::sync::Mutex;

const FORMAT_VERSION: u32 = 1;

/// On-disk document wrapping the task set.
#[derive(Debug, Serialize, Deserialize)]
struct FileEnvelope {
    version: u32,
    saved_at: DateTime<Utc>,
    tasks: Vec<Task>,
}

impl FileEnvelope {
    fn new(tasks: Vec<Task>) -> Self {
        Self {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            tasks,
        }
    }
}

/// JSON file-backed task repository.
///
/// Every mutation rewrites the whole file through a temp-file-then-rename
/// sequence, so a crash mid-write leaves the previous document intact. A
/// mutex serializes writers within the process; cross-process coordination
/// is out of scope.
pub struct JsonFileTaskRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileTaskRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All tasks belonging to `owner`, newest first. Display helper for the
    /// boundary layer; not part of the repository contract.
    pub async fn list_for_owner(
        &self,
        owner: taskdeck_domain::UserId,
    ) -> TaskdeckResult<Vec<Task>> {
        let mut tasks: Vec<Task> = self
            .load()
            .await?
            .into_iter()
            .filter(|t| t.owner_id == owner)
            .collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn load(&self) -> TaskdeckResult<Vec<Task>> {
        match fs::read(&self.path).await {
            Ok(bytes) => {
                let envelope: FileEnvelope = serde_json::from_slice(&bytes)
                    .map_err(|e| TaskdeckError::Serialization(e.to_string()))?;
                Ok(envelope.tasks)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, tasks: Vec<Task>) -> TaskdeckResult<()> {
        let envelope = FileEnvelope::new(tasks);
        let data = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| TaskdeckError::Serialization(e.to_string()))?;

        // Temp file must live in the target directory so the rename stays
        // on one filesystem and remains atomic.
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        let temp = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp.path().to_path_buf();

        fs::write(&temp_path, &data).await?;
        fs::rename(&temp_path, &self.path).await?;

        tracing::debug!(
            bytes = data.len(),
            path = %self.path.display(),
            "Saved task file"
        );
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for JsonFileTaskRepository {
    async fn create(&self, input: NewTask) -> TaskdeckResult<Task> {
        let _guard = self.write_lock.lock().await;

        let mut tasks = self.load().await?;
        let task = Task::new(input);
        tasks.push(task.clone());
        self.save(tasks).await?;

        tracing::debug!(task_id = %task.id, "Created task");
        Ok(task)
    }

    async fn fetch(&self, id: TaskId) -> TaskdeckResult<Option<Task>> {
        let tasks = self.load().await?;
        Ok(tasks.into_iter().find(|t| t.id == id))
    }

    async fn update(&self, id: TaskId, fields: TaskFields) -> TaskdeckResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut tasks = self.load().await?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TaskdeckError::NotFound(format!("Task not found: {}", id)))?;
        task.apply(fields);
        self.save(tasks).await?;

        tracing::debug!(task_id = %id, "Updated task");
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskdeckResult<bool> {
        let _guard = self.write_lock.lock().await;

        let mut tasks = self.load().await?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        let removed = tasks.len() < before;

        if removed {
            self.save(tasks).await?;
            tracing::debug!(task_id = %id, "Deleted task");
        }
        Ok(removed)
    }
}
