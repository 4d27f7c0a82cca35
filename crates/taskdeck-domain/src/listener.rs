use async_trait::async_trait;
use chrono::Utc;
use taskdeck_core::TaskdeckResult;

use crate::events::{TaskCompleted, TaskEventListener};

/// Reference listener: records each completion as a structured log entry.
/// Registered at startup by the boundary layer.
pub struct LogListener;

#[async_trait]
impl TaskEventListener for LogListener {
    async fn on_task_completed(&self, event: &TaskCompleted) -> TaskdeckResult<()> {
        tracing::info!(
            task_id = %event.task.id,
            task_title = %event.task.title,
            user_id = %event.task.owner_id,
            completed_at = %Utc::now().to_rfc3339(),
            "Task completed notification"
        );
        Ok(())
    }
}
