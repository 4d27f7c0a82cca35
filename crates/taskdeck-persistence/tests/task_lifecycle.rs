//! End-to-end lifecycle: create as one user, check the ownership policy
//! against both users, complete the task twice and count events.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};
use taskdeck_core::TaskdeckResult;
use taskdeck_domain::{
    can, Capability, CreateTaskAction, DeleteTaskAction, EventChannel, TaskCompleted,
    TaskEventListener, TaskId, TaskPriority, TaskRepository, TaskStatus, UpdateTaskStatusAction,
};
use taskdeck_persistence::MemoryTaskRepository;
use uuid::Uuid;

struct RecordingListener {
    completed: Mutex<Vec<TaskId>>,
}

impl RecordingListener {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            completed: Mutex::new(Vec::new()),
        })
    }

    fn count(&self) -> usize {
        self.completed.lock().unwrap().len()
    }
}

#[async_trait]
impl TaskEventListener for RecordingListener {
    async fn on_task_completed(&self, event: &TaskCompleted) -> TaskdeckResult<()> {
        self.completed.lock().unwrap().push(event.task.id);
        Ok(())
    }
}

#[tokio::test]
async fn test_full_task_lifecycle() {
    let repo = Arc::new(MemoryTaskRepository::new());
    let listener = RecordingListener::new();
    let mut channel = EventChannel::new();
    channel.register(listener.clone());
    let channel = Arc::new(channel);

    let user_a = Uuid::new_v4();
    let user_b = Uuid::new_v4();

    // User A creates a pending, high-priority task due end of 2026.
    let create = CreateTaskAction::new(repo.clone());
    let task = create
        .execute(
            user_a,
            "File the annual report".to_string(),
            None,
            TaskStatus::Pending,
            TaskPriority::High,
            NaiveDate::from_ymd_opt(2026, 12, 31),
        )
        .await
        .unwrap();

    assert_eq!(task.owner_id, user_a);
    assert_eq!(task.status, TaskStatus::Pending);

    // A may view it, B may not.
    assert!(can(Some(user_a), &task, Capability::View));
    assert!(!can(Some(user_b), &task, Capability::View));

    // First completion fires exactly one event with the title intact.
    let update_status = UpdateTaskStatusAction::new(repo.clone(), channel.clone());
    let completed = update_status
        .execute(&task, TaskStatus::Completed)
        .await
        .unwrap();

    assert_eq!(completed.status, TaskStatus::Completed);
    assert_eq!(completed.title, "File the annual report");
    assert_eq!(listener.count(), 1);
    assert_eq!(listener.completed.lock().unwrap()[0], task.id);

    // Completing again stays silent.
    let recompleted = update_status
        .execute(&completed, TaskStatus::Completed)
        .await
        .unwrap();
    assert_eq!(recompleted.status, TaskStatus::Completed);
    assert_eq!(listener.count(), 1);

    // Deletion succeeds and the task is gone.
    let delete = DeleteTaskAction::new(repo.clone());
    assert!(delete.execute(&recompleted).await.unwrap());
    assert!(repo.fetch(task.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_full_update_path_never_emits() {
    use taskdeck_domain::UpdateTaskAction;

    let repo = Arc::new(MemoryTaskRepository::new());
    let listener = RecordingListener::new();
    let mut channel = EventChannel::new();
    channel.register(listener.clone());

    let create = CreateTaskAction::new(repo.clone());
    let task = create
        .execute(
            Uuid::new_v4(),
            "Quiet completion".to_string(),
            None,
            TaskStatus::Pending,
            TaskPriority::Low,
            None,
        )
        .await
        .unwrap();

    // The full-replace path moves the status to completed without touching
    // the event channel at all. Known asymmetry with the status action.
    let update = UpdateTaskAction::new(repo.clone());
    let mut fields = task.fields();
    fields.status = TaskStatus::Completed;
    let updated = update.execute(&task, fields).await.unwrap();

    assert_eq!(updated.status, TaskStatus::Completed);
    assert_eq!(listener.count(), 0);
}
