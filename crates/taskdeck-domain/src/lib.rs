pub mod actions;
pub mod events;
pub mod listener;
pub mod policy;
pub mod repository;
pub mod task;

pub use actions::{CreateTaskAction, DeleteTaskAction, UpdateTaskAction, UpdateTaskStatusAction};
pub use events::{EventChannel, TaskCompleted, TaskEventListener};
pub use listener::LogListener;
pub use policy::{can, Capability};
pub use repository::TaskRepository;
pub use task::{NewTask, Task, TaskFields, TaskId, TaskPriority, TaskStatus, UserId};
