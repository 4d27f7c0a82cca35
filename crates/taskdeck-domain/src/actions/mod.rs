//! Single-purpose, stateless mutation actions.
//!
//! Each action performs exactly one repository write and is safe to wrap in
//! an ambient transaction. Inputs arrive already validated and already
//! authorized; see the policy module for the ownership precondition.

mod create_task;
mod delete_task;
mod update_task;
mod update_task_status;

pub use create_task::CreateTaskAction;
pub use delete_task::DeleteTaskAction;
pub use update_task::UpdateTaskAction;
pub use update_task_status::UpdateTaskStatusAction;
