use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub type TaskId = Uuid;
pub type UserId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Human-readable label for display surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Color tag used by presentation layers. Not consulted by the core.
    pub fn color(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "gray",
            TaskStatus::InProgress => "blue",
            TaskStatus::Completed => "green",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in_progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(format!("Unknown task status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            TaskPriority::Low => "gray",
            TaskPriority::Medium => "yellow",
            TaskPriority::High => "red",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            other => Err(format!("Unknown task priority: {}", other)),
        }
    }
}

/// Input for creating a task. Identity and timestamps are assigned by the
/// repository, not the caller.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
}

/// Full replacement set for an update. Every mutable field must be supplied;
/// there is no partial-patch path.
#[derive(Debug, Clone)]
pub struct TaskFields {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Exclusive owner. Set at creation, never transferred.
    pub owner_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(input: NewTask) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id: input.owner_id,
            title: input.title,
            description: input.description,
            status: input.status,
            priority: input.priority,
            due_date: input.due_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite all five mutable fields and bump `updated_at`.
    pub fn apply(&mut self, fields: TaskFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.status = fields.status;
        self.priority = fields.priority;
        self.due_date = fields.due_date;
        self.updated_at = Utc::now();
    }

    /// The current mutable fields as a replacement set. Callers that only
    /// want to change one field start from this and overwrite it.
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            priority: self.priority,
            due_date: self.due_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_task(owner_id: UserId) -> Task {
        Task::new(NewTask {
            owner_id,
            title: "Write report".to_string(),
            description: None,
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            due_date: None,
        })
    }

    #[test]
    fn test_new_task_populates_identity_and_timestamps() {
        let owner = Uuid::new_v4();
        let task = new_task(owner);

        assert_eq!(task.owner_id, owner);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.priority, TaskPriority::Medium);
        assert_eq!(task.created_at, task.updated_at);
        assert!(task.description.is_none());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_apply_replaces_all_fields() {
        let mut task = new_task(Uuid::new_v4());
        let created_at = task.created_at;

        task.apply(TaskFields {
            title: "Ship release".to_string(),
            description: Some("Cut the tag".to_string()),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            due_date: Some(NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()),
        });

        assert_eq!(task.title, "Ship release");
        assert_eq!(task.description.as_deref(), Some("Cut the tag"));
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.created_at, created_at);
        assert!(task.updated_at >= created_at);
    }

    #[test]
    fn test_apply_clears_optional_fields() {
        let mut task = new_task(Uuid::new_v4());
        task.description = Some("old".to_string());
        task.due_date = NaiveDate::from_ymd_opt(2026, 1, 1);

        let mut fields = task.fields();
        fields.description = None;
        fields.due_date = None;
        task.apply(fields);

        assert!(task.description.is_none());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<TaskStatus>().unwrap(), status);
        }
        assert!("done".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_priority_presentation_metadata() {
        assert_eq!(TaskPriority::Low.label(), "Low");
        assert_eq!(TaskPriority::Low.color(), "gray");
        assert_eq!(TaskPriority::Medium.color(), "yellow");
        assert_eq!(TaskPriority::High.color(), "red");
    }
}
