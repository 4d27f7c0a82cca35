//! Input validation for the boundary layer.
//!
//! Everything here runs before an action is invoked; the actions assume
//! their inputs already passed these checks.

use chrono::{NaiveDate, Utc};
use taskdeck_core::{TaskdeckError, TaskdeckResult};
use taskdeck_domain::{TaskPriority, TaskStatus};

const MAX_TITLE_CHARS: usize = 255;

pub fn validate_title(title: &str) -> TaskdeckResult<()> {
    if title.trim().is_empty() {
        return Err(TaskdeckError::Validation(
            "Title must not be empty".to_string(),
        ));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(TaskdeckError::Validation(format!(
            "Title must be at most {} characters",
            MAX_TITLE_CHARS
        )));
    }
    Ok(())
}

pub fn parse_status(value: &str) -> TaskdeckResult<TaskStatus> {
    value
        .parse::<TaskStatus>()
        .map_err(TaskdeckError::Validation)
}

pub fn parse_priority(value: &str) -> TaskdeckResult<TaskPriority> {
    value
        .parse::<TaskPriority>()
        .map_err(TaskdeckError::Validation)
}

/// Parse an ISO-8601 calendar date and reject dates in the past. The
/// not-in-the-past rule is a boundary rule only; stored tasks may carry any
/// date.
pub fn parse_due_date(value: &str) -> TaskdeckResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| TaskdeckError::Validation(format!("Invalid due date: {}", value)))?;

    if date < Utc::now().date_naive() {
        return Err(TaskdeckError::Validation(
            "Due date must be today or later".to_string(),
        ));
    }
    Ok(date)
}
