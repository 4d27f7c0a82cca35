use crate::error::TaskdeckError;

pub type TaskdeckResult<T> = Result<T, TaskdeckError>;
