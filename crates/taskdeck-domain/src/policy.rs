//! Ownership authorization policy.
//!
//! A pure predicate evaluated by the boundary layer before any show, update,
//! or delete path reaches an action. Actions themselves never re-check
//! ownership.

use crate::task::{Task, UserId};

/// The unit of authorization granted or denied by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    View,
    Update,
    Delete,
}

/// Whether `user` holds `capability` over `task`.
///
/// All three capabilities follow the same rule: only the task's owner is
/// permitted. An absent (unauthenticated) user is denied everything.
pub fn can(user: Option<UserId>, task: &Task, capability: Capability) -> bool {
    match capability {
        Capability::View | Capability::Update | Capability::Delete => {
            user == Some(task.owner_id)
        }
    }
}
