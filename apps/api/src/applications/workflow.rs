//! Status transition rules.
//!
//! ```text
//! pending  -> reviewed | accepted | rejected
//! reviewed -> accepted | rejected
//! accepted, rejected: final
//! ```
//! Re-applying the current status is always allowed and changes nothing.

use thiserror::Error;

use crate::errors::AppError;
use crate::models::application::ApplicationStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot move an application from {from} to {to}")]
pub struct TransitionError {
    pub from: ApplicationStatus,
    pub to: ApplicationStatus,
}

impl From<TransitionError> for AppError {
    fn from(err: TransitionError) -> Self {
        AppError::UnprocessableEntity(err.to_string())
    }
}

pub fn can_transition(from: ApplicationStatus, to: ApplicationStatus) -> bool {
    use ApplicationStatus::*;

    from == to
        || matches!(
            (from, to),
            (Pending, Reviewed | Accepted | Rejected) | (Reviewed, Accepted | Rejected)
        )
}

pub fn check_transition(
    from: ApplicationStatus,
    to: ApplicationStatus,
) -> Result<(), TransitionError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(TransitionError { from, to })
    }
}
