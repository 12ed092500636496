//! Terminal outcome of an update run

use serde::Serialize;

use crate::error::UpdateError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum UpdateOutcome {
    /// Images pulled and services started
    Succeeded,
    /// Pull failed; start was never attempted
    FailedAtPull(String),
    /// Pull succeeded but start failed
    FailedAtStart(String),
}

impl UpdateOutcome {
    pub fn into_result(self) -> Result<(), UpdateError> {
        match self {
            UpdateOutcome::Succeeded => Ok(()),
            UpdateOutcome::FailedAtPull(reason) => Err(UpdateError::PullFailed(reason)),
            UpdateOutcome::FailedAtStart(reason) => Err(UpdateError::StartFailed(reason)),
        }
    }
}
