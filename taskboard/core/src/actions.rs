//! User-facing flows: load, create, edit and delete.
//!
//! Flows talk to the backend and report what it confirmed as a [`Change`]. The caller
//! applies that change to its current [`TaskList`] once the call resolves, so a failure
//! never leaves a partially updated list behind.

use crate::api::{ApiError, TaskApi};
use crate::form::{FormError, TaskForm};
use crate::list::{Change, TaskList};
use crate::task::TaskId;
use chrono::TimeZone;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ActionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Form(#[from] FormError),
}

/// How a modal dialog was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogDecision<T> {
    Confirmed(T),
    Cancelled,
}

/// Result of a flow guarded by a dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied(Change),
    Cancelled,
}

pub async fn load_tasks(api: &impl TaskApi) -> Result<TaskList, ActionError> {
    let tasks = api.list_tasks().await?;
    info!("Loaded {} tasks", tasks.len());
    Ok(TaskList::from(tasks))
}

/// Submits the create form. The created task is to be appended.
pub async fn create_task<Tz: TimeZone>(
    api: &impl TaskApi,
    form: &TaskForm,
    tz: &Tz,
) -> Result<Change, ActionError> {
    let request = form.to_create_request(tz)?;
    let created = api.create_task(&request).await?;
    info!("Created task {}", created.id);
    Ok(Change::Appended(created))
}

/// Applies the edit dialog's decision for task `id`.
pub async fn edit_task<Tz: TimeZone>(
    api: &impl TaskApi,
    id: &TaskId,
    decision: DialogDecision<TaskForm>,
    tz: &Tz,
) -> Result<Outcome, ActionError> {
    let DialogDecision::Confirmed(form) = decision else {
        debug!("Edit of task {id} cancelled");
        return Ok(Outcome::Cancelled);
    };

    let request = form.to_update_request(id.clone(), tz)?;
    let updated = api.update_task(&request).await?;
    info!("Updated task {}", updated.id);
    Ok(Outcome::Applied(Change::Replaced(updated)))
}

/// Applies the delete confirmation for task `id`.
pub async fn delete_task(
    api: &impl TaskApi,
    id: &TaskId,
    decision: DialogDecision<()>,
) -> Result<Outcome, ActionError> {
    if decision == DialogDecision::Cancelled {
        debug!("Deletion of task {id} cancelled");
        return Ok(Outcome::Cancelled);
    }

    api.delete_task(id).await?;
    info!("Deleted task {id}");
    Ok(Outcome::Applied(Change::Removed(id.clone())))
}
