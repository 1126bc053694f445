//! Core domain models and client logic for Taskboard.
//!
//! Everything that does not need a DOM lives here: the task model, the wire date format,
//! the backend client, the task list container and the create / edit / delete flows.
pub mod actions;
pub mod api;
pub mod config;
pub mod date;
pub mod form;
pub mod list;
pub mod notice;
pub mod task;

pub use actions::{ActionError, DialogDecision, Outcome};
pub use api::{ApiError, HttpTaskApi, TaskApi};
pub use crate::config::ClientConfig;
pub use form::{FormError, TaskForm};
pub use list::{Change, ListView, TaskList, TaskRow};
pub use notice::{Notice, Notices};
pub use task::{CreateTaskRequest, Priority, Task, TaskId, UpdateTaskRequest};
