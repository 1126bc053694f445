//! Client-side task list state.
//!
//! The list keeps the backend's order. New tasks go to the end, edits keep their slot and
//! deletions excise a single entry. Mutations are expressed as transformations that
//! consume the list and return the next one. Backend results arrive as [`Change`]s and
//! are applied to whatever the list holds when the response lands.

use crate::date;
use crate::task::{Task, TaskId};
use chrono::TimeZone;
use std::fmt::Display;
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

/// A confirmed backend mutation, ready to be applied to a list.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Appended(Task),
    Replaced(Task),
    Removed(TaskId),
}

/// One rendered row of the task list.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: TaskId,
    pub task_name: String,
    pub due_date: String,
    pub priority: String,
}

/// What the list area renders.
///
/// A failed initial load is reported next to the list, never instead of it, so tasks
/// created afterwards still show up.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading,
    Empty,
    Rows(Vec<TaskRow>),
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Appends a task returned by the backend.
    pub fn with_appended(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Replaces the task sharing `task.id`, keeping its position.
    pub fn with_replaced(mut self, task: Task) -> Self {
        match self.tasks.iter_mut().find(|current| current.id == task.id) {
            Some(current) => *current = task,
            None => warn!("Ignoring update for unknown task {}", task.id),
        }
        self
    }

    /// Removes the task with the given id, if present.
    pub fn without(mut self, id: &TaskId) -> Self {
        self.tasks.retain(|task| &task.id != id);
        self
    }

    pub fn apply(self, change: Change) -> Self {
        match change {
            Change::Appended(task) => self.with_appended(task),
            Change::Replaced(task) => self.with_replaced(task),
            Change::Removed(id) => self.without(&id),
        }
    }

    /// Projects the list into display rows, in list order.
    pub fn rows<Tz>(&self, tz: &Tz) -> Vec<TaskRow>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.tasks
            .iter()
            .map(|task| TaskRow {
                id: task.id.clone(),
                task_name: task.task_name.clone(),
                due_date: date::to_display(&task.due_date, tz),
                priority: task.priority.to_string(),
            })
            .collect()
    }

    /// Picks what to render while the initial load is `loading` or once it has settled.
    pub fn view<Tz>(&self, loading: bool, tz: &Tz) -> ListView
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if loading {
            ListView::Loading
        } else if self.is_empty() {
            ListView::Empty
        } else {
            ListView::Rows(self.rows(tz))
        }
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
