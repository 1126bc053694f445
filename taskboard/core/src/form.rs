use crate::date;
use crate::task::{CreateTaskRequest, Priority, Task, TaskId, UpdateTaskRequest};
use chrono::{DateTime, FixedOffset, TimeZone};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please pick a valid due date (got {0:?})")]
    InvalidDueDate(String),
}

/// Field values of the create form and of the edit dialog.
///
/// `due_date` holds the raw date picker value (`YYYY-MM-DD`); it is only converted to a
/// timestamp when a request is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub task_name: String,
    pub due_date: String,
    pub priority: Priority,
}

impl TaskForm {
    /// Pre-fills the form with an existing task, for the edit dialog.
    pub fn from_task<Tz: TimeZone>(task: &Task, tz: &Tz) -> Self {
        Self {
            task_name: task.task_name.clone(),
            due_date: date::to_input(&task.due_date, tz),
            priority: task.priority,
        }
    }

    /// The due date as local midnight in `tz`.
    pub fn due_date_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<FixedOffset>, FormError> {
        date::parse_input(&self.due_date)
            .and_then(|day| date::start_of_day(day, tz))
            .ok_or_else(|| FormError::InvalidDueDate(self.due_date.clone()))
    }

    pub fn to_create_request<Tz: TimeZone>(
        &self,
        tz: &Tz,
    ) -> Result<CreateTaskRequest, FormError> {
        Ok(CreateTaskRequest {
            task_name: self.task_name.clone(),
            due_date: self.due_date_in(tz)?,
            priority: self.priority,
        })
    }

    pub fn to_update_request<Tz: TimeZone>(
        &self,
        id: TaskId,
        tz: &Tz,
    ) -> Result<UpdateTaskRequest, FormError> {
        Ok(UpdateTaskRequest {
            id,
            task_name: self.task_name.clone(),
            due_date: self.due_date_in(tz)?,
            priority: self.priority,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::tests::task;
    use chrono::Utc;

    #[test]
    fn test_default_form_selects_normal_priority() {
        let form = TaskForm::default();

        assert_eq!(form.priority, Priority::Normal);
        assert!(form.task_name.is_empty());
    }

    #[test]
    fn test_from_task_prefills_all_fields() {
        // Arrange
        let mut existing = task("42", "Walk dog");
        existing.priority = Priority::High;

        // Act
        let form = TaskForm::from_task(&existing, &Utc);

        // Assert
        assert_eq!(
            form,
            TaskForm {
                task_name: "Walk dog".to_string(),
                due_date: "2024-03-02".to_string(),
                priority: Priority::High,
            }
        );
    }

    #[test]
    fn test_create_request_converts_date_to_local_midnight() {
        let form = TaskForm {
            task_name: "Buy milk".to_string(),
            due_date: "2024-01-15".to_string(),
            priority: Priority::High,
        };

        let request = form.to_create_request(&Utc).unwrap();

        assert_eq!(request.task_name, "Buy milk");
        assert_eq!(request.priority, Priority::High);
        assert_eq!(
            date::to_wire(&request.due_date),
            "2024-01-15T00:00:00.000+00:00"
        );
    }

    #[test]
    fn test_empty_name_is_not_rejected() {
        let form = TaskForm {
            due_date: "2024-01-15".to_string(),
            ..Default::default()
        };

        assert!(form.to_create_request(&Utc).is_ok());
    }

    #[test]
    fn test_missing_date_cannot_become_a_request() {
        let form = TaskForm {
            task_name: "No date".to_string(),
            ..Default::default()
        };

        assert_eq!(
            form.to_create_request(&Utc),
            Err(FormError::InvalidDueDate(String::new()))
        );
    }

    #[test]
    fn test_update_request_round_trips_prefilled_values() {
        // Arrange
        let existing = task("42", "Walk dog");
        let form = TaskForm::from_task(&existing, &Utc);

        // Act
        let request = form.to_update_request(existing.id.clone(), &Utc).unwrap();

        // Assert
        assert_eq!(request.id, existing.id);
        assert_eq!(request.task_name, existing.task_name);
        assert_eq!(request.due_date, existing.due_date);
        assert_eq!(request.priority, existing.priority);
    }
}
