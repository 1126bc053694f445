use crate::date;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Opaque identifier assigned by the backend.
///
/// Backends differ in whether ids are strings or numbers; both are accepted and kept as
/// text so the client never does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => TaskId(id),
            RawId::Number(id) => TaskId(id.to_string()),
        })
    }
}

/// How urgent a task is.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Normal,
    High,
    Urgent,
}

impl Priority {
    /// Every priority, in the order the select box lists them.
    pub const ALL: [Priority; 3] = [Priority::Normal, Priority::High, Priority::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Normal => "Normal",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown priority: {0}")]
pub struct UnknownPriority(pub String);

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == value)
            .ok_or_else(|| UnknownPriority(value.to_string()))
    }
}

/// A task as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(rename = "taskName")]
    pub task_name: String,
    #[serde(rename = "dueDate", serialize_with = "date::serialize_wire")]
    pub due_date: DateTime<FixedOffset>,
    pub priority: Priority,
    /// Completion flag. Carried through but not used by any interaction.
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /task`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTaskRequest {
    #[serde(rename = "taskName")]
    pub task_name: String,
    #[serde(rename = "dueDate", serialize_with = "date::serialize_wire")]
    pub due_date: DateTime<FixedOffset>,
    pub priority: Priority,
}

/// Body of `POST /updateTask`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateTaskRequest {
    pub id: TaskId,
    #[serde(rename = "taskName")]
    pub task_name: String,
    #[serde(rename = "dueDate", serialize_with = "date::serialize_wire")]
    pub due_date: DateTime<FixedOffset>,
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_deserializes_backend_payload() {
        // Arrange
        let payload = json!({
            "id": "42",
            "taskName": "Buy milk",
            "dueDate": "2024-03-02T00:00:00.000Z",
            "priority": "High",
            "status": false,
            "created_at": "2024-03-01T09:30:00.000Z"
        });

        // Act
        let task: Task = serde_json::from_value(payload).unwrap();

        // Assert
        assert_eq!(task.id, TaskId::from("42"));
        assert_eq!(task.task_name, "Buy milk");
        assert_eq!(task.priority, Priority::High);
        assert!(!task.status);
        assert_eq!(
            task.due_date,
            DateTime::parse_from_rfc3339("2024-03-02T00:00:00Z").unwrap()
        );
        assert!(task.created_at.is_some());
    }

    #[test]
    fn test_task_accepts_numeric_id_and_missing_optional_fields() {
        let payload = json!({
            "id": 7,
            "taskName": "",
            "dueDate": "2024-03-02T00:00:00.000+01:00",
            "priority": "Normal"
        });

        let task: Task = serde_json::from_value(payload).unwrap();

        assert_eq!(task.id.as_str(), "7");
        assert!(!task.status);
        assert_eq!(task.created_at, None);
    }

    #[test]
    fn test_task_rejects_unknown_priority() {
        let payload = json!({
            "id": "1",
            "taskName": "Something",
            "dueDate": "2024-03-02T00:00:00.000Z",
            "priority": "Whenever"
        });

        assert!(serde_json::from_value::<Task>(payload).is_err());
    }

    #[test]
    fn test_create_request_uses_wire_field_names_and_date_format() {
        // Arrange
        let request = CreateTaskRequest {
            task_name: "Buy milk".to_string(),
            due_date: DateTime::parse_from_rfc3339("2024-01-15T00:00:00+00:00").unwrap(),
            priority: Priority::High,
        };

        // Act
        let body = serde_json::to_value(&request).unwrap();

        // Assert
        assert_eq!(
            body,
            json!({
                "taskName": "Buy milk",
                "dueDate": "2024-01-15T00:00:00.000+00:00",
                "priority": "High"
            })
        );
    }

    #[test]
    fn test_update_request_carries_id() {
        let request = UpdateTaskRequest {
            id: TaskId::from("42"),
            task_name: "Walk dog".to_string(),
            due_date: DateTime::parse_from_rfc3339("2024-01-15T00:00:00-03:00").unwrap(),
            priority: Priority::Urgent,
        };

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "id": "42",
                "taskName": "Walk dog",
                "dueDate": "2024-01-15T00:00:00.000-03:00",
                "priority": "Urgent"
            })
        );
    }

    #[test]
    fn test_priority_parses_select_values() {
        assert_eq!("Normal".parse::<Priority>(), Ok(Priority::Normal));
        assert_eq!("Urgent".parse::<Priority>(), Ok(Priority::Urgent));
        assert_eq!(
            "urgent".parse::<Priority>(),
            Err(UnknownPriority("urgent".to_string()))
        );
    }
}
