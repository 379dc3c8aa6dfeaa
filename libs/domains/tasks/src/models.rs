use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Task lifecycle status
///
/// Serialized exactly as `"Pending"` / `"Completed"`; anything else is
/// refused at the deserialization boundary, before any store write.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TaskStatus {
    /// Awaiting processing; the default for new tasks
    #[default]
    #[sea_orm(string_value = "Pending")]
    Pending,
    /// Processed by a worker or marked done by a client
    #[sea_orm(string_value = "Completed")]
    Completed,
}

/// Task - the single tracked entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique identifier
    pub id: Uuid,
    /// Task name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Lifecycle status
    pub status: TaskStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    /// Caller-supplied identifier; generated server-side when absent
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
}

/// DTO for updating an existing task; absent fields are left untouched
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, Default)]
pub struct UpdateTask {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

impl Task {
    /// Apply updates from an UpdateTask DTO
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.updated_at = chrono::Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_task() -> Task {
        Task {
            id: Uuid::new_v4(),
            name: "write report".to_string(),
            description: "quarterly numbers".to_string(),
            status: TaskStatus::Pending,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_status_defaults_to_pending() {
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::Pending).unwrap(),
            "\"Pending\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::Completed).unwrap(),
            "\"Completed\""
        );
        assert_eq!(TaskStatus::Pending.to_string(), "Pending");
        assert_eq!(
            TaskStatus::from_str("Completed").unwrap(),
            TaskStatus::Completed
        );
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<TaskStatus, _> = serde_json::from_str("\"Archived\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_create_task_defaults() {
        let input: CreateTask = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        assert!(input.id.is_none());
        assert_eq!(input.description, "");
        assert_eq!(input.status, TaskStatus::Pending);
    }

    #[test]
    fn test_create_task_validates_empty_name() {
        let input: CreateTask = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_apply_update_merges_present_fields() {
        let mut task = sample_task();
        let before = task.created_at;

        task.apply_update(UpdateTask {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        });

        assert_eq!(task.name, "write report");
        assert_eq!(task.description, "quarterly numbers");
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.created_at, before);
        assert!(task.updated_at >= before);
    }

    #[test]
    fn test_apply_update_overwrites_all_given_fields() {
        let mut task = sample_task();

        task.apply_update(UpdateTask {
            name: Some("renamed".to_string()),
            description: Some("".to_string()),
            status: Some(TaskStatus::Completed),
        });

        assert_eq!(task.name, "renamed");
        assert_eq!(task.description, "");
        assert_eq!(task.status, TaskStatus::Completed);
    }

    #[test]
    fn test_update_task_validates_empty_name() {
        let update = UpdateTask {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
