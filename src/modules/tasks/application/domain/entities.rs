use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::application::domain::entities::SectionDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Stored status is free text; anything unrecognized reads as pending.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "in-progress" => TaskStatus::InProgress,
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub github_repo: Option<String>,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskDraft {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub github_repo: Option<String>,
    pub status: Option<TaskStatus>,
}

impl SectionDraft for TaskDraft {
    fn id(&self) -> Option<Uuid> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_reads_as_pending() {
        assert_eq!(TaskStatus::from_stored("archived"), TaskStatus::Pending);
        assert_eq!(TaskStatus::from_stored(""), TaskStatus::Pending);
    }

    #[test]
    fn known_statuses_round_trip() {
        for status in [
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
        ] {
            assert_eq!(TaskStatus::from_stored(status.as_str()), status);
        }
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }
}
