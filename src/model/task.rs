use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a task, unique within its owning project.
pub type TaskId = u32;

/// Completion state of a task.
///
/// Any status may be assigned from any other; the order below is only the
/// usual progression shown in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Human-readable label used by the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// A single task belonging to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
}

impl Task {
    /// Create a new pending task.
    pub fn new(id: TaskId, name: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            status: TaskStatus::Pending,
            due_date,
        }
    }
}
