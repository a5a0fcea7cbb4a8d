use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::metrics::percent;
use super::task::{Task, TaskId, TaskStatus};

/// Identifier of a committed project, unique across the dashboard.
pub type ProjectId = u32;

/// A construction project with its crew, equipment, budget and tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Completed tasks as a percentage (0–100). Derived from `tasks`; only
    /// [`Project::recalculate_progress`] writes it.
    pub progress: u8,
    pub workers: u32,
    pub equipment: Vec<String>,
    pub budget: u64,
    pub spent: u64,
    pub tasks: Vec<Task>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Project {
    pub fn completed_tasks(&self) -> usize {
        self.tasks.iter().filter(|t| t.status.is_completed()).count()
    }

    /// Recompute `progress` from the current task list.
    pub fn recalculate_progress(&mut self) {
        self.progress = percent(self.completed_tasks() as u64, self.tasks.len() as u64);
    }

    /// Set the status of every task with `task_id`. Returns `false` if no task matches.
    pub fn set_task_status(&mut self, task_id: TaskId, status: TaskStatus) -> bool {
        let mut matched = false;
        for task in self.tasks.iter_mut().filter(|t| t.id == task_id) {
            task.status = status;
            matched = true;
        }
        if matched {
            self.recalculate_progress();
        }
        matched
    }

    /// Budget left before `spent` reaches `budget`.
    pub fn remaining_budget(&self) -> u64 {
        self.budget.saturating_sub(self.spent)
    }

    /// Share of the budget already spent, as a percentage.
    pub fn budget_used_pct(&self) -> u8 {
        percent(self.spent, self.budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    fn project_with(statuses: &[TaskStatus]) -> Project {
        let tasks = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| Task {
                status: *status,
                ..Task::new(i as TaskId + 1, format!("Task {}", i + 1), date(10))
            })
            .collect();
        Project {
            id: 1,
            name: "Depot".to_string(),
            progress: 0,
            workers: 4,
            equipment: Vec::new(),
            budget: 500,
            spent: 125,
            tasks,
            start_date: date(1),
            end_date: date(30),
        }
    }

    #[test]
    fn progress_counts_completed_tasks() {
        use TaskStatus::*;
        let mut project = project_with(&[Completed, Pending, InProgress]);
        project.recalculate_progress();
        assert_eq!(project.progress, 33);

        let mut project = project_with(&[Completed, Completed, Pending]);
        project.recalculate_progress();
        assert_eq!(project.progress, 67);
    }

    #[test]
    fn progress_is_zero_without_tasks() {
        let mut project = project_with(&[]);
        project.progress = 40;
        project.recalculate_progress();
        assert_eq!(project.progress, 0);
    }

    #[test]
    fn set_task_status_unknown_task_is_ignored() {
        let mut project = project_with(&[TaskStatus::Pending]);
        let before = project.clone();
        assert!(!project.set_task_status(99, TaskStatus::Completed));
        assert_eq!(project, before);
    }

    #[test]
    fn set_task_status_updates_every_task_sharing_the_id() {
        let mut project = project_with(&[TaskStatus::Pending, TaskStatus::Pending]);
        for task in &mut project.tasks {
            task.id = 2;
        }
        assert!(project.set_task_status(2, TaskStatus::Completed));
        assert!(project.tasks.iter().all(|t| t.status == TaskStatus::Completed));
        assert_eq!(project.progress, 100);
    }

    #[test]
    fn budget_helpers() {
        let project = project_with(&[]);
        assert_eq!(project.remaining_budget(), 375);
        assert_eq!(project.budget_used_pct(), 25);
    }
}
