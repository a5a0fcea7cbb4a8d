use chrono::NaiveDate;

use super::error::CommitError;
use super::store::IdScheme;
use super::task::{Task, TaskId};

/// Largest budget a single project may carry.
pub const MAX_BUDGET: u64 = 1_000_000_000_000_000;

/// Input buffer for the task row of the new-project form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput {
    pub name: String,
    pub due_date: NaiveDate,
}

/// Form state for a project that has not been committed yet.
///
/// `new_equipment` and `new_task` are text-entry buffers bound to the form;
/// they never end up in the committed project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub workers: u32,
    pub budget: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub equipment: Vec<String>,
    pub new_equipment: String,
    pub tasks: Vec<Task>,
    pub new_task: TaskInput,
    next_task_id: TaskId,
}

impl Draft {
    /// An empty draft with every date set to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            workers: 0,
            budget: 0,
            start_date: today,
            end_date: today,
            equipment: Vec::new(),
            new_equipment: String::new(),
            tasks: Vec::new(),
            new_task: TaskInput {
                name: String::new(),
                due_date: today,
            },
            next_task_id: 1,
        }
    }

    /// Append a trimmed equipment name. Blank names are ignored.
    pub fn add_equipment(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.equipment.push(name.to_string());
        self.new_equipment.clear();
        true
    }

    pub fn remove_equipment(&mut self, index: usize) -> bool {
        if index >= self.equipment.len() {
            return false;
        }
        self.equipment.remove(index);
        true
    }

    /// Append a pending task and reset the task buffer. Blank names are
    /// ignored. Returns the id given to the new task.
    pub fn add_task(
        &mut self,
        name: &str,
        due_date: NaiveDate,
        scheme: IdScheme,
        today: NaiveDate,
    ) -> Option<TaskId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = match scheme {
            IdScheme::Monotonic => self.next_task_id,
            IdScheme::Sequential => self.tasks.len() as TaskId + 1,
        };
        self.next_task_id = self.next_task_id.max(id) + 1;
        self.tasks.push(Task::new(id, name, due_date));
        self.new_task = TaskInput {
            name: String::new(),
            due_date: today,
        };
        Some(id)
    }

    /// Remove the first task with `task_id`.
    pub fn remove_task(&mut self, task_id: TaskId) -> bool {
        match self.tasks.iter().position(|t| t.id == task_id) {
            Some(pos) => {
                self.tasks.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Check the required fields before commit.
    pub fn validate(&self) -> Result<(), CommitError> {
        if self.name.trim().is_empty() {
            return Err(CommitError::MissingName);
        }
        if self.budget == 0 {
            return Err(CommitError::MissingBudget);
        }
        if self.workers == 0 {
            return Err(CommitError::MissingWorkers);
        }
        if self.budget > MAX_BUDGET {
            return Err(CommitError::BudgetTooLarge { max: MAX_BUDGET });
        }
        if self.end_date < self.start_date {
            return Err(CommitError::EndBeforeStart);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskStatus;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()
    }

    fn filled() -> Draft {
        let mut draft = Draft::new(today());
        draft.name = "Tower A".to_string();
        draft.workers = 10;
        draft.budget = 1000;
        draft
    }

    #[test]
    fn blank_equipment_is_ignored() {
        let mut draft = Draft::new(today());
        draft.new_equipment = "   ".to_string();
        assert!(!draft.add_equipment(""));
        assert!(!draft.add_equipment("   "));
        assert!(draft.equipment.is_empty());
        assert_eq!(draft.new_equipment, "   ");
    }

    #[test]
    fn equipment_is_trimmed_and_buffer_cleared() {
        let mut draft = Draft::new(today());
        draft.new_equipment = " Crane ".to_string();
        assert!(draft.add_equipment(" Crane "));
        assert!(draft.add_equipment("Crane"));
        assert_eq!(draft.equipment, vec!["Crane", "Crane"]);
        assert_eq!(draft.new_equipment, "");
    }

    #[test]
    fn remove_equipment_out_of_range_is_noop() {
        let mut draft = Draft::new(today());
        draft.add_equipment("Excavator");
        draft.add_equipment("Mixer");
        assert!(!draft.remove_equipment(2));
        assert!(!draft.remove_equipment(usize::MAX));
        assert_eq!(draft.equipment, vec!["Excavator", "Mixer"]);
        assert!(draft.remove_equipment(0));
        assert_eq!(draft.equipment, vec!["Mixer"]);
    }

    #[test]
    fn add_task_resets_buffer_to_today() {
        let mut draft = Draft::new(today());
        let due = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        draft.new_task = TaskInput {
            name: "Scaffolding".to_string(),
            due_date: due,
        };
        let later = NaiveDate::from_ymd_opt(2026, 4, 2).unwrap();
        let id = draft.add_task("  Scaffolding ", due, IdScheme::Monotonic, later);
        assert_eq!(id, Some(1));
        assert_eq!(draft.tasks[0].name, "Scaffolding");
        assert_eq!(draft.tasks[0].status, TaskStatus::Pending);
        assert_eq!(draft.tasks[0].due_date, due);
        assert_eq!(
            draft.new_task,
            TaskInput {
                name: String::new(),
                due_date: later,
            }
        );
    }

    #[test]
    fn blank_task_is_ignored() {
        let mut draft = Draft::new(today());
        assert_eq!(draft.add_task(" ", today(), IdScheme::Monotonic, today()), None);
        assert!(draft.tasks.is_empty());
    }

    #[test]
    fn monotonic_task_ids_are_not_reused() {
        let mut draft = Draft::new(today());
        draft.add_task("A", today(), IdScheme::Monotonic, today());
        draft.add_task("B", today(), IdScheme::Monotonic, today());
        assert!(draft.remove_task(1));
        let id = draft.add_task("C", today(), IdScheme::Monotonic, today());
        assert_eq!(id, Some(3));
        let ids: Vec<_> = draft.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn sequential_task_ids_follow_list_length() {
        let mut draft = Draft::new(today());
        draft.add_task("A", today(), IdScheme::Sequential, today());
        draft.add_task("B", today(), IdScheme::Sequential, today());
        draft.remove_task(1);
        let id = draft.add_task("C", today(), IdScheme::Sequential, today());
        // Length-derived ids collide with the surviving task.
        assert_eq!(id, Some(2));
        let ids: Vec<_> = draft.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 2]);
        // Only the first match goes.
        assert!(draft.remove_task(2));
        assert_eq!(draft.tasks.len(), 1);
        assert_eq!(draft.tasks[0].name, "C");
    }

    #[test]
    fn remove_unknown_task_is_noop() {
        let mut draft = Draft::new(today());
        draft.add_task("A", today(), IdScheme::Monotonic, today());
        assert!(!draft.remove_task(7));
        assert_eq!(draft.tasks.len(), 1);
    }

    #[test]
    fn validate_requires_name_budget_workers() {
        assert_eq!(filled().validate(), Ok(()));

        let mut draft = filled();
        draft.name = "   ".to_string();
        assert_eq!(draft.validate(), Err(CommitError::MissingName));

        let mut draft = filled();
        draft.budget = 0;
        assert_eq!(draft.validate(), Err(CommitError::MissingBudget));

        let mut draft = filled();
        draft.workers = 0;
        assert_eq!(draft.validate(), Err(CommitError::MissingWorkers));
    }

    #[test]
    fn validate_caps_budget() {
        let mut draft = filled();
        draft.budget = MAX_BUDGET;
        assert_eq!(draft.validate(), Ok(()));
        draft.budget = u64::MAX;
        assert_eq!(
            draft.validate(),
            Err(CommitError::BudgetTooLarge { max: MAX_BUDGET })
        );
    }

    #[test]
    fn validate_rejects_end_before_start() {
        let mut draft = filled();
        draft.end_date = today().pred_opt().unwrap();
        assert_eq!(draft.validate(), Err(CommitError::EndBeforeStart));
    }
}
