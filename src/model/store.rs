use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::draft::Draft;
use super::error::{CommitError, ExpenseError};
use super::metrics::DashboardMetrics;
use super::project::{Project, ProjectId};
use super::task::{TaskId, TaskStatus};

/// How project and task ids are handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum IdScheme {
    /// Counters that only ever grow; removed ids are never reused.
    #[default]
    Monotonic,
    /// `len + 1` of the owning list. Removing and re-adding can repeat an id.
    Sequential,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StoreConfig {
    pub id_scheme: IdScheme,
}

pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Authoritative dashboard state: the committed projects and the draft of
/// the project being created.
#[derive(Debug, Clone)]
pub struct Store {
    projects: Vec<Project>,
    /// Bound directly to the new-project form.
    pub draft: Draft,
    config: StoreConfig,
    next_project_id: ProjectId,
    clock: fn() -> NaiveDate,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self::with_clock(config, local_today)
    }

    /// Create a store whose notion of "today" comes from `clock`.
    pub fn with_clock(config: StoreConfig, clock: fn() -> NaiveDate) -> Self {
        Self {
            projects: Vec::new(),
            draft: Draft::new(clock()),
            config,
            next_project_id: 1,
            clock,
        }
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn metrics(&self) -> DashboardMetrics {
        DashboardMetrics::from_projects(&self.projects)
    }

    /// Projects whose name contains `query`, ignoring case.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Project> + 'a {
        let needle = query.trim().to_lowercase();
        self.projects
            .iter()
            .filter(move |p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
    }

    // --- Draft ---

    /// Start a fresh draft for the creation form.
    pub fn open_draft(&mut self) {
        self.draft = Draft::new(self.today());
        debug!("draft opened");
    }

    pub fn cancel_draft(&mut self) {
        self.draft = Draft::new(self.today());
        debug!("draft discarded");
    }

    pub fn add_draft_equipment(&mut self, name: &str) -> bool {
        let added = self.draft.add_equipment(name);
        if added {
            debug!(count = self.draft.equipment.len(), "equipment added to draft");
        }
        added
    }

    pub fn remove_draft_equipment(&mut self, index: usize) -> bool {
        let removed = self.draft.remove_equipment(index);
        if !removed {
            debug!(index, "no draft equipment at index");
        }
        removed
    }

    pub fn add_draft_task(&mut self, name: &str, due_date: NaiveDate) -> Option<TaskId> {
        let today = self.today();
        let id = self
            .draft
            .add_task(name, due_date, self.config.id_scheme, today);
        if let Some(id) = id {
            debug!(task_id = id, %due_date, "task added to draft");
        }
        id
    }

    pub fn remove_draft_task(&mut self, task_id: TaskId) -> bool {
        let removed = self.draft.remove_task(task_id);
        if !removed {
            debug!(task_id, "no draft task with id");
        }
        removed
    }

    /// Validate the draft and turn it into a project.
    ///
    /// On failure the draft is left untouched so the user can correct it. On
    /// success the draft is reset, which also makes an accidental second
    /// submit fail validation instead of duplicating the project.
    pub fn commit_draft(&mut self) -> Result<ProjectId, CommitError> {
        if let Err(e) = self.draft.validate() {
            warn!(error = %e, "draft rejected");
            return Err(e);
        }

        let id = match self.config.id_scheme {
            IdScheme::Monotonic => self.next_project_id,
            IdScheme::Sequential => self.projects.len() as ProjectId + 1,
        };
        self.next_project_id = self.next_project_id.max(id) + 1;

        let fresh = Draft::new(self.today());
        let draft = std::mem::replace(&mut self.draft, fresh);
        let project = Project {
            id,
            name: draft.name.trim().to_string(),
            progress: 0,
            workers: draft.workers,
            equipment: draft.equipment,
            budget: draft.budget,
            spent: 0,
            tasks: draft.tasks,
            start_date: draft.start_date,
            end_date: draft.end_date,
        };
        info!(
            project_id = id,
            name = %project.name,
            tasks = project.tasks.len(),
            "project created"
        );
        self.projects.push(project);
        Ok(id)
    }

    // --- Projects ---

    /// Set a task's status and recompute its project's progress.
    ///
    /// Unknown project or task ids leave the store unchanged and return `false`.
    pub fn update_task_status(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
        status: TaskStatus,
    ) -> bool {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == project_id) else {
            debug!(project_id, "status update for unknown project");
            return false;
        };
        if !project.set_task_status(task_id, status) {
            debug!(project_id, task_id, "status update for unknown task");
            return false;
        }
        debug!(
            project_id,
            task_id,
            status = status.as_str(),
            progress = project.progress,
            "task status updated"
        );
        true
    }

    /// Book `amount` against a project's budget. Returns the new spent total.
    pub fn record_expense(
        &mut self,
        project_id: ProjectId,
        amount: u64,
    ) -> Result<u64, ExpenseError> {
        if amount == 0 {
            return Err(ExpenseError::ZeroAmount);
        }
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or(ExpenseError::ProjectNotFound(project_id))?;
        let remaining = project.remaining_budget();
        if amount > remaining {
            warn!(project_id, amount, remaining, "expense exceeds budget");
            return Err(ExpenseError::OverBudget { amount, remaining });
        }
        project.spent += amount;
        info!(project_id, amount, spent = project.spent, "expense recorded");
        Ok(project.spent)
    }
}
