use thiserror::Error;

use super::project::ProjectId;

/// Reasons a draft cannot be committed as a project.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CommitError {
    #[error("please fill in all required fields: project name is missing")]
    MissingName,

    #[error("please fill in all required fields: budget must be greater than zero")]
    MissingBudget,

    #[error("please fill in all required fields: number of workers must be greater than zero")]
    MissingWorkers,

    #[error("budget must not exceed {max}")]
    BudgetTooLarge { max: u64 },

    #[error("end date must not be before start date")]
    EndBeforeStart,
}

/// Reasons an expense cannot be booked against a project.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ExpenseError {
    #[error("project {0} not found")]
    ProjectNotFound(ProjectId),

    #[error("expense amount must be greater than zero")]
    ZeroAmount,

    #[error("expense of {amount} exceeds remaining budget of {remaining}")]
    OverBudget { amount: u64, remaining: u64 },
}
