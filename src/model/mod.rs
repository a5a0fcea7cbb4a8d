pub mod draft;
pub mod error;
pub mod metrics;
pub mod project;
pub mod store;
pub mod task;

pub use error::CommitError;
pub use metrics::DashboardMetrics;
pub use project::{Project, ProjectId};
pub use store::{IdScheme, Store, StoreConfig};
pub use task::{TaskId, TaskStatus};
