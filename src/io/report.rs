use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::model::Project;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create report file: {0}")]
    Create(#[source] std::io::Error),

    #[error("failed to write report: {0}")]
    Write(#[from] csv::Error),

    #[error("failed to flush report: {0}")]
    Flush(#[from] std::io::Error),
}

const HEADER: [&str; 11] = [
    "Project",
    "Progress",
    "Workers",
    "Budget",
    "Spent",
    "Start Date",
    "End Date",
    "Equipment",
    "Task",
    "Status",
    "Due Date",
];

fn fmt_date(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Write a semicolon-delimited summary of `projects` to `writer`.
///
/// One row per task; a project without tasks still gets a single row with
/// the task columns left empty. Returns the number of data rows written.
pub fn write_report<W: Write>(projects: &[Project], writer: W) -> Result<usize, ReportError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(HEADER)?;

    let mut rows = 0;
    for project in projects {
        let summary = [
            project.name.clone(),
            format!("{}%", project.progress),
            project.workers.to_string(),
            project.budget.to_string(),
            project.spent.to_string(),
            fmt_date(project.start_date),
            fmt_date(project.end_date),
            project.equipment.join(", "),
        ];

        if project.tasks.is_empty() {
            wtr.write_record(summary.iter().map(String::as_str).chain(["", "", ""]))?;
            rows += 1;
            continue;
        }

        for task in &project.tasks {
            let due = fmt_date(task.due_date);
            wtr.write_record(
                summary
                    .iter()
                    .map(String::as_str)
                    .chain([task.name.as_str(), task.status.label(), due.as_str()]),
            )?;
            rows += 1;
        }
    }

    wtr.flush()?;
    Ok(rows)
}

/// Export the project summary to a CSV file at `path`.
pub fn export_report(projects: &[Project], path: &Path) -> Result<usize, ReportError> {
    let file = std::fs::File::create(path).map_err(ReportError::Create)?;
    write_report(projects, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Task;
    use crate::model::TaskStatus;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    fn project(id: u32, name: &str, tasks: Vec<Task>) -> Project {
        Project {
            id,
            name: name.to_string(),
            progress: 50,
            workers: 12,
            equipment: vec!["Crane".to_string(), "Mixer".to_string()],
            budget: 1000,
            spent: 250,
            tasks,
            start_date: day(1),
            end_date: day(28),
        }
    }

    #[test]
    fn writes_one_row_per_task() {
        let done = Task {
            status: TaskStatus::Completed,
            ..Task::new(1, "Foundation", day(10))
        };
        let projects = vec![
            project(1, "Tower A", vec![done, Task::new(2, "Walls", day(20))]),
            project(2, "Depot", Vec::new()),
        ];

        let mut out = Vec::new();
        let rows = write_report(&projects, &mut out).unwrap();
        assert_eq!(rows, 3);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Project;Progress;Workers;Budget;Spent;Start Date;End Date;Equipment;Task;Status;Due Date",
                "Tower A;50%;12;1000;250;2026-02-01;2026-02-28;Crane, Mixer;Foundation;Completed;2026-02-10",
                "Tower A;50%;12;1000;250;2026-02-01;2026-02-28;Crane, Mixer;Walls;Pending;2026-02-20",
                "Depot;50%;12;1000;250;2026-02-01;2026-02-28;Crane, Mixer;;;",
            ]
        );
    }

    #[test]
    fn empty_dashboard_writes_header_only() {
        let mut out = Vec::new();
        assert_eq!(write_report(&[], &mut out).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
