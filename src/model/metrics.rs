use super::project::Project;

/// Integer percentage `round(100 * part / whole)`, rounding halves up.
///
/// Returns 0 when `whole` is zero instead of a non-finite value. The result
/// saturates at `u8::MAX` for inputs where `part` far exceeds `whole`.
pub fn percent(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (u128::from(part), u128::from(whole));
    let pct = (200 * part + whole) / (2 * whole);
    u8::try_from(pct).unwrap_or(u8::MAX)
}

/// Summary figures shown in the dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub active_projects: usize,
    pub total_budget: u64,
    pub total_spent: u64,
    pub total_workers: u64,
    pub total_equipment: usize,
    pub budget_consumed_pct: u8,
}

impl DashboardMetrics {
    pub fn from_projects(projects: &[Project]) -> Self {
        // Totals saturate rather than overflow on oversized budgets.
        let total = |amount: fn(&Project) -> u64| {
            projects
                .iter()
                .map(amount)
                .fold(0u64, |acc, v| acc.saturating_add(v))
        };
        let total_budget = total(|p| p.budget);
        let total_spent = total(|p| p.spent);
        Self {
            active_projects: projects.len(),
            total_budget,
            total_spent,
            total_workers: total(|p| u64::from(p.workers)),
            total_equipment: projects.iter().map(|p| p.equipment.len()).sum(),
            budget_consumed_pct: percent(total_spent, total_budget),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn project(id: u32, budget: u64, spent: u64, workers: u32, equipment: &[&str]) -> Project {
        let day = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        Project {
            id,
            name: format!("Project {id}"),
            progress: 0,
            workers,
            equipment: equipment.iter().map(|e| e.to_string()).collect(),
            budget,
            spent,
            tasks: Vec::new(),
            start_date: day,
            end_date: day,
        }
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(1, 8), 13); // 12.5
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(4, 4), 100);
        assert_eq!(percent(0, 4), 0);
    }

    #[test]
    fn percent_of_zero_is_zero() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(50, 0), 0);
    }

    #[test]
    fn aggregates_two_projects() {
        let projects = vec![
            project(1, 1000, 200, 10, &["Crane", "Mixer"]),
            project(2, 3000, 800, 25, &["Crane"]),
        ];
        assert_eq!(
            DashboardMetrics::from_projects(&projects),
            DashboardMetrics {
                active_projects: 2,
                total_budget: 4000,
                total_spent: 1000,
                total_workers: 35,
                total_equipment: 3,
                budget_consumed_pct: 25,
            }
        );
    }

    #[test]
    fn oversized_budgets_saturate_instead_of_overflowing() {
        let projects = vec![
            project(1, u64::MAX, u64::MAX / 2, 1, &[]),
            project(2, u64::MAX, u64::MAX / 2, 1, &[]),
        ];
        let metrics = DashboardMetrics::from_projects(&projects);
        assert_eq!(metrics.total_budget, u64::MAX);
        assert_eq!(metrics.total_spent, u64::MAX - 1);
        assert_eq!(metrics.budget_consumed_pct, 100);
    }

    #[test]
    fn empty_dashboard_reports_zero_consumption() {
        let metrics = DashboardMetrics::from_projects(&[]);
        assert_eq!(metrics, DashboardMetrics::default());
        assert_eq!(metrics.budget_consumed_pct, 0);
    }
}
