use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::model::{CommitError, ProjectId, Store, StoreConfig, TaskId, TaskStatus};
use crate::ui;

/// Main application state.
pub struct DashboardApp {
    pub store: Store,

    // Dialog state
    pub show_new_project: bool,
    pub show_about: bool,
    pub validation_error: Option<CommitError>,

    // Project list state
    pub search_query: String,
    pub expense_inputs: BTreeMap<ProjectId, u64>,

    // Status message
    pub status_message: String,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: StoreConfig, sample: bool) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let mut store = Store::new(config);
        if sample {
            seed_sample_projects(&mut store);
        }

        Self::with_store(store)
    }

    pub fn with_store(store: Store) -> Self {
        Self {
            store,
            show_new_project: false,
            show_about: false,
            validation_error: None,
            search_query: String::new(),
            expense_inputs: BTreeMap::new(),
            status_message: "Ready".to_string(),
        }
    }

    // --- New project form ---

    pub fn open_new_project(&mut self) {
        self.store.open_draft();
        self.validation_error = None;
        self.show_new_project = true;
    }

    pub fn cancel_new_project(&mut self) {
        self.store.cancel_draft();
        self.show_new_project = false;
    }

    pub fn submit_new_project(&mut self) {
        match self.store.commit_draft() {
            Ok(id) => {
                let name = self
                    .store
                    .project(id)
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                self.show_new_project = false;
                self.validation_error = None;
                self.status_message = format!("Project '{}' created", name);
            }
            Err(e) => {
                self.validation_error = Some(e);
                self.status_message = e.to_string();
            }
        }
    }

    // --- Project operations ---

    pub fn set_task_status(&mut self, project_id: ProjectId, task_id: TaskId, status: TaskStatus) {
        if self.store.update_task_status(project_id, task_id, status) {
            if let Some(project) = self.store.project(project_id) {
                self.status_message = format!(
                    "'{}' is now {}% complete",
                    project.name, project.progress
                );
            }
        }
    }

    pub fn record_expense(&mut self, project_id: ProjectId, amount: u64) {
        match self.store.record_expense(project_id, amount) {
            Ok(spent) => {
                self.expense_inputs.insert(project_id, 0);
                self.status_message = format!("Expense recorded, {} spent", spent);
            }
            Err(e) => self.status_message = format!("Expense rejected: {}", e),
        }
    }

    pub fn export_report(&mut self) {
        if self.store.projects().is_empty() {
            self.status_message = "Nothing to export, no projects yet".to_string();
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name("projects-report.csv")
            .save_file()
        {
            match crate::io::export_report(self.store.projects(), &path) {
                Ok(rows) => {
                    info!(rows, path = %path.display(), "report exported");
                    self.status_message = format!("Exported {} rows to CSV", rows);
                }
                Err(e) => {
                    warn!(error = %e, "report export failed");
                    self.status_message = format!("Report export failed: {}", e);
                }
            }
        }
    }
}

/// Fill the store with a few demonstration projects.
fn seed_sample_projects(store: &mut Store) {
    let today = store.today();
    let days = chrono::Duration::days;

    let samples: [(&str, u32, u64, u64, &[&str], &[(&str, i64, TaskStatus)]); 3] = [
        (
            "Residential Tower A",
            45,
            2_500_000,
            1_100_000,
            &["Tower Crane", "Concrete Mixer", "Excavator"],
            &[
                ("Excavation", -30, TaskStatus::Completed),
                ("Foundation", -5, TaskStatus::Completed),
                ("Structural Frame", 40, TaskStatus::InProgress),
                ("Facade", 120, TaskStatus::Pending),
            ],
        ),
        (
            "Harbor Warehouse",
            18,
            800_000,
            120_000,
            &["Forklift", "Mobile Crane"],
            &[
                ("Site Survey", -10, TaskStatus::Completed),
                ("Steel Erection", 25, TaskStatus::Pending),
            ],
        ),
        (
            "Road Bridge Repair",
            12,
            450_000,
            0,
            &["Scaffolding"],
            &[],
        ),
    ];

    for (name, workers, budget, spent, equipment, tasks) in samples {
        store.open_draft();
        store.draft.name = name.to_string();
        store.draft.workers = workers;
        store.draft.budget = budget;
        store.draft.start_date = today - days(45);
        store.draft.end_date = today + days(180);
        for item in equipment {
            store.add_draft_equipment(item);
        }
        for (task, offset, _) in tasks {
            store.add_draft_task(task, today + days(*offset));
        }

        let id = match store.commit_draft() {
            Ok(id) => id,
            Err(e) => {
                warn!(error = %e, name, "sample project rejected");
                continue;
            }
        };
        let task_ids: Vec<_> = store
            .project(id)
            .map(|p| p.tasks.iter().map(|t| t.id).collect())
            .unwrap_or_default();
        for (task_id, (_, _, status)) in task_ids.into_iter().zip(tasks.iter()) {
            store.update_task_status(id, task_id, *status);
        }
        if spent > 0 {
            if let Err(e) = store.record_expense(id, spent) {
                warn!(error = %e, name, "sample expense rejected");
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        let should_create = ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::N));
        if should_create && !self.show_new_project {
            self.open_new_project();
        }

        // Top panel: menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui::toolbar::show_menu_bar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "Projects: {}",
                                self.store.projects().len()
                            ))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Central panel: header, stat cards, project list
        let mut list_action = ui::project_list::ProjectListAction::None;
        let central_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::same(24.0));
        egui::CentralPanel::default()
            .frame(central_frame)
            .show(ctx, |ui| {
                ui::toolbar::show_header(self, ui);
                ui.add_space(16.0);

                let metrics = self.store.metrics();
                ui::stat_cards::show_stat_cards(&metrics, ui);
                ui.add_space(16.0);

                list_action = ui::project_list::show_project_list(
                    self.store.search(&self.search_query),
                    &mut self.search_query,
                    &mut self.expense_inputs,
                    ui,
                );
            });

        match list_action {
            ui::project_list::ProjectListAction::SetTaskStatus {
                project_id,
                task_id,
                status,
            } => self.set_task_status(project_id, task_id, status),
            ui::project_list::ProjectListAction::RecordExpense { project_id, amount } => {
                self.record_expense(project_id, amount)
            }
            ui::project_list::ProjectListAction::None => {}
        }

        // Dialogs
        if self.show_new_project {
            ui::dialogs::show_new_project_dialog(self, ctx);
        }
        if self.validation_error.is_some() {
            ui::dialogs::show_validation_dialog(self, ctx);
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn app() -> DashboardApp {
        DashboardApp::with_store(Store::with_clock(StoreConfig::default(), fixed_today))
    }

    #[test]
    fn failed_submit_keeps_form_open_with_notice() {
        let mut app = app();
        app.open_new_project();
        app.store.draft.name = "Tower A".to_string();
        app.submit_new_project();

        assert!(app.show_new_project);
        assert_eq!(app.validation_error, Some(CommitError::MissingBudget));
        assert_eq!(app.store.draft.name, "Tower A");
    }

    #[test]
    fn successful_submit_closes_form() {
        let mut app = app();
        app.open_new_project();
        app.store.draft.name = "Tower A".to_string();
        app.store.draft.workers = 10;
        app.store.draft.budget = 1000;
        app.submit_new_project();

        assert!(!app.show_new_project);
        assert_eq!(app.validation_error, None);
        assert_eq!(app.store.projects().len(), 1);
        assert_eq!(app.status_message, "Project 'Tower A' created");
    }

    #[test]
    fn sample_projects_are_consistent() {
        let mut store = Store::with_clock(StoreConfig::default(), fixed_today);
        seed_sample_projects(&mut store);

        let projects = store.projects();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0].progress, 50);
        assert_eq!(projects[1].progress, 50);
        assert_eq!(projects[2].progress, 0);
        assert!(projects.iter().all(|p| p.spent <= p.budget));
        assert_eq!(store.metrics().total_equipment, 6);
    }

    #[test]
    fn rejected_expense_leaves_input() {
        let mut app = app();
        seed_sample_projects(&mut app.store);
        app.expense_inputs.insert(3, 999_999_999);
        app.record_expense(3, 999_999_999);
        assert!(app.status_message.starts_with("Expense rejected"));
        assert_eq!(app.store.project(3).unwrap().spent, 0);
    }
}
