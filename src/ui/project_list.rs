use std::collections::BTreeMap;

use crate::model::{Project, ProjectId, TaskId, TaskStatus};
use crate::ui::theme;
use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;

/// Actions that the project list can request.
pub enum ProjectListAction {
    None,
    SetTaskStatus {
        project_id: ProjectId,
        task_id: TaskId,
        status: TaskStatus,
    },
    RecordExpense {
        project_id: ProjectId,
        amount: u64,
    },
}

/// Render the searchable list of project cards.
///
/// `expense_inputs` holds the per-project amount typed into the expense field.
pub fn show_project_list<'a>(
    projects: impl Iterator<Item = &'a Project>,
    search_query: &mut String,
    expense_inputs: &mut BTreeMap<ProjectId, u64>,
    ui: &mut Ui,
) -> ProjectListAction {
    let mut action = ProjectListAction::None;

    ui.horizontal(|ui| {
        ui.label(RichText::new("Current Projects").strong().size(17.0));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(
                egui::TextEdit::singleline(search_query)
                    .hint_text(format!("{} Search projects...", icons::MAGNIFYING_GLASS))
                    .desired_width(220.0),
            );
        });
    });
    ui.add_space(6.0);

    let mut shown = 0;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for project in projects {
                shown += 1;
                let expense = expense_inputs.entry(project.id).or_insert(0);
                let card_action = show_project_card(project, expense, ui);
                if !matches!(card_action, ProjectListAction::None) {
                    action = card_action;
                }
                ui.add_space(8.0);
            }

            if shown == 0 {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    let msg = if search_query.trim().is_empty() {
                        "No projects yet. Use \"New Project\" to add one."
                    } else {
                        "No projects match the search."
                    };
                    ui.label(RichText::new(msg).color(theme::TEXT_DIM));
                });
            }
        });

    action
}

fn show_project_card(project: &Project, expense: &mut u64, ui: &mut Ui) -> ProjectListAction {
    let mut action = ProjectListAction::None;

    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        // Title + dates
        ui.horizontal(|ui| {
            ui.label(RichText::new(&project.name).strong().size(15.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!(
                        "{} {} → {}",
                        icons::CALENDAR,
                        project.start_date.format("%Y-%m-%d"),
                        project.end_date.format("%Y-%m-%d")
                    ))
                    .size(11.0)
                    .color(theme::TEXT_SECONDARY),
                );
            });
        });

        ui.add(
            egui::ProgressBar::new(f32::from(project.progress) / 100.0)
                .text(format!("{}%", project.progress))
                .fill(theme::ACCENT)
                .rounding(egui::Rounding::same(3.0)),
        );
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{} {} workers", icons::USERS, project.workers))
                    .color(theme::TEXT_SECONDARY),
            );
            ui.separator();
            ui.label(
                RichText::new(format!(
                    "{} {} / {} spent ({}%)",
                    icons::CURRENCY_DOLLAR,
                    project.spent,
                    project.budget,
                    project.budget_used_pct()
                ))
                .color(theme::TEXT_SECONDARY),
            );
        });

        // Equipment chips
        if !project.equipment.is_empty() {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(icons::TRUCK).color(theme::TEXT_SECONDARY));
                for item in &project.equipment {
                    egui::Frame::default()
                        .fill(theme::BG_FIELD)
                        .rounding(egui::Rounding::same(10.0))
                        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
                        .show(ui, |ui| {
                            ui.label(RichText::new(item).size(11.0));
                        });
                }
            });
        }

        ui.add_space(4.0);
        ui.separator();

        // Tasks
        if project.tasks.is_empty() {
            ui.label(RichText::new("No tasks").size(11.0).color(theme::TEXT_DIM));
        }
        for (idx, task) in project.tasks.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(theme::status_icon(task.status))
                        .color(theme::status_color(task.status)),
                );
                ui.label(&task.name);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut status = task.status;
                    egui::ComboBox::from_id_salt(("task-status", project.id, idx))
                        .selected_text(status.label())
                        .width(110.0)
                        .show_ui(ui, |ui| {
                            for option in TaskStatus::ALL {
                                ui.selectable_value(&mut status, option, option.label());
                            }
                        });
                    if status != task.status {
                        action = ProjectListAction::SetTaskStatus {
                            project_id: project.id,
                            task_id: task.id,
                            status,
                        };
                    }
                    ui.label(
                        RichText::new(task.due_date.format("%Y-%m-%d").to_string())
                            .size(11.0)
                            .color(theme::TEXT_SECONDARY),
                    );
                });
            });
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Expense").size(11.0).color(theme::TEXT_SECONDARY));
            ui.add(
                egui::DragValue::new(expense)
                    .range(0..=project.remaining_budget())
                    .speed(10.0),
            );
            let btn = egui::Button::new(RichText::new("Record").color(Color32::WHITE))
                .fill(theme::ACCENT);
            if ui.add_enabled(*expense > 0, btn).clicked() {
                action = ProjectListAction::RecordExpense {
                    project_id: project.id,
                    amount: *expense,
                };
            }
        });
    });

    action
}
