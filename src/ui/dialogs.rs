use crate::app::DashboardApp;
use crate::model::draft::MAX_BUDGET;
use crate::ui::theme;
use egui::{Color32, Context, RichText, Window};
use egui_phosphor::regular as icons;

/// Render the "New Project" form.
pub fn show_new_project_dialog(app: &mut DashboardApp, ctx: &Context) {
    let mut submit = false;
    let mut cancel = false;
    let mut add_equipment = false;
    let mut remove_equipment: Option<usize> = None;
    let mut add_task = false;
    let mut remove_task = None;

    Window::new(RichText::new("New Project").strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([theme::DIALOG_WIDTH, 0.0])
        .show(ctx, |ui| {
            let draft = &mut app.store.draft;

            egui::Grid::new("new_project_grid")
                .num_columns(2)
                .striped(false)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Project name").color(theme::TEXT_SECONDARY));
                    ui.add_sized(
                        [260.0, 24.0],
                        egui::TextEdit::singleline(&mut draft.name).hint_text("Project name..."),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Workers").color(theme::TEXT_SECONDARY));
                    ui.add(egui::DragValue::new(&mut draft.workers).range(0..=10_000));
                    ui.end_row();

                    ui.label(RichText::new("Budget").color(theme::TEXT_SECONDARY));
                    ui.add(
                        egui::DragValue::new(&mut draft.budget)
                            .range(0..=MAX_BUDGET)
                            .speed(100.0),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Start date").color(theme::TEXT_SECONDARY));
                    ui.add(
                        egui_extras::DatePickerButton::new(&mut draft.start_date)
                            .id_salt("dlg_dp_start"),
                    );
                    ui.end_row();

                    ui.label(RichText::new("End date").color(theme::TEXT_SECONDARY));
                    ui.add(
                        egui_extras::DatePickerButton::new(&mut draft.end_date)
                            .id_salt("dlg_dp_end"),
                    );
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.separator();

            // ── Equipment ────────────────────────────────────────────
            ui.label(RichText::new("Equipment").strong());
            ui.horizontal(|ui| {
                let resp = ui.add_sized(
                    [260.0, 24.0],
                    egui::TextEdit::singleline(&mut draft.new_equipment)
                        .hint_text("Equipment name..."),
                );
                let entered = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button(icons::PLUS).clicked() || entered {
                    add_equipment = true;
                }
            });
            ui.horizontal_wrapped(|ui| {
                for (idx, item) in draft.equipment.iter().enumerate() {
                    let chip = egui::Button::new(
                        RichText::new(format!("{item}  {}", icons::X)).size(11.0),
                    )
                    .fill(theme::BG_FIELD)
                    .rounding(egui::Rounding::same(10.0));
                    if ui.add(chip).on_hover_text("Remove").clicked() {
                        remove_equipment = Some(idx);
                    }
                }
            });

            ui.add_space(6.0);
            ui.separator();

            // ── Tasks ────────────────────────────────────────────────
            ui.label(RichText::new("Tasks").strong());
            ui.horizontal(|ui| {
                ui.add_sized(
                    [200.0, 24.0],
                    egui::TextEdit::singleline(&mut draft.new_task.name).hint_text("Task name..."),
                );
                ui.add(
                    egui_extras::DatePickerButton::new(&mut draft.new_task.due_date)
                        .id_salt("dlg_dp_due"),
                );
                if ui.button(icons::PLUS).clicked() {
                    add_task = true;
                }
            });
            for task in &draft.tasks {
                ui.horizontal(|ui| {
                    ui.label(&task.name);
                    ui.label(
                        RichText::new(task.due_date.format("%Y-%m-%d").to_string())
                            .size(11.0)
                            .color(theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let del = ui.add(
                            egui::Button::new(RichText::new(icons::X).color(theme::TEXT_DIM))
                                .frame(false),
                        );
                        if del.on_hover_text("Remove task").clicked() {
                            remove_task = Some(task.id);
                        }
                    });
                });
            }

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let create_btn = egui::Button::new(RichText::new("Create").color(Color32::WHITE))
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([80.0, 28.0], create_btn).clicked() {
                    submit = true;
                }
                if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
                    cancel = true;
                }
            });
            ui.add_space(2.0);
        });

    // Dispatch outside the window closure so the store is not borrowed twice
    if add_equipment {
        let input = app.store.draft.new_equipment.clone();
        app.store.add_draft_equipment(&input);
    }
    if let Some(idx) = remove_equipment {
        app.store.remove_draft_equipment(idx);
    }
    if add_task {
        let input = app.store.draft.new_task.clone();
        app.store.add_draft_task(&input.name, input.due_date);
    }
    if let Some(id) = remove_task {
        app.store.remove_draft_task(id);
    }
    if submit {
        app.submit_new_project();
    }
    if cancel || (app.validation_error.is_none() && ctx.input(|i| i.key_pressed(egui::Key::Escape)))
    {
        app.cancel_new_project();
    }
}

/// Render the blocking notice shown when a draft fails validation.
pub fn show_validation_dialog(app: &mut DashboardApp, ctx: &Context) {
    let Some(error) = app.validation_error else {
        return;
    };
    let mut should_close = false;
    Window::new(RichText::new(format!("{} Missing information", icons::WARNING_CIRCLE)).strong())
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label(RichText::new(error.to_string()).color(theme::DANGER));
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                if ui.add_sized([80.0, 28.0], egui::Button::new("OK")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.validation_error = None;
    }
}

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut DashboardApp, ctx: &Context) {
    let mut should_close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([280.0, 160.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(RichText::new("Site Dashboard").strong());
                ui.add_space(2.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(10.0);
                ui.label("Construction project tracking");
                ui.label("built with Rust and egui.");
                ui.add_space(14.0);
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}
