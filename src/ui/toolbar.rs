use crate::app::DashboardApp;
use crate::ui::theme;
use egui::{menu, Color32, RichText, Ui};
use egui_phosphor::regular as icons;

/// Render the menu bar.
pub fn show_menu_bar(app: &mut DashboardApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  "), |ui| {
            if ui.button("  New Project").clicked() {
                app.open_new_project();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Export Report...").clicked() {
                app.export_report();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  "), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });
    });
}

/// Render the dashboard title and the "New Project" button.
pub fn show_header(app: &mut DashboardApp, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new("Construction Project Management")
                    .font(theme::font_title())
                    .strong(),
            );
            ui.label(RichText::new("Main dashboard").color(theme::TEXT_SECONDARY));
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let btn = egui::Button::new(
                RichText::new(format!("{}  New Project", icons::PLUS)).color(Color32::WHITE),
            )
            .fill(theme::ACCENT)
            .rounding(egui::Rounding::same(5.0));
            if ui.add_sized([130.0, 32.0], btn).clicked() {
                app.open_new_project();
            }
        });
    });
}
