use crate::model::DashboardMetrics;
use crate::ui::theme;
use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;

struct StatCard {
    icon: &'static str,
    title: &'static str,
    value: String,
    caption: Option<String>,
    color: Color32,
}

fn cards(metrics: &DashboardMetrics) -> [StatCard; 4] {
    [
        StatCard {
            icon: icons::CALENDAR,
            title: "Active Projects",
            value: metrics.active_projects.to_string(),
            caption: None,
            color: theme::STAT_BLUE,
        },
        StatCard {
            icon: icons::USERS,
            title: "Total Workers",
            value: metrics.total_workers.to_string(),
            caption: None,
            color: theme::STAT_GREEN,
        },
        StatCard {
            icon: icons::TRUCK,
            title: "Equipment",
            value: metrics.total_equipment.to_string(),
            caption: None,
            color: theme::STAT_YELLOW,
        },
        StatCard {
            icon: icons::CURRENCY_DOLLAR,
            title: "Budget Consumed",
            value: format!("{}%", metrics.budget_consumed_pct),
            caption: Some(format!(
                "{} of {} spent",
                metrics.total_spent, metrics.total_budget
            )),
            color: theme::STAT_PURPLE,
        },
    ]
}

/// Render the row of summary cards.
pub fn show_stat_cards(metrics: &DashboardMetrics, ui: &mut Ui) {
    let cards = cards(metrics);
    ui.columns(cards.len(), |columns| {
        for (col, card) in columns.iter_mut().zip(cards) {
            theme::card_frame().show(col, |ui| {
                ui.set_min_height(theme::STAT_CARD_HEIGHT);
                ui.set_width(ui.available_width());

                // Colored icon badge
                egui::Frame::default()
                    .fill(card.color)
                    .rounding(egui::Rounding::same(6.0))
                    .inner_margin(egui::Margin::same(8.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(card.icon).size(20.0).color(Color32::WHITE));
                    });
                ui.add_space(6.0);
                ui.label(RichText::new(card.title).size(12.0).color(theme::TEXT_SECONDARY));
                ui.label(RichText::new(card.value).font(theme::font_stat_value()).strong());
                if let Some(caption) = card.caption {
                    ui.label(RichText::new(caption).size(10.5).color(theme::TEXT_DIM));
                }
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_card_shows_percentage() {
        let metrics = DashboardMetrics {
            active_projects: 2,
            total_budget: 4000,
            total_spent: 1000,
            total_workers: 30,
            total_equipment: 5,
            budget_consumed_pct: 25,
        };
        let values: Vec<_> = cards(&metrics).into_iter().map(|c| c.value).collect();
        assert_eq!(values, vec!["2", "30", "5", "25%"]);
    }

    #[test]
    fn empty_dashboard_shows_zero_percent() {
        let cards = cards(&DashboardMetrics::default());
        assert_eq!(cards[3].value, "0%");
        assert_eq!(cards[3].caption.as_deref(), Some("0 of 0 spent"));
    }
}
