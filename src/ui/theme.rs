use egui::{Color32, FontId, Rounding, Stroke, Visuals};

use crate::model::TaskStatus;

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_DARK: Color32 = Color32::from_rgb(24, 24, 32);
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 30, 40);
pub const BG_CARD: Color32 = Color32::from_rgb(36, 38, 50);
pub const BG_FIELD: Color32 = Color32::from_rgb(20, 20, 28);
pub const BG_SELECTED: Color32 = Color32::from_rgba_premultiplied(80, 140, 220, 45);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(50, 52, 64);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 160, 178);
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 105, 120);

pub const ACCENT: Color32 = Color32::from_rgb(80, 140, 220);
pub const DANGER: Color32 = Color32::from_rgb(229, 57, 53);

// Stat card badges
pub const STAT_BLUE: Color32 = Color32::from_rgb(59, 130, 246);
pub const STAT_GREEN: Color32 = Color32::from_rgb(34, 197, 94);
pub const STAT_YELLOW: Color32 = Color32::from_rgb(234, 179, 8);
pub const STAT_PURPLE: Color32 = Color32::from_rgb(168, 85, 247);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const CARD_ROUNDING: f32 = 8.0;
pub const CARD_PADDING: f32 = 14.0;
pub const STAT_CARD_HEIGHT: f32 = 110.0;
pub const STATUS_BAR_HEIGHT: f32 = 22.0;
pub const DIALOG_WIDTH: f32 = 460.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_title() -> FontId {
    FontId::proportional(24.0)
}

pub fn font_stat_value() -> FontId {
    FontId::proportional(22.0)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.0)
}

// ── Task status colors ───────────────────────────────────────────────────────

pub fn status_color(status: TaskStatus) -> Color32 {
    match status {
        TaskStatus::Pending => TEXT_DIM,
        TaskStatus::InProgress => STAT_YELLOW,
        TaskStatus::Completed => STAT_GREEN,
    }
}

pub fn status_icon(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => egui_phosphor::regular::CIRCLE,
        TaskStatus::InProgress => egui_phosphor::regular::CLOCK,
        TaskStatus::Completed => egui_phosphor::regular::CHECK_CIRCLE,
    }
}

/// Frame used for every card on the dashboard.
pub fn card_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(BG_CARD)
        .rounding(Rounding::same(CARD_ROUNDING))
        .inner_margin(egui::Margin::same(CARD_PADDING))
        .stroke(Stroke::new(1.0, BORDER_SUBTLE))
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

const WIDGET_ROUNDING: f32 = 6.0;

fn paint_widget(
    widget: &mut egui::style::WidgetVisuals,
    fill: Color32,
    border: Color32,
    text: Color32,
) {
    widget.bg_fill = fill;
    widget.weak_bg_fill = fill;
    widget.bg_stroke = Stroke::new(1.0, border);
    widget.fg_stroke = Stroke::new(1.0, text);
    widget.rounding = Rounding::same(WIDGET_ROUNDING);
}

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_DARK;
    visuals.window_fill = BG_CARD;
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.window_rounding = Rounding::same(CARD_ROUNDING);
    visuals.menu_rounding = Rounding::same(WIDGET_ROUNDING);
    visuals.extreme_bg_color = BG_FIELD;
    visuals.faint_bg_color = BG_PANEL;
    visuals.striped = false;

    let widgets = &mut visuals.widgets;
    paint_widget(&mut widgets.noninteractive, BG_CARD, BORDER_SUBTLE, TEXT_SECONDARY);
    paint_widget(&mut widgets.inactive, BG_PANEL, BORDER_SUBTLE, TEXT_PRIMARY);
    paint_widget(&mut widgets.hovered, BG_FIELD, ACCENT, TEXT_PRIMARY);
    paint_widget(&mut widgets.active, BG_SELECTED, ACCENT, Color32::WHITE);
    paint_widget(&mut widgets.open, BG_FIELD, ACCENT, TEXT_PRIMARY);

    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    visuals.hyperlink_color = ACCENT;

    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(10.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 4.0);
        style.spacing.interact_size.y = 24.0;
    });
}
