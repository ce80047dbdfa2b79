//! Shared UI components.

use eframe::egui::{self, Color32, CornerRadius, Margin, Response, RichText, Sense, StrokeKind, Ui};
use egui_phosphor::regular::{ARROW_LEFT, STAR};

use crate::models::Role;

/// Render a clickable dashboard card with dynamic size.
///
/// Returns the response which can be checked for `.clicked()`.
pub fn dashboard_card(ui: &mut Ui, title: &str, description: &str, icon: &str, size: egui::Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);

        // 200 px wide is the reference size
        let scale = size.x / 200.0;

        ui.painter().rect_filled(rect, 8.0, visuals.bg_fill);
        ui.painter()
            .rect_stroke(rect, 8.0, visuals.bg_stroke, StrokeKind::Outside);

        ui.painter().text(
            egui::pos2(rect.center().x, rect.top() + size.y * 0.23),
            egui::Align2::CENTER_CENTER,
            icon,
            egui::FontId::proportional(36.0 * scale),
            colors::PRIMARY,
        );
        ui.painter().text(
            egui::pos2(rect.center().x, rect.center().y + size.y * 0.07),
            egui::Align2::CENTER_CENTER,
            title,
            egui::FontId::proportional(18.0 * scale),
            visuals.text_color(),
        );
        ui.painter().text(
            egui::pos2(rect.center().x, rect.bottom() - size.y * 0.17),
            egui::Align2::CENTER_CENTER,
            description,
            egui::FontId::proportional(12.0 * scale),
            ui.visuals().weak_text_color(),
        );
    }

    response
}

/// Lay out `count` dashboard cards centered in the available width.
///
/// Returns the card size and the left offset.
pub fn card_row_layout(ui: &Ui, count: usize, spacing: f32) -> (egui::Vec2, f32) {
    let available = ui.available_width();
    let n = count.max(1) as f32;
    let total_spacing = spacing * (n - 1.0);
    let card_width = ((available - total_spacing) / n).clamp(150.0, 250.0);
    let total_width = card_width * n + total_spacing;
    (
        egui::vec2(card_width, card_width * 0.75),
        ((available - total_width) / 2.0).max(0.0),
    )
}

/// Render a stat card with title, value, and subtitle.
pub fn stat_card(ui: &mut Ui, icon: &str, title: &str, value: &str, subtitle: &str) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::same(5))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(150.0);

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(icon).color(colors::PRIMARY));
                    ui.label(RichText::new(title).small());
                });
                ui.label(RichText::new(value).heading().strong());
                ui.label(RichText::new(subtitle).small().weak());
            });
        });
}

/// Framed section with a bold title.
pub fn section<R>(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::symmetric(0, 5))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new(title).strong());
            ui.add_space(10.0);
            add_contents(ui)
        })
        .inner
}

/// Status and accent colors.
pub mod colors {
    use super::Color32;

    pub const PRIMARY: Color32 = Color32::from_rgb(46, 125, 50);
    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const INFO: Color32 = Color32::from_rgb(100, 150, 230);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
    pub const STAR: Color32 = Color32::from_rgb(250, 190, 40);
}

/// Badge color for a role.
pub fn role_color(role: Role) -> Color32 {
    match role {
        Role::Dosen => colors::INFO,
        Role::Mahasiswa => colors::SUCCESS,
        Role::Admin => colors::WARNING,
    }
}

pub fn role_badge(ui: &mut Ui, role: Role) -> Response {
    ui.label(RichText::new(role.name()).small().strong().color(role_color(role)))
}

/// Circle with the user's initial.
pub fn avatar(ui: &mut Ui, initial: &str, diameter: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(diameter, diameter), Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter().circle_filled(rect.center(), diameter / 2.0, colors::PRIMARY);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            initial,
            egui::FontId::proportional(diameter * 0.45),
            Color32::WHITE,
        );
    }
    response
}

/// Five clickable stars. Returns the clicked score.
pub fn star_input(ui: &mut Ui, current: Option<u8>, size: f32) -> Option<u8> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        for score in 1..=5u8 {
            let filled = current.is_some_and(|c| score <= c);
            let color = if filled { colors::STAR } else { colors::NEUTRAL };
            let response = ui
                .add(egui::Label::new(RichText::new(STAR).size(size).color(color)).sense(Sense::click()))
                .on_hover_text(format!("{score} / 5"));
            if response.clicked() {
                clicked = Some(score);
            }
        }
    });
    clicked
}

/// Read-only star display of a mean score, with the number beside it.
pub fn star_display(ui: &mut Ui, score: f64) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 1.0;
        let filled = score.round() as i64;
        for i in 1..=5 {
            let color = if i <= filled { colors::STAR } else { colors::NEUTRAL };
            ui.label(RichText::new(STAR).color(color));
        }
        ui.add_space(4.0);
        ui.label(RichText::new(format!("{score:.1}")).strong());
    });
}

/// Render a back button that returns true when clicked.
pub fn back_button(ui: &mut Ui) -> bool {
    ui.button(RichText::new(format!("{ARROW_LEFT} Back to Dashboard")).size(14.0))
        .clicked()
}

/// Render a panel header with title.
pub fn panel_header(ui: &mut Ui, title: &str) {
    ui.heading(RichText::new(title).size(24.0));
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(20.0);
}

pub fn primary_button_with_icon(ui: &mut Ui, icon: &str, text: &str) -> Response {
    let label = if icon.is_empty() {
        text.to_string()
    } else {
        format!("{icon} {text}")
    };
    ui.add(egui::Button::new(RichText::new(label).color(Color32::WHITE)).fill(colors::PRIMARY))
}

pub fn styled_button(ui: &mut Ui, text: &str) -> Response {
    ui.button(text)
}

pub fn styled_button_with_icon(ui: &mut Ui, icon: &str, text: &str) -> Response {
    ui.button(format!("{icon} {text}"))
}

/// Small icon button for table rows.
pub fn action_button(ui: &mut Ui, icon: &str, tooltip: &str) -> Response {
    ui.small_button(icon).on_hover_text(tooltip)
}

pub fn danger_action_button(ui: &mut Ui, icon: &str, tooltip: &str) -> Response {
    ui.small_button(RichText::new(icon).color(colors::ERROR))
        .on_hover_text(tooltip)
}
