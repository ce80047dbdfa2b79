//! Login page.

use eframe::egui::{self, CornerRadius, Key, Margin, RichText, Ui};
use egui_phosphor::regular::{EYE, EYE_SLASH, GRADUATION_CAP, SIGN_IN};

use super::app::App;
use super::components::{colors, primary_button_with_icon};

/// Show the login page.
pub fn show(app: &mut App, ui: &mut Ui) {
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new(GRADUATION_CAP).size(56.0).color(colors::PRIMARY));
        ui.label(RichText::new("EduRate").size(32.0).strong());
        ui.label(RichText::new("Academic rating system").size(14.0).weak());
        ui.add_space(30.0);

        egui::Frame::new()
            .fill(ui.style().visuals.extreme_bg_color)
            .inner_margin(Margin::same(25))
            .corner_radius(CornerRadius::same(10))
            .show(ui, |ui| {
                ui.set_width(320.0);

                egui::Grid::new("login_grid")
                    .num_columns(2)
                    .spacing([12.0, 12.0])
                    .show(ui, |ui| {
                        ui.label("NIM / NIP:");
                        ui.add(
                            egui::TextEdit::singleline(&mut app.login_form.nim_nip)
                                .desired_width(200.0)
                                .hint_text("e.g. NIM001"),
                        );
                        ui.end_row();

                        ui.label("Password:");
                        ui.horizontal(|ui| {
                            let response = ui.add(
                                egui::TextEdit::singleline(&mut app.login_form.password)
                                    .desired_width(170.0)
                                    .password(!app.login_form.show_password),
                            );
                            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                                submit = true;
                            }
                            let eye = if app.login_form.show_password { EYE_SLASH } else { EYE };
                            if ui.small_button(eye).clicked() {
                                app.login_form.show_password = !app.login_form.show_password;
                            }
                        });
                        ui.end_row();
                    });

                ui.add_space(15.0);
                ui.vertical_centered_justified(|ui| {
                    if primary_button_with_icon(ui, SIGN_IN, "Login").clicked() {
                        submit = true;
                    }
                });
            });

        ui.add_space(15.0);
        ui.label(RichText::new("Demo accounts: NIM001, NIP001, ADMIN001 / password").small().weak());
    });

    if submit {
        app.login();
    }
}
