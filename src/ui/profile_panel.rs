//! Profile page: profile card, edit form and received rating profile.

use eframe::egui::{self, Align, Layout, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{FLOPPY_DISK, IMAGE, PENCIL, X};

use super::app::{App, ProfileForm};
use super::components::{avatar, back_button, panel_header, primary_button_with_icon, role_badge, section};
use super::dashboard;
use crate::models::UpdateProfile;

const AVATAR_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Show the profile page.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut go_back = false;
    let Some(user) = app.current_user().cloned() else {
        return true;
    };

    if back_button(ui) {
        go_back = true;
    }

    panel_header(ui, "Profile");

    let mut save = false;
    let mut pick_avatar = false;

    ScrollArea::vertical().id_salt("profile_scroll").show(ui, |ui| {
        section(ui, "Account", |ui| {
            ui.horizontal(|ui| {
                avatar(ui, &user.initial(), 72.0);
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(&user.name).size(20.0).strong());
                    role_badge(ui, user.role);
                    ui.label(RichText::new(format!("{} {}", user.role.id_label(), user.nim_nip)).weak());
                    if let Some(path) = &user.avatar {
                        ui.label(RichText::new(format!("{IMAGE} {path}")).small().weak());
                    }
                });
            });
            ui.add_space(8.0);
            if ui.button(format!("{IMAGE} Change Avatar")).clicked() {
                pick_avatar = true;
            }
        });

        section(ui, "Details", |ui| {
            let form = &mut app.profile_form;
            egui::Grid::new("profile_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.add_enabled(form.is_editing, egui::TextEdit::singleline(&mut form.name).desired_width(260.0));
                    ui.end_row();

                    ui.label("Email:");
                    ui.add_enabled(form.is_editing, egui::TextEdit::singleline(&mut form.email).desired_width(260.0));
                    ui.end_row();

                    ui.label("Phone:");
                    ui.add_enabled(
                        form.is_editing,
                        egui::TextEdit::singleline(&mut form.phone)
                            .desired_width(200.0)
                            .hint_text("-"),
                    );
                    ui.end_row();

                    ui.label("Department:");
                    ui.add_enabled(
                        form.is_editing,
                        egui::TextEdit::singleline(&mut form.department)
                            .desired_width(260.0)
                            .hint_text("-"),
                    );
                    ui.end_row();
                });

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if form.is_editing {
                    if ui.button(format!("{X} Cancel")).clicked() {
                        *form = ProfileForm {
                            is_editing: false,
                            ..ProfileForm::edit(&user)
                        };
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if primary_button_with_icon(ui, FLOPPY_DISK, "Save").clicked() {
                            save = true;
                        }
                    });
                } else if ui.button(format!("{PENCIL} Edit Profile")).clicked() {
                    form.is_editing = true;
                }
            });
        });

        section(ui, "Rating Profile", |ui| dashboard::radar(ui, &app.store, &user.id));
    });

    if save {
        save_profile(app);
    }
    if pick_avatar {
        choose_avatar(app);
    }

    go_back
}

fn save_profile(app: &mut App) {
    let Some(user) = app.current_user().cloned() else {
        return;
    };

    let form = &app.profile_form;
    if form.name.trim().is_empty() {
        app.error_message = Some("Name is required".to_string());
        return;
    }
    if !form.email.contains('@') {
        app.error_message = Some("Please enter a valid email".to_string());
        return;
    }

    let changes = form.changes(&user);
    if changes == UpdateProfile::default() {
        app.profile_form.is_editing = false;
        return;
    }

    if app.update_profile(changes) {
        app.profile_form.is_editing = false;
        app.notify_success("Profile updated");
    } else {
        app.notify_error("Profile could not be updated");
    }
}

fn choose_avatar(app: &mut App) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("Images", &AVATAR_EXTENSIONS)
        .pick_file()
    else {
        return;
    };

    let update = UpdateProfile {
        avatar: Some(path.display().to_string()),
        ..Default::default()
    };
    if app.update_profile(update) {
        app.notify_success("Avatar updated");
    }
}
