//! User management panel with CRUD, search and role filter.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{FILE_XLS, PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget, UserForm};
use super::components::{
    action_button, back_button, danger_action_button, panel_header, primary_button_with_icon, role_badge,
    styled_button, styled_button_with_icon,
};
use crate::filter;
use crate::models::Role;

/// Show the user management panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut go_back = false;

    if back_button(ui) {
        go_back = true;
    }

    panel_header(ui, "Manage Users");

    // Toolbar row 1: Action buttons
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add User").clicked() {
            app.user_form = UserForm {
                is_open: true,
                ..Default::default()
            };
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, FILE_XLS, "Export to Excel").clicked() {
            app.export_users();
        }
    });

    ui.add_space(10.0);

    // Toolbar row 2: Search and filter
    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.add(
            egui::TextEdit::singleline(&mut app.user_search)
                .desired_width(200.0)
                .hint_text("Name or NIM/NIP..."),
        );

        ui.add_space(20.0);

        ui.label("Role:");
        if ui.selectable_label(app.user_role_filter.is_none(), "All").clicked() {
            app.user_role_filter = None;
        }
        for role in Role::ALL {
            if ui
                .selectable_label(app.user_role_filter == Some(role), role.name())
                .clicked()
            {
                app.user_role_filter = Some(role);
            }
        }

        if !app.user_search.is_empty() || app.user_role_filter.is_some() {
            ui.add_space(10.0);
            if styled_button(ui, "Clear").clicked() {
                app.user_search.clear();
                app.user_role_filter = None;
            }
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    if app.user_form.is_open {
        show_form_dialog(app, ui.ctx());
    }

    go_back
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let mut edit = None;
    let mut delete = None;

    {
        let mut users = filter::filter_users(&app.store.users, &app.user_search, app.user_role_filter);
        users.sort_by(|a, b| a.name.cmp(&b.name));

        ui.label(format!("Showing {} of {} users", users.len(), app.store.users.len()));
        ui.add_space(10.0);

        ScrollArea::vertical().id_salt("users_scroll").show(ui, |ui| {
            ui.add_space(4.0);
            egui::Grid::new("users_grid")
                .num_columns(7)
                .striped(true)
                .min_col_width(60.0)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.strong("NIM/NIP");
                    ui.strong("Name");
                    ui.strong("Role");
                    ui.strong("Email");
                    ui.strong("Department");
                    ui.strong("Phone");
                    ui.strong("Actions");
                    ui.end_row();

                    for user in users {
                        ui.label(&user.nim_nip);
                        ui.label(&user.name);
                        role_badge(ui, user.role);
                        ui.label(&user.email);
                        ui.label(user.department_or_dash());
                        ui.label(user.phone.as_deref().unwrap_or("-"));

                        ui.horizontal(|ui| {
                            ui.add_space(8.0);
                            if action_button(ui, PENCIL, "Edit").clicked() {
                                edit = Some(UserForm::edit(user));
                            }
                            ui.add_space(4.0);
                            if danger_action_button(ui, TRASH, "Delete").clicked() {
                                delete = Some(DeleteTarget::User(user.id.clone(), user.name.clone()));
                            }
                        });

                        ui.end_row();
                    }
                });
        });
    }

    if let Some(form) = edit {
        app.user_form = form;
    }
    if let Some(target) = delete {
        app.delete_target = Some(target);
        app.show_delete_confirm = true;
    }
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.user_form.is_editing { "Edit User" } else { "Add User" };
    let mut save = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(450.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            let form = &mut app.user_form;
            egui::Grid::new("user_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Role:");
                    egui::ComboBox::from_id_salt("user_form_role")
                        .width(200.0)
                        .selected_text(form.role.name())
                        .show_ui(ui, |ui| {
                            for role in Role::ALL {
                                ui.selectable_value(&mut form.role, role, role.name());
                            }
                        });
                    ui.end_row();

                    ui.label(format!("{}:", form.role.id_label()));
                    ui.add(egui::TextEdit::singleline(&mut form.nim_nip).desired_width(200.0));
                    ui.end_row();

                    ui.label("Name:");
                    ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(250.0));
                    ui.end_row();

                    ui.label("Email:");
                    ui.add(egui::TextEdit::singleline(&mut form.email).desired_width(250.0));
                    ui.end_row();

                    ui.label("Department:");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.department)
                            .desired_width(250.0)
                            .hint_text("Optional"),
                    );
                    ui.end_row();

                    ui.label("Phone:");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.phone)
                            .desired_width(200.0)
                            .hint_text("Optional"),
                    );
                    ui.end_row();
                });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Cancel").clicked() {
                    form.reset();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Save").clicked() {
                        save = true;
                    }
                });
            });
        });

    if save {
        app.save_user();
    }
}
