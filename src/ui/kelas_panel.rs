//! Class (kelas) management panel with CRUD and search.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget, KelasForm};
use super::components::{
    action_button, back_button, danger_action_button, panel_header, primary_button_with_icon, styled_button,
};
use crate::filter;
use crate::models::Role;
use crate::store;

/// Show the kelas management panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut go_back = false;

    if back_button(ui) {
        go_back = true;
    }

    panel_header(ui, "Manage Classes");

    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Class").clicked() {
            app.kelas_form = KelasForm::new_open();
        }

        ui.add_space(20.0);

        ui.label("Search:");
        ui.add(
            egui::TextEdit::singleline(&mut app.kelas_search)
                .desired_width(200.0)
                .hint_text("Name or code..."),
        );

        if !app.kelas_search.is_empty() {
            ui.add_space(10.0);
            if styled_button(ui, "Clear").clicked() {
                app.kelas_search.clear();
            }
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    if app.kelas_form.is_open {
        show_form_dialog(app, ui.ctx());
    }

    go_back
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let mut edit = None;
    let mut delete = None;

    {
        let store = &app.store;
        let all = store::kelas::list_all(store);
        let total = all.len();
        let shown = filter::filter_kelas(all, &app.kelas_search);

        ui.label(format!("Showing {} of {} classes", shown.len(), total));
        ui.add_space(10.0);

        ScrollArea::vertical().id_salt("kelas_scroll").show(ui, |ui| {
            ui.add_space(4.0);
            egui::Grid::new("kelas_grid")
                .num_columns(8)
                .striped(true)
                .min_col_width(60.0)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.strong("Code");
                    ui.strong("Name");
                    ui.strong("Semester");
                    ui.strong("Instructor");
                    ui.strong("Schedule");
                    ui.strong("Room");
                    ui.strong("Students");
                    ui.strong("Actions");
                    ui.end_row();

                    for kelas in shown {
                        ui.label(&kelas.code);
                        ui.label(&kelas.name);
                        ui.label(kelas.semester.to_string());

                        let dosen_name = store::user::get_by_id(store, &kelas.dosen_id)
                            .map(|u| u.name.as_str())
                            .unwrap_or("-");
                        ui.label(dosen_name);

                        ui.label(&kelas.schedule);
                        ui.label(&kelas.room);
                        ui.label(store::kelas::student_count(store, &kelas.id).to_string());

                        ui.horizontal(|ui| {
                            ui.add_space(8.0);
                            if action_button(ui, PENCIL, "Edit").clicked() {
                                edit = Some(KelasForm::edit(kelas));
                            }
                            ui.add_space(4.0);
                            if danger_action_button(ui, TRASH, "Delete").clicked() {
                                delete = Some(DeleteTarget::Kelas(kelas.id.clone(), kelas.name.clone()));
                            }
                        });

                        ui.end_row();
                    }
                });
        });
    }

    if let Some(form) = edit {
        app.kelas_form = form;
    }
    if let Some(target) = delete {
        app.delete_target = Some(target);
        app.show_delete_confirm = true;
    }
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.kelas_form.is_editing { "Edit Class" } else { "Add Class" };
    let mut save = false;

    let instructors = store::user::list_by_role(&app.store, Role::Dosen);
    let form = &mut app.kelas_form;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(450.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("kelas_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Code:");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.code)
                            .desired_width(150.0)
                            .hint_text("e.g. IF301"),
                    );
                    ui.end_row();

                    ui.label("Name:");
                    ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(250.0));
                    ui.end_row();

                    ui.label("Semester:");
                    ui.add(egui::DragValue::new(&mut form.semester).range(1..=14));
                    ui.end_row();

                    ui.label("Instructor:");
                    egui::ComboBox::from_id_salt("kelas_form_dosen")
                        .width(250.0)
                        .selected_text(
                            form.dosen_id
                                .as_deref()
                                .and_then(|id| instructors.iter().find(|u| u.id == id))
                                .map(|u| u.name.as_str())
                                .unwrap_or("Select..."),
                        )
                        .show_ui(ui, |ui| {
                            for dosen in &instructors {
                                if ui
                                    .selectable_label(form.dosen_id.as_deref() == Some(dosen.id.as_str()), &dosen.name)
                                    .clicked()
                                {
                                    form.dosen_id = Some(dosen.id.clone());
                                }
                            }
                        });
                    ui.end_row();

                    ui.label("Schedule:");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.schedule)
                            .desired_width(250.0)
                            .hint_text("e.g. Senin 08:00-10:00"),
                    );
                    ui.end_row();

                    ui.label("Room:");
                    ui.add(egui::TextEdit::singleline(&mut form.room).desired_width(150.0));
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
        app.save_kelas();
    }
}
