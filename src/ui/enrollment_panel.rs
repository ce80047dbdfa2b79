//! Enrollment management panel: enroll, transfer and remove students.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::{ARROWS_LEFT_RIGHT, FILE_XLS, PLUS, TRASH};

use super::app::{App, DeleteTarget, EnrollmentForm, TransferForm};
use super::components::{
    action_button, back_button, colors, danger_action_button, panel_header, primary_button_with_icon, styled_button,
    styled_button_with_icon,
};
use crate::filter;
use crate::models::{EnrollmentStatus, Kelas, Role};
use crate::store;

/// Show the enrollment management panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut go_back = false;

    if back_button(ui) {
        go_back = true;
    }

    panel_header(ui, "Manage Enrollments");

    // Toolbar row 1: Action buttons
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Enroll Student").clicked() {
            app.enrollment_form = EnrollmentForm {
                kelas_id: app.enrollment_kelas_filter.clone(),
                is_open: true,
                ..Default::default()
            };
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, FILE_XLS, "Export to Excel").clicked() {
            app.export_enrollments();
        }
    });

    ui.add_space(10.0);

    // Toolbar row 2: Search and filter
    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.add(
            egui::TextEdit::singleline(&mut app.enrollment_search)
                .desired_width(200.0)
                .hint_text("Student or class..."),
        );

        ui.add_space(20.0);

        ui.label("Class:");
        let classes = store::kelas::list_all(&app.store);
        kelas_combo(ui, "enrollment_kelas_filter", &classes, &mut app.enrollment_kelas_filter, "All");

        if !app.enrollment_search.is_empty() || app.enrollment_kelas_filter.is_some() {
            ui.add_space(10.0);
            if styled_button(ui, "Clear").clicked() {
                app.enrollment_search.clear();
                app.enrollment_kelas_filter = None;
            }
        }
    });

    ui.add_space(15.0);

    show_table(app, ui);

    if app.enrollment_form.is_open {
        show_add_dialog(app, ui.ctx());
    }
    if app.transfer_form.is_some() {
        show_transfer_dialog(app, ui.ctx());
    }

    go_back
}

/// Class picker. `none_label` is shown for `None`.
fn kelas_combo(ui: &mut Ui, id_salt: &str, classes: &[&Kelas], selected: &mut Option<String>, none_label: &str) {
    egui::ComboBox::from_id_salt(id_salt)
        .width(220.0)
        .selected_text(
            selected
                .as_deref()
                .and_then(|id| classes.iter().find(|k| k.id == id))
                .map(|k| k.name.as_str())
                .unwrap_or(none_label),
        )
        .show_ui(ui, |ui| {
            if ui.selectable_label(selected.is_none(), none_label).clicked() {
                *selected = None;
            }
            for kelas in classes {
                if ui
                    .selectable_label(selected.as_deref() == Some(kelas.id.as_str()), &kelas.name)
                    .clicked()
                {
                    *selected = Some(kelas.id.clone());
                }
            }
        });
}

fn show_table(app: &mut App, ui: &mut Ui) {
    let mut transfer = None;
    let mut delete = None;

    {
        let rows = store::enrollment::rows(&app.store);
        let shown = filter::filter_enrollments(&rows, &app.enrollment_search, app.enrollment_kelas_filter.as_deref());

        ui.label(format!("Showing {} of {} enrollments", shown.len(), rows.len()));
        ui.add_space(10.0);

        ScrollArea::vertical().id_salt("enrollment_scroll").show(ui, |ui| {
            ui.add_space(4.0);
            egui::Grid::new("enrollment_grid")
                .num_columns(7)
                .striped(true)
                .min_col_width(60.0)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.strong("NIM");
                    ui.strong("Student");
                    ui.strong("Code");
                    ui.strong("Class");
                    ui.strong("Enrolled");
                    ui.strong("Status");
                    ui.strong("Actions");
                    ui.end_row();

                    for row in shown {
                        let enrollment = row.enrollment;
                        ui.label(&row.student.nim_nip);
                        ui.label(&row.student.name);
                        ui.label(&row.kelas.code);
                        ui.label(&row.kelas.name);
                        ui.label(enrollment.enrolled_date.format("%Y-%m-%d").to_string());

                        let status_color = match enrollment.status {
                            EnrollmentStatus::Active => colors::SUCCESS,
                            EnrollmentStatus::Inactive => colors::NEUTRAL,
                        };
                        ui.label(RichText::new(enrollment.status.name()).color(status_color));

                        ui.horizontal(|ui| {
                            ui.add_space(8.0);
                            if enrollment.is_active() && action_button(ui, ARROWS_LEFT_RIGHT, "Transfer").clicked() {
                                transfer = Some(TransferForm {
                                    student_id: row.student.id.clone(),
                                    student_name: row.student.name.clone(),
                                    from_kelas_id: row.kelas.id.clone(),
                                    to_kelas_id: None,
                                    transfer_date: store::today(),
                                });
                            }
                            ui.add_space(4.0);
                            if danger_action_button(ui, TRASH, "Remove").clicked() {
                                delete = Some(DeleteTarget::Enrollment(
                                    enrollment.id.clone(),
                                    format!("{} from {}", row.student.name, row.kelas.name),
                                ));
                            }
                        });

                        ui.end_row();
                    }
                });
        });
    }

    if transfer.is_some() {
        app.transfer_form = transfer;
    }
    if let Some(target) = delete {
        app.delete_target = Some(target);
        app.show_delete_confirm = true;
    }
}

fn show_add_dialog(app: &mut App, ctx: &egui::Context) {
    let mut save = false;

    let students = store::user::list_by_role(&app.store, Role::Mahasiswa);
    let classes = store::kelas::list_all(&app.store);
    let form = &mut app.enrollment_form;

    egui::Window::new("Enroll Student")
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("enrollment_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Student:");
                    egui::ComboBox::from_id_salt("enrollment_form_student")
                        .width(220.0)
                        .selected_text(
                            form.student_id
                                .as_deref()
                                .and_then(|id| students.iter().find(|u| u.id == id))
                                .map(|u| format!("{} ({})", u.name, u.nim_nip))
                                .unwrap_or_else(|| "Select...".to_string()),
                        )
                        .show_ui(ui, |ui| {
                            for student in &students {
                                if ui
                                    .selectable_label(
                                        form.student_id.as_deref() == Some(student.id.as_str()),
                                        format!("{} ({})", student.name, student.nim_nip),
                                    )
                                    .clicked()
                                {
                                    form.student_id = Some(student.id.clone());
                                }
                            }
                        });
                    ui.end_row();

                    ui.label("Class:");
                    kelas_combo(ui, "enrollment_form_kelas", &classes, &mut form.kelas_id, "Select...");
                    ui.end_row();

                    ui.label("Enrolled:");
                    ui.add(DatePickerButton::new(&mut form.enrolled_date).id_salt("enrollment_form_date"));
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
                    if primary_button_with_icon(ui, "", "Enroll").clicked() {
                        save = true;
                    }
                });
            });
        });

    if save {
        app.save_enrollment();
    }
}

fn show_transfer_dialog(app: &mut App, ctx: &egui::Context) {
    let mut save = false;
    let mut cancel = false;

    let classes = store::kelas::list_all(&app.store);
    let Some(form) = app.transfer_form.as_mut() else {
        return;
    };
    let from_name = store::kelas::get_by_id(&app.store, &form.from_kelas_id)
        .map(|k| k.name.as_str())
        .unwrap_or("-");
    let targets: Vec<&Kelas> = classes
        .iter()
        .copied()
        .filter(|k| k.id != form.from_kelas_id)
        .collect();

    egui::Window::new("Transfer Student")
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("transfer_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Student:");
                    ui.label(RichText::new(&form.student_name).strong());
                    ui.end_row();

                    ui.label("From:");
                    ui.label(from_name);
                    ui.end_row();

                    ui.label("To:");
                    kelas_combo(ui, "transfer_form_kelas", &targets, &mut form.to_kelas_id, "Select...");
                    ui.end_row();

                    ui.label("Date:");
                    ui.add(DatePickerButton::new(&mut form.transfer_date).id_salt("transfer_form_date"));
                    ui.end_row();
                });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Cancel").clicked() {
                    cancel = true;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, ARROWS_LEFT_RIGHT, "Transfer").clicked() {
                        save = true;
                    }
                });
            });
        });

    if cancel {
        app.transfer_form = None;
    } else if save {
        app.save_transfer();
    }
}
