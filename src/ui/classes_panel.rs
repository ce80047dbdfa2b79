//! "My Classes" page: taught classes for instructors, enrolled classes for students.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{CHALKBOARD_TEACHER, STAR};

use super::app::App;
use super::components::{action_button, avatar, back_button, colors, panel_header, section, styled_button_with_icon};
use crate::models::{Kelas, RatingKind, RatingTarget, Role, User};
use crate::store::{self, MockStore};

/// Show the classes page.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut go_back = false;
    let Some(viewer) = app.current_user().cloned() else {
        return true;
    };

    if back_button(ui) {
        go_back = true;
    }

    panel_header(ui, "My Classes");

    let selected = ScrollArea::vertical()
        .id_salt("classes_scroll")
        .show(ui, |ui| match viewer.role {
            Role::Dosen => show_taught(ui, &app.store, &viewer),
            Role::Mahasiswa => show_enrolled(ui, &app.store, &viewer),
            Role::Admin => {
                ui.label(RichText::new("Admins do not attend classes").weak());
                None
            }
        })
        .inner;

    if let Some(target) = selected {
        app.start_rating(target);
    }

    go_back
}

fn class_title(kelas: &Kelas) -> String {
    format!("{} ({})", kelas.name, kelas.code)
}

fn class_meta(ui: &mut Ui, kelas: &Kelas) {
    ui.label(
        RichText::new(format!("Semester {} · {} · {}", kelas.semester, kelas.schedule, kelas.room))
            .small()
            .weak(),
    );
    ui.add_space(8.0);
}

fn person_row(ui: &mut Ui, person: &User, button: impl FnOnce(&mut Ui) -> bool) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        avatar(ui, &person.initial(), 28.0);
        ui.label(&person.name);
        ui.label(RichText::new(&person.nim_nip).small().weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            clicked = button(ui);
        });
    });
    clicked
}

fn show_taught(ui: &mut Ui, store: &MockStore, viewer: &User) -> Option<RatingTarget> {
    let mut selected = None;
    let mut any = false;

    for kelas in store::kelas::for_instructor(store, &viewer.id) {
        any = true;
        section(ui, &class_title(kelas), |ui| {
            class_meta(ui, kelas);
            let students = store::enrollment::students_in_kelas(store, &kelas.id);
            if students.is_empty() {
                ui.label(RichText::new("No students enrolled").weak());
            }
            for student in students {
                if person_row(ui, student, |ui| action_button(ui, STAR, "Rate student").clicked()) {
                    selected = Some(RatingTarget {
                        user_id: student.id.clone(),
                        name: student.name.clone(),
                        kind: RatingKind::Mahasiswa,
                        kelas_name: Some(kelas.name.clone()),
                    });
                }
            }
        });
    }

    if !any {
        ui.label(RichText::new("You are not teaching any classes").weak());
    }
    selected
}

fn show_enrolled(ui: &mut Ui, store: &MockStore, viewer: &User) -> Option<RatingTarget> {
    let mut selected = None;
    let mut any = false;

    for kelas in store::kelas::for_student(store, &viewer.id) {
        any = true;
        section(ui, &class_title(kelas), |ui| {
            class_meta(ui, kelas);

            match store::user::get_by_id(store, &kelas.dosen_id) {
                Some(dosen) => {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(CHALKBOARD_TEACHER).color(colors::INFO));
                        ui.label(RichText::new(&dosen.name).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if styled_button_with_icon(ui, STAR, "Rate Instructor").clicked() {
                                selected = Some(RatingTarget {
                                    user_id: dosen.id.clone(),
                                    name: dosen.name.clone(),
                                    kind: RatingKind::Dosen,
                                    kelas_name: Some(kelas.name.clone()),
                                });
                            }
                        });
                    });
                }
                None => {
                    ui.label(RichText::new("Instructor unavailable").color(colors::NEUTRAL));
                }
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Classmates").small().strong());

            let classmates: Vec<&User> = store::enrollment::students_in_kelas(store, &kelas.id)
                .into_iter()
                .filter(|s| s.id != viewer.id)
                .collect();
            if classmates.is_empty() {
                ui.label(RichText::new("No classmates yet").weak());
            }
            for classmate in classmates {
                if person_row(ui, classmate, |ui| action_button(ui, STAR, "Rate classmate").clicked()) {
                    selected = Some(RatingTarget {
                        user_id: classmate.id.clone(),
                        name: classmate.name.clone(),
                        kind: RatingKind::Teman,
                        kelas_name: Some(kelas.name.clone()),
                    });
                }
            }
        });
    }

    if !any {
        ui.label(RichText::new("You are not enrolled in any classes").weak());
    }
    selected
}
