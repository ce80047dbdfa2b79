//! Instructor directory. Admins see their fellow admins instead.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{MAGNIFYING_GLASS, STAR};

use super::app::App;
use super::components::{avatar, back_button, colors, panel_header, primary_button_with_icon, star_display};
use crate::filter;
use crate::models::{RatingKind, RatingTarget, Role, User};
use crate::store;

/// Who appears in the directory for a viewer.
fn directory_for<'a>(app: &'a App, viewer: &User) -> (Vec<&'a User>, RatingKind) {
    match viewer.role {
        Role::Mahasiswa | Role::Dosen => (
            store::user::list_by_role(&app.store, Role::Dosen)
                .into_iter()
                .filter(|u| u.id != viewer.id)
                .collect(),
            RatingKind::Dosen,
        ),
        Role::Admin => (
            store::user::list_by_role(&app.store, Role::Admin)
                .into_iter()
                .filter(|u| u.id != viewer.id)
                .collect(),
            RatingKind::Admin,
        ),
    }
}

/// Show the instructors page.
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

    let title = match viewer.role {
        Role::Admin => "Admins",
        Role::Dosen | Role::Mahasiswa => "Instructors",
    };
    panel_header(ui, title);

    ui.horizontal(|ui| {
        ui.label(MAGNIFYING_GLASS);
        ui.add(
            egui::TextEdit::singleline(&mut app.instructor_search)
                .desired_width(260.0)
                .hint_text("Name, NIP or department..."),
        );
    });

    ui.add_space(15.0);

    let mut selected = None;
    {
        let (people, kind) = directory_for(app, &viewer);
        let shown = filter::filter_people(people.iter().copied(), &app.instructor_search);

        ui.label(format!("Showing {} of {}", shown.len(), people.len()));
        ui.add_space(10.0);

        // Instructors browse colleagues read-only
        let can_rate = matches!(viewer.role, Role::Mahasiswa | Role::Admin);

        ScrollArea::vertical().id_salt("instructors_scroll").show(ui, |ui| {
            if shown.is_empty() {
                ui.label(RichText::new("Nobody matches your search").weak());
            }
            for person in shown {
                egui::Frame::new()
                    .fill(ui.style().visuals.extreme_bg_color)
                    .inner_margin(egui::Margin::same(12))
                    .outer_margin(egui::Margin::symmetric(0, 4))
                    .corner_radius(egui::CornerRadius::same(8))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            avatar(ui, &person.initial(), 44.0);
                            ui.add_space(8.0);
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&person.name).strong());
                                ui.label(
                                    RichText::new(format!("{} {}", person.role.id_label(), person.nim_nip))
                                        .small()
                                        .weak(),
                                );
                                ui.label(RichText::new(person.department_or_dash()).small());
                            });

                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if can_rate && primary_button_with_icon(ui, STAR, "Rate").clicked() {
                                    selected = Some(RatingTarget {
                                        user_id: person.id.clone(),
                                        name: person.name.clone(),
                                        kind,
                                        kelas_name: None,
                                    });
                                }
                                ui.add_space(10.0);
                                match store::rating::average_received(&app.store, &person.id) {
                                    Some(avg) => star_display(ui, avg),
                                    None => {
                                        ui.label(RichText::new("No ratings").color(colors::NEUTRAL));
                                    }
                                }
                            });
                        });
                    });
            }
        });
    }

    if let Some(target) = selected {
        app.start_rating(target);
    }

    go_back
}
