//! Dashboard page, one layout per role.

use std::collections::BTreeSet;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{
    BOOK_OPEN, CHALKBOARD_TEACHER, CHART_LINE, CHAT_TEXT, STAR, STUDENT, USERS, USERS_THREE,
};

use super::app::{App, LogLevel, Page};
use super::charts;
use super::components::{
    card_row_layout, colors, dashboard_card, section, star_display, stat_card, styled_button_with_icon,
};
use crate::models::{Role, User};
use crate::rating::Category;
use crate::store::{self, MockStore};

/// Show the dashboard page.
///
/// Returns `Some(page)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Page> {
    let user = app.current_user()?.clone();

    let mut next_page = None;

    ScrollArea::vertical().id_salt("dashboard_scroll").show(ui, |ui| {
        ui.add_space(10.0);
        ui.label(RichText::new(format!("Hello, {}", user.name)).size(28.0).strong());
        ui.label(RichText::new(subtitle(user.role)).size(14.0).weak());
        ui.add_space(20.0);

        next_page = match user.role {
            Role::Mahasiswa => show_student(app, ui, &user),
            Role::Dosen => show_instructor(app, ui, &user),
            Role::Admin => show_admin(app, ui),
        };
    });

    next_page
}

fn subtitle(role: Role) -> &'static str {
    match role {
        Role::Mahasiswa => "Student dashboard",
        Role::Dosen => "Instructor dashboard",
        Role::Admin => "Administration dashboard",
    }
}

fn format_average(avg: Option<f64>) -> String {
    avg.map(|a| format!("{a:.1}")).unwrap_or_else(|| "-".to_string())
}

fn show_student(app: &App, ui: &mut Ui, user: &User) -> Option<Page> {
    let store = &app.store;
    let mut next_page = None;

    let classes: Vec<_> = store::kelas::for_student(store, &user.id).collect();
    let instructors: BTreeSet<&str> = classes.iter().map(|k| k.dosen_id.as_str()).collect();
    let received = store::rating::received_by(store, &user.id);

    ui.horizontal_wrapped(|ui| {
        stat_card(ui, BOOK_OPEN, "Active Classes", &classes.len().to_string(), "This semester");
        stat_card(ui, CHALKBOARD_TEACHER, "Instructors", &instructors.len().to_string(), "Teaching you");
        stat_card(
            ui,
            STAR,
            "Average Rating",
            &format_average(store::rating::average_received(store, &user.id)),
            "From peers and instructors",
        );
        stat_card(ui, CHAT_TEXT, "Ratings Received", &received.len().to_string(), "All time");
    });

    ui.add_space(10.0);

    ui.columns(2, |cols| {
        section(&mut cols[0], "Your Rating Profile", |ui| radar(ui, store, &user.id));
        section(&mut cols[1], "Recent Feedback", |ui| {
            if received.is_empty() {
                ui.label(RichText::new("No feedback yet").weak());
            }
            for rating in received.iter().take(3) {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&rating.from_name).strong());
                    ui.label(RichText::new(&rating.kelas_name).small().weak());
                });
                star_display(ui, rating.score);
                ui.label(RichText::new(format!("\"{}\"", rating.comment)).italics());
                ui.label(RichText::new(rating.created_at.format("%d %b %Y").to_string()).small().weak());
                ui.add_space(8.0);
            }
        });
    });

    section(ui, "My Classes", |ui| {
        ui.horizontal_wrapped(|ui| {
            for kelas in &classes {
                let dosen = store::user::get_by_id(store, &kelas.dosen_id)
                    .map(|u| u.name.as_str())
                    .unwrap_or("-");
                class_card(ui, &kelas.name, &kelas.code, dosen, &kelas.schedule, &kelas.room);
            }
        });
    });

    section(ui, "Quick Actions", |ui| {
        ui.horizontal(|ui| {
            if styled_button_with_icon(ui, CHALKBOARD_TEACHER, "Rate Instructor").clicked() {
                next_page = Some(Page::Instructors);
            }
            if styled_button_with_icon(ui, USERS_THREE, "Rate Classmate").clicked() {
                next_page = Some(Page::Classes);
            }
        });
    });

    next_page
}

fn show_instructor(app: &App, ui: &mut Ui, user: &User) -> Option<Page> {
    let store = &app.store;
    let mut next_page = None;

    let classes: Vec<_> = store::kelas::for_instructor(store, &user.id).collect();
    let students: BTreeSet<&str> = classes
        .iter()
        .flat_map(|k| store::enrollment::students_in_kelas(store, &k.id))
        .map(|u| u.id.as_str())
        .collect();

    ui.horizontal_wrapped(|ui| {
        stat_card(ui, BOOK_OPEN, "Classes Taught", &classes.len().to_string(), "This semester");
        stat_card(ui, STUDENT, "Students", &students.len().to_string(), "Across all classes");
        stat_card(
            ui,
            STAR,
            "Average Rating",
            &format_average(store::rating::average_received(store, &user.id)),
            "From your students",
        );
    });

    ui.add_space(10.0);

    ui.columns(2, |cols| {
        section(&mut cols[0], "Your Rating Profile", |ui| radar(ui, store, &user.id));
        section(&mut cols[1], "Quick Actions", |ui| {
            if styled_button_with_icon(ui, STUDENT, "Rate Students").clicked() {
                next_page = Some(Page::Classes);
            }
            ui.add_space(5.0);
            if styled_button_with_icon(ui, CHALKBOARD_TEACHER, "Colleagues").clicked() {
                next_page = Some(Page::Instructors);
            }
        });
    });

    section(ui, "Classes", |ui| {
        ui.horizontal_wrapped(|ui| {
            for kelas in &classes {
                let count = format!("{} students", store::kelas::student_count(store, &kelas.id));
                class_card(ui, &kelas.name, &kelas.code, &count, &kelas.schedule, &kelas.room);
            }
        });
    });

    next_page
}

fn show_admin(app: &App, ui: &mut Ui) -> Option<Page> {
    let store = &app.store;
    let mut next_page = None;
    let counts = store.counts();

    ui.horizontal_wrapped(|ui| {
        stat_card(ui, USERS, "Users", &counts.users.to_string(), "Registered accounts");
        stat_card(ui, BOOK_OPEN, "Classes", &counts.kelas.to_string(), "Active sections");
        stat_card(ui, CHAT_TEXT, "Ratings", &counts.ratings.to_string(), "Submitted");
        stat_card(
            ui,
            STAR,
            "Average",
            &format_average(store::rating::overall_average(store)),
            "Across all ratings",
        );
    });

    ui.add_space(20.0);

    let (card_size, offset) = card_row_layout(ui, 3, 30.0);
    ui.horizontal(|ui| {
        ui.add_space(offset);
        if dashboard_card(ui, "Manage Users", "Students, instructors, admins", USERS, card_size).clicked() {
            next_page = Some(Page::UserManagement);
        }
        ui.add_space(30.0);
        if dashboard_card(ui, "Manage Classes", "Schedules and rooms", BOOK_OPEN, card_size).clicked() {
            next_page = Some(Page::KelasManagement);
        }
        ui.add_space(30.0);
        if dashboard_card(ui, "Enrollments", "Students per class", STUDENT, card_size).clicked() {
            next_page = Some(Page::EnrollmentManagement);
        }
    });

    ui.add_space(20.0);

    ui.columns(2, |cols| {
        section(&mut cols[0], &format!("{CHART_LINE} Ratings per Month"), |ui| {
            let months = store::stats::monthly_counts(store, 6);
            let labels: Vec<&str> = months.iter().map(|(l, _)| l.as_str()).collect();
            let values: Vec<usize> = months.iter().map(|(_, c)| *c).collect();
            charts::line_chart(ui, &labels, &values, egui::vec2(ui.available_width(), 180.0));
        });
        section(&mut cols[1], "Rating Distribution", |ui| {
            let dist = store::stats::rating_distribution(store);
            charts::pie_chart(ui, &["5 stars", "4 stars", "3 stars", "2 stars", "1 star"], &dist, 150.0);
        });
    });

    ui.columns(2, |cols| {
        section(&mut cols[0], "Activity by Weekday", |ui| {
            let days = store::stats::activity_by_weekday(store);
            charts::bar_chart(
                ui,
                &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
                &days,
                egui::vec2(ui.available_width(), 160.0),
            );
        });
        section(&mut cols[1], "Recent Activity", |ui| {
            ScrollArea::vertical().id_salt("activity_scroll").max_height(160.0).show(ui, |ui| {
                if app.log_messages.is_empty() {
                    ui.label(RichText::new("No recent activity").weak());
                }
                for entry in app.log_messages.iter().rev().take(10) {
                    let color = match entry.level {
                        LogLevel::Info => Color32::GRAY,
                        LogLevel::Success => colors::SUCCESS,
                        LogLevel::Warning => colors::WARNING,
                        LogLevel::Error => colors::ERROR,
                    };
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                                .small()
                                .color(Color32::DARK_GRAY),
                        );
                        ui.label(RichText::new(&entry.message).color(color));
                    });
                }
            });
        });
    });

    next_page
}

/// Radar of the mean received score per category.
pub fn radar(ui: &mut Ui, store: &MockStore, user_id: &str) {
    match store::rating::category_means_received(store, user_id) {
        Some(means) => {
            let labels = Category::ALL.map(|c| c.label());
            charts::radar_chart(ui, &labels, &means, 5.0, 240.0);
        }
        None => {
            ui.label(RichText::new("No ratings received yet").weak());
        }
    }
}

fn class_card(ui: &mut Ui, name: &str, code: &str, detail: &str, schedule: &str, room: &str) {
    egui::Frame::new()
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .inner_margin(egui::Margin::same(12))
        .corner_radius(egui::CornerRadius::same(6))
        .show(ui, |ui| {
            ui.set_width(220.0);
            ui.label(RichText::new(name).strong());
            ui.label(RichText::new(code).small().color(colors::PRIMARY));
            ui.label(detail);
            ui.label(RichText::new(schedule).small().weak());
            ui.label(RichText::new(room).small().weak());
        });
}
