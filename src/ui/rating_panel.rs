//! Rating wizard page: category steps, review, and submission screens.

use std::time::Duration;

use eframe::egui::{self, Align, Layout, RichText, Ui};
use tokio::runtime::Handle;
use egui_phosphor::regular::{ARROW_LEFT, ARROW_RIGHT, CHECK_CIRCLE, PAPER_PLANE_TILT};

use super::app::App;
use super::components::{back_button, colors, panel_header, primary_button_with_icon, section, star_input};
use crate::models::RatingTarget;
use crate::rating::{
    Category, RatingWizard, SubmissionEvent, SubmissionTimer, SubmittedRating, WizardError, WizardStep,
};
use crate::store;

/// Where the submission is after the wizard reached `Submitted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Editing,
    Sending,
    Confirmed,
}

/// One open rating wizard and its submission timer.
pub struct RatingSession {
    pub target: RatingTarget,
    pub wizard: RatingWizard,
    pub comment_input: String,
    pub phase: SubmitPhase,
    timer: Option<SubmissionTimer>,
}

impl RatingSession {
    pub fn new(target: RatingTarget) -> Self {
        Self {
            target,
            wizard: RatingWizard::new(),
            comment_input: String::new(),
            phase: SubmitPhase::Editing,
            timer: None,
        }
    }

    pub fn poll_timer(&mut self) -> Option<SubmissionEvent> {
        self.timer.as_mut().and_then(SubmissionTimer::poll)
    }

    pub fn confirm(&mut self) {
        self.phase = SubmitPhase::Confirmed;
    }

    /// Submit the wizard and start the confirmation/redirect timer.
    pub fn begin_sending(
        &mut self,
        rt: &Handle,
        confirm_after: Duration,
        redirect_after: Duration,
    ) -> Result<SubmittedRating, WizardError> {
        let submitted = self.wizard.submit()?;
        self.phase = SubmitPhase::Sending;
        self.timer = Some(SubmissionTimer::start(rt, confirm_after, redirect_after));
        Ok(submitted)
    }

    /// Stop a pending timer so no further events arrive.
    pub fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }

    /// True while the timer still has events to deliver.
    pub fn is_waiting(&self) -> bool {
        self.phase != SubmitPhase::Editing
    }
}

/// Deferred actions; applied once the session borrow has ended.
enum Action {
    Advance,
    Retreat,
    Submit,
}

/// Show the rating page.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut go_back = false;
    let mut action = None;

    let Some(session) = app.rating.as_mut() else {
        return true;
    };

    if session.phase == SubmitPhase::Editing && back_button(ui) {
        go_back = true;
    }

    panel_header(ui, session.target.kind.title());

    egui::ScrollArea::vertical().id_salt("rating_scroll").show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&session.target.name).size(18.0).strong());
            if let Some(kelas) = &session.target.kelas_name {
                ui.label(RichText::new(format!("· {kelas}")).weak());
            }
        });
        ui.add_space(10.0);

        match session.phase {
            SubmitPhase::Sending => {
                show_sending(ui);
                return;
            }
            SubmitPhase::Confirmed => {
                show_confirmed(ui, &session.target.name);
                return;
            }
            SubmitPhase::Editing => {}
        }

        show_progress(ui, session.wizard.step());
        ui.add_space(15.0);

        match session.wizard.step() {
            WizardStep::Category(category) => {
                section(ui, &format!("{} ({} of {})", category.label(), category.index() + 1, 3), |ui| {
                    for question in category.questions() {
                        ui.label(question.text);
                        let current = session.wizard.draft().score(question.id);
                        if let Some(score) = star_input(ui, current, 26.0)
                            && let Err(e) = session.wizard.set_score(question.id, score)
                        {
                            tracing::warn!(error = %e, "Score rejected");
                        }
                        ui.add_space(8.0);
                    }
                    let missing = session.wizard.draft().missing_in(category);
                    if missing > 0 {
                        ui.label(RichText::new(format!("{missing} question(s) left")).weak());
                    }
                });
            }
            WizardStep::Review | WizardStep::Submitted => {
                section(ui, "Summary", |ui| {
                    egui::Grid::new("review_grid")
                        .num_columns(2)
                        .spacing([30.0, 6.0])
                        .show(ui, |ui| {
                            for average in session.wizard.averages() {
                                ui.label(average.category.label());
                                ui.label(RichText::new(average.display()).strong().color(colors::STAR));
                                ui.end_row();
                            }
                        });
                });
                section(ui, "Comment", |ui| {
                    let response = ui.add(
                        egui::TextEdit::multiline(&mut session.comment_input)
                            .desired_rows(4)
                            .desired_width(f32::INFINITY)
                            .hint_text("Share constructive feedback..."),
                    );
                    if response.changed()
                        && let Err(e) = session.wizard.set_comment(session.comment_input.clone())
                    {
                        tracing::warn!(error = %e, "Comment rejected");
                    }
                });
            }
        }

        ui.add_space(15.0);
        ui.separator();

        ui.horizontal(|ui| {
            let first = session.wizard.step() == WizardStep::Category(Category::ALL[0]);
            if !first && ui.button(format!("{ARROW_LEFT} Back")).clicked() {
                action = Some(Action::Retreat);
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| match session.wizard.step() {
                WizardStep::Category(_) => {
                    if primary_button_with_icon(ui, ARROW_RIGHT, "Next").clicked() {
                        action = Some(Action::Advance);
                    }
                }
                WizardStep::Review => {
                    if primary_button_with_icon(ui, PAPER_PLANE_TILT, "Submit Rating").clicked() {
                        action = Some(Action::Submit);
                    }
                }
                WizardStep::Submitted => {}
            });
        });
    });

    if let Some(action) = action {
        apply(app, action);
    }

    go_back
}

fn apply(app: &mut App, action: Action) {
    let Some(session) = app.rating.as_mut() else {
        return;
    };

    let result = match action {
        Action::Advance => session.wizard.advance().map(|_| ()),
        Action::Retreat => session.wizard.retreat().map(|_| ()),
        Action::Submit => match session.begin_sending(
            app.rt.handle(),
            app.config.rating.submit_delay(),
            app.config.rating.redirect_delay(),
        ) {
            Ok(submitted) => {
                let target = session.target.clone();

                if let Some(from) = app.auth.current_user().cloned() {
                    store::rating::record(&mut app.store, &from, &target, &submitted, store::today());
                    app.log_info(format!("Rated {} ({:.1})", target.name, submitted.overall));
                }
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        app.notify_warning(e.to_string());
    }
}

fn show_progress(ui: &mut Ui, step: WizardStep) {
    ui.horizontal(|ui| {
        for (i, label) in WizardStep::labels().iter().enumerate() {
            let (color, text) = match i.cmp(&step.index()) {
                std::cmp::Ordering::Less => (colors::SUCCESS, format!("{CHECK_CIRCLE} {label}")),
                std::cmp::Ordering::Equal => (colors::PRIMARY, format!("{} {label}", i + 1)),
                std::cmp::Ordering::Greater => (colors::NEUTRAL, format!("{} {label}", i + 1)),
            };
            let text = RichText::new(text).color(color);
            ui.label(if i == step.index() { text.strong() } else { text });
            if i + 1 < WizardStep::COUNT {
                ui.label(RichText::new("›").color(colors::NEUTRAL));
            }
        }
    });
}

fn show_sending(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.spinner();
        ui.add_space(10.0);
        ui.label(RichText::new("Sending your rating...").size(16.0));
    });
}

fn show_confirmed(ui: &mut Ui, name: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new(CHECK_CIRCLE).size(64.0).color(colors::SUCCESS));
        ui.add_space(10.0);
        ui.label(RichText::new("Rating submitted!").size(22.0).strong());
        ui.label(format!("Thank you for rating {name}."));
        ui.add_space(5.0);
        ui.label(RichText::new("Returning to the dashboard...").weak());
    });
}
