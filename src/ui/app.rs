//! Main application state and page routing.

use chrono::{DateTime, Local, NaiveDate};
use eframe::egui::{self, Align, Layout, RichText};
use egui_phosphor::regular::{MOON, SIGN_OUT, SUN};

use crate::auth::{AuthContext, LocalStorage};
use crate::config::{AppConfig, AppPaths};
use crate::AppError;
use crate::export;
use crate::filter;
use crate::models::{
    CreateEnrollment, CreateKelas, CreateUser, Kelas, RatingTarget, Role, TransferEnrollment, UpdateKelas,
    UpdateProfile, UpdateUser, User,
};
use crate::rating::SubmissionEvent;
use crate::store::{self, MockStore};

use super::components::{colors, role_badge};
use super::rating_panel::RatingSession;
use super::toast::{ToastKind, Toasts};
use super::{
    classes_panel, dashboard, enrollment_panel, instructors_panel, kelas_panel, login_panel, profile_panel,
    rating_panel, user_panel,
};

/// Page being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Login,
    Dashboard,
    Instructors,
    Classes,
    Rating,
    Profile,
    UserManagement,
    KelasManagement,
    EnrollmentManagement,
}

impl Page {
    /// Get the display name for the page.
    pub fn name(&self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::Dashboard => "Dashboard",
            Page::Instructors => "Instructors",
            Page::Classes => "My Classes",
            Page::Rating => "Rating",
            Page::Profile => "Profile",
            Page::UserManagement => "Users",
            Page::KelasManagement => "Classes",
            Page::EnrollmentManagement => "Enrollments",
        }
    }

    /// Navigation label, which depends on who is looking.
    pub fn nav_label(&self, role: Role) -> &'static str {
        match (self, role) {
            (Page::Instructors, Role::Admin) => "Admins",
            _ => self.name(),
        }
    }

    /// Whether a logged-in user with `role` may open this page.
    pub fn allowed_for(&self, role: Role) -> bool {
        match self {
            Page::Login => false,
            Page::Dashboard | Page::Instructors | Page::Rating | Page::Profile => true,
            Page::Classes => matches!(role, Role::Dosen | Role::Mahasiswa),
            Page::UserManagement | Page::KelasManagement | Page::EnrollmentManagement => role == Role::Admin,
        }
    }

    /// Page actually shown for a request, given the session role.
    pub fn resolve(requested: Page, role: Option<Role>) -> Page {
        match role {
            None => Page::Login,
            Some(role) if requested.allowed_for(role) => requested,
            Some(_) => Page::Dashboard,
        }
    }

    /// Top navigation entries for a role.
    pub fn nav_for(role: Role) -> &'static [Page] {
        match role {
            Role::Mahasiswa | Role::Dosen => &[Page::Dashboard, Page::Classes, Page::Instructors, Page::Profile],
            Role::Admin => &[
                Page::Dashboard,
                Page::UserManagement,
                Page::KelasManagement,
                Page::EnrollmentManagement,
                Page::Instructors,
                Page::Profile,
            ],
        }
    }
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

const MAX_LOG_ENTRIES: usize = 100;

/// Login form state.
#[derive(Default, Clone)]
pub struct LoginForm {
    pub nim_nip: String,
    pub password: String,
    pub show_password: bool,
}

/// Profile edit form state.
#[derive(Default, Clone)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub is_editing: bool,
}

impl ProfileForm {
    pub fn edit(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            department: user.department.clone().unwrap_or_default(),
            is_editing: true,
        }
    }

    /// Only fields that differ from `user` are included.
    pub fn changes(&self, user: &User) -> UpdateProfile {
        let changed = |new: &str, old: &str| (new.trim() != old).then(|| new.trim().to_string());
        UpdateProfile {
            name: changed(&self.name, &user.name),
            email: changed(&self.email, &user.email),
            phone: changed(&self.phone, user.phone.as_deref().unwrap_or_default()),
            department: changed(&self.department, user.department.as_deref().unwrap_or_default()),
            avatar: None,
        }
    }
}

/// Form state for user CRUD.
#[derive(Clone)]
pub struct UserForm {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub nim_nip: String,
    pub role: Role,
    pub department: String,
    pub phone: String,
    pub is_open: bool,
    pub is_editing: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            nim_nip: String::new(),
            role: Role::Mahasiswa,
            department: String::new(),
            phone: String::new(),
            is_open: false,
            is_editing: false,
        }
    }
}

impl UserForm {
    /// Reset the form to default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Create a form pre-filled for editing an existing user.
    pub fn edit(user: &User) -> Self {
        Self {
            id: Some(user.id.clone()),
            name: user.name.clone(),
            email: user.email.clone(),
            nim_nip: user.nim_nip.clone(),
            role: user.role,
            department: user.department.clone().unwrap_or_default(),
            phone: user.phone.clone().unwrap_or_default(),
            is_open: true,
            is_editing: true,
        }
    }
}

/// Form state for kelas CRUD.
#[derive(Default, Clone)]
pub struct KelasForm {
    pub id: Option<String>,
    pub name: String,
    pub code: String,
    pub semester: u8,
    pub dosen_id: Option<String>,
    pub schedule: String,
    pub room: String,
    pub is_open: bool,
    pub is_editing: bool,
}

impl KelasForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn new_open() -> Self {
        Self {
            semester: 1,
            is_open: true,
            ..Default::default()
        }
    }

    pub fn edit(kelas: &Kelas) -> Self {
        Self {
            id: Some(kelas.id.clone()),
            name: kelas.name.clone(),
            code: kelas.code.clone(),
            semester: kelas.semester,
            dosen_id: Some(kelas.dosen_id.clone()),
            schedule: kelas.schedule.clone(),
            room: kelas.room.clone(),
            is_open: true,
            is_editing: true,
        }
    }
}

/// Form state for adding an enrollment.
#[derive(Clone)]
pub struct EnrollmentForm {
    pub student_id: Option<String>,
    pub kelas_id: Option<String>,
    pub enrolled_date: NaiveDate,
    pub is_open: bool,
}

impl Default for EnrollmentForm {
    fn default() -> Self {
        Self {
            student_id: None,
            kelas_id: None,
            enrolled_date: store::today(),
            is_open: false,
        }
    }
}

impl EnrollmentForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Form state for moving a student to another class.
#[derive(Clone)]
pub struct TransferForm {
    pub student_id: String,
    pub student_name: String,
    pub from_kelas_id: String,
    pub to_kelas_id: Option<String>,
    pub transfer_date: NaiveDate,
}

/// Target for delete confirmation dialog.
#[derive(Clone)]
pub enum DeleteTarget {
    User(String, String),
    Kelas(String, String),
    Enrollment(String, String),
}

/// Main application state.
pub struct App {
    // Runtime for submission timers
    pub rt: tokio::runtime::Runtime,

    pub config: AppConfig,
    pub paths: AppPaths,

    // Data
    pub store: MockStore,
    pub auth: AuthContext,

    // Navigation
    pub current_page: Page,

    // Notifications
    pub toasts: Toasts,
    pub log_messages: Vec<LogEntry>,

    // Forms
    pub login_form: LoginForm,
    pub profile_form: ProfileForm,
    pub user_form: UserForm,
    pub kelas_form: KelasForm,
    pub enrollment_form: EnrollmentForm,
    pub transfer_form: Option<TransferForm>,

    // Search/filter state
    pub instructor_search: String,
    pub user_search: String,
    pub user_role_filter: Option<Role>,
    pub kelas_search: String,
    pub enrollment_search: String,
    pub enrollment_kelas_filter: Option<String>,

    // Rating wizard; dropped when leaving the Rating page
    pub rating: Option<RatingSession>,

    // Dialogs
    pub show_delete_confirm: bool,
    pub delete_target: Option<DeleteTarget>,
    pub error_message: Option<String>,
}

impl App {
    pub fn new(
        rt: tokio::runtime::Runtime,
        config: AppConfig,
        paths: AppPaths,
        initial_error: Option<String>,
    ) -> Self {
        let storage = LocalStorage::open(paths.session_file(&config.storage));
        let auth = AuthContext::restore(storage, config.storage.session_key.clone());
        let current_page = Page::resolve(Page::Dashboard, auth.role());
        let toasts = Toasts::new(config.ui.toast_duration());

        let mut app = Self {
            rt,
            paths,
            store: MockStore::seeded(),
            auth,
            current_page,
            toasts,
            log_messages: Vec::new(),
            login_form: LoginForm::default(),
            profile_form: ProfileForm::default(),
            user_form: UserForm::default(),
            kelas_form: KelasForm::default(),
            enrollment_form: EnrollmentForm::default(),
            transfer_form: None,
            instructor_search: String::new(),
            user_search: String::new(),
            user_role_filter: None,
            kelas_search: String::new(),
            enrollment_search: String::new(),
            enrollment_kelas_filter: None,
            rating: None,
            show_delete_confirm: false,
            delete_target: None,
            error_message: initial_error,
            config,
        };

        if let Some(user) = app.auth.current_user() {
            let message = format!("Welcome back, {}", user.name);
            app.log_info(message);
        }

        app
    }

    /// Log a message to the UI log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        if self.log_messages.len() > MAX_LOG_ENTRIES {
            self.log_messages.remove(0);
        }
    }

    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// Toast and log a success message.
    pub fn notify_success(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.toasts.push(ToastKind::Success, message.clone());
        self.log(LogLevel::Success, message);
    }

    pub fn notify_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.toasts.push(ToastKind::Warning, message.clone());
        self.log(LogLevel::Warning, message);
    }

    /// Toast and log an error message.
    pub fn notify_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.toasts.push(ToastKind::Error, message.clone());
        self.log(LogLevel::Error, message);
    }

    pub fn current_user(&self) -> Option<&User> {
        self.auth.current_user()
    }

    /// Navigate to `requested`, subject to the current role.
    pub fn navigate(&mut self, requested: Page) {
        let mut page = Page::resolve(requested, self.auth.role());
        if page == Page::Rating && self.rating.is_none() {
            page = Page::Dashboard;
        }
        if page != Page::Rating
            && let Some(mut session) = self.rating.take()
        {
            session.cancel_timer();
            tracing::debug!("Rating session discarded");
        }
        if page == Page::Profile
            && let Some(user) = self.auth.current_user()
        {
            self.profile_form = ProfileForm {
                is_editing: false,
                ..ProfileForm::edit(user)
            };
        }
        if page != self.current_page {
            tracing::info!(from = self.current_page.name(), to = page.name(), "Navigate");
        }
        self.current_page = page;
    }

    /// Attempt to log in with the login form.
    pub fn login(&mut self) {
        let nim_nip = self.login_form.nim_nip.trim().to_string();
        if nim_nip.is_empty() || self.login_form.password.is_empty() {
            self.notify_warning("Please enter your NIM/NIP and password");
            return;
        }

        if self.auth.login(&self.store.users, &nim_nip, &self.login_form.password) {
            self.login_form = LoginForm::default();
            let name = self.auth.current_user().map(|u| u.name.clone()).unwrap_or_default();
            self.notify_success(format!("Welcome, {name}"));
            self.navigate(Page::Dashboard);
        } else {
            self.login_form.password.clear();
            self.notify_error("Invalid NIM/NIP or password");
        }
    }

    pub fn logout(&mut self) {
        self.auth.logout();
        self.log_info("Logged out");
        self.navigate(Page::Login);
    }

    /// Open the rating wizard for `target`.
    pub fn start_rating(&mut self, target: RatingTarget) {
        tracing::info!(target = %target.user_id, kind = ?target.kind, "Rating started");
        self.rating = Some(RatingSession::new(target));
        self.navigate(Page::Rating);
    }

    /// Apply a profile update to the session and the user directory.
    pub fn update_profile(&mut self, update: UpdateProfile) -> bool {
        let Some(id) = self.auth.current_user().map(|u| u.id.clone()) else {
            return false;
        };
        if !self.auth.update_profile(update.clone()) {
            return false;
        }
        store::user::apply_profile(&mut self.store, &id, update);
        true
    }

    pub fn save_user(&mut self) {
        let form = self.user_form.clone();
        let optional = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };

        let result = match &form.id {
            Some(id) => store::user::update(
                &mut self.store,
                id,
                UpdateUser {
                    name: Some(form.name.clone()),
                    email: Some(form.email.clone()),
                    nim_nip: Some(form.nim_nip.clone()),
                    role: Some(form.role),
                    department: Some(optional(&form.department)),
                    phone: Some(optional(&form.phone)),
                },
            ),
            None => store::user::create(
                &mut self.store,
                CreateUser {
                    name: form.name.clone(),
                    email: form.email.clone(),
                    nim_nip: form.nim_nip.clone(),
                    role: form.role,
                    department: optional(&form.department),
                    phone: optional(&form.phone),
                },
            ),
        };

        match result {
            Ok(user) => {
                self.user_form.reset();
                self.notify_success(format!("User '{}' saved", user.name));
            }
            Err(e) => self.notify_error(e.to_string()),
        }
    }

    pub fn save_kelas(&mut self) {
        let form = self.kelas_form.clone();
        let Some(dosen_id) = form.dosen_id.clone() else {
            self.notify_error("Please select an instructor");
            return;
        };

        let result = match &form.id {
            Some(id) => store::kelas::update(
                &mut self.store,
                id,
                UpdateKelas {
                    name: Some(form.name.clone()),
                    code: Some(form.code.clone()),
                    semester: Some(form.semester),
                    dosen_id: Some(dosen_id),
                    schedule: Some(form.schedule.clone()),
                    room: Some(form.room.clone()),
                },
            ),
            None => store::kelas::create(
                &mut self.store,
                CreateKelas {
                    name: form.name.clone(),
                    code: form.code.clone(),
                    semester: form.semester,
                    dosen_id,
                    schedule: form.schedule.clone(),
                    room: form.room.clone(),
                },
            ),
        };

        match result {
            Ok(kelas) => {
                self.kelas_form.reset();
                self.notify_success(format!("Class '{}' saved", kelas.name));
            }
            Err(e) => self.notify_error(e.to_string()),
        }
    }

    pub fn save_enrollment(&mut self) {
        let form = self.enrollment_form.clone();
        let (Some(student_id), Some(kelas_id)) = (form.student_id, form.kelas_id) else {
            self.notify_error("Please select a student and a class");
            return;
        };

        match store::enrollment::create(
            &mut self.store,
            CreateEnrollment {
                student_id,
                kelas_id,
                enrolled_date: form.enrolled_date,
            },
        ) {
            Ok(_) => {
                self.enrollment_form.reset();
                self.notify_success("Student enrolled");
            }
            Err(e) => self.notify_error(e.to_string()),
        }
    }

    pub fn save_transfer(&mut self) {
        let Some(form) = self.transfer_form.clone() else {
            return;
        };
        let Some(to_kelas_id) = form.to_kelas_id else {
            self.notify_error("Please select the target class");
            return;
        };

        match store::enrollment::transfer(
            &mut self.store,
            TransferEnrollment {
                student_id: form.student_id,
                from_kelas_id: form.from_kelas_id,
                to_kelas_id,
                transfer_date: form.transfer_date,
            },
        ) {
            Ok(_) => {
                self.transfer_form = None;
                self.notify_success(format!("{} transferred", form.student_name));
            }
            Err(e) => self.notify_error(e.to_string()),
        }
    }

    /// Export the filtered enrollment table to Excel.
    pub fn export_enrollments(&mut self) {
        let Some(path) = export::show_save_dialog(&export::generate_export_filename("enrollments")) else {
            return;
        };

        let rows = store::enrollment::rows(&self.store);
        let rows = filter::filter_enrollments(
            &rows,
            &self.enrollment_search,
            self.enrollment_kelas_filter.as_deref(),
        );
        let result = export::export_enrollments_to_excel(&rows, &path).map_err(AppError::from);

        match result {
            Ok(()) => self.notify_success(format!("Exported to: {}", path.display())),
            Err(e) => {
                tracing::error!(error = %e, "Enrollment export failed");
                self.error_message = Some(e.to_string());
                self.log(LogLevel::Error, e.to_string());
            }
        }
    }

    /// Export the filtered user table to Excel.
    pub fn export_users(&mut self) {
        let Some(path) = export::show_save_dialog(&export::generate_export_filename("users")) else {
            return;
        };

        let users = filter::filter_users(&self.store.users, &self.user_search, self.user_role_filter);
        let result = export::export_users_to_excel(&users, &path).map_err(AppError::from);

        match result {
            Ok(()) => self.notify_success(format!("Exported to: {}", path.display())),
            Err(e) => {
                tracing::error!(error = %e, "User export failed");
                self.error_message = Some(e.to_string());
                self.log(LogLevel::Error, e.to_string());
            }
        }
    }

    /// Switch between light and dark theme and remember the choice.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.config.ui.dark_mode = !self.config.ui.dark_mode;
        ctx.set_visuals(if self.config.ui.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        if let Err(e) = self.config.save(&self.paths.config_file).map_err(AppError::from) {
            tracing::error!("Failed to save config: {}", e);
            self.notify_warning(e.to_string());
        }
    }

    /// Deliver submission timer events.
    fn poll_rating_timer(&mut self, ctx: &egui::Context) {
        let Some(session) = self.rating.as_mut() else {
            return;
        };

        let mut redirect = false;
        while let Some(event) = session.poll_timer() {
            match event {
                SubmissionEvent::Confirmed => session.confirm(),
                SubmissionEvent::Redirect => redirect = true,
            }
        }

        if redirect {
            self.notify_success("Rating submitted, thank you!");
            self.navigate(Page::Dashboard);
        } else if session.is_waiting() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    /// Render the top navigation bar.
    fn show_nav_bar(&mut self, ctx: &egui::Context) {
        let Some(user) = self.auth.current_user().cloned() else {
            return;
        };

        let mut next_page = None;
        let mut logout = false;
        let mut toggle_theme = false;

        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("EduRate").size(18.0).strong().color(colors::PRIMARY));
                ui.add_space(20.0);

                for &page in Page::nav_for(user.role) {
                    if ui
                        .selectable_label(self.current_page == page, page.nav_label(user.role))
                        .clicked()
                    {
                        next_page = Some(page);
                    }
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(format!("{SIGN_OUT} Logout")).clicked() {
                        logout = true;
                    }
                    let theme_icon = if self.config.ui.dark_mode { SUN } else { MOON };
                    if ui.button(theme_icon).on_hover_text("Toggle theme").clicked() {
                        toggle_theme = true;
                    }
                    role_badge(ui, user.role);
                    ui.label(&user.name);
                });
            });
        });

        if toggle_theme {
            self.toggle_theme(ctx);
        }
        if logout {
            self.logout();
        } else if let Some(page) = next_page {
            self.navigate(page);
        }
    }

    /// Render modal dialogs (error, delete confirmation).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        if self.show_delete_confirm
            && let Some(ref target) = self.delete_target.clone()
        {
            let (title, message) = match target {
                DeleteTarget::User(_, name) => ("Delete User", format!("Delete user '{name}'?")),
                DeleteTarget::Kelas(_, name) => (
                    "Delete Class",
                    format!("Delete class '{name}'? Its enrollments are removed too."),
                ),
                DeleteTarget::Enrollment(_, name) => ("Remove Enrollment", format!("Remove enrollment of {name}?")),
            };

            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                        }
                        if ui.button("Delete").clicked() {
                            self.confirm_delete();
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                        }
                    });
                });
        }
    }

    /// Execute the confirmed delete operation.
    fn confirm_delete(&mut self) {
        let Some(target) = self.delete_target.take() else {
            return;
        };

        match target {
            DeleteTarget::User(id, name) => {
                if self.auth.current_user().is_some_and(|u| u.id == id) {
                    self.notify_error("You cannot delete your own account");
                    return;
                }
                match store::user::delete(&mut self.store, &id) {
                    Ok(true) => self.notify_success(format!("User '{name}' deleted")),
                    Ok(false) => self.notify_error("User not found"),
                    Err(e) => self.notify_error(e.to_string()),
                }
            }
            DeleteTarget::Kelas(id, name) => {
                if store::kelas::delete(&mut self.store, &id) {
                    self.notify_success(format!("Class '{name}' deleted"));
                } else {
                    self.notify_error("Class not found");
                }
            }
            DeleteTarget::Enrollment(id, name) => {
                if store::enrollment::remove(&mut self.store, &id) {
                    self.notify_success(format!("Enrollment of {name} removed"));
                } else {
                    self.notify_error("Enrollment not found");
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_rating_timer(ctx);

        self.show_nav_bar(ctx);
        self.show_dialogs(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.current_page {
            Page::Login => login_panel::show(self, ui),
            Page::Dashboard => {
                if let Some(next) = dashboard::show(self, ui) {
                    self.navigate(next);
                }
            }
            Page::Instructors => {
                if instructors_panel::show(self, ui) {
                    self.navigate(Page::Dashboard);
                }
            }
            Page::Classes => {
                if classes_panel::show(self, ui) {
                    self.navigate(Page::Dashboard);
                }
            }
            Page::Rating => {
                if rating_panel::show(self, ui) {
                    self.navigate(Page::Dashboard);
                }
            }
            Page::Profile => {
                if profile_panel::show(self, ui) {
                    self.navigate(Page::Dashboard);
                }
            }
            Page::UserManagement => {
                if user_panel::show(self, ui) {
                    self.navigate(Page::Dashboard);
                }
            }
            Page::KelasManagement => {
                if kelas_panel::show(self, ui) {
                    self.navigate(Page::Dashboard);
                }
            }
            Page::EnrollmentManagement => {
                if enrollment_panel::show(self, ui) {
                    self.navigate(Page::Dashboard);
                }
            }
        });

        self.toasts.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const ALL_PAGES: [Page; 9] = [
        Page::Login,
        Page::Dashboard,
        Page::Instructors,
        Page::Classes,
        Page::Rating,
        Page::Profile,
        Page::UserManagement,
        Page::KelasManagement,
        Page::EnrollmentManagement,
    ];

    #[test]
    fn test_logged_out_always_login() {
        for page in ALL_PAGES {
            assert_eq!(Page::resolve(page, None), Page::Login);
        }
    }

    #[test]
    fn test_login_page_redirects_when_logged_in() {
        for role in Role::ALL {
            assert_eq!(Page::resolve(Page::Login, Some(role)), Page::Dashboard);
        }
    }

    #[test]
    fn test_management_pages_admin_only() {
        for page in [Page::UserManagement, Page::KelasManagement, Page::EnrollmentManagement] {
            assert_eq!(Page::resolve(page, Some(Role::Admin)), page);
            assert_eq!(Page::resolve(page, Some(Role::Dosen)), Page::Dashboard);
            assert_eq!(Page::resolve(page, Some(Role::Mahasiswa)), Page::Dashboard);
        }
    }

    #[test]
    fn test_classes_not_for_admin() {
        assert_eq!(Page::resolve(Page::Classes, Some(Role::Admin)), Page::Dashboard);
        assert_eq!(Page::resolve(Page::Classes, Some(Role::Dosen)), Page::Classes);
        assert_eq!(Page::resolve(Page::Classes, Some(Role::Mahasiswa)), Page::Classes);
    }

    #[test]
    fn test_nav_entries_are_allowed() {
        for role in Role::ALL {
            for page in Page::nav_for(role) {
                assert!(page.allowed_for(role), "{page:?} in nav for {role} but not allowed");
            }
        }
    }

    fn test_app(dir: &std::path::Path) -> App {
        let mut config = AppConfig::default();
        config.rating.submit_delay_ms = 1;
        config.rating.redirect_delay_ms = 1;
        let paths = AppPaths {
            config_file: dir.join("config.toml"),
            data_dir: dir.to_path_buf(),
            log_dir: dir.join("logs"),
        };
        let rt = tokio::runtime::Runtime::new().unwrap();
        App::new(rt, config, paths, None)
    }

    fn login_as(app: &mut App, nim_nip: &str) {
        app.login_form.nim_nip = nim_nip.to_string();
        app.login_form.password = crate::auth::MOCK_PASSWORD.to_string();
        app.login();
        assert!(app.auth.is_logged_in());
    }

    fn answer_all(session: &mut RatingSession) {
        for question in crate::rating::QUESTIONS {
            session.wizard.set_score(question.id, 4).unwrap();
        }
        for _ in 0..3 {
            session.wizard.advance().unwrap();
        }
        session.wizard.set_comment("Clear explanations").unwrap();
    }

    #[test]
    fn test_leaving_rating_discards_session_and_timer() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        login_as(&mut app, "NIM001");

        app.start_rating(RatingTarget {
            user_id: "1".to_string(),
            name: "Budi Santoso".to_string(),
            kind: crate::models::RatingKind::Dosen,
            kelas_name: None,
        });
        assert_eq!(app.current_page, Page::Rating);

        let handle = app.rt.handle().clone();
        let session = app.rating.as_mut().unwrap();
        answer_all(session);
        session
            .begin_sending(&handle, Duration::from_millis(1), Duration::from_millis(1))
            .unwrap();

        app.navigate(Page::Profile);
        assert!(app.rating.is_none());
        assert_eq!(app.current_page, Page::Profile);

        std::thread::sleep(Duration::from_millis(50));
        app.poll_rating_timer(&egui::Context::default());
        assert_eq!(app.current_page, Page::Profile);

        app.navigate(Page::Rating);
        assert_eq!(app.current_page, Page::Dashboard);
    }

    #[test]
    fn test_rating_timer_redirects_to_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        login_as(&mut app, "NIM001");

        app.start_rating(RatingTarget {
            user_id: "1".to_string(),
            name: "Budi Santoso".to_string(),
            kind: crate::models::RatingKind::Dosen,
            kelas_name: None,
        });
        let handle = app.rt.handle().clone();
        let session = app.rating.as_mut().unwrap();
        answer_all(session);
        session
            .begin_sending(&handle, Duration::from_millis(1), Duration::from_millis(1))
            .unwrap();

        std::thread::sleep(Duration::from_millis(100));
        app.poll_rating_timer(&egui::Context::default());

        assert_eq!(app.current_page, Page::Dashboard);
        assert!(app.rating.is_none());
    }

    #[test]
    fn test_profile_form_blank_department_clears_field() {
        let store = MockStore::seeded();
        let mut user = store::user::get_by_id(&store, "2").unwrap().clone();

        let mut form = ProfileForm::edit(&user);
        form.department = "   ".to_string();
        assert!(user.apply(form.changes(&user)));

        assert_eq!(user.department, None);
        assert_eq!(user.department_or_dash(), "-");
    }

    #[test]
    fn test_profile_form_changes() {
        let store = MockStore::seeded();
        let user = store::user::get_by_id(&store, "2").unwrap();

        let mut form = ProfileForm::edit(user);
        assert_eq!(form.changes(user), UpdateProfile::default());

        form.phone = " 0000 ".to_string();
        let changes = form.changes(user);
        assert_eq!(changes.phone.as_deref(), Some("0000"));
        assert!(changes.name.is_none());
        assert!(changes.email.is_none());
    }
}
