//! GUI panels and application state.

pub mod app;
pub mod charts;
pub mod classes_panel;
pub mod components;
pub mod dashboard;
pub mod enrollment_panel;
pub mod instructors_panel;
pub mod kelas_panel;
pub mod login_panel;
pub mod profile_panel;
pub mod rating_panel;
pub mod toast;
pub mod user_panel;

pub use app::App;
