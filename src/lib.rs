pub mod auth;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod logging;
pub mod models;
pub mod rating;
pub mod store;
pub mod ui;

pub use error::{AppError, Result};
