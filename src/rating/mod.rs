//! Rating questions, the multi-step wizard and submission timing.

pub mod question;
pub mod summary;
pub mod timer;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use question::{Category, QUESTIONS, Question};
pub use summary::CategoryAverage;
pub use timer::{SubmissionEvent, SubmissionTimer};
pub use wizard::{RatingDraft, RatingWizard, SubmittedRating, WizardError, WizardStep};
