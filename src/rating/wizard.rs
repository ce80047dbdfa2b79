//! Multi-step rating wizard state machine.
//!
//! Three category steps collect 1-5 scores, a review step collects a comment,
//! and a successful submit freezes the draft.

use std::collections::BTreeMap;

use thiserror::Error;

use super::question::{self, Category};
use super::summary::{self, CategoryAverage};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

/// Wizard validation failures. None of these mutate the wizard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Please answer all {category} questions ({missing} left)")]
    IncompleteStep { category: Category, missing: usize },

    #[error("Please leave a comment before submitting")]
    MissingComment,

    #[error("Score must be between 1 and 5, got {0}")]
    ScoreOutOfRange(u8),

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Already at the first step")]
    AtFirstStep,

    #[error("Cannot {action} from the {step} step")]
    InvalidTransition { action: &'static str, step: &'static str },

    #[error("Rating has already been submitted")]
    AlreadySubmitted,
}

/// Current wizard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Category(Category),
    Review,
    Submitted,
}

impl WizardStep {
    /// Number of steps shown in the progress indicator.
    pub const COUNT: usize = 4;

    /// Step index (0..=3); `Submitted` reports the review index.
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Category(category) => category.index(),
            WizardStep::Review | WizardStep::Submitted => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Category(category) => category.label(),
            WizardStep::Review => "Review",
            WizardStep::Submitted => "Submitted",
        }
    }

    /// Labels for every step, in order.
    pub fn labels() -> [&'static str; Self::COUNT] {
        ["Teaching", "Discipline", "Attitude", "Review"]
    }
}

/// Scores and comment collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingDraft {
    scores: BTreeMap<&'static str, u8>,
    comment: String,
}

impl RatingDraft {
    pub fn score(&self, question_id: &str) -> Option<u8> {
        self.scores.get(question_id).copied()
    }

    pub fn scores(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        self.scores.iter().map(|(id, score)| (*id, *score))
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Number of unanswered questions in a category.
    pub fn missing_in(&self, category: Category) -> usize {
        category.questions().filter(|q| !self.scores.contains_key(q.id)).count()
    }

    pub fn is_complete(&self, category: Category) -> bool {
        self.missing_in(category) == 0
    }
}

/// Frozen result of a successful submit.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedRating {
    pub scores: BTreeMap<&'static str, u8>,
    pub comment: String,
    pub averages: Vec<CategoryAverage>,
    pub overall: f64,
}

#[derive(Debug, Clone)]
pub struct RatingWizard {
    step: WizardStep,
    draft: RatingDraft,
}

impl Default for RatingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RatingWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Category(Category::ALL[0]),
            draft: RatingDraft::default(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &RatingDraft {
        &self.draft
    }

    pub fn is_submitted(&self) -> bool {
        self.step == WizardStep::Submitted
    }

    /// Set or overwrite a question's score.
    pub fn set_score(&mut self, question_id: &str, score: u8) -> Result<(), WizardError> {
        self.ensure_open()?;
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(WizardError::ScoreOutOfRange(score));
        }
        let question =
            question::find(question_id).ok_or_else(|| WizardError::UnknownQuestion(question_id.to_string()))?;

        self.draft.scores.insert(question.id, score);
        Ok(())
    }

    /// Set the comment. Only allowed on the review step.
    pub fn set_comment(&mut self, comment: impl Into<String>) -> Result<(), WizardError> {
        match self.step {
            WizardStep::Review => {
                self.draft.comment = comment.into();
                Ok(())
            }
            WizardStep::Submitted => Err(WizardError::AlreadySubmitted),
            WizardStep::Category(_) => Err(WizardError::InvalidTransition {
                action: "comment",
                step: self.step.label(),
            }),
        }
    }

    /// Move to the next step if the current category is fully answered.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        match self.step {
            WizardStep::Category(category) => {
                let missing = self.draft.missing_in(category);
                if missing > 0 {
                    tracing::debug!(%category, missing, "Advance blocked");
                    return Err(WizardError::IncompleteStep { category, missing });
                }
                self.step = match Category::from_index(category.index() + 1) {
                    Some(next) => WizardStep::Category(next),
                    None => WizardStep::Review,
                };
                Ok(self.step)
            }
            WizardStep::Review => Err(WizardError::InvalidTransition {
                action: "advance",
                step: "Review",
            }),
            WizardStep::Submitted => Err(WizardError::AlreadySubmitted),
        }
    }

    /// Move back one step. Entered data is kept.
    pub fn retreat(&mut self) -> Result<WizardStep, WizardError> {
        self.step = match self.step {
            WizardStep::Category(category) => match category.index().checked_sub(1) {
                Some(prev) => WizardStep::Category(Category::ALL[prev]),
                None => return Err(WizardError::AtFirstStep),
            },
            WizardStep::Review => WizardStep::Category(Category::ALL[Category::ALL.len() - 1]),
            WizardStep::Submitted => return Err(WizardError::AlreadySubmitted),
        };
        Ok(self.step)
    }

    /// Submit from the review step. The wizard becomes terminal on success.
    pub fn submit(&mut self) -> Result<SubmittedRating, WizardError> {
        match self.step {
            WizardStep::Review => {}
            WizardStep::Submitted => return Err(WizardError::AlreadySubmitted),
            WizardStep::Category(_) => {
                return Err(WizardError::InvalidTransition {
                    action: "submit",
                    step: self.step.label(),
                });
            }
        }
        if self.draft.comment.trim().is_empty() {
            return Err(WizardError::MissingComment);
        }
        self.step = WizardStep::Submitted;
        Ok(SubmittedRating {
            scores: self.draft.scores.clone(),
            comment: self.draft.comment.trim().to_string(),
            averages: self.averages(),
            overall: summary::overall_mean(&self.draft).unwrap_or_default(),
        })
    }

    /// Review-step averages per category.
    pub fn averages(&self) -> Vec<CategoryAverage> {
        summary::category_averages(&self.draft)
    }

    fn ensure_open(&self) -> Result<(), WizardError> {
        if self.is_submitted() {
            Err(WizardError::AlreadySubmitted)
        } else {
            Ok(())
        }
    }
}
