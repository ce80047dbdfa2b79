//! Scenario tests for the rating wizard.

use super::question::Category;
use super::wizard::{RatingWizard, WizardError, WizardStep};

fn answer_all(wizard: &mut RatingWizard, category: Category, score: u8) {
    for q in category.questions() {
        wizard.set_score(q.id, score).unwrap();
    }
}

/// Wizard sitting on the review step with every question answered.
fn wizard_at_review() -> RatingWizard {
    let mut wizard = RatingWizard::new();
    for category in Category::ALL {
        answer_all(&mut wizard, category, 4);
        wizard.advance().unwrap();
    }
    assert_eq!(wizard.step(), WizardStep::Review);
    wizard
}

#[test]
fn test_starts_on_first_category() {
    let wizard = RatingWizard::new();
    assert_eq!(wizard.step(), WizardStep::Category(Category::Teaching));
    assert_eq!(wizard.step().index(), 0);
    assert!(!wizard.is_submitted());
}

#[test]
fn test_advance_requires_every_question_of_step() {
    for category in Category::ALL {
        let mut wizard = RatingWizard::new();
        for prior in Category::ALL.iter().take(category.index()) {
            answer_all(&mut wizard, *prior, 3);
            wizard.advance().unwrap();
        }
        assert_eq!(wizard.step(), WizardStep::Category(category));

        // All but the last question answered.
        let questions: Vec<_> = category.questions().collect();
        for q in &questions[..questions.len() - 1] {
            wizard.set_score(q.id, 5).unwrap();
        }
        let before = wizard.draft().clone();

        assert_eq!(
            wizard.advance(),
            Err(WizardError::IncompleteStep { category, missing: 1 })
        );
        assert_eq!(wizard.step(), WizardStep::Category(category));
        assert_eq!(wizard.draft(), &before);

        wizard.set_score(questions[questions.len() - 1].id, 2).unwrap();
        let next = wizard.advance().unwrap();
        assert_eq!(next.index(), category.index() + 1);
    }
}

#[test]
fn test_answers_from_other_steps_do_not_count() {
    let mut wizard = RatingWizard::new();
    answer_all(&mut wizard, Category::Discipline, 5);
    answer_all(&mut wizard, Category::Attitude, 5);

    assert!(matches!(
        wizard.advance(),
        Err(WizardError::IncompleteStep {
            category: Category::Teaching,
            missing: 4
        })
    ));
}

#[test]
fn test_score_upsert_overwrites() {
    let mut wizard = RatingWizard::new();
    wizard.set_score("q1", 2).unwrap();
    wizard.set_score("q1", 5).unwrap();
    assert_eq!(wizard.draft().score("q1"), Some(5));
    assert_eq!(wizard.draft().scores().count(), 1);
}

#[test]
fn test_score_validation() {
    let mut wizard = RatingWizard::new();
    assert_eq!(wizard.set_score("q1", 0), Err(WizardError::ScoreOutOfRange(0)));
    assert_eq!(wizard.set_score("q1", 6), Err(WizardError::ScoreOutOfRange(6)));
    assert_eq!(
        wizard.set_score("q99", 3),
        Err(WizardError::UnknownQuestion("q99".to_string()))
    );
    assert_eq!(wizard.draft().scores().count(), 0);
}

#[test]
fn test_retreat_keeps_scores_and_comment() {
    let mut wizard = wizard_at_review();
    wizard.set_comment("Clear explanations").unwrap();
    let before = wizard.draft().clone();

    assert_eq!(wizard.retreat(), Ok(WizardStep::Category(Category::Attitude)));
    assert_eq!(wizard.retreat(), Ok(WizardStep::Category(Category::Discipline)));
    assert_eq!(wizard.retreat(), Ok(WizardStep::Category(Category::Teaching)));
    assert_eq!(wizard.retreat(), Err(WizardError::AtFirstStep));
    assert_eq!(wizard.draft(), &before);

    for _ in 0..3 {
        wizard.advance().unwrap();
    }
    assert_eq!(wizard.step(), WizardStep::Review);
    assert_eq!(wizard.draft().comment(), "Clear explanations");
}

#[test]
fn test_comment_only_on_review() {
    let mut wizard = RatingWizard::new();
    assert!(matches!(
        wizard.set_comment("too early"),
        Err(WizardError::InvalidTransition { .. })
    ));
    assert_eq!(wizard.draft().comment(), "");
}

#[test]
fn test_submit_requires_comment() {
    let mut wizard = wizard_at_review();

    assert_eq!(wizard.submit(), Err(WizardError::MissingComment));
    assert_eq!(wizard.step(), WizardStep::Review);

    wizard.set_comment("   ").unwrap();
    assert_eq!(wizard.submit(), Err(WizardError::MissingComment));
    assert_eq!(wizard.step(), WizardStep::Review);

    wizard.set_comment("Great lecturer").unwrap();
    let submitted = wizard.submit().unwrap();
    assert_eq!(wizard.step(), WizardStep::Submitted);
    assert_eq!(submitted.comment, "Great lecturer");
    assert_eq!(submitted.scores.len(), 10);
    assert_eq!(submitted.overall, 4.0);
}

#[test]
fn test_submit_only_from_review() {
    let mut wizard = RatingWizard::new();
    assert!(matches!(wizard.submit(), Err(WizardError::InvalidTransition { .. })));
}

#[test]
fn test_submitted_is_terminal() {
    let mut wizard = wizard_at_review();
    wizard.set_comment("Done").unwrap();
    wizard.submit().unwrap();
    let frozen = wizard.draft().clone();

    assert_eq!(wizard.advance(), Err(WizardError::AlreadySubmitted));
    assert_eq!(wizard.retreat(), Err(WizardError::AlreadySubmitted));
    assert_eq!(wizard.submit(), Err(WizardError::AlreadySubmitted));
    assert_eq!(wizard.set_score("q1", 1), Err(WizardError::AlreadySubmitted));
    assert_eq!(wizard.set_comment("changed"), Err(WizardError::AlreadySubmitted));

    assert_eq!(wizard.draft(), &frozen);
    assert_eq!(wizard.step(), WizardStep::Submitted);
}

#[test]
fn test_review_averages() {
    let mut wizard = RatingWizard::new();
    for (id, score) in [("q1", 4), ("q2", 5), ("q3", 4), ("q4", 4)] {
        wizard.set_score(id, score).unwrap();
    }
    wizard.advance().unwrap();
    answer_all(&mut wizard, Category::Discipline, 3);
    wizard.advance().unwrap();
    wizard.set_score("q9", 5).unwrap();
    wizard.set_score("q10", 4).unwrap();
    wizard.advance().unwrap();

    let shown: Vec<_> = wizard.averages().iter().map(|a| a.display()).collect();
    assert_eq!(shown, ["4.3", "3.0", "4.5"]);
}
