//! Static rating question set.

use serde::{Deserialize, Serialize};

/// Question category; each one is a wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Teaching,
    Discipline,
    Attitude,
}

impl Category {
    /// Categories in step order.
    pub const ALL: [Category; 3] = [Category::Teaching, Category::Discipline, Category::Attitude];

    /// Step index of this category (0..3).
    pub fn index(&self) -> usize {
        match self {
            Category::Teaching => 0,
            Category::Discipline => 1,
            Category::Attitude => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Teaching => "Teaching",
            Category::Discipline => "Discipline",
            Category::Attitude => "Attitude",
        }
    }

    /// Questions belonging to this category, in display order.
    pub fn questions(&self) -> impl Iterator<Item = &'static Question> + use<> {
        let category = *self;
        QUESTIONS.iter().filter(move |q| q.category == category)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub category: Category,
}

pub const QUESTIONS: &[Question] = &[
    Question {
        id: "q1",
        text: "Ability to deliver the material",
        category: Category::Teaching,
    },
    Question {
        id: "q2",
        text: "Preparedness for class",
        category: Category::Teaching,
    },
    Question {
        id: "q3",
        text: "Use of learning media",
        category: Category::Teaching,
    },
    Question {
        id: "q4",
        text: "Ability to explain concepts",
        category: Category::Teaching,
    },
    Question {
        id: "q5",
        text: "Punctuality",
        category: Category::Discipline,
    },
    Question {
        id: "q6",
        text: "Responsiveness to questions",
        category: Category::Discipline,
    },
    Question {
        id: "q7",
        text: "Availability for consultation",
        category: Category::Discipline,
    },
    Question {
        id: "q8",
        text: "Quality of feedback",
        category: Category::Discipline,
    },
    Question {
        id: "q9",
        text: "Conduct and behaviour",
        category: Category::Attitude,
    },
    Question {
        id: "q10",
        text: "Motivating others",
        category: Category::Attitude,
    },
];

/// Look up a question by id.
pub fn find(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_questions() {
        for category in Category::ALL {
            assert!(category.questions().count() > 0, "{category} has no questions");
        }
        assert_eq!(Category::Teaching.questions().count(), 4);
        assert_eq!(Category::Discipline.questions().count(), 4);
        assert_eq!(Category::Attitude.questions().count(), 2);
    }

    #[test]
    fn test_index_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_index(category.index()), Some(category));
        }
        assert_eq!(Category::from_index(3), None);
    }

    #[test]
    fn test_ids_unique() {
        let mut ids: Vec<_> = QUESTIONS.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), QUESTIONS.len());
    }
}
