//! Received rating records and rating targets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rating::Category;

/// A rating one user gave another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: String,
    pub from_id: String,
    pub from_name: String,
    pub to_id: String,
    pub kelas_name: String,
    /// Mean score per question category, indexed by [`Category::index`].
    pub category_means: [f64; 3],
    /// Mean over every question.
    pub score: f64,
    pub comment: String,
    pub created_at: NaiveDate,
}

impl Rating {
    pub fn category_mean(&self, category: Category) -> f64 {
        self.category_means[category.index()]
    }
}

/// Capacity in which someone is being rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingKind {
    /// A student rating an instructor.
    Dosen,
    /// An instructor rating a student.
    Mahasiswa,
    /// A student rating a classmate.
    Teman,
    /// An admin rating a fellow admin.
    Admin,
}

impl RatingKind {
    pub fn title(&self) -> &'static str {
        match self {
            RatingKind::Dosen => "Instructor Rating",
            RatingKind::Mahasiswa => "Student Rating",
            RatingKind::Teman => "Classmate Rating",
            RatingKind::Admin => "Admin Peer Rating",
        }
    }
}

/// Who the rating wizard is collecting scores for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingTarget {
    pub user_id: String,
    pub name: String,
    pub kind: RatingKind,
    pub kelas_name: Option<String>,
}
