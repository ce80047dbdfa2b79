//! In-memory mock data store.
//!
//! Holds every record the app works with. Lookups are linear scans over
//! small vectors; mutations live only as long as the process.

pub mod enrollment;
pub mod kelas;
pub mod rating;
mod seed;
pub mod stats;
pub mod user;

use chrono::NaiveDate;

use crate::models::{Enrollment, Kelas, Rating, User};

pub use enrollment::EnrollmentRow;

/// Record counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCounts {
    pub users: usize,
    pub kelas: usize,
    pub enrollments: usize,
    pub ratings: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MockStore {
    pub users: Vec<User>,
    pub kelas: Vec<Kelas>,
    pub enrollments: Vec<Enrollment>,
    pub ratings: Vec<Rating>,
    next_id: u32,
}

impl MockStore {
    /// Store pre-filled with the demo dataset.
    pub fn seeded() -> Self {
        let store = Self {
            users: seed::users(),
            kelas: seed::kelas(),
            enrollments: seed::enrollments(),
            ratings: seed::ratings(),
            next_id: 100,
        };
        tracing::debug!(counts = ?store.counts(), "Mock store seeded");
        store
    }

    pub fn counts(&self) -> TableCounts {
        TableCounts {
            users: self.users.len(),
            kelas: self.kelas.len(),
            enrollments: self.enrollments.len(),
            ratings: self.ratings.len(),
        }
    }

    /// Allocate a fresh identifier with the given prefix.
    pub(crate) fn allocate_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }
}

/// Local calendar date used for new records.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_references_are_consistent() {
        let store = MockStore::seeded();

        for kelas in &store.kelas {
            assert!(
                store.users.iter().any(|u| u.id == kelas.dosen_id),
                "kelas {} has unknown instructor",
                kelas.id
            );
        }
        for enrollment in &store.enrollments {
            assert!(store.users.iter().any(|u| u.id == enrollment.student_id));
            assert!(store.kelas.iter().any(|k| k.id == enrollment.kelas_id));
        }
        for rating in &store.ratings {
            assert!(store.users.iter().any(|u| u.id == rating.to_id));
        }
    }

    #[test]
    fn test_allocate_id_is_unique() {
        let mut store = MockStore::seeded();
        let a = store.allocate_id("k");
        let b = store.allocate_id("k");
        assert_ne!(a, b);
        assert!(store.kelas.iter().all(|k| k.id != a && k.id != b));
    }
}
