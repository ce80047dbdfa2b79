//! Enrollment repository over the mock store.

use super::MockStore;
use crate::error::{AppError, Result};
use crate::models::{CreateEnrollment, Enrollment, EnrollmentStatus, Kelas, Role, TransferEnrollment, User};

/// Enrollment joined with its student and class.
#[derive(Debug, Clone, Copy)]
pub struct EnrollmentRow<'a> {
    pub enrollment: &'a Enrollment,
    pub student: &'a User,
    pub kelas: &'a Kelas,
}

/// All enrollments with their student and class resolved.
///
/// Rows whose student or class no longer exists are skipped.
pub fn rows(store: &MockStore) -> Vec<EnrollmentRow<'_>> {
    store
        .enrollments
        .iter()
        .filter_map(|enrollment| {
            let student = super::user::get_by_id(store, &enrollment.student_id)?;
            let kelas = super::kelas::get_by_id(store, &enrollment.kelas_id)?;
            Some(EnrollmentRow {
                enrollment,
                student,
                kelas,
            })
        })
        .collect()
}

/// Students actively enrolled in a class, in enrollment order.
pub fn students_in_kelas<'a>(store: &'a MockStore, kelas_id: &str) -> Vec<&'a User> {
    store
        .enrollments
        .iter()
        .filter(|e| e.is_active() && e.kelas_id == kelas_id)
        .filter_map(|e| super::user::get_by_id(store, &e.student_id))
        .collect()
}

fn find_active<'a>(store: &'a MockStore, student_id: &str, kelas_id: &str) -> Option<&'a Enrollment> {
    store
        .enrollments
        .iter()
        .find(|e| e.is_active() && e.student_id == student_id && e.kelas_id == kelas_id)
}

/// Enroll a student into a class.
pub fn create(store: &mut MockStore, data: CreateEnrollment) -> Result<Enrollment> {
    match super::user::get_by_id(store, &data.student_id) {
        Some(user) if user.role == Role::Mahasiswa => {}
        Some(_) => return Err(AppError::validation("Only students can be enrolled")),
        None => return Err(AppError::not_found(format!("Student {}", data.student_id))),
    }
    if super::kelas::get_by_id(store, &data.kelas_id).is_none() {
        return Err(AppError::not_found(format!("Kelas {}", data.kelas_id)));
    }
    if find_active(store, &data.student_id, &data.kelas_id).is_some() {
        return Err(AppError::validation("Student is already enrolled in this class"));
    }

    let enrollment = Enrollment {
        id: store.allocate_id("e"),
        student_id: data.student_id,
        kelas_id: data.kelas_id,
        status: EnrollmentStatus::Active,
        enrolled_date: data.enrolled_date,
    };
    store.enrollments.push(enrollment.clone());
    tracing::info!(
        student = %enrollment.student_id,
        kelas = %enrollment.kelas_id,
        "Student enrolled"
    );
    Ok(enrollment)
}

/// Remove an enrollment by ID.
pub fn remove(store: &mut MockStore, id: &str) -> bool {
    let before = store.enrollments.len();
    store.enrollments.retain(|e| e.id != id);
    let removed = store.enrollments.len() < before;
    if removed {
        tracing::info!(id, "Enrollment removed");
    }
    removed
}

/// Move a student from one class to another.
///
/// The source enrollment is replaced by a new active enrollment dated
/// `transfer_date`.
pub fn transfer(store: &mut MockStore, data: TransferEnrollment) -> Result<Enrollment> {
    if data.from_kelas_id == data.to_kelas_id {
        return Err(AppError::validation("Target class must differ from the current class"));
    }
    let source_id = find_active(store, &data.student_id, &data.from_kelas_id)
        .map(|e| e.id.clone())
        .ok_or_else(|| AppError::not_found("Source enrollment"))?;

    let created = create(
        store,
        CreateEnrollment {
            student_id: data.student_id,
            kelas_id: data.to_kelas_id,
            enrolled_date: data.transfer_date,
        },
    )?;
    remove(store, &source_id);
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()
    }

    fn enroll(student_id: &str, kelas_id: &str) -> CreateEnrollment {
        CreateEnrollment {
            student_id: student_id.to_string(),
            kelas_id: kelas_id.to_string(),
            enrolled_date: date(),
        }
    }

    fn names(users: &[&User]) -> Vec<String> {
        users.iter().map(|u| u.name.clone()).collect()
    }

    #[test]
    fn test_students_in_kelas() {
        let store = MockStore::seeded();
        assert_eq!(
            names(&students_in_kelas(&store, "k1")),
            vec!["Ahmad Rizki", "Dewi Lestari", "Rudi Hartono"]
        );
        assert_eq!(names(&students_in_kelas(&store, "k4")), vec!["Ahmad Rizki"]);
        assert!(students_in_kelas(&store, "k99").is_empty());
    }

    #[test]
    fn test_rows_skip_dangling() {
        let mut store = MockStore::seeded();
        let total = store.enrollments.len();
        store.users.retain(|u| u.id != "7");

        let rows = rows(&store);
        assert_eq!(rows.len(), total - 2);
        assert!(rows.iter().all(|r| r.student.id != "7"));
    }

    #[test]
    fn test_create_enrollment() {
        let mut store = MockStore::seeded();
        let created = create(&mut store, enroll("9", "k1")).unwrap();
        assert!(created.is_active());
        assert_eq!(students_in_kelas(&store, "k1").len(), 4);
    }

    #[test]
    fn test_create_duplicate_rejected() {
        let mut store = MockStore::seeded();
        let before = store.enrollments.len();
        assert!(create(&mut store, enroll("2", "k1")).is_err());
        assert_eq!(store.enrollments.len(), before);
    }

    #[test]
    fn test_reenroll_inactive_allowed() {
        let mut store = MockStore::seeded();
        assert!(create(&mut store, enroll("9", "k4")).is_ok());
    }

    #[test]
    fn test_create_requires_student() {
        let mut store = MockStore::seeded();
        assert!(matches!(create(&mut store, enroll("1", "k2")), Err(AppError::Validation(_))));
        assert!(matches!(create(&mut store, enroll("2", "k99")), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_remove() {
        let mut store = MockStore::seeded();
        assert!(remove(&mut store, "e1"));
        assert!(!remove(&mut store, "e1"));
    }

    #[test]
    fn test_transfer() {
        let mut store = MockStore::seeded();
        let moved = transfer(
            &mut store,
            TransferEnrollment {
                student_id: "7".to_string(),
                from_kelas_id: "k1".to_string(),
                to_kelas_id: "k2".to_string(),
                transfer_date: date(),
            },
        )
        .unwrap();

        assert_eq!(moved.kelas_id, "k2");
        assert_eq!(moved.enrolled_date, date());
        assert!(students_in_kelas(&store, "k1").iter().all(|u| u.id != "7"));
        assert!(students_in_kelas(&store, "k2").iter().any(|u| u.id == "7"));
    }

    #[test]
    fn test_transfer_rejections_keep_state() {
        let mut store = MockStore::seeded();
        let before = store.enrollments.clone();

        let same = TransferEnrollment {
            student_id: "2".to_string(),
            from_kelas_id: "k1".to_string(),
            to_kelas_id: "k1".to_string(),
            transfer_date: date(),
        };
        assert!(transfer(&mut store, same).is_err());

        let not_enrolled = TransferEnrollment {
            student_id: "8".to_string(),
            from_kelas_id: "k1".to_string(),
            to_kelas_id: "k4".to_string(),
            transfer_date: date(),
        };
        assert!(matches!(transfer(&mut store, not_enrolled), Err(AppError::NotFound(_))));

        let already_there = TransferEnrollment {
            student_id: "2".to_string(),
            from_kelas_id: "k1".to_string(),
            to_kelas_id: "k2".to_string(),
            transfer_date: date(),
        };
        assert!(transfer(&mut store, already_there).is_err());

        assert_eq!(store.enrollments, before);
    }
}
