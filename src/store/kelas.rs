//! Kelas repository over the mock store.

use super::MockStore;
use crate::error::{AppError, Result};
use crate::models::{CreateKelas, Kelas, Role, UpdateKelas};

/// List all classes ordered by code.
pub fn list_all(store: &MockStore) -> Vec<&Kelas> {
    let mut kelas: Vec<&Kelas> = store.kelas.iter().collect();
    kelas.sort_by(|a, b| a.code.cmp(&b.code));
    kelas
}

/// Get class by ID.
pub fn get_by_id<'a>(store: &'a MockStore, id: &str) -> Option<&'a Kelas> {
    store.kelas.iter().find(|k| k.id == id)
}

/// Classes a student is actively enrolled in, in store order.
pub fn for_student<'a>(store: &'a MockStore, student_id: &'a str) -> impl Iterator<Item = &'a Kelas> + 'a {
    store
        .kelas
        .iter()
        .filter(move |k| is_enrolled(store, student_id, &k.id))
}

/// Classes taught by an instructor, in store order.
pub fn for_instructor<'a>(store: &'a MockStore, dosen_id: &'a str) -> impl Iterator<Item = &'a Kelas> + 'a {
    store.kelas.iter().filter(move |k| k.dosen_id == dosen_id)
}

fn is_enrolled(store: &MockStore, student_id: &str, kelas_id: &str) -> bool {
    store
        .enrollments
        .iter()
        .any(|e| e.is_active() && e.student_id == student_id && e.kelas_id == kelas_id)
}

/// Number of active students in a class.
pub fn student_count(store: &MockStore, kelas_id: &str) -> usize {
    store
        .enrollments
        .iter()
        .filter(|e| e.is_active() && e.kelas_id == kelas_id)
        .count()
}

/// Check if a class code already exists (for validation).
pub fn code_exists(store: &MockStore, code: &str, exclude_id: Option<&str>) -> bool {
    store
        .kelas
        .iter()
        .any(|k| k.code.eq_ignore_ascii_case(code) && Some(k.id.as_str()) != exclude_id)
}

fn validate(store: &MockStore, name: &str, code: &str, dosen_id: &str, exclude_id: Option<&str>) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Class name is required"));
    }
    if code.trim().is_empty() {
        return Err(AppError::validation("Class code is required"));
    }
    if code_exists(store, code.trim(), exclude_id) {
        return Err(AppError::validation(format!("Class code '{}' already exists", code.trim())));
    }
    match super::user::get_by_id(store, dosen_id) {
        Some(user) if user.role == Role::Dosen => Ok(()),
        Some(_) => Err(AppError::validation("Selected instructor does not have the Dosen role")),
        None => Err(AppError::not_found(format!("Instructor {dosen_id}"))),
    }
}

/// Create a new class.
pub fn create(store: &mut MockStore, data: CreateKelas) -> Result<Kelas> {
    validate(store, &data.name, &data.code, &data.dosen_id, None)?;

    let kelas = Kelas {
        id: store.allocate_id("k"),
        name: data.name.trim().to_string(),
        code: data.code.trim().to_string(),
        semester: data.semester,
        dosen_id: data.dosen_id,
        schedule: data.schedule.trim().to_string(),
        room: data.room.trim().to_string(),
    };
    store.kelas.push(kelas.clone());
    tracing::info!(id = %kelas.id, code = %kelas.code, "Kelas created");
    Ok(kelas)
}

/// Update an existing class.
pub fn update(store: &mut MockStore, id: &str, data: UpdateKelas) -> Result<Kelas> {
    let existing = get_by_id(store, id).ok_or_else(|| AppError::not_found(format!("Kelas {id}")))?;
    validate(
        store,
        data.name.as_deref().unwrap_or(&existing.name),
        data.code.as_deref().unwrap_or(&existing.code),
        data.dosen_id.as_deref().unwrap_or(&existing.dosen_id),
        Some(id),
    )?;

    let kelas = store
        .kelas
        .iter_mut()
        .find(|k| k.id == id)
        .ok_or_else(|| AppError::not_found(format!("Kelas {id}")))?;

    if let Some(name) = data.name {
        kelas.name = name.trim().to_string();
    }
    if let Some(code) = data.code {
        kelas.code = code.trim().to_string();
    }
    if let Some(semester) = data.semester {
        kelas.semester = semester;
    }
    if let Some(dosen_id) = data.dosen_id {
        kelas.dosen_id = dosen_id;
    }
    if let Some(schedule) = data.schedule {
        kelas.schedule = schedule.trim().to_string();
    }
    if let Some(room) = data.room {
        kelas.room = room.trim().to_string();
    }

    Ok(kelas.clone())
}

/// Delete a class by ID, removing its enrollments.
pub fn delete(store: &mut MockStore, id: &str) -> bool {
    let before = store.kelas.len();
    store.kelas.retain(|k| k.id != id);
    if store.kelas.len() == before {
        return false;
    }

    store.enrollments.retain(|e| e.kelas_id != id);
    tracing::info!(id, "Kelas deleted");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_kelas(code: &str, dosen_id: &str) -> CreateKelas {
        CreateKelas {
            name: "Jaringan Komputer".to_string(),
            code: code.to_string(),
            semester: 3,
            dosen_id: dosen_id.to_string(),
            schedule: "Jumat, 09:00 - 11:00".to_string(),
            room: "Lab 201".to_string(),
        }
    }

    fn ids<'a>(kelas: impl Iterator<Item = &'a Kelas>) -> Vec<&'a str> {
        kelas.map(|k| k.id.as_str()).collect()
    }

    #[test]
    fn test_for_student_active_only() {
        let store = MockStore::seeded();
        assert_eq!(ids(for_student(&store, "2")), vec!["k1", "k2", "k4"]);
        // Fajar's k4 enrollment is inactive
        assert_eq!(ids(for_student(&store, "9")), vec!["k2"]);
        assert!(for_student(&store, "unknown").next().is_none());
    }

    #[test]
    fn test_for_instructor() {
        let store = MockStore::seeded();
        assert_eq!(ids(for_instructor(&store, "1")), vec!["k1", "k4"]);
        assert!(for_instructor(&store, "2").next().is_none());
    }

    #[test]
    fn test_student_count() {
        let store = MockStore::seeded();
        assert_eq!(student_count(&store, "k1"), 3);
        assert_eq!(student_count(&store, "k4"), 1);
    }

    #[test]
    fn test_list_all_sorted_by_code() {
        let store = MockStore::seeded();
        let codes: Vec<&str> = list_all(&store).iter().map(|k| k.code.as_str()).collect();
        assert_eq!(codes, vec!["IF301", "IF302", "IF303", "IF401"]);
    }

    #[test]
    fn test_create_kelas() {
        let mut store = MockStore::seeded();
        let kelas = create(&mut store, new_kelas("IF201", "4")).unwrap();
        assert_eq!(get_by_id(&store, &kelas.id), Some(&kelas));
        assert_eq!(student_count(&store, &kelas.id), 0);
    }

    #[test]
    fn test_create_duplicate_code_case_insensitive() {
        let mut store = MockStore::seeded();
        let err = create(&mut store, new_kelas("if301", "4")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_create_requires_dosen() {
        let mut store = MockStore::seeded();
        assert!(matches!(
            create(&mut store, new_kelas("IF202", "2")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            create(&mut store, new_kelas("IF202", "404")),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_kelas() {
        let mut store = MockStore::seeded();
        let updated = update(
            &mut store,
            "k2",
            UpdateKelas {
                room: Some("Ruang 301 ".to_string()),
                dosen_id: Some("5".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.room, "Ruang 301");
        assert_eq!(updated.dosen_id, "5");
        assert_eq!(updated.code, "IF302");
    }

    #[test]
    fn test_update_to_taken_code_rejected() {
        let mut store = MockStore::seeded();
        let result = update(
            &mut store,
            "k2",
            UpdateKelas {
                code: Some("IF301".to_string()),
                ..Default::default()
            },
        );
        assert!(result.is_err());
        assert_eq!(get_by_id(&store, "k2").map(|k| k.code.as_str()), Some("IF302"));
    }

    #[test]
    fn test_delete_cascades_enrollments() {
        let mut store = MockStore::seeded();
        assert!(delete(&mut store, "k1"));
        assert!(get_by_id(&store, "k1").is_none());
        assert!(store.enrollments.iter().all(|e| e.kelas_id != "k1"));
        assert!(!delete(&mut store, "k1"));
    }
}
