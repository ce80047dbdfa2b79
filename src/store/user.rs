//! User repository over the mock store.

use super::MockStore;
use crate::error::{AppError, Result};
use crate::models::{CreateUser, Role, UpdateProfile, UpdateUser, User};

/// List users with the given role, ordered by name.
pub fn list_by_role(store: &MockStore, role: Role) -> Vec<&User> {
    let mut users: Vec<&User> = store.users.iter().filter(|u| u.role == role).collect();
    users.sort_by(|a, b| a.name.cmp(&b.name));
    users
}

/// Get user by ID.
pub fn get_by_id<'a>(store: &'a MockStore, id: &str) -> Option<&'a User> {
    store.users.iter().find(|u| u.id == id)
}

/// Check if a NIM/NIP is already taken (for validation).
pub fn nim_nip_exists(store: &MockStore, nim_nip: &str, exclude_id: Option<&str>) -> bool {
    store
        .users
        .iter()
        .any(|u| u.nim_nip == nim_nip && Some(u.id.as_str()) != exclude_id)
}

fn validate_identity(store: &MockStore, name: &str, nim_nip: &str, exclude_id: Option<&str>) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    if nim_nip.trim().is_empty() {
        return Err(AppError::validation("NIM/NIP is required"));
    }
    if nim_nip_exists(store, nim_nip, exclude_id) {
        return Err(AppError::validation(format!("NIM/NIP '{nim_nip}' already exists")));
    }
    Ok(())
}

/// Create a new user.
pub fn create(store: &mut MockStore, data: CreateUser) -> Result<User> {
    validate_identity(store, &data.name, &data.nim_nip, None)?;

    let user = User {
        id: store.allocate_id("u"),
        name: data.name.trim().to_string(),
        email: data.email.trim().to_string(),
        nim_nip: data.nim_nip.trim().to_string(),
        role: data.role,
        avatar: None,
        department: data.department.filter(|d| !d.trim().is_empty()),
        phone: data.phone.filter(|p| !p.trim().is_empty()),
    };
    store.users.push(user.clone());
    tracing::info!(id = %user.id, role = %user.role, "User created");
    Ok(user)
}

/// Update an existing user.
pub fn update(store: &mut MockStore, id: &str, data: UpdateUser) -> Result<User> {
    let existing = get_by_id(store, id).ok_or_else(|| AppError::not_found(format!("User {id}")))?;

    let name = data.name.as_deref().unwrap_or(&existing.name);
    let nim_nip = data.nim_nip.as_deref().unwrap_or(&existing.nim_nip);
    validate_identity(store, name, nim_nip, Some(id))?;

    if let Some(role) = data.role
        && role != Role::Dosen
        && existing.role == Role::Dosen
        && super::kelas::for_instructor(store, id).next().is_some()
    {
        return Err(AppError::validation("Cannot change the role of an instructor who still teaches a class"));
    }

    let user = store
        .users
        .iter_mut()
        .find(|u| u.id == id)
        .ok_or_else(|| AppError::not_found(format!("User {id}")))?;

    if let Some(name) = data.name {
        user.name = name.trim().to_string();
    }
    if let Some(email) = data.email {
        user.email = email.trim().to_string();
    }
    if let Some(nim_nip) = data.nim_nip {
        user.nim_nip = nim_nip.trim().to_string();
    }
    if let Some(role) = data.role {
        user.role = role;
    }
    if let Some(department) = data.department {
        user.department = department;
    }
    if let Some(phone) = data.phone {
        user.phone = phone;
    }

    Ok(user.clone())
}

/// Mirror a profile update into the stored record.
pub fn apply_profile(store: &mut MockStore, id: &str, update: UpdateProfile) -> bool {
    match store.users.iter_mut().find(|u| u.id == id) {
        Some(user) => user.apply(update),
        None => false,
    }
}

/// Delete a user by ID. Removes the user's enrollments as well.
pub fn delete(store: &mut MockStore, id: &str) -> Result<bool> {
    if super::kelas::for_instructor(store, id).next().is_some() {
        return Err(AppError::validation(
            "Cannot delete an instructor who still teaches a class",
        ));
    }

    let before = store.users.len();
    store.users.retain(|u| u.id != id);
    if store.users.len() == before {
        return Ok(false);
    }

    store.enrollments.retain(|e| e.student_id != id);
    tracing::info!(id, "User deleted");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_student(nim: &str) -> CreateUser {
        CreateUser {
            name: "Nina Kartika".to_string(),
            email: "nina@student.ac.id".to_string(),
            nim_nip: nim.to_string(),
            role: Role::Mahasiswa,
            department: Some("Teknik Informatika".to_string()),
            phone: Some(String::new()),
        }
    }

    #[test]
    fn test_list_by_role_sorted() {
        let store = MockStore::seeded();
        let dosen = list_by_role(&store, Role::Dosen);
        assert_eq!(dosen.len(), 3);
        assert!(dosen.windows(2).all(|w| w[0].name <= w[1].name));
        assert!(dosen.iter().all(|u| u.role == Role::Dosen));
    }

    #[test]
    fn test_create_user() {
        let mut store = MockStore::seeded();
        let user = create(&mut store, new_student("NIM099")).unwrap();

        assert_eq!(get_by_id(&store, &user.id), Some(&user));
        assert_eq!(user.phone, None);
    }

    #[test]
    fn test_create_duplicate_nim_rejected() {
        let mut store = MockStore::seeded();
        let before = store.users.len();

        let err = create(&mut store, new_student("NIM001")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(store.users.len(), before);
    }

    #[test]
    fn test_create_requires_name() {
        let mut store = MockStore::seeded();
        let mut data = new_student("NIM098");
        data.name = "   ".to_string();
        assert!(create(&mut store, data).is_err());
    }

    #[test]
    fn test_update_keeps_own_nim() {
        let mut store = MockStore::seeded();
        let updated = update(
            &mut store,
            "2",
            UpdateUser {
                nim_nip: Some("NIM001".to_string()),
                phone: Some(None),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.nim_nip, "NIM001");
        assert_eq!(updated.phone, None);
        assert_eq!(updated.name, "Ahmad Rizki");
    }

    #[test]
    fn test_update_missing_user() {
        let mut store = MockStore::seeded();
        let err = update(&mut store, "nope", UpdateUser::default()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_update_teaching_instructor_role_refused() {
        let mut store = MockStore::seeded();
        let result = update(
            &mut store,
            "1",
            UpdateUser {
                role: Some(Role::Admin),
                ..Default::default()
            },
        );
        assert!(result.is_err());
        assert_eq!(get_by_id(&store, "1").map(|u| u.role), Some(Role::Dosen));
    }

    #[test]
    fn test_delete_cascades_enrollments() {
        let mut store = MockStore::seeded();
        assert!(delete(&mut store, "2").unwrap());

        assert!(get_by_id(&store, "2").is_none());
        assert!(store.enrollments.iter().all(|e| e.student_id != "2"));
        assert!(store.ratings.iter().any(|r| r.to_id == "2"));
    }

    #[test]
    fn test_delete_teaching_instructor_refused() {
        let mut store = MockStore::seeded();
        assert!(delete(&mut store, "1").is_err());
        assert!(get_by_id(&store, "1").is_some());
    }

    #[test]
    fn test_delete_unknown_user() {
        let mut store = MockStore::seeded();
        assert!(!delete(&mut store, "nope").unwrap());
    }

    #[test]
    fn test_apply_profile() {
        let mut store = MockStore::seeded();
        assert!(apply_profile(
            &mut store,
            "2",
            UpdateProfile {
                phone: Some("0000".to_string()),
                ..Default::default()
            }
        ));
        assert_eq!(get_by_id(&store, "2").and_then(|u| u.phone.as_deref()), Some("0000"));
        assert!(!apply_profile(&mut store, "nope", UpdateProfile::default()));
    }
}
