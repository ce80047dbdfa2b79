//! User records, roles and profile DTOs.

use serde::{Deserialize, Serialize};

/// Closed set of account roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructor.
    Dosen,
    /// Student.
    Mahasiswa,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Dosen, Role::Mahasiswa, Role::Admin];

    /// Get the display name for the role.
    pub fn name(&self) -> &'static str {
        match self {
            Role::Dosen => "Dosen",
            Role::Mahasiswa => "Mahasiswa",
            Role::Admin => "Admin",
        }
    }

    /// Label used for the identification number column.
    pub fn id_label(&self) -> &'static str {
        match self {
            Role::Mahasiswa => "NIM",
            Role::Dosen | Role::Admin => "NIP",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub nim_nip: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl User {
    /// Merge a partial profile update; returns true if any field was provided.
    ///
    /// A blank phone or department clears the field.
    pub fn apply(&mut self, update: UpdateProfile) -> bool {
        let mut changed = false;

        if let Some(name) = update.name {
            self.name = name;
            changed = true;
        }
        if let Some(email) = update.email {
            self.email = email;
            changed = true;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone).filter(|p| !p.trim().is_empty());
            changed = true;
        }
        if let Some(department) = update.department {
            self.department = Some(department).filter(|d| !d.trim().is_empty());
            changed = true;
        }
        if let Some(avatar) = update.avatar {
            self.avatar = Some(avatar);
            changed = true;
        }

        changed
    }

    /// First character of the name, used when no avatar is set.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
    }

    pub fn department_or_dash(&self) -> &str {
        self.department.as_deref().unwrap_or("-")
    }
}

/// Partial profile update. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub avatar: Option<String>,
}

/// DTO for creating a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub nim_nip: String,
    pub role: Role,
    pub department: Option<String>,
    pub phone: Option<String>,
}

/// DTO for updating a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub nim_nip: Option<String>,
    pub role: Option<Role>,
    pub department: Option<Option<String>>,
    pub phone: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            id: "2".to_string(),
            name: "Ahmad Rizki".to_string(),
            email: "ahmad.rizki@student.ac.id".to_string(),
            nim_nip: "NIM001".to_string(),
            role: Role::Mahasiswa,
            avatar: None,
            department: Some("Teknik Informatika".to_string()),
            phone: Some("08198765432".to_string()),
        }
    }

    #[test]
    fn test_apply_only_given_fields() {
        let mut user = sample();
        let before = user.clone();

        let changed = user.apply(UpdateProfile {
            phone: Some("0000".to_string()),
            ..Default::default()
        });

        assert!(changed);
        assert_eq!(user.phone.as_deref(), Some("0000"));
        assert_eq!(user.name, before.name);
        assert_eq!(user.email, before.email);
        assert_eq!(user.department, before.department);
        assert_eq!(user.avatar, before.avatar);
    }

    #[test]
    fn test_apply_blank_clears_optional_fields() {
        let mut user = sample();

        assert!(user.apply(UpdateProfile {
            phone: Some(String::new()),
            department: Some("  ".to_string()),
            ..Default::default()
        }));

        assert_eq!(user.phone, None);
        assert_eq!(user.department, None);
        assert_eq!(user.department_or_dash(), "-");
    }

    #[test]
    fn test_apply_empty_update() {
        let mut user = sample();
        assert!(!user.apply(UpdateProfile::default()));
        assert_eq!(user, sample());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"role\":\"mahasiswa\""));
        assert!(!json.contains("avatar"));
    }

    #[test]
    fn test_initial() {
        assert_eq!(sample().initial(), "A");
    }
}
