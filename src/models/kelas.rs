//! Class (kelas) records and DTOs.

use serde::{Deserialize, Serialize};

/// A class section taught by one instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kelas {
    pub id: String,
    pub name: String,
    pub code: String,
    pub semester: u8,
    pub dosen_id: String,
    pub schedule: String,
    pub room: String,
}

/// DTO for creating a class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateKelas {
    pub name: String,
    pub code: String,
    pub semester: u8,
    pub dosen_id: String,
    pub schedule: String,
    pub room: String,
}

/// DTO for updating a class.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateKelas {
    pub name: Option<String>,
    pub code: Option<String>,
    pub semester: Option<u8>,
    pub dosen_id: Option<String>,
    pub schedule: Option<String>,
    pub room: Option<String>,
}
