//! Enrollment records linking students to classes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Inactive,
}

impl EnrollmentStatus {
    pub fn name(&self) -> &'static str {
        match self {
            EnrollmentStatus::Active => "active",
            EnrollmentStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: String,
    pub student_id: String,
    pub kelas_id: String,
    pub status: EnrollmentStatus,
    pub enrolled_date: NaiveDate,
}

impl Enrollment {
    pub fn is_active(&self) -> bool {
        self.status == EnrollmentStatus::Active
    }
}

/// DTO for enrolling a student into a class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEnrollment {
    pub student_id: String,
    pub kelas_id: String,
    pub enrolled_date: NaiveDate,
}

/// DTO for moving a student between classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferEnrollment {
    pub student_id: String,
    pub from_kelas_id: String,
    pub to_kelas_id: String,
    pub transfer_date: NaiveDate,
}
