//! Data models for users, classes, enrollments and ratings.

pub mod enrollment;
pub mod kelas;
pub mod rating;
pub mod user;

pub use enrollment::{CreateEnrollment, Enrollment, EnrollmentStatus, TransferEnrollment};
pub use kelas::{CreateKelas, Kelas, UpdateKelas};
pub use rating::{Rating, RatingKind, RatingTarget};
pub use user::{CreateUser, Role, UpdateProfile, UpdateUser, User};
