//! Demo dataset.

use chrono::NaiveDate;

use crate::models::{Enrollment, EnrollmentStatus, Kelas, Rating, Role, User};

fn user(id: &str, name: &str, email: &str, nim_nip: &str, role: Role, department: &str, phone: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        nim_nip: nim_nip.to_string(),
        role,
        avatar: None,
        department: Some(department.to_string()),
        phone: Some(phone.to_string()),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub(super) fn users() -> Vec<User> {
    vec![
        user(
            "1",
            "Dr. Budi Santoso",
            "budi.santoso@university.ac.id",
            "NIP001",
            Role::Dosen,
            "Teknik Informatika",
            "08123456789",
        ),
        user(
            "2",
            "Ahmad Rizki",
            "ahmad.rizki@student.ac.id",
            "NIM001",
            Role::Mahasiswa,
            "Teknik Informatika",
            "08198765432",
        ),
        user(
            "3",
            "Admin System",
            "admin@university.ac.id",
            "ADMIN001",
            Role::Admin,
            "IT Administration",
            "08111222333",
        ),
        user(
            "4",
            "Dr. Siti Rahayu",
            "siti.rahayu@university.ac.id",
            "NIP002",
            Role::Dosen,
            "Sistem Informasi",
            "08122334455",
        ),
        user(
            "5",
            "Prof. Hendra Wijaya",
            "hendra.wijaya@university.ac.id",
            "NIP003",
            Role::Dosen,
            "Teknik Informatika",
            "08133445566",
        ),
        user(
            "6",
            "Dewi Lestari",
            "dewi.lestari@student.ac.id",
            "NIM002",
            Role::Mahasiswa,
            "Teknik Informatika",
            "08144556677",
        ),
        user(
            "7",
            "Rudi Hartono",
            "rudi.hartono@student.ac.id",
            "NIM003",
            Role::Mahasiswa,
            "Sistem Informasi",
            "08155667788",
        ),
        user(
            "8",
            "Maya Putri",
            "maya.putri@student.ac.id",
            "NIM004",
            Role::Mahasiswa,
            "Teknik Informatika",
            "08166778899",
        ),
        user(
            "9",
            "Fajar Nugroho",
            "fajar.nugroho@student.ac.id",
            "NIM005",
            Role::Mahasiswa,
            "Sistem Informasi",
            "08177889900",
        ),
        user(
            "10",
            "Super Admin",
            "superadmin@university.ac.id",
            "ADMIN002",
            Role::Admin,
            "IT Administration",
            "08188990011",
        ),
    ]
}

pub(super) fn kelas() -> Vec<Kelas> {
    let k = |id: &str, name: &str, code: &str, semester: u8, dosen_id: &str, schedule: &str, room: &str| Kelas {
        id: id.to_string(),
        name: name.to_string(),
        code: code.to_string(),
        semester,
        dosen_id: dosen_id.to_string(),
        schedule: schedule.to_string(),
        room: room.to_string(),
    };

    vec![
        k("k1", "Pemrograman Web", "IF301", 5, "1", "Senin, 08:00 - 10:00", "Lab 301"),
        k("k2", "Basis Data", "IF302", 5, "4", "Selasa, 10:00 - 12:00", "Ruang 204"),
        k("k3", "Algoritma Lanjut", "IF303", 5, "5", "Rabu, 13:00 - 15:00", "Ruang 105"),
        k("k4", "Kecerdasan Buatan", "IF401", 7, "1", "Kamis, 08:00 - 10:00", "Lab 302"),
    ]
}

pub(super) fn enrollments() -> Vec<Enrollment> {
    let rows = [
        ("e1", "2", "k1", EnrollmentStatus::Active, date(2024, 8, 26)),
        ("e2", "6", "k1", EnrollmentStatus::Active, date(2024, 8, 26)),
        ("e3", "7", "k1", EnrollmentStatus::Active, date(2024, 8, 27)),
        ("e4", "2", "k2", EnrollmentStatus::Active, date(2024, 8, 26)),
        ("e5", "8", "k2", EnrollmentStatus::Active, date(2024, 8, 28)),
        ("e6", "9", "k2", EnrollmentStatus::Active, date(2024, 8, 28)),
        ("e7", "6", "k3", EnrollmentStatus::Active, date(2024, 8, 29)),
        ("e8", "7", "k3", EnrollmentStatus::Active, date(2024, 8, 29)),
        ("e9", "8", "k3", EnrollmentStatus::Active, date(2024, 8, 30)),
        ("e10", "2", "k4", EnrollmentStatus::Active, date(2024, 9, 2)),
        ("e11", "9", "k4", EnrollmentStatus::Inactive, date(2024, 9, 2)),
    ];

    rows.into_iter()
        .map(|(id, student_id, kelas_id, status, enrolled_date)| Enrollment {
            id: id.to_string(),
            student_id: student_id.to_string(),
            kelas_id: kelas_id.to_string(),
            status,
            enrolled_date,
        })
        .collect()
}

pub(super) fn ratings() -> Vec<Rating> {
    let r = |id: &str,
             (from_id, from_name): (&str, &str),
             to_id: &str,
             kelas_name: &str,
             category_means: [f64; 3],
             comment: &str,
             created_at: NaiveDate| {
        let score = category_means.iter().sum::<f64>() / category_means.len() as f64;
        Rating {
            id: id.to_string(),
            from_id: from_id.to_string(),
            from_name: from_name.to_string(),
            to_id: to_id.to_string(),
            kelas_name: kelas_name.to_string(),
            category_means,
            score,
            comment: comment.to_string(),
            created_at,
        }
    };

    vec![
        r(
            "r1",
            ("1", "Dr. Budi Santoso"),
            "2",
            "Pemrograman Web",
            [4.5, 4.0, 5.0],
            "Very active in class discussions",
            date(2024, 10, 7),
        ),
        r(
            "r2",
            ("6", "Dewi Lestari"),
            "2",
            "Pemrograman Web",
            [4.0, 4.5, 4.5],
            "Great teammate on the group project",
            date(2024, 10, 15),
        ),
        r(
            "r3",
            ("4", "Dr. Siti Rahayu"),
            "2",
            "Basis Data",
            [4.25, 4.0, 4.5],
            "Solid understanding of normalisation",
            date(2024, 11, 12),
        ),
        r(
            "r4",
            ("2", "Ahmad Rizki"),
            "1",
            "Pemrograman Web",
            [4.75, 4.5, 5.0],
            "Explains every topic clearly",
            date(2024, 11, 20),
        ),
        r(
            "r5",
            ("8", "Maya Putri"),
            "4",
            "Basis Data",
            [3.75, 4.0, 4.0],
            "Could share slides earlier",
            date(2024, 12, 3),
        ),
        r(
            "r6",
            ("7", "Rudi Hartono"),
            "5",
            "Algoritma Lanjut",
            [4.5, 3.5, 4.0],
            "Challenging but fair",
            date(2024, 12, 18),
        ),
        r(
            "r7",
            ("5", "Prof. Hendra Wijaya"),
            "6",
            "Algoritma Lanjut",
            [3.0, 3.25, 3.5],
            "Needs to submit assignments on time",
            date(2025, 1, 9),
        ),
        r(
            "r8",
            ("3", "Admin System"),
            "10",
            "-",
            [2.0, 2.5, 3.0],
            "Slow to respond to tickets this month",
            date(2025, 1, 24),
        ),
    ]
}
