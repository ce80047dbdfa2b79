//! Case-insensitive search over list pages.
//!
//! The query is used as typed: no trimming, and an empty query matches
//! every record.

use crate::models::{Kelas, Role, User};
use crate::store::EnrollmentRow;

/// True if any field contains `query`, ignoring case.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Classes by name or code.
pub fn filter_kelas<'a>(kelas: impl IntoIterator<Item = &'a Kelas>, query: &str) -> Vec<&'a Kelas> {
    kelas
        .into_iter()
        .filter(|k| matches_query(query, &[k.name.as_str(), k.code.as_str()]))
        .collect()
}

/// Users by name or NIM/NIP, optionally restricted to one role.
pub fn filter_users<'a>(
    users: impl IntoIterator<Item = &'a User>,
    query: &str,
    role: Option<Role>,
) -> Vec<&'a User> {
    users
        .into_iter()
        .filter(|u| role.is_none_or(|r| u.role == r))
        .filter(|u| matches_query(query, &[u.name.as_str(), u.nim_nip.as_str()]))
        .collect()
}

/// Directory entries by name, NIM/NIP or department.
pub fn filter_people<'a>(people: impl IntoIterator<Item = &'a User>, query: &str) -> Vec<&'a User> {
    people
        .into_iter()
        .filter(|u| matches_query(query, &[u.name.as_str(), u.nim_nip.as_str(), u.department_or_dash()]))
        .collect()
}

/// Enrollment rows by student name, NIM, class name or class code,
/// optionally restricted to one class.
pub fn filter_enrollments<'a>(
    rows: &[EnrollmentRow<'a>],
    query: &str,
    kelas_id: Option<&str>,
) -> Vec<EnrollmentRow<'a>> {
    rows.iter()
        .filter(|row| kelas_id.is_none_or(|id| row.kelas.id == id))
        .filter(|row| {
            matches_query(
                query,
                &[
                    row.student.name.as_str(),
                    row.student.nim_nip.as_str(),
                    row.kelas.name.as_str(),
                    row.kelas.code.as_str(),
                ],
            )
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{self, MockStore};

    #[test]
    fn test_matches_query() {
        assert!(matches_query("", &["anything"]));
        assert!(matches_query("", &[]));
        assert!(matches_query("web", &["Pemrograman Web"]));
        assert!(matches_query("IF3", &["if301"]));
        assert!(!matches_query("data", &["Pemrograman Web", "IF301"]));
    }

    #[test]
    fn test_query_is_not_trimmed() {
        assert!(!matches_query(" web", &["Web"]));
        assert!(matches_query(" web", &["Pemrograman Web"]));
    }

    #[test]
    fn test_filter_kelas() {
        let store = MockStore::seeded();
        let all = filter_kelas(&store.kelas, "");
        assert_eq!(all.len(), store.kelas.len());

        let by_code: Vec<&str> = filter_kelas(&store.kelas, "if30").iter().map(|k| k.id.as_str()).collect();
        assert_eq!(by_code, vec!["k1", "k2", "k3"]);

        let by_name = filter_kelas(&store.kelas, "BASIS");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].code, "IF302");
    }

    #[test]
    fn test_filter_users_with_role() {
        let store = MockStore::seeded();
        assert_eq!(filter_users(&store.users, "", None).len(), store.users.len());

        let students = filter_users(&store.users, "", Some(Role::Mahasiswa));
        assert_eq!(students.len(), 5);

        let nip = filter_users(&store.users, "nip00", Some(Role::Dosen));
        assert_eq!(nip.len(), 3);
        assert!(filter_users(&store.users, "nip00", Some(Role::Mahasiswa)).is_empty());

        let by_name = filter_users(&store.users, "rizki", None);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].nim_nip, "NIM001");
    }

    #[test]
    fn test_filter_people_by_department() {
        let store = MockStore::seeded();
        let dosen = store::user::list_by_role(&store, Role::Dosen);
        let si = filter_people(dosen.iter().copied(), "sistem informasi");
        assert_eq!(si.len(), 1);
        assert_eq!(si[0].name, "Dr. Siti Rahayu");
    }

    #[test]
    fn test_filter_enrollments() {
        let store = MockStore::seeded();
        let rows = store::enrollment::rows(&store);

        assert_eq!(filter_enrollments(&rows, "", None).len(), rows.len());
        assert_eq!(filter_enrollments(&rows, "", Some("k1")).len(), 3);

        let ahmad = filter_enrollments(&rows, "nim001", None);
        assert_eq!(ahmad.len(), 3);
        assert!(ahmad.iter().all(|r| r.student.id == "2"));

        let ahmad_in_k2 = filter_enrollments(&rows, "ahmad", Some("k2"));
        assert_eq!(ahmad_in_k2.len(), 1);

        let by_class = filter_enrollments(&rows, "Kecerdasan", None);
        assert_eq!(by_class.len(), 2);
    }
}
