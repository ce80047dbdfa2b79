//! Aggregates for the admin dashboard charts.

use chrono::{Datelike, NaiveDate};

use super::MockStore;

/// Ratings per star bucket, 5★ first.
pub fn rating_distribution(store: &MockStore) -> [usize; 5] {
    let mut buckets = [0; 5];
    for rating in &store.ratings {
        let stars = rating.score.round().clamp(1.0, 5.0) as usize;
        buckets[5 - stars] += 1;
    }
    buckets
}

/// Ratings per weekday, Monday first.
pub fn activity_by_weekday(store: &MockStore) -> [usize; 7] {
    let mut days = [0; 7];
    for rating in &store.ratings {
        days[rating.created_at.weekday().num_days_from_monday() as usize] += 1;
    }
    days
}

/// Ratings per calendar month over the `months` months ending at the most
/// recent rating, oldest first. Labels are `YYYY-MM`.
pub fn monthly_counts(store: &MockStore, months: u32) -> Vec<(String, usize)> {
    let Some(latest) = store.ratings.iter().map(|r| r.created_at).max() else {
        return Vec::new();
    };

    let end = month_index(latest);
    let start = end - i64::from(months.saturating_sub(1));

    (start..=end)
        .map(|index| {
            let count = store
                .ratings
                .iter()
                .filter(|r| month_index(r.created_at) == index)
                .count();
            let (year, month) = (index.div_euclid(12), index.rem_euclid(12) + 1);
            (format!("{year:04}-{month:02}"), count)
        })
        .collect()
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_counts_every_rating() {
        let store = MockStore::seeded();
        let dist = rating_distribution(&store);
        assert_eq!(dist.iter().sum::<usize>(), store.ratings.len());
        // r1 and r4 round to 5 stars; r8 averages 2.5 and rounds to 3
        assert_eq!(dist, [2, 4, 2, 0, 0]);
    }

    #[test]
    fn test_distribution_empty_store() {
        assert_eq!(rating_distribution(&MockStore::default()), [0; 5]);
    }

    #[test]
    fn test_weekday_activity() {
        let store = MockStore::seeded();
        let days = activity_by_weekday(&store);
        assert_eq!(days.iter().sum::<usize>(), store.ratings.len());
        // 2024-10-07 is a Monday
        assert!(days[0] >= 1);
    }

    #[test]
    fn test_monthly_counts_window() {
        let store = MockStore::seeded();
        let months = monthly_counts(&store, 6);

        let labels: Vec<&str> = months.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["2024-08", "2024-09", "2024-10", "2024-11", "2024-12", "2025-01"]);

        let counts: Vec<usize> = months.iter().map(|(_, c)| *c).collect();
        assert_eq!(counts, vec![0, 0, 2, 2, 2, 2]);
    }

    #[test]
    fn test_monthly_counts_empty() {
        assert!(monthly_counts(&MockStore::default(), 6).is_empty());
    }
}
