//! Rating repository over the mock store.

use chrono::NaiveDate;

use super::MockStore;
use crate::models::{Rating, RatingTarget, User};
use crate::rating::{Category, SubmittedRating};

/// Ratings received by a user, newest first.
pub fn received_by<'a>(store: &'a MockStore, user_id: &str) -> Vec<&'a Rating> {
    let mut ratings: Vec<&Rating> = store.ratings.iter().filter(|r| r.to_id == user_id).collect();
    ratings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    ratings
}

/// Mean overall score received by a user, if any rating exists.
pub fn average_received(store: &MockStore, user_id: &str) -> Option<f64> {
    let (count, sum) = store
        .ratings
        .iter()
        .filter(|r| r.to_id == user_id)
        .fold((0usize, 0.0), |(n, s), r| (n + 1, s + r.score));
    (count > 0).then(|| sum / count as f64)
}

/// Mean of each category across the ratings a user received.
pub fn category_means_received(store: &MockStore, user_id: &str) -> Option<[f64; 3]> {
    let received = received_by(store, user_id);
    if received.is_empty() {
        return None;
    }

    let mut means = [0.0; 3];
    for category in Category::ALL {
        let i = category.index();
        means[i] = received.iter().map(|r| r.category_mean(category)).sum::<f64>() / received.len() as f64;
    }
    Some(means)
}

/// Mean over every rating in the store.
pub fn overall_average(store: &MockStore) -> Option<f64> {
    let count = store.ratings.len();
    (count > 0).then(|| store.ratings.iter().map(|r| r.score).sum::<f64>() / count as f64)
}

/// Store a submitted wizard draft as a rating given by `from`.
pub fn record(
    store: &mut MockStore,
    from: &User,
    target: &RatingTarget,
    submitted: &SubmittedRating,
    created_at: NaiveDate,
) -> Rating {
    let mut category_means = [0.0; 3];
    for average in &submitted.averages {
        category_means[average.category.index()] = average.mean().unwrap_or_default();
    }

    let rating = Rating {
        id: store.allocate_id("r"),
        from_id: from.id.clone(),
        from_name: from.name.clone(),
        to_id: target.user_id.clone(),
        kelas_name: target.kelas_name.clone().unwrap_or_else(|| "-".to_string()),
        category_means,
        score: submitted.overall,
        comment: submitted.comment.clone(),
        created_at,
    };
    store.ratings.push(rating.clone());
    tracing::info!(
        from = %rating.from_id,
        to = %rating.to_id,
        kind = ?target.kind,
        score = rating.score,
        "Rating recorded"
    );
    rating
}
