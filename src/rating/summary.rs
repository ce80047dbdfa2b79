//! Review-step aggregates.

use super::question::Category;
use super::wizard::RatingDraft;

/// Scores entered for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAverage {
    pub category: Category,
    pub answered: u32,
    pub sum: u32,
}

impl CategoryAverage {
    pub fn mean(&self) -> Option<f64> {
        (self.answered > 0).then(|| self.sum as f64 / self.answered as f64)
    }

    /// Mean in tenths, rounded half-up.
    pub fn rounded_tenths(&self) -> Option<u32> {
        round_tenths(self.sum, self.answered)
    }

    /// Mean formatted to one decimal, or "-" when nothing was entered.
    pub fn display(&self) -> String {
        match self.rounded_tenths() {
            Some(tenths) => format!("{}.{}", tenths / 10, tenths % 10),
            None => "-".to_string(),
        }
    }
}

/// Round `sum / count` to tenths, half-up, in integer arithmetic.
///
/// `(sum * 20 + count) / (2 * count)` equals `floor(sum * 10 / count + 0.5)`.
pub fn round_tenths(sum: u32, count: u32) -> Option<u32> {
    (count > 0).then(|| (sum * 20 + count) / (2 * count))
}

/// Averages for every category, in step order.
pub fn category_averages(draft: &RatingDraft) -> Vec<CategoryAverage> {
    Category::ALL
        .iter()
        .map(|&category| {
            let (answered, sum) = category
                .questions()
                .filter_map(|q| draft.score(q.id))
                .fold((0u32, 0u32), |(n, s), score| (n + 1, s + u32::from(score)));
            CategoryAverage { category, answered, sum }
        })
        .collect()
}

/// Mean over every entered score.
pub fn overall_mean(draft: &RatingDraft) -> Option<f64> {
    let (count, sum) = draft
        .scores()
        .fold((0u32, 0u32), |(n, s), (_, score)| (n + 1, s + u32::from(score)));
    (count > 0).then(|| sum as f64 / count as f64)
}
