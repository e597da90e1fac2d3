use std::cmp::Ordering;

use crate::domain::stats::population::{CategoryCount, CategoryShare};

/// Turns raw head counts into shares of their sum.
///
/// Percentages are rounded to two decimals and are all zero when nobody is
/// counted. The result is ordered by count (largest first), ties broken by
/// name so responses are stable.
pub fn compute_shares(counts: Vec<CategoryCount>) -> Vec<CategoryShare> {
    let total: i64 = counts.iter().map(|c| c.count.max(0)).sum();
    let mut shares: Vec<CategoryShare> = counts
        .into_iter()
        .map(|c| CategoryShare {
            percentage: percentage(c.count, total),
            id: c.id,
            name: c.name,
            count: c.count,
        })
        .collect();
    shares.sort_by(|a, b| match b.count.cmp(&a.count) {
        Ordering::Equal => a.name.cmp(&b.name),
        other => other,
    });
    shares
}

pub fn percentage(count: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    round2(count as f64 * 100.0 / total as f64)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
