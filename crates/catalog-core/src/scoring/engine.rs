use super::config::ScoringConfig;
use catalog_types::{AggregateReport, Item, ScoredItem};

/// Compute the score for a single item. Pure: same attributes and config,
/// same score.
pub fn score(item: &Item, config: &ScoringConfig) -> f64 {
    let base = item.value * config.value_weight + item.rating as f64 * config.rating_weight;
    base * config.category_weight(&item.category)
}

/// Filter, score, rank and summarize a collection of items.
///
/// An empty or missing `category` keeps every item. Ranking is by score
/// descending, ties by id ascending. Statistics cover every retained item,
/// not just the returned top `top_n`.
pub fn aggregate(
    items: Vec<Item>,
    category: Option<&str>,
    top_n: usize,
    config: &ScoringConfig,
) -> AggregateReport {
    let category = category.filter(|c| !c.is_empty());

    let mut scored: Vec<ScoredItem> = items
        .into_iter()
        .filter(|item| category.map_or(true, |c| item.category == c))
        .map(|item| {
            let score = score(&item, config);
            ScoredItem { item, score }
        })
        .collect();

    if scored.is_empty() {
        return AggregateReport::empty();
    }

    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.item.id.cmp(&b.item.id))
    });

    let count = scored.len();
    let total: f64 = scored.iter().map(|s| s.score).sum();
    let max_score = scored[0].score;
    let min_score = scored[count - 1].score;

    scored.truncate(top_n);

    AggregateReport {
        top_items: scored,
        count,
        average_score: Some(round2(total / count as f64)),
        max_score: Some(max_score),
        min_score: Some(min_score),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
