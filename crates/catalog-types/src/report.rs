//! Aggregate report returned by the processing endpoint

use crate::ScoredItem;
use serde::{Deserialize, Serialize};

/// Top scored items plus summary statistics.
///
/// `count` is the number of items that passed the filter, before the
/// top-N truncation. Statistics are `None` when `count` is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub top_items: Vec<ScoredItem>,
    pub count: usize,
    pub average_score: Option<f64>,
    pub max_score: Option<f64>,
    pub min_score: Option<f64>,
}

impl AggregateReport {
    pub fn empty() -> Self {
        Self {
            top_items: Vec::new(),
            count: 0,
            average_score: None,
            max_score: None,
            min_score: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_serializes_null_stats() {
        let value = serde_json::to_value(AggregateReport::empty()).unwrap();
        assert_eq!(value["count"], 0);
        assert!(value["average_score"].is_null());
        assert!(value["max_score"].is_null());
        assert!(value["min_score"].is_null());
        assert_eq!(value["top_items"].as_array().map(Vec::len), Some(0));
    }
}
