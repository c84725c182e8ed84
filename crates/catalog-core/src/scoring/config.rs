use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

/// Largest accepted weight. With `validation::MAX_VALUE` and
/// `validation::MAX_RATING` this bounds every score well below `f64::MAX`.
pub const MAX_WEIGHT: f64 = 1e6;

/// Scoring configuration.
///
/// An item's score is
/// `(value * value_weight + rating * rating_weight) * category_weight`,
/// where the category weight comes from `category_weights` (exact,
/// case-sensitive match) or falls back to `default_category_weight`.
///
/// Category names are values, not keys, so their case survives config
/// loaders that normalize keys.
///
/// Example TOML:
/// ```toml
/// [scoring]
/// rating_weight = 25.0
/// default_top_n = 5
///
/// [[scoring.category_weights]]
/// category = "laptop"
/// weight = 1.2
///
/// [[scoring.category_weights]]
/// category = "GamingPC"
/// weight = 2.0
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Multiplier applied to the item value (price)
    pub value_weight: f64,

    /// Points per rating step, added before the category weight
    pub rating_weight: f64,

    /// Per-category multipliers
    pub category_weights: Vec<CategoryWeight>,

    /// Multiplier for categories missing from `category_weights`
    pub default_category_weight: f64,

    /// Number of top items returned when the caller does not ask
    pub default_top_n: usize,
}

/// Multiplier for one category
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CategoryWeight {
    pub category: String,
    pub weight: f64,
}

impl CategoryWeight {
    pub fn new(category: impl Into<String>, weight: f64) -> Self {
        Self {
            category: category.into(),
            weight,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            value_weight: 1.0,
            rating_weight: 0.0,
            category_weights: vec![
                CategoryWeight::new("laptop", 1.2),
                CategoryWeight::new("smartphone", 1.0),
                CategoryWeight::new("headphones", 0.9),
                CategoryWeight::new("monitor", 1.1),
            ],
            default_category_weight: 1.0,
            default_top_n: 3,
        }
    }
}

impl ScoringConfig {
    pub fn category_weight(&self, category: &str) -> f64 {
        self.category_weights
            .iter()
            .find(|cw| cw.category == category)
            .map(|cw| cw.weight)
            .unwrap_or(self.default_category_weight)
    }

    /// Reject weights that could make a score negative or non-finite, and
    /// ambiguous category entries.
    pub fn validate(&self) -> Result<()> {
        check_weight("scoring.value_weight", self.value_weight)?;
        check_weight("scoring.rating_weight", self.rating_weight)?;
        check_weight(
            "scoring.default_category_weight",
            self.default_category_weight,
        )?;

        for (i, cw) in self.category_weights.iter().enumerate() {
            if cw.category.is_empty() {
                return Err(CatalogError::Config(format!(
                    "scoring.category_weights[{}] has an empty category",
                    i
                )));
            }
            if self.category_weights[..i]
                .iter()
                .any(|earlier| earlier.category == cw.category)
            {
                return Err(CatalogError::Config(format!(
                    "scoring.category_weights lists '{}' more than once",
                    cw.category
                )));
            }
            check_weight(
                &format!("scoring.category_weights.{}", cw.category),
                cw.weight,
            )?;
        }

        if self.default_top_n == 0 {
            return Err(CatalogError::Config(
                "scoring.default_top_n must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_weight(key: &str, weight: f64) -> Result<()> {
    if !weight.is_finite() || !(0.0..=MAX_WEIGHT).contains(&weight) {
        return Err(CatalogError::Config(format!(
            "{} must be a finite number between 0 and {} (got {})",
            key, MAX_WEIGHT, weight
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();

        assert_eq!(config.value_weight, 1.0);
        assert_eq!(config.rating_weight, 0.0);
        assert_eq!(config.default_top_n, 3);
        assert_eq!(config.category_weight("laptop"), 1.2);
        assert_eq!(config.category_weight("headphones"), 0.9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_category_uses_default_weight() {
        let config = ScoringConfig {
            default_category_weight: 0.5,
            ..ScoringConfig::default()
        };
        assert_eq!(config.category_weight("wearable"), 0.5);
    }

    #[test]
    fn test_category_lookup_is_case_sensitive() {
        let config = ScoringConfig {
            category_weights: vec![CategoryWeight::new("GamingPC", 2.0)],
            ..ScoringConfig::default()
        };
        assert_eq!(config.category_weight("GamingPC"), 2.0);
        assert_eq!(config.category_weight("gamingpc"), 1.0);
    }

    #[test]
    fn test_partial_scoring_config_parse() {
        let json = r#"{ "rating_weight": 10.0, "default_top_n": 5 }"#;
        let config: ScoringConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.rating_weight, 10.0);
        assert_eq!(config.default_top_n, 5);
        assert_eq!(config.value_weight, 1.0);
        assert_eq!(config.category_weights.len(), 4);
    }

    #[test]
    fn test_category_weights_parse_as_list() {
        let json = r#"{ "category_weights": [{ "category": "GamingPC", "weight": 2.0 }] }"#;
        let config: ScoringConfig = serde_json::from_str(json).unwrap();

        assert_eq!(
            config.category_weights,
            vec![CategoryWeight::new("GamingPC", 2.0)]
        );
    }

    #[test]
    fn test_negative_weight_rejected() {
        let config = ScoringConfig {
            rating_weight: -1.0,
            ..ScoringConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scoring.rating_weight"));
    }

    #[test]
    fn test_oversized_weight_rejected() {
        let config = ScoringConfig {
            value_weight: MAX_WEIGHT * 10.0,
            ..ScoringConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scoring.value_weight"));
    }

    #[test]
    fn test_non_finite_category_weight_rejected() {
        let mut config = ScoringConfig::default();
        config
            .category_weights
            .push(CategoryWeight::new("wearable", f64::NAN));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("category_weights.wearable"));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let mut config = ScoringConfig::default();
        config
            .category_weights
            .push(CategoryWeight::new("laptop", 2.0));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("'laptop'"));
    }

    #[test]
    fn test_zero_top_n_rejected() {
        let config = ScoringConfig {
            default_top_n: 0,
            ..ScoringConfig::default()
        };
        assert!(matches!(config.validate(), Err(CatalogError::Config(_))));
    }
}
