//! Attribute validation for incoming items

use crate::error::{CatalogError, Result};
use catalog_types::NewItem;

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_CATEGORY_LEN: usize = 100;
pub const MAX_RATING: i64 = 5;
/// Upper bound on `value`; keeps every score finite under validated weights.
pub const MAX_VALUE: f64 = 1e12;

/// Check an item's attributes, reporting the first offending field.
pub fn validate_item(item: &NewItem) -> Result<()> {
    check_text("name", &item.name, MAX_NAME_LEN)?;
    check_text("category", &item.category, MAX_CATEGORY_LEN)?;

    if !item.value.is_finite() {
        return Err(CatalogError::validation("value", "must be a finite number"));
    }
    if item.value < 0.0 {
        return Err(CatalogError::validation("value", "must not be negative"));
    }
    if item.value > MAX_VALUE {
        return Err(CatalogError::validation(
            "value",
            format!("must be at most {}", MAX_VALUE),
        ));
    }

    if !(0..=MAX_RATING).contains(&item.rating) {
        return Err(CatalogError::validation(
            "rating",
            format!("must be between 0 and {}", MAX_RATING),
        ));
    }

    Ok(())
}

/// Check the requested number of top items
pub fn validate_top_n(top_n: usize) -> Result<()> {
    if top_n == 0 {
        return Err(CatalogError::validation("top_n", "must be at least 1"));
    }
    Ok(())
}

fn check_text(field: &str, value: &str, max_len: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::validation(field, "must not be empty"));
    }
    if value.chars().count() > max_len {
        return Err(CatalogError::validation(
            field,
            format!("must be at most {} characters", max_len),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: CatalogError) -> String {
        match err {
            CatalogError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_item_passes() {
        let item = NewItem::new("Laptop Pro X", "laptop", 1499.99, 4);
        assert!(validate_item(&item).is_ok());
    }

    #[test]
    fn test_zero_value_and_rating_are_allowed() {
        let item = NewItem::new("Freebie", "misc", 0.0, 0);
        assert!(validate_item(&item).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let item = NewItem::new("   ", "laptop", 10.0, 3);
        assert_eq!(field_of(validate_item(&item).unwrap_err()), "name");
    }

    #[test]
    fn test_blank_category_rejected() {
        let item = NewItem::new("Widget", "", 10.0, 3);
        assert_eq!(field_of(validate_item(&item).unwrap_err()), "category");
    }

    #[test]
    fn test_overlong_name_rejected() {
        let item = NewItem::new("x".repeat(MAX_NAME_LEN + 1), "laptop", 10.0, 3);
        assert_eq!(field_of(validate_item(&item).unwrap_err()), "name");
    }

    #[test]
    fn test_negative_value_rejected() {
        let item = NewItem::new("Widget", "gadgets", -0.01, 3);
        assert_eq!(field_of(validate_item(&item).unwrap_err()), "value");
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let item = NewItem::new("Widget", "gadgets", f64::INFINITY, 3);
        assert_eq!(field_of(validate_item(&item).unwrap_err()), "value");
    }

    #[test]
    fn test_huge_value_rejected() {
        let item = NewItem::new("Laptop Pro X", "laptop", 1.7e308, 4);
        assert_eq!(field_of(validate_item(&item).unwrap_err()), "value");

        let at_limit = NewItem::new("Laptop Pro X", "laptop", MAX_VALUE, 4);
        assert!(validate_item(&at_limit).is_ok());
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let high = NewItem::new("Widget", "gadgets", 10.0, 6);
        assert_eq!(field_of(validate_item(&high).unwrap_err()), "rating");

        let low = NewItem::new("Widget", "gadgets", 10.0, -1);
        assert_eq!(field_of(validate_item(&low).unwrap_err()), "rating");
    }

    #[test]
    fn test_top_n_must_be_positive() {
        assert_eq!(field_of(validate_top_n(0).unwrap_err()), "top_n");
        assert!(validate_top_n(1).is_ok());
    }
}
