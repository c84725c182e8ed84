//! Item types

use serde::{Deserialize, Serialize};

/// Item attributes without an identifier.
///
/// Used as the request body for create and update, and as the seed record
/// format. `value` is the product price; `price` is accepted as an alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    #[serde(alias = "price")]
    pub value: f64,
    pub rating: i64,
}

impl NewItem {
    pub fn new(name: impl Into<String>, category: impl Into<String>, value: f64, rating: i64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            value,
            rating,
        }
    }
}

/// A persisted catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub value: f64,
    pub rating: i64,
}

impl Item {
    pub fn from_new(id: i64, attrs: NewItem) -> Self {
        Self {
            id,
            name: attrs.name,
            category: attrs.category,
            value: attrs.value,
            rating: attrs.rating,
        }
    }

    /// Attributes of this item, without the id
    pub fn attributes(&self) -> NewItem {
        NewItem {
            name: self.name.clone(),
            category: self.category.clone(),
            value: self.value,
            rating: self.rating,
        }
    }
}

/// An item together with its computed score. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: Item,
    pub score: f64,
}
