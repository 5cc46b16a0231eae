//! Consolidated shopping list types.

use serde::{Deserialize, Serialize};

/// One line of a shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    /// Ingredient name
    pub name: String,
    /// Amount needed across all selected recipes
    pub quantity: String,
    /// Smallest typical retail unit, e.g. "1 bunch"
    pub purchase_size: String,
}

/// A grocery aisle and its items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShoppingListCategory {
    /// Category label, e.g. "Produce"
    pub category: String,
    /// Items in this category
    pub items: Vec<ShoppingListItem>,
}

/// Ordered sequence of categories. Recomputed on demand, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct ShoppingList(Vec<ShoppingListCategory>);

impl ShoppingList {
    /// Categories in display order.
    pub fn categories(&self) -> &[ShoppingListCategory] {
        &self.0
    }

    /// True when there is nothing to buy.
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Total number of items across categories.
    pub fn item_count(&self) -> usize {
        self.0.iter().map(|c| c.items.len()).sum()
    }

    /// Consumes the list, returning the categories.
    pub fn into_categories(self) -> Vec<ShoppingListCategory> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ShoppingList {
    type Item = &'a ShoppingListCategory;
    type IntoIter = std::slice::Iter<'a, ShoppingListCategory>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
