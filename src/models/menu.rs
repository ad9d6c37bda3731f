use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Menu has no categories")]
    Empty,

    #[error("Menu category '{category}' has no items")]
    EmptyCategory { category: String },

    #[error("Price of '{category} - {item}' must not be negative (got {price})")]
    NegativePrice {
        category: String,
        item: String,
        price: Decimal,
    },

    #[error("Failed to read menu file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed menu JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Category -> item -> unit price, kept in insertion order.
///
/// Flattening order is observable (it assigns the menu numbers a customer
/// types), so both levels are `IndexMap`s rather than hash maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuCatalog {
    categories: IndexMap<String, IndexMap<String, Decimal>>,
}

/// One numbered, displayable row of the flattened menu.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedMenuEntry {
    pub index: usize,
    pub category: String,
    pub item: String,
    pub price: Decimal,
}

impl FlattenedMenuEntry {
    /// `"{category} - {item}"`, the name carried onto line items.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.category, self.item)
    }
}

impl MenuCatalog {
    /// Build a catalog from `(category, [(item, price)])` groups, validating it.
    pub fn from_groups<C, I, N>(groups: C) -> Result<Self, CatalogError>
    where
        C: IntoIterator<Item = (N, I)>,
        I: IntoIterator<Item = (N, Decimal)>,
        N: Into<String>,
    {
        let categories = groups
            .into_iter()
            .map(|(category, items)| {
                let items: IndexMap<String, Decimal> = items
                    .into_iter()
                    .map(|(item, price)| (item.into(), price))
                    .collect();
                (category.into(), items)
            })
            .collect::<IndexMap<String, _>>();

        let catalog = Self { categories };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The take-out menu the ordering tool ships with.
    pub fn takeout() -> Self {
        Self::from_static(&[
            ("Burrito", &[("Chicken", 449), ("Beef", 549), ("Vegetarian", 399)][..]),
            ("Rice Bowl", &[("Teriyaki Chicken", 999), ("Sweet and Sour Pork", 899)][..]),
            ("Sushi", &[("California Roll", 749), ("Spicy Tuna Roll", 849)][..]),
            ("Noodles", &[("Pad Thai", 699), ("Lo Mein", 799), ("Mee Goreng", 899)][..]),
            ("Pizza", &[("Cheese", 899), ("Pepperoni", 1099), ("Vegetarian", 999)][..]),
            ("Burger", &[("Chicken", 749), ("Beef", 849)][..]),
        ])
    }

    /// A smaller dessert menu, handy for trying the tool out.
    pub fn dessert() -> Self {
        Self::from_static(&[
            (
                "Cake",
                &[
                    ("Kuih Lapis", 349),
                    ("Strawberry Cheesecake", 649),
                    ("Chocolate Crepe Cake", 699),
                ][..],
            ),
            ("Pie", &[("Apple", 499), ("Lemon Meringue", 549)][..]),
            (
                "Ice-cream",
                &[
                    ("2-Scoop Vanilla Cone", 349),
                    ("Banana Split", 849),
                    ("Chocolate Sundae", 699),
                ][..],
            ),
        ])
    }

    // Prices in cents; built-in data is well-formed so no validation pass.
    fn from_static(groups: &[(&str, &[(&str, i64)])]) -> Self {
        let categories = groups
            .iter()
            .map(|(category, items)| {
                let items: IndexMap<String, Decimal> = items
                    .iter()
                    .map(|(item, cents)| (item.to_string(), Decimal::new(*cents, 2)))
                    .collect();
                (category.to_string(), items)
            })
            .collect::<IndexMap<String, _>>();
        Self { categories }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (category, items) in &self.categories {
            if items.is_empty() {
                return Err(CatalogError::EmptyCategory {
                    category: category.clone(),
                });
            }
            for (item, price) in items {
                if *price < Decimal::ZERO {
                    return Err(CatalogError::NegativePrice {
                        category: category.clone(),
                        item: item.clone(),
                        price: *price,
                    });
                }
            }
        }

        Ok(())
    }

    /// Total number of items across all categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number every item 1..=N, walking categories then items in insertion order.
    pub fn flatten(&self) -> Vec<FlattenedMenuEntry> {
        self.categories
            .iter()
            .flat_map(|(category, items)| {
                items.iter().map(move |(item, price)| (category, item, *price))
            })
            .enumerate()
            .map(|(i, (category, item, price))| FlattenedMenuEntry {
                index: i + 1,
                category: category.clone(),
                item: item.clone(),
                price,
            })
            .collect()
    }

    /// Resolve a 1-based menu number.
    pub fn get(&self, index: usize) -> Option<FlattenedMenuEntry> {
        if index == 0 {
            return None;
        }
        self.flatten().into_iter().nth(index - 1)
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::takeout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn burritos() -> MenuCatalog {
        MenuCatalog::from_groups([("Burrito", [("Chicken", dec!(4.49)), ("Beef", dec!(5.49))])])
            .unwrap()
    }

    #[test]
    fn test_flatten_assigns_contiguous_indices() {
        let catalog = MenuCatalog::takeout();
        let entries = catalog.flatten();

        assert_eq!(entries.len(), catalog.len());
        assert_eq!(entries.len(), 15);
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.index, i + 1);
        }
    }

    #[test]
    fn test_flatten_follows_insertion_order() {
        let entries = burritos().flatten();

        assert_eq!(entries[0].display_name(), "Burrito - Chicken");
        assert_eq!(entries[0].price, dec!(4.49));
        assert_eq!(entries[1].display_name(), "Burrito - Beef");
        assert_eq!(entries[1].price, dec!(5.49));
    }

    #[test]
    fn test_flatten_is_stable() {
        let catalog = MenuCatalog::dessert();
        assert_eq!(catalog.flatten(), catalog.flatten());
    }

    #[test]
    fn test_get_resolves_one_based_index() {
        let catalog = burritos();

        assert_eq!(catalog.get(2).unwrap().item, "Beef");
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_takeout_menu_spans_categories() {
        let entries = MenuCatalog::takeout().flatten();

        assert_eq!(entries[3].display_name(), "Rice Bowl - Teriyaki Chicken");
        assert_eq!(entries[3].price, dec!(9.99));
        assert_eq!(entries[14].display_name(), "Burger - Beef");
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let result = MenuCatalog::from_groups([("Pie", [("Apple", dec!(-1.00))])]);
        assert!(matches!(result, Err(CatalogError::NegativePrice { .. })));
    }

    #[test]
    fn test_validate_rejects_empty_category() {
        let result = MenuCatalog::from_json_str(r#"{"Pie": {}}"#);
        assert!(matches!(result, Err(CatalogError::EmptyCategory { category }) if category == "Pie"));
    }

    #[test]
    fn test_validate_rejects_empty_catalog() {
        assert!(matches!(MenuCatalog::from_json_str("{}"), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_from_json_keeps_key_order() {
        let catalog =
            MenuCatalog::from_json_str(r#"{"Zeta": {"b": 1.5, "a": 2}, "Alpha": {"c": 0}}"#)
                .unwrap();
        let names: Vec<String> = catalog.flatten().iter().map(|e| e.display_name()).collect();

        assert_eq!(names, vec!["Zeta - b", "Zeta - a", "Alpha - c"]);
    }
}
