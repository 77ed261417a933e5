//! # Catalog
//!
//! The list of live listings, newest first, plus the counter mutations
//! that shopping activity applies to them.
//!
//! ## Ordering
//! ```text
//! insert(item)                      items
//! ─────────────                     ─────────────────────────────
//! list "Racket"      ──>            [Racket, Cream, Tee, ...]
//! list "Lamp"        ──>            [Lamp, Racket, Cream, Tee, ...]
//! ```
//!
//! New listings go to the front so the grid shows them first without any
//! sorting on read. Existing items never move; only their counters change.

use bazaar_core::types::{Category, Item};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

// =============================================================================
// Browse Query
// =============================================================================

/// A catalog search: free-text term plus optional category filter.
///
/// The default query is empty and matches every listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowseQuery {
    /// Free-text term matched against name, kind and company name.
    pub term: String,

    /// Restrict hits to one category, if set.
    pub category: Option<Category>,
}

impl BrowseQuery {
    /// Builds a term-only query.
    pub fn term(term: impl Into<String>) -> Self {
        BrowseQuery {
            term: term.into(),
            category: None,
        }
    }

    /// Builds a category-only query.
    pub fn category(category: Category) -> Self {
        BrowseQuery {
            term: String::new(),
            category: Some(category),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// All live listings, newest first.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from pre-built listings, kept in the given order.
    pub fn with_items(items: Vec<Item>) -> Self {
        Catalog { items }
    }

    /// Returns all listings, newest first.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no listings.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up a listing by id.
    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Item, StoreError> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| StoreError::ItemNotFound(id.to_string()))
    }

    /// Adds a listing to the front of the catalog.
    pub fn insert(&mut self, item: Item) {
        self.items.insert(0, item);
    }

    /// Filters listings against a browse query, preserving catalog order.
    pub fn browse(&self, query: &BrowseQuery) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.matches_term(&query.term))
            .filter(|item| query.category.map_or(true, |c| item.category == c))
            .collect()
    }

    // =========================================================================
    // Counter Mutations
    // =========================================================================

    /// Folds a standalone star rating into a listing.
    pub fn record_rating(&mut self, id: &str, value: u8) -> Result<&Item, StoreError> {
        let item = self.find_mut(id)?;
        item.record_rating(value);
        Ok(item)
    }

    /// Folds a review's star rating into a listing and bumps its review count.
    pub fn record_review_rating(&mut self, id: &str, value: u8) -> Result<&Item, StoreError> {
        let item = self.find_mut(id)?;
        item.record_review_rating(value);
        Ok(item)
    }

    /// Records one cart-add event against a listing's purchase counters.
    pub fn record_cart_add(&mut self, id: &str) -> Result<&Item, StoreError> {
        let item = self.find_mut(id)?;
        item.record_cart_add();
        Ok(item)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_item(id: &str, name: &str, category: Category) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            kind: "Shirt".to_string(),
            category,
            description: "A test listing".to_string(),
            cover_image: String::new(),
            additional_images: Vec::new(),
            date_added: Utc::now(),
            price_cents: 2999,
            rating: 0.0,
            rating_count: 0,
            review_count: 0,
            purchase_count: 0,
            monthly_purchases: 0,
            user_rating: None,
            seller_id: "seller-1".to_string(),
            seller_name: "Test Seller".to_string(),
            company_name: "Test Co.".to_string(),
        }
    }

    #[test]
    fn test_insert_prepends() {
        let mut catalog = Catalog::new();
        catalog.insert(test_item("1", "Tee", Category::Clothing));
        catalog.insert(test_item("2", "Racket", Category::Sports));

        let names: Vec<&str> = catalog.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Racket", "Tee"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_find() {
        let mut catalog = Catalog::new();
        catalog.insert(test_item("1", "Tee", Category::Clothing));

        assert!(catalog.find("1").is_some());
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn test_browse_by_term() {
        let mut catalog = Catalog::new();
        catalog.insert(test_item("1", "Classic White T-Shirt", Category::Clothing));
        catalog.insert(test_item("2", "Tennis Racket Pro", Category::Sports));

        let hits = catalog.browse(&BrowseQuery::term("racket"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");

        // Blank term matches everything
        let all = catalog.browse(&BrowseQuery::default());
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_browse_by_category() {
        let mut catalog = Catalog::new();
        catalog.insert(test_item("1", "Tee", Category::Clothing));
        catalog.insert(test_item("2", "Racket", Category::Sports));
        catalog.insert(test_item("3", "Polo", Category::Clothing));

        let hits = catalog.browse(&BrowseQuery::category(Category::Clothing));
        let ids: Vec<&str> = hits.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_browse_combines_term_and_category() {
        let mut catalog = Catalog::new();
        catalog.insert(test_item("1", "Classic Tee", Category::Clothing));
        catalog.insert(test_item("2", "Classic Racket", Category::Sports));

        let query = BrowseQuery {
            term: "classic".to_string(),
            category: Some(Category::Sports),
        };
        let hits = catalog.browse(&query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn test_record_rating_on_missing_item() {
        let mut catalog = Catalog::new();
        let err = catalog.record_rating("missing", 5).unwrap_err();
        assert!(matches!(err, StoreError::ItemNotFound(id) if id == "missing"));
    }

    #[test]
    fn test_record_cart_add_bumps_counters() {
        let mut catalog = Catalog::new();
        catalog.insert(test_item("1", "Tee", Category::Clothing));

        catalog.record_cart_add("1").unwrap();
        let item = catalog.record_cart_add("1").unwrap();

        assert_eq!(item.purchase_count, 2);
        assert_eq!(item.monthly_purchases, 2);
    }

    #[test]
    fn test_record_review_rating_updates_both_counts() {
        let mut catalog = Catalog::new();
        catalog.insert(test_item("1", "Tee", Category::Clothing));

        let item = catalog.record_review_rating("1", 4).unwrap();
        assert_eq!(item.rating, 4.0);
        assert_eq!(item.rating_count, 1);
        assert_eq!(item.review_count, 1);
    }
}
