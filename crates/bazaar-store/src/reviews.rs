//! # Review Log
//!
//! Every written review, newest first, across all items.
//!
//! Reviews are never edited or deleted once they land here. Rating
//! side effects (average fold, review count) happen in the catalog,
//! not in this log.

use bazaar_core::types::Review;

// =============================================================================
// Review Log
// =============================================================================

/// The append-only list of reviews, newest first.
#[derive(Debug, Clone, Default)]
pub struct ReviewLog {
    reviews: Vec<Review>,
}

impl ReviewLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log from pre-built reviews, kept in the given order.
    pub fn with_reviews(reviews: Vec<Review>) -> Self {
        ReviewLog { reviews }
    }

    /// Returns every review, newest first.
    pub fn all(&self) -> &[Review] {
        &self.reviews
    }

    /// Number of reviews across all items.
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Adds a review to the front of the log.
    pub fn insert(&mut self, review: Review) {
        self.reviews.insert(0, review);
    }

    /// Returns one item's reviews, newest first.
    pub fn for_item(&self, item_id: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|review| review.item_id == item_id)
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_review(id: &str, item_id: &str) -> Review {
        Review {
            id: id.to_string(),
            user_id: "buyer-1".to_string(),
            user_name: "Jane Buyer".to_string(),
            item_id: item_id.to_string(),
            rating: 5,
            comment: "Great quality!".to_string(),
            images: Vec::new(),
            videos: Vec::new(),
            date_added: Utc::now(),
            helpful: 0,
        }
    }

    #[test]
    fn test_insert_prepends() {
        let mut log = ReviewLog::new();
        log.insert(test_review("r1", "1"));
        log.insert(test_review("r2", "1"));

        let ids: Vec<&str> = log.all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r2", "r1"]);
    }

    #[test]
    fn test_for_item_filters_and_keeps_order() {
        let mut log = ReviewLog::new();
        log.insert(test_review("r1", "1"));
        log.insert(test_review("r2", "2"));
        log.insert(test_review("r3", "1"));

        let hits = log.for_item("1");
        let ids: Vec<&str> = hits.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r3", "r1"]);

        assert!(log.for_item("missing").is_empty());
        assert_eq!(log.len(), 3);
    }
}
