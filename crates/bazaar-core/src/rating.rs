//! # Rating Module
//!
//! Incremental running-average math for item ratings.
//!
//! ## Why a Running Average?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  INCREMENTAL vs RECOMPUTED AVERAGES                                     │
//! │                                                                         │
//! │  Individual rating events are never stored, only the aggregate:        │
//! │                                                                         │
//! │    Item { rating: 4.5, rating_count: 128 }                              │
//! │                                                                         │
//! │  A new 5-star rating folds into the aggregate in O(1):                  │
//! │                                                                         │
//! │    new = (4.5 × 128 + 5) / 129 = 4.5039                                 │
//! │                                                                         │
//! │  No rating history, no recount, no drift between count and average.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bazaar_core::rating::fold_rating;
//!
//! // First ever rating becomes the average
//! assert_eq!(fold_rating(0.0, 0, 4), (4.0, 1));
//!
//! // Later ratings shift the average by their weight
//! let (rating, count) = fold_rating(4.0, 1, 2);
//! assert_eq!(count, 2);
//! assert!((rating - 3.0).abs() < 1e-9);
//! ```

// =============================================================================
// Rating Fold
// =============================================================================

/// Folds a new rating value into a running average.
///
/// Returns the new `(rating, rating_count)` pair.
///
/// ## Rules
/// - With an empty history (`count == 0`) the new value becomes the average
/// - Otherwise: `new = (rating × count + value) / (count + 1)`
/// - The count always increases by exactly one
///
/// The same fold backs both standalone star ratings and ratings attached
/// to written reviews, so the two paths can never diverge.
///
/// ## Example
/// ```rust
/// use bazaar_core::rating::fold_rating;
///
/// let (rating, count) = fold_rating(4.5, 128, 5);
/// assert_eq!(count, 129);
/// assert!((rating - 4.503875968992248).abs() < 1e-9);
/// ```
pub fn fold_rating(rating: f64, count: i64, value: u8) -> (f64, i64) {
    if count > 0 {
        let folded = (rating * count as f64 + value as f64) / (count as f64 + 1.0);
        (folded, count + 1)
    } else {
        (value as f64, 1)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_first_rating_becomes_average() {
        let (rating, count) = fold_rating(0.0, 0, 5);
        assert_eq!(rating, 5.0);
        assert_eq!(count, 1);

        let (rating, count) = fold_rating(0.0, 0, 1);
        assert_eq!(rating, 1.0);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_fold_shifts_average_towards_value() {
        // 4.5 average over 128 ratings, then one 5-star rating
        let (rating, count) = fold_rating(4.5, 128, 5);
        assert_eq!(count, 129);
        assert!((rating - 4.503875968992248).abs() < EPSILON);
    }

    #[test]
    fn test_fold_sequence_matches_batch_mean() {
        // Folding one at a time must equal the mean of all values
        let values = [5u8, 4, 5, 3, 4];
        let (mut rating, mut count) = (0.0, 0);
        for v in values {
            (rating, count) = fold_rating(rating, count, v);
        }
        let batch_mean = values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64;

        assert_eq!(count, values.len() as i64);
        assert!((rating - batch_mean).abs() < EPSILON);
    }

    #[test]
    fn test_count_only_increases() {
        let (_, count) = fold_rating(3.2, 7, 1);
        assert_eq!(count, 8);

        let (_, count) = fold_rating(5.0, 1, 5);
        assert_eq!(count, 2);
    }

    #[test]
    fn test_average_stays_in_scale_bounds() {
        let (mut rating, mut count) = (0.0, 0);
        for v in [1u8, 5, 5, 5, 1, 3, 2, 4, 5, 1] {
            (rating, count) = fold_rating(rating, count, v);
            assert!(rating >= 1.0);
            assert!(rating <= 5.0);
        }
    }
}
