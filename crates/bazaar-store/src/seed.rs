//! # Seed Data
//!
//! Deterministic demo data so the app opens with a stocked marketplace.
//!
//! ## Seeded State
//! ```text
//! users     2  (John Seller, Jane Buyer)
//! items     5  listings across two storefronts
//! reviews   3  (two on the t-shirt, one on the sneakers)
//! stats     1  pre-aggregated dashboard snapshot
//! ```
//!
//! Every id is a fixed, recognizable UUID literal:
//! - users    `...-0001` / `...-0002`
//! - items    `...-0101` through `...-0105`
//! - reviews  `...-0201` through `...-0203`
//!
//! The same build always produces the same state, so tests and demos can
//! reference ids and counter values directly.

use bazaar_core::stats::{
    AgeGroupCount, CategorySales, CountryCount, DashboardStats, Demographics, GenderCount,
    MonthlySales, SalesRecord,
};
use bazaar_core::types::{Category, Gender, Item, Profile, Review, User};
use chrono::{DateTime, TimeZone, Utc};

// =============================================================================
// Fixed IDs
// =============================================================================

/// The seeded seller account (John Seller, Fashion Forward Co.).
pub const SEED_SELLER_ID: &str = "00000000-0000-0000-0000-000000000001";

/// The seeded buyer account (Jane Buyer).
pub const SEED_BUYER_ID: &str = "00000000-0000-0000-0000-000000000002";

pub const TSHIRT_ID: &str = "00000000-0000-0000-0000-000000000101";
pub const JEANS_ID: &str = "00000000-0000-0000-0000-000000000102";
pub const SNEAKERS_ID: &str = "00000000-0000-0000-0000-000000000103";
pub const RACKET_ID: &str = "00000000-0000-0000-0000-000000000104";
pub const FACE_CREAM_ID: &str = "00000000-0000-0000-0000-000000000105";

const REVIEW_TSHIRT_1_ID: &str = "00000000-0000-0000-0000-000000000201";
const REVIEW_TSHIRT_2_ID: &str = "00000000-0000-0000-0000-000000000202";
const REVIEW_SNEAKERS_ID: &str = "00000000-0000-0000-0000-000000000203";

// =============================================================================
// Builders
// =============================================================================

/// Midnight UTC on the given date. Invalid dates fall back to the epoch,
/// which cannot happen for the literals below.
fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The two demo accounts.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: SEED_SELLER_ID.to_string(),
            email: "seller@example.com".to_string(),
            name: "John Seller".to_string(),
            profile: Profile::Seller {
                company_name: "Fashion Forward Co.".to_string(),
            },
        },
        User {
            id: SEED_BUYER_ID.to_string(),
            email: "buyer@example.com".to_string(),
            name: "Jane Buyer".to_string(),
            profile: Profile::Buyer {
                age: Some(28),
                country: Some("United States".to_string()),
                gender: Some(Gender::Female),
            },
        },
    ]
}

/// The five demo listings, in display order.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item {
            id: TSHIRT_ID.to_string(),
            name: "Classic White T-Shirt".to_string(),
            kind: "Shirt".to_string(),
            category: Category::Clothing,
            description: "A comfortable, breathable cotton t-shirt perfect for everyday wear. \
                          Made from 100% organic cotton with a relaxed fit."
                .to_string(),
            cover_image:
                "https://images.pexels.com/photos/996329/pexels-photo-996329.jpeg?auto=compress&cs=tinysrgb&w=500"
                    .to_string(),
            additional_images: vec![
                "https://images.pexels.com/photos/996329/pexels-photo-996329.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .to_string(),
                "https://images.pexels.com/photos/1021693/pexels-photo-1021693.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .to_string(),
            ],
            date_added: day(2024, 1, 15),
            price_cents: 2999,
            rating: 4.5,
            rating_count: 128,
            review_count: 95,
            purchase_count: 342,
            monthly_purchases: 45,
            user_rating: None,
            seller_id: SEED_SELLER_ID.to_string(),
            seller_name: "John Seller".to_string(),
            company_name: "Fashion Forward Co.".to_string(),
        },
        Item {
            id: JEANS_ID.to_string(),
            name: "Denim Jeans".to_string(),
            kind: "Pant".to_string(),
            category: Category::Clothing,
            description: "Premium denim jeans with a modern slim fit. Features reinforced \
                          stitching and comfortable stretch fabric."
                .to_string(),
            cover_image:
                "https://images.pexels.com/photos/1598507/pexels-photo-1598507.jpeg?auto=compress&cs=tinysrgb&w=500"
                    .to_string(),
            additional_images: vec![
                "https://images.pexels.com/photos/1598507/pexels-photo-1598507.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .to_string(),
                "https://images.pexels.com/photos/914668/pexels-photo-914668.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .to_string(),
            ],
            date_added: day(2024, 1, 10),
            price_cents: 7999,
            rating: 4.2,
            rating_count: 89,
            review_count: 67,
            purchase_count: 198,
            monthly_purchases: 23,
            user_rating: None,
            seller_id: SEED_SELLER_ID.to_string(),
            seller_name: "John Seller".to_string(),
            company_name: "Fashion Forward Co.".to_string(),
        },
        Item {
            id: SNEAKERS_ID.to_string(),
            name: "Running Sneakers".to_string(),
            kind: "Shoes".to_string(),
            // Footwear files under clothing in this catalog
            category: Category::Clothing,
            description: "Lightweight running shoes with advanced cushioning technology. \
                          Perfect for daily runs and gym workouts."
                .to_string(),
            cover_image:
                "https://images.pexels.com/photos/2529148/pexels-photo-2529148.jpeg?auto=compress&cs=tinysrgb&w=500"
                    .to_string(),
            additional_images: vec![
                "https://images.pexels.com/photos/2529148/pexels-photo-2529148.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .to_string(),
                "https://images.pexels.com/photos/1464625/pexels-photo-1464625.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .to_string(),
            ],
            date_added: day(2024, 1, 8),
            price_cents: 12999,
            rating: 4.8,
            rating_count: 256,
            review_count: 189,
            purchase_count: 567,
            monthly_purchases: 78,
            user_rating: None,
            seller_id: SEED_SELLER_ID.to_string(),
            seller_name: "John Seller".to_string(),
            company_name: "Fashion Forward Co.".to_string(),
        },
        Item {
            id: RACKET_ID.to_string(),
            name: "Tennis Racket".to_string(),
            kind: "Sports Gear".to_string(),
            category: Category::Sports,
            description: "Professional-grade tennis racket with carbon fiber frame. Excellent \
                          control and power for competitive play."
                .to_string(),
            cover_image:
                "https://images.pexels.com/photos/209977/pexels-photo-209977.jpeg?auto=compress&cs=tinysrgb&w=500"
                    .to_string(),
            additional_images: vec![
                "https://images.pexels.com/photos/209977/pexels-photo-209977.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .to_string(),
                "https://images.pexels.com/photos/1752757/pexels-photo-1752757.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .to_string(),
            ],
            date_added: day(2024, 1, 5),
            price_cents: 19999,
            rating: 4.6,
            rating_count: 74,
            review_count: 52,
            purchase_count: 123,
            monthly_purchases: 12,
            user_rating: None,
            seller_id: SEED_SELLER_ID.to_string(),
            seller_name: "John Seller".to_string(),
            company_name: "Fashion Forward Co.".to_string(),
        },
        Item {
            id: FACE_CREAM_ID.to_string(),
            name: "Luxury Face Cream".to_string(),
            kind: "Skincare".to_string(),
            category: Category::Beauty,
            description: "Premium anti-aging face cream with natural ingredients. Reduces fine \
                          lines and improves skin texture."
                .to_string(),
            cover_image:
                "https://images.pexels.com/photos/3685530/pexels-photo-3685530.jpeg?auto=compress&cs=tinysrgb&w=500"
                    .to_string(),
            additional_images: vec![
                "https://images.pexels.com/photos/3685530/pexels-photo-3685530.jpeg?auto=compress&cs=tinysrgb&w=800"
                    .to_string(),
            ],
            date_added: day(2024, 1, 12),
            price_cents: 8999,
            rating: 4.7,
            rating_count: 156,
            review_count: 134,
            purchase_count: 289,
            monthly_purchases: 34,
            user_rating: None,
            seller_id: SEED_SELLER_ID.to_string(),
            seller_name: "John Seller".to_string(),
            company_name: "Beauty Essentials Ltd.".to_string(),
        },
    ]
}

/// The three demo reviews, newest first.
///
/// All three share the seeded buyer's account id but carry distinct
/// display names, the way shared demo accounts end up looking.
pub fn seed_reviews() -> Vec<Review> {
    vec![
        Review {
            id: REVIEW_TSHIRT_1_ID.to_string(),
            user_id: SEED_BUYER_ID.to_string(),
            user_name: "Jane Buyer".to_string(),
            item_id: TSHIRT_ID.to_string(),
            rating: 5,
            comment: "Excellent quality t-shirt! Very comfortable and fits perfectly. The \
                      fabric is soft and breathable."
                .to_string(),
            images: vec![
                "https://images.pexels.com/photos/996329/pexels-photo-996329.jpeg?auto=compress&cs=tinysrgb&w=400"
                    .to_string(),
            ],
            videos: Vec::new(),
            date_added: day(2024, 1, 20),
            helpful: 12,
        },
        Review {
            id: REVIEW_TSHIRT_2_ID.to_string(),
            user_id: SEED_BUYER_ID.to_string(),
            user_name: "Mike Johnson".to_string(),
            item_id: TSHIRT_ID.to_string(),
            rating: 4,
            comment: "Good quality shirt, though it runs a bit large. Great value for money."
                .to_string(),
            images: Vec::new(),
            videos: Vec::new(),
            date_added: day(2024, 1, 18),
            helpful: 8,
        },
        Review {
            id: REVIEW_SNEAKERS_ID.to_string(),
            user_id: SEED_BUYER_ID.to_string(),
            user_name: "Sarah Wilson".to_string(),
            item_id: SNEAKERS_ID.to_string(),
            rating: 5,
            comment: "Amazing running shoes! Very comfortable for long runs. Great cushioning \
                      and support."
                .to_string(),
            images: vec![
                "https://images.pexels.com/photos/2529148/pexels-photo-2529148.jpeg?auto=compress&cs=tinysrgb&w=400"
                    .to_string(),
            ],
            videos: Vec::new(),
            date_added: day(2024, 1, 12),
            helpful: 15,
        },
    ]
}

/// The pre-aggregated dashboard snapshot.
pub fn seed_stats() -> DashboardStats {
    DashboardStats {
        total_revenue_cents: 4_567_890,
        total_sales: 1519,
        top_selling_items: vec![
            SalesRecord {
                item_id: SNEAKERS_ID.to_string(),
                item_name: "Running Sneakers".to_string(),
                sales: 567,
                revenue_cents: 7_374_333,
                category: "clothing".to_string(),
            },
            SalesRecord {
                item_id: TSHIRT_ID.to_string(),
                item_name: "Classic White T-Shirt".to_string(),
                sales: 342,
                revenue_cents: 1_025_658,
                category: "clothing".to_string(),
            },
            SalesRecord {
                item_id: FACE_CREAM_ID.to_string(),
                item_name: "Luxury Face Cream".to_string(),
                sales: 289,
                revenue_cents: 2_600_711,
                category: "beauty".to_string(),
            },
            SalesRecord {
                item_id: JEANS_ID.to_string(),
                item_name: "Denim Jeans".to_string(),
                sales: 198,
                revenue_cents: 1_583_802,
                category: "clothing".to_string(),
            },
            SalesRecord {
                item_id: RACKET_ID.to_string(),
                item_name: "Tennis Racket".to_string(),
                sales: 123,
                revenue_cents: 2_459_877,
                category: "sports".to_string(),
            },
        ],
        category_breakdown: vec![
            CategorySales {
                category: "Clothing".to_string(),
                sales: 1107,
                revenue_cents: 9_983_793,
            },
            CategorySales {
                category: "Beauty".to_string(),
                sales: 289,
                revenue_cents: 2_600_711,
            },
            CategorySales {
                category: "Sports".to_string(),
                sales: 123,
                revenue_cents: 2_459_877,
            },
        ],
        monthly_trend: vec![
            MonthlySales {
                month: "Jan".to_string(),
                sales: 234,
                revenue_cents: 1_845_678,
            },
            MonthlySales {
                month: "Feb".to_string(),
                sales: 289,
                revenue_cents: 2_213_456,
            },
            MonthlySales {
                month: "Mar".to_string(),
                sales: 345,
                revenue_cents: 2_789_012,
            },
            MonthlySales {
                month: "Apr".to_string(),
                sales: 298,
                revenue_cents: 2_456_789,
            },
            MonthlySales {
                month: "May".to_string(),
                sales: 353,
                revenue_cents: 2_987_654,
            },
        ],
        demographics: Demographics {
            age_groups: vec![
                AgeGroupCount {
                    range: "18-25".to_string(),
                    count: 456,
                },
                AgeGroupCount {
                    range: "26-35".to_string(),
                    count: 678,
                },
                AgeGroupCount {
                    range: "36-45".to_string(),
                    count: 234,
                },
                AgeGroupCount {
                    range: "46-55".to_string(),
                    count: 123,
                },
                AgeGroupCount {
                    range: "55+".to_string(),
                    count: 89,
                },
            ],
            countries: vec![
                CountryCount {
                    country: "United States".to_string(),
                    count: 567,
                },
                CountryCount {
                    country: "Canada".to_string(),
                    count: 234,
                },
                CountryCount {
                    country: "United Kingdom".to_string(),
                    count: 189,
                },
                CountryCount {
                    country: "Australia".to_string(),
                    count: 156,
                },
                CountryCount {
                    country: "Germany".to_string(),
                    count: 134,
                },
            ],
            genders: vec![
                GenderCount {
                    gender: "Female".to_string(),
                    count: 789,
                },
                GenderCount {
                    gender: "Male".to_string(),
                    count: 634,
                },
                GenderCount {
                    gender: "Other".to_string(),
                    count: 96,
                },
            ],
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::types::Role;

    #[test]
    fn test_seed_users() {
        let users = seed_users();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].role(), Role::Seller);
        assert_eq!(users[0].company_name(), Some("Fashion Forward Co."));
        assert_eq!(users[1].role(), Role::Buyer);
        assert_eq!(users[1].name, "Jane Buyer");
    }

    #[test]
    fn test_seed_items_shape() {
        let items = seed_items();
        assert_eq!(items.len(), 5);

        let tshirt = &items[0];
        assert_eq!(tshirt.id, TSHIRT_ID);
        assert_eq!(tshirt.price_cents, 2999);
        assert_eq!(tshirt.rating, 4.5);
        assert_eq!(tshirt.rating_count, 128);
        assert_eq!(tshirt.purchase_count, 342);
        assert_eq!(tshirt.user_rating, None);
        assert_eq!(tshirt.date_added, day(2024, 1, 15));

        // The priciest listing is the racket at $199.99
        let max = items.iter().map(|i| i.price_cents).max();
        assert_eq!(max, Some(19_999));
    }

    #[test]
    fn test_seed_reviews_reference_seeded_items() {
        let items = seed_items();
        let reviews = seed_reviews();
        assert_eq!(reviews.len(), 3);

        for review in &reviews {
            assert!(items.iter().any(|item| item.id == review.item_id));
            assert_eq!(review.user_id, SEED_BUYER_ID);
        }

        // Newest first
        assert!(reviews[0].date_added > reviews[1].date_added);
    }

    #[test]
    fn test_seed_stats_totals() {
        let stats = seed_stats();
        assert_eq!(stats.total_revenue_cents, 4_567_890);
        assert_eq!(stats.total_sales, 1519);
        assert_eq!(stats.top_selling_items.len(), 5);

        // Best sellers are ordered by units sold
        let sales: Vec<i64> = stats.top_selling_items.iter().map(|r| r.sales).collect();
        let mut sorted = sales.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(sales, sorted);

        // Category sales add up to the headline number
        let category_sales: i64 = stats.category_breakdown.iter().map(|c| c.sales).sum();
        assert_eq!(category_sales, stats.total_sales);
    }
}
