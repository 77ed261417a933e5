//! # Dashboard Statistics
//!
//! Read-only sales analytics shown on the seller dashboard.
//!
//! ## Shape
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      DashboardStats                          │
//! │                                                              │
//! │  total_revenue_cents ──────┐                                 │
//! │  total_sales               │  headline numbers               │
//! │                            ┘                                 │
//! │  top_selling_items ────────── Vec<SalesRecord>               │
//! │  category_breakdown ───────── Vec<CategorySales>             │
//! │  monthly_trend ────────────── Vec<MonthlySales>              │
//! │  demographics ─────────────── age / country / gender counts  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The numbers are a pre-aggregated snapshot seeded at startup. Live
//! activity (cart adds, ratings) does not feed back into them; the
//! per-item purchase counters cover that.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Sales Breakdown Records
// =============================================================================

/// Lifetime sales figures for a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SalesRecord {
    pub item_id: String,
    pub item_name: String,
    /// Units sold.
    pub sales: i64,
    /// Revenue in cents.
    pub revenue_cents: i64,
    /// Category label the item files under.
    pub category: String,
}

/// Sales figures rolled up by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategorySales {
    pub category: String,
    pub sales: i64,
    pub revenue_cents: i64,
}

/// Sales figures for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonthlySales {
    /// Short month label ("Jan", "Feb", ...).
    pub month: String,
    pub sales: i64,
    pub revenue_cents: i64,
}

// =============================================================================
// Demographics
// =============================================================================

/// Buyer count within one age bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgeGroupCount {
    /// Bracket label ("18-25", "55+", ...).
    pub range: String,
    pub count: i64,
}

/// Buyer count for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CountryCount {
    pub country: String,
    pub count: i64,
}

/// Buyer count for one gender label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GenderCount {
    pub gender: String,
    pub count: i64,
}

/// Buyer demographics rollup for the dashboard charts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Demographics {
    pub age_groups: Vec<AgeGroupCount>,
    pub countries: Vec<CountryCount>,
    pub genders: Vec<GenderCount>,
}

// =============================================================================
// Dashboard Stats
// =============================================================================

/// The complete seller dashboard snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardStats {
    /// Lifetime revenue in cents.
    pub total_revenue_cents: i64,

    /// Lifetime units sold.
    pub total_sales: i64,

    /// Best sellers, highest revenue first.
    pub top_selling_items: Vec<SalesRecord>,

    /// Per-category rollup.
    pub category_breakdown: Vec<CategorySales>,

    /// Month-by-month trend, oldest first.
    pub monthly_trend: Vec<MonthlySales>,

    /// Buyer demographics.
    pub demographics: Demographics,
}

impl DashboardStats {
    /// Returns the lifetime revenue as Money.
    #[inline]
    pub fn total_revenue(&self) -> Money {
        Money::from_cents(self.total_revenue_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
