//! # Domain Types
//!
//! Core domain types used throughout Bazaar.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     User        │   │      Item       │   │     Review      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  email          │   │  price_cents    │   │  item_id (FK)   │       │
//! │  │  name           │   │  rating (mean)  │   │  rating (1-5)   │       │
//! │  │  profile        │   │  rating_count   │   │  comment        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Profile      │   │    Category     │   │    CartItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Buyer { ... }  │   │  Clothing       │   │  snapshot of    │       │
//! │  │  Seller { ... } │   │  Beauty, ...    │   │  an Item        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `CartItem` freezes the item's name, price and cover image at the moment
//! it enters the cart. Catalog edits after that moment never reach the cart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::rating::fold_rating;

// =============================================================================
// Role
// =============================================================================

/// The role a user account operates under.
///
/// Roles are immutable once the account exists: a seller cannot shop and
/// a buyer cannot list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Shops the catalog, rates and reviews items.
    Buyer,
    /// Lists items and reads the sales dashboard.
    Seller,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Buyer => write!(f, "buyer"),
            Role::Seller => write!(f, "seller"),
        }
    }
}

// =============================================================================
// Gender
// =============================================================================

/// Self-reported gender on buyer profiles, used only for demographics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

// =============================================================================
// Category
// =============================================================================

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clothing,
    Beauty,
    Electronics,
    Sports,
    Home,
    Books,
    Toys,
    Other,
}

impl Category {
    /// Returns the lowercase label used in search and serialization.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Clothing => "clothing",
            Category::Beauty => "beauty",
            Category::Electronics => "electronics",
            Category::Sports => "sports",
            Category::Home => "home",
            Category::Books => "books",
            Category::Toys => "toys",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// User & Profile
// =============================================================================

/// Role-specific profile data.
///
/// ## Why a Tagged Enum?
/// Buyer and seller accounts carry disjoint fields. A single struct with
/// everything optional lets illegal states exist (a buyer with a company,
/// a seller with demographics). The enum makes the role and its fields
/// inseparable, and `tag = "role"` keeps the wire format flat:
///
/// ```json
/// { "role": "seller", "company_name": "Fashion Forward Co." }
/// { "role": "buyer", "age": 28, "country": "United States", "gender": "female" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Profile {
    /// Buyer accounts may share demographics for the seller dashboard.
    Buyer {
        age: Option<u8>,
        country: Option<String>,
        gender: Option<Gender>,
    },
    /// Seller accounts always have a storefront company name.
    Seller { company_name: String },
}

impl Profile {
    /// Returns the role this profile belongs to.
    #[inline]
    pub const fn role(&self) -> Role {
        match self {
            Profile::Buyer { .. } => Role::Buyer,
            Profile::Seller { .. } => Role::Seller,
        }
    }
}

/// A user account.
///
/// Accounts are synthesized client-side at login. There are no credentials
/// stored anywhere; the email is display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Email address entered at login (never verified).
    pub email: String,

    /// Display name shown on listings, reviews and the nav bar.
    pub name: String,

    /// Role-specific profile data.
    pub profile: Profile,
}

impl User {
    /// Returns the account role.
    #[inline]
    pub const fn role(&self) -> Role {
        self.profile.role()
    }

    /// Returns the seller's company name, if this is a seller account.
    pub fn company_name(&self) -> Option<&str> {
        match &self.profile {
            Profile::Seller { company_name } => Some(company_name),
            Profile::Buyer { .. } => None,
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in the catalog grid.
    pub name: String,

    /// Short product kind label ("Shirt", "Skincare", ...), free-form.
    pub kind: String,

    /// Catalog category the listing files under.
    pub category: Category,

    /// Long-form description for the detail view.
    pub description: String,

    /// Cover image URI (may be empty when the seller skipped the upload).
    pub cover_image: String,

    /// Gallery image URIs for the detail view.
    pub additional_images: Vec<String>,

    /// When the listing was created.
    #[ts(as = "String")]
    pub date_added: DateTime<Utc>,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Running average rating, 0 until the first rating arrives.
    pub rating: f64,

    /// How many ratings the average folds over. Only ever increases.
    pub rating_count: i64,

    /// How many written reviews the item has.
    pub review_count: i64,

    /// Lifetime cart-add count (one per add event, not per unit).
    pub purchase_count: i64,

    /// Cart-add count for the current month.
    pub monthly_purchases: i64,

    /// The most recent star rating given from this session, if any.
    pub user_rating: Option<u8>,

    /// Listing seller's user id.
    pub seller_id: String,

    /// Listing seller's display name (frozen at listing time).
    pub seller_name: String,

    /// Storefront company name shown on the listing.
    pub company_name: String,
}

impl Item {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Folds a standalone star rating into the running average.
    ///
    /// Also remembers the value as this session's rating for the item.
    pub fn record_rating(&mut self, value: u8) {
        let (rating, count) = fold_rating(self.rating, self.rating_count, value);
        self.rating = rating;
        self.rating_count = count;
        self.user_rating = Some(value);
    }

    /// Folds a review's star rating into the running average.
    ///
    /// Review ratings weigh exactly like standalone ratings; the review
    /// itself additionally bumps `review_count`.
    pub fn record_review_rating(&mut self, value: u8) {
        let (rating, count) = fold_rating(self.rating, self.rating_count, value);
        self.rating = rating;
        self.rating_count = count;
        self.review_count += 1;
    }

    /// Records one cart-add event against the purchase counters.
    ///
    /// Counts events, not units: adding the same item twice is two events
    /// even though the cart ends up with one entry of quantity two.
    pub fn record_cart_add(&mut self) {
        self.purchase_count += 1;
        self.monthly_purchases += 1;
    }

    /// Checks whether the listing matches a free-text search term.
    ///
    /// ## Rules
    /// - Case-insensitive substring match on name, kind and company name
    /// - An empty (or all-whitespace) term matches everything
    pub fn matches_term(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&needle)
            || self.kind.to_lowercase().contains(&needle)
            || self.company_name.to_lowercase().contains(&needle)
    }
}

// =============================================================================
// Review
// =============================================================================

/// A written review attached to an item.
///
/// Reviews are immutable once created. The author's display name is frozen
/// into the record so later account changes never rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Review {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Author's user id.
    pub user_id: String,

    /// Author's display name (frozen).
    pub user_name: String,

    /// The reviewed item's id.
    pub item_id: String,

    /// Star rating, 1-5.
    pub rating: u8,

    /// Review body text.
    pub comment: String,

    /// Attached photo URIs.
    pub images: Vec<String>,

    /// Attached video URIs.
    pub videos: Vec<String>,

    /// When the review was written.
    #[ts(as = "String")]
    pub date_added: DateTime<Utc>,

    /// "Found this helpful" count. Display-only; nothing increments it.
    pub helpful: i64,
}

// =============================================================================
// Cart Item
// =============================================================================

/// A cart entry holding a frozen snapshot of an item.
///
/// ## Price Freezing
/// The price is captured at the moment the item enters the cart. If the
/// listing changes afterwards, the cart keeps showing what the shopper
/// agreed to.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// The source item's id (also the cart entry key).
    pub id: String,

    /// Item name at time of adding (frozen).
    pub name: String,

    /// Price in cents at time of adding (frozen).
    pub price_cents: i64,

    /// Cover image URI at time of adding (frozen).
    pub cover_image: String,

    /// Quantity in cart, always at least 1 (zero deletes the entry).
    pub quantity: i64,
}

impl CartItem {
    /// Creates a cart entry from an item, with quantity 1.
    pub fn from_item(item: &Item) -> Self {
        CartItem {
            id: item.id.clone(),
            name: item.name.clone(),
            price_cents: item.price_cents,
            cover_image: item.cover_image.clone(),
            quantity: 1,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Calculates the line total (unit price × quantity) in cents.
    pub fn line_total_cents(&self) -> i64 {
        self.price_cents * self.quantity
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Submission Drafts
// =============================================================================

/// A seller's item listing submission, before it becomes an [`Item`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemDraft {
    pub name: String,
    pub kind: String,
    pub category: Category,
    pub description: String,
    /// Price in cents. Must be strictly positive.
    pub price_cents: i64,
    /// Cover image URI, if one was picked.
    pub cover_image: Option<String>,
    /// Gallery image URIs.
    pub additional_images: Vec<String>,
    /// Storefront company name shown on the listing.
    pub company_name: String,
}

/// A shopper's review submission, before it becomes a [`Review`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReviewDraft {
    /// Star rating, 1-5. Zero means "not picked yet" and is rejected.
    pub rating: u8,
    pub comment: String,
    pub images: Vec<String>,
    pub videos: Vec<String>,
}

/// A login/signup form submission.
///
/// Any email/password pair is accepted; nothing is verified. The profile
/// carries the role-specific signup fields.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Optional display name. Blank falls back to the email local part.
    pub name: String,
    pub profile: Profile,
}

// =============================================================================
// Unit Tests
// =============================================================================
