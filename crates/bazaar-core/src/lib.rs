//! # bazaar-core: Pure Business Logic for Bazaar
//!
//! This crate is the **heart** of Bazaar. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bazaar Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (any framework)                     │   │
//! │  │    Browse UI ──► Cart UI ──► Review UI ──► Dashboard UI        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ store transitions                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bazaar-store                                 │   │
//! │  │    add_item, add_to_cart, rate_item, add_review, login, ...    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bazaar-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  rating   │  │ validation│  │   │
//! │  │   │   Item    │  │   Money   │  │   fold    │  │   rules   │  │   │
//! │  │   │  Review   │  │           │  │           │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ASYNC • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (User, Item, Review, CartItem, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`rating`] - Incremental running-average rating math
//! - [`stats`] - Seller dashboard analytics records
//! - [`error`] - Validation error types
//! - [`validation`] - Submission form validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, clock access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bazaar_core::money::Money;
//! use bazaar_core::rating::fold_rating;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(2999); // $29.99
//!
//! // Fold a new 5-star rating into a running average
//! let (rating, count) = fold_rating(4.5, 128, 5);
//! assert_eq!(count, 129);
//! assert!((rating - 4.503875968992248).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod rating;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bazaar_core::Money` instead of
// `use bazaar_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use rating::fold_rating;
pub use stats::*;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lowest rating a shopper can give an item.
///
/// ## Why 1?
/// Zero is the "not yet rated" submission state and is rejected by
/// validation, so a submitted rating always contributes to the average.
pub const MIN_RATING: u8 = 1;

/// Highest rating a shopper can give an item (a five-star scale).
pub const MAX_RATING: u8 = 5;
