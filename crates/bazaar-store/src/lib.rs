//! # bazaar-store: State & Transitions for Bazaar
//!
//! This crate owns the marketplace's in-memory state and exposes every
//! transition the frontend can trigger. There is no persistence: state
//! lives for the process lifetime and resets on restart.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bazaar State Flow                                │
//! │                                                                         │
//! │  Frontend action (add_to_cart, rate_item, login, ...)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   bazaar-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────────────────────────────────────────────┐ │   │
//! │  │   │                 MarketStore (store.rs)                   │ │   │
//! │  │   │                                                          │ │   │
//! │  │   │  validation ──> role guard ──> mutation ──> snapshot     │ │   │
//! │  │   └──────┬───────────┬───────────┬───────────┬───────────────┘ │   │
//! │  │          ▼           ▼           ▼           ▼                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐        │   │
//! │  │   │ Catalog  │ │   Cart   │ │ReviewLog │ │ Session  │        │   │
//! │  │   │(catalog) │ │  (cart)  │ │(reviews) │ │(session) │        │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘        │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  bazaar-core (types, money, rating fold, validation)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The MarketStore facade and thread-safe StoreState wrapper
//! - [`catalog`] - Item listings, search and counter mutations
//! - [`cart`] - Cart entries, quantity transitions and derived totals
//! - [`reviews`] - The append-only review log
//! - [`session`] - Auth status, login prompt flag and role guards
//! - [`seed`] - Deterministic demo data
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bazaar_store::MarketStore;
//!
//! let mut store = MarketStore::with_seed_data();
//!
//! // Browse anonymously
//! let query = Default::default();
//! let hits = store.browse(&query);
//!
//! // Shop as the seeded buyer
//! store.login(buyer_form)?;
//! store.add_to_cart(&item_id)?;
//! let totals = store.cart_totals();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod reviews;
pub mod seed;
pub mod session;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use cart::{Cart, CartTotals};
pub use catalog::{BrowseQuery, Catalog};
pub use error::{StoreError, StoreResult};
pub use reviews::ReviewLog;
pub use session::{Session, SessionStatus};
pub use store::{MarketStore, StoreState};
