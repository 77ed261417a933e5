//! # Store Error Types
//!
//! Error types for state transitions.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (bazaar-core)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds lookup and permission failures        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Frontend displays user-friendly message                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every StoreError leaves the store exactly as it was. Transitions
//! validate and check permissions before touching any state.

use bazaar_core::types::Role;
use bazaar_core::ValidationError;
use thiserror::Error;

/// State transition errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No catalog item with the given id.
    ///
    /// ## When This Occurs
    /// - Rating or reviewing an id that was never listed
    /// - Adding a stale id to the cart
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// The action needs an account and the session has none.
    ///
    /// ## When This Occurs
    /// - Anonymous or guest visitor tries to shop, rate or review
    ///
    /// Raising this also opens the login prompt, so the caller only has
    /// to surface the message.
    #[error("Please log in to continue")]
    LoginRequired,

    /// The session is signed in, but under the wrong role.
    ///
    /// ## When This Occurs
    /// - A seller tries to shop, rate or review
    /// - A buyer tries to list an item or open the dashboard
    #[error("This action requires a {required} account")]
    RoleNotAllowed {
        /// The role the action needs.
        required: Role,
        /// The role the session actually has.
        actual: Role,
    },

    /// A form field failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type for state transitions.
pub type StoreResult<T> = Result<T, StoreError>;
