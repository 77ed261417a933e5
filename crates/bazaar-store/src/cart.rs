//! # Cart
//!
//! Cart entries and their quantity transitions. Totals are derived on
//! read and never stored.
//!
//! ## Merge-or-Insert
//! ```text
//! add(Tee)        cart: [Tee ×1]
//! add(Tee)        cart: [Tee ×2]          same id merges
//! add(Racket)     cart: [Tee ×2, Racket ×1]
//! set_quantity(Tee, 0)   cart: [Racket ×1]    zero deletes the entry
//! ```
//!
//! One entry per item id, so "how many Tees" has exactly one answer.
//! Entries hold frozen snapshots; see `CartItem` for the freezing rules.

use bazaar_core::types::{CartItem, Item};
use bazaar_core::validation::validate_cart_quantity;
use bazaar_core::{Money, ValidationError};
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived cart summary for badges and the checkout footer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Distinct entries (item ids) in the cart.
    pub entry_count: usize,

    /// Units across all entries.
    pub total_quantity: i64,

    /// Sum of line totals in cents.
    pub total_cents: i64,
}

impl CartTotals {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopper's cart, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entries in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an entry by item id.
    pub fn find(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|entry| entry.id == id)
    }

    /// Units across all entries.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|entry| entry.quantity).sum()
    }

    /// Sum of line totals in cents.
    pub fn total_cents(&self) -> i64 {
        self.items.iter().map(|entry| entry.line_total_cents()).sum()
    }

    /// Grand total as Money.
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_cents())
    }

    /// Computes the derived totals.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            entry_count: self.items.len(),
            total_quantity: self.total_quantity(),
            total_cents: self.total_cents(),
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Adds one unit of an item.
    ///
    /// An existing entry for the same id gains a unit; otherwise a fresh
    /// snapshot entry is appended with quantity 1.
    pub fn add(&mut self, item: &Item) {
        if let Some(entry) = self.items.iter_mut().find(|entry| entry.id == item.id) {
            entry.quantity += 1;
            return;
        }
        self.items.push(CartItem::from_item(item));
    }

    /// Sets an entry's quantity directly.
    ///
    /// ## Rules
    /// - Negative quantities are rejected and nothing changes
    /// - Zero removes the entry
    /// - An id with no entry is a no-op (the entry was already gone)
    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> Result<(), ValidationError> {
        validate_cart_quantity(quantity)?;

        if quantity == 0 {
            self.items.retain(|entry| entry.id != id);
            return Ok(());
        }

        if let Some(entry) = self.items.iter_mut().find(|entry| entry.id == id) {
            entry.quantity = quantity;
        }
        Ok(())
    }

    /// Removes an entry outright. Absent ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        self.items.retain(|entry| entry.id != id);
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        cart.totals()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
