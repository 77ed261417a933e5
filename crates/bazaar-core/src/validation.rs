//! # Input Validation
//!
//! Field validators for everything users type into forms.
//!
//! ## Validation Flow
//! ```text
//! ┌────────────┐     ┌──────────────────┐     ┌──────────────────────┐
//! │ Form input │ ──> │ validate_*()     │ ──> │ Ok(())               │
//! │ (raw text) │     │ trim + check     │     │ or ValidationError   │
//! └────────────┘     └──────────────────┘     └──────────────────────┘
//! ```
//!
//! Every validator takes the raw field value and returns `Ok(())` or the
//! first failure it finds. Callers check fields in form order and stop at
//! the first error, so the user sees one problem at a time.
//!
//! Whitespace-only input counts as empty. "   " is not a name.

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_RATING, MIN_RATING};

// =============================================================================
// Required Text Fields
// =============================================================================

fn require_text(value: &str, field: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates an item listing name.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    require_text(name, "name")
}

/// Validates an item's kind label ("Shirt", "Skincare", ...).
pub fn validate_item_kind(kind: &str) -> ValidationResult<()> {
    require_text(kind, "type")
}

/// Validates an item listing description.
pub fn validate_item_description(description: &str) -> ValidationResult<()> {
    require_text(description, "description")
}

/// Validates a seller's storefront company name.
pub fn validate_company_name(company_name: &str) -> ValidationResult<()> {
    require_text(company_name, "company name")
}

/// Validates a review comment body.
pub fn validate_comment(comment: &str) -> ValidationResult<()> {
    require_text(comment, "comment")
}

// =============================================================================
// Login Fields
// =============================================================================

/// Validates a login email.
///
/// Only presence is checked. Nothing is verified against a backend, so
/// format checking would reject honest demo input for no gain.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    require_text(email, "email")
}

/// Validates a login password. Presence only, same as [`validate_email`].
pub fn validate_password(password: &str) -> ValidationResult<()> {
    require_text(password, "password")
}

// =============================================================================
// Numeric Fields
// =============================================================================

/// Validates a listing price in cents.
///
/// Zero is rejected along with negatives: a free listing is a data-entry
/// mistake, not a promotion.
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates a star rating.
///
/// ## Rules
/// - Must be between [`MIN_RATING`] and [`MAX_RATING`] inclusive
/// - Zero is the "not picked yet" submission state and fails here
pub fn validate_rating(value: u8) -> ValidationResult<()> {
    if value < MIN_RATING || value > MAX_RATING {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: MIN_RATING as i64,
            max: MAX_RATING as i64,
        });
    }
    Ok(())
}

/// Validates a requested cart quantity.
///
/// Zero is legal and means "remove the entry". Negative quantities are
/// rejected.
pub fn validate_cart_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
