//! # Validation Module
//!
//! Input validation utilities for Bistro POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Service request handling                                     │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: field-level input checks                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Domain aggregates (menu.rs, order.rs)                        │
//! │  └── Structural invariants (composition pricing, line-item rules)      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  └── Foreign key constraints                                           │
//! │                                                                         │
//! │  Defense in depth: each layer catches a different class of error       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::{MAX_LINE_ITEM_QUANTITY, MAX_NAME_LENGTH};

// =============================================================================
// String Validators
// =============================================================================

/// Validates an entity display name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_NAME_LENGTH`] characters
///
/// ## Example
/// ```rust
/// use bistro_core::validation::validate_name;
///
/// assert!(validate_name("name", "Fried chicken set").is_ok());
/// assert!(validate_name("name", "").is_err());
/// ```
pub fn validate_name(field: &'static str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field });
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in minor units.
///
/// Zero is allowed (a complimentary item); negative values never are.
///
/// ## Example
/// ```rust
/// use bistro_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1_000_000).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::Negative { field: "price" });
    }

    Ok(())
}

/// Validates a menu/order line quantity.
///
/// ## Rules
/// - Must not be negative (zero-quantity lines are tolerated, matching the
///   storefront behavior of leaving a struck-through line on the ticket)
/// - Must not exceed [`MAX_LINE_ITEM_QUANTITY`]
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::Negative { field: "quantity" });
    }

    if qty > MAX_LINE_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity",
            min: 0,
            max: MAX_LINE_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a table guest count.
pub fn validate_guest_count(guests: i64) -> ValidationResult<()> {
    if guests < 0 {
        return Err(ValidationError::Negative {
            field: "number_of_guests",
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Fried chicken").is_ok());
        assert!(validate_name("name", "").is_err());
        assert!(validate_name("name", "   ").is_err());
        assert!(validate_name("name", &"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1_700_000).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_guest_count() {
        assert!(validate_guest_count(0).is_ok());
        assert!(validate_guest_count(8).is_ok());
        assert!(validate_guest_count(-1).is_err());
    }
}
