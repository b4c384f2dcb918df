//! # Error Types
//!
//! Domain-specific error types for bistro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bistro-core errors (this file)                                         │
//! │  ├── PricingError     - Menu composition violations                     │
//! │  ├── OrderError       - Order lifecycle violations                      │
//! │  └── ValidationError  - Catalog input validation failures               │
//! │                                                                         │
//! │  bistro-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                     │
//! │                                                                         │
//! │  bistro-service errors (separate crate)                                 │
//! │  └── ServiceError     - Wraps all of the above, kind preserved          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (menu id, table id, etc.)
//! 3. Errors are closed enum sets, never String
//! 4. Every failing operation returns exactly one kind; nothing is retried
//!    and nothing is swallowed — callers map kinds to responses

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Pricing Error
// =============================================================================

/// Menu composition violations.
///
/// Raised by the composition validator when a menu's declared price cannot
/// be justified by its product entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The declared menu price is higher than the sum of its component
    /// amounts. A menu may be priced below the sum (a discount), never above.
    #[error("menu price {menu_price} exceeds component total {component_total}")]
    PriceExceedsComposition {
        menu_price: Money,
        component_total: Money,
    },

    /// A menu must contain at least one product entry.
    #[error("menu has no product entries")]
    EmptyComposition,
}

// =============================================================================
// Order Error
// =============================================================================

/// Order lifecycle violations.
///
/// Covers admission, aggregate construction, and status transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// An order must contain at least one line item.
    #[error("order has no line items")]
    EmptyLineItems,

    /// Two line items of one order referenced the same menu.
    #[error("order references menu {menu_id} more than once")]
    DuplicateMenuReference { menu_id: String },

    /// The referenced order table does not exist.
    #[error("order table not found: {table_id}")]
    TableNotFound { table_id: String },

    /// The referenced table is marked empty; an unoccupied table cannot
    /// receive an order.
    #[error("order table {table_id} is empty")]
    TableIsEmpty { table_id: String },

    /// No order exists under the given identity.
    #[error("order not found: {order_id}")]
    OrderNotFound { order_id: String },

    /// The order reached its terminal status; no further transition is
    /// permitted, including re-applying the terminal status itself.
    #[error("order {order_id} is already completed")]
    AlreadyCompleted { order_id: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog input validation errors.
///
/// These occur when caller input doesn't meet requirements.
/// Used for early validation before domain logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Numeric value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience alias for operations that can fail a pricing check.
pub type PricingResult<T> = Result<T, PricingError>;

/// Convenience alias for order lifecycle operations.
pub type OrderResult<T> = Result<T, OrderError>;

/// Convenience alias for input validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_messages() {
        let err = PricingError::PriceExceedsComposition {
            menu_price: Money::from_cents(2_500_000),
            component_total: Money::from_cents(2_000_000),
        };
        assert_eq!(
            err.to_string(),
            "menu price 25000.00 exceeds component total 20000.00"
        );
    }

    #[test]
    fn test_order_error_messages() {
        let err = OrderError::TableIsEmpty {
            table_id: "t-1".to_string(),
        };
        assert_eq!(err.to_string(), "order table t-1 is empty");

        let err = OrderError::AlreadyCompleted {
            order_id: "o-9".to_string(),
        };
        assert_eq!(err.to_string(), "order o-9 is already completed");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Negative { field: "price" };
        assert_eq!(err.to_string(), "price must not be negative");
    }
}
