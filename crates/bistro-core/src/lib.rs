//! # bistro-core: Pure Business Logic for Bistro POS
//!
//! This crate is the **heart** of Bistro POS. It contains the order
//! lifecycle and pricing-consistency rules as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bistro POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 bistro-service (orchestration)                  │   │
//! │  │    create_order, change_status, compose_menu, table ops        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bistro-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   menu    │  │   order   │  │   │
//! │  │   │  Product  │  │   Money   │  │  pricing  │  │ lifecycle │  │   │
//! │  │   │  Table    │  │  (cents)  │  │ validator │  │ + machine │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bistro-db (Database Layer)                   │   │
//! │  │              SQLite queries, schema, repositories               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Flat entities (Product, MenuGroup, OrderTable)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`menu`] - Menu aggregate and the composition validator
//! - [`order`] - Order aggregate, admission, and the status state machine
//! - [`error`] - Closed domain error sets
//! - [`validation`] - Field-level input checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every rule is deterministic over its inputs
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are minor units (i64)
//! 4. **Explicit Errors**: closed error sets, never strings or panics
//! 5. **Explicit Lookups**: validators take lookup capabilities as
//!    parameters instead of dereferencing a persistence-managed graph
//!
//! ## Example Usage
//!
//! ```rust
//! use bistro_core::menu::{validate_composition, MenuProduct};
//! use bistro_core::Money;
//!
//! let entries = vec![MenuProduct::new("product-1", 2, Money::from_cents(1_000_000))];
//!
//! // 17000.00 ≤ 2 × 10000.00 — a discounted set menu, accepted
//! validate_composition(Money::from_cents(1_700_000), &entries).unwrap();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bistro_core::Money` instead of
// `use bistro_core::money::Money`

pub use error::{OrderError, PricingError, ValidationError};
pub use menu::{Menu, MenuProduct};
pub use money::Money;
pub use order::{Order, OrderLineItem, OrderStatus};
pub use types::{MenuGroup, OrderTable, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an entity display name.
///
/// Bounds what the catalog accepts; the schema mirrors it.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum quantity of a single menu/order line.
///
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_ITEM_QUANTITY: i64 = 999;
