//! # Catalog and Table Types
//!
//! Flat domain entities: products, menu groups, and dining tables.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Entities                                 │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   MenuGroup     │   │   OrderTable    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name           │   │  name           │   │  number_of_...  │       │
//! │  │  price_cents    │   └─────────────────┘   │  empty          │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  The composite aggregates (Menu, Order) live in their own modules:      │
//! │  they own collections and carry invariants, these entities don't.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity carries a UUID v4 string id, generated at construction.
//! Relationships between entities are expressed as id references resolved
//! through explicit lookups — never as in-memory object graphs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_guest_count, validate_name, validate_price_cents};

/// Generates a fresh entity identity.
pub(crate) fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product with a fixed price.
///
/// Products are immutable once created: menus snapshot the product price at
/// composition time, so a later price change would not rewrite history anyway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown on menus and receipts.
    pub name: String,

    /// Price in minor currency units. Never negative.
    pub price_cents: i64,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Registers a new product, validating name and price.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::{Money, Product};
    ///
    /// let product = Product::register("Fried chicken", Money::from_cents(1_000_000)).unwrap();
    /// assert_eq!(product.price().cents(), 1_000_000);
    /// ```
    pub fn register(name: &str, price: Money) -> Result<Self, ValidationError> {
        validate_name("name", name)?;
        validate_price_cents(price.cents())?;

        let now = Utc::now();
        Ok(Product {
            id: generate_id(),
            name: name.trim().to_string(),
            price_cents: price.cents(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Menu Group
// =============================================================================

/// A named grouping menus are filed under.
///
/// Carries no invariants beyond identity; it exists because menus reference it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct MenuGroup {
    pub id: String,
    pub name: String,
}

impl MenuGroup {
    /// Creates a named menu group with a fresh identity.
    pub fn named(name: &str) -> Result<Self, ValidationError> {
        validate_name("name", name)?;
        Ok(MenuGroup {
            id: generate_id(),
            name: name.trim().to_string(),
        })
    }
}

// =============================================================================
// Order Table
// =============================================================================

/// A dining table orders are placed against.
///
/// The `empty` flag marks an unoccupied table. Admission reads it; the
/// table-management operations flip it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderTable {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Number of seated guests. Never negative.
    pub number_of_guests: i64,

    /// Whether the table is unoccupied. An empty table rejects new orders.
    pub empty: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderTable {
    /// Creates a table with the given occupancy.
    pub fn seat(number_of_guests: i64, empty: bool) -> Result<Self, ValidationError> {
        validate_guest_count(number_of_guests)?;

        let now = Utc::now();
        Ok(OrderTable {
            id: generate_id(),
            number_of_guests,
            empty,
            created_at: now,
            updated_at: now,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
