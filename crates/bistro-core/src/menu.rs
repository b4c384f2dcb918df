//! # Menu Composition
//!
//! Menus bundle priced products under a single declared price. The one rule
//! that matters:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Pricing-Consistency Invariant                          │
//! │                                                                         │
//! │  menu.price  ≤  Σ (entry.unit_price × entry.quantity)                   │
//! │                                                                         │
//! │  A menu may be priced BELOW the sum of its components — that is a       │
//! │  discount and the whole point of a set menu.                            │
//! │                                                                         │
//! │  A menu may NEVER be priced ABOVE the sum: a customer must not pay      │
//! │  more for the bundle than for the parts.                                │
//! │                                                                         │
//! │  Example:  price 17000.00, components [10000.00 × 2] (sum 20000.00)    │
//! │            ✅ valid — 3000.00 discount                                  │
//! │            price 25000.00, same components                              │
//! │            ❌ PriceExceedsComposition                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price Snapshots
//! A [`MenuProduct`] entry freezes the product's unit price at composition
//! time. The menu's pricing history stays valid even if the catalog product
//! is later repriced — the same snapshot pattern the order side uses for
//! receipts.

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::types::generate_id;

// =============================================================================
// Menu Product Entry
// =============================================================================

/// One priced line of a menu: a product reference, a quantity, and the
/// product's unit price frozen at composition time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuProduct {
    /// Referenced catalog product.
    pub product_id: String,

    /// How many units of the product the menu includes.
    pub quantity: i64,

    /// Unit price in minor units at time of composition (frozen).
    pub unit_price_cents: i64,
}

impl MenuProduct {
    /// Creates a menu entry, snapshotting the product's current price.
    pub fn new(product_id: impl Into<String>, quantity: i64, unit_price: Money) -> Self {
        MenuProduct {
            product_id: product_id.into(),
            quantity,
            unit_price_cents: unit_price.cents(),
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// The amount this entry contributes to the composition total:
    /// `unit_price × quantity`.
    #[inline]
    pub fn amount(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Composition Validator
// =============================================================================

/// Validates a menu's declared price against its product entries.
///
/// Pure function: no lookups, no side effects. Runs at menu creation time
/// and is reusable anywhere a (price, entries) pair needs checking.
///
/// ## Errors
/// - [`PricingError::EmptyComposition`] when `menu_products` is empty
/// - [`PricingError::PriceExceedsComposition`] when
///   `menu_price > Σ entry.amount`
///
/// ## Arithmetic
/// The total is accumulated in i128 so that pathological quantities cannot
/// wrap the comparison; individual amounts stay exact integer cents.
///
/// ## Example
/// ```rust
/// use bistro_core::menu::{validate_composition, MenuProduct};
/// use bistro_core::Money;
///
/// let entries = vec![MenuProduct::new("p-1", 2, Money::from_cents(1_000_000))];
///
/// // 17000.00 against a 20000.00 sum: a discount, fine
/// assert!(validate_composition(Money::from_cents(1_700_000), &entries).is_ok());
///
/// // 25000.00 against the same sum: rejected
/// assert!(validate_composition(Money::from_cents(2_500_000), &entries).is_err());
/// ```
pub fn validate_composition(menu_price: Money, menu_products: &[MenuProduct]) -> PricingResult<()> {
    if menu_products.is_empty() {
        return Err(PricingError::EmptyComposition);
    }

    let total: i128 = menu_products
        .iter()
        .map(|entry| entry.unit_price_cents as i128 * entry.quantity as i128)
        .sum();

    if (menu_price.cents() as i128) > total {
        return Err(PricingError::PriceExceedsComposition {
            menu_price,
            component_total: Money::from_cents(total as i64),
        });
    }

    Ok(())
}

// =============================================================================
// Menu Aggregate
// =============================================================================

/// A priced bundle of products, filed under a menu group.
///
/// Immutable after composition: there is no operation that reprices or
/// re-lines an existing menu. The entry collection is owned outright and
/// only readable from outside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Declared price in minor units.
    pub price_cents: i64,

    /// The group this menu is filed under.
    pub menu_group_id: String,

    /// Ordered product entries. Non-empty, validated at composition.
    menu_products: Vec<MenuProduct>,
}

impl Menu {
    /// Composes a new menu, enforcing the pricing-consistency invariant.
    ///
    /// Identity is generated here; the caller persists the result.
    pub fn compose(
        name: impl Into<String>,
        price: Money,
        menu_group_id: impl Into<String>,
        menu_products: Vec<MenuProduct>,
    ) -> PricingResult<Self> {
        validate_composition(price, &menu_products)?;

        Ok(Menu {
            id: generate_id(),
            name: name.into(),
            price_cents: price.cents(),
            menu_group_id: menu_group_id.into(),
            menu_products,
        })
    }

    /// Rebuilds a menu from stored parts without re-running composition
    /// checks. For repository rehydration only: the stored state already
    /// passed validation when it was composed.
    pub fn from_parts(
        id: impl Into<String>,
        name: impl Into<String>,
        price_cents: i64,
        menu_group_id: impl Into<String>,
        menu_products: Vec<MenuProduct>,
    ) -> Self {
        Menu {
            id: id.into(),
            name: name.into(),
            price_cents,
            menu_group_id: menu_group_id.into(),
            menu_products,
        }
    }

    /// Returns the declared price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// The product entries, in composition order.
    #[inline]
    pub fn menu_products(&self) -> &[MenuProduct] {
        &self.menu_products
    }

    /// Sum of all entry amounts.
    pub fn component_total(&self) -> Money {
        self.menu_products
            .iter()
            .fold(Money::zero(), |acc, entry| acc + entry.amount())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
