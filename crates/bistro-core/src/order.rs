//! # Order Lifecycle
//!
//! The order aggregate and the rules that govern it, end to end:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  create request                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  admit() ── table missing? ──────────► TableNotFound                    │
//! │       │  ── table marked empty? ─────► TableIsEmpty                     │
//! │       ▼                                                                 │
//! │  Order::place() ── no line items? ───► EmptyLineItems                   │
//! │       │         ── menu repeated? ───► DuplicateMenuReference           │
//! │       ▼                                                                 │
//! │  Order { status: Cooking }  ──► persisted by the caller                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  transition(Meal | Completion)   any order of Cooking/Meal is legal     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Completion ── every further transition ──► AlreadyCompleted            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Admission runs strictly before aggregate construction: an order is never
//! even built, let alone persisted, against a missing or unoccupied table.
//! Lookups are explicit capabilities handed in by the caller, so every
//! dependency of a rule is visible in its signature and fakeable in tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{OrderError, OrderResult};
use crate::types::{generate_id, OrderTable};

// =============================================================================
// Order Status
// =============================================================================

/// The kitchen-side status of an order.
///
/// `Cooking` is the initial state; `Completion` is terminal. The machine
/// deliberately does not order `Cooking` and `Meal` relative to each other —
/// either may follow the other. Only the terminal state is guarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// The kitchen is preparing the order.
    Cooking,
    /// The meal has been served and is in progress.
    Meal,
    /// The order is finished. Terminal.
    Completion,
}

impl OrderStatus {
    /// The state every new order starts in.
    #[inline]
    pub const fn initial() -> Self {
        OrderStatus::Cooking
    }

    /// Whether this status permits no further transitions.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completion)
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::initial()
    }
}

// =============================================================================
// Order Line Item
// =============================================================================

/// A single (menu, quantity) entry within an order.
///
/// Line items live and die with their order: they are constructed into the
/// aggregate and never shared or mutated from outside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Referenced menu.
    pub menu_id: String,

    /// How many of the menu were ordered.
    pub quantity: i64,
}

impl OrderLineItem {
    /// Creates a line item for the given menu.
    pub fn new(menu_id: impl Into<String>, quantity: i64) -> Self {
        OrderLineItem {
            menu_id: menu_id.into(),
            quantity,
        }
    }
}

// =============================================================================
// Order Aggregate
// =============================================================================

/// A customer order placed against a table.
///
/// Owns its line items outright (constructed once, read-only afterwards) and
/// a status that only [`Order::transition`] may change. Orders are never
/// deleted; a completed order is retained in its terminal state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// The table this order was placed against.
    pub order_table_id: String,

    /// When the order was taken.
    pub ordered_time: DateTime<Utc>,

    status: OrderStatus,

    line_items: Vec<OrderLineItem>,
}

impl Order {
    /// Constructs a new order in the machine's initial state.
    ///
    /// ## Errors
    /// - [`OrderError::EmptyLineItems`] if `line_items` is empty
    /// - [`OrderError::DuplicateMenuReference`] if two line items reference
    ///   the same menu — uniqueness is computed over the distinct count of
    ///   referenced menu ids versus the total count
    ///
    /// No side effects beyond the returned aggregate; persisting it is the
    /// caller's job.
    pub fn place(
        order_table_id: impl Into<String>,
        line_items: Vec<OrderLineItem>,
        ordered_time: DateTime<Utc>,
    ) -> OrderResult<Self> {
        Self::validate_line_items(&line_items)?;

        Ok(Order {
            id: generate_id(),
            order_table_id: order_table_id.into(),
            ordered_time,
            status: OrderStatus::initial(),
            line_items,
        })
    }

    fn validate_line_items(line_items: &[OrderLineItem]) -> OrderResult<()> {
        if line_items.is_empty() {
            return Err(OrderError::EmptyLineItems);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(line_items.len());
        for item in line_items {
            if !seen.insert(item.menu_id.as_str()) {
                return Err(OrderError::DuplicateMenuReference {
                    menu_id: item.menu_id.clone(),
                });
            }
        }

        Ok(())
    }

    /// Rebuilds an order from stored parts without re-validating.
    /// For repository rehydration only.
    pub fn from_parts(
        id: impl Into<String>,
        order_table_id: impl Into<String>,
        status: OrderStatus,
        ordered_time: DateTime<Utc>,
        line_items: Vec<OrderLineItem>,
    ) -> Self {
        Order {
            id: id.into(),
            order_table_id: order_table_id.into(),
            ordered_time,
            status,
            line_items,
        }
    }

    /// The current status.
    #[inline]
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// The line items, in the order they were taken.
    #[inline]
    pub fn line_items(&self) -> &[OrderLineItem] {
        &self.line_items
    }

    /// Whether the order still occupies its table (not yet completed).
    #[inline]
    pub fn is_open(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Applies a status transition in place.
    ///
    /// Any requested status is accepted while the order is open; once the
    /// order reaches `Completion` every further call fails — including a
    /// repeat request for `Completion` itself.
    ///
    /// ## Errors
    /// - [`OrderError::AlreadyCompleted`] if the current status is terminal
    pub fn transition(&mut self, requested: OrderStatus) -> OrderResult<()> {
        if self.status.is_terminal() {
            return Err(OrderError::AlreadyCompleted {
                order_id: self.id.clone(),
            });
        }

        self.status = requested;
        Ok(())
    }
}

// =============================================================================
// Admission
// =============================================================================

/// Admits a new order against a table, then constructs the aggregate.
///
/// `find_table` is the explicit lookup capability: admission resolves the
/// table identity through it rather than assuming a pre-loaded object graph.
///
/// ## Errors
/// - [`OrderError::TableNotFound`] if the lookup returns `None`
/// - [`OrderError::TableIsEmpty`] if the table is marked unoccupied
/// - any [`Order::place`] failure, propagated unchanged
///
/// ## Example
/// ```rust
/// use bistro_core::order::{admit, OrderLineItem};
/// use bistro_core::OrderTable;
/// use chrono::Utc;
///
/// let table = OrderTable::seat(2, false).unwrap();
/// let items = vec![OrderLineItem::new("m-1", 1)];
///
/// let order = admit(&table.id.clone(), items, Utc::now(), |_| Some(table)).unwrap();
/// assert!(order.is_open());
/// ```
pub fn admit<F>(
    order_table_id: &str,
    line_items: Vec<OrderLineItem>,
    ordered_time: DateTime<Utc>,
    find_table: F,
) -> OrderResult<Order>
where
    F: FnOnce(&str) -> Option<OrderTable>,
{
    let table = find_table(order_table_id).ok_or_else(|| OrderError::TableNotFound {
        table_id: order_table_id.to_string(),
    })?;

    if table.empty {
        return Err(OrderError::TableIsEmpty {
            table_id: table.id.clone(),
        });
    }

    Order::place(table.id, line_items, ordered_time)
}

// =============================================================================
// Status Change
// =============================================================================

/// Loads an order through the given lookup and applies a status transition.
///
/// Returns the mutated aggregate; persisting it — inside whatever atomic
/// unit of work the store provides — is the caller's responsibility.
///
/// ## Errors
/// - [`OrderError::OrderNotFound`] if the lookup returns `None`
/// - any [`Order::transition`] failure, propagated unchanged
pub fn change_status<F>(order_id: &str, requested: OrderStatus, find_order: F) -> OrderResult<Order>
where
    F: FnOnce(&str) -> Option<Order>,
{
    let mut order = find_order(order_id).ok_or_else(|| OrderError::OrderNotFound {
        order_id: order_id.to_string(),
    })?;

    order.transition(requested)?;
    Ok(order)
}

// =============================================================================
// Unit Tests
// =============================================================================
