//! # Order Service
//!
//! The order operations exposed to callers: create (admission + persist),
//! list, and change status.
//!
//! ## Create Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CreateOrderRequest                                                     │
//! │       │                                                                 │
//! │       ├── field checks (quantities)                                     │
//! │       │                                                                 │
//! │       ├── TableRepository::get_by_id ──► lookup capability             │
//! │       │                                                                 │
//! │       ├── core admit() ── TableNotFound / TableIsEmpty /               │
//! │       │                   EmptyLineItems / DuplicateMenuReference      │
//! │       │                                                                 │
//! │       └── OrderRepository::insert_order (order + lines, one tx)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The service fetches the table once and hands it to the core validator as
//! a one-shot lookup; the decision of what a missing or empty table means
//! stays in the domain.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};
use bistro_core::order::{admit, change_status};
use bistro_core::validation::validate_quantity;
use bistro_core::{Order, OrderError, OrderLineItem, OrderStatus};
use bistro_db::Database;

// =============================================================================
// Request DTOs
// =============================================================================

/// One requested (menu, quantity) line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub menu_id: String,
    pub quantity: i64,
}

/// A new-order request against a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub order_table_id: String,
    pub line_items: Vec<OrderLineRequest>,
}

// =============================================================================
// Order Service
// =============================================================================

/// Orchestrates the order lifecycle over the repositories.
#[derive(Debug, Clone)]
pub struct OrderService {
    db: Database,
}

impl OrderService {
    /// Creates a new OrderService.
    pub fn new(db: Database) -> Self {
        OrderService { db }
    }

    /// Admits and persists a new order.
    ///
    /// Admission control runs before the aggregate is even constructed, so
    /// nothing is ever written for a missing or empty table. The returned
    /// order is the persisted aggregate, status `Cooking`.
    pub async fn create(&self, request: CreateOrderRequest) -> ServiceResult<Order> {
        debug!(table = %request.order_table_id, lines = request.line_items.len(), "create order");

        for line in &request.line_items {
            validate_quantity(line.quantity)?;
        }
        let line_items: Vec<OrderLineItem> = request
            .line_items
            .into_iter()
            .map(|line| OrderLineItem::new(line.menu_id, line.quantity))
            .collect();

        let table = self.db.tables().get_by_id(&request.order_table_id).await?;
        let order = admit(&request.order_table_id, line_items, Utc::now(), |_| table)?;

        self.db.orders().insert_order(&order).await?;

        info!(order_id = %order.id, table = %order.order_table_id, "Order created");
        Ok(order)
    }

    /// Lists all orders with their line items.
    pub async fn list(&self) -> ServiceResult<Vec<Order>> {
        Ok(self.db.orders().list().await?)
    }

    /// Applies a status transition and persists it.
    ///
    /// The write is guarded against a terminal status, so two racing
    /// status changes cannot both land: the loser's read-modify-write
    /// becomes a detectable no-op and reports `AlreadyCompleted`.
    pub async fn change_status(
        &self,
        order_id: &str,
        requested: OrderStatus,
    ) -> ServiceResult<Order> {
        debug!(order_id = %order_id, requested = ?requested, "change order status");

        let loaded = self.db.orders().get_by_id(order_id).await?;
        let order = change_status(order_id, requested, |_| loaded)?;

        let written = self.db.orders().update_status(order_id, requested).await?;
        if written == 0 {
            // The order existed a moment ago, so a zero write means a racing
            // request completed it first
            return Err(ServiceError::Order(OrderError::AlreadyCompleted {
                order_id: order_id.to_string(),
            }));
        }

        info!(order_id = %order_id, status = ?order.status(), "Order status changed");
        Ok(order)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::{Menu, MenuGroup, MenuProduct, Money, OrderTable, Product};
    use bistro_db::DbConfig;

    struct Fixture {
        service: OrderService,
        db: Database,
        table: OrderTable,
        menu: Menu,
        second_menu: Menu,
    }

    async fn fixture() -> Fixture {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let product = Product::register("Fried chicken", Money::from_cents(1_000_000)).unwrap();
        db.products().insert(&product).await.unwrap();

        let group = MenuGroup::named("Sets").unwrap();
        db.menu_groups().insert(&group).await.unwrap();

        let menu = Menu::compose(
            "Double fried set",
            Money::from_cents(1_700_000),
            group.id.clone(),
            vec![MenuProduct::new(product.id.clone(), 2, product.price())],
        )
        .unwrap();
        db.menus().insert_menu(&menu).await.unwrap();

        let second_menu = Menu::compose(
            "Single fried",
            Money::from_cents(1_000_000),
            group.id,
            vec![MenuProduct::new(product.id, 1, Money::from_cents(1_000_000))],
        )
        .unwrap();
        db.menus().insert_menu(&second_menu).await.unwrap();

        let table = OrderTable::seat(1, false).unwrap();
        db.tables().insert(&table).await.unwrap();

        Fixture {
            service: OrderService::new(db.clone()),
            db,
            table,
            menu,
            second_menu,
        }
    }

    fn one_line(fx: &Fixture) -> Vec<OrderLineRequest> {
        vec![OrderLineRequest {
            menu_id: fx.menu.id.clone(),
            quantity: 1,
        }]
    }

    #[tokio::test]
    async fn test_create_order_round_trip() {
        let fx = fixture().await;

        let order = fx
            .service
            .create(CreateOrderRequest {
                order_table_id: fx.table.id.clone(),
                line_items: one_line(&fx),
            })
            .await
            .unwrap();

        assert_eq!(order.status(), OrderStatus::Cooking);

        // Reloading through the store yields the identical aggregate
        let loaded = fx.db.orders().get_by_id(&order.id).await.unwrap().unwrap();
        assert_eq!(loaded.status(), OrderStatus::Cooking);
        assert_eq!(loaded.line_items(), order.line_items());
        assert_eq!(loaded.order_table_id, fx.table.id);
    }

    #[tokio::test]
    async fn test_create_order_rejects_empty_lines() {
        let fx = fixture().await;

        let err = fx
            .service
            .create(CreateOrderRequest {
                order_table_id: fx.table.id.clone(),
                line_items: vec![],
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Order(OrderError::EmptyLineItems)
        ));
    }

    #[tokio::test]
    async fn test_create_order_rejects_duplicate_menu() {
        let fx = fixture().await;

        let err = fx
            .service
            .create(CreateOrderRequest {
                order_table_id: fx.table.id.clone(),
                line_items: vec![
                    OrderLineRequest {
                        menu_id: fx.menu.id.clone(),
                        quantity: 1,
                    },
                    OrderLineRequest {
                        menu_id: fx.menu.id.clone(),
                        quantity: 2,
                    },
                ],
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Order(OrderError::DuplicateMenuReference { .. })
        ));
    }

    #[tokio::test]
    async fn test_create_order_unknown_table() {
        let fx = fixture().await;

        let err = fx
            .service
            .create(CreateOrderRequest {
                order_table_id: "no-such-table".to_string(),
                line_items: one_line(&fx),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Order(OrderError::TableNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_create_order_empty_table() {
        let fx = fixture().await;

        let empty_table = OrderTable::seat(1, true).unwrap();
        fx.db.tables().insert(&empty_table).await.unwrap();

        let err = fx
            .service
            .create(CreateOrderRequest {
                order_table_id: empty_table.id,
                line_items: one_line(&fx),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Order(OrderError::TableIsEmpty { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let fx = fixture().await;

        let first = fx
            .service
            .create(CreateOrderRequest {
                order_table_id: fx.table.id.clone(),
                line_items: one_line(&fx),
            })
            .await
            .unwrap();
        let second = fx
            .service
            .create(CreateOrderRequest {
                order_table_id: fx.table.id.clone(),
                line_items: vec![OrderLineRequest {
                    menu_id: fx.second_menu.id.clone(),
                    quantity: 2,
                }],
            })
            .await
            .unwrap();

        let orders = fx.service.list().await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, first.id);
        assert_eq!(orders[1].id, second.id);
    }

    #[tokio::test]
    async fn test_change_status_lifecycle() {
        let fx = fixture().await;

        let order = fx
            .service
            .create(CreateOrderRequest {
                order_table_id: fx.table.id.clone(),
                line_items: one_line(&fx),
            })
            .await
            .unwrap();

        let order_after_meal = fx
            .service
            .change_status(&order.id, OrderStatus::Meal)
            .await
            .unwrap();
        assert_eq!(order_after_meal.status(), OrderStatus::Meal);

        fx.service
            .change_status(&order.id, OrderStatus::Completion)
            .await
            .unwrap();

        let err = fx
            .service
            .change_status(&order.id, OrderStatus::Meal)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Order(OrderError::AlreadyCompleted { .. })
        ));

        // The terminal status stuck
        let loaded = fx.db.orders().get_by_id(&order.id).await.unwrap().unwrap();
        assert_eq!(loaded.status(), OrderStatus::Completion);
    }

    #[tokio::test]
    async fn test_change_status_unknown_order() {
        let fx = fixture().await;

        let err = fx
            .service
            .change_status("no-such-order", OrderStatus::Meal)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Order(OrderError::OrderNotFound { .. })
        ));
    }
}
