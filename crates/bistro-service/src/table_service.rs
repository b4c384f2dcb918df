//! # Table Service
//!
//! Floor management: flipping a table's empty flag and reseating guests.
//! The order lifecycle only reads the empty flag (at admission); these are
//! the operations that write it.

use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};
use bistro_core::validation::validate_guest_count;
use bistro_core::OrderTable;
use bistro_db::Database;

/// Orchestrates table management over the repositories.
#[derive(Debug, Clone)]
pub struct TableService {
    db: Database,
}

impl TableService {
    /// Creates a new TableService.
    pub fn new(db: Database) -> Self {
        TableService { db }
    }

    /// Marks a table empty or occupied.
    ///
    /// A table with an order still in a non-terminal status cannot be
    /// cleared: the kitchen is cooking for somebody.
    pub async fn change_empty(&self, table_id: &str, empty: bool) -> ServiceResult<OrderTable> {
        debug!(table_id = %table_id, empty = empty, "change table empty flag");

        let mut table = self
            .db
            .tables()
            .get_by_id(table_id)
            .await?
            .ok_or_else(|| ServiceError::TableNotFound {
                table_id: table_id.to_string(),
            })?;

        if empty && self.db.orders().has_open_order(table_id).await? {
            return Err(ServiceError::TableHasOpenOrder {
                table_id: table_id.to_string(),
            });
        }

        table.empty = empty;
        self.db.tables().update(&table).await?;

        info!(table_id = %table_id, empty = empty, "Table occupancy changed");
        Ok(table)
    }

    /// Changes the number of seated guests on an occupied table.
    pub async fn change_number_of_guests(
        &self,
        table_id: &str,
        number_of_guests: i64,
    ) -> ServiceResult<OrderTable> {
        debug!(table_id = %table_id, guests = number_of_guests, "change guest count");

        validate_guest_count(number_of_guests)?;

        let mut table = self
            .db
            .tables()
            .get_by_id(table_id)
            .await?
            .ok_or_else(|| ServiceError::TableNotFound {
                table_id: table_id.to_string(),
            })?;

        if table.empty {
            return Err(ServiceError::TableMarkedEmpty {
                table_id: table_id.to_string(),
            });
        }

        table.number_of_guests = number_of_guests;
        self.db.tables().update(&table).await?;

        info!(table_id = %table_id, guests = number_of_guests, "Guest count changed");
        Ok(table)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order_service::{CreateOrderRequest, OrderLineRequest, OrderService};
    use bistro_core::{Menu, MenuGroup, MenuProduct, Money, OrderStatus, Product};
    use bistro_db::DbConfig;

    struct Fixture {
        service: TableService,
        orders: OrderService,
        db: Database,
        table: OrderTable,
        menu: Menu,
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
            group.id,
            vec![MenuProduct::new(product.id, 2, Money::from_cents(1_000_000))],
        )
        .unwrap();
        db.menus().insert_menu(&menu).await.unwrap();

        let table = OrderTable::seat(2, false).unwrap();
        db.tables().insert(&table).await.unwrap();

        Fixture {
            service: TableService::new(db.clone()),
            orders: OrderService::new(db.clone()),
            db,
            table,
            menu,
        }
    }

    async fn place_order(fx: &Fixture) -> bistro_core::Order {
        fx.orders
            .create(CreateOrderRequest {
                order_table_id: fx.table.id.clone(),
                line_items: vec![OrderLineRequest {
                    menu_id: fx.menu.id.clone(),
                    quantity: 1,
                }],
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_clear_table_without_orders() {
        let fx = fixture().await;

        let table = fx.service.change_empty(&fx.table.id, true).await.unwrap();
        assert!(table.empty);

        let loaded = fx.db.tables().get_by_id(&fx.table.id).await.unwrap().unwrap();
        assert!(loaded.empty);
    }

    #[tokio::test]
    async fn test_cannot_clear_table_with_open_order() {
        let fx = fixture().await;
        let order = place_order(&fx).await;

        let err = fx.service.change_empty(&fx.table.id, true).await.unwrap_err();
        assert!(matches!(err, ServiceError::TableHasOpenOrder { .. }));

        // Completing the order releases the table
        fx.orders
            .change_status(&order.id, OrderStatus::Completion)
            .await
            .unwrap();
        assert!(fx
            .service
            .change_empty(&fx.table.id, true)
            .await
            .unwrap()
            .empty);
    }

    #[tokio::test]
    async fn test_change_empty_unknown_table() {
        let fx = fixture().await;

        let err = fx.service.change_empty("no-such-table", true).await.unwrap_err();
        assert!(matches!(err, ServiceError::TableNotFound { .. }));
    }

    #[tokio::test]
    async fn test_change_guests() {
        let fx = fixture().await;

        let table = fx
            .service
            .change_number_of_guests(&fx.table.id, 4)
            .await
            .unwrap();
        assert_eq!(table.number_of_guests, 4);
    }

    #[tokio::test]
    async fn test_change_guests_rejects_negative() {
        let fx = fixture().await;

        let err = fx
            .service
            .change_number_of_guests(&fx.table.id, -1)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_change_guests_on_empty_table_rejected() {
        let fx = fixture().await;
        fx.service.change_empty(&fx.table.id, true).await.unwrap();

        let err = fx
            .service
            .change_number_of_guests(&fx.table.id, 4)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::TableMarkedEmpty { .. }));
    }
}
