//! # Order Repository
//!
//! Database operations for orders and their line items.
//!
//! ## Write Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  insert_order(order)                                                    │
//! │     └── one transaction: orders row + every order_line_items row        │
//! │                                                                         │
//! │  update_status(id, status)                                              │
//! │     └── guarded UPDATE: refuses to overwrite a terminal status, so a    │
//! │         racing status change that completed the order first turns the   │
//! │         write into a no-op the caller can detect (rows_affected == 0)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use bistro_core::{Order, OrderLineItem, OrderStatus};

/// Flat row of the `orders` table; line items are loaded separately.
#[derive(Debug, FromRow)]
struct OrderRow {
    id: String,
    order_table_id: String,
    status: OrderStatus,
    ordered_time: DateTime<Utc>,
}

/// Row of the `order_line_items` table, minus the keys the aggregate
/// doesn't carry.
#[derive(Debug, FromRow)]
struct OrderLineItemRow {
    menu_id: String,
    quantity: i64,
}

impl From<OrderLineItemRow> for OrderLineItem {
    fn from(row: OrderLineItemRow) -> Self {
        OrderLineItem {
            menu_id: row.menu_id,
            quantity: row.quantity,
        }
    }
}

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Inserts an order and all of its line items in one transaction.
    pub async fn insert_order(&self, order: &Order) -> DbResult<()> {
        debug!(
            id = %order.id,
            table = %order.order_table_id,
            lines = order.line_items().len(),
            "Inserting order"
        );

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, order_table_id, status, ordered_time)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&order.id)
        .bind(&order.order_table_id)
        .bind(order.status())
        .bind(order.ordered_time)
        .execute(&mut *tx)
        .await?;

        for item in order.line_items() {
            sqlx::query(
                r#"
                INSERT INTO order_line_items (order_id, menu_id, quantity)
                VALUES (?1, ?2, ?3)
                "#,
            )
            .bind(&order.id)
            .bind(&item.menu_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Gets an order by ID with its line items loaded in taking order.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(
            "SELECT id, order_table_id, status, ordered_time FROM orders WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let items = self.load_line_items(&row.id).await?;
        Ok(Some(Order::from_parts(
            row.id,
            row.order_table_id,
            row.status,
            row.ordered_time,
            items,
        )))
    }

    /// Lists all orders with their line items, in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            "SELECT id, order_table_id, status, ordered_time FROM orders ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let items = self.load_line_items(&row.id).await?;
            orders.push(Order::from_parts(
                row.id,
                row.order_table_id,
                row.status,
                row.ordered_time,
                items,
            ));
        }

        Ok(orders)
    }

    /// Writes a new status for an order, refusing to touch a completed one.
    ///
    /// ## Returns
    /// The number of rows written: 1 when the order existed and was still
    /// open, 0 when it was missing or already terminal. The caller decides
    /// which of the two the 0 means (it loaded the order moments ago).
    pub async fn update_status(&self, order_id: &str, status: OrderStatus) -> DbResult<u64> {
        debug!(id = %order_id, status = ?status, "Updating order status");

        let result = sqlx::query(
            r#"
            UPDATE orders
            SET status = ?2
            WHERE id = ?1 AND status <> ?3
            "#,
        )
        .bind(order_id)
        .bind(status)
        .bind(OrderStatus::Completion)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Whether the table still has an order in a non-terminal status.
    /// The table-management flow refuses to mark such a table empty.
    pub async fn has_open_order(&self, table_id: &str) -> DbResult<bool> {
        let open: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM orders
            WHERE order_table_id = ?1 AND status <> ?2
            "#,
        )
        .bind(table_id)
        .bind(OrderStatus::Completion)
        .fetch_one(&self.pool)
        .await?;

        Ok(open > 0)
    }

    async fn load_line_items(&self, order_id: &str) -> DbResult<Vec<OrderLineItem>> {
        let rows = sqlx::query_as::<_, OrderLineItemRow>(
            r#"
            SELECT menu_id, quantity
            FROM order_line_items
            WHERE order_id = ?1
            ORDER BY seq
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(OrderLineItem::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use bistro_core::{Menu, MenuGroup, MenuProduct, Money, OrderTable, Product};

    /// Seeds the catalog rows an order's foreign keys point at.
    async fn seeded(db: &Database) -> (OrderTable, Menu) {
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

        let table = OrderTable::seat(1, false).unwrap();
        db.tables().insert(&table).await.unwrap();

        (table, menu)
    }

    #[tokio::test]
    async fn test_order_round_trip() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let (table, menu) = seeded(&db).await;
        let repo = db.orders();

        let order = Order::place(
            table.id,
            vec![OrderLineItem::new(menu.id, 1)],
            Utc::now(),
        )
        .unwrap();
        repo.insert_order(&order).await.unwrap();

        let loaded = repo.get_by_id(&order.id).await.unwrap().unwrap();
        assert_eq!(loaded.status(), OrderStatus::Cooking);
        assert_eq!(loaded.line_items(), order.line_items());
        assert_eq!(loaded.ordered_time, order.ordered_time);

        assert!(repo.get_by_id("missing").await.unwrap().is_none());
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_status_guards_terminal() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let (table, menu) = seeded(&db).await;
        let repo = db.orders();

        let order = Order::place(
            table.id.clone(),
            vec![OrderLineItem::new(menu.id, 1)],
            Utc::now(),
        )
        .unwrap();
        repo.insert_order(&order).await.unwrap();

        assert!(repo.has_open_order(&table.id).await.unwrap());

        assert_eq!(
            repo.update_status(&order.id, OrderStatus::Meal).await.unwrap(),
            1
        );
        assert_eq!(
            repo.update_status(&order.id, OrderStatus::Completion)
                .await
                .unwrap(),
            1
        );

        // Terminal now: the guarded write becomes a no-op
        assert_eq!(
            repo.update_status(&order.id, OrderStatus::Meal).await.unwrap(),
            0
        );
        assert_eq!(
            repo.get_by_id(&order.id).await.unwrap().unwrap().status(),
            OrderStatus::Completion
        );
        assert!(!repo.has_open_order(&table.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_line_item_unique_index_backs_up_aggregate() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let (table, menu) = seeded(&db).await;

        // from_parts skips validation on purpose; the schema still objects
        let order = Order::from_parts(
            "o-dup",
            table.id,
            OrderStatus::Cooking,
            Utc::now(),
            vec![
                OrderLineItem::new(menu.id.clone(), 1),
                OrderLineItem::new(menu.id, 2),
            ],
        );

        assert!(db.orders().insert_order(&order).await.is_err());
    }
}
