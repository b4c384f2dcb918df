//! # Menu Repository
//!
//! Database operations for menus and their product entries.
//!
//! A menu is stored across two tables (`menus` + `menu_products`) and
//! always written together: a menu without its entries would violate the
//! non-empty composition rule the aggregate already enforced, so the
//! insert runs in one transaction.

use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use bistro_core::{Menu, MenuProduct};

/// Flat row of the `menus` table; entries are loaded separately.
#[derive(Debug, FromRow)]
struct MenuRow {
    id: String,
    name: String,
    price_cents: i64,
    menu_group_id: String,
}

/// Row of the `menu_products` table, minus the keys the aggregate
/// doesn't carry.
#[derive(Debug, FromRow)]
struct MenuProductRow {
    product_id: String,
    quantity: i64,
    unit_price_cents: i64,
}

impl From<MenuProductRow> for MenuProduct {
    fn from(row: MenuProductRow) -> Self {
        MenuProduct {
            product_id: row.product_id,
            quantity: row.quantity,
            unit_price_cents: row.unit_price_cents,
        }
    }
}

/// Repository for menu database operations.
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: SqlitePool,
}

impl MenuRepository {
    /// Creates a new MenuRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MenuRepository { pool }
    }

    /// Inserts a menu and all of its product entries in one transaction.
    pub async fn insert_menu(&self, menu: &Menu) -> DbResult<()> {
        debug!(
            id = %menu.id,
            name = %menu.name,
            entries = menu.menu_products().len(),
            "Inserting menu"
        );

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO menus (id, name, price_cents, menu_group_id)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&menu.id)
        .bind(&menu.name)
        .bind(menu.price_cents)
        .bind(&menu.menu_group_id)
        .execute(&mut *tx)
        .await?;

        for entry in menu.menu_products() {
            sqlx::query(
                r#"
                INSERT INTO menu_products (menu_id, product_id, quantity, unit_price_cents)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(&menu.id)
            .bind(&entry.product_id)
            .bind(entry.quantity)
            .bind(entry.unit_price_cents)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Gets a menu by ID with its entries loaded in composition order.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Menu>> {
        let row = sqlx::query_as::<_, MenuRow>(
            "SELECT id, name, price_cents, menu_group_id FROM menus WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let entries = self.load_entries(&row.id).await?;
        Ok(Some(Menu::from_parts(
            row.id,
            row.name,
            row.price_cents,
            row.menu_group_id,
            entries,
        )))
    }

    /// Lists all menus with their entries, in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Menu>> {
        let rows = sqlx::query_as::<_, MenuRow>(
            "SELECT id, name, price_cents, menu_group_id FROM menus ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut menus = Vec::with_capacity(rows.len());
        for row in rows {
            let entries = self.load_entries(&row.id).await?;
            menus.push(Menu::from_parts(
                row.id,
                row.name,
                row.price_cents,
                row.menu_group_id,
                entries,
            ));
        }

        Ok(menus)
    }

    async fn load_entries(&self, menu_id: &str) -> DbResult<Vec<MenuProduct>> {
        let rows = sqlx::query_as::<_, MenuProductRow>(
            r#"
            SELECT product_id, quantity, unit_price_cents
            FROM menu_products
            WHERE menu_id = ?1
            ORDER BY seq
            "#,
        )
        .bind(menu_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MenuProduct::from).collect())
    }
}
