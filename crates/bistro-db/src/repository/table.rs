//! # Order Table Repository
//!
//! Storage for dining tables. Admission reads the `empty` flag from here;
//! the table-management service writes occupancy changes back.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use bistro_core::OrderTable;

/// Repository for order table database operations.
#[derive(Debug, Clone)]
pub struct TableRepository {
    pool: SqlitePool,
}

impl TableRepository {
    /// Creates a new TableRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TableRepository { pool }
    }

    /// Inserts a new table.
    pub async fn insert(&self, table: &OrderTable) -> DbResult<()> {
        debug!(id = %table.id, guests = table.number_of_guests, empty = table.empty, "Inserting table");

        sqlx::query(
            r#"
            INSERT INTO order_tables (id, number_of_guests, empty, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&table.id)
        .bind(table.number_of_guests)
        .bind(table.empty)
        .bind(table.created_at)
        .bind(table.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets a table by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<OrderTable>> {
        let table = sqlx::query_as::<_, OrderTable>(
            r#"
            SELECT id, number_of_guests, empty, created_at, updated_at
            FROM order_tables
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(table)
    }

    /// Lists all tables in insertion order.
    pub async fn list(&self) -> DbResult<Vec<OrderTable>> {
        let tables = sqlx::query_as::<_, OrderTable>(
            r#"
            SELECT id, number_of_guests, empty, created_at, updated_at
            FROM order_tables
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tables)
    }

    /// Writes back a table's occupancy fields.
    pub async fn update(&self, table: &OrderTable) -> DbResult<()> {
        debug!(id = %table.id, guests = table.number_of_guests, empty = table.empty, "Updating table");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE order_tables
            SET number_of_guests = ?2, empty = ?3, updated_at = ?4
            WHERE id = ?1
            "#,
        )
        .bind(&table.id)
        .bind(table.number_of_guests)
        .bind(table.empty)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("OrderTable", &table.id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_insert_get_update_table() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.tables();

        let mut table = OrderTable::seat(1, false).unwrap();
        repo.insert(&table).await.unwrap();

        let loaded = repo.get_by_id(&table.id).await.unwrap().unwrap();
        assert_eq!(loaded.number_of_guests, 1);
        assert!(!loaded.empty);

        table.empty = true;
        table.number_of_guests = 0;
        repo.update(&table).await.unwrap();

        let loaded = repo.get_by_id(&table.id).await.unwrap().unwrap();
        assert!(loaded.empty);
        assert_eq!(loaded.number_of_guests, 0);

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, table.id);
    }

    #[tokio::test]
    async fn test_update_unknown_table() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let table = OrderTable::seat(1, false).unwrap();
        let err = db.tables().update(&table).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
