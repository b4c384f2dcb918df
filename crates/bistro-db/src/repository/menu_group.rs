//! # Menu Group Repository
//!
//! Storage for menu groups. Groups carry no behavior of their own; the menu
//! creation flow resolves them here to reject dangling references.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use bistro_core::MenuGroup;

/// Repository for menu group database operations.
#[derive(Debug, Clone)]
pub struct MenuGroupRepository {
    pool: SqlitePool,
}

impl MenuGroupRepository {
    /// Creates a new MenuGroupRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MenuGroupRepository { pool }
    }

    /// Inserts a new menu group.
    pub async fn insert(&self, group: &MenuGroup) -> DbResult<()> {
        debug!(id = %group.id, name = %group.name, "Inserting menu group");

        sqlx::query("INSERT INTO menu_groups (id, name) VALUES (?1, ?2)")
            .bind(&group.id)
            .bind(&group.name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Gets a menu group by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<MenuGroup>> {
        let group =
            sqlx::query_as::<_, MenuGroup>("SELECT id, name FROM menu_groups WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(group)
    }

    /// Lists all menu groups in insertion order.
    pub async fn list(&self) -> DbResult<Vec<MenuGroup>> {
        let groups =
            sqlx::query_as::<_, MenuGroup>("SELECT id, name FROM menu_groups ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?;

        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_insert_and_get_group() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.menu_groups();

        let group = MenuGroup::named("Recommended").unwrap();
        repo.insert(&group).await.unwrap();

        let loaded = repo.get_by_id(&group.id).await.unwrap().unwrap();
        assert_eq!(loaded.name, "Recommended");
        assert!(repo.get_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.menu_groups();

        let first = MenuGroup::named("Sets").unwrap();
        let second = MenuGroup::named("Sides & drinks").unwrap();
        repo.insert(&first).await.unwrap();
        repo.insert(&second).await.unwrap();

        let groups = repo.list().await.unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].id, first.id);
        assert_eq!(groups[1].id, second.id);
    }
}
