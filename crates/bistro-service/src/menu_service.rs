//! # Menu Service
//!
//! Menu composition: resolve the referenced group and products, snapshot
//! product prices into the entries, run the pricing validator, persist.
//!
//! The composition validator itself is pure and lives in the core; this
//! service is its out-of-core caller, turning id references into the
//! (price, quantity) pairs the rule needs.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};
use bistro_core::validation::{validate_name, validate_price_cents, validate_quantity};
use bistro_core::{Menu, MenuProduct, Money};
use bistro_db::Database;

// =============================================================================
// Request DTOs
// =============================================================================

/// One requested (product, quantity) entry of a menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuProductRequest {
    pub product_id: String,
    pub quantity: i64,
}

/// A new-menu request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMenuRequest {
    pub name: String,
    pub price_cents: i64,
    pub menu_group_id: String,
    pub menu_products: Vec<MenuProductRequest>,
}

// =============================================================================
// Menu Service
// =============================================================================

/// Orchestrates menu composition over the repositories.
#[derive(Debug, Clone)]
pub struct MenuService {
    db: Database,
}

impl MenuService {
    /// Creates a new MenuService.
    pub fn new(db: Database) -> Self {
        MenuService { db }
    }

    /// Composes and persists a new menu.
    ///
    /// Each entry's unit price is snapshotted from the referenced product
    /// at this moment; later catalog repricing leaves the menu untouched.
    ///
    /// ## Errors
    /// - `MenuGroupNotFound` / `ProductNotFound` for dangling references
    /// - any `ValidationError` from the field checks
    /// - any `PricingError` from the composition validator, unchanged
    pub async fn create(&self, request: CreateMenuRequest) -> ServiceResult<Menu> {
        debug!(name = %request.name, entries = request.menu_products.len(), "create menu");

        validate_name("name", &request.name)?;
        validate_price_cents(request.price_cents)?;

        let group = self
            .db
            .menu_groups()
            .get_by_id(&request.menu_group_id)
            .await?
            .ok_or_else(|| ServiceError::MenuGroupNotFound {
                menu_group_id: request.menu_group_id.clone(),
            })?;

        let mut entries = Vec::with_capacity(request.menu_products.len());
        for line in &request.menu_products {
            validate_quantity(line.quantity)?;

            let product = self
                .db
                .products()
                .get_by_id(&line.product_id)
                .await?
                .ok_or_else(|| ServiceError::ProductNotFound {
                    product_id: line.product_id.clone(),
                })?;

            let price = product.price();
            entries.push(MenuProduct::new(product.id, line.quantity, price));
        }

        let menu = Menu::compose(
            request.name.trim(),
            Money::from_cents(request.price_cents),
            group.id,
            entries,
        )?;

        self.db.menus().insert_menu(&menu).await?;

        info!(menu_id = %menu.id, name = %menu.name, price = %menu.price(), "Menu composed");
        Ok(menu)
    }

    /// Lists all menus with their entries.
    pub async fn list(&self) -> ServiceResult<Vec<Menu>> {
        Ok(self.db.menus().list().await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::{MenuGroup, PricingError, Product};
    use bistro_db::DbConfig;

    struct Fixture {
        service: MenuService,
        product: Product,
        group: MenuGroup,
    }

    async fn fixture() -> Fixture {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let product = Product::register("Fried chicken", Money::from_cents(1_000_000)).unwrap();
        db.products().insert(&product).await.unwrap();

        let group = MenuGroup::named("Sets").unwrap();
        db.menu_groups().insert(&group).await.unwrap();

        Fixture {
            service: MenuService::new(db),
            product,
            group,
        }
    }

    fn request(fx: &Fixture, price_cents: i64) -> CreateMenuRequest {
        CreateMenuRequest {
            name: "Double fried set".to_string(),
            price_cents,
            menu_group_id: fx.group.id.clone(),
            menu_products: vec![MenuProductRequest {
                product_id: fx.product.id.clone(),
                quantity: 2,
            }],
        }
    }

    #[tokio::test]
    async fn test_discounted_menu_composes() {
        let fx = fixture().await;

        // 17000.00 against a 2 × 10000.00 composition
        let menu = fx.service.create(request(&fx, 1_700_000)).await.unwrap();

        assert_eq!(menu.price(), Money::from_cents(1_700_000));
        assert_eq!(menu.component_total(), Money::from_cents(2_000_000));

        // The entry froze the product price
        assert_eq!(menu.menu_products()[0].unit_price_cents, 1_000_000);

        let listed = fx.service.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].menu_products(), menu.menu_products());
    }

    #[tokio::test]
    async fn test_overpriced_menu_rejected() {
        let fx = fixture().await;

        // 25000.00 against the same 20000.00 composition
        let err = fx.service.create(request(&fx, 2_500_000)).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Pricing(PricingError::PriceExceedsComposition { .. })
        ));
        assert!(fx.service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_menu_without_entries_rejected() {
        let fx = fixture().await;

        let mut req = request(&fx, 0);
        req.menu_products.clear();
        let err = fx.service.create(req).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Pricing(PricingError::EmptyComposition)
        ));
    }

    #[tokio::test]
    async fn test_unknown_group_rejected() {
        let fx = fixture().await;

        let mut req = request(&fx, 1_700_000);
        req.menu_group_id = "no-such-group".to_string();
        let err = fx.service.create(req).await.unwrap_err();

        assert!(matches!(err, ServiceError::MenuGroupNotFound { .. }));
    }

    #[tokio::test]
    async fn test_unknown_product_rejected() {
        let fx = fixture().await;

        let mut req = request(&fx, 1_700_000);
        req.menu_products[0].product_id = "no-such-product".to_string();
        let err = fx.service.create(req).await.unwrap_err();

        assert!(matches!(err, ServiceError::ProductNotFound { .. }));
    }

    #[tokio::test]
    async fn test_negative_price_rejected_before_lookup() {
        let fx = fixture().await;

        let err = fx.service.create(request(&fx, -1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
