//! # bistro-service: Application Services for Bistro POS
//!
//! The orchestration layer between the pure domain (`bistro-core`) and the
//! store (`bistro-db`). Each service loads the collaborators an operation
//! needs, runs the core rules, and persists the outcome — in that order,
//! so a rule failure never leaves half a write behind.
//!
//! ## Services
//!
//! - [`order_service::OrderService`] - create (admission), list, change status
//! - [`menu_service::MenuService`] - compose menus against the catalog
//! - [`table_service::TableService`] - occupancy and guest-count changes
//!
//! ## Error Policy
//!
//! [`error::ServiceError`] wraps the core and db error sets transparently:
//! the kind the domain produced is the kind the caller matches on. Nothing
//! is retried (every failure here is invalid input or a violated rule, not
//! a transient fault) and nothing is fatal to the process.
//!
//! ## Example
//!
//! ```rust,ignore
//! use bistro_db::{Database, DbConfig};
//! use bistro_service::{CreateOrderRequest, OrderLineRequest, OrderService};
//!
//! let db = Database::new(DbConfig::new("./bistro.db")).await?;
//! let orders = OrderService::new(db);
//!
//! let order = orders
//!     .create(CreateOrderRequest {
//!         order_table_id: table_id,
//!         line_items: vec![OrderLineRequest { menu_id, quantity: 1 }],
//!     })
//!     .await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod menu_service;
pub mod order_service;
pub mod table_service;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ServiceError, ServiceResult};
pub use menu_service::{CreateMenuRequest, MenuProductRequest, MenuService};
pub use order_service::{CreateOrderRequest, OrderLineRequest, OrderService};
pub use table_service::TableService;
