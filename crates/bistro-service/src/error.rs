//! # Service Error Types
//!
//! One error type for the orchestration layer. Core and database failures
//! pass through with their kind intact — a caller matching on
//! `ServiceError::Order(OrderError::TableIsEmpty { .. })` sees exactly what
//! the domain decided, nothing re-labeled along the way.

use thiserror::Error;

use bistro_core::{OrderError, PricingError, ValidationError};
use bistro_db::DbError;

/// Errors surfaced by the application services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A menu pricing rule was violated.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// An order lifecycle rule was violated.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Request input failed a field-level check.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The persistence layer failed.
    #[error(transparent)]
    Db(#[from] DbError),

    /// A menu referenced a group that was never created.
    #[error("menu group not found: {menu_group_id}")]
    MenuGroupNotFound { menu_group_id: String },

    /// A menu entry referenced a product that was never registered.
    #[error("product not found: {product_id}")]
    ProductNotFound { product_id: String },

    /// A table-management operation targeted an unknown table.
    #[error("order table not found: {table_id}")]
    TableNotFound { table_id: String },

    /// A table cannot be marked empty while an order on it is still open.
    #[error("order table {table_id} still has an open order")]
    TableHasOpenOrder { table_id: String },

    /// Guest counts can only change on an occupied table.
    #[error("order table {table_id} is marked empty")]
    TableMarkedEmpty { table_id: String },
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
