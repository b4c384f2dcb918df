//! # Repository Module
//!
//! Database repository implementations for Bistro POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Service layer                                                          │
//! │       │   db.orders().get_by_id("…")                                    │
//! │       ▼                                                                 │
//! │  OrderRepository ── SQL ──► SQLite                                      │
//! │                                                                         │
//! │  Each repository owns the SQL for one table group and returns core     │
//! │  domain values, assembling aggregates (menu + entries, order + lines)  │
//! │  from their rows. Services never see SQL; core never sees the pool.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - catalog products
//! - [`menu_group::MenuGroupRepository`] - menu groups
//! - [`menu::MenuRepository`] - menus with their product entries
//! - [`table::TableRepository`] - dining tables
//! - [`order::OrderRepository`] - orders with their line items

pub mod menu;
pub mod menu_group;
pub mod order;
pub mod product;
pub mod table;
