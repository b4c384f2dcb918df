//! # Seed Data Generator
//!
//! Populates the database with a demonstration restaurant for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p bistro-db --bin seed
//!
//! # Specify database path
//! cargo run -p bistro-db --bin seed -- --db ./data/bistro.db
//!
//! # Number of dining tables (default 8)
//! cargo run -p bistro-db --bin seed -- --tables 12
//! ```
//!
//! ## Generated Data
//! - A small chicken-shop catalog (products with fixed prices)
//! - Menu groups and set menus priced at a discount to their components
//! - Dining tables, all starting empty

use std::env;

use bistro_core::{Menu, MenuGroup, MenuProduct, Money, OrderTable, Product};
use bistro_db::{Database, DbConfig};

/// Catalog products: (name, price in minor units).
const PRODUCTS: &[(&str, i64)] = &[
    ("Fried chicken", 1_000_000),
    ("Seasoned chicken", 1_100_000),
    ("Soy garlic chicken", 1_150_000),
    ("Cheese ball", 400_000),
    ("French fries", 300_000),
    ("Cola 1.25L", 250_000),
];

/// Set menus: (group, name, price, [(product index, quantity)]).
/// Every price sits at or below the component sum.
const MENUS: &[(&str, &str, i64, &[(usize, i64)])] = &[
    (
        "Sets",
        "Double fried set",
        1_700_000,
        &[(0, 2)], // 2 × 10000.00 = 20000.00
    ),
    (
        "Sets",
        "Half & half set",
        1_950_000,
        &[(0, 1), (1, 1)], // 21000.00
    ),
    (
        "Sides & drinks",
        "Snack tray",
        650_000,
        &[(3, 1), (4, 1)], // 7000.00
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./bistro_dev.db");
    let mut table_count: i64 = 8;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--tables" | "-t" => {
                if i + 1 < args.len() {
                    table_count = args[i + 1].parse().unwrap_or(8);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Bistro POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>     Database file path (default: ./bistro_dev.db)");
                println!("  -t, --tables <N>    Number of dining tables (default: 8)");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Bistro POS Seed Data Generator");
    println!("==============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected, migrations applied");

    if db.products().count().await? > 0 {
        println!("⚠ Database already seeded; delete the file to regenerate.");
        return Ok(());
    }

    // Catalog products
    let mut products: Vec<Product> = Vec::with_capacity(PRODUCTS.len());
    for (name, price_cents) in PRODUCTS {
        let product = Product::register(name, Money::from_cents(*price_cents))?;
        db.products().insert(&product).await?;
        products.push(product);
    }
    println!("✓ {} products", products.len());

    // Menu groups + set menus
    let mut seeded_menus = 0;
    let mut groups: Vec<MenuGroup> = Vec::new();
    for (group_name, menu_name, price_cents, lines) in MENUS {
        let group = match groups.iter().find(|g| g.name == *group_name) {
            Some(existing) => existing.clone(),
            None => {
                let group = MenuGroup::named(group_name)?;
                db.menu_groups().insert(&group).await?;
                groups.push(group.clone());
                group
            }
        };

        let entries: Vec<MenuProduct> = lines
            .iter()
            .map(|(idx, qty)| {
                let product = &products[*idx];
                MenuProduct::new(product.id.clone(), *qty, product.price())
            })
            .collect();

        let menu = Menu::compose(*menu_name, Money::from_cents(*price_cents), group.id, entries)?;
        db.menus().insert_menu(&menu).await?;
        seeded_menus += 1;
    }
    println!("✓ {} groups, {} menus", groups.len(), seeded_menus);

    // Dining tables, all empty until a party is seated
    for _ in 0..table_count {
        let table = OrderTable::seat(0, true)?;
        db.tables().insert(&table).await?;
    }
    println!("✓ {} tables", table_count);

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
