// src/bin/seed.rs

//! One-off development seeding: applies the schema, wipes existing rows and
//! loads fixture products, users and a sample order. Safe to re-run.

use anyhow::Context;
use boutique_api::config::AppConfig;
use boutique_api::services::auth_service;
use boutique_api::{db, repo};
use sqlx::SqlitePool;
use tracing::info;

struct ProductFixture {
  name: &'static str,
  category: &'static str,
  subcategory: &'static str,
  price: f64,
  original_price: Option<f64>,
  images: &'static str,
  rating: f64,
  sizes: &'static str,
  color: &'static str,
  description: &'static str,
  stock: i64,
}

const PRODUCTS: &[ProductFixture] = &[
  ProductFixture {
    name: "Linen Wrap Dress",
    category: "Women",
    subcategory: "Dresses",
    price: 89.99,
    original_price: Some(119.99),
    images: "/images/linen-wrap-front.jpg,/images/linen-wrap-back.jpg,/images/linen-wrap-detail.jpg",
    rating: 4.6,
    sizes: "XS,S,M,L,XL",
    color: "Sage",
    description: "Breathable linen wrap dress with an adjustable waist tie.",
    stock: 24,
  },
  ProductFixture {
    name: "Tailored Wool Blazer",
    category: "Women",
    subcategory: "Jackets",
    price: 149.00,
    original_price: None,
    images: "/images/wool-blazer-front.jpg,/images/wool-blazer-lining.jpg",
    rating: 4.8,
    sizes: "S,M,L",
    color: "Charcoal",
    description: "Single-breasted blazer in brushed Italian wool.",
    stock: 12,
  },
  ProductFixture {
    name: "High-Rise Straight Jeans",
    category: "Women",
    subcategory: "Denim",
    price: 74.50,
    original_price: Some(98.00),
    images: "/images/straight-jeans-front.jpg,/images/straight-jeans-side.jpg",
    rating: 4.3,
    sizes: "24,25,26,27,28,29,30",
    color: "Indigo",
    description: "Rigid denim with a vintage-inspired straight leg.",
    stock: 40,
  },
  ProductFixture {
    name: "Oxford Button-Down Shirt",
    category: "Men",
    subcategory: "Shirts",
    price: 54.00,
    original_price: None,
    images: "/images/oxford-white.jpg,/images/oxford-white-collar.jpg",
    rating: 4.5,
    sizes: "S,M,L,XL,XXL",
    color: "White",
    description: "Classic oxford weave with a button-down collar.",
    stock: 55,
  },
  ProductFixture {
    name: "Merino Crewneck Sweater",
    category: "Men",
    subcategory: "Knitwear",
    price: 95.00,
    original_price: Some(120.00),
    images: "/images/merino-crew-navy.jpg",
    rating: 4.7,
    sizes: "S,M,L,XL",
    color: "Navy",
    description: "Extra-fine merino knit, fully fashioned seams.",
    stock: 18,
  },
  ProductFixture {
    name: "Pleated Midi Skirt",
    category: "Women",
    subcategory: "Skirts",
    price: 68.00,
    original_price: None,
    images: "/images/pleated-midi-rust.jpg,/images/pleated-midi-motion.jpg",
    rating: 4.2,
    sizes: "XS,S,M,L",
    color: "Rust",
    description: "Knife-pleated midi skirt with an elastic back waistband.",
    stock: 0,
  },
  ProductFixture {
    name: "Leather Chelsea Boots",
    category: "Men",
    subcategory: "Shoes",
    price: 189.00,
    original_price: Some(230.00),
    images: "/images/chelsea-brown-side.jpg,/images/chelsea-brown-top.jpg,/images/chelsea-brown-sole.jpg",
    rating: 4.9,
    sizes: "40,41,42,43,44,45",
    color: "Chestnut",
    description: "Full-grain leather boots with elastic side gores.",
    stock: 9,
  },
  ProductFixture {
    name: "Silk Twill Scarf",
    category: "Accessories",
    subcategory: "Scarves",
    price: 45.00,
    original_price: None,
    images: "/images/silk-scarf-floral.jpg",
    rating: 4.4,
    sizes: "One Size",
    color: "Floral",
    description: "Hand-rolled silk twill scarf in an archive floral print.",
    stock: 31,
  },
];

async fn wipe(pool: &SqlitePool) -> anyhow::Result<()> {
  // Delete in child-to-parent order so references never dangle mid-seed.
  for table in ["order_items", "orders", "cart_items", "products", "users"] {
    sqlx::query(&format!("DELETE FROM {table}")).execute(pool).await?;
  }
  // Reset rowid counters so fixture ids are stable across runs.
  sqlx::query("DELETE FROM sqlite_sequence").execute(pool).await.ok();
  info!("Existing rows deleted.");
  Ok(())
}

async fn seed_products(pool: &SqlitePool) -> anyhow::Result<()> {
  for p in PRODUCTS {
    sqlx::query(
      "INSERT INTO products \
       (name, category, subcategory, price, original_price, images, rating, sizes, color, description, stock) \
       VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(p.name)
    .bind(p.category)
    .bind(p.subcategory)
    .bind(p.price)
    .bind(p.original_price)
    .bind(p.images)
    .bind(p.rating)
    .bind(p.sizes)
    .bind(p.color)
    .bind(p.description)
    .bind(p.stock)
    .execute(pool)
    .await?;
  }
  info!("Inserted {} products.", PRODUCTS.len());
  Ok(())
}

async fn seed_users(pool: &SqlitePool) -> anyhow::Result<(i64, i64)> {
  let admin_hash = auth_service::hash_password("admin-password").context("hashing admin password")?;
  let admin_id = sqlx::query_scalar::<_, i64>(
    "INSERT INTO users (name, email, password, phone, is_admin) VALUES (?, ?, ?, ?, 1) RETURNING id",
  )
  .bind("Store Admin")
  .bind("admin@boutique.example")
  .bind(&admin_hash)
  .bind("+1-555-0100")
  .fetch_one(pool)
  .await?;

  let shopper_hash = auth_service::hash_password("shopper-password").context("hashing shopper password")?;
  let shopper_id = sqlx::query_scalar::<_, i64>(
    "INSERT INTO users (name, email, password, phone, is_admin) VALUES (?, ?, ?, ?, 0) RETURNING id",
  )
  .bind("Ava Shopper")
  .bind("ava@example.com")
  .bind(&shopper_hash)
  .bind(Option::<String>::None)
  .fetch_one(pool)
  .await?;

  info!(admin_id, shopper_id, "Inserted fixture users.");
  Ok((admin_id, shopper_id))
}

async fn seed_sample_order(pool: &SqlitePool, shopper_id: i64) -> anyhow::Result<()> {
  let placed = repo::orders::place(
    pool,
    &repo::orders::NewOrder {
      user_id: shopper_id,
      payment_method: "card".to_string(),
      total_amount: 2.0 * 54.00 + 95.00,
    },
    &[
      repo::orders::NewOrderItem { product_id: 4, quantity: 2 },
      repo::orders::NewOrderItem { product_id: 5, quantity: 1 },
    ],
  )
  .await
  .context("placing sample order")?;
  info!(order_id = placed.id, "Inserted sample order.");
  Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .init();

  let config = AppConfig::from_env().context("loading configuration")?;
  let pool = db::connect_create(&config.database_url)
    .await
    .context("opening the store")?;

  db::apply_schema(&pool).await.context("applying schema")?;
  info!("Schema applied.");

  wipe(&pool).await?;
  seed_products(&pool).await?;
  let (_admin_id, shopper_id) = seed_users(&pool).await?;
  seed_sample_order(&pool, shopper_id).await?;

  info!("Seeding complete.");
  Ok(())
}
