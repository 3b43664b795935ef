// src/models/mod.rs

//! Data structures representing rows in the store.

pub mod cart_item;
pub mod order;
pub mod order_item;
pub mod product;
pub mod user;

pub use cart_item::CartItem;
pub use order::Order;
pub use order_item::OrderItem;
pub use product::Product;
pub use user::User;
