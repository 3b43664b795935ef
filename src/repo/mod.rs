// src/repo/mod.rs

//! Parameterized data access against the SQLite store. Every query binds its
//! arguments; nothing here interpolates caller input into SQL text.

pub mod carts;
pub mod orders;
pub mod products;
pub mod users;
