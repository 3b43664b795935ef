// src/lib.rs

//! Backend for the boutique fashion storefront: user registration, order intake,
//! catalog reads and fixture seeding over a single-file SQLite store.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod repo;
pub mod services;
pub mod state;
pub mod web;
