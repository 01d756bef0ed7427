//! Checkout domain: customers, products and orders with a synchronous event
//! dispatcher and SQLite-backed repositories.

pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod event_dispatch;
