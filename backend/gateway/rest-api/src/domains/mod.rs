// backend/gateway/rest-api/src/domains/mod.rs

pub mod auth;
pub mod cashier;
pub mod category;
pub mod merchant;
pub mod order;
pub mod order_item;
pub mod product;
pub mod role;
pub mod transaction;
pub mod user;
