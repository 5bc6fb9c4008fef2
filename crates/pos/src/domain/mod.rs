// crates/pos/src/domain/mod.rs

pub mod auth;
pub mod memory;
pub mod records;
pub mod requests;
pub mod service;
