// crates/pos/src/lib.rs

pub mod domain;
pub mod grpc;
