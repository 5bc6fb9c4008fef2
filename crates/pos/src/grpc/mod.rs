// crates/pos/src/grpc/mod.rs

pub mod handlers;
pub mod mappers;

// Code généré par tonic-prost-build (voir build.rs).
pub mod proto {
    include!("proto/pos.v1.rs");
}
