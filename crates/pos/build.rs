// crates/pos/build.rs

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = "src/grpc/proto";
    let proto_root = "../../proto";

    std::fs::create_dir_all(out_dir)?;

    tonic_prost_build::configure().out_dir(out_dir).compile_protos(
        &[
            format!("{}/pos/v1/common.proto", proto_root),
            format!("{}/pos/v1/category.proto", proto_root),
            format!("{}/pos/v1/cashier.proto", proto_root),
            format!("{}/pos/v1/merchant.proto", proto_root),
            format!("{}/pos/v1/product.proto", proto_root),
            format!("{}/pos/v1/order.proto", proto_root),
            format!("{}/pos/v1/order_item.proto", proto_root),
            format!("{}/pos/v1/transaction.proto", proto_root),
            format!("{}/pos/v1/user.proto", proto_root),
            format!("{}/pos/v1/role.proto", proto_root),
            format!("{}/pos/v1/auth.proto", proto_root),
        ],
        &[proto_root.to_string()],
    )?;

    println!("cargo:rerun-if-changed={}", proto_root);
    Ok(())
}
