// backend/services/pos-server/src/main.rs

use std::sync::Arc;

use tonic::transport::Server;
use tonic_health::server::health_reporter;

use pos::domain::auth::{DynAuthService, MemoryAuth};
use pos::domain::memory::{
    CashierModel, CategoryModel, InMemoryLifecycle, MerchantModel, OrderItemModel, OrderModel,
    ProductModel, RoleModel, TransactionModel, UserModel,
};
use pos::domain::service::{
    DynCashierService, DynCategoryService, DynMerchantService, DynOrderItemService,
    DynOrderService, DynProductService, DynRoleService, DynTransactionService, DynUserService,
};
use pos::grpc::handlers::{
    AuthHandler, CashierHandler, CategoryHandler, MerchantHandler, OrderHandler, OrderItemHandler,
    ProductHandler, RoleHandler, TransactionHandler, UserHandler,
};
use pos::grpc::proto::auth_service_server::AuthServiceServer;
use pos::grpc::proto::cashier_service_server::CashierServiceServer;
use pos::grpc::proto::category_service_server::CategoryServiceServer;
use pos::grpc::proto::merchant_service_server::MerchantServiceServer;
use pos::grpc::proto::order_item_service_server::OrderItemServiceServer;
use pos::grpc::proto::order_service_server::OrderServiceServer;
use pos::grpc::proto::product_service_server::ProductServiceServer;
use pos::grpc::proto::role_service_server::RoleServiceServer;
use pos::grpc::proto::transaction_service_server::TransactionServiceServer;
use pos::grpc::proto::user_service_server::UserServiceServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "50051".to_string());
    run_server(format!("0.0.0.0:{port}").parse()?).await
}

pub async fn run_server(addr: std::net::SocketAddr) -> Result<(), Box<dyn std::error::Error>> {
    // --- 1. SERVICE DE SANTÉ ---

    let (health_reporter, health_service) = health_reporter();
    health_reporter
        .set_serving::<CategoryServiceServer<CategoryHandler>>()
        .await;
    health_reporter
        .set_serving::<CashierServiceServer<CashierHandler>>()
        .await;
    health_reporter
        .set_serving::<MerchantServiceServer<MerchantHandler>>()
        .await;
    health_reporter
        .set_serving::<ProductServiceServer<ProductHandler>>()
        .await;
    health_reporter
        .set_serving::<OrderServiceServer<OrderHandler>>()
        .await;
    health_reporter
        .set_serving::<OrderItemServiceServer<OrderItemHandler>>()
        .await;
    health_reporter
        .set_serving::<TransactionServiceServer<TransactionHandler>>()
        .await;
    health_reporter
        .set_serving::<UserServiceServer<UserHandler>>()
        .await;
    health_reporter
        .set_serving::<RoleServiceServer<RoleHandler>>()
        .await;
    health_reporter
        .set_serving::<AuthServiceServer<AuthHandler>>()
        .await;

    // --- 2. DOMAIN SERVICES (implémentations mémoire) ---

    let categories: DynCategoryService = Arc::new(InMemoryLifecycle::<CategoryModel>::new());
    let cashiers: DynCashierService = Arc::new(InMemoryLifecycle::<CashierModel>::new());
    let merchants: DynMerchantService = Arc::new(InMemoryLifecycle::<MerchantModel>::new());
    let products: DynProductService = Arc::new(InMemoryLifecycle::<ProductModel>::new());
    let orders: DynOrderService = Arc::new(InMemoryLifecycle::<OrderModel>::new());
    let order_items: DynOrderItemService = Arc::new(InMemoryLifecycle::<OrderItemModel>::new());
    let transactions: DynTransactionService =
        Arc::new(InMemoryLifecycle::<TransactionModel>::new());
    let users: DynUserService = Arc::new(InMemoryLifecycle::<UserModel>::new());
    let roles: DynRoleService = Arc::new(InMemoryLifecycle::<RoleModel>::new());

    let admin_email =
        std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@pos.local".to_string());
    let admin_password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());
    let auth: DynAuthService = Arc::new(MemoryAuth::new([(admin_email, admin_password)]));

    // --- 3. HANDLERS (API) ---

    let category_handler = CategoryHandler::new(categories);
    let cashier_handler = CashierHandler::new(cashiers);
    let merchant_handler = MerchantHandler::new(merchants);
    let product_handler = ProductHandler::new(products);
    let order_handler = OrderHandler::new(orders);
    let order_item_handler = OrderItemHandler::new(order_items);
    let transaction_handler = TransactionHandler::new(transactions);
    let user_handler = UserHandler::new(users);
    let role_handler = RoleHandler::new(roles);
    let auth_handler = AuthHandler::new(auth);

    // --- 4. DÉMARRAGE DU SERVEUR TONIC ---

    tracing::info!(%addr, "pos server listening");

    Server::builder()
        .add_service(health_service)
        .add_service(CategoryServiceServer::new(category_handler))
        .add_service(CashierServiceServer::new(cashier_handler))
        .add_service(MerchantServiceServer::new(merchant_handler))
        .add_service(ProductServiceServer::new(product_handler))
        .add_service(OrderServiceServer::new(order_handler))
        .add_service(OrderItemServiceServer::new(order_item_handler))
        .add_service(TransactionServiceServer::new(transaction_handler))
        .add_service(UserServiceServer::new(user_handler))
        .add_service(RoleServiceServer::new(role_handler))
        .add_service(AuthServiceServer::new(auth_handler))
        .serve(addr)
        .await?;

    Ok(())
}
