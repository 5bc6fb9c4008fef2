// backend/gateway/rest-api/src/context.rs

use tonic::transport::Channel;

use pos::grpc::proto::auth_service_client::AuthServiceClient;
use pos::grpc::proto::cashier_service_client::CashierServiceClient;
use pos::grpc::proto::category_service_client::CategoryServiceClient;
use pos::grpc::proto::merchant_service_client::MerchantServiceClient;
use pos::grpc::proto::order_item_service_client::OrderItemServiceClient;
use pos::grpc::proto::order_service_client::OrderServiceClient;
use pos::grpc::proto::product_service_client::ProductServiceClient;
use pos::grpc::proto::role_service_client::RoleServiceClient;
use pos::grpc::proto::transaction_service_client::TransactionServiceClient;
use pos::grpc::proto::user_service_client::UserServiceClient;

/// Clients Tonic partagés par tous les handlers. Les clients se clonent à
/// bon marché ; chaque handler clone le sien avant l'appel.
pub struct ApiContext {
    pub categories: CategoryServiceClient<Channel>,
    pub cashiers: CashierServiceClient<Channel>,
    pub merchants: MerchantServiceClient<Channel>,
    pub products: ProductServiceClient<Channel>,
    pub orders: OrderServiceClient<Channel>,
    pub order_items: OrderItemServiceClient<Channel>,
    pub transactions: TransactionServiceClient<Channel>,
    pub users: UserServiceClient<Channel>,
    pub roles: RoleServiceClient<Channel>,
    pub auth: AuthServiceClient<Channel>,
}

impl ApiContext {
    /// Construit le contexte sur un channel déjà établi (utilisé tel quel
    /// par les tests d'intégration).
    pub fn new(channel: Channel) -> Self {
        Self {
            categories: CategoryServiceClient::new(channel.clone()),
            cashiers: CashierServiceClient::new(channel.clone()),
            merchants: MerchantServiceClient::new(channel.clone()),
            products: ProductServiceClient::new(channel.clone()),
            orders: OrderServiceClient::new(channel.clone()),
            order_items: OrderItemServiceClient::new(channel.clone()),
            transactions: TransactionServiceClient::new(channel.clone()),
            users: UserServiceClient::new(channel.clone()),
            roles: RoleServiceClient::new(channel.clone()),
            auth: AuthServiceClient::new(channel),
        }
    }

    pub async fn connect(rpc_url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let channel = Channel::from_shared(rpc_url.to_string())?.connect().await?;
        Ok(Self::new(channel))
    }
}
