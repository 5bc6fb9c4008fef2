// crates/pos/src/grpc/handlers/mod.rs
//
// Un handler par service wire. Chaque handler est une coquille mince :
// correction / refus des paramètres, délégation au Domain Service injecté,
// enveloppe de réponse. Aucune règle métier ici.

mod auth_handler;
mod cashier_handler;
mod category_handler;
mod merchant_handler;
mod ops;
mod order_handler;
mod order_item_handler;
mod product_handler;
mod role_handler;
mod transaction_handler;
mod user_handler;

pub use auth_handler::AuthHandler;
pub use cashier_handler::CashierHandler;
pub use category_handler::CategoryHandler;
pub use merchant_handler::MerchantHandler;
pub use order_handler::OrderHandler;
pub use order_item_handler::OrderItemHandler;
pub use product_handler::ProductHandler;
pub use role_handler::RoleHandler;
pub use transaction_handler::TransactionHandler;
pub use user_handler::UserHandler;
