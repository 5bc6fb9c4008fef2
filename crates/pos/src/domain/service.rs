// crates/pos/src/domain/service.rs
//
// Contrat du Domain Service : le collaborateur externe qui possède les
// règles métier et la persistance d'un genre d'entité. Le tier RPC ne
// connaît que ce trait.

use std::sync::Arc;

use async_trait::async_trait;
use shared_kernel::errors::Result;
use shared_kernel::pagination::{or_default_page, or_default_page_size, Page};

use crate::domain::records::{
    CashierRecord, CategoryRecord, MerchantRecord, OrderItemRecord, OrderRecord, ProductRecord,
    RoleRecord, TransactionRecord, UserRecord,
};
use crate::domain::requests::{
    CreateCashierRequest, CreateCategoryRequest, CreateMerchantRequest, CreateOrderItemRequest,
    CreateOrderRequest, CreateProductRequest, CreateRoleRequest, CreateTransactionRequest,
    CreateUserRequest, UpdateCashierRequest, UpdateCategoryRequest, UpdateMerchantRequest,
    UpdateOrderItemRequest, UpdateOrderRequest, UpdateProductRequest, UpdateRoleRequest,
    UpdateTransactionRequest, UpdateUserRequest,
};

/// Critères de listing. `new` applique la correction du tier RPC
/// (`page <= 0 → 1`, `page_size <= 0 → 10`), indépendante de celle de la
/// gateway : ce tier ne fait pas confiance à l'appelant.
#[derive(Debug, Clone, Default)]
pub struct ListQuery<F> {
    pub page: i32,
    pub page_size: i32,
    pub search: String,
    pub filter: F,
}

impl<F> ListQuery<F> {
    pub fn new(page: i32, page_size: i32, search: String, filter: F) -> Self {
        Self {
            page: or_default_page(page),
            page_size: or_default_page_size(page_size),
            search,
            filter,
        }
    }

    /// Index du premier élément de la page demandée.
    pub fn offset(&self) -> usize {
        ((self.page - 1) as usize) * (self.page_size as usize)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub merchant_id: Option<i32>,
    pub category_id: Option<i32>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub merchant_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub merchant_id: Option<i32>,
    pub year: Option<i32>,
    pub month: Option<i32>,
}

/// Cycle de vie uniforme d'un genre d'entité, tel que vu par le tier RPC.
///
/// Machine à états portée par ce contrat :
/// Active --trash--> Trashed --restore--> Active,
/// Trashed --delete_permanent--> disparu (irréversible),
/// restore_all / delete_all_permanent s'appliquent à tout l'ensemble Trashed.
#[async_trait]
pub trait LifecycleService: Send + Sync {
    type Record: Clone + Send + Sync + 'static;
    type CreateInput: Send + Sync + 'static;
    type UpdateInput: Send + Sync + 'static;
    type Filter: Default + Send + Sync + 'static;

    async fn find_all(&self, query: &ListQuery<Self::Filter>) -> Result<Page<Self::Record>>;
    async fn find_by_id(&self, id: i32) -> Result<Self::Record>;
    async fn find_by_active(&self, query: &ListQuery<Self::Filter>) -> Result<Page<Self::Record>>;
    async fn find_by_trashed(&self, query: &ListQuery<Self::Filter>)
        -> Result<Page<Self::Record>>;

    async fn create(&self, input: &Self::CreateInput) -> Result<Self::Record>;
    async fn update(&self, input: &Self::UpdateInput) -> Result<Self::Record>;

    async fn trash(&self, id: i32) -> Result<Self::Record>;
    async fn restore(&self, id: i32) -> Result<Self::Record>;
    async fn delete_permanent(&self, id: i32) -> Result<bool>;
    async fn restore_all(&self) -> Result<bool>;
    async fn delete_all_permanent(&self) -> Result<bool>;
}

pub type DynLifecycleService<R, C, U, F = ()> =
    Arc<dyn LifecycleService<Record = R, CreateInput = C, UpdateInput = U, Filter = F>>;

pub type DynCategoryService =
    DynLifecycleService<CategoryRecord, CreateCategoryRequest, UpdateCategoryRequest>;
pub type DynCashierService =
    DynLifecycleService<CashierRecord, CreateCashierRequest, UpdateCashierRequest>;
pub type DynMerchantService =
    DynLifecycleService<MerchantRecord, CreateMerchantRequest, UpdateMerchantRequest>;
pub type DynProductService =
    DynLifecycleService<ProductRecord, CreateProductRequest, UpdateProductRequest, ProductFilter>;
pub type DynOrderService =
    DynLifecycleService<OrderRecord, CreateOrderRequest, UpdateOrderRequest, OrderFilter>;
pub type DynOrderItemService =
    DynLifecycleService<OrderItemRecord, CreateOrderItemRequest, UpdateOrderItemRequest>;
pub type DynTransactionService = DynLifecycleService<
    TransactionRecord,
    CreateTransactionRequest,
    UpdateTransactionRequest,
    TransactionFilter,
>;
pub type DynUserService = DynLifecycleService<UserRecord, CreateUserRequest, UpdateUserRequest>;
pub type DynRoleService = DynLifecycleService<RoleRecord, CreateRoleRequest, UpdateRoleRequest>;
