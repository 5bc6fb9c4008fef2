// crates/pos/src/domain/memory.rs
//
// Implémentation de référence du Domain Service : un magasin en mémoire
// derrière un verrou. Sert au binaire serveur et aux tests ; la persistance
// réelle vit derrière la même interface, hors du périmètre de ce dépôt.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::pagination::Page;
use uuid::Uuid;

use crate::domain::records::{
    CashierRecord, CategoryRecord, EntityRecord, MerchantRecord, OrderItemRecord, OrderRecord,
    ProductRecord, RecordMeta, RoleRecord, TransactionRecord, UserRecord,
};
use crate::domain::requests::{
    CreateCashierRequest, CreateCategoryRequest, CreateMerchantRequest, CreateOrderItemRequest,
    CreateOrderRequest, CreateProductRequest, CreateRoleRequest, CreateTransactionRequest,
    CreateUserRequest, UpdateCashierRequest, UpdateCategoryRequest, UpdateMerchantRequest,
    UpdateOrderItemRequest, UpdateOrderRequest, UpdateProductRequest, UpdateRoleRequest,
    UpdateTransactionRequest, UpdateUserRequest,
};
use crate::domain::service::{
    LifecycleService, ListQuery, OrderFilter, ProductFilter, TransactionFilter,
};

/// Ce qu'un genre d'entité doit fournir pour être stocké par
/// [`InMemoryLifecycle`] : matérialisation, application d'une mise à jour,
/// et prédicats de recherche / filtrage.
pub trait LifecycleModel: Send + Sync + 'static {
    type Record: EntityRecord + PartialEq;
    type CreateInput: Send + Sync + 'static;
    type UpdateInput: Send + Sync + 'static;
    type Filter: Default + Send + Sync + 'static;

    const ENTITY: &'static str;

    fn materialize(id: i32, input: &Self::CreateInput, now: DateTime<Utc>) -> Self::Record;
    fn apply(record: &mut Self::Record, input: &Self::UpdateInput);
    fn target_id(input: &Self::UpdateInput) -> i32;
    fn matches(record: &Self::Record, search: &str) -> bool;

    fn retain(_record: &Self::Record, _filter: &Self::Filter) -> bool {
        true
    }

    /// Conflit d'unicité éventuel avant création (ex: email déjà pris).
    fn create_conflict(
        _existing: &mut dyn Iterator<Item = &Self::Record>,
        _input: &Self::CreateInput,
    ) -> Option<DomainError> {
        None
    }
}

struct StoreState<R> {
    records: BTreeMap<i32, R>,
    next_id: i32,
}

pub struct InMemoryLifecycle<M: LifecycleModel> {
    state: Mutex<StoreState<M::Record>>,
    calls: AtomicUsize,
    fail_with: Mutex<Option<DomainError>>,
}

impl<M: LifecycleModel> Default for InMemoryLifecycle<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: LifecycleModel> InMemoryLifecycle<M> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                records: BTreeMap::new(),
                next_id: 1,
            }),
            calls: AtomicUsize::new(0),
            fail_with: Mutex::new(None),
        }
    }

    /// Nombre d'appels reçus, toutes opérations confondues. Permet aux
    /// tests de vérifier qu'un rejet gateway n'atteint jamais ce tier.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Injecte une erreur renvoyée par tous les appels suivants.
    pub fn fail_with(&self, error: Option<DomainError>) {
        *self.fail_with.lock().unwrap() = error;
    }

    fn enter(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fail_with.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }

    fn page_of(
        &self,
        query: &ListQuery<M::Filter>,
        in_scope: impl Fn(&M::Record) -> bool,
    ) -> Page<M::Record> {
        let guard = self.state.lock().unwrap();
        let search = query.search.to_lowercase();

        let hits: Vec<M::Record> = guard
            .records
            .values()
            .filter(|r| in_scope(r))
            .filter(|r| search.is_empty() || M::matches(r, &search))
            .filter(|r| M::retain(r, &query.filter))
            .cloned()
            .collect();

        let total = hits.len() as i32;
        let items = hits
            .into_iter()
            .skip(query.offset())
            .take(query.page_size as usize)
            .collect();

        Page { items, total }
    }
}

#[async_trait]
impl<M: LifecycleModel> LifecycleService for InMemoryLifecycle<M> {
    type Record = M::Record;
    type CreateInput = M::CreateInput;
    type UpdateInput = M::UpdateInput;
    type Filter = M::Filter;

    async fn find_all(&self, query: &ListQuery<Self::Filter>) -> Result<Page<Self::Record>> {
        self.enter()?;
        Ok(self.page_of(query, |_| true))
    }

    async fn find_by_id(&self, id: i32) -> Result<Self::Record> {
        self.enter()?;
        self.state
            .lock()
            .unwrap()
            .records
            .get(&id)
            .cloned()
            .ok_or(DomainError::NotFound {
                entity: M::ENTITY,
                id,
            })
    }

    async fn find_by_active(&self, query: &ListQuery<Self::Filter>) -> Result<Page<Self::Record>> {
        self.enter()?;
        Ok(self.page_of(query, |r| !r.is_trashed()))
    }

    async fn find_by_trashed(
        &self,
        query: &ListQuery<Self::Filter>,
    ) -> Result<Page<Self::Record>> {
        self.enter()?;
        Ok(self.page_of(query, |r| r.is_trashed()))
    }

    async fn create(&self, input: &Self::CreateInput) -> Result<Self::Record> {
        self.enter()?;
        let mut guard = self.state.lock().unwrap();

        if let Some(conflict) = M::create_conflict(&mut guard.records.values(), input) {
            return Err(conflict);
        }

        let id = guard.next_id;
        guard.next_id += 1;

        let record = M::materialize(id, input, Utc::now());
        guard.records.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, input: &Self::UpdateInput) -> Result<Self::Record> {
        self.enter()?;
        let id = M::target_id(input);
        let mut guard = self.state.lock().unwrap();

        let record = guard.records.get_mut(&id).ok_or(DomainError::NotFound {
            entity: M::ENTITY,
            id,
        })?;

        // Update ne touche que les attributs, jamais l'état de cycle de vie.
        M::apply(record, input);
        record.meta_mut().updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn trash(&self, id: i32) -> Result<Self::Record> {
        self.enter()?;
        let mut guard = self.state.lock().unwrap();
        let record = guard.records.get_mut(&id).ok_or(DomainError::NotFound {
            entity: M::ENTITY,
            id,
        })?;

        // No-op idempotent si déjà Trashed : timestamps inchangés.
        if !record.is_trashed() {
            let now = Utc::now();
            record.meta_mut().deleted_at = Some(now);
            record.meta_mut().updated_at = now;
        }
        Ok(record.clone())
    }

    async fn restore(&self, id: i32) -> Result<Self::Record> {
        self.enter()?;
        let mut guard = self.state.lock().unwrap();
        let record = guard.records.get_mut(&id).ok_or(DomainError::NotFound {
            entity: M::ENTITY,
            id,
        })?;

        if record.is_trashed() {
            record.meta_mut().deleted_at = None;
            record.meta_mut().updated_at = Utc::now();
        }
        Ok(record.clone())
    }

    async fn delete_permanent(&self, id: i32) -> Result<bool> {
        self.enter()?;
        let mut guard = self.state.lock().unwrap();
        if guard.records.remove(&id).is_none() {
            return Err(DomainError::NotFound {
                entity: M::ENTITY,
                id,
            });
        }
        Ok(true)
    }

    async fn restore_all(&self) -> Result<bool> {
        self.enter()?;
        let mut guard = self.state.lock().unwrap();
        let now = Utc::now();
        for record in guard.records.values_mut() {
            if record.is_trashed() {
                record.meta_mut().deleted_at = None;
                record.meta_mut().updated_at = now;
            }
        }
        Ok(true)
    }

    async fn delete_all_permanent(&self) -> Result<bool> {
        self.enter()?;
        let mut guard = self.state.lock().unwrap();
        guard.records.retain(|_, r| !r.is_trashed());
        Ok(true)
    }
}

fn contains(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

pub struct CategoryModel;

impl LifecycleModel for CategoryModel {
    type Record = CategoryRecord;
    type CreateInput = CreateCategoryRequest;
    type UpdateInput = UpdateCategoryRequest;
    type Filter = ();

    const ENTITY: &'static str = "Category";

    fn materialize(id: i32, input: &Self::CreateInput, now: DateTime<Utc>) -> Self::Record {
        CategoryRecord {
            meta: RecordMeta::new(id, now),
            name: input.name.clone(),
            description: input.description.clone(),
        }
    }

    fn apply(record: &mut Self::Record, input: &Self::UpdateInput) {
        record.name = input.name.clone();
        record.description = input.description.clone();
    }

    fn target_id(input: &Self::UpdateInput) -> i32 {
        input.id
    }

    fn matches(record: &Self::Record, search: &str) -> bool {
        contains(&record.name, search) || contains(&record.description, search)
    }
}

pub struct CashierModel;

impl LifecycleModel for CashierModel {
    type Record = CashierRecord;
    type CreateInput = CreateCashierRequest;
    type UpdateInput = UpdateCashierRequest;
    type Filter = ();

    const ENTITY: &'static str = "Cashier";

    fn materialize(id: i32, input: &Self::CreateInput, now: DateTime<Utc>) -> Self::Record {
        CashierRecord {
            meta: RecordMeta::new(id, now),
            merchant_id: input.merchant_id,
            name: input.name.clone(),
        }
    }

    fn apply(record: &mut Self::Record, input: &Self::UpdateInput) {
        record.merchant_id = input.merchant_id;
        record.name = input.name.clone();
    }

    fn target_id(input: &Self::UpdateInput) -> i32 {
        input.id
    }

    fn matches(record: &Self::Record, search: &str) -> bool {
        contains(&record.name, search)
    }
}

pub struct MerchantModel;

impl LifecycleModel for MerchantModel {
    type Record = MerchantRecord;
    type CreateInput = CreateMerchantRequest;
    type UpdateInput = UpdateMerchantRequest;
    type Filter = ();

    const ENTITY: &'static str = "Merchant";

    fn materialize(id: i32, input: &Self::CreateInput, now: DateTime<Utc>) -> Self::Record {
        MerchantRecord {
            meta: RecordMeta::new(id, now),
            user_id: input.user_id,
            name: input.name.clone(),
            // Clé générée une seule fois, jamais réécrite par apply().
            api_key: Uuid::new_v4().to_string(),
            status: "active".into(),
        }
    }

    fn apply(record: &mut Self::Record, input: &Self::UpdateInput) {
        record.user_id = input.user_id;
        record.name = input.name.clone();
        record.status = input.status.clone();
    }

    fn target_id(input: &Self::UpdateInput) -> i32 {
        input.id
    }

    fn matches(record: &Self::Record, search: &str) -> bool {
        contains(&record.name, search)
    }
}

pub struct ProductModel;

impl LifecycleModel for ProductModel {
    type Record = ProductRecord;
    type CreateInput = CreateProductRequest;
    type UpdateInput = UpdateProductRequest;
    type Filter = ProductFilter;

    const ENTITY: &'static str = "Product";

    fn materialize(id: i32, input: &Self::CreateInput, now: DateTime<Utc>) -> Self::Record {
        ProductRecord {
            meta: RecordMeta::new(id, now),
            merchant_id: input.merchant_id,
            category_id: input.category_id,
            name: input.name.clone(),
            description: input.description.clone(),
            price: input.price,
            count_in_stock: input.count_in_stock,
            weight: input.weight,
        }
    }

    fn apply(record: &mut Self::Record, input: &Self::UpdateInput) {
        record.merchant_id = input.merchant_id;
        record.category_id = input.category_id;
        record.name = input.name.clone();
        record.description = input.description.clone();
        record.price = input.price;
        record.count_in_stock = input.count_in_stock;
        record.weight = input.weight;
    }

    fn target_id(input: &Self::UpdateInput) -> i32 {
        input.id
    }

    fn matches(record: &Self::Record, search: &str) -> bool {
        contains(&record.name, search) || contains(&record.description, search)
    }

    fn retain(record: &Self::Record, filter: &Self::Filter) -> bool {
        filter.merchant_id.map_or(true, |m| record.merchant_id == m)
            && filter.category_id.map_or(true, |c| record.category_id == c)
            && filter.min_price.map_or(true, |p| record.price >= p)
            && filter.max_price.map_or(true, |p| record.price <= p)
    }
}

pub struct OrderModel;

impl LifecycleModel for OrderModel {
    type Record = OrderRecord;
    type CreateInput = CreateOrderRequest;
    type UpdateInput = UpdateOrderRequest;
    type Filter = OrderFilter;

    const ENTITY: &'static str = "Order";

    fn materialize(id: i32, input: &Self::CreateInput, now: DateTime<Utc>) -> Self::Record {
        OrderRecord {
            meta: RecordMeta::new(id, now),
            merchant_id: input.merchant_id,
            cashier_id: input.cashier_id,
            total_price: input.total_price,
        }
    }

    fn apply(record: &mut Self::Record, input: &Self::UpdateInput) {
        record.merchant_id = input.merchant_id;
        record.cashier_id = input.cashier_id;
        record.total_price = input.total_price;
    }

    fn target_id(input: &Self::UpdateInput) -> i32 {
        input.id
    }

    fn matches(_record: &Self::Record, _search: &str) -> bool {
        // Un ordre n'a pas de champ textuel ; la recherche ne retient rien.
        false
    }

    fn retain(record: &Self::Record, filter: &Self::Filter) -> bool {
        filter.merchant_id.map_or(true, |m| record.merchant_id == m)
    }
}

pub struct OrderItemModel;

impl LifecycleModel for OrderItemModel {
    type Record = OrderItemRecord;
    type CreateInput = CreateOrderItemRequest;
    type UpdateInput = UpdateOrderItemRequest;
    type Filter = ();

    const ENTITY: &'static str = "OrderItem";

    fn materialize(id: i32, input: &Self::CreateInput, now: DateTime<Utc>) -> Self::Record {
        OrderItemRecord {
            meta: RecordMeta::new(id, now),
            order_id: input.order_id,
            product_id: input.product_id,
            quantity: input.quantity,
            price: input.price,
        }
    }

    fn apply(record: &mut Self::Record, input: &Self::UpdateInput) {
        record.order_id = input.order_id;
        record.product_id = input.product_id;
        record.quantity = input.quantity;
        record.price = input.price;
    }

    fn target_id(input: &Self::UpdateInput) -> i32 {
        input.id
    }

    fn matches(_record: &Self::Record, _search: &str) -> bool {
        false
    }
}

pub struct TransactionModel;

impl LifecycleModel for TransactionModel {
    type Record = TransactionRecord;
    type CreateInput = CreateTransactionRequest;
    type UpdateInput = UpdateTransactionRequest;
    type Filter = TransactionFilter;

    const ENTITY: &'static str = "Transaction";

    fn materialize(id: i32, input: &Self::CreateInput, now: DateTime<Utc>) -> Self::Record {
        TransactionRecord {
            meta: RecordMeta::new(id, now),
            order_id: input.order_id,
            merchant_id: input.merchant_id,
            payment_method: input.payment_method.clone(),
            amount: input.amount,
            change_amount: input.change_amount,
            payment_status: input.payment_status.clone(),
        }
    }

    fn apply(record: &mut Self::Record, input: &Self::UpdateInput) {
        record.order_id = input.order_id;
        record.merchant_id = input.merchant_id;
        record.payment_method = input.payment_method.clone();
        record.amount = input.amount;
        record.change_amount = input.change_amount;
        record.payment_status = input.payment_status.clone();
    }

    fn target_id(input: &Self::UpdateInput) -> i32 {
        input.id
    }

    fn matches(record: &Self::Record, search: &str) -> bool {
        contains(&record.payment_method, search) || contains(&record.payment_status, search)
    }

    fn retain(record: &Self::Record, filter: &Self::Filter) -> bool {
        let created = record.meta.created_at;
        filter.merchant_id.map_or(true, |m| record.merchant_id == m)
            && filter.year.map_or(true, |y| created.year() == y)
            && filter.month.map_or(true, |m| created.month() as i32 == m)
    }
}

pub struct UserModel;

impl LifecycleModel for UserModel {
    type Record = UserRecord;
    type CreateInput = CreateUserRequest;
    type UpdateInput = UpdateUserRequest;
    type Filter = ();

    const ENTITY: &'static str = "User";

    fn materialize(id: i32, input: &Self::CreateInput, now: DateTime<Utc>) -> Self::Record {
        UserRecord {
            meta: RecordMeta::new(id, now),
            firstname: input.firstname.clone(),
            lastname: input.lastname.clone(),
            email: input.email.clone(),
            password: input.password.clone(),
        }
    }

    fn apply(record: &mut Self::Record, input: &Self::UpdateInput) {
        record.firstname = input.firstname.clone();
        record.lastname = input.lastname.clone();
        record.email = input.email.clone();
    }

    fn target_id(input: &Self::UpdateInput) -> i32 {
        input.id
    }

    fn matches(record: &Self::Record, search: &str) -> bool {
        contains(&record.firstname, search)
            || contains(&record.lastname, search)
            || contains(&record.email, search)
    }

    fn create_conflict(
        mut existing: &mut dyn Iterator<Item = &Self::Record>,
        input: &Self::CreateInput,
    ) -> Option<DomainError> {
        Iterator::any(&mut existing, |u| u.email == input.email)
            .then(|| DomainError::AlreadyExists {
                entity: Self::ENTITY,
                field: "email",
                value: input.email.clone(),
            })
    }
}

pub struct RoleModel;

impl LifecycleModel for RoleModel {
    type Record = RoleRecord;
    type CreateInput = CreateRoleRequest;
    type UpdateInput = UpdateRoleRequest;
    type Filter = ();

    const ENTITY: &'static str = "Role";

    fn materialize(id: i32, input: &Self::CreateInput, now: DateTime<Utc>) -> Self::Record {
        RoleRecord {
            meta: RecordMeta::new(id, now),
            name: input.name.clone(),
        }
    }

    fn apply(record: &mut Self::Record, input: &Self::UpdateInput) {
        record.name = input.name.clone();
    }

    fn target_id(input: &Self::UpdateInput) -> i32 {
        input.id
    }

    fn matches(record: &Self::Record, search: &str) -> bool {
        contains(&record.name, search)
    }
}
