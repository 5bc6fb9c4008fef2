// crates/pos/src/domain/records.rs

use chrono::{DateTime, Utc};

/// Partie commune à tout Record : identité et cycle de vie soft-delete.
/// L'état (`Active` / `Trashed`) est dérivé de `deleted_at`, jamais stocké.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordMeta {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl RecordMeta {
    pub fn new(id: i32, now: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Accès uniforme au `RecordMeta` d'un record, quel que soit son genre.
pub trait EntityRecord: Clone + Send + Sync + 'static {
    fn meta(&self) -> &RecordMeta;
    fn meta_mut(&mut self) -> &mut RecordMeta;

    fn id(&self) -> i32 {
        self.meta().id
    }

    fn is_trashed(&self) -> bool {
        self.meta().is_trashed()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    pub meta: RecordMeta,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CashierRecord {
    pub meta: RecordMeta,
    pub merchant_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MerchantRecord {
    pub meta: RecordMeta,
    pub user_id: i32,
    pub name: String,
    pub api_key: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub meta: RecordMeta,
    pub merchant_id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub count_in_stock: i32,
    pub weight: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub meta: RecordMeta,
    pub merchant_id: i32,
    pub cashier_id: i32,
    pub total_price: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemRecord {
    pub meta: RecordMeta,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub meta: RecordMeta,
    pub order_id: i32,
    pub merchant_id: i32,
    pub payment_method: String,
    pub amount: i64,
    pub change_amount: i64,
    pub payment_status: String,
}

/// Le hash du mot de passe reste côté Domain Service et ne sort jamais
/// par les mappers wire.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub meta: RecordMeta,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleRecord {
    pub meta: RecordMeta,
    pub name: String,
}

macro_rules! impl_entity_record {
    ($($record:ty),+ $(,)?) => {
        $(impl EntityRecord for $record {
            fn meta(&self) -> &RecordMeta {
                &self.meta
            }
            fn meta_mut(&mut self) -> &mut RecordMeta {
                &mut self.meta
            }
        })+
    };
}

impl_entity_record!(
    CategoryRecord,
    CashierRecord,
    MerchantRecord,
    ProductRecord,
    OrderRecord,
    OrderItemRecord,
    TransactionRecord,
    UserRecord,
    RoleRecord,
);
