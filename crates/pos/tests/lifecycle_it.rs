// crates/pos/tests/lifecycle_it.rs
//
// La machine à états du cycle de vie, exercée directement sur le Domain
// Service mémoire : Active ⇄ Trashed, disparition irréversible, opérations
// de masse et filtres de listing.

use pos::domain::memory::{
    CategoryModel, InMemoryLifecycle, ProductModel, TransactionModel, UserModel,
};
use pos::domain::requests::{
    CreateCategoryRequest, CreateProductRequest, CreateTransactionRequest, CreateUserRequest,
};
use pos::domain::service::{LifecycleService, ListQuery, ProductFilter, TransactionFilter};
use shared_kernel::errors::DomainError;

fn category(name: &str) -> CreateCategoryRequest {
    CreateCategoryRequest {
        name: name.into(),
        description: String::new(),
    }
}

fn query(page: i32, page_size: i32) -> ListQuery<()> {
    ListQuery::new(page, page_size, String::new(), ())
}

#[tokio::test]
async fn trash_then_restore_preserves_attributes() {
    let store = InMemoryLifecycle::<CategoryModel>::new();
    let created = store.create(&category("Drinks")).await.unwrap();
    let id = created.meta.id;

    let trashed = store.trash(id).await.unwrap();
    assert!(trashed.meta.deleted_at.is_some());

    let restored = store.restore(id).await.unwrap();
    assert!(restored.meta.deleted_at.is_none());
    assert_eq!(restored.name, "Drinks");
    assert_eq!(restored.meta.created_at, created.meta.created_at);
}

#[tokio::test]
async fn trash_twice_is_an_idempotent_noop() {
    let store = InMemoryLifecycle::<CategoryModel>::new();
    let id = store.create(&category("Drinks")).await.unwrap().meta.id;

    let first = store.trash(id).await.unwrap();
    let second = store.trash(id).await.unwrap();

    // Timestamps inchangés au second passage.
    assert_eq!(second.meta.deleted_at, first.meta.deleted_at);
    assert_eq!(second.meta.updated_at, first.meta.updated_at);
}

#[tokio::test]
async fn restore_of_an_active_record_changes_nothing() {
    let store = InMemoryLifecycle::<CategoryModel>::new();
    let created = store.create(&category("Drinks")).await.unwrap();

    let restored = store.restore(created.meta.id).await.unwrap();
    assert_eq!(restored.meta.updated_at, created.meta.updated_at);
    assert!(restored.meta.deleted_at.is_none());
}

#[tokio::test]
async fn delete_permanent_is_irreversible() {
    let store = InMemoryLifecycle::<CategoryModel>::new();
    let id = store.create(&category("Drinks")).await.unwrap().meta.id;

    store.trash(id).await.unwrap();
    assert!(store.delete_permanent(id).await.unwrap());

    let err = store.find_by_id(id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    let err = store.restore(id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn active_and_trashed_scopes_partition_the_store() {
    let store = InMemoryLifecycle::<CategoryModel>::new();
    let keep = store.create(&category("Drinks")).await.unwrap().meta.id;
    let bin = store.create(&category("Snacks")).await.unwrap().meta.id;
    store.trash(bin).await.unwrap();

    let active = store.find_by_active(&query(1, 10)).await.unwrap();
    assert_eq!(active.items.len(), 1);
    assert_eq!(active.items[0].meta.id, keep);

    let trashed = store.find_by_trashed(&query(1, 10)).await.unwrap();
    assert_eq!(trashed.items.len(), 1);
    assert_eq!(trashed.items[0].meta.id, bin);

    // find_all voit les deux états.
    assert_eq!(store.find_all(&query(1, 10)).await.unwrap().total, 2);
}

#[tokio::test]
async fn bulk_operations_only_touch_the_trashed_set() {
    let store = InMemoryLifecycle::<CategoryModel>::new();
    let active = store.create(&category("Drinks")).await.unwrap().meta.id;
    let binned = store.create(&category("Snacks")).await.unwrap().meta.id;
    store.trash(binned).await.unwrap();

    assert!(store.restore_all().await.unwrap());
    assert_eq!(store.find_by_trashed(&query(1, 10)).await.unwrap().total, 0);

    store.trash(binned).await.unwrap();
    assert!(store.delete_all_permanent().await.unwrap());

    assert!(store.find_by_id(active).await.is_ok());
    assert!(store.find_by_id(binned).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn listing_slices_the_requested_page() {
    let store = InMemoryLifecycle::<CategoryModel>::new();
    for i in 0..25 {
        store.create(&category(&format!("Aisle {i:02}"))).await.unwrap();
    }

    let page = store.find_all(&query(3, 10)).await.unwrap();
    assert_eq!(page.total, 25);
    assert_eq!(page.items.len(), 5);

    // Au-delà de la dernière page : tranche vide, total inchangé.
    let beyond = store.find_all(&query(9, 10)).await.unwrap();
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total, 25);
}

#[tokio::test]
async fn product_listing_honours_price_bounds() {
    let store = InMemoryLifecycle::<ProductModel>::new();
    for (name, price) in [("Espresso", 250), ("Latte", 450), ("Beans 1kg", 1850)] {
        store
            .create(&CreateProductRequest {
                merchant_id: 1,
                category_id: 1,
                name: name.into(),
                description: String::new(),
                price,
                count_in_stock: 5,
                weight: 0,
            })
            .await
            .unwrap();
    }

    let filter = ProductFilter {
        min_price: Some(300),
        max_price: Some(1000),
        ..Default::default()
    };
    let page = store
        .find_all(&ListQuery::new(1, 10, String::new(), filter))
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Latte");
}

#[tokio::test]
async fn transaction_listing_filters_by_period() {
    let store = InMemoryLifecycle::<TransactionModel>::new();
    store
        .create(&CreateTransactionRequest {
            order_id: 1,
            merchant_id: 1,
            payment_method: "cash".into(),
            amount: 1000,
            change_amount: 0,
            payment_status: "paid".into(),
        })
        .await
        .unwrap();

    // Le record vient d'être créé : l'année courante matche, 1900 non.
    let now = chrono::Utc::now();
    let this_year = TransactionFilter {
        year: Some(chrono::Datelike::year(&now)),
        ..Default::default()
    };
    let page = store
        .find_all(&ListQuery::new(1, 10, String::new(), this_year))
        .await
        .unwrap();
    assert_eq!(page.total, 1);

    let wrong_year = TransactionFilter {
        year: Some(1900),
        ..Default::default()
    };
    let page = store
        .find_all(&ListQuery::new(1, 10, String::new(), wrong_year))
        .await
        .unwrap();
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn duplicate_user_email_is_a_conflict() {
    let store = InMemoryLifecycle::<UserModel>::new();
    let request = CreateUserRequest {
        firstname: "Ada".into(),
        lastname: "Lovelace".into(),
        email: "ada@example.com".into(),
        password: "secret42".into(),
    };

    store.create(&request).await.unwrap();
    let err = store.create(&request).await.unwrap_err();
    assert!(matches!(err, DomainError::AlreadyExists { .. }));
}
