// crates/pos/tests/handler_it_for_category.rs
//
// Le handler RPC testé bout en bout contre le Domain Service mémoire :
// correction des paramètres, refus des ids non positifs, enveloppes et
// traduction d'erreurs.

use std::sync::Arc;

use tonic::{Code, Request};

use pos::domain::memory::{CategoryModel, InMemoryLifecycle};
use pos::grpc::handlers::CategoryHandler;
use pos::grpc::proto::category_service_server::CategoryService;
use pos::grpc::proto::{
    CreateCategoryRequest, Empty, FindAllRequest, FindByIdRequest, UpdateCategoryRequest,
};
use shared_kernel::errors::DomainError;

struct TestContext {
    handler: CategoryHandler,
    store: Arc<InMemoryLifecycle<CategoryModel>>,
}

fn setup() -> TestContext {
    let store = Arc::new(InMemoryLifecycle::<CategoryModel>::new());
    let handler = CategoryHandler::new(store.clone());
    TestContext { handler, store }
}

async fn seed(ctx: &TestContext, name: &str) -> i32 {
    let reply = ctx
        .handler
        .create(Request::new(CreateCategoryRequest {
            name: name.into(),
            description: format!("{name} description"),
        }))
        .await
        .expect("seed create failed")
        .into_inner();
    reply.data.expect("create returns the record").id
}

fn list_request(page: i32, page_size: i32, search: &str) -> Request<FindAllRequest> {
    Request::new(FindAllRequest {
        page,
        page_size,
        search: search.into(),
    })
}

#[tokio::test]
async fn find_all_corrects_non_positive_paging() {
    let ctx = setup();
    for name in ["Drinks", "Snacks", "Bakery"] {
        seed(&ctx, name).await;
    }

    // page 0 et page_size -5 retombent sur 1 / 10, sans erreur.
    let reply = ctx
        .handler
        .find_all(list_request(0, -5, ""))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(reply.status, "success");
    assert_eq!(reply.data.len(), 3);

    let pagination = reply.pagination.unwrap();
    assert_eq!(pagination.current_page, 1);
    assert_eq!(pagination.page_size, 10);
    assert_eq!(pagination.total_records, 3);
    assert_eq!(pagination.total_pages, 1);
}

#[tokio::test]
async fn empty_listing_returns_an_empty_data_array() {
    let ctx = setup();

    let reply = ctx
        .handler
        .find_all(list_request(1, 10, ""))
        .await
        .unwrap()
        .into_inner();

    assert!(reply.data.is_empty());
    assert_eq!(reply.pagination.unwrap().total_pages, 0);
}

#[tokio::test]
async fn search_matches_name_case_insensitively() {
    let ctx = setup();
    seed(&ctx, "Drinks").await;
    seed(&ctx, "Snacks").await;

    let reply = ctx
        .handler
        .find_all(list_request(1, 10, "DRI"))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(reply.data.len(), 1);
    assert_eq!(reply.data[0].name, "Drinks");
}

#[tokio::test]
async fn non_positive_id_is_rejected_before_the_domain_service() {
    let ctx = setup();

    let status = ctx
        .handler
        .find_by_id(Request::new(FindByIdRequest { id: 0 }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    // Le store n'a jamais été appelé.
    assert_eq!(ctx.store.calls(), 0);
}

#[tokio::test]
async fn missing_record_maps_to_not_found() {
    let ctx = setup();

    let status = ctx
        .handler
        .find_by_id(Request::new(FindByIdRequest { id: 42 }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn invalid_create_payload_never_reaches_the_store() {
    let ctx = setup();

    let status = ctx
        .handler
        .create(Request::new(CreateCategoryRequest {
            name: "   ".into(),
            description: String::new(),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(ctx.store.calls(), 0);
}

#[tokio::test]
async fn internal_failures_do_not_leak_details() {
    let ctx = setup();
    ctx.store
        .fail_with(Some(DomainError::Internal("connection pool exhausted".into())));

    let status = ctx
        .handler
        .find_all(list_request(1, 10, ""))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Internal);
    assert_eq!(status.message(), "internal error");
}

#[tokio::test]
async fn trash_and_restore_round_trip_through_the_handler() {
    let ctx = setup();
    let id = seed(&ctx, "Drinks").await;

    let trashed = ctx
        .handler
        .trashed(Request::new(FindByIdRequest { id }))
        .await
        .unwrap()
        .into_inner();
    assert!(trashed.data.unwrap().deleted_at.is_some());

    let restored = ctx
        .handler
        .restore(Request::new(FindByIdRequest { id }))
        .await
        .unwrap()
        .into_inner();
    let record = restored.data.unwrap();
    assert!(record.deleted_at.is_none());
    assert_eq!(record.name, "Drinks");
}

#[tokio::test]
async fn update_replaces_attributes_and_keeps_identity() {
    let ctx = setup();
    let id = seed(&ctx, "Drinks").await;

    let reply = ctx
        .handler
        .update(Request::new(UpdateCategoryRequest {
            id,
            name: "Cold drinks".into(),
            description: "fridge aisle".into(),
        }))
        .await
        .unwrap()
        .into_inner();

    let record = reply.data.unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.name, "Cold drinks");
}

#[tokio::test]
async fn bulk_operations_report_success_on_the_ack_envelope() {
    let ctx = setup();
    let id = seed(&ctx, "Drinks").await;
    ctx.handler
        .trashed(Request::new(FindByIdRequest { id }))
        .await
        .unwrap();

    let restored = ctx
        .handler
        .restore_all(Request::new(Empty {}))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(restored.status, "success");
    assert!(restored.success);

    let purged = ctx
        .handler
        .delete_all_permanent(Request::new(Empty {}))
        .await
        .unwrap()
        .into_inner();
    assert!(purged.success);

    // Plus rien en corbeille, le record restauré est toujours là.
    let reply = ctx
        .handler
        .find_by_id(Request::new(FindByIdRequest { id }))
        .await
        .unwrap()
        .into_inner();
    assert!(reply.data.unwrap().deleted_at.is_none());
}
