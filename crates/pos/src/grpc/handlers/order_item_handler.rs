// crates/pos/src/grpc/handlers/order_item_handler.rs

use tonic::{Request, Response, Status};

use crate::domain::records::OrderItemRecord;
use crate::domain::requests;
use crate::domain::service::{DynOrderItemService, ListQuery};
use crate::grpc::handlers::ops::{self, Scope};
use crate::grpc::mappers::IntoGrpcStatus;
use crate::grpc::proto::order_item_service_server::OrderItemService;
use crate::grpc::proto::{
    ApiResponseAll, ApiResponseOrderItems, ApiResponseOrderItem, ApiResponseDelete, OrderItem,
    CreateOrderItemRequest, Empty, FindAllRequest, FindByIdRequest, Pagination,
    UpdateOrderItemRequest,
};

pub struct OrderItemHandler {
    service: DynOrderItemService,
}

impl OrderItemHandler {
    pub fn new(service: DynOrderItemService) -> Self {
        Self { service }
    }

    fn one(message: &str, record: &OrderItemRecord) -> Response<ApiResponseOrderItem> {
        Response::new(ApiResponseOrderItem {
            status: "success".into(),
            message: message.into(),
            data: Some(OrderItem::from(record)),
        })
    }

    fn many(
        message: &str,
        data: Vec<OrderItem>,
        pagination: Pagination,
    ) -> Response<ApiResponseOrderItems> {
        Response::new(ApiResponseOrderItems {
            status: "success".into(),
            message: message.into(),
            data,
            pagination: Some(pagination),
        })
    }
}

#[tonic::async_trait]
impl OrderItemService for OrderItemHandler {
    async fn find_all(
        &self,
        request: Request<FindAllRequest>,
    ) -> Result<Response<ApiResponseOrderItems>, Status> {
        let req = request.into_inner();
        let query = ListQuery::new(req.page, req.page_size, req.search, ());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::All, query).await?;
        Ok(Self::many("order items fetched successfully", data, pagination))
    }

    async fn find_by_id(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseOrderItem>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.find_by_id(id).await.map_grpc()?;
        Ok(Self::one("order item fetched successfully", &record))
    }

    async fn find_by_active(
        &self,
        request: Request<FindAllRequest>,
    ) -> Result<Response<ApiResponseOrderItems>, Status> {
        let req = request.into_inner();
        let query = ListQuery::new(req.page, req.page_size, req.search, ());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::Active, query).await?;
        Ok(Self::many(
            "active order items fetched successfully",
            data,
            pagination,
        ))
    }

    async fn find_by_trashed(
        &self,
        request: Request<FindAllRequest>,
    ) -> Result<Response<ApiResponseOrderItems>, Status> {
        let req = request.into_inner();
        let query = ListQuery::new(req.page, req.page_size, req.search, ());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::Trashed, query).await?;
        Ok(Self::many(
            "trashed order items fetched successfully",
            data,
            pagination,
        ))
    }

    async fn create(
        &self,
        request: Request<CreateOrderItemRequest>,
    ) -> Result<Response<ApiResponseOrderItem>, Status> {
        let input = requests::CreateOrderItemRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let record = self.service.create(&input).await.map_grpc()?;
        Ok(Self::one("order item created successfully", &record))
    }

    async fn update(
        &self,
        request: Request<UpdateOrderItemRequest>,
    ) -> Result<Response<ApiResponseOrderItem>, Status> {
        let input = requests::UpdateOrderItemRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let record = self.service.update(&input).await.map_grpc()?;
        Ok(Self::one("order item updated successfully", &record))
    }

    async fn trashed(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseOrderItem>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.trash(id).await.map_grpc()?;
        Ok(Self::one("order item moved to trash", &record))
    }

    async fn restore(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseOrderItem>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.restore(id).await.map_grpc()?;
        Ok(Self::one("order item restored successfully", &record))
    }

    async fn delete_permanent(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseDelete>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let success = self.service.delete_permanent(id).await.map_grpc()?;
        Ok(Response::new(ApiResponseDelete {
            status: "success".into(),
            message: "order item permanently deleted".into(),
            success,
        }))
    }

    async fn restore_all(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<ApiResponseAll>, Status> {
        let success = self.service.restore_all().await.map_grpc()?;
        Ok(Response::new(ApiResponseAll {
            status: "success".into(),
            message: "all trashed order items restored".into(),
            success,
        }))
    }

    async fn delete_all_permanent(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<ApiResponseAll>, Status> {
        let success = self.service.delete_all_permanent().await.map_grpc()?;
        Ok(Response::new(ApiResponseAll {
            status: "success".into(),
            message: "all trashed order items permanently deleted".into(),
            success,
        }))
    }
}
