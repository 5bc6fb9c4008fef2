// crates/pos/src/grpc/handlers/order_handler.rs

use tonic::{Request, Response, Status};

use crate::domain::records::OrderRecord;
use crate::domain::requests;
use crate::domain::service::{DynOrderService, ListQuery, OrderFilter};
use crate::grpc::handlers::ops::{self, Scope};
use crate::grpc::mappers::IntoGrpcStatus;
use crate::grpc::proto::order_service_server::OrderService;
use crate::grpc::proto::{
    ApiResponseAll, ApiResponseDelete, ApiResponseOrder, ApiResponseOrders,
    CreateOrderRequest, Empty, FindAllOrderRequest, FindByIdRequest, Pagination, Order,
    UpdateOrderRequest,
};

pub struct OrderHandler {
    service: DynOrderService,
}

impl OrderHandler {
    pub fn new(service: DynOrderService) -> Self {
        Self { service }
    }

    fn query(req: FindAllOrderRequest) -> ListQuery<OrderFilter> {
        let filter = OrderFilter::from(&req);
        ListQuery::new(req.page, req.page_size, req.search, filter)
    }

    fn one(message: &str, record: &OrderRecord) -> Response<ApiResponseOrder> {
        Response::new(ApiResponseOrder {
            status: "success".into(),
            message: message.into(),
            data: Some(Order::from(record)),
        })
    }

    fn many(
        message: &str,
        data: Vec<Order>,
        pagination: Pagination,
    ) -> Response<ApiResponseOrders> {
        Response::new(ApiResponseOrders {
            status: "success".into(),
            message: message.into(),
            data,
            pagination: Some(pagination),
        })
    }
}

#[tonic::async_trait]
impl OrderService for OrderHandler {
    async fn find_all(
        &self,
        request: Request<FindAllOrderRequest>,
    ) -> Result<Response<ApiResponseOrders>, Status> {
        let query = Self::query(request.into_inner());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::All, query).await?;
        Ok(Self::many("orders fetched successfully", data, pagination))
    }

    async fn find_by_id(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseOrder>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.find_by_id(id).await.map_grpc()?;
        Ok(Self::one("order fetched successfully", &record))
    }

    async fn find_by_active(
        &self,
        request: Request<FindAllOrderRequest>,
    ) -> Result<Response<ApiResponseOrders>, Status> {
        let query = Self::query(request.into_inner());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::Active, query).await?;
        Ok(Self::many(
            "active orders fetched successfully",
            data,
            pagination,
        ))
    }

    async fn find_by_trashed(
        &self,
        request: Request<FindAllOrderRequest>,
    ) -> Result<Response<ApiResponseOrders>, Status> {
        let query = Self::query(request.into_inner());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::Trashed, query).await?;
        Ok(Self::many(
            "trashed orders fetched successfully",
            data,
            pagination,
        ))
    }

    async fn create(
        &self,
        request: Request<CreateOrderRequest>,
    ) -> Result<Response<ApiResponseOrder>, Status> {
        let input = requests::CreateOrderRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let record = self.service.create(&input).await.map_grpc()?;
        Ok(Self::one("order created successfully", &record))
    }

    async fn update(
        &self,
        request: Request<UpdateOrderRequest>,
    ) -> Result<Response<ApiResponseOrder>, Status> {
        let input = requests::UpdateOrderRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let record = self.service.update(&input).await.map_grpc()?;
        Ok(Self::one("order updated successfully", &record))
    }

    async fn trashed(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseOrder>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.trash(id).await.map_grpc()?;
        Ok(Self::one("order moved to trash", &record))
    }

    async fn restore(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseOrder>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.restore(id).await.map_grpc()?;
        Ok(Self::one("order restored successfully", &record))
    }

    async fn delete_permanent(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseDelete>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let success = self.service.delete_permanent(id).await.map_grpc()?;
        Ok(Response::new(ApiResponseDelete {
            status: "success".into(),
            message: "order permanently deleted".into(),
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
            message: "all trashed orders restored".into(),
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
            message: "all trashed orders permanently deleted".into(),
            success,
        }))
    }
}
