// crates/pos/src/grpc/handlers/cashier_handler.rs

use tonic::{Request, Response, Status};

use crate::domain::records::CashierRecord;
use crate::domain::requests;
use crate::domain::service::{DynCashierService, ListQuery};
use crate::grpc::handlers::ops::{self, Scope};
use crate::grpc::mappers::IntoGrpcStatus;
use crate::grpc::proto::cashier_service_server::CashierService;
use crate::grpc::proto::{
    ApiResponseAll, ApiResponseCashiers, ApiResponseCashier, ApiResponseDelete, Cashier,
    CreateCashierRequest, Empty, FindAllRequest, FindByIdRequest, Pagination,
    UpdateCashierRequest,
};

pub struct CashierHandler {
    service: DynCashierService,
}

impl CashierHandler {
    pub fn new(service: DynCashierService) -> Self {
        Self { service }
    }

    fn one(message: &str, record: &CashierRecord) -> Response<ApiResponseCashier> {
        Response::new(ApiResponseCashier {
            status: "success".into(),
            message: message.into(),
            data: Some(Cashier::from(record)),
        })
    }

    fn many(
        message: &str,
        data: Vec<Cashier>,
        pagination: Pagination,
    ) -> Response<ApiResponseCashiers> {
        Response::new(ApiResponseCashiers {
            status: "success".into(),
            message: message.into(),
            data,
            pagination: Some(pagination),
        })
    }
}

#[tonic::async_trait]
impl CashierService for CashierHandler {
    async fn find_all(
        &self,
        request: Request<FindAllRequest>,
    ) -> Result<Response<ApiResponseCashiers>, Status> {
        let req = request.into_inner();
        let query = ListQuery::new(req.page, req.page_size, req.search, ());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::All, query).await?;
        Ok(Self::many("cashiers fetched successfully", data, pagination))
    }

    async fn find_by_id(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseCashier>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.find_by_id(id).await.map_grpc()?;
        Ok(Self::one("cashier fetched successfully", &record))
    }

    async fn find_by_active(
        &self,
        request: Request<FindAllRequest>,
    ) -> Result<Response<ApiResponseCashiers>, Status> {
        let req = request.into_inner();
        let query = ListQuery::new(req.page, req.page_size, req.search, ());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::Active, query).await?;
        Ok(Self::many(
            "active cashiers fetched successfully",
            data,
            pagination,
        ))
    }

    async fn find_by_trashed(
        &self,
        request: Request<FindAllRequest>,
    ) -> Result<Response<ApiResponseCashiers>, Status> {
        let req = request.into_inner();
        let query = ListQuery::new(req.page, req.page_size, req.search, ());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::Trashed, query).await?;
        Ok(Self::many(
            "trashed cashiers fetched successfully",
            data,
            pagination,
        ))
    }

    async fn create(
        &self,
        request: Request<CreateCashierRequest>,
    ) -> Result<Response<ApiResponseCashier>, Status> {
        let input = requests::CreateCashierRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let record = self.service.create(&input).await.map_grpc()?;
        Ok(Self::one("cashier created successfully", &record))
    }

    async fn update(
        &self,
        request: Request<UpdateCashierRequest>,
    ) -> Result<Response<ApiResponseCashier>, Status> {
        let input = requests::UpdateCashierRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let record = self.service.update(&input).await.map_grpc()?;
        Ok(Self::one("cashier updated successfully", &record))
    }

    async fn trashed(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseCashier>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.trash(id).await.map_grpc()?;
        Ok(Self::one("cashier moved to trash", &record))
    }

    async fn restore(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseCashier>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.restore(id).await.map_grpc()?;
        Ok(Self::one("cashier restored successfully", &record))
    }

    async fn delete_permanent(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseDelete>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let success = self.service.delete_permanent(id).await.map_grpc()?;
        Ok(Response::new(ApiResponseDelete {
            status: "success".into(),
            message: "cashier permanently deleted".into(),
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
            message: "all trashed cashiers restored".into(),
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
            message: "all trashed cashiers permanently deleted".into(),
            success,
        }))
    }
}
