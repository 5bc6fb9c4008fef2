// crates/pos/src/grpc/handlers/merchant_handler.rs

use tonic::{Request, Response, Status};

use crate::domain::records::MerchantRecord;
use crate::domain::requests;
use crate::domain::service::{DynMerchantService, ListQuery};
use crate::grpc::handlers::ops::{self, Scope};
use crate::grpc::mappers::IntoGrpcStatus;
use crate::grpc::proto::merchant_service_server::MerchantService;
use crate::grpc::proto::{
    ApiResponseAll, ApiResponseDelete, ApiResponseMerchant, ApiResponseMerchants, Merchant,
    CreateMerchantRequest, Empty, FindAllRequest, FindByIdRequest, Pagination,
    UpdateMerchantRequest,
};

pub struct MerchantHandler {
    service: DynMerchantService,
}

impl MerchantHandler {
    pub fn new(service: DynMerchantService) -> Self {
        Self { service }
    }

    fn one(message: &str, record: &MerchantRecord) -> Response<ApiResponseMerchant> {
        Response::new(ApiResponseMerchant {
            status: "success".into(),
            message: message.into(),
            data: Some(Merchant::from(record)),
        })
    }

    fn many(
        message: &str,
        data: Vec<Merchant>,
        pagination: Pagination,
    ) -> Response<ApiResponseMerchants> {
        Response::new(ApiResponseMerchants {
            status: "success".into(),
            message: message.into(),
            data,
            pagination: Some(pagination),
        })
    }
}

#[tonic::async_trait]
impl MerchantService for MerchantHandler {
    async fn find_all(
        &self,
        request: Request<FindAllRequest>,
    ) -> Result<Response<ApiResponseMerchants>, Status> {
        let req = request.into_inner();
        let query = ListQuery::new(req.page, req.page_size, req.search, ());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::All, query).await?;
        Ok(Self::many("merchants fetched successfully", data, pagination))
    }

    async fn find_by_id(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseMerchant>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.find_by_id(id).await.map_grpc()?;
        Ok(Self::one("merchant fetched successfully", &record))
    }

    async fn find_by_active(
        &self,
        request: Request<FindAllRequest>,
    ) -> Result<Response<ApiResponseMerchants>, Status> {
        let req = request.into_inner();
        let query = ListQuery::new(req.page, req.page_size, req.search, ());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::Active, query).await?;
        Ok(Self::many(
            "active merchants fetched successfully",
            data,
            pagination,
        ))
    }

    async fn find_by_trashed(
        &self,
        request: Request<FindAllRequest>,
    ) -> Result<Response<ApiResponseMerchants>, Status> {
        let req = request.into_inner();
        let query = ListQuery::new(req.page, req.page_size, req.search, ());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::Trashed, query).await?;
        Ok(Self::many(
            "trashed merchants fetched successfully",
            data,
            pagination,
        ))
    }

    async fn create(
        &self,
        request: Request<CreateMerchantRequest>,
    ) -> Result<Response<ApiResponseMerchant>, Status> {
        let input = requests::CreateMerchantRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let record = self.service.create(&input).await.map_grpc()?;
        Ok(Self::one("merchant created successfully", &record))
    }

    async fn update(
        &self,
        request: Request<UpdateMerchantRequest>,
    ) -> Result<Response<ApiResponseMerchant>, Status> {
        let input = requests::UpdateMerchantRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let record = self.service.update(&input).await.map_grpc()?;
        Ok(Self::one("merchant updated successfully", &record))
    }

    async fn trashed(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseMerchant>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.trash(id).await.map_grpc()?;
        Ok(Self::one("merchant moved to trash", &record))
    }

    async fn restore(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseMerchant>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.restore(id).await.map_grpc()?;
        Ok(Self::one("merchant restored successfully", &record))
    }

    async fn delete_permanent(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseDelete>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let success = self.service.delete_permanent(id).await.map_grpc()?;
        Ok(Response::new(ApiResponseDelete {
            status: "success".into(),
            message: "merchant permanently deleted".into(),
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
            message: "all trashed merchants restored".into(),
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
            message: "all trashed merchants permanently deleted".into(),
            success,
        }))
    }
}
