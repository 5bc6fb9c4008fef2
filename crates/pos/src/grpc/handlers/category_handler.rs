// crates/pos/src/grpc/handlers/category_handler.rs

use tonic::{Request, Response, Status};

use crate::domain::records::CategoryRecord;
use crate::domain::requests;
use crate::domain::service::{DynCategoryService, ListQuery};
use crate::grpc::handlers::ops::{self, Scope};
use crate::grpc::mappers::IntoGrpcStatus;
use crate::grpc::proto::category_service_server::CategoryService;
use crate::grpc::proto::{
    ApiResponseAll, ApiResponseCategories, ApiResponseCategory, ApiResponseDelete, Category,
    CreateCategoryRequest, Empty, FindAllRequest, FindByIdRequest, Pagination,
    UpdateCategoryRequest,
};

pub struct CategoryHandler {
    service: DynCategoryService,
}

impl CategoryHandler {
    pub fn new(service: DynCategoryService) -> Self {
        Self { service }
    }

    fn one(message: &str, record: &CategoryRecord) -> Response<ApiResponseCategory> {
        Response::new(ApiResponseCategory {
            status: "success".into(),
            message: message.into(),
            data: Some(Category::from(record)),
        })
    }

    fn many(
        message: &str,
        data: Vec<Category>,
        pagination: Pagination,
    ) -> Response<ApiResponseCategories> {
        Response::new(ApiResponseCategories {
            status: "success".into(),
            message: message.into(),
            data,
            pagination: Some(pagination),
        })
    }
}

#[tonic::async_trait]
impl CategoryService for CategoryHandler {
    async fn find_all(
        &self,
        request: Request<FindAllRequest>,
    ) -> Result<Response<ApiResponseCategories>, Status> {
        let req = request.into_inner();
        let query = ListQuery::new(req.page, req.page_size, req.search, ());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::All, query).await?;
        Ok(Self::many("categories fetched successfully", data, pagination))
    }

    async fn find_by_id(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseCategory>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.find_by_id(id).await.map_grpc()?;
        Ok(Self::one("category fetched successfully", &record))
    }

    async fn find_by_active(
        &self,
        request: Request<FindAllRequest>,
    ) -> Result<Response<ApiResponseCategories>, Status> {
        let req = request.into_inner();
        let query = ListQuery::new(req.page, req.page_size, req.search, ());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::Active, query).await?;
        Ok(Self::many(
            "active categories fetched successfully",
            data,
            pagination,
        ))
    }

    async fn find_by_trashed(
        &self,
        request: Request<FindAllRequest>,
    ) -> Result<Response<ApiResponseCategories>, Status> {
        let req = request.into_inner();
        let query = ListQuery::new(req.page, req.page_size, req.search, ());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::Trashed, query).await?;
        Ok(Self::many(
            "trashed categories fetched successfully",
            data,
            pagination,
        ))
    }

    async fn create(
        &self,
        request: Request<CreateCategoryRequest>,
    ) -> Result<Response<ApiResponseCategory>, Status> {
        let input = requests::CreateCategoryRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let record = self.service.create(&input).await.map_grpc()?;
        Ok(Self::one("category created successfully", &record))
    }

    async fn update(
        &self,
        request: Request<UpdateCategoryRequest>,
    ) -> Result<Response<ApiResponseCategory>, Status> {
        let input = requests::UpdateCategoryRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let record = self.service.update(&input).await.map_grpc()?;
        Ok(Self::one("category updated successfully", &record))
    }

    async fn trashed(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseCategory>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.trash(id).await.map_grpc()?;
        Ok(Self::one("category moved to trash", &record))
    }

    async fn restore(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseCategory>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.restore(id).await.map_grpc()?;
        Ok(Self::one("category restored successfully", &record))
    }

    async fn delete_permanent(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseDelete>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let success = self.service.delete_permanent(id).await.map_grpc()?;
        Ok(Response::new(ApiResponseDelete {
            status: "success".into(),
            message: "category permanently deleted".into(),
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
            message: "all trashed categories restored".into(),
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
            message: "all trashed categories permanently deleted".into(),
            success,
        }))
    }
}
