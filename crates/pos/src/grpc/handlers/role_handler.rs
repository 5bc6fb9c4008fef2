// crates/pos/src/grpc/handlers/role_handler.rs

use tonic::{Request, Response, Status};

use crate::domain::records::RoleRecord;
use crate::domain::requests;
use crate::domain::service::{DynRoleService, ListQuery};
use crate::grpc::handlers::ops::{self, Scope};
use crate::grpc::mappers::IntoGrpcStatus;
use crate::grpc::proto::role_service_server::RoleService;
use crate::grpc::proto::{
    ApiResponseAll, ApiResponseDelete, ApiResponseRole, ApiResponseRoles, Role,
    CreateRoleRequest, Empty, FindAllRequest, FindByIdRequest, Pagination,
    UpdateRoleRequest,
};

pub struct RoleHandler {
    service: DynRoleService,
}

impl RoleHandler {
    pub fn new(service: DynRoleService) -> Self {
        Self { service }
    }

    fn one(message: &str, record: &RoleRecord) -> Response<ApiResponseRole> {
        Response::new(ApiResponseRole {
            status: "success".into(),
            message: message.into(),
            data: Some(Role::from(record)),
        })
    }

    fn many(
        message: &str,
        data: Vec<Role>,
        pagination: Pagination,
    ) -> Response<ApiResponseRoles> {
        Response::new(ApiResponseRoles {
            status: "success".into(),
            message: message.into(),
            data,
            pagination: Some(pagination),
        })
    }
}

#[tonic::async_trait]
impl RoleService for RoleHandler {
    async fn find_all(
        &self,
        request: Request<FindAllRequest>,
    ) -> Result<Response<ApiResponseRoles>, Status> {
        let req = request.into_inner();
        let query = ListQuery::new(req.page, req.page_size, req.search, ());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::All, query).await?;
        Ok(Self::many("roles fetched successfully", data, pagination))
    }

    async fn find_by_id(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseRole>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.find_by_id(id).await.map_grpc()?;
        Ok(Self::one("role fetched successfully", &record))
    }

    async fn find_by_active(
        &self,
        request: Request<FindAllRequest>,
    ) -> Result<Response<ApiResponseRoles>, Status> {
        let req = request.into_inner();
        let query = ListQuery::new(req.page, req.page_size, req.search, ());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::Active, query).await?;
        Ok(Self::many(
            "active roles fetched successfully",
            data,
            pagination,
        ))
    }

    async fn find_by_trashed(
        &self,
        request: Request<FindAllRequest>,
    ) -> Result<Response<ApiResponseRoles>, Status> {
        let req = request.into_inner();
        let query = ListQuery::new(req.page, req.page_size, req.search, ());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::Trashed, query).await?;
        Ok(Self::many(
            "trashed roles fetched successfully",
            data,
            pagination,
        ))
    }

    async fn create(
        &self,
        request: Request<CreateRoleRequest>,
    ) -> Result<Response<ApiResponseRole>, Status> {
        let input = requests::CreateRoleRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let record = self.service.create(&input).await.map_grpc()?;
        Ok(Self::one("role created successfully", &record))
    }

    async fn update(
        &self,
        request: Request<UpdateRoleRequest>,
    ) -> Result<Response<ApiResponseRole>, Status> {
        let input = requests::UpdateRoleRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let record = self.service.update(&input).await.map_grpc()?;
        Ok(Self::one("role updated successfully", &record))
    }

    async fn trashed(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseRole>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.trash(id).await.map_grpc()?;
        Ok(Self::one("role moved to trash", &record))
    }

    async fn restore(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseRole>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.restore(id).await.map_grpc()?;
        Ok(Self::one("role restored successfully", &record))
    }

    async fn delete_permanent(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseDelete>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let success = self.service.delete_permanent(id).await.map_grpc()?;
        Ok(Response::new(ApiResponseDelete {
            status: "success".into(),
            message: "role permanently deleted".into(),
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
            message: "all trashed roles restored".into(),
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
            message: "all trashed roles permanently deleted".into(),
            success,
        }))
    }
}
