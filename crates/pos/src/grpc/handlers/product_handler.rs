// crates/pos/src/grpc/handlers/product_handler.rs

use tonic::{Request, Response, Status};

use crate::domain::records::ProductRecord;
use crate::domain::requests;
use crate::domain::service::{DynProductService, ListQuery, ProductFilter};
use crate::grpc::handlers::ops::{self, Scope};
use crate::grpc::mappers::IntoGrpcStatus;
use crate::grpc::proto::product_service_server::ProductService;
use crate::grpc::proto::{
    ApiResponseAll, ApiResponseDelete, ApiResponseProduct, ApiResponseProducts,
    CreateProductRequest, Empty, FindAllProductRequest, FindByIdRequest, Pagination, Product,
    UpdateProductRequest,
};

pub struct ProductHandler {
    service: DynProductService,
}

impl ProductHandler {
    pub fn new(service: DynProductService) -> Self {
        Self { service }
    }

    fn query(req: FindAllProductRequest) -> ListQuery<ProductFilter> {
        let filter = ProductFilter::from(&req);
        ListQuery::new(req.page, req.page_size, req.search, filter)
    }

    fn one(message: &str, record: &ProductRecord) -> Response<ApiResponseProduct> {
        Response::new(ApiResponseProduct {
            status: "success".into(),
            message: message.into(),
            data: Some(Product::from(record)),
        })
    }

    fn many(
        message: &str,
        data: Vec<Product>,
        pagination: Pagination,
    ) -> Response<ApiResponseProducts> {
        Response::new(ApiResponseProducts {
            status: "success".into(),
            message: message.into(),
            data,
            pagination: Some(pagination),
        })
    }
}

#[tonic::async_trait]
impl ProductService for ProductHandler {
    async fn find_all(
        &self,
        request: Request<FindAllProductRequest>,
    ) -> Result<Response<ApiResponseProducts>, Status> {
        let query = Self::query(request.into_inner());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::All, query).await?;
        Ok(Self::many("products fetched successfully", data, pagination))
    }

    async fn find_by_id(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseProduct>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.find_by_id(id).await.map_grpc()?;
        Ok(Self::one("product fetched successfully", &record))
    }

    async fn find_by_active(
        &self,
        request: Request<FindAllProductRequest>,
    ) -> Result<Response<ApiResponseProducts>, Status> {
        let query = Self::query(request.into_inner());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::Active, query).await?;
        Ok(Self::many(
            "active products fetched successfully",
            data,
            pagination,
        ))
    }

    async fn find_by_trashed(
        &self,
        request: Request<FindAllProductRequest>,
    ) -> Result<Response<ApiResponseProducts>, Status> {
        let query = Self::query(request.into_inner());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::Trashed, query).await?;
        Ok(Self::many(
            "trashed products fetched successfully",
            data,
            pagination,
        ))
    }

    async fn create(
        &self,
        request: Request<CreateProductRequest>,
    ) -> Result<Response<ApiResponseProduct>, Status> {
        let input = requests::CreateProductRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let record = self.service.create(&input).await.map_grpc()?;
        Ok(Self::one("product created successfully", &record))
    }

    async fn update(
        &self,
        request: Request<UpdateProductRequest>,
    ) -> Result<Response<ApiResponseProduct>, Status> {
        let input = requests::UpdateProductRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let record = self.service.update(&input).await.map_grpc()?;
        Ok(Self::one("product updated successfully", &record))
    }

    async fn trashed(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseProduct>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.trash(id).await.map_grpc()?;
        Ok(Self::one("product moved to trash", &record))
    }

    async fn restore(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseProduct>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.restore(id).await.map_grpc()?;
        Ok(Self::one("product restored successfully", &record))
    }

    async fn delete_permanent(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseDelete>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let success = self.service.delete_permanent(id).await.map_grpc()?;
        Ok(Response::new(ApiResponseDelete {
            status: "success".into(),
            message: "product permanently deleted".into(),
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
            message: "all trashed products restored".into(),
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
            message: "all trashed products permanently deleted".into(),
            success,
        }))
    }
}
