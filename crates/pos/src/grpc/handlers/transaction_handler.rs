// crates/pos/src/grpc/handlers/transaction_handler.rs

use tonic::{Request, Response, Status};

use crate::domain::records::TransactionRecord;
use crate::domain::requests;
use crate::domain::service::{DynTransactionService, ListQuery, TransactionFilter};
use crate::grpc::handlers::ops::{self, Scope};
use crate::grpc::mappers::IntoGrpcStatus;
use crate::grpc::proto::transaction_service_server::TransactionService;
use crate::grpc::proto::{
    ApiResponseAll, ApiResponseDelete, ApiResponseTransaction, ApiResponseTransactions,
    CreateTransactionRequest, Empty, FindAllTransactionRequest, FindByIdRequest, Pagination, Transaction,
    UpdateTransactionRequest,
};

pub struct TransactionHandler {
    service: DynTransactionService,
}

impl TransactionHandler {
    pub fn new(service: DynTransactionService) -> Self {
        Self { service }
    }

    fn query(req: FindAllTransactionRequest) -> ListQuery<TransactionFilter> {
        let filter = TransactionFilter::from(&req);
        ListQuery::new(req.page, req.page_size, req.search, filter)
    }

    fn one(message: &str, record: &TransactionRecord) -> Response<ApiResponseTransaction> {
        Response::new(ApiResponseTransaction {
            status: "success".into(),
            message: message.into(),
            data: Some(Transaction::from(record)),
        })
    }

    fn many(
        message: &str,
        data: Vec<Transaction>,
        pagination: Pagination,
    ) -> Response<ApiResponseTransactions> {
        Response::new(ApiResponseTransactions {
            status: "success".into(),
            message: message.into(),
            data,
            pagination: Some(pagination),
        })
    }
}

#[tonic::async_trait]
impl TransactionService for TransactionHandler {
    async fn find_all(
        &self,
        request: Request<FindAllTransactionRequest>,
    ) -> Result<Response<ApiResponseTransactions>, Status> {
        let query = Self::query(request.into_inner());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::All, query).await?;
        Ok(Self::many("transactions fetched successfully", data, pagination))
    }

    async fn find_by_id(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseTransaction>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.find_by_id(id).await.map_grpc()?;
        Ok(Self::one("transaction fetched successfully", &record))
    }

    async fn find_by_active(
        &self,
        request: Request<FindAllTransactionRequest>,
    ) -> Result<Response<ApiResponseTransactions>, Status> {
        let query = Self::query(request.into_inner());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::Active, query).await?;
        Ok(Self::many(
            "active transactions fetched successfully",
            data,
            pagination,
        ))
    }

    async fn find_by_trashed(
        &self,
        request: Request<FindAllTransactionRequest>,
    ) -> Result<Response<ApiResponseTransactions>, Status> {
        let query = Self::query(request.into_inner());
        let (data, pagination) = ops::list(self.service.as_ref(), Scope::Trashed, query).await?;
        Ok(Self::many(
            "trashed transactions fetched successfully",
            data,
            pagination,
        ))
    }

    async fn create(
        &self,
        request: Request<CreateTransactionRequest>,
    ) -> Result<Response<ApiResponseTransaction>, Status> {
        let input = requests::CreateTransactionRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let record = self.service.create(&input).await.map_grpc()?;
        Ok(Self::one("transaction created successfully", &record))
    }

    async fn update(
        &self,
        request: Request<UpdateTransactionRequest>,
    ) -> Result<Response<ApiResponseTransaction>, Status> {
        let input = requests::UpdateTransactionRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let record = self.service.update(&input).await.map_grpc()?;
        Ok(Self::one("transaction updated successfully", &record))
    }

    async fn trashed(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseTransaction>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.trash(id).await.map_grpc()?;
        Ok(Self::one("transaction moved to trash", &record))
    }

    async fn restore(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseTransaction>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let record = self.service.restore(id).await.map_grpc()?;
        Ok(Self::one("transaction restored successfully", &record))
    }

    async fn delete_permanent(
        &self,
        request: Request<FindByIdRequest>,
    ) -> Result<Response<ApiResponseDelete>, Status> {
        let id = ops::require_id(request.into_inner().id)?;
        let success = self.service.delete_permanent(id).await.map_grpc()?;
        Ok(Response::new(ApiResponseDelete {
            status: "success".into(),
            message: "transaction permanently deleted".into(),
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
            message: "all trashed transactions restored".into(),
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
            message: "all trashed transactions permanently deleted".into(),
            success,
        }))
    }
}
