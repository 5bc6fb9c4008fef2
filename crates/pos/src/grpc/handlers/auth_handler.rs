// crates/pos/src/grpc/handlers/auth_handler.rs

use tonic::{Request, Response, Status};

use crate::domain::auth::DynAuthService;
use crate::domain::requests;
use crate::grpc::mappers::IntoGrpcStatus;
use crate::grpc::proto::auth_service_server::AuthService;
use crate::grpc::proto::{ApiResponseLogin, LoginRequest, RefreshTokenRequest, TokenPair};

pub struct AuthHandler {
    service: DynAuthService,
}

impl AuthHandler {
    pub fn new(service: DynAuthService) -> Self {
        Self { service }
    }

    fn granted(message: &str, pair: &crate::domain::auth::TokenPair) -> Response<ApiResponseLogin> {
        Response::new(ApiResponseLogin {
            status: "success".into(),
            message: message.into(),
            data: Some(TokenPair::from(pair)),
        })
    }
}

#[tonic::async_trait]
impl AuthService for AuthHandler {
    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<ApiResponseLogin>, Status> {
        let input = requests::LoginRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let pair = self
            .service
            .login(&input.email, &input.password)
            .await
            .map_grpc()?;
        Ok(Self::granted("login successful", &pair))
    }

    async fn refresh_token(
        &self,
        request: Request<RefreshTokenRequest>,
    ) -> Result<Response<ApiResponseLogin>, Status> {
        let input = requests::RefreshTokenRequest::from(request.into_inner());
        input.validate().map_grpc()?;
        let pair = self.service.refresh(&input.refresh_token).await.map_grpc()?;
        Ok(Self::granted("token refreshed successfully", &pair))
    }
}
