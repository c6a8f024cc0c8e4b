//! gloo-net implementation of the auth API.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::api::{endpoints, HealthResponse, LoginRequest, MessageResponse, SignUpRequest};
use shared::{ApiClientConfig, ApiError, AuthApi, UserResponse};

pub struct AuthClient {
    config: ApiClientConfig,
}

impl AuthClient {
    pub fn new(config: ApiClientConfig) -> Self {
        Self { config }
    }

    fn builder(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.config.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    fn get(&self, endpoint: &str) -> RequestBuilder {
        self.builder(Request::get(&self.config.url(endpoint)))
    }

    fn post(&self, endpoint: &str) -> RequestBuilder {
        self.builder(Request::post(&self.config.url(endpoint)))
    }

    fn delete(&self, endpoint: &str) -> RequestBuilder {
        self.builder(Request::delete(&self.config.url(endpoint)))
    }
}

async fn send<T: DeserializeOwned>(
    request: Result<Request, gloo_net::Error>,
) -> Result<T, ApiError> {
    let request = request.map_err(|e| ApiError::Parse(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(response).await
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()));
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("{} {} -> {}", response.url(), status, body);
    Err(ApiError::from_response(status, &body))
}

impl AuthApi for AuthClient {
    async fn health(&self) -> Result<HealthResponse, ApiError> {
        send(self.get(endpoints::HEALTH).build()).await
    }

    async fn login(&self, req: &LoginRequest) -> Result<UserResponse, ApiError> {
        send(self.post(endpoints::AUTH_LOGIN).json(req)).await
    }

    async fn join(&self, req: &SignUpRequest) -> Result<UserResponse, ApiError> {
        send(self.post(endpoints::AUTH_JOIN).json(req)).await
    }

    async fn logout(&self) -> Result<MessageResponse, ApiError> {
        send(self.post(endpoints::AUTH_LOGOUT).build()).await
    }

    async fn withdraw(&self) -> Result<MessageResponse, ApiError> {
        send(self.delete(endpoints::AUTH_WITHDRAW).build()).await
    }

    async fn get_me(&self) -> Result<UserResponse, ApiError> {
        send(self.get(endpoints::USER_ME).build()).await
    }
}
