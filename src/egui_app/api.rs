//! Shop API Client
//!
//! Async functions for every backend endpoint the client uses. Responses are
//! decoded into the shared wire types; non-2xx answers become `ClientError`s
//! carrying the backend's `detail` message verbatim when it sends one.

use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::egui_app::config::Config;
use crate::shared::models::{ErrorDetail, TokenResponse};
use crate::shared::{
    ClientError, Credentials, DemoUser, NewUser, Product, RecommendationsResponse, UserId,
    UserProfile,
};

/// Fallback for failed requests whose body carries no `detail`
const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// HTTP client for the recommendation backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    client: Client,
}

impl ApiClient {
    pub fn new(config: Config) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { config, client })
    }

    /// `GET /api/users`
    pub async fn list_demo_users(&self) -> Result<Vec<DemoUser>, ClientError> {
        let url = self.config.api_url("/api/users");
        let response = self.client.get(&url).send().await?;
        decode(check(response).await?).await
    }

    /// `GET /api/products`
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let url = self.config.api_url("/api/products");
        let response = self.client.get(&url).send().await?;
        decode(check(response).await?).await
    }

    /// `GET /api/recommendations/{id}`, no authentication
    pub async fn demo_recommendations(
        &self,
        user_id: UserId,
    ) -> Result<RecommendationsResponse, ClientError> {
        let url = self.config.api_url(&format!("/api/recommendations/{}", user_id));
        let response = self.client.get(&url).send().await?;
        decode(check(response).await?).await
    }

    /// `GET /api/me`. Any non-2xx status means the token is not valid.
    pub async fn me(&self, token: &str) -> Result<UserProfile, ClientError> {
        let url = self.config.api_url("/api/me");
        let response = self.client.get(&url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(response).await;
            debug!(%status, "token rejected");
            return Err(ClientError::Unauthorized(message));
        }
        decode(response).await
    }

    /// `GET /api/me/recommendations`
    pub async fn my_recommendations(
        &self,
        token: &str,
    ) -> Result<RecommendationsResponse, ClientError> {
        let url = self.config.api_url("/api/me/recommendations");
        let response = self.client.get(&url).bearer_auth(token).send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized(error_message(response).await));
        }
        decode(check(response).await?).await
    }

    /// `POST /api/auth/login` with a form-encoded body; returns the token
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ClientError> {
        let url = self.config.api_url("/api/auth/login");
        let response = self.client.post(&url).form(credentials).send().await?;
        let token: TokenResponse = decode(check(response).await?).await?;
        Ok(token.access_token)
    }

    /// `POST /api/auth/register` with a JSON body
    pub async fn register(&self, user: &NewUser) -> Result<(), ClientError> {
        let url = self.config.api_url("/api/auth/register");
        let response = self.client.post(&url).json(user).send().await?;
        check(response).await.map(|_| ())
    }
}

/// Pass 2xx responses through; turn anything else into `ClientError::Backend`
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = error_message(response).await;
    Err(ClientError::backend(status.as_u16(), message))
}

async fn error_message(response: Response) -> String {
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str::<ErrorDetail>(&body)
        .map(|e| e.detail)
        .unwrap_or_else(|_| UNKNOWN_ERROR.to_string())
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
