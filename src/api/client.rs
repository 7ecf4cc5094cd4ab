use std::sync::{Arc, RwLock};

use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::domain::{ProductPayload, ProductRecord};

use super::credentials::Credentials;
use super::error::ApiError;

/// Where the remote catalog lives: the service base URL and the per-tenant
/// path segment spliced into the product routes.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base: Url,
    pub path: String,
}

impl ApiConfig {
    pub fn new(base: Url, path: impl Into<String>) -> Self {
        Self {
            base,
            path: path.into(),
        }
    }
}

/// Thin client over the remote product/auth API.
///
/// Cheap to clone; every spawned request holds its own copy. The bearer
/// token is shared so that a sign-in on one clone authenticates them all.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    token: Arc<RwLock<Option<String>>>,
}

#[derive(Debug, Serialize)]
struct SignInBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct SignInResponse {
    token: String,
    expired: i64,
}

#[derive(Debug, Deserialize)]
struct ProductListResponse {
    #[serde(default)]
    products: Vec<ProductRecord>,
}

#[derive(Debug, Serialize)]
struct ProductEnvelope<'a> {
    data: &'a ProductPayload,
}

#[derive(Debug, Deserialize)]
struct RejectionBody {
    message: Option<String>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.into());
        }
    }

    pub fn clear_token(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }

    fn endpoint(&self, suffix: &str) -> String {
        let base = self.config.base.as_str().trim_end_matches('/');
        format!("{base}{suffix}")
    }

    fn product_route(&self, suffix: &str) -> String {
        self.endpoint(&format!("/api/{}/admin/{suffix}", self.config.path))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = self.token.read().ok().and_then(|guard| guard.clone());
        match token {
            Some(token) => builder.header(reqwest::header::AUTHORIZATION, token),
            None => builder,
        }
    }

    /// `POST /admin/signin`. On success the returned token becomes this
    /// client's bearer credential.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<Credentials, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/admin/signin"))
            .json(&SignInBody { username, password })
            .send()
            .await?;
        let response = accepted(response).await?;
        let body: SignInResponse = response.json().await?;
        let credentials = Credentials::from_millis(body.token, body.expired);
        self.set_token(credentials.token.clone());
        debug!(expired = %credentials.expired, "signed in");
        Ok(credentials)
    }

    /// `POST /api/user/check` with the stored bearer credential.
    pub async fn check_session(&self) -> Result<(), ApiError> {
        let response = self
            .authorized(self.http.post(self.endpoint("/api/user/check")))
            .send()
            .await?;
        accepted(response).await?;
        Ok(())
    }

    /// `GET /api/{path}/admin/products`, unwrapped to the record list.
    pub async fn fetch_products(&self) -> Result<Vec<ProductRecord>, ApiError> {
        let response = self
            .authorized(self.http.get(self.product_route("products")))
            .send()
            .await?;
        let response = accepted(response).await?;
        let body: ProductListResponse = response.json().await?;
        debug!(count = body.products.len(), "product list fetched");
        Ok(body.products)
    }

    /// `POST /api/{path}/admin/product` with the `{"data": …}` envelope.
    pub async fn create_product(&self, payload: &ProductPayload) -> Result<(), ApiError> {
        let response = self
            .authorized(self.http.post(self.product_route("product")))
            .json(&ProductEnvelope { data: payload })
            .send()
            .await?;
        accepted(response).await?;
        Ok(())
    }

    /// `PUT /api/{path}/admin/product/{id}`, same body shape as create.
    pub async fn update_product(&self, id: &str, payload: &ProductPayload) -> Result<(), ApiError> {
        let response = self
            .authorized(self.http.put(self.product_route(&format!("product/{id}"))))
            .json(&ProductEnvelope { data: payload })
            .send()
            .await?;
        accepted(response).await?;
        Ok(())
    }

    /// `DELETE /api/{path}/admin/product/{id}`.
    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .authorized(self.http.delete(self.product_route(&format!("product/{id}"))))
            .send()
            .await?;
        accepted(response).await?;
        Ok(())
    }
}

/// Turns a non-success response into `ApiError::Rejected`, pulling the
/// server's `message` out of the JSON body when it decodes.
async fn accepted(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<RejectionBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    warn!(%status, message = message.as_deref().unwrap_or(""), "request rejected");
    Err(ApiError::Rejected { status, message })
}
