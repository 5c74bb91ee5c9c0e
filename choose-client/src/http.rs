// choose-client/src/http.rs
// HTTP transport: bearer auth, envelope unwrapping, error normalization

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::response::{ApiResponse, ErrorBody};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::session::{FileTokenStore, MemoryTokenStore, SessionExpired, TokenStore};
use crate::{ClientConfig, ClientError, ClientResult};

/// Every method returns the envelope's `data` decoded as `T`, or the
/// normalized error. Use `()` or `Option<_>` for endpoints whose `data`
/// is null.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn get_query<T: DeserializeOwned, Q: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    /// Multipart upload of a single `file` field
    async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<T>;
    fn token_store(&self) -> &dyn TokenStore;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    session_tx: broadcast::Sender<SessionExpired>,
}

impl NetworkHttpClient {
    /// Build a client, choosing the token store from `config.token_path`
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let tokens: Arc<dyn TokenStore> = match &config.token_path {
            Some(path) => Arc::new(FileTokenStore::new(path)),
            None => Arc::new(MemoryTokenStore::new()),
        };
        Self::new(config, tokens)
    }

    /// Build a client around an explicit token store
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let mut builder = Client::builder()
            .default_headers(headers)
            .cookie_store(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        let (session_tx, _) = broadcast::channel(16);
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
            session_tx,
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Receive a [`SessionExpired`] for every 401 response seen from now on
    pub fn subscribe(&self) -> broadcast::Receiver<SessionExpired> {
        self.session_tx.subscribe()
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn auth_header(&self) -> Option<String> {
        self.tokens.get().map(|t| format!("Bearer {}", t))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(%method, path, "API request");
        let mut req = self.client.request(method, self.url(path));
        if let Some(auth) = self.auth_header() {
            req = req.header(header::AUTHORIZATION, auth);
        }
        req
    }

    fn with_json<B: Serialize + ?Sized>(req: RequestBuilder, body: &B) -> ClientResult<RequestBuilder> {
        Ok(req.body(serde_json::to_vec(body)?))
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| {
                    format!(
                        "HTTP {}: {}",
                        status.as_u16(),
                        status.canonical_reason().unwrap_or_default()
                    )
                });

            if status == StatusCode::UNAUTHORIZED {
                self.expire_session();
            }
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let envelope: ApiResponse<Value> = serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("not an API envelope: {e}")))?;
        let data = envelope
            .into_result()
            .map_err(|message| ClientError::Api { message })?;

        Ok(serde_json::from_value(data.unwrap_or(Value::Null))?)
    }

    fn expire_session(&self) {
        self.tokens.remove();
        warn!("Received 401, session expired and token cleared");
        // nobody listening is fine
        let _ = self.session_tx.send(SessionExpired);
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.request(Method::GET, path)).await
    }

    async fn get_query<T: DeserializeOwned, Q: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let req = self.request(Method::GET, path).query(query);
        self.send(req).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = Self::with_json(self.request(Method::POST, path), body)?;
        self.send(req).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.request(Method::POST, path)).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = Self::with_json(self.request(Method::PUT, path), body)?;
        self.send(req).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = Self::with_json(self.request(Method::PATCH, path), body)?;
        self.send(req).await
    }

    async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.request(Method::PATCH, path)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.request(Method::DELETE, path)).await
    }

    async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<T> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        let req = self.request(Method::POST, path).multipart(form);
        self.send(req).await
    }

    fn token_store(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }
}
