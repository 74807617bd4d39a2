//! Request builder and the two registry invocation points.
//!
//! # Design
//! `RegistryClient` holds only a `base_url` and carries no state between
//! calls. `build_*` methods produce an `HttpRequest`; `parse_message`
//! consumes an `HttpResponse`. A blocking host can drive those two halves
//! itself. The async `register` / `register_error` methods run the same
//! halves through a `Pipeline` over an injected `Transport` and always
//! resolve to a string.

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::pipeline::{Outcome, Pipeline};
use crate::transport::Transport;
use crate::types::{Payload, Registration};

pub const REGISTER_PATH: &str = "/register";

/// Endpoint that does not exist on the registry; requests to it always take
/// the failure branch.
pub const REGISTER_ERROR_PATH: &str = "/register-error";

/// Stateless client for the registry API.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    base_url: String,
}

impl RegistryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// JSON POST of `payload` to `path` under the base URL.
    pub fn build_post(&self, path: &str, payload: &Payload) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_register(&self, registration: &Registration) -> Result<HttpRequest, ApiError> {
        self.build_post(REGISTER_PATH, &Payload::from(registration))
    }

    pub fn build_register_error(&self, registration: &Registration) -> Result<HttpRequest, ApiError> {
        self.build_post(REGISTER_ERROR_PATH, &Payload::from(registration))
    }

    /// Extract the `message` field from a registry response.
    pub fn parse_message(&self, response: HttpResponse) -> Result<String, ApiError> {
        Pipeline::default().parse(response)
    }

    /// Submit `registration` to `/register`. Resolves to the response's
    /// `message`, or `":("` on any failure.
    pub async fn register<T: Transport>(&self, transport: &T, registration: &Registration) -> String {
        self.register_outcome(transport, registration).await.into_value()
    }

    /// Submit `registration` to `/register-error`, which the registry does
    /// not serve. Resolves to `":("`.
    pub async fn register_error<T: Transport>(&self, transport: &T, registration: &Registration) -> String {
        self.register_error_outcome(transport, registration).await.into_value()
    }

    pub async fn register_outcome<T: Transport>(&self, transport: &T, registration: &Registration) -> Outcome {
        self.submit(transport, REGISTER_PATH, &Payload::from(registration)).await
    }

    pub async fn register_error_outcome<T: Transport>(
        &self,
        transport: &T,
        registration: &Registration,
    ) -> Outcome {
        self.submit(transport, REGISTER_ERROR_PATH, &Payload::from(registration)).await
    }

    /// POST `payload` to `path` and run the response through the default
    /// pipeline.
    pub async fn submit<T: Transport>(&self, transport: &T, path: &str, payload: &Payload) -> Outcome {
        let pipeline = Pipeline::default();
        debug!(path, fields = payload.len(), "submitting payload");
        match self.build_post(path, payload) {
            Ok(request) => pipeline.run(transport, request).await,
            Err(err) => pipeline.recover(err),
        }
    }
}
