//! Response pipeline with a single failure branch.
//!
//! # Design
//! A call moves through fixed stages in order: send, check status, decode the
//! body as JSON, extract one named field. The first failing stage
//! short-circuits the rest and control passes to `recover`, which yields the
//! fallback value. Every call therefore resolves to exactly one `Outcome`.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Value produced by the failure branch.
pub const FALLBACK: &str = ":(";

/// Response field extracted on success.
pub const MESSAGE_FIELD: &str = "message";

/// How a call resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The extracted field from a successful response.
    Success(String),
    /// The fallback value from the failure branch.
    Fallback(String),
}

impl Outcome {
    pub fn value(&self) -> &str {
        match self {
            Outcome::Success(v) | Outcome::Fallback(v) => v,
        }
    }

    pub fn into_value(self) -> String {
        match self {
            Outcome::Success(v) | Outcome::Fallback(v) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    field: String,
    fallback: String,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            field: MESSAGE_FIELD.to_string(),
            fallback: FALLBACK.to_string(),
        }
    }
}

impl Pipeline {
    pub fn new(field: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            fallback: fallback.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Send `request` once and run the response through every stage.
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    pub async fn run<T: Transport>(&self, transport: &T, request: HttpRequest) -> Outcome {
        let result = match transport.send(request).await {
            Ok(response) => self.parse(response),
            Err(err) => Err(err),
        };
        self.settle(result)
    }

    /// Success-path stages applied to an already received response.
    pub fn parse(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response)?;
        let body = decode_body(&response.body)?;
        extract_field(body, &self.field)
    }

    pub fn settle(&self, result: Result<String, ApiError>) -> Outcome {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => self.recover(err),
        }
    }

    /// The failure branch. The error is logged and dropped.
    pub fn recover(&self, err: ApiError) -> Outcome {
        debug!(error = %err, "request failed, resolving to fallback");
        Outcome::Fallback(self.fallback.clone())
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode_body(body: &str) -> Result<Value, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

fn extract_field(mut body: Value, field: &str) -> Result<String, ApiError> {
    match body.get_mut(field).map(Value::take) {
        Some(Value::String(value)) => Ok(value),
        _ => Err(ApiError::MissingField(field.to_string())),
    }
}
