//! Registry submission client.
//!
//! # Overview
//! Submits a key/value payload as a JSON POST and resolves to a single
//! string: the response's `message` field, or `":("` when anything along the
//! way fails.
//!
//! # Design
//! - `RegistryClient` is stateless; it holds only `base_url`.
//! - `build_*` produces an `HttpRequest`, `parse_message` consumes an
//!   `HttpResponse`, so a blocking host can execute the round-trip itself.
//! - `Pipeline` runs the async path over an injected `Transport` and funnels
//!   every failure into one fallback branch.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod pipeline;
pub mod transport;
pub mod types;

pub use client::{RegistryClient, REGISTER_ERROR_PATH, REGISTER_PATH};
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use pipeline::{Outcome, Pipeline, FALLBACK, MESSAGE_FIELD};
pub use transport::{HttpTransport, Transport};
pub use types::{Payload, Registration};
