//! Fake registry used to exercise the client end-to-end.
//!
//! # Routes
//! - `POST /register`: stores the registration and answers
//!   `{"message": "<firstName> added: <registryMessage>"}`. A blank
//!   `firstName` gets `400 {"error": ...}`.
//! - `GET /registrations`: stored registrations in insertion order.
//! - Everything else, including `/register-error`, is 404.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};
use uuid::Uuid;

pub mod config;

pub use config::ServerConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: Uuid,
    pub first_name: String,
    pub registry_message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub first_name: String,
    pub registry_message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterReply {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
}

pub type Db = Arc<RwLock<Vec<Registration>>>;

/// `/register-error` is intentionally unrouted and answers 404.
pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/register", post(register))
        .route("/registrations", get(list_registrations))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub fn confirmation(first_name: &str, registry_message: &str) -> String {
    format!("{first_name} added: {registry_message}")
}

async fn register(
    State(db): State<Db>,
    Json(input): Json<RegisterInput>,
) -> Result<Json<RegisterReply>, (StatusCode, Json<ErrorReply>)> {
    if input.first_name.trim().is_empty() {
        warn!("rejected registration with blank firstName");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorReply {
                error: "firstName must not be blank".to_string(),
            }),
        ));
    }

    let registration = Registration {
        id: Uuid::new_v4(),
        first_name: input.first_name,
        registry_message: input.registry_message,
    };
    let message = confirmation(&registration.first_name, &registration.registry_message);
    info!(id = %registration.id, "registered");
    db.write().await.push(registration);
    Ok(Json(RegisterReply { message }))
}

async fn list_registrations(State(db): State<Db>) -> Json<Vec<Registration>> {
    Json(db.read().await.clone())
}
