use axum::{routing::{get, post}, Router};
use request_rest::{capture_request, list_requests};
use user_rest::{create_user, list_users};

use crate::model::ModelManager;

mod request_rest;
mod user_rest;

pub use request_rest::WELCOME_MESSAGE;

/// Resource routes plus the `/api/<FunctionName>` aliases.
pub fn routes(mm: ModelManager) -> Router {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route("/api/AddUser", post(create_user))
        .route("/api/GetUser", get(list_users))
        .route("/requests", post(capture_request).get(list_requests))
        .route("/api/AddRequest", post(capture_request))
        .route("/api/GetRequest", get(list_requests))
        .with_state(mm)
}
