
mod error;
pub mod mw_ctx;
pub mod mw_res_map;
pub mod rest;

pub use self::error::{Error, Result};

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::model::ModelManager;
use crate::web::mw_ctx::mw_ctx_resolve;
use crate::web::mw_res_map::mw_response_map;

pub fn routes_all(mm: ModelManager) -> Router {
    Router::new()
        .merge(rest::routes(mm))
        .layer(middleware::map_response(mw_response_map))
        .layer(middleware::from_fn(mw_ctx_resolve))
        .layer(TraceLayer::new_for_http())
}
