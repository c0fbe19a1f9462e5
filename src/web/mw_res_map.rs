
use crate::ctx::Ctx;
use crate::web;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, info, warn};

pub async fn mw_response_map(
    ctx: Ctx,
    uri: Uri,
    req_method: Method,
    res: Response,
) -> Response {
    debug!("{:<12} - mw_response_map", "RES_MAPPER");

    let req_uuid = ctx.invocation_id();
    let web_error = res.extensions().get::<web::Error>();
    let client_status_error = web_error.map(|se| se.client_status_and_error());

    let error_response =
        client_status_error
        .as_ref()
        .map(|(status_code, client_error)| {
            let client_error_body = json!({
                "error": {
                    "type": client_error.as_ref(),
                    "req_uuid": req_uuid.to_string(),
                }
            });
            debug!("CLIENT ERROR BODY:\n{client_error_body}");
            (*status_code, Json(client_error_body)).into_response()
        });

    match web_error {
        Some(e) => warn!("{:<12} - {req_method} {uri} - {req_uuid} - {e}", "RES_MAPPER"),
        None => info!("{:<12} - {req_method} {uri} - {req_uuid} - {}", "RES_MAPPER", res.status()),
    }

    error_response.unwrap_or(res)
}
