use crate::ctx::Ctx;
use crate::web::{Error, Result};
use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

pub async fn mw_ctx_resolve(mut req: Request, next: Next) -> Response {
    let ctx = Ctx::http();
    debug!("{:<12} - mw_ctx_resolve - {}", "MIDDLEWARE", ctx.invocation_id());

    req.extensions_mut().insert(ctx);
    next.run(req).await
}

impl<S: Send + Sync> FromRequestParts<S> for Ctx {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        debug!("{:<12} - Ctx", "EXTRACTOR");
        parts
            .extensions
            .get::<Ctx>()
            .cloned()
            .ok_or(Error::CtxNotInRequestExt)
    }
}
