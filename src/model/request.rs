
use crate::{ctx::Ctx, model::{Error, ModelManager, Result}};
use record_store::StoredRecord;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Metadata of an inbound HTTP request, kept as opaque strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedRequest {
    pub headers: String,
    pub method: String,
    pub path: String,
    pub body: String,
}

pub struct CapturedRequestBmc;

impl CapturedRequestBmc {
    pub fn create(
        ctx: &Ctx,
        mm: &ModelManager,
        request: Option<CapturedRequest>,
    ) -> Result<StoredRecord<CapturedRequest>> {
        let request = request.ok_or(Error::InvalidInput { entity: "request" })?;

        let store = mm.open::<CapturedRequest>(mm.request_store())?;
        let captured = store.insert(Some(request))?;

        info!(
            "{:<12} - Request captured - id: {}, {} {} ({})",
            "MODEL", captured.id, captured.record.method, captured.record.path,
            ctx.invocation_id()
        );
        Ok(captured)
    }

    pub fn list(_ctx: &Ctx, mm: &ModelManager) -> Result<Vec<StoredRecord<CapturedRequest>>> {
        let store = mm.open::<CapturedRequest>(mm.request_store())?;
        Ok(store.list_all()?)
    }
}
