
use axum::{extract::{rejection::JsonRejection, State}, Json};
use record_store::StoredRecord;
use tracing::debug;

use crate::{ctx::Ctx, model::{user::{User, UserBmc, UserForCreate}, ModelManager}};
use crate::web::Result;

pub async fn create_user(
    ctx: Ctx,
    State(mm): State<ModelManager>,
    payload: core::result::Result<Json<UserForCreate>, JsonRejection>,
) -> Result<Json<StoredRecord<User>>> {
    debug!("{:<12} - create_user", "HANDLER");

    // An unreadable body reaches the model as an absent payload.
    let user_c = match payload {
        Ok(Json(user_c)) => Some(user_c),
        Err(rejection) => {
            debug!("{:<12} - create_user - {}", "HANDLER", rejection.body_text());
            None
        }
    };

    let user = UserBmc::create(&ctx, &mm, user_c)?;
    Ok(Json(user))
}

pub async fn list_users(
    ctx: Ctx,
    State(mm): State<ModelManager>,
) -> Result<Json<Vec<StoredRecord<User>>>> {
    debug!("{:<12} - list_users", "HANDLER");

    let users = UserBmc::list(&ctx, &mm)?;
    Ok(Json(users))
}
