
use std::ops::Range;

use crate::{ctx::Ctx, model::{Error, ModelManager, Result}};
use rand::Rng;
use record_store::StoredRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const DEFAULT_USER_NAME: &str = "Wong";
pub const SYNTHESIZED_AGE: Range<u32> = 20..40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_name: String,
    pub age: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForCreate {
    pub user_name: String,
    pub age: String,
}

impl UserForCreate {
    /// Default payload used when a create runs without explicit input.
    pub fn synthesized() -> Self {
        Self::synthesized_with(&mut rand::rng())
    }

    pub fn synthesized_with<R: Rng>(rng: &mut R) -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            age: rng.random_range(SYNTHESIZED_AGE).to_string(),
        }
    }
}

impl From<UserForCreate> for User {
    fn from(value: UserForCreate) -> Self {
        User {
            user_name: value.user_name,
            age: value.age,
        }
    }
}

pub struct UserBmc;

impl UserBmc {
    pub fn create(
        ctx: &Ctx,
        mm: &ModelManager,
        user_c: Option<UserForCreate>,
    ) -> Result<StoredRecord<User>> {
        // Rejected before the open, which resets the store in fresh mode.
        let user_c = user_c.ok_or(Error::InvalidInput { entity: "user" })?;

        let store = mm.open::<User>(mm.user_store())?;
        let user = store.insert(Some(User::from(user_c)))?;

        info!(
            "{:<12} - New user added - id: {}, userName: {}, age: {} ({:?} {})",
            "MODEL", user.id, user.record.user_name, user.record.age,
            ctx.trigger(), ctx.invocation_id()
        );
        Ok(user)
    }

    pub fn list(ctx: &Ctx, mm: &ModelManager) -> Result<Vec<StoredRecord<User>>> {
        let store = mm.open::<User>(mm.user_store())?;
        let users = store.list_all()?;

        if !users.is_empty() {
            info!("{:<12} - Records in In-Memory Database: {} ({})", "MODEL", users.len(), ctx.invocation_id());
        }
        for user in &users {
            debug!(
                "{:<12} - User Id: {}, User Name: {}, User Age: {}",
                "MODEL", user.id, user.record.user_name, user.record.age
            );
        }

        Ok(users)
    }
}
