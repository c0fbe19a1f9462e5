
use std::{net::SocketAddr, time::Duration};

use record_store::{OpenMode, StoredRecord};

use crate::config::Config;
use crate::ctx::Ctx;
use crate::model::user::{User, UserBmc, UserForCreate};
use crate::model::{self, ModelManager};

pub fn test_config() -> Config {
    Config {
        ADDR: SocketAddr::from(([127, 0, 0, 1], 0)),
        USER_STORE: "UserDatabase".to_string(),
        REQUEST_STORE: "RequestDatabase".to_string(),
        TIMER_PERIOD: Duration::from_secs(30),
        STORE_OPEN_MODE: OpenMode::Shared,
    }
}

/// A model manager over its own, empty registry.
pub fn init_test() -> ModelManager {
    ModelManager::new(&test_config())
}

pub fn seed_users(
    ctx: &Ctx,
    mm: &ModelManager,
    ages: &[&str],
) -> model::Result<Vec<StoredRecord<User>>> {
    ages.iter()
        .map(|age| {
            let user_c = UserForCreate {
                user_name: "Wong".to_string(),
                age: age.to_string(),
            };
            UserBmc::create(ctx, mm, Some(user_c))
        })
        .collect()
}
