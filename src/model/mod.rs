
mod error;
pub mod request;
pub mod user;

use record_store::{OpenMode, Record, Registry, StoreHandle};

use crate::config::Config;

pub use self::error::{Error, Result};

/// Owns the process-wide store registry. Cheap to clone; every clone
/// sees the same stores.
#[derive(Clone)]
pub struct ModelManager {
    registry: Registry,
    user_store: String,
    request_store: String,
    open_mode: OpenMode,
}

impl ModelManager {
    pub fn new(config: &Config) -> Self {
        ModelManager {
            registry: Registry::new(),
            user_store: config.USER_STORE.clone(),
            request_store: config.REQUEST_STORE.clone(),
            open_mode: config.STORE_OPEN_MODE,
        }
    }

    pub(in crate::model) fn open<T: Record>(&self, name: &str) -> Result<StoreHandle<T>> {
        Ok(self.registry.open(name, self.open_mode)?)
    }

    pub(in crate::model) fn user_store(&self) -> &str {
        &self.user_store
    }

    pub(in crate::model) fn request_store(&self) -> &str {
        &self.request_store
    }
}
