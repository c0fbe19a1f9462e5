
use std::any::Any;
use std::collections::HashMap;
use std::ops::Deref;
use std::sync::{Arc, RwLock};

use tracing::trace;

use crate::record::Record;
use crate::store::Store;
use crate::{Error, Result};

type AnyStore = Arc<dyn Any + Send + Sync>;

const REGISTRY: &str = "<registry>";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenMode {
    /// Contents live as long as the registry.
    #[default]
    Shared,
    /// Every open starts from an empty table. Issued ids are still
    /// remembered, so memory grows with total inserts.
    Fresh,
}

/// Process-wide set of named stores.
///
/// The registry lock only guards the name lookup. Each store carries its
/// own lock, so operations on different names never contend.
#[derive(Clone, Default)]
pub struct Registry {
    stores: Arc<RwLock<HashMap<String, AnyStore>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open<T: Record>(&self, name: &str, mode: OpenMode) -> Result<StoreHandle<T>> {
        let store = self.get_or_create::<T>(name)?;

        if mode == OpenMode::Fresh {
            store.reset()?;
        }

        trace!("{:<12} - open {name} ({mode:?})", "REGISTRY");
        Ok(StoreHandle::new(store))
    }

    #[cfg(test)]
    fn contains(&self, name: &str) -> Result<bool> {
        let stores = self.stores.read().map_err(|_| poisoned())?;
        Ok(stores.contains_key(name))
    }

    fn get_or_create<T: Record>(&self, name: &str) -> Result<Arc<Store<T>>> {
        let existing = {
            let stores = self.stores.read().map_err(|_| poisoned())?;
            stores.get(name).cloned()
        };

        let any_store = match existing {
            Some(any_store) => any_store,
            None => {
                let mut stores = self.stores.write().map_err(|_| poisoned())?;
                stores
                    .entry(name.to_string())
                    .or_insert_with(|| Arc::new(Store::<T>::new(name)) as AnyStore)
                    .clone()
            }
        };

        any_store
            .downcast::<Store<T>>()
            .map_err(|_| Error::ShapeMismatch {
                store: name.to_string(),
            })
    }
}

fn poisoned() -> Error {
    Error::Poisoned {
        store: REGISTRY.to_string(),
    }
}

/// Scoped access to one store. Released on drop.
pub struct StoreHandle<T: Record> {
    store: Arc<Store<T>>,
}

impl<T: Record> StoreHandle<T> {
    fn new(store: Arc<Store<T>>) -> Self {
        store.acquire();
        Self { store }
    }

    pub fn close(self) {}
}

impl<T: Record> Deref for StoreHandle<T> {
    type Target = Store<T>;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl<T: Record> Drop for StoreHandle<T> {
    fn drop(&mut self) {
        self.store.release();
        trace!("{:<12} - close {}", "REGISTRY", self.store.name());
    }
}
