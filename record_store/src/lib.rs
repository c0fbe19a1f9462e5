//! Volatile, append-only record tables keyed by generated ids.
//!
//! A [`Registry`] owns every named [`Store`] for the lifetime of the
//! process. Callers open a store by name for the span of one logical
//! operation and get back a [`StoreHandle`], which releases itself on drop.

mod error;
mod record;
mod registry;
mod store;

pub use self::error::{Error, Result};
pub use self::record::{Record, RecordId, StoredRecord};
pub use self::registry::{OpenMode, Registry, StoreHandle};
pub use self::store::Store;
