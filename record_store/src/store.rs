
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::trace;

use crate::record::{Record, RecordId, StoredRecord};
use crate::{Error, Result};

struct Table<T> {
    rows: Vec<StoredRecord<T>>,
    // Every id ever handed out, including rows dropped by a reset, so it
    // grows with total inserts even when fresh mode keeps the rows empty.
    issued: HashSet<RecordId>,
}

/// A named, insertion-ordered table of records of one shape.
///
/// Inserts are linearized by the table's write lock. Readers take a
/// snapshot under the read lock and observe either the state before or
/// after any concurrent insert.
pub struct Store<T> {
    name: String,
    table: RwLock<Table<T>>,
    open_handles: AtomicUsize,
}

impl<T: Record> Store<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: RwLock::new(Table {
                rows: vec![],
                issued: HashSet::new(),
            }),
            open_handles: AtomicUsize::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends `record` under a freshly generated id and returns the stored row.
    ///
    /// `None` is rejected with [`Error::InvalidInput`] and leaves the table untouched.
    pub fn insert(&self, record: Option<T>) -> Result<StoredRecord<T>> {
        let record = record.ok_or_else(|| Error::InvalidInput {
            store: self.name.clone(),
        })?;

        let mut table = self.write()?;

        let mut id = RecordId::generate();
        while table.issued.contains(&id) {
            id = RecordId::generate();
        }

        let stored = StoredRecord { id, record };
        table.issued.insert(id);
        table.rows.push(stored.clone());

        trace!("{:<12} - insert {id} into {}", "STORE", self.name);
        Ok(stored)
    }

    pub fn list_all(&self) -> Result<Vec<StoredRecord<T>>> {
        Ok(self.read()?.rows.clone())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.rows.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.rows.is_empty())
    }

    /// Number of [`StoreHandle`](crate::StoreHandle)s currently holding this store.
    pub fn open_handles(&self) -> usize {
        self.open_handles.load(Ordering::SeqCst)
    }

    pub(crate) fn reset(&self) -> Result<()> {
        let mut table = self.write()?;
        table.rows.clear();
        trace!("{:<12} - reset {}", "STORE", self.name);
        Ok(())
    }

    pub(crate) fn acquire(&self) {
        self.open_handles.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn release(&self) {
        self.open_handles.fetch_sub(1, Ordering::SeqCst);
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Table<T>>> {
        self.table.read().map_err(|_| Error::Poisoned {
            store: self.name.clone(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Table<T>>> {
        self.table.write().map_err(|_| Error::Poisoned {
            store: self.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone, PartialEq)]
    struct User {
        user_name: String,
        age: String,
    }

    fn user(name: &str, age: &str) -> User {
        User {
            user_name: name.to_string(),
            age: age.to_string(),
        }
    }

    #[test]
    fn insert_then_list() {
        let store = Store::new("UserDatabase");
        let stored = store.insert(Some(user("Wong", "25"))).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, stored.id);
        assert_eq!(all[0].record, user("Wong", "25"));
    }

    #[test]
    fn list_preserves_insert_order() {
        let store = Store::new("UserDatabase");
        let names = ["a", "b", "c", "d", "e", "f", "g"];
        for name in names {
            store.insert(Some(user(name, "30"))).unwrap();
        }

        let listed: Vec<String> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|r| r.record.user_name)
            .collect();
        assert_eq!(listed, names);
    }

    #[test]
    fn list_on_untouched_store_is_empty() {
        let store: Store<User> = Store::new("UserDatabase");
        assert!(store.list_all().unwrap().is_empty());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn insert_none_is_rejected() {
        let store = Store::new("UserDatabase");
        store.insert(Some(user("Wong", "25"))).unwrap();

        let err = store.insert(None).unwrap_err();
        assert_eq!(err, Error::InvalidInput { store: "UserDatabase".to_string() });
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn ids_are_unique() {
        let store = Store::new("UserDatabase");
        for i in 0..500 {
            store.insert(Some(user("Wong", &i.to_string()))).unwrap();
        }

        let ids: HashSet<RecordId> = store.list_all().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn reset_empties_but_keeps_issued_ids() {
        let store = Store::new("UserDatabase");
        let first = store.insert(Some(user("Wong", "25"))).unwrap();
        store.reset().unwrap();
        assert!(store.is_empty().unwrap());

        let second = store.insert(Some(user("Wong", "26"))).unwrap();
        assert_ne!(first.id, second.id);
        assert!(store.table.read().unwrap().issued.contains(&first.id));
    }

    #[test]
    fn concurrent_inserts_all_land() {
        let store = Store::new("UserDatabase");

        let ids: Vec<RecordId> = (0..64)
            .into_par_iter()
            .map(|i| store.insert(Some(user(&format!("user{i}"), "30"))).unwrap().id)
            .collect();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 64);

        let distinct: HashSet<RecordId> = ids.iter().copied().collect();
        assert_eq!(distinct.len(), 64);
        for stored in &all {
            assert!(distinct.contains(&stored.id));
        }
    }

    #[test]
    fn two_concurrent_inserts() {
        let store = Store::new("UserDatabase");

        let (a, b) = rayon::join(
            || store.insert(Some(user("Wong", "25"))).unwrap(),
            || store.insert(Some(user("Lee", "31"))).unwrap(),
        );
        assert_ne!(a.id, b.id);

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&a));
        assert!(all.contains(&b));
    }
}
