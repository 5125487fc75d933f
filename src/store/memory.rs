use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use super::{Record, RecordStore, StoreError};

/// Process-local store. Not durable.
pub struct InMemoryStore<T> {
    records: RwLock<BTreeMap<i64, T>>,
    next_id: AtomicI64,
}

impl<T: Record> InMemoryStore<T> {
    pub fn new(first_id: i64) -> Self {
        Self::seeded(Vec::new(), first_id)
    }

    /// Start with `records` already in place. The id counter starts at
    /// `first_id` or just past the largest seeded id, whichever is higher.
    pub fn seeded(records: impl IntoIterator<Item = T>, first_id: i64) -> Self {
        let records: BTreeMap<i64, T> = records.into_iter().map(|r| (r.id(), r)).collect();
        let first_id = records
            .keys()
            .next_back()
            .map_or(first_id, |last| first_id.max(last + 1));
        Self {
            records: RwLock::new(records),
            next_id: AtomicI64::new(first_id),
        }
    }
}

impl<T: Record> RecordStore<T> for InMemoryStore<T> {
    fn get(&self, id: i64) -> Result<Option<T>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.get(&id).cloned())
    }

    fn all(&self) -> Result<Vec<T>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.values().cloned().collect())
    }

    fn filter(&self, predicate: &dyn Fn(&T) -> bool) -> Result<Vec<T>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.values().filter(|r| predicate(r)).cloned().collect())
    }

    fn next_id(&self) -> Result<i64, StoreError> {
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    fn put(&self, record: T) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        records.insert(record.id(), record);
        Ok(())
    }

    fn modify(&self, id: i64, change: &mut dyn FnMut(&mut T)) -> Result<Option<T>, StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        Ok(records.get_mut(&id).map(|record| {
            change(record);
            record.clone()
        }))
    }
}
