//! Record persistence. Everything above this layer talks to a
//! [`RecordStore`], so the in-memory map can be swapped for a real engine.

mod memory;

pub use memory::InMemoryStore;

/// A record keyed by a numeric id.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record store lock was poisoned")]
    Poisoned,
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub trait RecordStore<T: Record>: Send + Sync {
    fn get(&self, id: i64) -> Result<Option<T>, StoreError>;

    /// Every record, in ascending id order.
    fn all(&self) -> Result<Vec<T>, StoreError>;

    fn filter(&self, predicate: &dyn Fn(&T) -> bool) -> Result<Vec<T>, StoreError>;

    /// Reserve the next unused id. Ids are never handed out twice.
    fn next_id(&self) -> Result<i64, StoreError>;

    /// Insert or overwrite the record at `record.id()`.
    fn put(&self, record: T) -> Result<(), StoreError>;

    /// Apply `change` to the record at `id` in place and return the result.
    /// Returns `None` without side effects when nothing is stored there.
    fn modify(&self, id: i64, change: &mut dyn FnMut(&mut T)) -> Result<Option<T>, StoreError>;
}
