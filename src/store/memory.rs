//! Shared in-memory record store.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::store::resource::Resource;

/// Errors returned by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{label} with id {id} not found")]
    NotFound { label: &'static str, id: u64 },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered, process-lifetime collection of records.
///
/// Cloning is cheap and every clone sees the same records.
#[derive(Clone)]
pub struct ResourceStore<R> {
    records: Arc<Mutex<Vec<R>>>,
}

impl<R: Resource> Default for ResourceStore<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: Resource> ResourceStore<R> {
    /// Create a store holding `records` in the given order.
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    /// Create a store populated with the resource's sample records.
    pub fn seeded() -> Self {
        Self::new(R::seed())
    }

    // Every mutation is a single Vec operation, so a poisoned lock still
    // guards a consistent sequence.
    fn lock(&self) -> MutexGuard<'_, Vec<R>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn not_found(id: u64) -> StoreError {
        StoreError::NotFound {
            label: R::LABEL,
            id,
        }
    }

    /// All records in current order.
    pub fn list(&self) -> Vec<R> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn find_by_id(&self, id: u64) -> StoreResult<R> {
        self.lock()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    /// Append a new record with id `max(ids) + 1`, or 1 when empty.
    pub fn insert(&self, fields: R::Fields) -> R {
        let mut records = self.lock();
        let id = records.iter().map(R::id).max().unwrap_or(0) + 1;
        let record = R::from_fields(id, fields);
        records.push(record.clone());
        record
    }

    /// Overwrite every field of record `id` except the id itself.
    pub fn replace(&self, id: u64, fields: R::Fields) -> StoreResult<R> {
        let mut records = self.lock();
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        *slot = R::from_fields(id, fields);
        Ok(slot.clone())
    }

    /// Overwrite only the fields supplied in `patch`.
    pub fn patch(&self, id: u64, patch: R::Patch) -> StoreResult<R> {
        let mut records = self.lock();
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        record.apply_patch(patch);
        Ok(record.clone())
    }

    /// Remove record `id`, returning it.
    pub fn remove(&self, id: u64) -> StoreResult<R> {
        let mut records = self.lock();
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        Ok(records.remove(index))
    }
}
