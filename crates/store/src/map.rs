use std::collections::HashMap;
use std::sync::RwLock;

use stockroom_core::{DomainError, DomainResult, Entity};

/// Keyed in-memory map for one entity type.
///
/// Thin wrapper around `RwLock<HashMap>` so every map in the store handles
/// locking the same way. Values are cloned out; no lock is ever held across
/// a call boundary.
#[derive(Debug)]
pub(crate) struct EntityMap<T: Entity> {
    inner: RwLock<HashMap<T::Id, T>>,
}

impl<T: Entity + Clone> EntityMap<T> {
    pub(crate) fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub(crate) fn get(&self, id: &T::Id) -> Option<T> {
        let map = self.inner.read().ok()?;
        map.get(id).cloned()
    }

    pub(crate) fn insert(&self, entity: T) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(entity.id().clone(), entity);
        }
    }

    pub(crate) fn list(&self) -> Vec<T> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        map.values().cloned().collect()
    }

    pub(crate) fn remove(&self, id: &T::Id) -> bool {
        match self.inner.write() {
            Ok(mut map) => map.remove(id).is_some(),
            Err(_) => false,
        }
    }

    /// Mutate the entity under the write lock; returns the updated clone.
    pub(crate) fn update(&self, id: &T::Id, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut map = self.inner.write().ok()?;
        let entity = map.get_mut(id)?;
        apply(entity);
        Some(entity.clone())
    }

    /// Check-and-mutate under a single write lock.
    ///
    /// The closure must mutate only on its success path; on error the map is
    /// left exactly as it was.
    pub(crate) fn try_update<R>(
        &self,
        id: &T::Id,
        f: impl FnOnce(&mut T) -> DomainResult<R>,
    ) -> DomainResult<R> {
        let mut map = match self.inner.write() {
            Ok(m) => m,
            Err(_) => return Err(DomainError::not_found()),
        };
        let entity = map.get_mut(id).ok_or_else(DomainError::not_found)?;
        f(entity)
    }
}

impl<T: Entity + Clone> Default for EntityMap<T> {
    fn default() -> Self {
        Self::new()
    }
}
