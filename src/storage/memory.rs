//! In-memory repository.

use crate::domain::generic::{Persistable, Repository};
use crate::domain::resource::ResourceError;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

/// A `Repository` over a key-ordered map. Writes are serialized by the lock; the last save
/// for a key wins.
pub struct MemoryRepository<P> {
    objects: RwLock<BTreeMap<String, P>>,
}

impl<P> MemoryRepository<P> {
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P> Default for MemoryRepository<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Persistable + Clone> Repository<P> for MemoryRepository<P> {
    fn lookup(&self, key: &str) -> Option<P> {
        let objects = self.objects.read().unwrap_or_else(PoisonError::into_inner);
        objects.get(key).cloned()
    }

    fn list(&self) -> Vec<P> {
        let objects = self.objects.read().unwrap_or_else(PoisonError::into_inner);
        objects.values().cloned().collect()
    }

    fn save(&self, object: &P) -> Result<(), ResourceError> {
        let mut objects = self
            .objects
            .write()
            .map_err(|_| ResourceError::generic("repository lock poisoned"))?;
        objects.insert(object.key(), object.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ResourceError> {
        let mut objects = self
            .objects
            .write()
            .map_err(|_| ResourceError::generic("repository lock poisoned"))?;
        objects.remove(key);
        Ok(())
    }
}
