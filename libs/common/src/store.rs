//! In-memory entity store
//!
//! Each entity type gets its own store: a keyed mapping plus an id counter,
//! both behind a single lock so that concurrent creates never hand out the
//! same id.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// A value that can live in an [`EntityStore`]
pub trait Entity: Clone + Send + Sync + 'static {
    /// Display name used in error messages
    const NAME: &'static str;

    /// Returns the entity id
    fn id(&self) -> i64;

    /// Overwrites the entity id
    fn set_id(&mut self, id: i64);
}

#[derive(Debug)]
struct StoreInner<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

/// Entity store
///
/// Ids are assigned from a counter starting at 1 and are never reused.
/// Rows are kept ordered by id, which is also their insertion order.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    inner: Arc<RwLock<StoreInner<T>>>,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Create a store holding fixed rows under their own ids
    ///
    /// The counter continues after the highest seeded id.
    pub fn seeded(rows: impl IntoIterator<Item = T>) -> Self {
        let rows: BTreeMap<i64, T> = rows.into_iter().map(|row| (row.id(), row)).collect();
        let next_id = rows.keys().next_back().map_or(1, |max| max + 1);

        Self {
            inner: Arc::new(RwLock::new(StoreInner { rows, next_id })),
        }
    }

    /// Insert a new row under the next id and return it
    pub async fn create(&self, mut value: T) -> T {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        value.set_id(id);
        inner.rows.insert(id, value.clone());
        debug!("Created {} {}", T::NAME, id);

        value
    }

    /// Get all rows in insertion order
    pub async fn list(&self) -> Vec<T> {
        self.inner.read().await.rows.values().cloned().collect()
    }

    /// Get a row by id
    pub async fn get(&self, id: i64) -> StoreResult<T> {
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: T::NAME,
                id,
            })
    }

    /// Replace the row stored under `id`
    ///
    /// The stored value always carries `id`, whatever id the payload had.
    pub async fn update(&self, id: i64, mut value: T) -> StoreResult<T> {
        let mut inner = self.inner.write().await;
        let slot = inner.rows.get_mut(&id).ok_or(StoreError::NotFound {
            entity: T::NAME,
            id,
        })?;

        value.set_id(id);
        *slot = value.clone();
        debug!("Updated {} {}", T::NAME, id);

        Ok(value)
    }

    /// Remove the row stored under `id`
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        match inner.rows.remove(&id) {
            Some(_) => {
                debug!("Deleted {} {}", T::NAME, id);
                Ok(())
            }
            None => Err(StoreError::NotFound {
                entity: T::NAME,
                id,
            }),
        }
    }

    /// Number of rows currently stored
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
