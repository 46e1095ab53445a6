//! Vec-backed repository guarded by a single `RwLock`.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use super::error::{RepositoryError, Result};
use super::{Identified, Repository};
use crate::spec::{Id, Specification};

/// How [`InMemoryRepository::save`] assigns ids to unsaved items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// `id = number of stored items + 1`.
    ///
    /// After a deletion this can hand out an id that is still in use; the
    /// collision is logged at `warn` and the item is stored anyway.
    #[default]
    CountPlusOne,
    /// A monotonic counter that never reuses an id. Pre-supplied ids push the
    /// counter past them.
    ///
    /// The counter stops at `Id::MAX`: once that id has been handed out or
    /// supplied, every further assignment is `Id::MAX` again and is logged
    /// at `warn` as exhausted or colliding.
    Sequence,
}

/// Repository configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepositoryConfig {
    pub id_strategy: IdStrategy,
}

#[derive(Debug)]
struct Store<T> {
    items: Vec<T>,
    next_id: Id,
}

impl<T: Identified> Store<T> {
    fn assign_id(&mut self, strategy: IdStrategy) -> Id {
        let id = match strategy {
            IdStrategy::CountPlusOne => self.items.len() as Id + 1,
            IdStrategy::Sequence => {
                let id = self.next_id;
                match id.checked_add(1) {
                    Some(next) => self.next_id = next,
                    None => warn!(id, "id sequence exhausted"),
                }
                id
            }
        };
        if self.position(id).is_some() {
            warn!(id, "assigned id collides with a stored item");
        }
        id
    }

    fn observe(&mut self, id: Id) {
        self.next_id = self.next_id.max(id.saturating_add(1));
    }

    fn position(&self, id: Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == Some(id))
    }
}

/// An in-memory [`Repository`] preserving insertion order.
///
/// Reads share the lock; writes take it exclusively. Specification queries
/// copy the items and release the lock before evaluating, so a predicate
/// may read or write the same repository; it sees the items as they were
/// when the query started. The repository is `Send + Sync` whenever `T` is,
/// so it can be shared behind an `Arc`.
///
/// # Example
///
/// ```rust
/// use quarry::prelude::*;
///
/// let repo = InMemoryRepository::builder()
///     .id_strategy(IdStrategy::Sequence)
///     .build();
///
/// let first = repo.save(Entity::new("first"));
/// repo.delete(&first);
/// let second = repo.save(Entity::new("second"));
///
/// // Sequence ids are never reused.
/// assert_eq!(first.id, Some(1));
/// assert_eq!(second.id, Some(2));
/// ```
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    store: RwLock<Store<T>>,
    config: RepositoryConfig,
}

impl<T: Identified> InMemoryRepository<T> {
    /// Creates an empty repository with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RepositoryConfig::default())
    }

    /// Creates an empty repository with `config`.
    pub fn with_config(config: RepositoryConfig) -> Self {
        InMemoryRepository {
            store: RwLock::new(Store {
                items: Vec::new(),
                next_id: 1,
            }),
            config,
        }
    }

    pub fn builder() -> InMemoryRepositoryBuilder<T> {
        InMemoryRepositoryBuilder::default()
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    // A panic elsewhere cannot leave the Vec half-written, so poisoning is
    // recovered rather than propagated.
    fn read(&self) -> RwLockReadGuard<'_, Store<T>> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store<T>> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    // Specification queries evaluate against a copy taken under the read
    // lock, so predicates may call back into the repository.
    fn snapshot(&self) -> Vec<T> {
        self.read().items.clone()
    }
}

impl<T: Identified> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identified> Repository for InMemoryRepository<T> {
    type Item = T;

    fn save(&self, item: T) -> T {
        let mut store = self.write();
        let item = match item.id() {
            Some(id) => {
                store.observe(id);
                item
            }
            None => {
                let id = store.assign_id(self.config.id_strategy);
                item.with_id(id)
            }
        };
        store.items.push(item.clone());
        debug!(id = ?item.id(), len = store.items.len(), "saved item");
        item
    }

    fn find_by_id(&self, id: Id) -> Option<T> {
        let store = self.read();
        store.position(id).map(|index| store.items[index].clone())
    }

    fn find_all(&self) -> Vec<T> {
        self.snapshot()
    }

    fn find_all_by<S>(&self, spec: &S) -> Vec<T>
    where
        S: Specification<T> + ?Sized,
    {
        let snapshot = self.snapshot();
        let scanned = snapshot.len();
        let matches: Vec<T> = snapshot
            .into_iter()
            .filter(|item| spec.is_satisfied_by(item))
            .collect();
        debug!(
            spec = %spec.describe(),
            scanned,
            matched = matches.len(),
            "find_all_by"
        );
        matches
    }

    fn find_one<S>(&self, spec: &S) -> Option<T>
    where
        S: Specification<T> + ?Sized,
    {
        let found = self
            .snapshot()
            .into_iter()
            .find(|item| spec.is_satisfied_by(item));
        debug!(spec = %spec.describe(), found = found.is_some(), "find_one");
        found
    }

    fn delete(&self, item: &T) {
        match item.id() {
            Some(id) => self.delete_by_id(id),
            None => debug!("delete of unsaved item ignored"),
        }
    }

    fn delete_by_id(&self, id: Id) {
        let mut store = self.write();
        let before = store.items.len();
        store.items.retain(|item| item.id() != Some(id));
        debug!(id, removed = before - store.items.len(), "deleted by id");
    }

    fn update(&self, item: T) -> Result<T> {
        let id = item.id().ok_or(RepositoryError::NotFound { id: None })?;
        let mut store = self.write();
        let index = store
            .position(id)
            .ok_or(RepositoryError::NotFound { id: Some(id) })?;
        store.items[index] = item.clone();
        debug!(id, index, "updated item");
        Ok(item)
    }

    fn count(&self) -> usize {
        self.read().items.len()
    }

    fn count_by<S>(&self, spec: &S) -> usize
    where
        S: Specification<T> + ?Sized,
    {
        let count = self
            .snapshot()
            .iter()
            .filter(|item| spec.is_satisfied_by(item))
            .count();
        debug!(spec = %spec.describe(), matched = count, "count_by");
        count
    }

    fn exists_by_id(&self, id: Id) -> bool {
        self.read().position(id).is_some()
    }
}

/// Builder for [`InMemoryRepository`].
///
/// Seed items are saved in order through the configured id strategy.
#[derive(Debug)]
pub struct InMemoryRepositoryBuilder<T> {
    config: RepositoryConfig,
    seed: Vec<T>,
}

impl<T> Default for InMemoryRepositoryBuilder<T> {
    fn default() -> Self {
        InMemoryRepositoryBuilder {
            config: RepositoryConfig::default(),
            seed: Vec::new(),
        }
    }
}

impl<T: Identified> InMemoryRepositoryBuilder<T> {
    pub fn config(mut self, config: RepositoryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn id_strategy(mut self, id_strategy: IdStrategy) -> Self {
        self.config.id_strategy = id_strategy;
        self
    }

    /// Adds items to save when the repository is built.
    pub fn seed<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.seed.extend(items);
        self
    }

    pub fn build(self) -> InMemoryRepository<T> {
        let repo = InMemoryRepository::with_config(self.config);
        for item in self.seed {
            repo.save(item);
        }
        repo
    }
}
