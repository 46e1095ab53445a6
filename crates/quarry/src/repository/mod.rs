//! Repository trait and the in-memory implementation.
//!
//! A [`Repository`] owns an ordered collection of items and answers
//! specification queries against it. Results always come back in insertion
//! order, and every item handed out is a copy: mutating a returned value never
//! touches the stored one.
//!
//! # Example
//!
//! ```rust
//! use quarry::prelude::*;
//!
//! let repo = InMemoryRepository::new();
//! let saved = repo.save(Entity::builder().name("Entity 1").active(true).build());
//! assert_eq!(saved.id, Some(1));
//!
//! let active = repo.find_all_by(&Active);
//! assert_eq!(active, vec![saved]);
//! ```

mod error;
mod in_memory;

pub use error::{RepositoryError, Result};
pub use in_memory::{IdStrategy, InMemoryRepository, InMemoryRepositoryBuilder, RepositoryConfig};

use crate::spec::{HasId, Id, Specification};

/// An item a repository can store: identifiable, copyable, and able to take
/// an assigned id.
pub trait Identified: HasId + Clone {
    /// Returns `self` carrying `id`.
    fn with_id(self, id: Id) -> Self;
}

/// Storage with specification-based querying.
///
/// Implementations are synchronous. Lookups that find nothing return `None`
/// or an empty `Vec`; only [`update`](Repository::update) can fail.
pub trait Repository {
    /// The stored item type.
    type Item: Identified;

    /// Stores `item`, assigning an id when it has none, and returns the
    /// stored record.
    fn save(&self, item: Self::Item) -> Self::Item;

    /// Returns the first item whose id equals `id`.
    fn find_by_id(&self, id: Id) -> Option<Self::Item>;

    /// Returns every item in insertion order.
    fn find_all(&self) -> Vec<Self::Item>;

    /// Returns every item satisfying `spec`, in insertion order.
    fn find_all_by<S>(&self, spec: &S) -> Vec<Self::Item>
    where
        S: Specification<Self::Item> + ?Sized;

    /// Returns the first item satisfying `spec`.
    fn find_one<S>(&self, spec: &S) -> Option<Self::Item>
    where
        S: Specification<Self::Item> + ?Sized;

    /// Removes every item carrying the same id as `item`. Removing an item
    /// that is not stored is a no-op.
    fn delete(&self, item: &Self::Item);

    /// Removes every item whose id equals `id`. Idempotent.
    fn delete_by_id(&self, id: Id);

    /// Replaces the stored item carrying `item`'s id, keeping its position.
    ///
    /// Fails with [`RepositoryError::NotFound`] when no stored item has that
    /// id or `item` has none; the repository is left unchanged.
    fn update(&self, item: Self::Item) -> Result<Self::Item>;

    /// Returns the number of stored items.
    fn count(&self) -> usize;

    /// Returns the number of items satisfying `spec`.
    fn count_by<S>(&self, spec: &S) -> usize
    where
        S: Specification<Self::Item> + ?Sized;

    /// Returns `true` if an item with `id` is stored.
    fn exists_by_id(&self, id: Id) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Returns `true` if nothing is stored.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
