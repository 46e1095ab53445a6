//! # Quarry - Specification-driven querying for in-memory collections
//!
//! Quarry pairs the [`spec`] algebra with a repository that evaluates
//! specifications against stored items:
//!
//! - [`Entity`]: a ready-made record implementing every capability trait
//! - [`Repository`]: save, lookup, delete, update and specification queries
//! - [`InMemoryRepository`]: a `Vec` behind an `RwLock`, insertion-ordered
//!
//! Evaluation is always a linear scan. There are no indexes and no query
//! planning; a specification is just a predicate applied to each item.
//!
//! ## Quick Start
//!
//! ```rust
//! use quarry::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let repo = InMemoryRepository::new();
//! for id in 1..=6u64 {
//!     repo.save(
//!         Entity::builder()
//!             .name(format!("Entity {}", id))
//!             .active(id % 2 == 0)
//!             .price(Decimal::from(150 + id))
//!             .build(),
//!     );
//! }
//!
//! let spec = Active.and(PriceLessThan::new(155));
//! let ids: Vec<_> = repo.find_all_by(&spec).iter().filter_map(|e| e.id).collect();
//! assert_eq!(ids, vec![2, 4]);
//!
//! let regex = NameMatchesRegex::new("Entity [1-3]")?;
//! assert_eq!(repo.count_by(&regex), 3);
//! # Ok::<(), quarry::spec::SpecError>(())
//! ```
//!
//! ## Logging
//!
//! Mutations and scans emit `tracing` events at `debug` level, with the
//! scanned specification rendered through `describe()`. Id collisions under
//! [`IdStrategy::CountPlusOne`] are reported at `warn`. Install a subscriber
//! in your binary to see them.

pub mod entity;
pub mod repository;

/// The specification algebra.
pub use quarry_spec as spec;

pub use entity::{Entity, EntityBuilder};
pub use repository::{
    IdStrategy, Identified, InMemoryRepository, InMemoryRepositoryBuilder, Repository,
    RepositoryConfig, RepositoryError,
};

/// Entities, repositories and the full specification prelude.
pub mod prelude {
    pub use crate::entity::{Entity, EntityBuilder};
    pub use crate::repository::{
        IdStrategy, Identified, InMemoryRepository, Repository, RepositoryConfig,
        RepositoryError,
    };
    pub use quarry_spec::prelude::*;
}
