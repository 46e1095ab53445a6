//! Capability traits for candidate types.
//!
//! Leaf specifications never inspect a concrete struct. Each one is generic
//! over a small trait exposing exactly the field it tests, so a leaf such as
//! [`NameContains`](crate::NameContains) applies to any type implementing
//! [`HasName`]. Optional fields return `Option`; a `None` makes every leaf
//! on that field evaluate to `false`.
//!
//! # Example
//!
//! ```
//! use quarry_spec::{HasActive, HasName, Active, NameStartsWith, Specification, SpecificationExt};
//!
//! struct Task {
//!     title: String,
//!     open: bool,
//! }
//!
//! impl HasName for Task {
//!     fn name(&self) -> Option<&str> {
//!         Some(&self.title)
//!     }
//! }
//!
//! impl HasActive for Task {
//!     fn is_active(&self) -> bool {
//!         self.open
//!     }
//! }
//!
//! let spec = Active.and(NameStartsWith::new("Fix"));
//! let task = Task { title: "Fix bug".into(), open: true };
//! assert!(spec.is_satisfied_by(&task));
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Identifier type shared by id leaves and repositories.
pub type Id = u64;

/// A candidate with an identity.
pub trait HasId {
    /// Returns the identifier, or `None` while the candidate is unsaved.
    fn id(&self) -> Option<Id>;
}

/// A candidate with a name.
pub trait HasName {
    /// Returns the name, or `None` if the candidate has none.
    fn name(&self) -> Option<&str>;
}

/// A candidate with an active flag.
pub trait HasActive {
    /// Returns `true` if the candidate is active.
    fn is_active(&self) -> bool;
}

/// A candidate with a price.
pub trait HasPrice {
    /// Returns the price as an exact decimal, or `None` if unpriced.
    fn price(&self) -> Option<Decimal>;
}

/// A candidate with a creation timestamp.
pub trait HasCreated {
    /// Returns the creation instant, or `None` if unknown.
    fn created(&self) -> Option<DateTime<Utc>>;
}
