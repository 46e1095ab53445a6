//! Quarry Spec - Composable specification predicates for Rust struct collections.
//!
//! A specification is a reusable, composable predicate over a candidate
//! value. Quarry Spec provides:
//!
//! - A single [`Specification`] trait with `is_satisfied_by` and `describe`
//! - Binary combinators: [`And`], [`Or`], [`Not`], via [`SpecificationExt`]
//! - N-ary quantifiers over type-erased children: [`AllOf`], [`AnyOf`]
//! - Ready-made leaves for id, name, active flag, price and creation date
//! - [`Custom`] predicates built from closures
//!
//! Leaves reach into a candidate through small capability traits
//! ([`HasId`], [`HasName`], [`HasActive`], [`HasPrice`], [`HasCreated`]).
//! Implement only the ones your type supports; a leaf that needs a
//! capability your type lacks simply does not apply to it.
//!
//! # Quick Start
//!
//! ```rust
//! use quarry_spec::prelude::*;
//! use rust_decimal::Decimal;
//!
//! struct Product {
//!     name: String,
//!     price: Decimal,
//!     active: bool,
//! }
//!
//! impl HasName for Product {
//!     fn name(&self) -> Option<&str> {
//!         Some(&self.name)
//!     }
//! }
//!
//! impl HasPrice for Product {
//!     fn price(&self) -> Option<Decimal> {
//!         Some(self.price)
//!     }
//! }
//!
//! impl HasActive for Product {
//!     fn is_active(&self) -> bool {
//!         self.active
//!     }
//! }
//!
//! let products = vec![
//!     Product { name: "Widget".into(), price: Decimal::new(150, 0), active: true },
//!     Product { name: "Gadget".into(), price: Decimal::new(250, 0), active: true },
//!     Product { name: "Gizmo".into(), price: Decimal::new(90, 0), active: false },
//! ];
//!
//! let cheap_and_active = Active.and(PriceLessThan::new(200));
//! let hits: Vec<_> = products
//!     .iter()
//!     .filter(|p| cheap_and_active.is_satisfied_by(*p))
//!     .collect();
//!
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].name, "Widget");
//! assert_eq!(
//!     Specification::<Product>::describe(&cheap_and_active),
//!     "(active AND price < 200)"
//! );
//! ```
//!
//! # Semantics
//!
//! ```text
//! And(a, b)   = a ∧ b        (b skipped when a fails)
//! Or(a, b)    = a ∨ b        (b skipped when a holds)
//! Not(a)      = ¬a
//! AllOf([])   = true
//! AnyOf([])   = false
//! ```
//!
//! Every node is immutable after construction and evaluation is pure, so a
//! specification can be shared across threads and reused freely.
//!
//! # Leaves
//!
//! | Field | Leaves | Bounds |
//! |-------|--------|--------|
//! | active | `Active`, `Inactive` | |
//! | id | `IdEquals`, `IdRange`, `IdIn` | range inclusive |
//! | name | `NameEquals`, `NameEqualsIgnoreCase`, `NameContains`, `NameStartsWith`, `NameEndsWith`, `NameMatchesRegex`, `NameLengthBetween`, `NameIn` | regex is a full match, length inclusive |
//! | price | `PriceGreaterThan`, `PriceLessThan`, `PriceBetween` | strict, strict, inclusive |
//! | created | `CreatedBefore`, `CreatedAfter`, `CreatedBetween` | strict, strict, inclusive |

mod composite;
mod custom;
mod error;
pub mod leaf;
mod op;
mod specification;
mod traits;

// Re-export public API
pub use composite::{AllOf, And, AnyOf, Not, Or};
pub use custom::Custom;
pub use error::{Result, SpecError};
pub use leaf::*;
pub use op::Op;
pub use specification::{BoxedSpecification, Specification, SpecificationExt};
pub use traits::{HasActive, HasCreated, HasId, HasName, HasPrice, Id};

/// Everything needed to build and evaluate specifications.
pub mod prelude {
    pub use crate::composite::{AllOf, And, AnyOf, Not, Or};
    pub use crate::custom::Custom;
    pub use crate::leaf::*;
    pub use crate::specification::{BoxedSpecification, Specification, SpecificationExt};
    pub use crate::traits::{HasActive, HasCreated, HasId, HasName, HasPrice, Id};
}
