//! The core specification traits.
//!
//! [`Specification`] is the single contract every node satisfies: leaves,
//! composites and custom predicates alike. Combinators come from
//! [`SpecificationExt`], whose default methods give every node `and`, `or`
//! and `not` without a shared base type.

use std::sync::Arc;

use crate::composite::{And, Not, Or};

/// A composable boolean predicate over a candidate of type `T`.
///
/// Evaluation must be pure and total: the same candidate always yields the
/// same answer and no input panics. Leaves treat a missing field as "no
/// match".
///
/// # Manual Implementation
///
/// ```
/// use quarry_spec::{Specification, SpecificationExt};
///
/// struct Even;
///
/// impl Specification<u64> for Even {
///     fn is_satisfied_by(&self, candidate: &u64) -> bool {
///         candidate % 2 == 0
///     }
///
///     fn describe(&self) -> String {
///         "even".to_string()
///     }
/// }
///
/// // Opt in to the combinators.
/// impl SpecificationExt for Even {}
///
/// let odd = Even.not();
/// assert!(odd.is_satisfied_by(&3));
/// assert_eq!(odd.describe(), "NOT even");
/// ```
pub trait Specification<T> {
    /// Returns `true` if `candidate` satisfies this specification.
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// Returns a human-readable rendering for diagnostics.
    ///
    /// The description plays no part in matching.
    fn describe(&self) -> String {
        String::from("<predicate>")
    }
}

/// A type-erased specification.
///
/// Used wherever specifications of different concrete types are stored
/// together, such as the children of [`AllOf`](crate::AllOf).
pub type BoxedSpecification<T> = Box<dyn Specification<T> + Send + Sync>;

/// Combinators shared by every specification node.
///
/// All methods consume their operands and return a new node; nothing is
/// mutated. Implement it with an empty `impl` block to give a custom
/// specification type the same combinators as the built-in ones.
pub trait SpecificationExt: Sized {
    /// Both `self` and `other` must hold. `other` is skipped when `self`
    /// already fails.
    fn and<S>(self, other: S) -> And<Self, S> {
        And::new(self, other)
    }

    /// At least one of `self` and `other` must hold. `other` is skipped when
    /// `self` already holds.
    fn or<S>(self, other: S) -> Or<Self, S> {
        Or::new(self, other)
    }

    /// Negates `self`.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Erases the concrete type.
    fn boxed<T>(self) -> BoxedSpecification<T>
    where
        Self: Specification<T> + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T, S> Specification<T> for &S
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (**self).is_satisfied_by(candidate)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T, S> Specification<T> for Box<S>
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (**self).is_satisfied_by(candidate)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T, S> Specification<T> for Arc<S>
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (**self).is_satisfied_by(candidate)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: ?Sized> SpecificationExt for Box<S> {}

impl<S: ?Sized> SpecificationExt for Arc<S> {}
