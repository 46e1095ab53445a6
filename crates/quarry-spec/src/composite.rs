//! Composite specifications.
//!
//! Binary nodes ([`And`], [`Or`]) and [`Not`] are generic over their operands
//! so a statically built tree carries no allocation. The variadic nodes
//! ([`AllOf`], [`AnyOf`]) hold boxed children because their operands are
//! usually of different types.
//!
//! Quantifier semantics over an empty child list:
//!
//! ```text
//! AllOf([]) = true    (every one of zero predicates holds)
//! AnyOf([]) = false   (no predicate exists that holds)
//! ```

use std::fmt;

use crate::specification::{BoxedSpecification, Specification, SpecificationExt};

/// Conjunction of two specifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<A, B> {
    left: A,
    right: B,
}

impl<A, B> And<A, B> {
    /// Creates a conjunction. Usually built with [`SpecificationExt::and`].
    pub fn new(left: A, right: B) -> Self {
        And { left, right }
    }

    /// Returns the left operand.
    pub fn left(&self) -> &A {
        &self.left
    }

    /// Returns the right operand.
    pub fn right(&self) -> &B {
        &self.right
    }
}

impl<T, A, B> Specification<T> for And<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) && self.right.is_satisfied_by(candidate)
    }

    fn describe(&self) -> String {
        format!("({} AND {})", self.left.describe(), self.right.describe())
    }
}

impl<A, B> SpecificationExt for And<A, B> {}

/// Disjunction of two specifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<A, B> {
    left: A,
    right: B,
}

impl<A, B> Or<A, B> {
    /// Creates a disjunction. Usually built with [`SpecificationExt::or`].
    pub fn new(left: A, right: B) -> Self {
        Or { left, right }
    }

    /// Returns the left operand.
    pub fn left(&self) -> &A {
        &self.left
    }

    /// Returns the right operand.
    pub fn right(&self) -> &B {
        &self.right
    }
}

impl<T, A, B> Specification<T> for Or<A, B>
where
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) || self.right.is_satisfied_by(candidate)
    }

    fn describe(&self) -> String {
        format!("({} OR {})", self.left.describe(), self.right.describe())
    }
}

impl<A, B> SpecificationExt for Or<A, B> {}

/// Negation of a specification.
///
/// `x.not().not()` is semantically equal to `x` but keeps both nodes; the
/// tree is never simplified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<S> {
    inner: S,
}

impl<S> Not<S> {
    /// Creates a negation. Usually built with [`SpecificationExt::not`].
    pub fn new(inner: S) -> Self {
        Not { inner }
    }

    /// Returns the negated specification.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<T, S> Specification<T> for Not<S>
where
    S: Specification<T>,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.inner.is_satisfied_by(candidate)
    }

    fn describe(&self) -> String {
        format!("NOT {}", self.inner.describe())
    }
}

impl<S> SpecificationExt for Not<S> {}

/// Every child must hold. Vacuously true when empty.
///
/// # Example
///
/// ```
/// use quarry_spec::{AllOf, Specification};
///
/// let none: AllOf<u64> = AllOf::new();
/// assert!(none.is_satisfied_by(&42));
/// ```
pub struct AllOf<T> {
    specs: Vec<BoxedSpecification<T>>,
}

impl<T> AllOf<T> {
    /// Creates an empty conjunction.
    pub fn new() -> Self {
        AllOf { specs: Vec::new() }
    }

    /// Returns a new conjunction with `spec` appended.
    pub fn with<S>(mut self, spec: S) -> Self
    where
        S: Specification<T> + Send + Sync + 'static,
    {
        self.specs.push(Box::new(spec));
        self
    }

    /// Returns the number of children.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Returns the children in evaluation order.
    pub fn specs(&self) -> &[BoxedSpecification<T>] {
        &self.specs
    }
}

impl<T> Default for AllOf<T> {
    fn default() -> Self {
        AllOf::new()
    }
}

impl<T> From<Vec<BoxedSpecification<T>>> for AllOf<T> {
    fn from(specs: Vec<BoxedSpecification<T>>) -> Self {
        AllOf { specs }
    }
}

impl<T> FromIterator<BoxedSpecification<T>> for AllOf<T> {
    fn from_iter<I: IntoIterator<Item = BoxedSpecification<T>>>(iter: I) -> Self {
        AllOf {
            specs: iter.into_iter().collect(),
        }
    }
}

impl<T> Specification<T> for AllOf<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.specs.iter().all(|spec| spec.is_satisfied_by(candidate))
    }

    fn describe(&self) -> String {
        format!("ALL OF [{}]", describe_all(&self.specs))
    }
}

impl<T> SpecificationExt for AllOf<T> {}

impl<T> fmt::Debug for AllOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AllOf")
            .field(&Specification::<T>::describe(self))
            .finish()
    }
}

/// At least one child must hold. Vacuously false when empty.
///
/// # Example
///
/// ```
/// use quarry_spec::{AnyOf, Specification};
///
/// let none: AnyOf<u64> = AnyOf::new();
/// assert!(!none.is_satisfied_by(&42));
/// ```
pub struct AnyOf<T> {
    specs: Vec<BoxedSpecification<T>>,
}

impl<T> AnyOf<T> {
    /// Creates an empty disjunction.
    pub fn new() -> Self {
        AnyOf { specs: Vec::new() }
    }

    /// Returns a new disjunction with `spec` appended.
    pub fn with<S>(mut self, spec: S) -> Self
    where
        S: Specification<T> + Send + Sync + 'static,
    {
        self.specs.push(Box::new(spec));
        self
    }

    /// Returns the number of children.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Returns the children in evaluation order.
    pub fn specs(&self) -> &[BoxedSpecification<T>] {
        &self.specs
    }
}

impl<T> Default for AnyOf<T> {
    fn default() -> Self {
        AnyOf::new()
    }
}

impl<T> From<Vec<BoxedSpecification<T>>> for AnyOf<T> {
    fn from(specs: Vec<BoxedSpecification<T>>) -> Self {
        AnyOf { specs }
    }
}

impl<T> FromIterator<BoxedSpecification<T>> for AnyOf<T> {
    fn from_iter<I: IntoIterator<Item = BoxedSpecification<T>>>(iter: I) -> Self {
        AnyOf {
            specs: iter.into_iter().collect(),
        }
    }
}

impl<T> Specification<T> for AnyOf<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.specs.iter().any(|spec| spec.is_satisfied_by(candidate))
    }

    fn describe(&self) -> String {
        format!("ANY OF [{}]", describe_all(&self.specs))
    }
}

impl<T> SpecificationExt for AnyOf<T> {}

impl<T> fmt::Debug for AnyOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyOf")
            .field(&Specification::<T>::describe(self))
            .finish()
    }
}

fn describe_all<T>(specs: &[BoxedSpecification<T>]) -> String {
    specs
        .iter()
        .map(|spec| Specification::<T>::describe(spec))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Gt(i64);

    impl Specification<i64> for Gt {
        fn is_satisfied_by(&self, candidate: &i64) -> bool {
            *candidate > self.0
        }

        fn describe(&self) -> String {
            format!("> {}", self.0)
        }
    }

    impl SpecificationExt for Gt {}

    /// Counts how often it is evaluated.
    struct Probe<'a> {
        calls: &'a Cell<usize>,
        answer: bool,
    }

    impl Specification<i64> for Probe<'_> {
        fn is_satisfied_by(&self, _candidate: &i64) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.answer
        }
    }

    #[test]
    fn and_truth_table() {
        let spec = Gt(0).and(Gt(10));
        assert!(spec.is_satisfied_by(&11));
        assert!(!spec.is_satisfied_by(&5));
        assert!(!spec.is_satisfied_by(&-1));
    }

    #[test]
    fn or_truth_table() {
        let spec = Gt(10).or(Gt(100).not());
        assert!(spec.is_satisfied_by(&11));
        assert!(spec.is_satisfied_by(&5));
        assert!(spec.is_satisfied_by(&200));
    }

    #[test]
    fn not_inverts() {
        let spec = Gt(0).not();
        assert!(spec.is_satisfied_by(&0));
        assert!(!spec.is_satisfied_by(&1));
    }

    #[test]
    fn double_negation_keeps_answer() {
        let spec = Gt(3).not().not();
        for n in -5..10 {
            assert_eq!(spec.is_satisfied_by(&n), Gt(3).is_satisfied_by(&n));
        }
    }

    #[test]
    fn and_short_circuits() {
        let calls = Cell::new(0);
        let spec = And::new(
            Probe {
                calls: &calls,
                answer: false,
            },
            Probe {
                calls: &calls,
                answer: true,
            },
        );
        assert!(!spec.is_satisfied_by(&0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn or_short_circuits() {
        let calls = Cell::new(0);
        let spec = Or::new(
            Probe {
                calls: &calls,
                answer: true,
            },
            Probe {
                calls: &calls,
                answer: false,
            },
        );
        assert!(spec.is_satisfied_by(&0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn operands_are_accessible() {
        let spec = Gt(1).and(Gt(2));
        assert_eq!(spec.left().0, 1);
        assert_eq!(spec.right().0, 2);
        assert_eq!(Gt(3).not().inner().0, 3);
    }

    #[test]
    fn empty_all_of_is_true() {
        let spec: AllOf<i64> = AllOf::new();
        assert!(spec.is_empty());
        assert!(spec.is_satisfied_by(&0));
        assert!(spec.is_satisfied_by(&i64::MIN));
    }

    #[test]
    fn empty_any_of_is_false() {
        let spec: AnyOf<i64> = AnyOf::default();
        assert!(spec.is_empty());
        assert!(!spec.is_satisfied_by(&0));
        assert!(!spec.is_satisfied_by(&i64::MAX));
    }

    #[test]
    fn all_of_requires_every_child() {
        let spec = AllOf::new().with(Gt(0)).with(Gt(5)).with(Gt(10).not());
        assert_eq!(spec.len(), 3);
        assert!(spec.is_satisfied_by(&7));
        assert!(!spec.is_satisfied_by(&3));
        assert!(!spec.is_satisfied_by(&11));
    }

    #[test]
    fn any_of_requires_one_child() {
        let spec = AnyOf::new().with(Gt(100)).with(Gt(0).not());
        assert!(spec.is_satisfied_by(&101));
        assert!(spec.is_satisfied_by(&-4));
        assert!(!spec.is_satisfied_by(&50));
    }

    #[test]
    fn variadic_from_boxed_children() {
        let children: Vec<BoxedSpecification<i64>> = vec![Gt(1).boxed(), Gt(2).boxed()];
        let all = AllOf::from(children);
        assert!(all.is_satisfied_by(&3));
        assert!(!all.is_satisfied_by(&2));

        let any: AnyOf<i64> = [Gt(1).boxed(), Gt(2).boxed()].into_iter().collect();
        assert!(any.is_satisfied_by(&2));
        assert!(!any.is_satisfied_by(&1));
    }

    #[test]
    fn variadic_nodes_compose() {
        let spec = AllOf::new().with(Gt(0)).or(AnyOf::new().with(Gt(-10).not()));
        assert!(spec.is_satisfied_by(&1));
        assert!(spec.is_satisfied_by(&-20));
        assert!(!spec.is_satisfied_by(&-5));
    }

    #[test]
    fn descriptions() {
        assert_eq!(Gt(1).and(Gt(2)).describe(), "(> 1 AND > 2)");
        assert_eq!(Gt(1).or(Gt(2)).describe(), "(> 1 OR > 2)");
        assert_eq!(Gt(1).not().describe(), "NOT > 1");
        assert_eq!(
            AllOf::new().with(Gt(1)).with(Gt(2)).describe(),
            "ALL OF [> 1, > 2]"
        );
        assert_eq!(AnyOf::<i64>::new().describe(), "ANY OF []");
        assert_eq!(
            format!("{:?}", AnyOf::new().with(Gt(4))),
            "AnyOf(\"ANY OF [> 4]\")"
        );
    }
}
