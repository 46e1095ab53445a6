//! Ad-hoc specifications from closures.

use std::fmt;

use crate::specification::{Specification, SpecificationExt};

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// A specification backed by an arbitrary predicate.
///
/// The description is metadata for diagnostics only; it is what
/// [`describe`](Specification::describe) and `Display` return.
///
/// # Example
///
/// ```
/// use quarry_spec::{Custom, Specification};
///
/// let odd = Custom::new(|n: &u64| n % 2 == 1, "odd");
/// assert!(odd.is_satisfied_by(&3));
/// assert_eq!(odd.to_string(), "odd");
/// ```
pub struct Custom<T> {
    predicate: Predicate<T>,
    description: String,
}

impl<T> Custom<T> {
    /// Wraps `predicate` together with a human-readable description.
    pub fn new<F>(predicate: F, description: impl Into<String>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Custom {
            predicate: Box::new(predicate),
            description: description.into(),
        }
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<T> Specification<T> for Custom<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (self.predicate)(candidate)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }
}

impl<T> SpecificationExt for Custom<T> {}

impl<T> fmt::Display for Custom<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl<T> fmt::Debug for Custom<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
