use std::collections::BTreeSet;

use crate::op::{within, Op};
use crate::specification::{Specification, SpecificationExt};
use crate::traits::{HasId, Id};

/// Matches the candidate whose id equals `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdEquals {
    id: Id,
}

impl IdEquals {
    /// Matches exactly `id`.
    pub fn new(id: Id) -> Self {
        IdEquals { id }
    }
}

impl<T: HasId> Specification<T> for IdEquals {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate.id().is_some_and(|id| Op::Eq.compare(&id, &self.id))
    }

    fn describe(&self) -> String {
        format!("id {} {}", Op::Eq, self.id)
    }
}

impl SpecificationExt for IdEquals {}

/// Matches ids in `[min, max]`, both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    min: Id,
    max: Id,
}

impl IdRange {
    /// Matches `min..=max`; nothing when `min > max`.
    pub fn new(min: Id, max: Id) -> Self {
        IdRange { min, max }
    }
}

impl<T: HasId> Specification<T> for IdRange {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate
            .id()
            .is_some_and(|id| within(&id, &self.min, &self.max))
    }

    fn describe(&self) -> String {
        format!("id in [{}, {}]", self.min, self.max)
    }
}

impl SpecificationExt for IdRange {}

/// Matches ids contained in a fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdIn {
    ids: BTreeSet<Id>,
}

impl IdIn {
    /// Matches any of `ids`. Duplicates are ignored.
    pub fn new<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = Id>,
    {
        IdIn {
            ids: ids.into_iter().collect(),
        }
    }
}

impl<T: HasId> Specification<T> for IdIn {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate.id().is_some_and(|id| self.ids.contains(&id))
    }

    fn describe(&self) -> String {
        let ids: Vec<String> = self.ids.iter().map(Id::to_string).collect();
        format!("id in {{{}}}", ids.join(", "))
    }
}

impl SpecificationExt for IdIn {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(Option<Id>);

    impl HasId for Row {
        fn id(&self) -> Option<Id> {
            self.0
        }
    }

    #[test]
    fn id_equals() {
        let spec = IdEquals::new(7);
        assert!(spec.is_satisfied_by(&Row(Some(7))));
        assert!(!spec.is_satisfied_by(&Row(Some(8))));
        assert!(!spec.is_satisfied_by(&Row(None)));
    }

    #[test]
    fn id_range_is_inclusive() {
        let spec = IdRange::new(5, 15);
        assert!(spec.is_satisfied_by(&Row(Some(5))));
        assert!(spec.is_satisfied_by(&Row(Some(15))));
        assert!(!spec.is_satisfied_by(&Row(Some(4))));
        assert!(!spec.is_satisfied_by(&Row(Some(16))));
        assert!(!spec.is_satisfied_by(&Row(None)));
    }

    #[test]
    fn id_range_unbounded_above() {
        let spec = IdRange::new(10, Id::MAX);
        assert!(spec.is_satisfied_by(&Row(Some(Id::MAX))));
        assert!(!spec.is_satisfied_by(&Row(Some(9))));
    }

    #[test]
    fn id_in_set() {
        let spec = IdIn::new([1, 3, 5, 7]);
        assert!(spec.is_satisfied_by(&Row(Some(3))));
        assert!(!spec.is_satisfied_by(&Row(Some(4))));
        assert!(!spec.is_satisfied_by(&Row(None)));
        assert!(!IdIn::new([]).is_satisfied_by(&Row(Some(1))));
    }

    #[test]
    fn descriptions() {
        assert_eq!(Specification::<Row>::describe(&IdEquals::new(3)), "id == 3");
        assert_eq!(Specification::<Row>::describe(&IdRange::new(1, 9)), "id in [1, 9]");
        assert_eq!(
            Specification::<Row>::describe(&IdIn::new([5, 1, 3, 1])),
            "id in {1, 3, 5}"
        );
    }
}
