use crate::specification::{Specification, SpecificationExt};
use crate::traits::HasActive;

/// Matches active candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Active;

impl<T: HasActive> Specification<T> for Active {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate.is_active()
    }

    fn describe(&self) -> String {
        "active".to_string()
    }
}

impl SpecificationExt for Active {}

/// Matches inactive candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inactive;

impl<T: HasActive> Specification<T> for Inactive {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !candidate.is_active()
    }

    fn describe(&self) -> String {
        "inactive".to_string()
    }
}

impl SpecificationExt for Inactive {}
