//! Comparison operators for the ordered leaf predicates.
//!
//! Id, price and creation-date leaves all reduce to comparing a field value
//! against a bound captured at construction. [`Op`] evaluates the resulting
//! [`Ordering`] so every leaf agrees on strictness.

use std::cmp::Ordering;

/// Comparison operator applied as `field <op> bound`.
///
/// - **Equality**: `Eq`
/// - **Strict**: `Gt`, `Lt`
/// - **Inclusive**: `Gte`, `Lte`
/// - **Timestamp aliases**: `Before` (alias for `Lt`), `After` (alias for `Gt`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal.
    Eq,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Earlier than (alias for `Lt`).
    Before,
    /// Later than (alias for `Gt`).
    After,
}

impl Op {
    /// Normalizes aliases to their canonical form.
    ///
    /// - `Before` -> `Lt`
    /// - `After` -> `Gt`
    /// - Others unchanged
    pub fn normalize(self) -> Op {
        match self {
            Op::Before => Op::Lt,
            Op::After => Op::Gt,
            other => other,
        }
    }

    /// Evaluates the operator given the ordering of `field` relative to `bound`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self.normalize() {
            Op::Eq => ordering == Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            _ => false, // aliases are normalized above
        }
    }

    /// Compares `field` against `bound` with this operator.
    pub fn compare<V: Ord>(self, field: &V, bound: &V) -> bool {
        self.eval_ordering(field.cmp(bound))
    }

    /// Returns the symbol used when describing a specification.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "==",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Before => "before",
            Op::After => "after",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns `true` if `min <= value <= max`.
///
/// An inverted range (`min > max`) contains nothing.
pub(crate) fn within<V: Ord>(value: &V, min: &V, max: &V) -> bool {
    Op::Gte.compare(value, min) && Op::Lte.compare(value, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_normalization() {
        assert_eq!(Op::Before.normalize(), Op::Lt);
        assert_eq!(Op::After.normalize(), Op::Gt);
        assert_eq!(Op::Eq.normalize(), Op::Eq);
        assert_eq!(Op::Gte.normalize(), Op::Gte);
    }

    #[test]
    fn op_eval_ordering() {
        // Equal
        assert!(Op::Eq.eval_ordering(Ordering::Equal));
        assert!(!Op::Eq.eval_ordering(Ordering::Less));
        assert!(!Op::Eq.eval_ordering(Ordering::Greater));

        // Greater than
        assert!(!Op::Gt.eval_ordering(Ordering::Equal));
        assert!(!Op::Gt.eval_ordering(Ordering::Less));
        assert!(Op::Gt.eval_ordering(Ordering::Greater));

        // Greater than or equal
        assert!(Op::Gte.eval_ordering(Ordering::Equal));
        assert!(!Op::Gte.eval_ordering(Ordering::Less));
        assert!(Op::Gte.eval_ordering(Ordering::Greater));

        // Less than
        assert!(!Op::Lt.eval_ordering(Ordering::Equal));
        assert!(Op::Lt.eval_ordering(Ordering::Less));
        assert!(!Op::Lt.eval_ordering(Ordering::Greater));

        // Less than or equal
        assert!(Op::Lte.eval_ordering(Ordering::Equal));
        assert!(Op::Lte.eval_ordering(Ordering::Less));
        assert!(!Op::Lte.eval_ordering(Ordering::Greater));

        // Aliases are strict
        assert!(Op::Before.eval_ordering(Ordering::Less));
        assert!(!Op::Before.eval_ordering(Ordering::Equal));
        assert!(Op::After.eval_ordering(Ordering::Greater));
        assert!(!Op::After.eval_ordering(Ordering::Equal));
    }

    #[test]
    fn compare_values() {
        assert!(Op::Gt.compare(&5u64, &3));
        assert!(!Op::Gt.compare(&3u64, &3));
        assert!(Op::Lte.compare(&3u64, &3));
    }

    #[test]
    fn within_is_inclusive() {
        assert!(within(&1, &1, &5));
        assert!(within(&5, &1, &5));
        assert!(!within(&0, &1, &5));
        assert!(!within(&6, &1, &5));
        // inverted range
        assert!(!within(&3, &5, &1));
    }

    #[test]
    fn op_display() {
        assert_eq!(Op::Gt.to_string(), ">");
        assert_eq!(Op::Lte.to_string(), "<=");
        assert_eq!(Op::Before.to_string(), "before");
    }
}
