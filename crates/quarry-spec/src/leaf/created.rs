use chrono::{DateTime, SecondsFormat, Utc};

use crate::op::{within, Op};
use crate::specification::{Specification, SpecificationExt};
use crate::traits::HasCreated;

fn rfc3339(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Created strictly before the instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedBefore {
    instant: DateTime<Utc>,
}

impl CreatedBefore {
    /// Matches creation times earlier than `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        CreatedBefore { instant }
    }
}

impl<T: HasCreated> Specification<T> for CreatedBefore {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate
            .created()
            .is_some_and(|created| Op::Before.compare(&created, &self.instant))
    }

    fn describe(&self) -> String {
        format!("created {} {}", Op::Before, rfc3339(&self.instant))
    }
}

impl SpecificationExt for CreatedBefore {}

/// Created strictly after the instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedAfter {
    instant: DateTime<Utc>,
}

impl CreatedAfter {
    /// Matches creation times later than `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        CreatedAfter { instant }
    }
}

impl<T: HasCreated> Specification<T> for CreatedAfter {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate
            .created()
            .is_some_and(|created| Op::After.compare(&created, &self.instant))
    }

    fn describe(&self) -> String {
        format!("created {} {}", Op::After, rfc3339(&self.instant))
    }
}

impl SpecificationExt for CreatedAfter {}

/// Created within `[start, end]`; both endpoints match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedBetween {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl CreatedBetween {
    /// Matches creation times in `start..=end`; nothing when `start > end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        CreatedBetween { start, end }
    }
}

impl<T: HasCreated> Specification<T> for CreatedBetween {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate
            .created()
            .is_some_and(|created| within(&created, &self.start, &self.end))
    }

    fn describe(&self) -> String {
        format!(
            "created in [{}, {}]",
            rfc3339(&self.start),
            rfc3339(&self.end)
        )
    }
}

impl SpecificationExt for CreatedBetween {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    struct Stamped(Option<DateTime<Utc>>);

    impl HasCreated for Stamped {
        fn created(&self) -> Option<DateTime<Utc>> {
            self.0
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn before_and_after_are_strict() {
        let at = Stamped(Some(noon()));
        let earlier = Stamped(Some(noon() - Duration::seconds(1)));
        let later = Stamped(Some(noon() + Duration::seconds(1)));

        let before = CreatedBefore::new(noon());
        assert!(before.is_satisfied_by(&earlier));
        assert!(!before.is_satisfied_by(&at));
        assert!(!before.is_satisfied_by(&later));

        let after = CreatedAfter::new(noon());
        assert!(after.is_satisfied_by(&later));
        assert!(!after.is_satisfied_by(&at));
        assert!(!after.is_satisfied_by(&earlier));
    }

    #[test]
    fn between_includes_endpoints() {
        let start = noon() - Duration::hours(1);
        let end = noon() + Duration::hours(1);
        let spec = CreatedBetween::new(start, end);
        assert!(spec.is_satisfied_by(&Stamped(Some(start))));
        assert!(spec.is_satisfied_by(&Stamped(Some(end))));
        assert!(spec.is_satisfied_by(&Stamped(Some(noon()))));
        assert!(!spec.is_satisfied_by(&Stamped(Some(end + Duration::milliseconds(1)))));
    }

    #[test]
    fn inverted_window_matches_nothing() {
        let spec = CreatedBetween::new(noon() + Duration::hours(1), noon() - Duration::hours(1));
        assert!(!spec.is_satisfied_by(&Stamped(Some(noon()))));
    }

    #[test]
    fn missing_timestamp_never_matches() {
        let none = Stamped(None);
        assert!(!CreatedBefore::new(noon()).is_satisfied_by(&none));
        assert!(!CreatedAfter::new(noon()).is_satisfied_by(&none));
        assert!(!CreatedBetween::new(noon(), noon()).is_satisfied_by(&none));
    }

    #[test]
    fn descriptions() {
        assert_eq!(
            Specification::<Stamped>::describe(&CreatedBefore::new(noon())),
            "created before 2024-06-01T12:00:00Z"
        );
        assert_eq!(
            Specification::<Stamped>::describe(&CreatedBetween::new(noon(), noon())),
            "created in [2024-06-01T12:00:00Z, 2024-06-01T12:00:00Z]"
        );
    }
}
