use std::collections::BTreeSet;

use regex::Regex;

use crate::error::Result;
use crate::op::within;
use crate::specification::{Specification, SpecificationExt};
use crate::traits::HasName;

/// Exact, case-sensitive name match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEquals {
    name: String,
}

impl NameEquals {
    /// Matches names equal to `name`.
    pub fn new(name: impl Into<String>) -> Self {
        NameEquals { name: name.into() }
    }
}

impl<T: HasName> Specification<T> for NameEquals {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate.name().is_some_and(|name| name == self.name)
    }

    fn describe(&self) -> String {
        format!("name == {:?}", self.name)
    }
}

impl SpecificationExt for NameEquals {}

/// Name match ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEqualsIgnoreCase {
    name: String,
    folded: String,
}

impl NameEqualsIgnoreCase {
    /// Matches names equal to `name` after lowercasing both.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let folded = name.to_lowercase();
        NameEqualsIgnoreCase { name, folded }
    }
}

impl<T: HasName> Specification<T> for NameEqualsIgnoreCase {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate
            .name()
            .is_some_and(|name| name.to_lowercase() == self.folded)
    }

    fn describe(&self) -> String {
        format!("name eq-ignore-case {:?}", self.name)
    }
}

impl SpecificationExt for NameEqualsIgnoreCase {}

/// Case-sensitive substring match. An empty needle matches any present name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContains {
    needle: String,
}

impl NameContains {
    /// Matches names containing `needle`.
    pub fn new(needle: impl Into<String>) -> Self {
        NameContains {
            needle: needle.into(),
        }
    }
}

impl<T: HasName> Specification<T> for NameContains {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate
            .name()
            .is_some_and(|name| name.contains(self.needle.as_str()))
    }

    fn describe(&self) -> String {
        format!("name contains {:?}", self.needle)
    }
}

impl SpecificationExt for NameContains {}

/// Case-sensitive prefix match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameStartsWith {
    prefix: String,
}

impl NameStartsWith {
    /// Matches names beginning with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        NameStartsWith {
            prefix: prefix.into(),
        }
    }
}

impl<T: HasName> Specification<T> for NameStartsWith {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate
            .name()
            .is_some_and(|name| name.starts_with(self.prefix.as_str()))
    }

    fn describe(&self) -> String {
        format!("name starts-with {:?}", self.prefix)
    }
}

impl SpecificationExt for NameStartsWith {}

/// Case-sensitive suffix match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEndsWith {
    suffix: String,
}

impl NameEndsWith {
    /// Matches names ending with `suffix`.
    pub fn new(suffix: impl Into<String>) -> Self {
        NameEndsWith {
            suffix: suffix.into(),
        }
    }
}

impl<T: HasName> Specification<T> for NameEndsWith {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate
            .name()
            .is_some_and(|name| name.ends_with(self.suffix.as_str()))
    }

    fn describe(&self) -> String {
        format!("name ends-with {:?}", self.suffix)
    }
}

impl SpecificationExt for NameEndsWith {}

/// Full-string regular expression match.
///
/// The pattern must match the whole name, not a substring of it: `Entity
/// [1-5]` matches `"Entity 3"` but not `"Entity 30"`. The pattern is
/// compiled once, at construction.
///
/// ```
/// use quarry_spec::{HasName, NameMatchesRegex, Specification};
///
/// struct Tag(&'static str);
///
/// impl HasName for Tag {
///     fn name(&self) -> Option<&str> {
///         Some(self.0)
///     }
/// }
///
/// let spec = NameMatchesRegex::new("v[0-9]+")?;
/// assert!(spec.is_satisfied_by(&Tag("v12")));
/// assert!(!spec.is_satisfied_by(&Tag("v12-rc")));
///
/// assert!(NameMatchesRegex::new("(unclosed").is_err());
/// # Ok::<(), quarry_spec::SpecError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NameMatchesRegex {
    pattern: String,
    regex: Regex,
}

impl NameMatchesRegex {
    /// Compiles `pattern`, failing with
    /// [`SpecError::InvalidRegex`](crate::SpecError::InvalidRegex) when it is
    /// malformed.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        // Validate the raw pattern so errors point at what the caller wrote.
        Regex::new(&pattern)?;
        let regex = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(NameMatchesRegex { pattern, regex })
    }

    /// The pattern as given, without anchors.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl<T: HasName> Specification<T> for NameMatchesRegex {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate
            .name()
            .is_some_and(|name| self.regex.is_match(name))
    }

    fn describe(&self) -> String {
        format!("name matches /{}/", self.pattern)
    }
}

impl SpecificationExt for NameMatchesRegex {}

/// Name length, in characters, within `[min, max]` inclusive.
///
/// Length is the number of Unicode scalar values (`str::chars`), not bytes
/// or UTF-16 code units: `"a😀"` has length 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameLengthBetween {
    min: usize,
    max: usize,
}

impl NameLengthBetween {
    /// Matches names of `min..=max` characters; nothing when `min > max`.
    pub fn new(min: usize, max: usize) -> Self {
        NameLengthBetween { min, max }
    }
}

impl<T: HasName> Specification<T> for NameLengthBetween {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate
            .name()
            .is_some_and(|name| within(&name.chars().count(), &self.min, &self.max))
    }

    fn describe(&self) -> String {
        format!("len(name) in [{}, {}]", self.min, self.max)
    }
}

impl SpecificationExt for NameLengthBetween {}

/// Name membership in a fixed set, optionally ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameIn {
    names: BTreeSet<String>,
    ignore_case: bool,
}

impl NameIn {
    /// Case-sensitive membership.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NameIn {
            names: names.into_iter().map(Into::into).collect(),
            ignore_case: false,
        }
    }

    /// Membership ignoring case.
    pub fn ignore_case<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NameIn {
            names: names
                .into_iter()
                .map(|name| name.into().to_lowercase())
                .collect(),
            ignore_case: true,
        }
    }
}

impl<T: HasName> Specification<T> for NameIn {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        candidate.name().is_some_and(|name| {
            if self.ignore_case {
                self.names.contains(&name.to_lowercase())
            } else {
                self.names.contains(name)
            }
        })
    }

    fn describe(&self) -> String {
        let names: Vec<String> = self.names.iter().map(|n| format!("{:?}", n)).collect();
        let suffix = if self.ignore_case { " (ignore case)" } else { "" };
        format!("name in {{{}}}{}", names.join(", "), suffix)
    }
}

impl SpecificationExt for NameIn {}
