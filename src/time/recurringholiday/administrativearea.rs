use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::time::holidayerror::HolidayError;

/// An administrative area of a country, identified by its ISO 3166-2 code.
///
/// Equality, ordering and hashing only look at the code.
#[derive(Clone, Debug)]
pub struct AdministrativeArea {
    iso: String,
    name: String
}

impl AdministrativeArea {
    pub fn new(iso: impl Into<String>, name: impl Into<String>) -> Result<AdministrativeArea, HolidayError> {
        let iso = iso.into();
        if iso.trim().is_empty() {
            return Err(HolidayError::InvalidArgument("an administrative area needs a non-empty iso code".to_owned()));
        }
        Ok(AdministrativeArea { iso, name: name.into() })
    }

    /// For catalogs whose codes are known to be non-empty.
    pub(crate) fn from_parts(iso: String, name: String) -> AdministrativeArea {
        AdministrativeArea { iso, name }
    }

    pub fn iso(&self) -> &str {
        &self.iso
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for AdministrativeArea {
    fn eq(&self, other: &Self) -> bool {
        self.iso == other.iso
    }
}

impl Eq for AdministrativeArea {}

impl Hash for AdministrativeArea {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.iso.hash(state);
    }
}

impl PartialOrd for AdministrativeArea {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AdministrativeArea {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iso.cmp(&other.iso)
    }
}

impl fmt::Display for AdministrativeArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.iso)
    }
}

/// The areas a holiday is observed in. An empty scope means nationwide.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdministrativeScope {
    areas: BTreeSet<AdministrativeArea>
}

impl AdministrativeScope {
    pub fn nationwide() -> AdministrativeScope {
        AdministrativeScope::default()
    }

    pub fn new<I>(areas: I) -> AdministrativeScope
    where I: IntoIterator<Item = AdministrativeArea> {
        AdministrativeScope { areas: areas.into_iter().collect() }
    }

    pub fn areas(&self) -> &BTreeSet<AdministrativeArea> {
        &self.areas
    }

    pub fn contains(&self, area: &AdministrativeArea) -> bool {
        self.areas.contains(area)
    }

    #[inline]
    pub fn is_nationwide(&self) -> bool {
        self.areas.is_empty()
    }

    /// True if nationwide or if at least one of `areas` belongs to the scope.
    ///
    /// Without any `areas` only nationwide scopes match.
    pub fn is_observed_in(&self, areas: &[AdministrativeArea]) -> bool {
        self.is_nationwide() || areas.iter().any(|area| self.areas.contains(area))
    }
}

impl FromIterator<AdministrativeArea> for AdministrativeScope {
    fn from_iter<I: IntoIterator<Item = AdministrativeArea>>(iter: I) -> Self {
        AdministrativeScope::new(iter)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn area(prefix: &str) -> AdministrativeArea {
        AdministrativeArea::new(format!("{}Key", prefix), format!("{}Name", prefix)).unwrap()
    }

    #[test]
    fn areas_compare_by_iso_only() {
        let a = AdministrativeArea::new("DE-BY", "Bayern").unwrap();
        let b = AdministrativeArea::new("DE-BY", "Bavaria").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, area("any"));
    }

    #[test]
    fn empty_iso_is_rejected() {
        let err = AdministrativeArea::new(" ", "Nowhere").unwrap_err();
        assert!(matches!(err, HolidayError::InvalidArgument(_)));
    }

    #[test]
    fn nationwide_scope_matches_everything() {
        let scope = AdministrativeScope::nationwide();
        assert!(scope.is_nationwide());
        assert!(scope.is_observed_in(&[]));
        assert!(scope.is_observed_in(&[area("any")]));
    }

    #[test]
    fn regional_scope_matches_any_given_area() {
        let scope = AdministrativeScope::new([area("any")]);
        assert!(!scope.is_nationwide());
        assert!(!scope.is_observed_in(&[]));
        assert!(scope.is_observed_in(&[area("any")]));
        assert!(scope.is_observed_in(&[area("another"), area("any")]));
        assert!(!scope.is_observed_in(&[area("another")]));
    }
}
