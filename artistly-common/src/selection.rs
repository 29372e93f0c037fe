//! Single-choice filter selections with an "all" sentinel
//!
//! Location, fee range and status pickers all offer an "All ..." entry
//! alongside the concrete options. [`Selection`] models that choice so a
//! filter either restricts to one typed value or does not restrict at all.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Wire value of the unrestricted choice
pub const ALL: &str = "all";

/// A picker value: either no restriction or exactly one option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    /// No restriction
    All,
    /// Restrict to this value
    Only(T),
}

impl<T> Selection<T> {
    /// True when the selection does not restrict anything
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// The selected value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(value),
        }
    }

    /// `All` admits everything; `Only(v)` admits what `accepts(v)` admits.
    pub fn admits(&self, accepts: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(value) => accepts(value),
        }
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selection::All, Selection::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Only(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

impl<T: fmt::Display> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Selection<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeeRange, Location};

    #[test]
    fn test_all_sentinel_parses() {
        let s: Selection<Location> = "all".parse().unwrap();
        assert!(s.is_all());
        assert_eq!(s.to_string(), "all");
    }

    #[test]
    fn test_concrete_value_parses() {
        let s: Selection<Location> = "Pune".parse().unwrap();
        assert_eq!(s, Selection::Only(Location::Pune));
        assert_eq!(s.value(), Some(&Location::Pune));
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert!("Atlantis".parse::<Selection<Location>>().is_err());
        // The sentinel is case-sensitive, like the picker value it mirrors
        assert!("ALL".parse::<Selection<Location>>().is_err());
    }

    #[test]
    fn test_admits() {
        let all: Selection<FeeRange> = Selection::All;
        assert!(all.admits(|_| false));

        let only = Selection::Only(FeeRange::From15kTo30k);
        assert!(only.admits(|fee| *fee == FeeRange::From15kTo30k));
        assert!(!only.admits(|fee| *fee == FeeRange::Above1Lakh));
    }

    #[test]
    fn test_serde_uses_labels() {
        let only = Selection::Only(FeeRange::From5kTo15k);
        let json = serde_json::to_string(&only).unwrap();
        assert_eq!(json, "\"₹5,000 - ₹15,000\"");

        let back: Selection<FeeRange> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, only);

        let all: Selection<FeeRange> = serde_json::from_str("\"all\"").unwrap();
        assert!(all.is_all());
    }
}
