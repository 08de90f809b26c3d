//! Age group identifiers (`age_group_<N>`).

use super::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const PREFIX: &str = "age_group_";

/// AgeGroupId names one bracket layout inside `cases` or `deaths`.
///
/// Ordering is numeric, so `age_group_10` sorts after `age_group_9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AgeGroupId(u32);

impl AgeGroupId {
    /// Creates an identifier from its index. Returns `None` for zero.
    pub fn new(index: u32) -> Option<Self> {
        (index > 0).then_some(Self(index))
    }

    /// Const constructor for the built-in scheme tables. Zero fails to compile
    /// when used in a const item.
    pub(crate) const fn nth(index: u32) -> Self {
        assert!(index > 0, "age group indexes start at 1");
        Self(index)
    }

    /// Returns the numeric suffix.
    pub fn index(self) -> u32 {
        self.0
    }
}

impl FromStr for AgeGroupId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidAgeGroupId(s.to_string());

        let digits = s.strip_prefix(PREFIX).ok_or_else(invalid)?;
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let index: u32 = digits.parse().map_err(|_| invalid())?;
        Ok(Self(index))
    }
}

impl fmt::Display for AgeGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PREFIX, self.index())
    }
}

impl Serialize for AgeGroupId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AgeGroupId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
