//! Order-preserving bracket label to count mapping.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Count value meaning "not yet populated".
pub const SENTINEL: i64 = -1;

/// BracketCounts maps bracket labels (e.g. "31-40") to case or death counts.
///
/// Labels keep the order they were written in, since that order is how the
/// county reports its brackets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BracketCounts {
    entries: Vec<(String, i64)>,
}

impl BracketCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping with every label set to [`SENTINEL`].
    pub fn with_sentinels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = Self::new();
        for label in labels {
            counts.insert(label, SENTINEL);
        }
        counts
    }

    /// Sets the count for a label. An existing label keeps its position and
    /// its previous count is returned.
    pub fn insert(&mut self, label: impl Into<String>, count: i64) -> Option<i64> {
        let label = label.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, slot)) => Some(std::mem::replace(slot, count)),
            None => {
                self.entries.push((label, count));
                None
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, count)| *count)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true when no bracket still holds the sentinel.
    pub fn is_populated(&self) -> bool {
        self.entries.iter().all(|(_, c)| *c != SENTINEL)
    }

    /// Sum of all counts, or `None` while any bracket is unpopulated.
    pub fn total(&self) -> Option<i64> {
        if !self.is_populated() {
            return None;
        }
        Some(self.entries.iter().map(|(_, c)| *c).sum())
    }
}

impl Serialize for BracketCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

struct BracketCountsVisitor;

impl<'de> Visitor<'de> for BracketCountsVisitor {
    type Value = BracketCounts;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping of bracket labels to integer counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut counts = BracketCounts::new();
        while let Some((label, count)) = access.next_entry::<String, i64>()? {
            if counts.get(&label).is_some() {
                return Err(serde::de::Error::custom(format!(
                    "duplicate bracket label `{}`",
                    label
                )));
            }
            counts.entries.push((label, count));
        }
        Ok(counts)
    }
}

impl<'de> Deserialize<'de> for BracketCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BracketCountsVisitor)
    }
}
