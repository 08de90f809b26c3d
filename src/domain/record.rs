//! Flattened age group records.

use serde::{Deserialize, Serialize};

/// AgeGroupRecord is one populated bracket in the `[{group, raw_count}]`
/// list shape used by the county data feeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeGroupRecord {
    pub group: String,
    pub raw_count: i64,
}
