//! Reporting schemes: which bracket layout each county publishes.

use super::{AgeGroupId, BracketCounts};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Measure selects the `cases` or `deaths` half of a county block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    Cases,
    Deaths,
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Cases => f.write_str("cases"),
            Measure::Deaths => f.write_str("deaths"),
        }
    }
}

/// AgeScheme is one `age_group_<N>` layout and the counties reporting in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeScheme {
    pub id: AgeGroupId,
    pub measure: Measure,
    pub counties: &'static [&'static str],
    pub brackets: &'static [&'static str],
}

impl AgeScheme {
    /// Blank bracket mapping with every count set to the sentinel.
    pub fn blank(&self) -> BracketCounts {
        BracketCounts::with_sentinels(self.brackets.iter().copied())
    }

    pub fn covers(&self, county: &str) -> bool {
        let county = county.trim();
        self.counties.iter().any(|c| c.eq_ignore_ascii_case(county))
    }

    /// Finds the scheme a county reports `measure` in.
    pub fn lookup(county: &str, measure: Measure) -> Option<&'static AgeScheme> {
        Self::all(measure).iter().find(|s| s.covers(county))
    }

    pub fn all(measure: Measure) -> &'static [AgeScheme] {
        match measure {
            Measure::Cases => &CASE_SCHEMES,
            Measure::Deaths => &DEATH_SCHEMES,
        }
    }
}

const DECADE_BRACKETS: &[&str] = &[
    "30 or younger",
    "31-40",
    "41-50",
    "51-60",
    "61-70",
    "71-80",
    "81-90",
    "90+",
    "Unknown",
];

const SAN_MATEO_BRACKETS: &[&str] = &[
    "0 to 19", "20-29", "30-39", "40-49", "50-59", "60-69", "70-79", "80-89", "90+",
];

const MARIN_BRACKETS: &[&str] = &["0-18", "19-64", "65+"];

pub static CASE_SCHEMES: [AgeScheme; 5] = [
    AgeScheme {
        id: AgeGroupId::nth(1),
        measure: Measure::Cases,
        counties: &["San Francisco", "Santa Clara", "Alameda"],
        brackets: DECADE_BRACKETS,
    },
    AgeScheme {
        id: AgeGroupId::nth(2),
        measure: Measure::Cases,
        counties: &["Marin", "Solano"],
        brackets: MARIN_BRACKETS,
    },
    AgeScheme {
        id: AgeGroupId::nth(3),
        measure: Measure::Cases,
        counties: &["Sonoma", "Napa"],
        brackets: &["0-17", "18-49", "50-64", "64+", "Unknown"],
    },
    AgeScheme {
        id: AgeGroupId::nth(4),
        measure: Measure::Cases,
        counties: &["San Mateo"],
        brackets: SAN_MATEO_BRACKETS,
    },
    AgeScheme {
        id: AgeGroupId::nth(5),
        measure: Measure::Cases,
        counties: &["Contra Costa"],
        brackets: &["0-20", "21-40", "41-60", "61-80", "81-100"],
    },
];

/// Death-by-age data only exists for San Francisco, Santa Clara, Marin and
/// San Mateo.
pub static DEATH_SCHEMES: [AgeScheme; 4] = [
    AgeScheme {
        id: AgeGroupId::nth(1),
        measure: Measure::Deaths,
        counties: &["San Francisco"],
        brackets: &["Under 60", "60+"],
    },
    AgeScheme {
        id: AgeGroupId::nth(2),
        measure: Measure::Deaths,
        counties: &["Santa Clara"],
        brackets: DECADE_BRACKETS,
    },
    AgeScheme {
        id: AgeGroupId::nth(3),
        measure: Measure::Deaths,
        counties: &["Marin"],
        brackets: MARIN_BRACKETS,
    },
    AgeScheme {
        id: AgeGroupId::nth(4),
        measure: Measure::Deaths,
        counties: &["San Mateo"],
        brackets: SAN_MATEO_BRACKETS,
    },
];
