//! County blocks and the template document root.

use super::{AgeGroupId, AgeGroupRecord, AgeScheme, BracketCounts, DomainError, Measure, SENTINEL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Age group identifier to bracket mapping, ordered by group index.
pub type AgeGroups = BTreeMap<AgeGroupId, BracketCounts>;

/// CountyData holds the `cases` and `deaths` breakdowns of one county.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountyData {
    pub cases: AgeGroups,
    /// Absent for counties that do not publish deaths by age.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deaths: Option<AgeGroups>,
}

impl CountyData {
    pub fn groups(&self, measure: Measure) -> Option<&AgeGroups> {
        match measure {
            Measure::Cases => Some(&self.cases),
            Measure::Deaths => self.deaths.as_ref(),
        }
    }
}

/// CountyBlock is the per-county subtree: `{ "data": { ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountyBlock {
    pub data: CountyData,
}

impl CountyBlock {
    /// Flattens one age group into records, skipping unpopulated brackets.
    pub fn records(
        &self,
        county: &str,
        measure: Measure,
        id: AgeGroupId,
    ) -> Result<Vec<AgeGroupRecord>, DomainError> {
        let counts = self
            .data
            .groups(measure)
            .and_then(|groups| groups.get(&id))
            .ok_or_else(|| DomainError::MissingAgeGroup {
                county: county.to_string(),
                measure: measure.to_string(),
                id: id.to_string(),
            })?;

        Ok(counts
            .iter()
            .filter(|(_, count)| *count != SENTINEL)
            .map(|(group, raw_count)| AgeGroupRecord {
                group: group.to_string(),
                raw_count,
            })
            .collect())
    }
}

/// Template is the whole document: county name to county block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template {
    counties: BTreeMap<String, CountyBlock>,
}

impl Template {
    /// Builds a template from county name and block pairs. A repeated name
    /// keeps the last block.
    pub fn from_counties<I, S>(counties: I) -> Self
    where
        I: IntoIterator<Item = (S, CountyBlock)>,
        S: Into<String>,
    {
        let mut template = Self::default();
        for (name, block) in counties {
            template.insert(name, block);
        }
        template
    }

    /// The full blank form for one county: every known scheme, all sentinels.
    pub fn blank(county: &str) -> Self {
        let groups = |measure| -> AgeGroups {
            AgeScheme::all(measure)
                .iter()
                .map(|s| (s.id, s.blank()))
                .collect()
        };

        let block = CountyBlock {
            data: CountyData {
                cases: groups(Measure::Cases),
                deaths: Some(groups(Measure::Deaths)),
            },
        };

        Self::from_counties([(county.trim(), block)])
    }

    /// A blank form holding only the schemes the named county reports in.
    pub fn for_county(county: &str) -> Result<Self, DomainError> {
        let cases = AgeScheme::lookup(county, Measure::Cases)
            .ok_or_else(|| DomainError::UnknownCounty(county.to_string()))?;

        let deaths = AgeScheme::lookup(county, Measure::Deaths)
            .map(|s| AgeGroups::from([(s.id, s.blank())]));

        let block = CountyBlock {
            data: CountyData {
                cases: AgeGroups::from([(cases.id, cases.blank())]),
                deaths,
            },
        };

        Ok(Self::from_counties([(county.trim(), block)]))
    }

    pub fn county(&self, name: &str) -> Option<&CountyBlock> {
        self.counties.get(name)
    }

    pub fn counties(&self) -> impl Iterator<Item = (&str, &CountyBlock)> {
        self.counties.iter().map(|(name, block)| (name.as_str(), block))
    }

    /// Adds or replaces a county block, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, block: CountyBlock) -> Option<CountyBlock> {
        self.counties.insert(name.into(), block)
    }

    pub fn len(&self) -> usize {
        self.counties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counties.is_empty()
    }
}
