//! Structural checks over a parsed template.

use crate::domain::{AgeGroups, Measure, SENTINEL, Template};
use std::fmt;

/// ViolationKind describes what is wrong at a given path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// The document holds no county blocks.
    EmptyDocument,
    /// `cases` has no age groups.
    EmptyCases,
    /// `deaths` is present but has no age groups.
    EmptyDeaths,
    /// An age group has no brackets.
    EmptyAgeGroup,
    /// A bracket label is empty or whitespace.
    EmptyLabel,
    /// A count is negative and not the sentinel.
    InvalidCount(i64),
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::EmptyDocument => f.write_str("document has no counties"),
            ViolationKind::EmptyCases => f.write_str("cases has no age groups"),
            ViolationKind::EmptyDeaths => f.write_str("deaths is present but has no age groups"),
            ViolationKind::EmptyAgeGroup => f.write_str("age group has no brackets"),
            ViolationKind::EmptyLabel => f.write_str("bracket label is empty"),
            ViolationKind::InvalidCount(n) => {
                write!(f, "count {} is neither {} nor non-negative", n, SENTINEL)
            }
        }
    }
}

/// Violation is a structural problem found at a dotted path in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

/// Checks every county block. Returns all violations found, in document
/// order; an empty list means the template is well formed.
pub fn validate(template: &Template) -> Vec<Violation> {
    let mut violations = Vec::new();

    if template.is_empty() {
        violations.push(Violation {
            path: String::new(),
            kind: ViolationKind::EmptyDocument,
        });
    }

    for (county, block) in template.counties() {
        let base = format!("{}.data", county);

        check_groups(&base, Measure::Cases, &block.data.cases, &mut violations);
        if let Some(deaths) = &block.data.deaths {
            check_groups(&base, Measure::Deaths, deaths, &mut violations);
        }
    }

    violations
}

fn check_groups(base: &str, measure: Measure, groups: &AgeGroups, out: &mut Vec<Violation>) {
    let path = format!("{}.{}", base, measure);

    if groups.is_empty() {
        let kind = match measure {
            Measure::Cases => ViolationKind::EmptyCases,
            Measure::Deaths => ViolationKind::EmptyDeaths,
        };
        out.push(Violation { path, kind });
        return;
    }

    for (id, counts) in groups {
        let group_path = format!("{}.{}", path, id);

        if counts.is_empty() {
            out.push(Violation {
                path: group_path,
                kind: ViolationKind::EmptyAgeGroup,
            });
            continue;
        }

        for (label, count) in counts.iter() {
            if label.trim().is_empty() {
                out.push(Violation {
                    path: format!("{}.\"{}\"", group_path, label),
                    kind: ViolationKind::EmptyLabel,
                });
            }
            if count < 0 && count != SENTINEL {
                out.push(Violation {
                    path: format!("{}.\"{}\"", group_path, label),
                    kind: ViolationKind::InvalidCount(count),
                });
            }
        }
    }
}
