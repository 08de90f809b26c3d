//! Domain models for the per-county age-bracket template.

mod age_group;
mod brackets;
mod county;
mod error;
mod record;
mod scheme;

pub use age_group::AgeGroupId;
pub use brackets::{BracketCounts, SENTINEL};
pub use county::{AgeGroups, CountyBlock, Template};
pub use error::DomainError;
pub use record::AgeGroupRecord;
pub use scheme::{AgeScheme, Measure};

#[cfg(test)]
mod tests;
