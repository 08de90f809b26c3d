//! Domain error types.

/// Errors raised while building or querying template values.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("invalid age group identifier `{0}` (expected age_group_<N>)")]
    InvalidAgeGroupId(String),
    #[error("no reporting scheme known for county `{0}`")]
    UnknownCounty(String),
    #[error("county `{county}` has no {measure} entry for {id}")]
    MissingAgeGroup {
        county: String,
        measure: String,
        id: String,
    },
}
