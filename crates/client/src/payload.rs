use serde::Deserialize;
use serde_json::{Map, Value};

/// Response body of `GET /wis/coverage/companies/{lei}/history`.
///
/// Only the keys named here are read; anything else the registry includes
/// is ignored. A body where these keys are missing or mistyped fails
/// deserialization and surfaces as
/// [`ClientError::DataShape`](crate::ClientError::DataShape).
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyHistory {
    pub history: Vec<YearRecord>,
}

/// One reporting year's entry in the history array.
#[derive(Debug, Clone, Deserialize)]
pub struct YearRecord {
    pub reporting_year: i32,
    pub submission: Submission,
}

/// Raw per-year submission: two parallel field maps, one with the reported
/// values and one with their units.
///
/// Fields are heterogeneous (numbers, strings, nulls, lists of per-method
/// breakdowns), so both maps stay untyped until classification decides
/// which entries are emissions observations.
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    pub values: Map<String, Value>,
    pub units: Map<String, Value>,
}
