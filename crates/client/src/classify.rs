use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::payload::Submission;
use crate::types::{EmissionsRealization, GhgScope, Quantity};

/// Suffix marking a submission field as a GHG total. Everything else is an
/// intermediate or descriptive field and is never classified.
const GHG_SUFFIX: &str = "_ghg";

// The scope digit sits in the key as its own underscore-delimited segment,
// as in `total_scope_2_market_based_ghg`. The greedy `.*` makes the capture
// settle on the rightmost such segment when a key carries several.
static SCOPE_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r".*_([123])_").expect("scope segment pattern compiles"));

/// Extract the GHG scope encoded in a submission field key, if any.
///
/// `scope_1_ghg` and `total_scope_3_upstream_ghg` match; `total_ghg` (no
/// digit segment) and `scope_12_ghg` (digit not alone in its segment) do
/// not.
pub fn scope_of_key(key: &str) -> Option<GhgScope> {
    SCOPE_SEGMENT
        .captures(key)
        .and_then(|caps| caps.get(1))
        .and_then(|m| GhgScope::from_digit(m.as_str()))
}

/// Decide which fields of one year's submission are emissions observations
/// and which scope each belongs to.
///
/// A field qualifies when its unit is a single recorded string, its key
/// ends in `_ghg` and carries a scope digit segment, and its value is
/// strictly positive. Everything else is dropped without error, with one
/// class of exceptions: a `_ghg` candidate whose value is missing or
/// non-numeric, or whose unit survives every filter without being a plain
/// string, marks the submission as corrupt and fails the year.
pub fn classify_year(
    year: i32,
    submission: &Submission,
) -> Result<Vec<(GhgScope, EmissionsRealization)>> {
    let mut found = Vec::new();

    for (key, unit) in &submission.units {
        // No unit recorded, or a list of per-method units: the field cannot
        // form a single quantity and is excluded rather than split.
        if matches!(unit, Value::Null | Value::Array(_)) {
            continue;
        }
        if !key.ends_with(GHG_SUFFIX) {
            continue;
        }
        let value = submission.values.get(key).ok_or_else(|| {
            ClientError::DataShape(format!(
                "field '{key}' carries a unit but no value in reporting year {year}"
            ))
        })?;
        let magnitude = value.as_f64().ok_or_else(|| {
            ClientError::DataShape(format!(
                "value of '{key}' in reporting year {year} is not numeric: {value}"
            ))
        })?;
        // Zero and negative figures count as not-an-observation.
        if magnitude <= 0.0 {
            continue;
        }
        let Some(scope) = scope_of_key(key) else {
            continue;
        };
        let unit = unit.as_str().ok_or_else(|| {
            ClientError::DataShape(format!(
                "unit of '{key}' in reporting year {year} is not a string: {unit}"
            ))
        })?;
        found.push((
            scope,
            EmissionsRealization {
                year,
                value: Quantity::new(magnitude, unit),
            },
        ));
    }

    log::debug!(
        "classified {} of {} submission fields for reporting year {year}",
        found.len(),
        submission.units.len()
    );
    Ok(found)
}
