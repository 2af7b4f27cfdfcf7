use crate::classify::classify_year;
use crate::error::Result;
use crate::payload::CompanyHistory;
use crate::types::HistoricEmissionsScopes;

/// Merge every reporting year of a fetched history into one per-scope
/// record.
///
/// Years are visited in the order the registry returned them and each
/// year's realizations are appended as classified, so the result is not
/// year-sorted and exact duplicates are preserved. An empty record is
/// indistinguishable from a record whose every field was filtered out.
pub fn assemble(history: &CompanyHistory) -> Result<HistoricEmissionsScopes> {
    let mut scopes = HistoricEmissionsScopes::default();

    for record in &history.history {
        for (scope, realization) in classify_year(record.reporting_year, &record.submission)? {
            scopes.push(scope, realization);
        }
    }

    log::debug!(
        "assembled {} realizations from {} reporting years",
        scopes.len(),
        history.history.len()
    );
    Ok(scopes)
}
