use std::collections::HashSet;

use futures::stream::FuturesUnordered;
use futures::StreamExt;

use super::{StatusMap, StatusTracker};
use crate::errors::TrackerError;

/// Distinct keys in first-seen order.
pub fn distinct_keys<'a, I>(keys: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    keys.into_iter().filter(|k| seen.insert(*k)).collect()
}

/// Resolves the status of every distinct key.
///
/// All requests are in flight at once and the call returns only after every
/// one of them has settled. If any request failed, the first failure observed
/// is returned and the successful results are discarded.
pub async fn resolve_statuses<'a, I>(
    tracker: &dyn StatusTracker,
    keys: I,
) -> Result<StatusMap, TrackerError>
where
    I: IntoIterator<Item = &'a str>,
{
    let keys = distinct_keys(keys);
    if keys.is_empty() {
        return Ok(StatusMap::new());
    }

    tracing::debug!(
        tracker = tracker.name(),
        distinct_keys = keys.len(),
        "resolving ticket statuses"
    );

    let mut futs: FuturesUnordered<_> = keys
        .into_iter()
        .map(|key| async move { (key, tracker.fetch_status(key).await) })
        .collect();

    let mut out = StatusMap::new();
    let mut first_err: Option<TrackerError> = None;
    while let Some((key, res)) = futs.next().await {
        match res {
            Ok(status) => {
                tracing::trace!(key, status_id = status.id, status_name = %status.name, "status resolved");
                out.insert(key.to_string(), status);
            }
            Err(e) => {
                tracing::debug!(key, error = %e, "status request failed");
                first_err.get_or_insert(e);
            }
        }
    }

    match first_err {
        Some(e) => Err(e),
        None => Ok(out),
    }
}
