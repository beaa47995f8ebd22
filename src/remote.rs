use std::hash::Hash;

use dupes_client::{RemoteFetchError, RemoteSource};
use serde::de::DeserializeOwned;

use crate::dupes::DuplicateProbe;

/// Check the concatenation of `local` and the sequence served by `source`
/// for duplicates.
///
/// Equivalent to fetching the remote sequence, appending it to `local` and
/// running [`has_duplicates`](crate::dupes::has_duplicates) over the whole;
/// the local values are probed first and the scan stops on the first
/// confirmed repeat. A failed fetch is returned unchanged: no partial
/// result, no local-only fallback.
pub async fn has_duplicates_remote<T>(
    local: &[T],
    source: &RemoteSource,
) -> Result<bool, RemoteFetchError>
where
    T: DeserializeOwned + Eq + Hash,
{
    let remote = source.fetch_values::<T>().await?;
    log::debug!(
        "checking {} local + {} remote values from {}",
        local.len(),
        remote.len(),
        source.url()
    );

    let mut probe = DuplicateProbe::with_capacity(local.len() + remote.len());
    Ok(local
        .iter()
        .chain(remote.iter())
        .any(|value| probe.check(value)))
}
