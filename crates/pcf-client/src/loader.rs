//! One-shot snapshot fetch.
//!
//! Called at most once per client lifetime, from inside the memo cell's
//! initializer. No retries: the outcome, good or bad, is what every query
//! for the rest of the process sees.

use pcf_core::Process;
use tracing::{debug, info, warn};

use crate::error::FetchError;

pub(crate) async fn fetch_things(
    http: &reqwest::Client,
    url: &str,
) -> Result<Vec<Process>, FetchError> {
    debug!(url, "fetching process taxonomy snapshot");

    let response = http
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        warn!(url, %status, "taxonomy source returned an error status");
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let things: Vec<Process> =
        response
            .json()
            .await
            .map_err(|source| FetchError::Decode {
                url: url.to_string(),
                source,
            })?;

    info!(url, records = things.len(), "taxonomy snapshot loaded");
    Ok(things)
}
