//! pcf-client — typed client for the published process.org.ai snapshot.
//!
//! The published dataset is a single JSON array at `{base_url}/things.json`.
//! [`ProcessClient`] fetches it lazily, exactly once, and answers every
//! query from the memoized collection. Both success and failure are
//! memoized: a failed fetch is not retried, and the query surface degrades
//! to "no results" rather than erroring (callers that need to distinguish
//! an empty dataset from a failed fetch use [`ProcessClient::load`]).
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use pcf_client::ProcessClient;
//!
//! let client = ProcessClient::with_defaults()?;
//! if let Some(process) = client.get("3.4.2").await {
//!     println!("{}: {}", process.code, process.name);
//! }
//! for hit in client.search("sales").await {
//!     println!("{} {}", hit.hierarchy_id, hit.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
mod loader;

pub use error::{Error, FetchError};

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::OnceCell;
use tracing::warn;

use pcf_core::config::SourceConfig;
use pcf_core::{hierarchy, query, Domain, Process, DOMAIN};

/// Outcome of the one-time fetch, shared by every caller.
type LoadOutcome = Result<Arc<Vec<Process>>, Arc<FetchError>>;

/// Read-only query client over the published process taxonomy.
///
/// The client owns its memo cell; there is no ambient global state. Drop
/// the client and construct a new one to pick up upstream changes — the
/// collection is never refreshed within a client's lifetime.
pub struct ProcessClient {
    http: reqwest::Client,
    source: SourceConfig,
    things: OnceCell<LoadOutcome>,
}

impl ProcessClient {
    /// Construct a client for the given source.
    pub fn new(source: SourceConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(source.timeout_secs))
            .user_agent(source.user_agent.clone())
            .build()
            .map_err(Error::Init)?;

        Ok(Self {
            http,
            source,
            things: OnceCell::new(),
        })
    }

    /// Construct a client against the canonical `https://process.org.ai`
    /// source with default timeouts.
    pub fn with_defaults() -> Result<Self, Error> {
        Self::new(SourceConfig::default())
    }

    /// The URL the snapshot is (or was) fetched from.
    pub fn things_url(&self) -> String {
        format!("{}/things.json", self.source.base_url.trim_end_matches('/'))
    }

    /// Namespace metadata for the dataset. Informational only.
    pub fn domain(&self) -> Domain {
        DOMAIN
    }

    /// The tagged load outcome: the full collection, or the fetch error.
    ///
    /// Triggers the fetch on first call. Concurrent first calls share a
    /// single in-flight request; later calls return the memoized outcome
    /// without touching the network.
    pub async fn load(&self) -> LoadOutcome {
        self.things
            .get_or_init(|| async {
                loader::fetch_things(&self.http, &self.things_url())
                    .await
                    .map(Arc::new)
                    .map_err(Arc::new)
            })
            .await
            .clone()
    }

    /// The memoized collection, degraded to empty if the fetch failed.
    pub async fn things(&self) -> Arc<Vec<Process>> {
        match self.load().await {
            Ok(things) => things,
            Err(err) => {
                warn!(error = %err, "taxonomy unavailable, queries degrade to empty");
                Arc::new(Vec::new())
            }
        }
    }

    /// Look up a process by its taxonomy code (pCFID), or by `@id` equal to
    /// `{base_url}/{code}`. `None` on a miss or when the fetch failed.
    pub async fn get(&self, code: &str) -> Option<Process> {
        let things = self.things().await;
        query::find_by_code(&things, &self.source.base_url, code).cloned()
    }

    /// Case-insensitive substring search over names and descriptions. The
    /// empty query returns the entire collection.
    pub async fn search(&self, text: &str) -> Vec<Process> {
        let things = self.things().await;
        query::search(&things, text).into_iter().cloned().collect()
    }

    /// Look up a process by exact hierarchy ID (e.g. `"1.1.1"`).
    pub async fn get_by_hierarchy_id(&self, hierarchy_id: &str) -> Option<Process> {
        let things = self.things().await;
        query::find_by_hierarchy_id(&things, hierarchy_id).cloned()
    }

    /// All direct children of the given position. Grandchildren are not
    /// included. Malformed IDs are rejected before the collection is
    /// consulted.
    pub async fn get_children(&self, hierarchy_id: &str) -> Result<Vec<Process>, Error> {
        if !hierarchy::is_valid_id(hierarchy_id) {
            return Err(Error::InvalidArgument(format!(
                "not a hierarchy ID: {hierarchy_id:?}"
            )));
        }
        let things = self.things().await;
        Ok(query::children_of(&things, hierarchy_id)
            .into_iter()
            .cloned()
            .collect())
    }

    /// All processes in a category (by category number, e.g. `"1"` or
    /// `"13"`), including the category's own `N.0` root record.
    pub async fn get_by_category(&self, category: &str) -> Result<Vec<Process>, Error> {
        if !hierarchy::is_valid_category(category) {
            return Err(Error::InvalidArgument(format!(
                "not a category number: {category:?}"
            )));
        }
        let things = self.things().await;
        Ok(query::in_category(&things, category)
            .into_iter()
            .cloned()
            .collect())
    }
}

impl std::fmt::Debug for ProcessClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessClient")
            .field("things_url", &self.things_url())
            .field("loaded", &self.things.initialized())
            .finish()
    }
}
