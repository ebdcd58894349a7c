//! Concurrent fetching of record batches.
//!
//! One GET is issued per ID of a [`PageRange`]; all of them run
//! concurrently on the calling task and the results come back in ID order,
//! whatever order the responses arrive in.
//!
//! Two join strategies are offered:
//! - [`BatchFetcher::fetch_batch`] fails the whole batch on the first item
//!   failure ([`BatchFetchError`]); the other in-flight requests are dropped.
//! - [`BatchFetcher::fetch_batch_settled`] waits for every item and reports
//!   each outcome in a [`BatchReport`].
//!
//! Both reject a range that runs past the last representable ID with
//! [`Error::RangeOverflow`] before any request is sent.

use crate::config::ApiConfig;
use crate::error::{BatchFetchError, Error, HttpStatusError, Result};
use crate::mapper::{map_record, parse_payload};
use crate::types::{PageRange, PokemonId, PokemonRecord};
use futures::future::{join_all, try_join_all};
use tracing::{debug, info, warn};
use url::Url;

/// HTTP client fetching records from `{base}/{id}`
#[derive(Clone, Debug)]
pub struct BatchFetcher {
    /// Shared HTTP client (pooled connections)
    http_client: reqwest::Client,

    /// Base URL, always ending with `/`
    base_url: Url,
}

impl BatchFetcher {
    /// Create a fetcher from API settings
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// created
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = config.parsed_base_url()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Base URL records are requested under
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of a single record
    pub fn record_url(&self, id: PokemonId) -> Result<Url> {
        Ok(self.base_url.join(&id.to_string())?)
    }

    /// Fetch and map a single record
    ///
    /// # Errors
    /// - [`Error::HttpStatus`] when the API answers with a non-success status
    /// - [`Error::Network`] on transport failure
    /// - [`Error::Serialization`] when the body is not a JSON object
    pub async fn fetch_one(&self, id: PokemonId) -> Result<PokemonRecord> {
        let url = self.record_url(id)?;
        debug!(id = %id, url = %url, "fetching record");

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(id = %id, status = status.as_u16(), "record request failed");
            return Err(HttpStatusError {
                id,
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.bytes().await?;
        Ok(map_record(parse_payload(&body)?))
    }

    /// Fetch every record of `range`, all or nothing
    ///
    /// The returned records are in ID order. If any single request fails the
    /// whole batch fails with [`Error::Batch`] and no record is returned.
    pub async fn fetch_batch(&self, range: PageRange) -> Result<Vec<PokemonRecord>> {
        check_range(range)?;
        if range.is_empty() {
            return Ok(Vec::new());
        }

        debug!(start = %range.start, count = range.count, "fetching batch");

        let records = try_join_all(range.ids().map(|id| self.fetch_one(id)))
            .await
            .map_err(|e| BatchFetchError {
                start: range.start,
                count: range.count,
                source: Box::new(e),
            })?;

        info!(start = %range.start, count = records.len(), "batch fetched");
        Ok(records)
    }

    /// Fetch every record of `range`, keeping successes next to failures
    pub async fn fetch_batch_settled(&self, range: PageRange) -> Result<BatchReport> {
        check_range(range)?;
        debug!(start = %range.start, count = range.count, "fetching settled batch");

        let outcomes = join_all(range.ids().map(|id| async move {
            match self.fetch_one(id).await {
                Ok(record) => ItemOutcome::Fetched(record),
                Err(error) => ItemOutcome::Failed { id, error },
            }
        }))
        .await;

        let report = BatchReport { range, outcomes };
        info!(
            start = %range.start,
            fetched = report.records().count(),
            failed = report.failures().count(),
            "settled batch fetched"
        );
        Ok(report)
    }
}

fn check_range(range: PageRange) -> Result<()> {
    if range.fits() {
        Ok(())
    } else {
        Err(Error::RangeOverflow {
            start: range.start,
            count: range.count,
        })
    }
}

/// Result of one item of a settled batch
#[derive(Debug)]
pub enum ItemOutcome {
    /// The record was fetched and mapped
    Fetched(PokemonRecord),
    /// The record could not be fetched
    Failed {
        /// ID that failed
        id: PokemonId,
        /// Why it failed
        error: Error,
    },
}

impl ItemOutcome {
    /// The fetched record, if any
    pub fn record(&self) -> Option<&PokemonRecord> {
        match self {
            ItemOutcome::Fetched(record) => Some(record),
            ItemOutcome::Failed { .. } => None,
        }
    }
}

/// Per-item outcomes of a settled batch, in ID order
#[derive(Debug)]
pub struct BatchReport {
    /// Range that was requested
    pub range: PageRange,
    /// One outcome per ID of the range
    pub outcomes: Vec<ItemOutcome>,
}

impl BatchReport {
    /// Records that were fetched, in ID order
    pub fn records(&self) -> impl Iterator<Item = &PokemonRecord> {
        self.outcomes.iter().filter_map(ItemOutcome::record)
    }

    /// IDs that failed together with their errors
    pub fn failures(&self) -> impl Iterator<Item = (PokemonId, &Error)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            ItemOutcome::Failed { id, error } => Some((*id, error)),
            ItemOutcome::Fetched(_) => None,
        })
    }

    /// True when every item was fetched
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Consume the report, keeping only the fetched records
    pub fn into_records(self) -> Vec<PokemonRecord> {
        self.outcomes
            .into_iter()
            .filter_map(|outcome| match outcome {
                ItemOutcome::Fetched(record) => Some(record),
                ItemOutcome::Failed { .. } => None,
            })
            .collect()
    }
}
